// Scoring — decayed engagement scoring for individual posts.

pub mod engagement;
