// Ember: catch-up digest ranking for a small social feed
//
// This is the library root. Each module corresponds to one stage of the
// digest pipeline: load a feed snapshot, score posts by decayed engagement,
// gate and select the digest, then summarize and display it.

pub mod config;
pub mod digest;
pub mod feed;
pub mod output;
pub mod scoring;
pub mod session;
pub mod summary;
