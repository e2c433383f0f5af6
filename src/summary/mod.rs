// Digest summarization — turning selected posts into a short blurb.

pub mod template;
pub mod traits;
