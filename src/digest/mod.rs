// Digest selection — gating and ranking for the catch-up digest.

pub mod selector;
