// Feed input — the post model and snapshot loading.

pub mod models;
pub mod store;
