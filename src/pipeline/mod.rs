// Pipelines: end-to-end runs over in-memory corpora.

pub mod analysis;
