pub mod error;
pub mod ingest;
pub mod resolver;
pub mod runtime;
pub mod sources;
pub mod types;
