pub mod corpus;
pub mod logging;
pub mod output;
pub mod text_source;
