pub mod adapter;
pub mod blocks;
pub mod discover;
pub mod outline;
pub mod parser;
