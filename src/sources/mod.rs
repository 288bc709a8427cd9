pub mod command;
pub mod common;
pub mod configs;
pub mod uic;
pub mod xml;
