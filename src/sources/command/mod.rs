pub mod token_index;
