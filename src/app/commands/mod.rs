pub mod generate;
pub mod prompt;
