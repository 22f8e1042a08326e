pub mod parser;
pub mod token;
pub mod tokenizer;

pub use parser::Parser;
pub use tokenizer::Tokenizer;
