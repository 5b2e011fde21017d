//! Tokenization and word frequency counting

mod frequency;
mod stopwords;
mod tokenizer;

pub use frequency::FrequencyTable;
pub use stopwords::{StopwordError, Stopwords};
pub use tokenizer::Tokenizer;
