pub mod dict;
pub mod index;
pub mod mode;
pub mod rank;
pub mod settings;
pub mod tokenize;

pub use index::{FuzzyOptions, IndexStats, Layer, LayerStats, TermIndex};
pub use mode::Mode;
pub use tokenize::{PrefixSpan, Tokenizer};
