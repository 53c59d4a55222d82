// Analyzer module: per-row price and highlight rules.

pub mod assembler;
pub mod highlight;
pub mod price;

pub use assembler::RowAssembler;
pub use highlight::HighlightClassifier;
pub use price::PriceNormalizer;
