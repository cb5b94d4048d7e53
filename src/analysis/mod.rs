//! The range-normalization and encoding pipeline.

pub mod builder;
pub mod classify;
pub mod normalize;
pub mod pipeline;

pub use builder::{EncodedToken, TokenStreamBuilder};
pub use classify::{LabelTable, Mode, RESERVED_LABELS, TokenClass};
pub use normalize::{LineSpans, line_spans};
pub use pipeline::encode;
