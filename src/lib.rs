//! lexbridge bridges an external lexer/parser process and an editor's
//! semantic-highlighting subsystem.
//!
//! The analyzer emits token or syntax-node descriptors with 1-indexed
//! line/column ranges; the editor wants 0-indexed, delta-encoded,
//! legend-indexed integer tuples. The pipeline normalizes each descriptor's
//! range into single-line editor spans, resolves its category against the
//! registered legend (through a static label table in flat mode, or the
//! analyzer's own annotations in annotated mode), and serializes the stream
//! in strict document order.

pub mod adapter;
pub mod analysis;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod legend;
pub mod text;

pub use adapter::{AnalysisMode, Analyzer, ProcessAnalyzer};
pub use analysis::{EncodedToken, LabelTable, Mode, encode};
pub use descriptor::{AnnotatedDescriptor, Classification, Descriptors, FlatDescriptor};
pub use error::{BridgeError, BridgeResult};
pub use legend::{Legend, LegendRegistry};
pub use text::{EditorPosition, EditorRange, SourcePosition, SourceRange};
