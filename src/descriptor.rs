//! Descriptor types produced by the external analyzer.
//!
//! The analyzer runs in one of two modes per request, and the shape of its
//! JSON output differs accordingly:
//!
//! - flat mode: `{id, name, range}` — a raw lexical label, classified later
//!   through a static label table;
//! - annotated mode: `{range, classification?}` — the analyzer has already
//!   chosen a token type and modifiers; descriptors without a classification
//!   are not highlighted.

use serde::Deserialize;

use crate::text::SourceRange;

/// One lexical token from a flat-mode analyzer run.
#[derive(Clone, Debug, Deserialize)]
pub struct FlatDescriptor {
    /// Token kind id assigned by the analyzer. Carried through parsing but
    /// not consulted for classification.
    #[serde(default)]
    pub id: u32,
    /// Raw lexical category label, e.g. `KEYWORD` or `STRING`.
    pub name: String,
    pub range: SourceRange,
}

/// A type/modifier choice made by the analyzer itself (annotated mode).
#[derive(Clone, Debug, Deserialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub token_type: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
}

/// One syntax node from an annotated-mode analyzer run.
#[derive(Clone, Debug, Deserialize)]
pub struct AnnotatedDescriptor {
    pub range: SourceRange,
    /// Absent means "not highlighted"; the descriptor is skipped entirely.
    #[serde(default)]
    pub classification: Option<Classification>,
}

/// The full descriptor array for one highlighting request, tagged by the
/// mode the analyzer ran in.
#[derive(Clone, Debug)]
pub enum Descriptors {
    Flat(Vec<FlatDescriptor>),
    Annotated(Vec<AnnotatedDescriptor>),
}

impl Descriptors {
    pub fn len(&self) -> usize {
        match self {
            Descriptors::Flat(items) => items.len(),
            Descriptors::Annotated(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
