//! Classification of descriptors into token type and modifier names.
//!
//! Classification runs in one of two modes, chosen once per request:
//!
//! - flat mode applies a static label table uniformly. The analyzer's lexer
//!   labels carry no type/modifier decision, so the table is the single
//!   source of truth; a label missing from it means the table and the
//!   grammar have drifted apart and the request fails.
//! - annotated mode trusts the analyzer: each descriptor carries its own
//!   optional classification, with an open modifier set.
//!
//! `None` from either mode means "do not highlight"; such descriptors never
//! reach the encoder.

use std::collections::HashMap;

use crate::descriptor::{AnnotatedDescriptor, FlatDescriptor};
use crate::error::{BridgeError, BridgeResult};

/// Static label → token type table for flat mode.
pub type LabelTable = HashMap<String, String>;

/// Structural sentinel labels the lexer emits for whitespace runs and
/// unrecognized input. They are not highlightable categories and are
/// excluded regardless of the table contents.
pub const RESERVED_LABELS: &[&str] = &["SPACE", "<ERR>"];

/// A resolved type/modifier pair, ready for legend lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenClass {
    pub token_type: String,
    pub modifiers: Vec<String>,
}

/// Classification strategy for one highlighting request.
#[derive(Clone, Copy, Debug)]
pub enum Mode<'a> {
    /// Look every label up in a static table; flat tokens never carry
    /// modifiers.
    Flat(&'a LabelTable),
    /// Use the classification the analyzer attached to each descriptor.
    Annotated,
}

/// Classify a flat-mode descriptor through the label table.
///
/// Reserved sentinel labels yield `None`; any other label absent from the
/// table is an [`BridgeError::UnknownClassification`] — silently skipping it
/// would turn a table/grammar version mismatch into missing highlighting
/// that is hard to diagnose.
pub fn classify_flat(
    descriptor: &FlatDescriptor,
    table: &LabelTable,
) -> BridgeResult<Option<TokenClass>> {
    if RESERVED_LABELS.contains(&descriptor.name.as_str()) {
        return Ok(None);
    }
    let token_type = table
        .get(&descriptor.name)
        .ok_or_else(|| BridgeError::unknown_classification(&descriptor.name))?;
    Ok(Some(TokenClass {
        token_type: token_type.clone(),
        modifiers: Vec::new(),
    }))
}

/// Classify an annotated-mode descriptor. An absent classification means
/// the analyzer chose not to highlight this node.
pub fn classify_annotated(descriptor: &AnnotatedDescriptor) -> Option<TokenClass> {
    descriptor
        .classification
        .as_ref()
        .map(|classification| TokenClass {
            token_type: classification.token_type.clone(),
            modifiers: classification.modifiers.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Classification;
    use crate::text::SourceRange;

    fn table() -> LabelTable {
        [
            ("KEYWORD".to_string(), "keyword".to_string()),
            ("ID".to_string(), "variable".to_string()),
        ]
        .into_iter()
        .collect()
    }

    fn flat(name: &str) -> FlatDescriptor {
        FlatDescriptor {
            id: 0,
            name: name.to_string(),
            range: SourceRange::new((1, 1), (1, 2)),
        }
    }

    #[test]
    fn test_flat_lookup() {
        let class = classify_flat(&flat("KEYWORD"), &table()).unwrap().unwrap();
        assert_eq!(class.token_type, "keyword");
        assert!(class.modifiers.is_empty());
    }

    #[test]
    fn test_flat_reserved_labels_excluded() {
        assert_eq!(classify_flat(&flat("SPACE"), &table()).unwrap(), None);
        assert_eq!(classify_flat(&flat("<ERR>"), &table()).unwrap(), None);
    }

    #[test]
    fn test_flat_reserved_label_excluded_even_if_mapped() {
        let mut table = table();
        table.insert("SPACE".to_string(), "comment".to_string());
        assert_eq!(classify_flat(&flat("SPACE"), &table).unwrap(), None);
    }

    #[test]
    fn test_flat_unknown_label_fails() {
        let err = classify_flat(&flat("UNMAPPED"), &table()).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::UnknownClassification { name } if name == "UNMAPPED"
        ));
    }

    #[test]
    fn test_annotated_absent_classification_excluded() {
        let descriptor = AnnotatedDescriptor {
            range: SourceRange::new((1, 1), (1, 2)),
            classification: None,
        };
        assert_eq!(classify_annotated(&descriptor), None);
    }

    #[test]
    fn test_annotated_classification_used_verbatim() {
        let descriptor = AnnotatedDescriptor {
            range: SourceRange::new((1, 1), (1, 2)),
            classification: Some(Classification {
                token_type: "function".to_string(),
                modifiers: vec!["async".to_string(), "declaration".to_string()],
            }),
        };
        let class = classify_annotated(&descriptor).unwrap();
        assert_eq!(class.token_type, "function");
        assert_eq!(class.modifiers, vec!["async", "declaration"]);
    }
}
