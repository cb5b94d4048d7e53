//! Semantic token legend and the process-wide legend registry.
//!
//! The legend is the ordered vocabulary of token type and modifier names the
//! editor registered for a language. Encoded tokens reference types and
//! modifiers by index into this vocabulary, never by name.

use std::sync::Arc;

use dashmap::DashMap;

use crate::error::{BridgeError, BridgeResult};

/// Token type names of the standard editor legend.
pub const STANDARD_TYPES: &[&str] = &[
    "comment",
    "keyword",
    "string",
    "number",
    "regexp",
    "operator",
    "namespace",
    "type",
    "struct",
    "class",
    "interface",
    "enum",
    "enumMember",
    "typeParameter",
    "function",
    "method",
    "macro",
    "variable",
    "parameter",
    "property",
    "event",
    "modifier",
    "decorator",
];

/// Modifier names of the standard editor legend.
pub const STANDARD_MODIFIERS: &[&str] = &[
    "declaration",
    "definition",
    "readonly",
    "static",
    "deprecated",
    "abstract",
    "async",
    "modification",
    "documentation",
    "defaultLibrary",
];

/// Ordered type and modifier vocabulary for one registered language.
/// Immutable after construction; concurrent lookups need no synchronization.
#[derive(Clone, Debug)]
pub struct Legend {
    types: Vec<String>,
    modifiers: Vec<String>,
}

impl Legend {
    pub fn new(
        types: impl IntoIterator<Item = impl Into<String>>,
        modifiers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Legend {
            types: types.into_iter().map(Into::into).collect(),
            modifiers: modifiers.into_iter().map(Into::into).collect(),
        }
    }

    /// The standard editor legend: every token type and modifier the
    /// protocol predefines.
    pub fn standard() -> Self {
        Legend::new(STANDARD_TYPES.iter().copied(), STANDARD_MODIFIERS.iter().copied())
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    /// Index of a token type name in the legend.
    pub fn type_index(&self, name: &str) -> BridgeResult<u32> {
        self.types
            .iter()
            .position(|t| t == name)
            .map(|index| index as u32)
            .ok_or_else(|| BridgeError::unknown_classification(name))
    }

    /// Bitwise-OR of `1 << index` for each modifier name. Fails on the
    /// first name absent from the legend.
    pub fn modifier_bitset(&self, names: &[String]) -> BridgeResult<u32> {
        let mut bitset = 0u32;
        for name in names {
            let index = self
                .modifiers
                .iter()
                .position(|m| m == name)
                .ok_or_else(|| BridgeError::unknown_classification(name))?;
            bitset |= 1 << index;
        }
        Ok(bitset)
    }
}

/// Process-wide registry of legends, keyed by language identifier.
///
/// A legend is registered once per language at activation time and never
/// mutated afterwards; `register` on an already-registered language keeps
/// the existing legend.
#[derive(Debug, Default)]
pub struct LegendRegistry {
    legends: DashMap<String, Arc<Legend>>,
}

impl LegendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the legend for a language and return a handle to it.
    ///
    /// Registration is first-wins: a second call for the same language
    /// returns the original legend unchanged, since encoded streams already
    /// delivered to the editor reference its indices.
    pub fn register(
        &self,
        language: impl Into<String>,
        types: impl IntoIterator<Item = impl Into<String>>,
        modifiers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Arc<Legend> {
        let language = language.into();
        if let Some(existing) = self.legends.get(&language) {
            log::warn!(
                target: "lexbridge::legend",
                "Legend for '{}' already registered; keeping the existing one",
                language
            );
            return Arc::clone(&existing);
        }
        let legend = Arc::new(Legend::new(types, modifiers));
        let entry = self.legends.entry(language).or_insert(legend);
        Arc::clone(entry.value())
    }

    /// Look up the legend registered for a language.
    pub fn get(&self, language: &str) -> Option<Arc<Legend>> {
        self.legends.get(language).map(|entry| Arc::clone(&entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_index() {
        let legend = Legend::standard();
        assert_eq!(legend.type_index("comment").unwrap(), 0);
        assert_eq!(legend.type_index("keyword").unwrap(), 1);
        assert_eq!(legend.type_index("function").unwrap(), 14);
        assert_eq!(legend.type_index("variable").unwrap(), 17);
    }

    #[test]
    fn test_type_index_unknown_fails() {
        let legend = Legend::standard();
        let err = legend.type_index("spell").unwrap_err();
        assert!(matches!(
            err,
            BridgeError::UnknownClassification { name } if name == "spell"
        ));
    }

    #[test]
    fn test_modifier_bitset() {
        let legend = Legend::standard();
        assert_eq!(legend.modifier_bitset(&[]).unwrap(), 0);

        let bitset = legend
            .modifier_bitset(&["readonly".to_string(), "defaultLibrary".to_string()])
            .unwrap();
        assert_eq!(bitset, (1 << 2) | (1 << 9));
    }

    #[test]
    fn test_modifier_bitset_unknown_fails() {
        let legend = Legend::standard();
        assert!(
            legend
                .modifier_bitset(&["notAModifier".to_string()])
                .is_err()
        );
    }

    #[test]
    fn test_registry_first_registration_wins() {
        let registry = LegendRegistry::new();
        let first = registry.register("grammar", ["keyword", "string"], Vec::<String>::new());
        let second = registry.register("grammar", ["string"], Vec::<String>::new());

        // The second registration must not replace the first.
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.types(), &["keyword", "string"]);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = LegendRegistry::new();
        assert!(registry.get("grammar").is_none());

        registry.register("grammar", ["keyword"], Vec::<String>::new());
        let legend = registry.get("grammar").unwrap();
        assert_eq!(legend.type_index("keyword").unwrap(), 0);
    }
}
