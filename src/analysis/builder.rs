//! Delta encoding of the token stream.
//!
//! The editor protocol represents each token's position relative to the
//! previous one: a token on a new line carries its raw character offset, a
//! token on the same line carries the offset from the previous token's
//! start. The builder accumulates single-line spans, stable-sorts them by
//! document position (multi-line splits arrive interleaved across
//! descriptors), and serializes the five-integer tuples.

use serde::Serialize;

use crate::error::BridgeResult;
use crate::legend::Legend;
use crate::text::EditorRange;

/// One delta-encoded token: five non-negative integers per the protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EncodedToken {
    pub delta_line: u32,
    pub delta_start: u32,
    pub length: u32,
    pub token_type: u32,
    pub token_modifiers_bitset: u32,
}

/// A token with absolute position and resolved legend indices, before
/// delta encoding.
#[derive(Clone, Copy, Debug)]
struct RawToken {
    line: u32,
    start: u32,
    length: u32,
    token_type: u32,
    modifiers: u32,
}

/// Accumulates classified single-line spans and encodes them on `build`.
pub struct TokenStreamBuilder<'a> {
    legend: &'a Legend,
    tokens: Vec<RawToken>,
}

impl<'a> TokenStreamBuilder<'a> {
    pub fn new(legend: &'a Legend) -> Self {
        TokenStreamBuilder {
            legend,
            tokens: Vec::new(),
        }
    }

    /// Add one single-line span. Type and modifier names are resolved
    /// against the legend immediately, so an unknown name fails the request
    /// before any encoding happens.
    pub fn push(
        &mut self,
        range: EditorRange,
        token_type: &str,
        modifiers: &[String],
    ) -> BridgeResult<()> {
        let token_type = self.legend.type_index(token_type)?;
        let modifiers = self.legend.modifier_bitset(modifiers)?;
        self.tokens.push(RawToken {
            line: range.start.line,
            start: range.start.character,
            length: range.length(),
            token_type,
            modifiers,
        });
        Ok(())
    }

    /// Sort the accumulated tokens by document position and delta-encode.
    ///
    /// The sort is stable so tokens with equal start positions keep their
    /// arrival order. Overlapping or duplicate-start tokens are encoded
    /// as-is; dropping a token silently would degrade highlighting in a way
    /// the caller cannot observe.
    pub fn build(mut self) -> Vec<EncodedToken> {
        self.tokens
            .sort_by_key(|token| (token.line, token.start));

        let mut last_line = 0;
        let mut last_start = 0;
        let mut data = Vec::with_capacity(self.tokens.len());

        for token in self.tokens {
            let delta_line = token.line - last_line;
            let delta_start = if delta_line == 0 {
                token.start - last_start
            } else {
                token.start
            };

            data.push(EncodedToken {
                delta_line,
                delta_start,
                length: token.length,
                token_type: token.token_type,
                token_modifiers_bitset: token.modifiers,
            });

            last_line = token.line;
            last_start = token.start;
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::EditorPosition;

    fn span(line: u32, start: u32, end: u32) -> EditorRange {
        EditorRange {
            start: EditorPosition {
                line,
                character: start,
            },
            end: EditorPosition {
                line,
                character: end,
            },
        }
    }

    #[test]
    fn test_same_line_delta() {
        let legend = Legend::standard();
        let mut builder = TokenStreamBuilder::new(&legend);
        builder.push(span(0, 4, 7), "keyword", &[]).unwrap();
        builder.push(span(0, 10, 12), "variable", &[]).unwrap();

        let tokens = builder.build();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].delta_line, 0);
        assert_eq!(tokens[0].delta_start, 4);
        assert_eq!(tokens[0].length, 3);
        // Same line: offset relative to the previous token's start.
        assert_eq!(tokens[1].delta_line, 0);
        assert_eq!(tokens[1].delta_start, 6);
        assert_eq!(tokens[1].length, 2);
    }

    #[test]
    fn test_new_line_uses_raw_offset() {
        let legend = Legend::standard();
        let mut builder = TokenStreamBuilder::new(&legend);
        builder.push(span(0, 8, 9), "number", &[]).unwrap();
        builder.push(span(1, 2, 5), "keyword", &[]).unwrap();

        let tokens = builder.build();
        assert_eq!(tokens[1].delta_line, 1);
        assert_eq!(tokens[1].delta_start, 2);
    }

    #[test]
    fn test_first_token_encodes_raw_line() {
        let legend = Legend::standard();
        let mut builder = TokenStreamBuilder::new(&legend);
        builder.push(span(3, 1, 2), "string", &[]).unwrap();

        let tokens = builder.build();
        assert_eq!(tokens[0].delta_line, 3);
        assert_eq!(tokens[0].delta_start, 1);
    }

    #[test]
    fn test_out_of_order_input_is_sorted() {
        let legend = Legend::standard();
        let mut builder = TokenStreamBuilder::new(&legend);
        builder.push(span(2, 0, 1), "keyword", &[]).unwrap();
        builder.push(span(0, 3, 4), "variable", &[]).unwrap();
        builder.push(span(0, 0, 2), "comment", &[]).unwrap();

        let tokens = builder.build();
        assert_eq!(tokens[0].delta_line, 0);
        assert_eq!(tokens[0].delta_start, 0);
        assert_eq!(tokens[1].delta_line, 0);
        assert_eq!(tokens[1].delta_start, 3);
        assert_eq!(tokens[2].delta_line, 2);
        assert_eq!(tokens[2].delta_start, 0);
    }

    #[test]
    fn test_modifier_bitset_resolution() {
        let legend = Legend::standard();
        let mut builder = TokenStreamBuilder::new(&legend);
        builder
            .push(
                span(0, 0, 4),
                "variable",
                &["readonly".to_string(), "defaultLibrary".to_string()],
            )
            .unwrap();

        let tokens = builder.build();
        assert_eq!(tokens[0].token_type, 17);
        assert_eq!(tokens[0].token_modifiers_bitset, (1 << 2) | (1 << 9));
    }

    #[test]
    fn test_unknown_type_fails_on_push() {
        let legend = Legend::standard();
        let mut builder = TokenStreamBuilder::new(&legend);
        assert!(builder.push(span(0, 0, 1), "nonsense", &[]).is_err());
    }

    #[test]
    fn test_zero_length_token_is_kept() {
        let legend = Legend::standard();
        let mut builder = TokenStreamBuilder::new(&legend);
        builder.push(span(0, 5, 5), "variable", &[]).unwrap();

        let tokens = builder.build();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].length, 0);
    }

    #[test]
    fn test_duplicate_start_tokens_are_not_deduplicated() {
        let legend = Legend::standard();
        let mut builder = TokenStreamBuilder::new(&legend);
        builder.push(span(1, 3, 6), "keyword", &[]).unwrap();
        builder.push(span(1, 3, 4), "variable", &[]).unwrap();

        let tokens = builder.build();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].delta_line, 0);
        assert_eq!(tokens[1].delta_start, 0);
    }
}
