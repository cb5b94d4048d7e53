//! Default legend and label-table values.
//!
//! These defaults describe the grammar-definition language of the bundled
//! analyzer, so the CLI works against it out of the box. Hosts embedding the
//! pipeline for other languages register their own legend and supply their
//! own table.

use crate::analysis::LabelTable;
use crate::legend::Legend;

/// Token types of the grammar language's legend.
pub const GRAMMAR_TYPES: &[&str] = &[
    "regexp", "variable", "comment", "string", "number", "keyword", "operator",
];

/// Returns the legend registered for the grammar language.
pub fn grammar_legend() -> Legend {
    Legend::new(GRAMMAR_TYPES.iter().copied(), Vec::<String>::new())
}

/// Returns the label table mapping the grammar language's lexer labels to
/// legend token types.
pub fn grammar_label_table() -> LabelTable {
    let pairs = [
        // Punctuation and structure
        ("LEAD", "operator"),
        ("LT", "operator"),
        ("GT", "operator"),
        ("UNION", "operator"),
        ("DEFINE", "operator"),
        ("IGNORE", "operator"),
        ("AT", "operator"),
        ("SEMICOLON", "operator"),
        ("COLON", "operator"),
        ("COMMA", "operator"),
        ("DOT", "operator"),
        ("UNFOLD", "operator"),
        ("LBRACE", "operator"),
        ("RBRACE", "operator"),
        ("LBRACKET", "operator"),
        ("RBRACKET", "operator"),
        // Literal keywords
        ("EMPTY", "keyword"),
        ("NULL", "keyword"),
        ("TRUE", "keyword"),
        ("FALSE", "keyword"),
        // Value-carrying tokens
        ("STRING", "string"),
        ("NUMBER", "number"),
        ("ID", "variable"),
        ("REGEX", "regexp"),
        ("COMMENT", "comment"),
    ];

    pairs
        .into_iter()
        .map(|(label, token_type)| (label.to_string(), token_type.to_string()))
        .collect()
}
