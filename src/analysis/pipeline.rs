//! The per-request encoding pipeline.
//!
//! One document snapshot and one descriptor array in, one delta-encoded
//! token stream out. The pipeline is synchronous, performs no I/O, and
//! shares nothing mutable across requests; the legend is the only state
//! that outlives a request and it is immutable.

use crate::analysis::builder::{EncodedToken, TokenStreamBuilder};
use crate::analysis::classify::{Mode, TokenClass, classify_annotated, classify_flat};
use crate::analysis::normalize::line_spans;
use crate::descriptor::Descriptors;
use crate::error::{BridgeError, BridgeResult};
use crate::legend::Legend;
use crate::text::{SourceRange, split_lines};

/// Encode one highlighting request.
///
/// Each descriptor is classified, its range split into single-line spans
/// against the snapshot, and the spans delta-encoded in document order.
/// Descriptors the classifier excludes contribute nothing to the stream.
/// Any malformed range or unknown name fails the whole request; partial
/// output with silently wrong offsets is worse than none.
pub fn encode(
    text: &str,
    descriptors: &Descriptors,
    mode: Mode<'_>,
    legend: &Legend,
) -> BridgeResult<Vec<EncodedToken>> {
    log::debug!(
        target: "lexbridge::pipeline",
        "Encoding {} descriptors",
        descriptors.len()
    );

    let lines = split_lines(text);
    let mut builder = TokenStreamBuilder::new(legend);

    match (mode, descriptors) {
        (Mode::Flat(table), Descriptors::Flat(items)) => {
            for descriptor in items {
                let Some(class) = classify_flat(descriptor, table)? else {
                    continue;
                };
                push_spans(&mut builder, descriptor.range, &class, &lines)?;
            }
        }
        (Mode::Annotated, Descriptors::Annotated(items)) => {
            for descriptor in items {
                let Some(class) = classify_annotated(descriptor) else {
                    continue;
                };
                push_spans(&mut builder, descriptor.range, &class, &lines)?;
            }
        }
        _ => {
            // The adapter is invoked with the same mode as the pipeline, so
            // a shape mismatch means its output contract was violated.
            return Err(BridgeError::adapter_failure(
                "descriptor shape does not match the requested classification mode",
            ));
        }
    }

    Ok(builder.build())
}

fn push_spans(
    builder: &mut TokenStreamBuilder<'_>,
    range: SourceRange,
    class: &TokenClass,
    lines: &[&str],
) -> BridgeResult<()> {
    for span in line_spans(range, lines)? {
        builder.push(span, &class.token_type, &class.modifiers)?;
    }
    Ok(())
}
