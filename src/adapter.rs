//! External analyzer invocation.
//!
//! The analyzer is a separate process: it takes the full document text on
//! stdin, a grammar reference and a mode subcommand as arguments, and prints
//! a JSON descriptor array on stdout. The call is synchronous and happens at
//! most once per highlighting request; the pipeline only starts once the
//! complete descriptor array is back. There is no retry, timeout, or
//! cancellation at this layer — a caller superseded by a newer edit simply
//! discards the stale result.
//!
//! The pipeline depends on the [`Analyzer`] trait rather than the process
//! directly, so tests run against fixed descriptor fixtures without spawning
//! anything.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::descriptor::{AnnotatedDescriptor, Descriptors, FlatDescriptor};
use crate::error::{BridgeError, BridgeResult};

/// Which analyzer front end to invoke, and therefore which descriptor shape
/// to expect back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Lexer output: flat `{id, name, range}` descriptors.
    Flat,
    /// Tree output: `{range, classification?}` descriptors.
    Annotated,
}

impl AnalysisMode {
    /// The analyzer subcommand selecting this mode.
    fn subcommand(self) -> &'static str {
        match self {
            AnalysisMode::Flat => "tokenize",
            AnalysisMode::Annotated => "parse",
        }
    }
}

/// Capability to turn a document snapshot into a descriptor array.
pub trait Analyzer {
    fn analyze(&self, text: &str) -> BridgeResult<Descriptors>;
}

/// Analyzer backed by a synchronous subprocess invocation.
pub struct ProcessAnalyzer {
    program: PathBuf,
    grammar: PathBuf,
    mode: AnalysisMode,
}

impl ProcessAnalyzer {
    pub fn new(program: impl Into<PathBuf>, grammar: impl Into<PathBuf>, mode: AnalysisMode) -> Self {
        ProcessAnalyzer {
            program: program.into(),
            grammar: grammar.into(),
            mode,
        }
    }
}

impl Analyzer for ProcessAnalyzer {
    fn analyze(&self, text: &str) -> BridgeResult<Descriptors> {
        log::debug!(
            target: "lexbridge::adapter",
            "Invoking {:?} {} --grammar {:?}",
            self.program,
            self.mode.subcommand(),
            self.grammar
        );

        let mut child = Command::new(&self.program)
            .arg(self.mode.subcommand())
            .arg("-")
            .arg("--grammar")
            .arg(&self.grammar)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                BridgeError::adapter_failure(format!(
                    "failed to spawn {:?}: {}",
                    self.program, e
                ))
            })?;

        // stdin is piped, so take() always succeeds; the write can still
        // fail if the analyzer exits early.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(|e| {
                BridgeError::adapter_failure(format!(
                    "failed to write document to analyzer: {}",
                    e
                ))
            })?;
        }

        let output = child.wait_with_output().map_err(|e| {
            BridgeError::adapter_failure(format!("failed to collect analyzer output: {}", e))
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BridgeError::adapter_failure(format!(
                "analyzer exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        parse_descriptors(&output.stdout, self.mode)
    }
}

/// Parse the analyzer's stdout into the descriptor shape the mode promises.
pub fn parse_descriptors(output: &[u8], mode: AnalysisMode) -> BridgeResult<Descriptors> {
    let parsed = match mode {
        AnalysisMode::Flat => {
            serde_json::from_slice::<Vec<FlatDescriptor>>(output).map(Descriptors::Flat)
        }
        AnalysisMode::Annotated => {
            serde_json::from_slice::<Vec<AnnotatedDescriptor>>(output).map(Descriptors::Annotated)
        }
    };
    parsed.map_err(|e| BridgeError::adapter_failure(format!("unparsable analyzer output: {}", e)))
}
