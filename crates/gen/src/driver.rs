//! The external driver (spec §6 "External interfaces").
//!
//! `translate` is the single entry point downstream of a fully resolved
//! `Program` — the lexer, parser, and resolver that would produce one
//! from source text are a separate, out-of-scope component (SPEC_FULL
//! §2 "Workspace shape"). This module owns the single-threaded
//! open-file → write-bytes → close-file discipline (spec §5) and the
//! three-way error split the CLI surfaces to its caller (spec §7).

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use xlate_ast::Program;

use crate::backend::{self, Target};
use crate::config::CompilerConfig;
use crate::error::GenError;

/// The three error classes named in spec §7, unified at the driver
/// boundary.
#[derive(Debug)]
pub enum TranslateError {
    /// §7.1: a parse/resolve failure upstream of code generation. No
    /// code in this workspace produces this variant (there is no
    /// frontend here to fail) — it exists so a caller that does own a
    /// frontend can report through the same error type `translate`
    /// returns, shaped `path(line): ERROR: msg`.
    Upstream {
        path: String,
        line: u32,
        message: String,
    },
    /// §7.2: the backend has no mapping for a construct.
    Gen(GenError),
    /// §7.3: an I/O failure. Partially written files are left on disk;
    /// retrying is expected to overwrite them.
    Io(io::Error),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::Upstream { path, line, message } => {
                write!(f, "{path}({line}): ERROR: {message}")
            }
            TranslateError::Gen(e) => write!(f, "{e}"),
            TranslateError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<GenError> for TranslateError {
    fn from(e: GenError) -> Self {
        TranslateError::Gen(e)
    }
}

impl From<io::Error> for TranslateError {
    fn from(e: io::Error) -> Self {
        TranslateError::Io(e)
    }
}

/// Writes `program` as `target`'s surface syntax to `out_path` (spec §6
/// "Output"). `config` is accepted for parity with the CLI surface (it
/// governs what a frontend loads upstream of this call — `-D`, `-r`,
/// `-I`) but code generation itself reads only `program` and
/// `namespace`.
pub fn translate(
    program: &Program,
    target: Target,
    out_path: &Path,
    namespace: Option<&str>,
    _config: &CompilerConfig,
) -> Result<(), TranslateError> {
    let text = backend::write_program(program, target, namespace)?;
    let mut file = File::create(out_path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}
