//! Code generation error types (spec §7.2 "Unsupported construct").

/// Error raised while lowering a resolved `Program` to target text.
///
/// Two cases: a construct the backend has no mapping for yet (a
/// programmer-visible defect, never expected in normal use — spec §7.2),
/// and a formatting failure from the underlying writer.
#[derive(Debug)]
pub enum GenError {
    /// The backend has no mapping for this node kind. Carries the node
    /// kind name so the failure names the offending construct, per spec
    /// §7.2.
    Unsupported(String),
    /// A formatting error while writing to the output buffer.
    Format(std::fmt::Error),
}

impl GenError {
    pub fn unsupported(node_kind: impl Into<String>) -> Self {
        GenError::Unsupported(node_kind.into())
    }
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenError::Unsupported(kind) => {
                write!(f, "not implemented: {kind}")
            }
            GenError::Format(e) => write!(f, "code generation error: {e}"),
        }
    }
}

impl std::error::Error for GenError {}

impl From<std::fmt::Error> for GenError {
    fn from(e: std::fmt::Error) -> Self {
        GenError::Format(e)
    }
}

pub type GenResult<T> = Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_names_the_offending_kind() {
        let err = GenError::unsupported("LockStatement");
        assert_eq!(err.to_string(), "not implemented: LockStatement");
    }
}
