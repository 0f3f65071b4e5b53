/// Errors that can occur when parsing a named option (cadence, theme)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNameError {
    /// Input did not match any known name
    Unknown {
        kind: &'static str,
        input: String,
        expected: &'static [&'static str],
    },
}

impl std::fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseNameError::Unknown {
                kind,
                input,
                expected,
            } => {
                write!(
                    f,
                    "Unknown {} '{}': expected one of {}",
                    kind,
                    input,
                    expected.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ParseNameError {}
