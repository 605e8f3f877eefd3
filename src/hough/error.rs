/// Reasons why a transform run is rejected before any scan begins.
#[derive(Clone, Debug, PartialEq)]
pub enum HoughError {
    /// The edge image has no pixels along one of its axes.
    InvalidInput { width: usize, height: usize },
    /// A configuration value is outside its valid range.
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },
}

impl HoughError {
    pub(crate) fn config(parameter: &'static str, reason: impl Into<String>) -> Self {
        HoughError::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for HoughError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoughError::InvalidInput { width, height } => {
                write!(f, "invalid edge image: {width}x{height} has no pixels")
            }
            HoughError::InvalidConfiguration { parameter, reason } => {
                write!(f, "invalid configuration `{parameter}`: {reason}")
            }
        }
    }
}

impl std::error::Error for HoughError {}
