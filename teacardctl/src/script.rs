//! Navigation scripts for `teacardctl navigate`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
    GoTo(isize),
    /// Report the running transition as finished.
    Settle,
    Resize(u32),
    /// Paint frame: runs the pending height pass.
    Frame,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepParseError {
    #[error("unknown step '{0}' (expected next, prev, goto:N, settle, resize:PX or frame)")]
    Unknown(String),
    #[error("invalid argument for '{step}': {raw:?}")]
    BadArgument { step: &'static str, raw: String },
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (s, None),
        };

        match (name.to_ascii_lowercase().as_str(), arg) {
            ("next", None) => Ok(Step::Next),
            ("prev", None) => Ok(Step::Prev),
            ("settle", None) => Ok(Step::Settle),
            ("frame", None) => Ok(Step::Frame),
            ("goto", Some(raw)) => raw.parse().map(Step::GoTo).map_err(|_| {
                StepParseError::BadArgument {
                    step: "goto",
                    raw: raw.to_string(),
                }
            }),
            ("resize", Some(raw)) => raw.parse().map(Step::Resize).map_err(|_| {
                StepParseError::BadArgument {
                    step: "resize",
                    raw: raw.to_string(),
                }
            }),
            _ => Err(StepParseError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next => f.write_str("next"),
            Step::Prev => f.write_str("prev"),
            Step::GoTo(index) => write!(f, "goto:{index}"),
            Step::Settle => f.write_str("settle"),
            Step::Resize(width) => write!(f, "resize:{width}"),
            Step::Frame => f.write_str("frame"),
        }
    }
}
