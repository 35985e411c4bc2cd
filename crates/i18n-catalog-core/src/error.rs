use alloc::string::String;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    EmptyTag,
    InvalidTag { tag: String, reason: &'static str },
}

pub type CoreResult<T> = Result<T, CoreError>;

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::EmptyTag => f.write_str("language tag is empty"),
            CoreError::InvalidTag { tag, reason } => {
                write!(f, "invalid language tag '{tag}': {reason}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}
