//! Error types for `argdef`
//!
//! There are two tiers:
//! - [`ValidationError`]: the definition or an options object has the wrong shape.  These are
//!   reported before any argument is looked at.
//! - [`ParseError`]: the arguments don't fit the definition.  Only the first one encountered is
//!   reported.
//!
//! [`Error`] is a catch-all for binaries that want to `?` everything into one type.
//!
//! ## Example
//! ```no_run
//! use argdef_error::Error;
//! use argdef_error::Result;
//!
//! fn main() -> Result<()> {
//!     let raw = std::fs::read_to_string("definition.json")?;
//!     if raw.trim().is_empty() {
//!         return Err(Error::msg("definition is empty"));
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

/// `Result<T, Error>`
///
/// `argdef_error::Result` may be used with one *or* two type parameters.
///
/// ```rust
/// use argdef_error::Result;
///
/// # const IGNORE: &str = stringify! {
/// fn demo1() -> Result<T> {...}
///            // ^ equivalent to std::result::Result<T, argdef_error::Error>
///
/// fn demo2() -> Result<T, OtherError> {...}
///            // ^ equivalent to std::result::Result<T, OtherError>
/// # };
/// ```
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Catch-all error carrying a printable message
#[derive(Debug)]
pub struct Error {
    msg: String,
}

impl Error {
    /// Create a new error object from a printable error message.
    #[cold]
    pub fn msg<M>(message: M) -> Self
    where
        M: std::fmt::Display,
    {
        Error {
            msg: message.to_string(),
        }
    }
}

impl<E> From<E> for Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[cold]
    fn from(error: E) -> Self {
        Error::msg(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.msg.fmt(formatter)
    }
}

/// The arguments did not fit the definition
///
/// `Display` renders the human-readable message.  For [`ParseError::MissingRequired`] that is
/// the full usage text of the definition, so callers can print it as-is.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A lone `-`
    #[error("Invalid empty '-' option")]
    EmptyShort,
    /// A lone `--`
    #[error("Invalid empty '--' option")]
    EmptyLong,
    /// A flag expecting a value was followed by another flag
    #[error("Missing value for option: {option}")]
    MissingValue {
        /// Canonical name of the option left without a value
        option: String,
    },
    /// The flag is not declared under any name or alias
    #[error("Unknown option: {option}")]
    UnknownOption {
        /// The flag as written, without dashes
        option: String,
    },
    /// A `number` option received something that is not an integer
    #[error("Invalid value (non-number) for option {option}: {value}")]
    NotANumber {
        /// Canonical name of the option
        option: String,
        /// The rejected token
        value: String,
    },
    /// The value is not among the option's permitted values
    #[error("Invalid value for option {option}: {value}")]
    InvalidValue {
        /// Canonical name of the option
        option: String,
        /// The rejected token
        value: String,
    },
    /// A second value for an option that does not accept `multiple`
    #[error("Multiple values are not allowed for option: {option}")]
    MultipleValues {
        /// Canonical name of the option
        option: String,
    },
    /// A required option was never given and has no default
    #[error("{usage}")]
    MissingRequired {
        /// Canonical name of the option
        option: String,
        /// Usage text of the whole definition
        usage: String,
    },
}

impl ParseError {
    /// The human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Canonical name (or the unknown flag) this error is about, if any
    pub fn option(&self) -> Option<&str> {
        match self {
            Self::EmptyShort | Self::EmptyLong => None,
            Self::MissingValue { option }
            | Self::UnknownOption { option }
            | Self::NotANumber { option, .. }
            | Self::InvalidValue { option, .. }
            | Self::MultipleValues { option }
            | Self::MissingRequired { option, .. } => Some(option),
        }
    }
}

/// The definition or an options object is malformed
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The input could not be read as the expected structure
    #[error("invalid {what}: {message}")]
    Shape {
        /// Which structure was being read (`definition`, `parse options`, `usage options`)
        what: &'static str,
        /// What the reader rejected
        message: String,
    },
    /// An option was declared with an empty name
    #[error("option names must not be empty")]
    EmptyName,
    /// A name or alias starts with `-`
    #[error("`{name}` must be given without leading dashes")]
    LeadingDash {
        /// The offending name
        name: String,
    },
    /// The same string is used by two names or aliases
    #[error("`{name}` is declared more than once")]
    DuplicateName {
        /// The repeated name
        name: String,
    },
    /// `default` does not match `type`
    #[error("`default` of `{option}` must be {expected}")]
    DefaultType {
        /// Canonical name of the option
        option: String,
        /// Description of the accepted values
        expected: &'static str,
    },
    /// An entry of `valid` does not match `type`
    #[error("`valid` of `{option}` must only contain {expected}")]
    ValidType {
        /// Canonical name of the option
        option: String,
        /// Description of the accepted values
        expected: &'static str,
    },
}
