//! Declarative argument parsing and usage rendering
//!
//! Describe the options once in a [`Definition`], then:
//! - [`parse`] / [`parse_from`] turn argument tokens into [`Flags`], or the first
//!   [`ParseError`] encountered
//! - [`usage`] renders the same definition as aligned, optionally colored help text
//!
//! Short flags may be combined (`-vq`) and a number may be packed onto its flag (`-t5`).
//! Every option is reachable through its name and all of its aliases.  When a `help` option is
//! present, errors are ignored so the caller can print usage instead.
//!
//! ## Example
//!
//! ```rust
//! use argdef::Definition;
//! use argdef::OptionSpec;
//! use argdef::Value;
//!
//! let definition = Definition::builder()
//!     .option("verbose", OptionSpec::boolean().alias("v"))
//!     .option("time", OptionSpec::number().alias("t").require())
//!     .option("pages", OptionSpec::range().alias("p"))
//!     .build()?;
//!
//! let flags = argdef::parse_from(&definition, ["-vt5", "-p", "3-1", "input"])?;
//! assert!(flags.flag("v"));
//! assert_eq!(flags.get("time"), Some(&Value::Number(5)));
//! assert_eq!(flags.get("pages"), Some(&Value::from(vec![3_i64, 2, 1])));
//! assert_eq!(flags.positional(), ["input"]);
//!
//! let err = argdef::parse_from(&definition, ["-z"]).unwrap_err();
//! assert_eq!(err.to_string(), "Unknown option: z");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations, elided_lifetimes_in_paths)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

mod color;
mod definition;
mod flags;
mod options;
mod parse;
mod range;
mod scan;
mod table;
mod usage;
mod value;

pub use argdef_error::ParseError;
pub use argdef_error::ValidationError;
pub use color::Color;
pub use color::Palette;
pub use color::UnknownColor;
pub use definition::Definition;
pub use definition::DefinitionBuilder;
pub use definition::OptionSpec;
pub use definition::OptionType;
pub use flags::Flags;
pub use flags::POSITIONAL;
pub use options::ParseOptions;
pub use options::UsageOptions;
pub use range::expand_range;
pub use range::MAX_SPAN;
pub use value::Value;

/// Parse `options.argv`, or the process arguments after the binary name
pub fn parse(definition: &Definition, options: ParseOptions) -> Result<Flags, ParseError> {
    match options.argv {
        Some(argv) => parse_from(definition, argv),
        None => parse_from(
            definition,
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        ),
    }
}

/// Parse `args` against `definition`
///
/// Returns the flags, or the first error in the order it was encountered.  If a `help` option
/// was given, all errors are ignored and the flags are returned as far as they got.
pub fn parse_from<I, T>(definition: &Definition, args: I) -> Result<Flags, ParseError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    parse::parse(definition, argdef_lexer::Tokens::new(args))
}

/// Render help text for `definition`, optionally preceded by `text`
pub fn usage(definition: &Definition, text: Option<&str>, options: UsageOptions) -> String {
    usage::render(definition, text, Palette::new(options.colors))
}
