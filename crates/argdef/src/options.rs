use argdef_error::ValidationError;

use crate::definition::shape_error;

/// Options for [`parse`][crate::parse]
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseOptions {
    /// Tokens to parse; `None` reads the process arguments after the binary name
    #[serde(default)]
    pub argv: Option<Vec<String>>,
}

impl ParseOptions {
    /// Read the process arguments
    pub fn new() -> Self {
        Default::default()
    }

    /// Parse these tokens instead of the process arguments
    pub fn argv<I, T>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.argv = Some(argv.into_iter().map(Into::into).collect());
        self
    }

    /// Read `{ "argv"?: [string] }`
    pub fn from_json_str(raw: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(raw).map_err(|err| shape_error("parse options", err))
    }
}

/// Options for [`usage`][crate::usage]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsageOptions {
    /// Force color on or off; `None` colors only when stdout and stderr are terminals
    #[serde(default)]
    pub colors: Option<bool>,
}

impl UsageOptions {
    /// Detect color support
    pub fn new() -> Self {
        Default::default()
    }

    /// Force color on or off
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Read `{ "colors"?: boolean | null }`
    pub fn from_json_str(raw: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(raw).map_err(|err| shape_error("usage options", err))
    }
}
