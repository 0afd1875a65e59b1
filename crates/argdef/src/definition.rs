use std::collections::HashSet;

use argdef_error::ValidationError;
use indexmap::IndexMap;

use crate::Value;

/// How an option's value is read
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Takes the next token as-is
    #[default]
    String,
    /// Takes no value; present means `true`, absent means `false`
    Boolean,
    /// Takes the next token as an integer, may be packed as `-t5`
    Number,
    /// Takes the next token as a list of numbers and `from-to` spans
    Range,
    /// Takes no value; suppresses parse errors when present
    Help,
}

impl OptionType {
    /// Whether the option consumes the following token
    pub fn takes_value(self) -> bool {
        matches!(self, Self::String | Self::Number | Self::Range)
    }

    /// Name as written in a JSON definition
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Range => "range",
            Self::Help => "help",
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration of a single option
///
/// Build one with the type constructors ([`OptionSpec::string`], [`OptionSpec::boolean`], ...)
/// and the chained setters, or read it from JSON as part of a [`Definition`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionSpec {
    #[serde(skip)]
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(rename = "type", default)]
    kind: OptionType,
    #[serde(default)]
    multiple: bool,
    #[serde(default)]
    default: Option<Value>,
    #[serde(default)]
    require: bool,
    #[serde(default)]
    valid: Option<Vec<Value>>,
    #[serde(default)]
    description: Option<String>,
}

impl OptionSpec {
    /// An option of `kind` with nothing else set
    pub fn new(kind: OptionType) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// See [`OptionType::String`]
    pub fn string() -> Self {
        Self::new(OptionType::String)
    }

    /// See [`OptionType::Boolean`]
    pub fn boolean() -> Self {
        Self::new(OptionType::Boolean)
    }

    /// See [`OptionType::Number`]
    pub fn number() -> Self {
        Self::new(OptionType::Number)
    }

    /// See [`OptionType::Range`]
    pub fn range() -> Self {
        Self::new(OptionType::Range)
    }

    /// See [`OptionType::Help`]
    pub fn help() -> Self {
        Self::new(OptionType::Help)
    }

    /// Add an alternate name; an empty alias means "no long form" and is ignored
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Accumulate repeated values into a list instead of rejecting them
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Value used when the option is not given
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Fail the parse when the option is absent and has no default
    pub fn require(mut self) -> Self {
        self.require = true;
        self
    }

    /// Only accept these values
    pub fn valid<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.valid = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Shown next to the names in usage
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Canonical name, stamped when the [`Definition`] is built
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternate names, in declaration order
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The canonical name followed by every alias
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// How the value is read
    pub fn kind(&self) -> OptionType {
        self.kind
    }

    /// Whether repeated values accumulate
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Value used when the option is not given
    pub fn get_default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Whether a parse fails without this option
    pub fn is_required(&self) -> bool {
        self.require
    }

    /// Permitted values, if restricted
    pub fn valid_values(&self) -> Option<&[Value]> {
        self.valid.as_deref()
    }

    /// Usage text for the option
    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A validated set of options, in declaration order
///
/// The only ways to get one are [`Definition::builder`] and the `from_json_*` constructors,
/// both of which check the shape, so parsing and rendering never fail on a bad definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Definition {
    options: Vec<OptionSpec>,
}

impl Definition {
    /// Start declaring options in Rust
    pub fn builder() -> DefinitionBuilder {
        DefinitionBuilder::new()
    }

    /// Read a definition from a JSON object of `name: { ...option }` entries
    pub fn from_json_str(raw: &str) -> Result<Self, ValidationError> {
        let entries: IndexMap<String, OptionSpec> =
            serde_json::from_str(raw).map_err(|err| shape_error("definition", err))?;
        Self::from_entries(entries)
    }

    /// Like [`Definition::from_json_str`], for an already parsed document
    pub fn from_json_value(raw: serde_json::Value) -> Result<Self, ValidationError> {
        let entries: IndexMap<String, OptionSpec> =
            serde_json::from_value(raw).map_err(|err| shape_error("definition", err))?;
        Self::from_entries(entries)
    }

    fn from_entries(entries: IndexMap<String, OptionSpec>) -> Result<Self, ValidationError> {
        entries
            .into_iter()
            .fold(DefinitionBuilder::new(), |builder, (name, spec)| {
                builder.option(name, spec)
            })
            .build()
    }

    /// Options in declaration order; the position is the option's index
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Look up an option by its canonical name
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.name == name)
    }

    /// Number of declared options
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether no option is declared
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Collects options for a [`Definition`]
///
/// See [`DefinitionBuilder::build`]
#[derive(Debug, Default)]
pub struct DefinitionBuilder {
    entries: Vec<(String, OptionSpec)>,
}

impl DefinitionBuilder {
    /// No options yet
    pub fn new() -> Self {
        Default::default()
    }

    /// Declare `spec` under the canonical `name`
    pub fn option(mut self, name: impl Into<String>, spec: OptionSpec) -> Self {
        self.entries.push((name.into(), spec));
        self
    }

    /// Stamp names, drop empty aliases and check everything fits together
    pub fn build(self) -> Result<Definition, ValidationError> {
        let mut seen = HashSet::new();
        let mut options = Vec::with_capacity(self.entries.len());
        for (name, mut spec) in self.entries {
            spec.name = name;
            spec.aliases.retain(|alias| !alias.is_empty());

            if spec.name.is_empty() {
                return Err(ValidationError::EmptyName);
            }
            for key in spec.names() {
                if key.starts_with('-') {
                    return Err(ValidationError::LeadingDash {
                        name: key.to_owned(),
                    });
                }
                if !seen.insert(key.to_owned()) {
                    return Err(ValidationError::DuplicateName {
                        name: key.to_owned(),
                    });
                }
            }
            check_default(&spec)?;
            check_valid(&spec)?;

            options.push(spec);
        }
        tracing::trace!(options = options.len(), "definition built");
        Ok(Definition { options })
    }
}

fn check_default(spec: &OptionSpec) -> Result<(), ValidationError> {
    let Some(default) = &spec.default else {
        return Ok(());
    };
    let is_number = |v: &Value| matches!(v, Value::Number(_));
    let is_string = |v: &Value| matches!(v, Value::String(_));
    let list_of = |v: &Value, item: &dyn Fn(&Value) -> bool| {
        v.as_list().is_some_and(|list| list.iter().all(item))
    };

    let (fits, expected) = match spec.kind {
        OptionType::Boolean | OptionType::Help => {
            (matches!(default, Value::Bool(_)), "a boolean")
        }
        OptionType::Number if spec.multiple => (
            is_number(default) || list_of(default, &is_number),
            "an integer or a list of integers",
        ),
        OptionType::Number => (is_number(default), "an integer"),
        OptionType::String if spec.multiple => (
            is_string(default) || list_of(default, &is_string),
            "a string or a list of strings",
        ),
        OptionType::String => (is_string(default), "a string"),
        OptionType::Range => {
            let item = |v: &Value| is_number(v) || is_string(v);
            (
                item(default) || list_of(default, &item),
                "an integer, a string or a list of those",
            )
        }
    };
    if fits {
        Ok(())
    } else {
        Err(ValidationError::DefaultType {
            option: spec.name.clone(),
            expected,
        })
    }
}

fn check_valid(spec: &OptionSpec) -> Result<(), ValidationError> {
    let Some(valid) = &spec.valid else {
        return Ok(());
    };
    let (fits, expected) = match spec.kind {
        OptionType::Number => (
            valid.iter().all(|v| matches!(v, Value::Number(_))),
            "integers",
        ),
        _ => (
            valid.iter().all(|v| matches!(v, Value::String(_))),
            "strings",
        ),
    };
    if fits {
        Ok(())
    } else {
        Err(ValidationError::ValidType {
            option: spec.name.clone(),
            expected,
        })
    }
}

pub(crate) fn shape_error(what: &'static str, err: serde_json::Error) -> ValidationError {
    ValidationError::Shape {
        what,
        message: err.to_string(),
    }
}
