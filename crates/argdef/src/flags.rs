use serde::ser::SerializeMap as _;

use crate::table::Table;
use crate::Definition;
use crate::OptionType;
use crate::Value;

/// Key holding the positional (non-flag) tokens when serialized
pub const POSITIONAL: &str = "_";

/// Parse result: one slot per declared option, reachable through any of its names
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flags {
    keys: Vec<Vec<String>>,
    table: Table,
    slots: Vec<Option<Value>>,
    positional: Vec<String>,
    help: bool,
}

impl Flags {
    /// Empty slots, with `boolean` options seeded from their default or `false`
    pub(crate) fn new(definition: &Definition, table: Table) -> Self {
        let keys = definition
            .options()
            .iter()
            .map(|spec| spec.names().map(ToOwned::to_owned).collect())
            .collect();
        let slots = definition
            .options()
            .iter()
            .map(|spec| match spec.kind() {
                OptionType::Boolean => {
                    Some(spec.get_default().cloned().unwrap_or(Value::Bool(false)))
                }
                _ => None,
            })
            .collect();
        Self {
            keys,
            table,
            slots,
            positional: Vec::new(),
            help: false,
        }
    }

    /// Value of the option known by `name` (canonical or alias)
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.table.lookup(name)?;
        self.slots[index].as_ref()
    }

    /// Whether the option known by `name` resolved to any value
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether the option known by `name` is `true`
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Tokens that were neither flags nor flag values, in order
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Whether a `help` option was given
    pub fn is_help(&self) -> bool {
        self.help
    }

    /// Every name and alias with its value, in declaration order; unset options are skipped
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.keys
            .iter()
            .zip(&self.slots)
            .filter_map(|(keys, slot)| slot.as_ref().map(|value| (keys, value)))
            .flat_map(|(keys, value)| keys.iter().map(move |key| (key.as_str(), value)))
    }

    pub(crate) fn slot(&self, index: usize) -> Option<&Value> {
        self.slots[index].as_ref()
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Option<Value> {
        &mut self.slots[index]
    }

    pub(crate) fn set(&mut self, index: usize, value: Value) {
        self.slots[index] = Some(value);
    }

    pub(crate) fn push_positional(&mut self, value: &str) {
        self.positional.push(value.to_owned());
    }

    pub(crate) fn set_help(&mut self) {
        self.help = true;
    }
}

impl serde::Serialize for Flags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(POSITIONAL, &self.positional)?;
        map.end()
    }
}
