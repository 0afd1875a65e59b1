use std::collections::HashMap;

use crate::Definition;

/// Every name and alias, pointing at the option's index in the [`Definition`]
///
/// Aliases share the index of their canonical name, so whatever is stored for one is seen by
/// all of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Table {
    index: HashMap<String, usize>,
}

impl Table {
    pub(crate) fn new(definition: &Definition) -> Self {
        let mut index = HashMap::new();
        for (i, spec) in definition.options().iter().enumerate() {
            for name in spec.names() {
                index.insert(name.to_owned(), i);
            }
        }
        Self { index }
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }
}
