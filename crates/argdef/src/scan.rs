use argdef_error::ParseError;
use argdef_lexer::Token;
use argdef_lexer::Tokens;

use crate::flags::Flags;
use crate::table::Table;
use crate::Definition;
use crate::OptionSpec;
use crate::OptionType;
use crate::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Free,
    /// The option at this index still needs its value
    Awaiting(usize),
}

/// Single pass over the tokens, collecting every error along the way
#[derive(Debug)]
pub(crate) struct Scanner<'d> {
    definition: &'d Definition,
    table: Table,
    state: State,
    flags: Flags,
    errors: Vec<ParseError>,
}

impl<'d> Scanner<'d> {
    pub(crate) fn new(definition: &'d Definition) -> Self {
        let table = Table::new(definition);
        tracing::trace!(names = table.len(), "lookup table built");
        Self {
            definition,
            flags: Flags::new(definition, table.clone()),
            table,
            state: State::Free,
            errors: Vec::new(),
        }
    }

    pub(crate) fn scan(mut self, mut tokens: Tokens) -> (Flags, Vec<ParseError>) {
        while let Some(raw) = tokens.next_token() {
            tracing::trace!(token = %raw, state = ?self.state, "scanning");
            match Token::classify(&raw) {
                Token::EmptyShort => self.errors.push(ParseError::EmptyShort),
                Token::EmptyLong => self.errors.push(ParseError::EmptyLong),
                Token::Long(name) => {
                    self.flag(name);
                }
                Token::Shorts(mut shorts) => {
                    while let Some((name, rest)) = shorts.next_flag() {
                        let packed = self
                            .flag(name)
                            .is_some_and(|spec| spec.kind() == OptionType::Number);
                        if packed && !rest.is_empty() {
                            tracing::trace!(option = name, value = rest, "splitting packed number");
                            tokens.push_front(rest);
                            break;
                        }
                    }
                }
                Token::Value(value) => self.value(value),
            }
        }
        if let State::Awaiting(index) = self.state {
            tracing::trace!(
                option = self.definition.options()[index].name(),
                "input ended while awaiting a value"
            );
        }
        (self.flags, self.errors)
    }

    fn flag(&mut self, name: &str) -> Option<&'d OptionSpec> {
        if let State::Awaiting(pending) = std::mem::replace(&mut self.state, State::Free) {
            self.errors.push(ParseError::MissingValue {
                option: self.definition.options()[pending].name().to_owned(),
            });
        }

        let Some(index) = self.table.lookup(name) else {
            self.errors.push(ParseError::UnknownOption {
                option: name.to_owned(),
            });
            return None;
        };
        let spec = &self.definition.options()[index];
        match spec.kind() {
            OptionType::Help => {
                self.flags.set(index, Value::Bool(true));
                self.flags.set_help();
            }
            kind if kind.takes_value() => self.state = State::Awaiting(index),
            _ => self.flags.set(index, Value::Bool(true)),
        }
        Some(spec)
    }

    fn value(&mut self, raw: &str) {
        let State::Awaiting(index) = std::mem::replace(&mut self.state, State::Free) else {
            self.flags.push_positional(raw);
            return;
        };
        let spec = &self.definition.options()[index];

        let value = if spec.kind() == OptionType::Number {
            match raw.parse::<i64>() {
                Ok(n) => Value::Number(n),
                Err(_) => {
                    self.errors.push(ParseError::NotANumber {
                        option: spec.name().to_owned(),
                        value: raw.to_owned(),
                    });
                    return;
                }
            }
        } else {
            Value::String(raw.to_owned())
        };

        if let Some(valid) = spec.valid_values() {
            if !valid.contains(&value) {
                self.errors.push(ParseError::InvalidValue {
                    option: spec.name().to_owned(),
                    value: raw.to_owned(),
                });
                return;
            }
        }

        let slot = self.flags.slot_mut(index);
        match slot {
            Some(current) if spec.is_multiple() => current.push(value),
            Some(_) => self.errors.push(ParseError::MultipleValues {
                option: spec.name().to_owned(),
            }),
            None => {
                *slot = Some(if spec.is_multiple() {
                    Value::List(vec![value])
                } else {
                    value
                });
            }
        }
    }
}
