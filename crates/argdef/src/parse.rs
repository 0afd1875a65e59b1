use argdef_error::ParseError;
use argdef_lexer::Tokens;

use crate::color::Palette;
use crate::flags::Flags;
use crate::range::expand_range;
use crate::scan::Scanner;
use crate::usage;
use crate::Definition;
use crate::OptionType;

pub(crate) fn parse(definition: &Definition, tokens: Tokens) -> Result<Flags, ParseError> {
    let (mut flags, mut errors) = Scanner::new(definition).scan(tokens);
    finish(definition, &mut flags, &mut errors);

    if flags.is_help() {
        if !errors.is_empty() {
            tracing::debug!(
                suppressed = errors.len(),
                "help requested, ignoring parse errors"
            );
        }
        return Ok(flags);
    }
    let mut errors = errors.into_iter();
    match errors.next() {
        Some(first) => {
            tracing::debug!(error = %first, dropped = errors.len(), "parse failed");
            Err(first)
        }
        None => Ok(flags),
    }
}

/// Expand ranges, fill defaults and check requirements
fn finish(definition: &Definition, flags: &mut Flags, errors: &mut Vec<ParseError>) {
    let mut usage_text = None;
    for (index, spec) in definition.options().iter().enumerate() {
        let slot = flags.slot_mut(index);
        if spec.kind() == OptionType::Range {
            if let Some(value) = slot.as_mut() {
                *value = expand_range(value);
            }
        }
        if slot.is_none() {
            *slot = spec.get_default().cloned();
        }
        if spec.is_required() && flags.slot(index).is_none() {
            let usage = usage_text
                .get_or_insert_with(|| usage::render(definition, None, Palette::plain()))
                .clone();
            errors.push(ParseError::MissingRequired {
                option: spec.name().to_owned(),
                usage,
            });
        }
    }
}
