use crate::color::Color;
use crate::color::Palette;
use crate::Definition;
use crate::OptionSpec;

const HEADER: &str = "Options:";
const GUTTER: usize = 4;

const NAMES: Color = Color::Cyan;
const DEFAULT: Color = Color::Yellow;
const REQUIRED: Color = Color::Red;

/// Render `definition` as two aligned columns: names, then description
pub(crate) fn render(definition: &Definition, text: Option<&str>, palette: Palette) -> String {
    let rows = definition
        .options()
        .iter()
        .map(|spec| (names_column(spec), description_column(spec, palette)))
        .collect::<Vec<_>>();
    let width = rows
        .iter()
        .map(|(names, _)| names.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 3);
    if let Some(text) = text {
        lines.push(text.trim_end().to_owned());
        lines.push(String::new());
    }
    lines.push(HEADER.to_owned());
    for (names, description) in rows {
        let pad = width - names.chars().count() + GUTTER;
        let line = format!(
            "{}{:pad$}{description}",
            palette.paint(NAMES, &names),
            ""
        );
        lines.push(line.trim_end().to_owned());
    }
    lines.join("\n")
}

/// `  -<short>, --<long>, ...`
fn names_column(spec: &OptionSpec) -> String {
    let (short, longs) = split_names(spec);
    let mut column = format!("  -{short}");
    for long in longs {
        column.push_str(", --");
        column.push_str(long);
    }
    column
}

/// The shortest name is shown with one dash and the rest with two; ties favor the canonical name
fn split_names(spec: &OptionSpec) -> (&str, Vec<&str>) {
    let names = spec.names().collect::<Vec<_>>();
    let mut shortest = 0;
    for (i, name) in names.iter().enumerate() {
        if name.chars().count() < names[shortest].chars().count() {
            shortest = i;
        }
    }
    let longs = names
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != shortest)
        .map(|(_, name)| *name)
        .collect();
    (names[shortest], longs)
}

fn description_column(spec: &OptionSpec, palette: Palette) -> String {
    let mut parts = Vec::new();
    if let Some(description) = spec.get_description().filter(|d| !d.is_empty()) {
        parts.push(description.to_owned());
    }
    if let Some(default) = spec.get_default() {
        parts.push(palette.paint(DEFAULT, &format!("(default: {default})")));
    }
    if spec.is_required() {
        parts.push(palette.paint(REQUIRED, "(required)"));
    }
    parts.join(" ")
}
