//! Parse arguments against a JSON option definition and print the result as JSON
//!
//! ```text
//! argdef [OPTIONS] --definition FILE [-- ARGS...]
//! ```

use argdef::Definition;
use argdef::OptionSpec;
use argdef::UsageOptions;
use argdef::Value;
use argdef_error::Error;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

const BANNER: &str = "Usage: argdef [OPTIONS] --definition FILE [-- ARGS...]";

/// Arguments after this belong to the loaded definition
const TERMINATOR: &str = "--";

const EXIT_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    init_tracing();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            anstream::eprintln!("error: {err}");
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}

fn run() -> argdef_error::Result<i32> {
    let raw = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    let (own, args) = match raw.iter().position(|arg| arg == TERMINATOR) {
        Some(split) => (&raw[..split], &raw[split + 1..]),
        None => (&raw[..], &raw[raw.len()..]),
    };

    let cli = cli_definition()?;
    let flags = match argdef::parse_from(&cli, own) {
        Ok(flags) => flags,
        Err(err) => {
            anstream::eprintln!("{err}");
            return Ok(EXIT_USAGE);
        }
    };

    let colors = match flags.get("color").and_then(Value::as_str) {
        Some("always") => {
            anstream::ColorChoice::Always.write_global();
            Some(true)
        }
        Some("never") => {
            anstream::ColorChoice::Never.write_global();
            Some(false)
        }
        _ => None,
    };
    let usage_options = UsageOptions { colors };

    if flags.is_help() {
        anstream::println!("{}", argdef::usage(&cli, Some(BANNER), usage_options));
        return Ok(0);
    }

    let path = flags
        .get("definition")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::msg("`--definition` requires a value"))?;
    tracing::debug!(path, "loading definition");
    let raw_definition = std::fs::read_to_string(path)
        .map_err(|err| Error::msg(format_args!("failed to read `{path}`: {err}")))?;
    let definition = match Definition::from_json_str(&raw_definition) {
        Ok(definition) => definition,
        Err(err) => {
            anstream::eprintln!("{path}: {err}");
            return Ok(EXIT_USAGE);
        }
    };

    if flags.flag("usage") {
        let banner = flags.get("banner").and_then(Value::as_str);
        anstream::println!("{}", argdef::usage(&definition, banner, usage_options));
        return Ok(0);
    }

    tracing::debug!(args = args.len(), "parsing");
    match argdef::parse_from(&definition, args) {
        Ok(flags) => {
            anstream::println!("{}", serde_json::to_string_pretty(&flags)?);
            Ok(0)
        }
        Err(err) => {
            anstream::eprintln!("{err}");
            Ok(EXIT_USAGE)
        }
    }
}

fn cli_definition() -> Result<Definition, argdef::ValidationError> {
    Definition::builder()
        .option(
            "definition",
            OptionSpec::string()
                .alias("d")
                .require()
                .description("JSON file declaring the options"),
        )
        .option(
            "usage",
            OptionSpec::boolean()
                .alias("u")
                .description("Print usage for the definition instead of parsing"),
        )
        .option(
            "banner",
            OptionSpec::string()
                .alias("b")
                .description("Text shown above the options with --usage"),
        )
        .option(
            "color",
            OptionSpec::string()
                .valid(["auto", "always", "never"])
                .default_value("auto")
                .description("Color usage output: auto, always or never"),
        )
        .option(
            "help",
            OptionSpec::help().alias("h").description("Print this help"),
        )
        .build()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
