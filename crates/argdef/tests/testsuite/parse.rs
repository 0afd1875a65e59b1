use argdef::Definition;
use argdef::OptionSpec;
use argdef::ParseError;
use argdef::ParseOptions;
use argdef::UsageOptions;
use argdef::Value;

fn definition() -> Definition {
    Definition::builder()
        .option("verbose", OptionSpec::boolean().alias("v"))
        .option("quiet", OptionSpec::boolean().alias("q"))
        .option("time", OptionSpec::number().alias("t"))
        .option("name", OptionSpec::string().alias("n"))
        .option("include", OptionSpec::string().alias("I").multiple())
        .option("mode", OptionSpec::string().valid(["fast", "slow"]))
        .option("help", OptionSpec::help().alias("h"))
        .build()
        .unwrap()
}

#[test]
fn booleans_default_to_false() {
    let flags = argdef::parse_from(&definition(), Vec::<String>::new()).unwrap();
    assert_eq!(flags.get("verbose"), Some(&Value::Bool(false)));
    assert_eq!(flags.get("q"), Some(&Value::Bool(false)));
    assert!(!flags.contains("time"));
    assert!(!flags.is_help());
    assert!(flags.positional().is_empty());
}

#[test]
fn booleans_set_anywhere() {
    for args in [
        vec!["-v", "a", "b"],
        vec!["a", "-v", "b"],
        vec!["a", "b", "--verbose"],
    ] {
        let flags = argdef::parse_from(&definition(), args.clone()).unwrap();
        assert!(flags.flag("verbose"), "{args:?}");
        assert!(flags.flag("v"), "{args:?}");
        assert!(!flags.flag("quiet"), "{args:?}");
        assert_eq!(flags.positional(), ["a", "b"], "{args:?}");
    }
}

#[test]
fn boolean_default_is_kept() {
    let definition = Definition::builder()
        .option("color", OptionSpec::boolean().default_value(true))
        .build()
        .unwrap();
    let flags = argdef::parse_from(&definition, Vec::<String>::new()).unwrap();
    assert!(flags.flag("color"));
}

#[test]
fn combined_shorts() {
    let flags = argdef::parse_from(&definition(), ["-vq"]).unwrap();
    assert!(flags.flag("verbose"));
    assert!(flags.flag("quiet"));
}

#[test]
fn packed_number() {
    let definition = Definition::builder()
        .option("t", OptionSpec::number().require())
        .build()
        .unwrap();
    let flags = argdef::parse_from(&definition, ["-t5"]).unwrap();
    assert_eq!(flags.get("t"), Some(&Value::Number(5)));
    assert_eq!(
        serde_json::to_value(&flags).unwrap(),
        serde_json::json!({"t": 5, "_": []})
    );
}

#[test]
fn packed_number_after_boolean() {
    let flags = argdef::parse_from(&definition(), ["-vt12", "rest"]).unwrap();
    assert!(flags.flag("v"));
    assert_eq!(flags.get("t"), Some(&Value::Number(12)));
    assert_eq!(flags.positional(), ["rest"]);
}

#[test]
fn number_ending_a_cluster_takes_next_token() {
    let flags = argdef::parse_from(&definition(), ["-vt", "5", "rest"]).unwrap();
    assert!(flags.flag("verbose"));
    assert_eq!(flags.get("time"), Some(&Value::Number(5)));
    assert_eq!(flags.positional(), ["rest"]);

    let flags = argdef::parse_from(&definition(), ["-vt"]).unwrap();
    assert!(!flags.contains("time"));
    assert!(flags.positional().is_empty());
}

#[test]
fn multiple_numbers_accumulate() {
    let definition = Definition::builder()
        .option("time", OptionSpec::number().alias("t").multiple())
        .build()
        .unwrap();
    let flags = argdef::parse_from(&definition, ["-t", "1", "-t2", "--time", "3"]).unwrap();
    assert_eq!(flags.get("t"), Some(&Value::from(vec![1_i64, 2, 3])));

    let flags = argdef::parse_from(&definition, ["-t7"]).unwrap();
    assert_eq!(flags.get("time"), Some(&Value::from(vec![7_i64])));
}

#[test]
fn packed_non_number() {
    let err = argdef::parse_from(&definition(), ["-tx"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::NotANumber {
            option: "time".to_owned(),
            value: "x".to_owned()
        }
    );
    assert_eq!(err.to_string(), "Invalid value (non-number) for option time: x");
}

#[test]
fn string_cluster_is_not_split() {
    // only numbers take the rest of the cluster; `n` then looks up `x`
    let err = argdef::parse_from(&definition(), ["-nx"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingValue {
            option: "name".to_owned()
        }
    );
}

#[test]
fn value_through_alias_is_seen_by_all_names() {
    let flags = argdef::parse_from(&definition(), ["--n", "joe"]).unwrap();
    assert_eq!(flags.get("name"), Some(&Value::from("joe")));
    assert_eq!(flags.get("n"), Some(&Value::from("joe")));
}

#[test]
fn multiple_accumulates_in_order() {
    let flags = argdef::parse_from(&definition(), ["-I", "a", "--include", "b", "-I", "c"]).unwrap();
    assert_eq!(flags.get("include"), Some(&Value::from(vec!["a", "b", "c"])));
    assert_eq!(flags.get("I"), flags.get("include"));
}

#[test]
fn multiple_single_occurrence_is_a_list() {
    let flags = argdef::parse_from(&definition(), ["-I", "a"]).unwrap();
    assert_eq!(flags.get("include"), Some(&Value::from(vec!["a"])));
}

#[test]
fn repeated_single_value_fails() {
    let err = argdef::parse_from(&definition(), ["-n", "a", "-n", "b"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Multiple values are not allowed for option: name"
    );

    let err = argdef::parse_from(&definition(), ["-t", "1", "-t2"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::MultipleValues {
            option: "time".to_owned()
        }
    );
}

#[test]
fn unknown_option() {
    let err = argdef::parse_from(&definition(), ["-z"]).unwrap_err();
    assert_eq!(err.to_string(), "Unknown option: z");

    let err = argdef::parse_from(&definition(), ["--zebra"]).unwrap_err();
    assert_eq!(err.to_string(), "Unknown option: zebra");
}

#[test]
fn unknown_option_leaves_no_key() {
    let flags = argdef::parse_from(&definition(), ["-z", "-h"]).unwrap();
    assert!(!flags.contains("z"));
    let json = serde_json::to_value(&flags).unwrap();
    assert!(json.get("z").is_none(), "{json}");
}

#[test]
fn empty_dashes() {
    let err = argdef::parse_from(&definition(), ["-"]).unwrap_err();
    assert_eq!(err, ParseError::EmptyShort);
    assert_eq!(err.to_string(), "Invalid empty '-' option");

    let err = argdef::parse_from(&definition(), ["--", "x"]).unwrap_err();
    assert_eq!(err, ParseError::EmptyLong);
    assert_eq!(err.to_string(), "Invalid empty '--' option");
}

#[test]
fn missing_value_before_next_flag() {
    let err = argdef::parse_from(&definition(), ["-t", "-v"]).unwrap_err();
    assert_eq!(err.to_string(), "Missing value for option: time");
}

#[test]
fn dangling_flag_at_end_is_not_an_error() {
    let flags = argdef::parse_from(&definition(), ["-t"]).unwrap();
    assert!(!flags.contains("time"));
}

#[test]
fn only_first_error_is_reported() {
    let err = argdef::parse_from(&definition(), ["-z", "-t", "abc", "-"]).unwrap_err();
    assert_eq!(err.to_string(), "Unknown option: z");
}

#[test]
fn invalid_value() {
    let err = argdef::parse_from(&definition(), ["--mode", "medium"]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for option mode: medium");

    let flags = argdef::parse_from(&definition(), ["--mode", "slow"]).unwrap();
    assert_eq!(flags.get("mode"), Some(&Value::from("slow")));
}

#[test]
fn rejected_value_is_not_positional() {
    let flags = argdef::parse_from(&definition(), ["--mode", "medium", "-h"]).unwrap();
    assert!(!flags.contains("mode"));
    assert!(flags.positional().is_empty());
}

#[test]
fn valid_numbers() {
    let definition = Definition::builder()
        .option("level", OptionSpec::number().valid([1_i64, 2, 3]))
        .build()
        .unwrap();
    let flags = argdef::parse_from(&definition, ["--level", "2"]).unwrap();
    assert_eq!(flags.get("level"), Some(&Value::Number(2)));
    let err = argdef::parse_from(&definition, ["--level", "4"]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for option level: 4");
}

#[test]
fn help_suppresses_errors() {
    let flags = argdef::parse_from(&definition(), ["-z", "--help", "-t", "nope"]).unwrap();
    assert!(flags.is_help());
    assert!(flags.flag("h"));
    assert!(!flags.contains("time"));
}

#[test]
fn help_anywhere_in_a_cluster() {
    let flags = argdef::parse_from(&definition(), ["-vh"]).unwrap();
    assert!(flags.is_help());
    assert!(flags.flag("verbose"));
}

#[test]
fn defaults_fill_unset() {
    let definition = Definition::builder()
        .option("name", OptionSpec::string().default_value("anon"))
        .option("count", OptionSpec::number().default_value(3_i64))
        .build()
        .unwrap();
    let flags = argdef::parse_from(&definition, Vec::<String>::new()).unwrap();
    assert_eq!(flags.get("name"), Some(&Value::from("anon")));
    assert_eq!(flags.get("count"), Some(&Value::Number(3)));

    let flags = argdef::parse_from(&definition, ["--count", "9"]).unwrap();
    assert_eq!(flags.get("count"), Some(&Value::Number(9)));
}

#[test]
fn required_missing_reports_usage() {
    let definition = Definition::builder()
        .option("t", OptionSpec::number().require())
        .build()
        .unwrap();
    let err = argdef::parse_from(&definition, Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, ParseError::MissingRequired { .. }));
    assert_eq!(
        err.to_string(),
        argdef::usage(&definition, None, UsageOptions::new().colors(false))
    );
    assert_eq!(err.to_string(), "Options:\n  -t    (required)");
}

#[test]
fn required_satisfied_by_default() {
    let definition = Definition::builder()
        .option("t", OptionSpec::number().require().default_value(1_i64))
        .build()
        .unwrap();
    let flags = argdef::parse_from(&definition, Vec::<String>::new()).unwrap();
    assert_eq!(flags.get("t"), Some(&Value::Number(1)));
}

#[test]
fn scan_errors_come_before_missing_required() {
    let definition = Definition::builder()
        .option("t", OptionSpec::number().require())
        .build()
        .unwrap();
    let err = argdef::parse_from(&definition, ["-x"]).unwrap_err();
    assert_eq!(err.to_string(), "Unknown option: x");
}

#[test]
fn ranges_expand() {
    let definition = Definition::builder()
        .option("pages", OptionSpec::range().alias("p"))
        .option("many", OptionSpec::range().multiple())
        .option("fallback", OptionSpec::range().default_value("1-2"))
        .build()
        .unwrap();
    let flags = argdef::parse_from(
        &definition,
        ["-p", "3-1,7", "--many", "1", "--many", "4-5"],
    )
    .unwrap();
    assert_eq!(flags.get("p"), Some(&Value::from(vec![3_i64, 2, 1, 7])));
    assert_eq!(flags.get("many"), Some(&Value::from(vec![1_i64, 4, 5])));
    // defaults are taken as declared
    assert_eq!(flags.get("fallback"), Some(&Value::from("1-2")));
}

#[test]
fn resolving_twice_is_identical() {
    let definition = definition();
    let args = ["-v", "-I", "x", "--name", "joe", "file"];
    let first = argdef::parse_from(&definition, args).unwrap();
    let second = argdef::parse_from(&definition, args).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn parse_options_argv() {
    let flags = argdef::parse(&definition(), ParseOptions::new().argv(["-q"])).unwrap();
    assert!(flags.flag("quiet"));
}

#[test]
fn serialized_with_every_alias() {
    let flags = argdef::parse_from(&definition(), ["-v", "--name", "joe", "a"]).unwrap();
    assert_eq!(
        serde_json::to_value(&flags).unwrap(),
        serde_json::json!({
            "verbose": true,
            "v": true,
            "quiet": false,
            "q": false,
            "name": "joe",
            "n": "joe",
            "_": ["a"],
        })
    );
    let keys = flags.iter().map(|(key, _)| key).collect::<Vec<_>>();
    assert_eq!(keys, ["verbose", "v", "quiet", "q", "name", "n"]);
}
