use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_no_args_is_interactive() {
    let Ok(Command::Run(config)) = parse_args(args(&[])) else {
        panic!("expected a run command");
    };
    assert!(config.is_interactive());
    assert_eq!(config.format, NumberFormat::Integer);
}

#[test]
fn test_files_in_order() {
    let parsed = parse_args(args(&["a.lspy", "b.lspy"]));
    assert_eq!(
        parsed,
        Ok(Command::Run(Config {
            format: NumberFormat::Integer,
            files: vec![PathBuf::from("a.lspy"), PathBuf::from("b.lspy")],
        }))
    );
}

#[test]
fn test_format_forms() {
    for form in [&["--format=fixed"][..], &["--format", "fixed"][..]] {
        let Ok(Command::Run(config)) = parse_args(args(form)) else {
            panic!("expected a run command for {form:?}");
        };
        assert_eq!(config.format, NumberFormat::Fixed);
    }
}

#[test]
fn test_help_and_version() {
    assert_eq!(parse_args(args(&["-h"])), Ok(Command::Help));
    assert_eq!(parse_args(args(&["x.lspy", "--version"])), Ok(Command::Version));
}

#[test]
fn test_errors() {
    assert_eq!(
        parse_args(args(&["--verbose"])),
        Err(ConfigError::UnknownFlag("--verbose".to_string()))
    );
    assert_eq!(
        parse_args(args(&["--format=hex"])),
        Err(ConfigError::InvalidFormat("hex".to_string()))
    );
    assert_eq!(
        parse_args(args(&["--format"])),
        Err(ConfigError::MissingValue("--format"))
    );
}

#[test]
fn test_usage_mentions_options() {
    let text = usage();
    assert!(text.contains("--format"));
    assert!(text.contains("--help"));
}
