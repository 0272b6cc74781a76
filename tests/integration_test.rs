use anyhow::Result;
use numerology::config::{Config, OutputFormat};
use numerology::constants::{INVALID_NAME_MESSAGE, UNRECOGNIZED_NUMBER_MESSAGE};
use numerology::{catalog, compute_value, describe, is_valid, Calculator};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_short_name_is_rejected_with_fixed_message() {
    assert!(!is_valid("AB"));

    let reading = Calculator::default().calculate("AB");
    assert_eq!(reading.text, INVALID_NAME_MESSAGE);
}

#[test]
fn test_ana_lima_end_to_end() {
    assert!(is_valid("Ana Lima"));
    assert_eq!(compute_value("Ana Lima"), 6);
    assert_eq!(describe(compute_value("Ana Lima")), catalog::describe(6));
    assert!(describe(6).contains("É a Família"));
}

#[test]
fn test_zero_is_unrecognized() {
    assert_eq!(describe(0), UNRECOGNIZED_NUMBER_MESSAGE);
}

#[test]
fn test_every_value_lands_in_catalog_for_lettered_names() {
    let names = [
        "Ana Lima",
        "Maria da Silva",
        "José Carlos Pereira",
        "Ab Ag",
        "Ian Ana",
        "Ian Ana Af",
        "Xavier Yuri Zanetti",
        "Bruna Oliveira Costa",
    ];
    for name in names {
        assert!(is_valid(name), "{}", name);
        let value = compute_value(name);
        assert!((1..=9).contains(&value) || value == 11 || value == 22, "{} -> {}", name, value);
        assert_ne!(describe(value), UNRECOGNIZED_NUMBER_MESSAGE, "{}", name);
    }
}

#[test]
fn test_reading_serializes_to_json() -> Result<()> {
    let reading = Calculator::default().calculate("Ian Ana");
    let doc = serde_json::to_value(&reading)?;

    assert_eq!(doc["name"], "Ian Ana");
    assert_eq!(doc["valid"], true);
    assert_eq!(doc["value"], 22);
    assert_eq!(doc["master"], true);
    assert_eq!(doc["archetype"], "O Mestre Construtor");
    Ok(())
}

#[test]
fn test_config_file_drives_calculator() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("numerology.toml");
    fs::write(
        &path,
        r#"
[messages]
invalid_name = "Invalid name! Type a valid name."

[output]
format = "json"
show_breakdown = true
"#,
    )?;

    let config = Config::load_from(&path)?;
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.show_breakdown);

    let calculator = Calculator::new(config.messages);
    assert_eq!(calculator.calculate("Ana").text, "Invalid name! Type a valid name.");
    Ok(())
}

#[test]
fn test_missing_config_file_gives_defaults() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = Config::load_from(&temp_dir.path().join("absent.toml"))?;

    assert_eq!(config.messages.invalid_name, INVALID_NAME_MESSAGE);
    assert_eq!(config.output.format, OutputFormat::Text);
    Ok(())
}

#[test]
fn test_malformed_config_file_is_an_error() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("numerology.toml");
    fs::write(&path, "[output\nformat = ")?;

    assert!(Config::load_from(&path).is_err());
    Ok(())
}

#[test]
fn test_concurrent_calculations_are_independent() {
    let handles: Vec<_> = ["Ana Lima", "Ab Ag", "AB", "Ian Ana"]
        .into_iter()
        .map(|name| std::thread::spawn(move || Calculator::default().calculate(name)))
        .collect();

    let values: Vec<Option<u32>> = handles
        .into_iter()
        .map(|h| h.join().unwrap().value)
        .collect();
    assert_eq!(values, vec![Some(6), Some(11), None, Some(22)]);
}
