//! Lessons driven by a TOML config file.

use crate::common::{REFERENCE_TRANSCRIPT, run_to_string};
use cviceni_core::{Error, LessonConfig};
use std::io::Write;

#[test]
fn test_exported_default_config_reproduces_reference() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let toml = LessonConfig::default().to_toml_string().unwrap();
    file.write_all(toml.as_bytes()).unwrap();

    let config = LessonConfig::load(file.path()).unwrap();
    assert_eq!(run_to_string(&config).unwrap(), REFERENCE_TRANSCRIPT);
}

#[test]
fn test_overridden_roster_changes_count() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[[roster]]
given_name = "Anna"
family_name = "Malá"
age = 18

[[roster]]
given_name = "Eva"
family_name = "Bílá"
age = 23
"#
    )
    .unwrap();

    let config = LessonConfig::load(file.path()).unwrap();
    let text = run_to_string(&config).unwrap();
    assert!(text.contains("Počet studentů: 2\n"));
}

#[test]
fn test_empty_names_fails_on_lookup() {
    let config = LessonConfig::from_toml_str("names = []").unwrap();
    let err = run_to_string(&config).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 1, len: 0 }));
}
