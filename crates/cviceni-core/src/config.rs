//! Lesson input data.
//!
//! [`LessonConfig::default`] carries the literal values the exercise is
//! built around. A TOML file can override any subset of them; missing keys
//! keep their defaults.

use crate::error::{Error, Result};
use crate::types::Student;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the lesson prints is derived from these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonConfig {
    /// Base of the power computation
    pub base: i32,

    /// Exponent of the power computation
    pub exponent: i32,

    /// Name printed on its own line
    pub greeting: String,

    /// Initial contents of the name list
    pub names: Vec<String>,

    /// Position printed right after the initial list
    pub lookup_index: usize,

    /// Name appended to the list
    pub appended: String,

    /// Position removed from the list
    pub removed_index: usize,

    /// Name removed from the list by value
    pub removed_name: String,

    /// Students created one by one and appended to a list
    pub students: Vec<Student>,

    /// Independently built roster whose size is printed
    pub roster: Vec<Student>,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            base: 5,
            exponent: 2,
            greeting: "Honza".to_string(),
            names: ["Pepa", "Karel", "Mirek", "Kryštof"]
                .map(String::from)
                .to_vec(),
            lookup_index: 1,
            appended: "Jirka".to_string(),
            removed_index: 0,
            removed_name: "Karel".to_string(),
            students: vec![
                Student::new("Jan", "Novák", 20),
                Student::new("Petr", "Svoboda", 22),
                Student::new("Karel", "Černý", 19),
                Student::new("Mirek", "Procházka", 21),
            ],
            roster: vec![
                Student::new("Mirek", "Procházka", 21),
                Student::new("Karel", "Černý", 19),
                Student::new("Petr", "Svoboda", 22),
                Student::new("Jan", "Novák", 20),
                Student::new("Anna", "Malá", 18),
                Student::new("Eva", "Bílá", 23),
            ],
        }
    }
}

impl LessonConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid lesson config: {e}")))
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading lesson config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
