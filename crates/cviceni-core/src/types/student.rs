//! The `Student` record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A student: given name, family name and age.
///
/// Plain value type with public fields. The only behaviour is the
/// description line produced by [`Student::describe`] (and `Display`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    /// Given (first) name
    pub given_name: String,

    /// Family name (surname)
    pub family_name: String,

    /// Age in years
    pub age: i32,
}

impl Student {
    /// Creates a new student.
    ///
    /// # Examples
    ///
    /// ```
    /// use cviceni_core::Student;
    ///
    /// let s = Student::new("Jan", "Novák", 20);
    /// assert_eq!(s.given_name, "Jan");
    /// ```
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>, age: i32) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
            age,
        }
    }

    /// Returns the description line, e.g. `Student: Jan Novák, věk: 20`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student: {} {}, věk: {}",
            self.given_name, self.family_name, self.age
        )
    }
}

impl<G, F> From<(G, F, i32)> for Student
where
    G: Into<String>,
    F: Into<String>,
{
    fn from((given_name, family_name, age): (G, F, i32)) -> Self {
        Self::new(given_name, family_name, age)
    }
}
