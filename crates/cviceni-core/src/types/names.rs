//! Ordered, mutable list of names.

use crate::error::{Error, Result};
use std::fmt;

/// Separator used when a [`NameList`] is rendered.
const SEPARATOR: &str = ",";

/// An insertion-ordered list of names.
///
/// Duplicates are allowed. Positional access and removal are checked and
/// report [`Error::IndexOutOfRange`] instead of panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    /// Creates a list from any sequence of names, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cviceni_core::NameList;
    ///
    /// let list = NameList::new(["Pepa", "Karel"]);
    /// assert_eq!(list.to_string(), "Pepa,Karel");
    /// ```
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the name at `index`.
    pub fn get(&self, index: usize) -> Result<&str> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| Error::index_out_of_range(index, self.names.len()))
    }

    /// Appends a name at the end.
    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(name = %name, "Appending name");
        self.names.push(name);
    }

    /// Removes and returns the name at `index`, shifting later names down.
    pub fn remove_at(&mut self, index: usize) -> Result<String> {
        if index >= self.names.len() {
            return Err(Error::index_out_of_range(index, self.names.len()));
        }
        let removed = self.names.remove(index);
        tracing::debug!(index, name = %removed, "Removed name at position");
        Ok(removed)
    }

    /// Removes the first name equal to `name`.
    ///
    /// Returns `false` and leaves the list untouched when no name matches.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(index) => {
                self.names.remove(index);
                tracing::debug!(index, name, "Removed name by value");
                true
            }
            None => {
                tracing::debug!(name, "Name not present, nothing removed");
                false
            }
        }
    }

    /// Joins the names with `separator`.
    pub fn joined(&self, separator: &str) -> String {
        self.names.join(separator)
    }

    /// Returns the number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the list holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Display for NameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined(SEPARATOR))
    }
}

impl From<Vec<String>> for NameList {
    fn from(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl From<NameList> for Vec<String> {
    fn from(list: NameList) -> Self {
        list.names
    }
}
