//! Domain types representing forecast categories.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::color::{ColorSource, DEFAULT_COLOR};

/// Labels entries for grouping in monthly reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    /// Stable bank account number. `None` (or `-1` when deserialised) means
    /// the category is identified by its name.
    #[serde(default, deserialize_with = "deserialize_account_number")]
    pub account_number: Option<u32>,
    #[serde(default)]
    pub hidden: bool,
    /// Set for categories sourced from a bank feed rather than entered manually.
    #[serde(default)]
    pub imported: bool,
    #[serde(default = "default_color")]
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account_number: None,
            hidden: false,
            imported: false,
            color: default_color(),
        }
    }

    /// Builds a category sourced from an external bank feed.
    pub fn imported(name: impl Into<String>, account_number: u32) -> Self {
        Self {
            account_number: Some(account_number),
            imported: true,
            ..Self::new(name)
        }
    }

    pub fn with_account_number(mut self, account_number: u32) -> Self {
        self.account_number = Some(account_number);
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_color_from(mut self, colors: &dyn ColorSource) -> Self {
        self.color = colors.next_color();
        self
    }

    /// Returns the value identity used to merge categories into one bucket.
    pub fn key(&self) -> CategoryKey {
        match self.account_number {
            Some(number) => CategoryKey::Account(number),
            None => CategoryKey::Name(self.name.clone()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Identity of a category: its account number, falling back to its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    Account(u32),
    Name(String),
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKey::Account(number) => write!(f, "#{number}"),
            CategoryKey::Name(name) => f.write_str(name),
        }
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn deserialize_account_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) if value < 0 => Ok(None),
        Some(value) => u32::try_from(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
