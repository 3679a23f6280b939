use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    errors::Diagnostic,
    ledger::{Category, CategoryKey},
};

/// One concrete occurrence of an entry, amount in the base currency.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimestampEntry {
    pub timestamp: NaiveDate,
    pub amount: f64,
    pub category: Category,
}

/// Distinct categories in first-seen order, deduplicated by [`CategoryKey`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategorySet {
    items: Vec<Category>,
    #[serde(skip)]
    keys: HashSet<CategoryKey>,
}

impl CategorySet {
    /// Adds the category unless one with the same key is present. Returns
    /// `true` when it was inserted.
    pub fn insert(&mut self, category: &Category) -> bool {
        if !self.keys.insert(category.key()) {
            return false;
        }
        self.items.push(category.clone());
        true
    }

    pub fn contains(&self, key: &CategoryKey) -> bool {
        self.keys.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Expanded events grouped by source entry, plus the categories they use.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ForecastResult {
    pub timestamps: Vec<TimestampEntry>,
    pub categories: CategorySet,
    /// Entries that were skipped or truncated while expanding.
    pub diagnostics: Vec<Diagnostic>,
}

impl ForecastResult {
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.timestamps.iter().map(|event| event.amount).sum()
    }

    /// Categories that are not flagged as hidden.
    pub fn visible_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|category| !category.hidden)
    }

    pub(crate) fn push(&mut self, event: TimestampEntry) {
        self.categories.insert(&event.category);
        self.timestamps.push(event);
    }
}
