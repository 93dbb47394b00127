//! Client-side substring search over fetched records.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::model::{Classroom, Parent, Student, Teacher};

/// Normalized search query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Needle {
    raw: String,
    lower: String,
}

impl Needle {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self { raw: query.to_owned(), lower: query.to_lowercase() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Case-insensitive substring match.
    #[must_use]
    pub fn hits(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.lower)
    }

    /// Exact substring match, for numeric-ish fields like phone numbers.
    #[must_use]
    pub fn hits_raw(&self, field: &str) -> bool {
        field.contains(&self.raw)
    }
}

/// A record that can be matched against a search query.
pub trait Searchable {
    fn matches(&self, needle: &Needle) -> bool;
}

impl Searchable for Classroom {
    fn matches(&self, needle: &Needle) -> bool {
        needle.hits(&self.name) || self.teacher_name().is_some_and(|name| needle.hits(name))
    }
}

impl Searchable for Student {
    fn matches(&self, needle: &Needle) -> bool {
        needle.hits(&self.name) || needle.hits(&self.surname) || needle.hits(self.classroom_name())
    }
}

impl Searchable for Teacher {
    fn matches(&self, needle: &Needle) -> bool {
        needle.hits(&self.name)
            || needle.hits(&self.surname)
            || self.full_name.as_deref().is_some_and(|name| needle.hits(name))
    }
}

impl Searchable for Parent {
    fn matches(&self, needle: &Needle) -> bool {
        needle.hits(&self.name) || needle.hits(&self.surname) || needle.hits(&self.email) || needle.hits_raw(&self.phone)
    }
}

/// Rows matching `query`, in their original order. An empty query keeps all.
#[must_use]
pub fn filter<'a, T: Searchable>(rows: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = Needle::new(query);
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter().filter(|row| row.matches(&needle)).collect()
}
