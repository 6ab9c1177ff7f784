//! Domain types for portfolio data.
//!
//! Records are read permissively: any JSON object is a record. Only `id` and
//! `category` have meaning to the organizer, and both are read through
//! accessors so a record of any shape loads and serializes back unchanged.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category label used for records that carry no `category` field.
pub const DEFAULT_CATEGORY: &str = "Other";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed identifier for a portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl PartialEq<str> for ProjectId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One portfolio entry: the JSON object exactly as read, keys in source
/// order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectRecord {
    pub fields: Map<String, Value>,
}

impl ProjectRecord {
    /// Build a record with the given id and no other fields.
    pub fn with_id(id: impl Into<ProjectId>) -> Self {
        Self::default().with_field("id", id.into().0)
    }

    /// Builder-style category setter.
    pub fn in_category(self, category: impl Into<String>) -> Self {
        self.with_field("category", category.into())
    }

    /// Builder-style payload setter.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The record's `id` when it is a string. Ids of any other JSON type are
    /// kept in [`ProjectRecord::fields`] but never match.
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    /// The label this record is grouped under.
    ///
    /// A missing or `null` category is [`DEFAULT_CATEGORY`]; a string is used
    /// as is; any other value is labelled by its JSON text (`2024`, `true`).
    pub fn category_label(&self) -> Cow<'_, str> {
        match self.fields.get("category") {
            None | Some(Value::Null) => Cow::Borrowed(DEFAULT_CATEGORY),
            Some(Value::String(label)) => Cow::Borrowed(label),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    /// `true` if the record's id is the string `id`.
    pub fn has_id(&self, id: &str) -> bool {
        self.id() == Some(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
