//! Category grouping and featured-project selection.
//!
//! Everything here is a pure function of the loaded records.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::ProjectRecord;

/// Id of the record highlighted on the page when present.
pub const FEATURED_PROJECT_ID: &str = "crm-orchestrator";

// ---------------------------------------------------------------------------
// CategoryGroups
// ---------------------------------------------------------------------------

/// Records grouped by category label.
///
/// Groups appear in first-seen order; records inside a group keep input
/// order. Serializes as a map with the same key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryGroups {
    groups: Vec<(String, Vec<ProjectRecord>)>,
}

impl CategoryGroups {
    /// Records filed under `label`, if any.
    pub fn get(&self, label: &str) -> Option<&[ProjectRecord]> {
        self.groups
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, records)| records.as_slice())
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ProjectRecord])> {
        self.groups
            .iter()
            .map(|(l, records)| (l.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn push(&mut self, record: &ProjectRecord) {
        let label = record.category_label();
        match self.groups.iter_mut().find(|(l, _)| l.as_str() == &*label) {
            Some((_, records)) => records.push(record.clone()),
            None => self.groups.push((label.into_owned(), vec![record.clone()])),
        }
    }
}

impl Serialize for CategoryGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (label, records) in &self.groups {
            map.serialize_entry(label, records)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Output of the organizer stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio<'a> {
    pub categories: CategoryGroups,
    pub featured: Option<&'a ProjectRecord>,
}

/// Group records by [`ProjectRecord::category_label`] in one forward pass.
pub fn group_by_category(projects: &[ProjectRecord]) -> CategoryGroups {
    let mut groups = CategoryGroups::default();
    for project in projects {
        groups.push(project);
    }
    groups
}

/// The first record with id [`FEATURED_PROJECT_ID`], else the first record,
/// else `None` for an empty portfolio.
pub fn featured_project(projects: &[ProjectRecord]) -> Option<&ProjectRecord> {
    projects
        .iter()
        .find(|p| p.has_id(FEATURED_PROJECT_ID))
        .or_else(|| projects.first())
}

/// Run both organizer steps.
pub fn organize(projects: &[ProjectRecord]) -> Portfolio<'_> {
    let portfolio = Portfolio {
        categories: group_by_category(projects),
        featured: featured_project(projects),
    };
    tracing::debug!(
        "organized {} project(s) into {} categories",
        projects.len(),
        portfolio.categories.len()
    );
    portfolio
}
