// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Role labels carried by an actor.
//!
//! Labels are compared exactly (case-sensitive). `Administrator` and
//! `administrator` are different roles.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Label of the role that may modify any product.
pub const ADMINISTRATOR: &str = "Administrator";

/// A single role label, e.g. `Administrator`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleLabel(String);

impl RoleLabel {
    /// Create a label. Surrounding whitespace is trimmed; returns `None` if
    /// nothing is left.
    pub fn new(label: impl AsRef<str>) -> Option<Self> {
        let trimmed = label.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The built-in administrative label.
    pub fn administrator() -> Self {
        Self(ADMINISTRATOR.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unordered set of role labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<RoleLabel>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list (`"Editor, Administrator"`). Blank
    /// entries are skipped.
    pub fn parse_list(raw: &str) -> Self {
        raw.split(',').filter_map(RoleLabel::new).collect()
    }

    /// Exact membership test.
    pub fn contains(&self, label: &RoleLabel) -> bool {
        self.0.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<RoleLabel> for RoleSet {
    fn from_iter<I: IntoIterator<Item = RoleLabel>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> RoleLabel {
        RoleLabel::new(s).unwrap()
    }

    #[test]
    fn membership_is_case_sensitive() {
        let roles: RoleSet = [label("Administrator")].into_iter().collect();
        assert!(roles.contains(&label("Administrator")));
        assert!(!roles.contains(&label("administrator")));
        assert!(!roles.contains(&label("ADMINISTRATOR")));
    }

    #[test]
    fn administrator_label_matches_parsed_label() {
        assert_eq!(RoleLabel::administrator(), label("Administrator"));
    }

    #[test]
    fn blank_labels_are_rejected() {
        assert!(RoleLabel::new("").is_none());
        assert!(RoleLabel::new("   ").is_none());
        assert_eq!(label("  Editor ").as_str(), "Editor");
    }

    #[test]
    fn parse_list_trims_and_skips_blanks() {
        let roles = RoleSet::parse_list("Editor, ,Administrator,");
        assert_eq!(roles.len(), 2);
        assert!(roles.contains(&label("Editor")));
        assert!(roles.contains(&label("Administrator")));
    }

    #[test]
    fn duplicates_collapse() {
        let roles = RoleSet::parse_list("Editor,Editor");
        assert_eq!(roles.len(), 1);
    }

    #[test]
    fn serializes_as_plain_list() {
        let roles = RoleSet::parse_list("Editor,Administrator");
        let json = serde_json::to_string(&roles).unwrap();
        assert_eq!(json, r#"["Administrator","Editor"]"#);
    }
}
