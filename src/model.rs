// src/model.rs
//! The persisted leaderboard document.
//!
//! Wire names follow the files the site already publishes: `profile_url` and
//! `generated_at` are snake_case, while the two deficit fields keep their
//! camelCase spelling (`pointsBehind`, `pointsBehindRaw`). The snake_case
//! spellings are accepted on read.

use serde::{Deserialize, Serialize};

/// Placeholder shown in the deficit column for the leader.
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardDocument {
    /// Last computed order. Derived data: only trust it after `rank::recompute`.
    #[serde(default)]
    pub entries: Vec<LeaderboardEntry>,

    /// ISO-8601, rewritten on every update.
    #[serde(default)]
    pub generated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,

    #[serde(default)]
    pub profile_url: String,

    /// `None` until the first successful reading.
    #[serde(default)]
    pub points: Option<u64>,

    /// 1-based; 0 only in hand-written seed files.
    #[serde(default)]
    pub rank: u32,

    #[serde(rename = "pointsBehind", alias = "points_behind", default)]
    pub points_behind: Option<u64>,

    #[serde(rename = "pointsBehindRaw", alias = "points_behind_raw", default)]
    pub points_behind_raw: Option<String>,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile_url: profile_url.into(),
            points: None,
            rank: 0,
            points_behind: None,
            points_behind_raw: None,
        }
    }

    pub fn with_points(mut self, points: u64) -> Self {
        self.points = Some(points);
        self
    }

    /// Ordering value: a missing reading counts as zero.
    #[inline]
    pub fn points_or_zero(&self) -> u64 {
        self.points.unwrap_or(0)
    }

    #[inline]
    pub fn has_profile(&self) -> bool {
        !self.profile_url.trim().is_empty()
    }
}

impl LeaderboardDocument {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries, generated_at: s!() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Two-space indented, like the files the site already serves.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_seed_file_without_derived_fields() {
        let doc = LeaderboardDocument::from_json(
            r#"{ "entries": [ { "name": "Ada", "profile_url": "https://x/ada" } ] }"#,
        )
        .unwrap();
        let e = &doc.entries[0];
        assert_eq!(e.points, None);
        assert_eq!(e.rank, 0);
        assert_eq!(e.points_behind_raw, None);
        assert!(doc.generated_at.is_empty());
    }

    #[test]
    fn deficit_fields_are_camel_case_on_the_wire() {
        let mut e = LeaderboardEntry::new("Ada", "https://x/ada").with_points(5);
        e.rank = 2;
        e.points_behind = Some(10);
        e.points_behind_raw = Some(s!("10"));
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains(r#""pointsBehind":10"#));
        assert!(json.contains(r#""pointsBehindRaw":"10""#));
        assert!(json.contains(r#""profile_url":"https://x/ada""#));
    }

    #[test]
    fn accepts_snake_case_deficit_fields() {
        let e: LeaderboardEntry = serde_json::from_str(
            r#"{ "name": "B", "profile_url": "", "points": 3, "rank": 2,
                 "points_behind": 7, "points_behind_raw": "7" }"#,
        )
        .unwrap();
        assert_eq!(e.points_behind, Some(7));
        assert_eq!(e.points_behind_raw.as_deref(), Some("7"));
        assert!(!e.has_profile());
    }
}
