use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Disambiguates entries created within the same millisecond.
static ENTRY_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// A completed session as recorded in the local history file.
///
/// Entries are never mutated after creation and are serialized in
/// camelCase, matching the JSON the original web version of this app kept
/// in localStorage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Time-based unique id: milliseconds since the epoch plus a
    /// process-wide sequence number.
    pub id: String,
    pub user_name: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    pub score: usize,
    pub total_questions: usize,
    /// Skill tier label the session was classified into.
    pub level: String,
    /// Completion date, `dd/mm/yyyy`.
    pub date: String,
}

impl HistoryEntry {
    pub fn new(
        user_name: String,
        domain: String,
        specialty: Option<String>,
        score: usize,
        total_questions: usize,
        level: &str,
    ) -> Self {
        let now = Local::now();
        let sequence = ENTRY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self {
            id: format!("{}-{}", now.timestamp_millis(), sequence),
            user_name,
            domain,
            specialty,
            score,
            total_questions,
            level: level.to_string(),
            date: now.format("%d/%m/%Y").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let entry = HistoryEntry::new(
            "Ada".to_string(),
            "Cybersecurity".to_string(),
            None,
            17,
            20,
            "Expert",
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"userName\":\"Ada\""));
        assert!(json.contains("\"totalQuestions\":20"));
        assert!(!json.contains("specialty"));
    }

    #[test]
    fn test_ids_are_unique_within_a_millisecond() {
        let make = || {
            HistoryEntry::new(
                "Ada".to_string(),
                "Databases".to_string(),
                None,
                10,
                20,
                "Intermediate",
            )
        };
        let a = make();
        let b = make();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_round_trips_with_specialty() {
        let entry = HistoryEntry::new(
            "Ada".to_string(),
            "Software Development".to_string(),
            Some("Mobile".to_string()),
            9,
            20,
            "Beginner",
        );
        let json = serde_json::to_string(&entry).unwrap();
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
