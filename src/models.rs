use std::collections::BTreeMap;

use serde_json::Value;

use crate::errors::ConfigError;

/// One homework snapshot exactly as the review API reports it. Kept as raw
/// JSON so change detection compares every field, not just the status.
pub type HomeworkRecord = Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    pub fn code(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Status code -> verdict sentence. Built once at startup and never mutated.
/// The three built-in entries always come first; extra entries follow in
/// code order.
#[derive(Debug, Clone)]
pub struct VerdictTable {
    entries: Vec<(String, String)>,
}

impl Default for VerdictTable {
    fn default() -> Self {
        let entries = HomeworkStatus::ALL
            .iter()
            .map(|status| (status.code().to_string(), status.verdict().to_string()))
            .collect();
        VerdictTable { entries }
    }
}

impl VerdictTable {
    pub fn with_extra(extra: BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut table = Self::default();
        for (code, verdict) in extra {
            if table.verdict(&code).is_some() {
                return Err(ConfigError::ReservedVerdict(code));
            }
            table.entries.push((code, verdict));
        }
        Ok(table)
    }

    pub fn verdict(&self, status: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(code, _)| code == status)
            .map(|(_, verdict)| verdict.as_str())
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }
}
