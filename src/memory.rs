use chrono::Utc;

use crate::models::HomeworkRecord;

/// Everything the bot remembers between iterations. Lives only as long as
/// the process; a restart starts from "now" with nothing seen.
#[derive(Debug, Clone, PartialEq)]
pub struct PollState {
    /// Lower bound (Unix seconds) of the next fetch window.
    pub cursor: i64,
    last_seen: Option<HomeworkRecord>,
}

impl Default for PollState {
    fn default() -> Self {
        Self::starting_at(Utc::now().timestamp())
    }
}

impl PollState {
    pub fn starting_at(cursor: i64) -> Self {
        PollState {
            cursor,
            last_seen: None,
        }
    }

    /// Whether `homework` differs from the last seen record.
    pub fn is_new(&self, homework: &HomeworkRecord) -> bool {
        self.last_seen.as_ref() != Some(homework)
    }

    /// Stores `homework` as the last seen record unless it is structurally
    /// equal to the one already stored. Returns whether it changed.
    pub fn remember(&mut self, homework: &HomeworkRecord) -> bool {
        if !self.is_new(homework) {
            return false;
        }
        self.last_seen = Some(homework.clone());
        true
    }

    pub fn last_seen(&self) -> Option<&HomeworkRecord> {
        self.last_seen.as_ref()
    }

    pub fn advance_cursor(&mut self, current_date: i64) {
        self.cursor = current_date;
    }
}
