//! Log of completed sessions, newest first.

use crate::models::{HistoryDay, HistoryEntry, NewHistoryEntry};
use crate::storage::Storage;
use chrono::{Local, NaiveDate, TimeZone, Utc};
use tracing::{error, info};
use uuid::Uuid;

pub const HISTORY_KEY: &str = "history";

pub struct HistoryStore {
    storage: Storage,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub async fn load(storage: Storage) -> Self {
        let entries = storage.load_collection(HISTORY_KEY).await;
        Self { storage, entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a completed session at the head of the log, stamping it with a
    /// fresh id and the current time.
    pub async fn append(&mut self, entry: NewHistoryEntry) -> HistoryEntry {
        let record = HistoryEntry {
            id: format!("history-{}", Uuid::new_v4()),
            phrase_name: entry.phrase_name,
            phrase_script: entry.phrase_script,
            count: entry.count,
            target: entry.target,
            completed_at: Utc::now(),
        };
        info!(
            phrase = %record.phrase_name,
            count = record.count,
            target = record.target,
            "recorded completed session"
        );
        self.entries.insert(0, record.clone());
        self.persist().await;
        record
    }

    pub async fn clear(&mut self) {
        self.entries.clear();
        self.persist().await;
    }

    pub fn group_by_day(&self) -> Vec<HistoryDay> {
        group_by_day(&self.entries, &Local)
    }

    async fn persist(&self) {
        if let Err(err) = self.storage.persist_collection(HISTORY_KEY, &self.entries).await {
            error!("failed to save history: {err}");
        }
    }
}

/// Buckets entries by the calendar date of `completed_at` in `tz`, newest
/// day first. Entries inside a day keep their order from `entries`.
pub fn group_by_day<Tz: TimeZone>(entries: &[HistoryEntry], tz: &Tz) -> Vec<HistoryDay> {
    let mut days: Vec<HistoryDay> = Vec::new();
    for entry in entries {
        let date = local_date(entry, tz);
        match days.iter_mut().find(|day| day.date == date) {
            Some(day) => day.entries.push(entry.clone()),
            None => days.push(HistoryDay {
                date,
                entries: vec![entry.clone()],
            }),
        }
    }
    days.sort_by(|a, b| b.date.cmp(&a.date));
    days
}

fn local_date<Tz: TimeZone>(entry: &HistoryEntry, tz: &Tz) -> NaiveDate {
    entry.completed_at.with_timezone(tz).date_naive()
}
