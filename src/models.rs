use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    pub id: String,
    pub name: String,
    pub script: String,
    pub gloss: String,
    pub default_target: u32,
}

/// Fields to merge into an existing custom phrase. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseUpdate {
    pub name: Option<String>,
    pub script: Option<String>,
    pub gloss: Option<String>,
    pub default_target: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub phrase_name: String,
    pub phrase_script: String,
    pub count: u32,
    pub target: u32,
    pub completed_at: DateTime<Utc>,
}

/// A completed session as handed to the history store; id and timestamp are
/// assigned on record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub phrase_name: String,
    pub phrase_script: String,
    pub count: u32,
    pub target: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryDay {
    pub date: NaiveDate,
    pub entries: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PackKind {
    Common,
    Duas,
    Daroods,
    Custom,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    pub id: PackKind,
    pub name: &'static str,
    pub description: &'static str,
    pub items: Vec<Phrase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseTotal {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub today: u64,
    pub week: u64,
    pub month: u64,
    pub total: u64,
    pub top_phrases: Vec<PhraseTotal>,
    pub total_sessions: usize,
}

impl Statistics {
    pub fn has_data(&self) -> bool {
        self.total_sessions > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    Idle,
    Counting,
    Completed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub phrase: Phrase,
    pub target: u32,
    pub count: u32,
    pub state: SessionState,
    pub completion_fired: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TapResponse {
    pub session: SessionView,
    pub recorded: Option<HistoryEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntry>,
    pub days: Vec<HistoryDay>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetsResponse {
    pub presets: &'static [u32],
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhraseRequest {
    pub name: String,
    pub script: String,
    #[serde(default)]
    pub gloss: Option<String>,
    #[serde(default)]
    pub default_target: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhraseRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub gloss: Option<String>,
    #[serde(default)]
    pub default_target: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct TargetRequest {
    pub target: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectPhraseRequest {
    pub phrase_id: String,
}
