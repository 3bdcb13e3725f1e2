use crate::catalog;
use crate::history::HistoryStore;
use crate::models::{HistoryEntry, NewHistoryEntry, Phrase};
use crate::phrases::CustomPhraseStore;
use crate::session::{CountingSession, Target};
use crate::storage::Storage;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything the app mutates. Held behind one lock so a mutation and its
/// persistence happen as a single step.
pub struct AppData {
    pub phrases: CustomPhraseStore,
    pub history: HistoryStore,
    pub session: CountingSession,
}

impl AppData {
    pub async fn load(storage: Storage) -> Self {
        Self {
            phrases: CustomPhraseStore::load(storage.clone()).await,
            history: HistoryStore::load(storage).await,
            session: CountingSession::new(catalog::default_phrase()),
        }
    }

    /// Counts one tap. When the tap completes the session, the completion is
    /// recorded in history and the new entry is returned.
    pub async fn tap(&mut self) -> Option<HistoryEntry> {
        let completed = self.session.increment()?;
        let phrase = self.session.phrase();
        let entry = NewHistoryEntry {
            phrase_name: phrase.name.clone(),
            phrase_script: phrase.script.clone(),
            count: completed.count,
            target: self.session.target(),
        };
        Some(self.history.append(entry).await)
    }

    /// Switches to `phrase`, adopting its default target and starting over.
    pub fn choose_phrase(&mut self, phrase: Phrase) {
        let target = Target::clamped(phrase.default_target);
        self.session.select_phrase(phrase);
        self.session.set_target(target);
        self.session.reset();
    }

    /// Applies a new target and starts over so a stale count cannot sit past it.
    pub fn choose_target(&mut self, target: Target) {
        self.session.set_target(target);
        self.session.reset();
    }

    pub fn find_phrase(&self, id: &str) -> Option<Phrase> {
        catalog::find(id, self.phrases.phrases())
    }
}

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data: AppData) -> Self {
        Self {
            data: Arc::new(Mutex::new(data)),
        }
    }
}
