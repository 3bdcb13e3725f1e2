//! User-authored phrases, persisted as a whole after every mutation.

use crate::errors::ValidationError;
use crate::models::{CreatePhraseRequest, Phrase, PhraseUpdate, UpdatePhraseRequest};
use crate::session::{Target, DEFAULT_TARGET};
use crate::storage::Storage;
use std::collections::HashSet;
use tracing::{error, warn};
use uuid::Uuid;

pub const CUSTOM_PHRASES_KEY: &str = "custom-phrases";

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value.to_string())
}

impl CreatePhraseRequest {
    /// Builds a new custom phrase. A blank gloss falls back to the name.
    pub fn into_phrase(self) -> Result<Phrase, ValidationError> {
        let name = required("name", &self.name)?;
        let script = required("script", &self.script)?;
        let default_target = match self.default_target {
            Some(value) => Target::new(value)?.get(),
            None => DEFAULT_TARGET,
        };
        let gloss = self
            .gloss
            .as_deref()
            .map(str::trim)
            .filter(|gloss| !gloss.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| name.clone());

        Ok(Phrase {
            id: format!("custom-{}", Uuid::new_v4()),
            name,
            script,
            gloss,
            default_target,
        })
    }
}

impl UpdatePhraseRequest {
    pub fn into_update(self) -> Result<PhraseUpdate, ValidationError> {
        Ok(PhraseUpdate {
            name: self.name.as_deref().map(|name| required("name", name)).transpose()?,
            script: self
                .script
                .as_deref()
                .map(|script| required("script", script))
                .transpose()?,
            gloss: self.gloss.map(|gloss| gloss.trim().to_string()),
            default_target: self
                .default_target
                .map(|value| Target::new(value).map(Target::get))
                .transpose()?,
        })
    }
}

pub struct CustomPhraseStore {
    storage: Storage,
    phrases: Vec<Phrase>,
}

impl CustomPhraseStore {
    pub async fn load(storage: Storage) -> Self {
        let loaded: Vec<Phrase> = storage.load_collection(CUSTOM_PHRASES_KEY).await;
        let mut seen = HashSet::new();
        let phrases = loaded
            .into_iter()
            .filter(|phrase| {
                let fresh = seen.insert(phrase.id.clone());
                if !fresh {
                    warn!(id = %phrase.id, "dropping stored custom phrase with duplicate id");
                }
                fresh
            })
            .collect();

        Self { storage, phrases }
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn get(&self, id: &str) -> Option<&Phrase> {
        self.phrases.iter().find(|phrase| phrase.id == id)
    }

    /// Appends `phrase`. Returns `false` without changes if its id is taken.
    pub async fn add(&mut self, phrase: Phrase) -> bool {
        if self.get(&phrase.id).is_some() {
            warn!(id = %phrase.id, "custom phrase id already present");
            return false;
        }
        self.phrases.push(phrase);
        self.persist().await;
        true
    }

    /// Removes the phrase with `id`. Absent ids are a no-op.
    pub async fn remove(&mut self, id: &str) -> bool {
        let before = self.phrases.len();
        self.phrases.retain(|phrase| phrase.id != id);
        let removed = self.phrases.len() != before;
        self.persist().await;
        removed
    }

    /// Merges `update` into the phrase with `id` and returns the result, or
    /// `None` if no such phrase exists.
    pub async fn update(&mut self, id: &str, update: &PhraseUpdate) -> Option<Phrase> {
        let phrase = self.phrases.iter_mut().find(|phrase| phrase.id == id)?;
        if let Some(name) = &update.name {
            phrase.name = name.clone();
        }
        if let Some(script) = &update.script {
            phrase.script = script.clone();
        }
        if let Some(gloss) = &update.gloss {
            phrase.gloss = if gloss.is_empty() {
                phrase.name.clone()
            } else {
                gloss.clone()
            };
        }
        if let Some(target) = update.default_target {
            phrase.default_target = target;
        }
        let updated = phrase.clone();

        self.persist().await;
        Some(updated)
    }

    async fn persist(&self) {
        if let Err(err) = self
            .storage
            .persist_collection(CUSTOM_PHRASES_KEY, &self.phrases)
            .await
        {
            error!("failed to save custom phrases: {err}");
        }
    }
}
