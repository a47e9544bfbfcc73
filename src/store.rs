//! Letter collections on top of a [`KeyValueStorage`].
//!
//! Two layouts share the storage:
//! - [`LetterStore`]: one JSON object under [`LETTERS_KEY`], slug → letters,
//!   plus one raw recipient label per slug under [`RECIPIENT_PREFIX`].
//! - [`SoloStore`]: one JSON array under [`SOLO_KEY`] for the unnamed sky,
//!   every letter mood-tagged.
//!
//! Every append is a full read-modify-write of the key. Two processes
//! appending at once race and the later save wins.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::letter::{Draft, Emotion, Letter};
use crate::storage::{KeyValueStorage, StorageError};

pub const LETTERS_KEY: &str = "ults.letters.v1";
pub const SOLO_KEY: &str = "ults.letters.noName";
pub const RECIPIENT_PREFIX: &str = "ults.recipient.";

/// Letters per recipient slug; each list is in append order.
pub type Collection = BTreeMap<String, Vec<Letter>>;

pub fn recipient_key(slug: &str) -> String {
    format!("{RECIPIENT_PREFIX}{slug}")
}

/// Read and decode `key`. Absent, unreadable or malformed data all yield the
/// default value.
fn load_or_default<S, T>(storage: &S, key: &str) -> T
where
    S: KeyValueStorage + ?Sized,
    T: DeserializeOwned + Default,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!(key, error = %e, "storage read failed, starting empty");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "stored letters are malformed, starting empty");
            T::default()
        }
    }
}

fn save_json<S, T>(storage: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStorage + ?Sized,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)
        .map_err(|source| StorageError::Encode { key: key.to_string(), source })?;
    storage.set(key, &json)?;
    debug!(key, bytes = json.len(), "saved");
    Ok(())
}

pub struct LetterStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> LetterStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    pub fn load(&self) -> Collection {
        load_or_default(&self.storage, LETTERS_KEY)
    }

    /// Replace the whole persisted collection.
    pub fn save(&mut self, collection: &Collection) -> Result<(), StorageError> {
        save_json(&mut self.storage, LETTERS_KEY, collection)
    }

    pub fn list_for(&self, slug: &str) -> Vec<Letter> {
        self.load().remove(slug).unwrap_or_default()
    }

    /// Every slug that has letters, with its letter count, sorted by slug.
    pub fn slugs(&self) -> Vec<(String, usize)> {
        self.load()
            .into_iter()
            .filter(|(_, letters)| !letters.is_empty())
            .map(|(slug, letters)| (slug, letters.len()))
            .collect()
    }

    /// File a new letter under `slug`. The body must already be checked
    /// non-empty by the caller; it is trimmed here.
    pub fn append(
        &mut self,
        slug: &str,
        to: &str,
        body: &str,
        emotion: Option<Emotion>,
    ) -> Result<Letter, StorageError> {
        self.append_with(&mut rand::thread_rng(), slug, to, body, emotion)
    }

    pub fn append_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        slug: &str,
        to: &str,
        body: &str,
        emotion: Option<Emotion>,
    ) -> Result<Letter, StorageError> {
        let mut collection = self.load();
        let list = collection.entry(slug.to_string()).or_default();

        let draft = Draft { to: Some(to), slug: Some(slug), body, emotion };
        let letter = Letter::create(&draft, list.last().map(|l| l.created_at), rng);
        list.push(letter.clone());
        let count = list.len();

        self.save(&collection)?;
        debug!(slug, id = %letter.id, count, "letter appended");
        Ok(letter)
    }

    /// Remember the raw recipient text shown in the sky header for `slug`.
    pub fn bind_recipient(&mut self, slug: &str, to: &str) -> Result<(), StorageError> {
        self.storage.set(&recipient_key(slug), to)
    }

    pub fn recipient(&self, slug: &str) -> Option<String> {
        match self.storage.get(&recipient_key(slug)) {
            Ok(label) => label.filter(|l| !l.trim().is_empty()),
            Err(e) => {
                warn!(slug, error = %e, "recipient label unreadable");
                None
            }
        }
    }

    /// Header label for a sky: the bound recipient text, else the slug itself.
    pub fn recipient_label(&self, slug: &str) -> String {
        self.recipient(slug).unwrap_or_else(|| slug.to_string())
    }
}

/// The unnamed sky: a flat list of mood-tagged letters.
pub struct SoloStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SoloStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Vec<Letter> {
        load_or_default(&self.storage, SOLO_KEY)
    }

    pub fn save(&mut self, letters: &[Letter]) -> Result<(), StorageError> {
        save_json(&mut self.storage, SOLO_KEY, letters)
    }

    pub fn list(&self) -> Vec<Letter> {
        self.load()
    }

    pub fn append(&mut self, body: &str, emotion: Emotion) -> Result<Letter, StorageError> {
        self.append_with(&mut rand::thread_rng(), body, emotion)
    }

    pub fn append_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        body: &str,
        emotion: Emotion,
    ) -> Result<Letter, StorageError> {
        let mut letters = self.load();

        let draft = Draft { body, emotion: Some(emotion), ..Draft::default() };
        let letter = Letter::create(&draft, letters.last().map(|l| l.created_at), rng);
        letters.push(letter.clone());

        self.save(&letters)?;
        debug!(id = %letter.id, count = letters.len(), "solo letter appended");
        Ok(letter)
    }
}
