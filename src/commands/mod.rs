pub mod list;
pub mod open;
pub mod read;
pub mod recipients;
pub mod sky;
pub mod slug;
pub mod to;
pub mod write;

use anyhow::{Result, bail};
use unsent_stars::storage::FileStorage;
use unsent_stars::{LetterStore, SoloStore};

use crate::templates;

/// Shared state for one invocation.
pub struct Session {
    pub storage: FileStorage,
    pub color: bool,
}

impl Session {
    pub fn letters(&self) -> LetterStore<FileStorage> {
        LetterStore::new(self.storage.clone())
    }

    pub fn solo(&self) -> SoloStore<FileStorage> {
        SoloStore::new(self.storage.clone())
    }
}

/// Which sky a command works on.
pub enum Target {
    Solo,
    Recipient(String),
}

/// Longest recipient name accepted, in characters.
pub const MAX_RECIPIENT_CHARS: usize = 40;

/// Check typed recipient text and return it trimmed with its slug.
pub fn recipient(to: &str) -> Result<(&str, String)> {
    let label = to.trim();
    if label.is_empty() {
        bail!(templates::EMPTY_RECIPIENT);
    }
    let len = label.chars().count();
    if len > MAX_RECIPIENT_CHARS {
        bail!("recipient name is {len} characters, at most {MAX_RECIPIENT_CHARS} are allowed");
    }
    Ok((label, unsent_stars::slug::require(label)?))
}

/// `None` is the unnamed sky; anything else must normalize to a usable slug.
pub fn target(to: Option<&str>) -> Result<Target> {
    let Some(to) = to else {
        return Ok(Target::Solo);
    };
    let (_, slug) = recipient(to)?;
    Ok(Target::Recipient(slug))
}
