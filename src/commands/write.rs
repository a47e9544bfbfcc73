use std::io;

use anyhow::{Context, Result, bail};
use tracing::warn;
use unsent_stars::{Emotion, Letter};

use super::{Session, Target};
use crate::templates;

pub fn run(session: &Session, to: Option<&str>, emotion: Option<Emotion>, body: &str) -> Result<()> {
    let body = if body == "-" {
        io::read_to_string(io::stdin()).context("failed to read letter from stdin")?
    } else {
        body.to_string()
    };

    // Checked before the store is touched; the store trims but never rejects.
    if body.trim().is_empty() {
        bail!(templates::EMPTY_BODY);
    }

    let (letter, total) = match super::target(to)? {
        Target::Solo => {
            let mut store = session.solo();
            let letter = store.append(&body, emotion.unwrap_or_default())?;
            (letter, store.list().len())
        }
        Target::Recipient(slug) => {
            let mut store = session.letters();
            let typed = to.map_or(slug.as_str(), str::trim);
            let label = match store.recipient(&slug) {
                Some(bound) => bound,
                None => {
                    // Without a binding the header shows the slug.
                    if let Err(e) = store.bind_recipient(&slug, typed) {
                        warn!(slug = %slug, error = %e, "could not remember recipient");
                    }
                    typed.to_string()
                }
            };
            let letter = store.append(&slug, &label, &body, emotion)?;
            (letter, store.list_for(&slug).len())
        }
    };

    print_saved(&letter, total);
    Ok(())
}

fn print_saved(letter: &Letter, total: usize) {
    println!("{}", templates::SAVED);
    println!(
        "  ✦ #{total} at ({}, {}) · {} {} · {}",
        letter.x,
        letter.y,
        letter.mood().emoji(),
        letter.mood(),
        letter.created_label()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use unsent_stars::storage::FileStorage;

    fn session(dir: &TempDir) -> Session {
        Session { storage: FileStorage::new(dir.path()), color: false }
    }

    #[test]
    fn test_blank_body_leaves_store_untouched() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);

        assert!(run(&session, Some("엄마"), None, "  \n\t ").is_err());
        assert!(run(&session, None, Some(Emotion::Sad), "   ").is_err());

        assert!(session.letters().load().is_empty());
        assert!(session.solo().list().is_empty());
        assert_eq!(session.letters().recipient("엄마"), None);
    }

    #[test]
    fn test_letter_is_filed_under_bound_label() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);
        session.letters().bind_recipient("mom", "엄마").unwrap();

        run(&session, Some("  MOM "), Some(Emotion::Calm), "잘 자요").unwrap();

        let letters = session.letters().list_for("mom");
        assert_eq!(letters.len(), 1);
        assert_eq!(letters[0].to.as_deref(), Some("엄마"));
        assert_eq!(letters[0].emotion, Some(Emotion::Calm));
        assert_eq!(session.letters().recipient("mom").as_deref(), Some("엄마"));
    }

    #[test]
    fn test_first_letter_binds_typed_name() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);

        run(&session, Some(" Old Friend "), None, "hello").unwrap();

        let store = session.letters();
        assert_eq!(store.recipient("old-friend").as_deref(), Some("Old Friend"));
        assert_eq!(store.list_for("old-friend")[0].to.as_deref(), Some("Old Friend"));
    }

    #[test]
    fn test_longest_hangul_name_is_written() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);
        let name = "가".repeat(crate::commands::MAX_RECIPIENT_CHARS);

        run(&session, Some(&name), None, "보고 싶어").unwrap();

        let store = session.letters();
        assert_eq!(store.list_for(&name).len(), 1);
        assert_eq!(store.recipient_label(&name), name);
    }
}
