use anyhow::Result;
use tracing::{info, warn};
use unsent_stars::route;

use super::Session;

/// Landing: turn the typed name into a key, remember the name, open its sky.
pub fn run(session: &Session, recipient: &str) -> Result<()> {
    let (label, slug) = super::recipient(recipient)?;

    match session.letters().bind_recipient(&slug, label) {
        Ok(()) => info!(slug = %slug, label, "recipient bound"),
        // The sky still opens; its header shows the slug instead.
        Err(e) => warn!(slug = %slug, label, error = %e, "could not remember recipient"),
    }

    println!("→ {}", route::sky_path(&slug));
    println!();
    super::sky::show_recipient(session, &slug, true);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use unsent_stars::storage::{FileStorage, KeyValueStorage};
    use unsent_stars::store::recipient_key;

    fn session(dir: &TempDir) -> Session {
        Session { storage: FileStorage::new(dir.path()), color: false }
    }

    #[test]
    fn test_to_binds_raw_name_under_slug() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);

        run(&session, "  첫사랑에게  ").unwrap();

        let raw = session.storage.get(&recipient_key("첫사랑에게")).unwrap();
        assert_eq!(raw.as_deref(), Some("첫사랑에게"));
        assert_eq!(session.letters().recipient_label("첫사랑에게"), "첫사랑에게");
    }

    #[test]
    fn test_to_rebinds_existing_slug() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);

        run(&session, "Future Me").unwrap();
        run(&session, "future   me").unwrap();

        assert_eq!(session.letters().recipient("future-me").as_deref(), Some("future   me"));
    }

    #[test]
    fn test_to_rejects_blank_and_oversized_names() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);

        assert!(run(&session, "   ").is_err());
        assert!(run(&session, &"a".repeat(41)).is_err());
        assert!(session.letters().slugs().is_empty());
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }
}
