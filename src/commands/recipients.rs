use anyhow::Result;
use unsent_stars::route;

use super::Session;

pub fn run(session: &Session) -> Result<()> {
    let store = session.letters();
    let slugs = store.slugs();

    if slugs.is_empty() {
        println!("No skies yet. Start one with `unsent-stars to \"<name>\"`.");
        return Ok(());
    }

    println!("{:<24} {:>6}  Path", "To", "Stars");
    println!("{}", "─".repeat(60));
    for (slug, count) in &slugs {
        println!("{:<24} {:>6}  {}", store.recipient_label(slug), count, route::sky_path(slug));
    }
    Ok(())
}
