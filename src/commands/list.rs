use anyhow::Result;

use super::{Session, Target};

pub fn run(session: &Session, to: Option<&str>, json: bool) -> Result<()> {
    let letters = match super::target(to)? {
        Target::Solo => session.solo().list(),
        Target::Recipient(slug) => session.letters().list_for(&slug),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&letters)?);
        return Ok(());
    }

    if letters.is_empty() {
        println!("No letters yet.");
        return Ok(());
    }

    println!("{:<4} {:<16} {:>3} {:>3}  {:<6}  Letter", "#", "Written", "X", "Y", "Mood");
    println!("{}", "─".repeat(72));
    for (i, l) in letters.iter().enumerate() {
        println!(
            "{:<4} {:<16} {:>3} {:>3}  {:<6}  {}",
            i + 1,
            l.created_label(),
            l.x,
            l.y,
            l.mood().as_str(),
            l.preview(36)
        );
    }
    Ok(())
}
