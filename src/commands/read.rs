use anyhow::{Result, bail};

use super::{Session, Target};
use crate::templates;

/// Open star `n` (1-based, as numbered in the sky legend).
pub fn run(session: &Session, to: Option<&str>, n: usize) -> Result<()> {
    let (heading, letters) = match super::target(to)? {
        Target::Solo => (templates::solo_heading().to_string(), session.solo().list()),
        Target::Recipient(slug) => {
            let store = session.letters();
            (templates::recipient_heading(&store.recipient_label(&slug)), store.list_for(&slug))
        }
    };

    let Some(letter) = n.checked_sub(1).and_then(|i| letters.get(i)) else {
        match letters.len() {
            0 => bail!("this sky has no stars yet"),
            total => bail!("no star #{n}: this sky has {total}"),
        }
    };

    let heading = format!("{heading} {} {}", letter.mood().emoji(), letter.mood());
    print!("{}", templates::letter_card(&heading, &letter.body, &letter.created_label()));
    Ok(())
}
