use anyhow::Result;
use unsent_stars::Letter;
use unsent_stars::sky::{self, Sky, SkyOptions};

use super::{Session, Target};
use crate::templates;

pub fn run(session: &Session, to: Option<&str>, legend: bool) -> Result<()> {
    match super::target(to)? {
        Target::Solo => show_solo(session, legend),
        Target::Recipient(slug) => show_recipient(session, &slug, legend),
    }
    Ok(())
}

pub fn show_recipient(session: &Session, slug: &str, legend: bool) {
    let store = session.letters();
    let letters = store.list_for(slug);
    let title = sky::recipient_title(&store.recipient_label(slug), letters.len());
    draw(session, title, &letters, legend);
}

pub fn show_solo(session: &Session, legend: bool) {
    let letters = session.solo().list();
    draw(session, sky::solo_title(), &letters, legend);
}

fn draw(session: &Session, title: String, letters: &[Letter], legend: bool) {
    let opts = SkyOptions { color: session.color, ..SkyOptions::default() };
    let view = Sky::new(title, letters, opts);

    print!("{}", view.render(&mut rand::thread_rng()));

    if legend && !letters.is_empty() {
        println!();
        for line in view.legend() {
            println!("  {line}");
        }
        println!();
        println!("{}", templates::READ_HINT);
    }
}
