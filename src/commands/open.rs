use anyhow::Result;
use unsent_stars::route::Route;

use super::Session;
use crate::templates;

pub fn run(session: &Session, path: &str) -> Result<()> {
    match Route::parse(path) {
        Route::Landing => print!("{}", templates::LANDING),
        Route::Sky(slug) => super::sky::show_recipient(session, &slug, true),
        Route::NotFound(p) => println!("{}: {p}", templates::NOT_FOUND),
    }
    Ok(())
}
