pub mod config;
pub mod letter;
pub mod route;
pub mod sky;
pub mod slug;
pub mod storage;
pub mod store;

pub use letter::{Emotion, Letter};
pub use store::{Collection, LetterStore, SoloStore};
