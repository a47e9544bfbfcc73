use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const X_RANGE: std::ops::RangeInclusive<u8> = 10..=90;
pub const Y_RANGE: std::ops::RangeInclusive<u8> = 10..=80;

/// Mood tag attached to a letter; decides the colour of its star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    #[default]
    Happy,
    Sad,
    Angry,
    Calm,
}

impl Emotion {
    pub const ALL: [Self; 4] = [Self::Happy, Self::Sad, Self::Angry, Self::Calm];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Calm => "calm",
        }
    }

    /// Star colour as RGB.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Happy => (0xFC, 0xD3, 0x4D),
            Self::Sad => (0x60, 0xA5, 0xFA),
            Self::Angry => (0xF8, 0x71, 0x71),
            Self::Calm => (0xA7, 0xF3, 0xD0),
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Angry => "😡",
            Self::Calm => "😌",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown emotion '{s}' (expected happy, sad, angry or calm)"))
    }
}

/// Where a star sits, in percent of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    /// Draw a position uniformly inside the star area. No collision avoidance.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { x: rng.gen_range(X_RANGE), y: rng.gen_range(Y_RANGE) }
    }
}

/// One submitted letter. Never edited once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    pub x: u8,
    pub y: u8,
}

/// Fields the caller decides when writing a letter.
#[derive(Debug, Clone, Default)]
pub struct Draft<'a> {
    pub to: Option<&'a str>,
    pub slug: Option<&'a str>,
    pub body: &'a str,
    pub emotion: Option<Emotion>,
}

impl Letter {
    /// Build a fresh letter: new id, trimmed body, random position.
    ///
    /// `not_before` keeps timestamps non-decreasing within a collection even
    /// if the wall clock steps backwards.
    pub fn create<R: Rng + ?Sized>(draft: &Draft<'_>, not_before: Option<i64>, rng: &mut R) -> Self {
        let now = Utc::now().timestamp_millis();
        let created_at = not_before.map_or(now, |t| now.max(t));
        let pos = Position::random(rng);

        Self {
            id: Uuid::new_v4().to_string(),
            to: draft.to.map(str::to_string),
            slug: draft.slug.map(str::to_string),
            body: draft.body.trim().to_string(),
            emotion: draft.emotion,
            created_at,
            x: pos.x,
            y: pos.y,
        }
    }

    pub fn position(&self) -> Position {
        Position { x: self.x, y: self.y }
    }

    /// Mood used for display; untagged letters show as [`Emotion::Happy`].
    pub fn mood(&self) -> Emotion {
        self.emotion.unwrap_or_default()
    }

    pub fn created_local(&self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp_millis(self.created_at).map(|t| t.with_timezone(&Local))
    }

    /// Creation time for display, e.g. `2025-03-01 21:04`.
    pub fn created_label(&self) -> String {
        self.created_local()
            .map_or_else(|| "unknown time".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string())
    }

    /// First line of the body, cut to `max` characters.
    pub fn preview(&self, max: usize) -> String {
        let first = self.body.lines().next().unwrap_or_default();
        if first.chars().count() <= max && !self.body.contains('\n') {
            return first.to_string();
        }
        let cut: String = first.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
