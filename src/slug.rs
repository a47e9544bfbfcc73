use anyhow::{Result, bail};

/// Precomposed Hangul syllables (`가`..=`힣`).
const HANGUL_SYLLABLES: std::ops::RangeInclusive<char> = '\u{AC00}'..='\u{D7A3}';

/// Turn free-text recipient input into the key its letters are filed under.
///
/// Trims, lowercases, collapses each whitespace run into a single `-`, then
/// keeps only `a-z`, `0-9`, `-` and Hangul syllables. The result may be
/// empty; see [`require`].
pub fn normalize(input: &str) -> String {
    let lowered = input.trim_matches(is_space).to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut in_space = false;
    for c in lowered.chars() {
        if is_space(c) {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if is_slug_char(c) {
            out.push(c);
        }
    }
    out
}

/// Like [`normalize`], but an empty key is an error: there is no recipient.
pub fn require(input: &str) -> Result<String> {
    let slug = normalize(input);
    if slug.is_empty() {
        bail!("'{}' has no usable characters for a recipient name", input.trim());
    }
    Ok(slug)
}

/// Unicode whitespace plus the byte-order mark, which browsers also treat as
/// a space.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || HANGUL_SYLLABLES.contains(&c)
}
