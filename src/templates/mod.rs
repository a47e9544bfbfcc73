pub const LANDING: &str = r#"전달할 수 없는 편지 · 그 별에 닿기를

마음 속 깊은 곳에 간직한 이야기들과 꿈을 향한 여정.
전하지 못한 마음들이 별이 되어 우리를 비춥니다.

✉️  누구에게 편지를 전하고 싶나요?
    예) 첫사랑에게 / 떠난 친구에게 / 미래의 나에게 / 엄마에게 …

  unsent-stars to "<name>"       open (or create) a recipient's sky
  unsent-stars write "<letter>"  write to the unnamed sky
"#;

pub const NOT_FOUND: &str = "404 Not Found";

pub const READ_HINT: &str = "별을 번호로 골라 편지를 다시 읽을 수 있어요: unsent-stars read";

pub const SAVED: &str = "저장하면 이 편지는 밤하늘의 별이 됩니다.";

pub const EMPTY_BODY: &str = "the letter is empty, write something before saving";

pub const EMPTY_RECIPIENT: &str = "누구에게 편지를 전하고 싶나요? (recipient is empty)";

/// Frame for one opened letter.
pub fn letter_card(heading: &str, body: &str, when: &str) -> String {
    let rule = "─".repeat(40);
    format!("{heading}\n{rule}\n{body}\n{rule}\n{when}\n")
}

pub fn solo_heading() -> &'static str {
    "A letter I wrote before"
}

pub fn recipient_heading(label: &str) -> String {
    format!("『{label}』에게 보낸 편지")
}
