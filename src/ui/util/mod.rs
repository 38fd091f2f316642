pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

use unicode_width::UnicodeWidthStr;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_STEP_MS: u128 = 100;

pub fn spinner_frame() -> &'static str {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    SPINNER_FRAMES[(now / FRAME_STEP_MS) as usize % SPINNER_FRAMES.len()]
}

/// Word-wraps `text` to `width` columns. Existing line breaks are kept and
/// words wider than the line are split.
///
/// `Paragraph::wrap` does not report how many rows it produced, and the
/// history list needs that count to keep the cursor entry in view.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.width()
            } else {
                line.width() + 1 + word.width()
            };

            if needed > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }

            if word.width() > width {
                for ch in word.chars() {
                    if line.width() + ch.to_string().width() > width {
                        lines.push(std::mem::take(&mut line));
                    }
                    line.push(ch);
                }
                continue;
            }

            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn keeps_blank_lines_between_paragraphs() {
        assert_eq!(wrap_text("one\n\ntwo", 20), vec!["one", "", "two"]);
    }

    #[test]
    fn splits_overlong_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn spinner_frame_is_a_known_glyph() {
        assert!(SPINNER_FRAMES.contains(&spinner_frame()));
    }
}
