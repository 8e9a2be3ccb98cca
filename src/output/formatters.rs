//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, mark: Mark) -> ColoredString {
    let tile = format!(" {letter} ");
    match mark {
        Mark::Correct => tile.black().on_green().bold(),
        Mark::Present => tile.black().on_yellow().bold(),
        Mark::Absent => tile.white().on_bright_black(),
    }
}

/// Render a guess as colored tiles, one per letter
#[must_use]
pub fn feedback_tiles(guess: &Word, feedback: Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| letter_tile(letter, mark).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most a guess could ever yield
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, (Feedback::COUNT as f64).log2(), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop ANSI color sequences, whether or not coloring is enabled
    fn plain(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(ch) = chars.next() {
            if ch == '\x1b' {
                chars.by_ref().find(|&c| c == 'm');
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn tiles_keep_letters_in_order() {
        let guess = Word::new("crane").unwrap();

        let tiles = feedback_tiles(&guess, Feedback::ALL_CORRECT);
        assert_eq!(plain(&tiles), " C  R  A  N  E ");
    }

    #[test]
    fn tiles_follow_marks() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("react").unwrap();
        let feedback = Feedback::calculate(&guess, &answer);

        let expected: String = guess
            .text()
            .chars()
            .zip(feedback.marks())
            .map(|(letter, mark)| letter_tile(letter, mark).to_string())
            .collect();
        assert_eq!(feedback_tiles(&guess, feedback), expected);
        assert_eq!(plain(&expected), " C  R  A  N  E ");
        assert_eq!(&*letter_tile('A', Mark::Present), " A ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn entropy_bar_is_full_at_maximum() {
        let max = (Feedback::COUNT as f64).log2();
        assert_eq!(entropy_bar(max, 8), "████████");
        assert_eq!(entropy_bar(0.0, 8), "░░░░░░░░");
    }
}
