//! Formatting utilities for terminal output

use indicatif::{ProgressBar, ProgressStyle};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed_precise} | eta {eta}";

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an ELR score (0 to 1) as a bar
#[must_use]
pub fn elr_bar(elr: f64, width: usize) -> String {
    create_progress_bar(elr, 1.0, width)
}

/// Progress bar for a run over `len` guesses
#[must_use]
pub fn progress_bar(len: usize) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    let pb = ProgressBar::new(len as u64);
    pb.set_style(style);
    pb
}

/// Percentage of `part` in `whole`, 0 for an empty whole
#[must_use]
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn progress_bar_degenerate_inputs() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
        assert_eq!(create_progress_bar(-1.0, 1.0, 4), "░░░░");
        assert_eq!(create_progress_bar(3.0, 1.0, 4), "████");
    }

    #[test]
    fn elr_bar_scales_to_one() {
        assert_eq!(elr_bar(0.75, 8), "██████░░");
    }

    #[test]
    fn percent_of_empty_is_zero() {
        assert!(percent(3, 0).abs() < f64::EPSILON);
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_bar_has_length() {
        assert_eq!(progress_bar(42).length(), Some(42));
    }
}
