//! Formatting utilities for terminal output

use crate::core::Score;

/// Peg marking a right color in the right slot
pub const EXACT_PEG: char = '●';

/// Peg marking a right color in the wrong slot
pub const PARTIAL_PEG: char = '○';

/// Placeholder for a slot that earned no peg
pub const EMPTY_PEG: char = '·';

/// Format a score as a row of `length` pegs, exact pegs first
#[must_use]
pub fn score_to_pegs(score: Score, length: usize) -> String {
    let exact = usize::from(score.exact);
    let partial = usize::from(score.partial);
    let empty = length.saturating_sub(exact + partial);

    let mut result = String::with_capacity(length * 3);
    result.extend(std::iter::repeat_n(EXACT_PEG, exact));
    result.extend(std::iter::repeat_n(PARTIAL_PEG, partial));
    result.extend(std::iter::repeat_n(EMPTY_PEG, empty));
    result
}

/// Describe a score as red and white peg names
#[must_use]
pub fn score_to_words(score: Score) -> String {
    let mut pegs = Vec::with_capacity(usize::from(score.exact + score.partial));
    pegs.extend(std::iter::repeat_n("red", usize::from(score.exact)));
    pegs.extend(std::iter::repeat_n("white", usize::from(score.partial)));

    if pegs.is_empty() {
        "none".to_string()
    } else {
        pegs.join(" ")
    }
}
