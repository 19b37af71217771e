//! Regex engine: walk leftmost-first matches of `w+o+l+f+` and require
//! each one to start where the previous one ended.

use crate::block::{LetterCounts, WolfBlock};
use crate::error::Rejection;
use regex::Regex;
use std::sync::OnceLock;

fn block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"w+o+l+f+").expect("wolf block regex must compile"))
}

/// The longest prefix that could still grow into a block.
fn partial_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^w+(?:o+(?:l+)?)?").expect("partial block regex must compile"))
}

/// Every maximal `w+o+l+f+` run in `input`, balanced or not, wherever it
/// appears. Text between runs is skipped.
pub fn blocks(input: &str) -> impl Iterator<Item = WolfBlock> + '_ {
    block_re()
        .find_iter(input)
        .map(|m| WolfBlock::new(m.start(), m.end(), LetterCounts::tally(m.as_str())))
}

/// Same contract as [`crate::scan::scan`], driven by the regex matcher.
pub fn scan(input: &str, mut on_block: impl FnMut(WolfBlock)) -> Result<usize, Rejection> {
    if input.is_empty() {
        return Err(Rejection::Empty);
    }

    let mut cursor = 0;
    let mut consumed = 0;
    for block in blocks(input) {
        if block.start != cursor {
            return Err(stalled_at(input, cursor));
        }
        if !block.is_well_formed() {
            return Err(Rejection::Unbalanced { block });
        }
        cursor = block.end;
        consumed += 1;
        on_block(block);
    }

    if cursor < input.len() {
        return Err(stalled_at(input, cursor));
    }
    Ok(consumed)
}

/// Explain why no block starts at `cursor`.
fn stalled_at(input: &str, cursor: usize) -> Rejection {
    let reach = partial_re()
        .find(&input[cursor..])
        .map_or(0, |m| m.end());
    Rejection::at(input, cursor, cursor + reach)
}
