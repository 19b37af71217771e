//! Streaming engine: one left-to-right pass with constant extra state.
//!
//! At the cursor we count a run of `w`, then `o`, then `l`, then `f`. Each
//! run is taken greedily, so the block found is the longest `w+o+l+f+`
//! starting at the cursor. An empty run means no block can start here.

use crate::block::{LetterCounts, WOLF, WolfBlock};
use crate::error::Rejection;

/// Scan `input`, handing each well-formed block to `on_block`.
///
/// Returns the number of blocks consumed, or the first rejection. Nothing is
/// buffered; callers that only need a verdict pass a no-op closure.
pub fn scan(input: &str, mut on_block: impl FnMut(WolfBlock)) -> Result<usize, Rejection> {
    if input.is_empty() {
        return Err(Rejection::Empty);
    }

    let mut cursor = 0;
    let mut consumed = 0;
    while cursor < input.len() {
        let block = block_at(input, cursor)?;
        if !block.is_well_formed() {
            return Err(Rejection::Unbalanced { block });
        }
        cursor = block.end;
        consumed += 1;
        on_block(block);
    }
    Ok(consumed)
}

/// The longest `w+o+l+f+` run starting exactly at `start`.
fn block_at(input: &str, start: usize) -> Result<WolfBlock, Rejection> {
    let bytes = input.as_bytes();
    let mut pos = start;
    let mut slots = [0u64; 4];

    for (slot, letter) in WOLF.iter().enumerate() {
        let run_start = pos;
        while bytes.get(pos) == Some(letter) {
            pos += 1;
        }
        if pos == run_start {
            return Err(Rejection::at(input, start, pos));
        }
        slots[slot] = (pos - run_start) as u64;
    }

    Ok(WolfBlock::new(start, pos, LetterCounts::from_slots(slots)))
}
