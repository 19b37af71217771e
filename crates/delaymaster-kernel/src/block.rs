//! Wolf blocks: maximal runs of the shape `w+o+l+f+`.

use serde::{Deserialize, Serialize};

/// The four letters of a block, in the only order they may appear.
pub const WOLF: [u8; 4] = *b"wolf";

/// Per-letter counts inside one block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterCounts {
    pub w: u64,
    pub o: u64,
    pub l: u64,
    pub f: u64,
}

impl LetterCounts {
    pub fn new(w: u64, o: u64, l: u64, f: u64) -> Self {
        Self { w, o, l, f }
    }

    /// Build from counts indexed in `WOLF` order.
    pub(crate) fn from_slots(slots: [u64; 4]) -> Self {
        let [w, o, l, f] = slots;
        Self { w, o, l, f }
    }

    /// Count the wolf letters in `text`, ignoring everything else.
    pub fn tally(text: &str) -> Self {
        let mut counts = Self::default();
        for byte in text.bytes() {
            match byte {
                b'w' => counts.w += 1,
                b'o' => counts.o += 1,
                b'l' => counts.l += 1,
                b'f' => counts.f += 1,
                _ => {}
            }
        }
        counts
    }

    /// True when all four counts are equal and non-zero.
    pub fn is_balanced(&self) -> bool {
        self.w > 0 && self.w == self.o && self.o == self.l && self.l == self.f
    }
}

impl std::fmt::Display for LetterCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "w={} o={} l={} f={}", self.w, self.o, self.l, self.f)
    }
}

/// One matched `w+o+l+f+` run, located by byte offsets into the input.
///
/// `end` is exclusive. Only ASCII letters are ever matched, so offsets are
/// always char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WolfBlock {
    pub start: usize,
    pub end: usize,
    pub counts: LetterCounts,
}

impl WolfBlock {
    pub fn new(start: usize, end: usize, counts: LetterCounts) -> Self {
        Self { start, end, counts }
    }

    /// A block is well formed when its four letter counts agree.
    pub fn is_well_formed(&self) -> bool {
        self.counts.is_balanced()
    }

    /// The shared count `n` of a well-formed `w^n o^n l^n f^n` block.
    pub fn order(&self) -> Option<u64> {
        self.is_well_formed().then_some(self.counts.w)
    }
}

impl std::fmt::Display for WolfBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{} {}", self.start, self.end, self.counts)
    }
}
