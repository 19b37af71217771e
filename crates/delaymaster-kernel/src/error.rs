//! Reasons an input is rejected.

use crate::block::WolfBlock;

/// The first reason a candidate string fails validation.
///
/// `check` folds every variant into `Verdict::Invalid`; `validate` hands the
/// reason back for callers that want to explain the result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// Empty or absent input.
    #[error("input is empty")]
    Empty,

    /// A character that cannot start or continue a block at this position.
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { offset: usize, found: char },

    /// Input ran out before a block saw all four letters.
    #[error("block starting at offset {start} ends at offset {offset} before reaching 'f'")]
    IncompleteBlock { start: usize, offset: usize },

    /// A complete run whose letter counts differ.
    #[error("unbalanced block at {block}")]
    Unbalanced { block: WolfBlock },
}

impl Rejection {
    /// Byte offset the rejection points at.
    pub fn offset(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::UnexpectedChar { offset, .. } => *offset,
            Self::IncompleteBlock { offset, .. } => *offset,
            Self::Unbalanced { block } => block.start,
        }
    }

    /// Classify why no block could be completed at `start`, given that the
    /// run stopped at `offset`.
    pub(crate) fn at(input: &str, start: usize, offset: usize) -> Self {
        match input[offset..].chars().next() {
            Some(found) => Self::UnexpectedChar { offset, found },
            None => Self::IncompleteBlock { start, offset },
        }
    }
}
