//! The validator front door: pick an engine, get a verdict.

use crate::block::WolfBlock;
use crate::error::Rejection;
use crate::verdict::Verdict;
use crate::{pattern, scan};
use tracing::{debug, trace};

/// Which scanner implementation decides the input.
///
/// Both engines accept exactly the same language and report the same
/// rejection for the same input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    /// Hand-rolled single pass over bytes.
    #[default]
    Streaming,

    /// Leftmost-first matches of `w+o+l+f+` from the `regex` crate.
    Regex,
}

impl Engine {
    pub const ALL: [Engine; 2] = [Engine::Streaming, Engine::Regex];

    fn scan(self, input: &str, on_block: impl FnMut(WolfBlock)) -> Result<usize, Rejection> {
        match self {
            Self::Streaming => scan::scan(input, on_block),
            Self::Regex => pattern::scan(input, on_block),
        }
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Streaming => write!(f, "streaming"),
            Self::Regex => write!(f, "regex"),
        }
    }
}

impl std::str::FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "streaming" => Ok(Self::Streaming),
            "regex" => Ok(Self::Regex),
            _ => Err(format!("unknown engine: {s}")),
        }
    }
}

/// Decides whether strings are gap-free concatenations of well-formed
/// wolf blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    engine: Engine,
}

impl Validator {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// `VALID` or `INVALID`. Total: never panics, never errors.
    pub fn check(&self, input: &str) -> Verdict {
        let outcome = self.engine.scan(input, |block| {
            trace!(engine = %self.engine, %block, "accepted block");
        });
        self.record(outcome).is_ok().into()
    }

    /// As [`Validator::check`], with an absent input counting as `INVALID`.
    pub fn check_optional(&self, input: Option<&str>) -> Verdict {
        match input {
            Some(input) => self.check(input),
            None => {
                debug!(engine = %self.engine, "rejected absent input");
                Verdict::Invalid
            }
        }
    }

    /// The block decomposition of a valid input, or the first rejection.
    pub fn validate(&self, input: &str) -> Result<Vec<WolfBlock>, Rejection> {
        let mut blocks = Vec::new();
        self.record(self.engine.scan(input, |block| blocks.push(block)))?;
        Ok(blocks)
    }

    fn record(&self, outcome: Result<usize, Rejection>) -> Result<usize, Rejection> {
        match &outcome {
            Ok(consumed) => trace!(engine = %self.engine, consumed, "input accepted"),
            Err(reason) => debug!(engine = %self.engine, %reason, "input rejected"),
        }
        outcome
    }
}

/// Check with the default streaming engine.
pub fn check(input: &str) -> Verdict {
    Validator::default().check(input)
}

/// Check a possibly absent input with the default engine.
pub fn check_optional(input: Option<&str>) -> Verdict {
    Validator::default().check_optional(input)
}

/// Validate with the default engine, returning blocks or the rejection.
pub fn validate(input: &str) -> Result<Vec<WolfBlock>, Rejection> {
    Validator::default().validate(input)
}
