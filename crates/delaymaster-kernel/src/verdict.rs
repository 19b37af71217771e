//! The binary outcome of a wolf check.
//!
//! Callers compare against the literal strings `"VALID"` and `"INVALID"`,
//! so the rendered form is part of the contract and is case-sensitive.

/// Classification of a candidate string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// The input is one or more well-formed wolf blocks, back to back.
    Valid,

    /// Anything else, including empty or absent input.
    Invalid,
}

impl Verdict {
    pub const VALID: &'static str = "VALID";
    pub const INVALID: &'static str = "INVALID";

    /// The literal result string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => Self::VALID,
            Self::Invalid => Self::INVALID,
        }
    }

    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::Invalid
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::VALID => Ok(Self::Valid),
            Self::INVALID => Ok(Self::Invalid),
            _ => Err(format!("unknown verdict: {s}")),
        }
    }
}
