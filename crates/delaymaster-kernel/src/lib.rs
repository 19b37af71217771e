//! # Delaymaster Kernel
//!
//! Decides whether a string is made entirely of wolf blocks: runs of
//! `w^n o^n l^n f^n` with `n >= 1`, placed back to back with nothing before,
//! between, or after them. `"wolf"`, `"wwoollff"` and `"wolfwwoollff"` are
//! `VALID`; `"wwollff"`, `"owlf"`, `"wolfx"` and `""` are `INVALID`.
//!
//! ## Architecture
//!
//! ```text
//! Validator { engine }  ← check / check_optional / validate
//!     │
//! Engine                ← Streaming (byte scan) | Regex (w+o+l+f+ matches)
//!     │
//! WolfBlock             ← one maximal run at the cursor, with LetterCounts
//!     │
//! Verdict | Rejection   ← VALID/INVALID, or the first reason it failed
//! ```
//!
//! Each block is checked on its own; neighbouring blocks may have different
//! `n`. Only lowercase ASCII `w`, `o`, `l`, `f` are letters of the language.

pub mod block;
pub mod error;
pub mod pattern;
pub mod scan;
pub mod validator;
pub mod verdict;

pub use block::{LetterCounts, WolfBlock};
pub use error::Rejection;
pub use pattern::blocks;
pub use validator::{Engine, Validator, check, check_optional, validate};
pub use verdict::Verdict;
