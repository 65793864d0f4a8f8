//! A five-card poker hand evaluator with optional `no_std` support.
//!
//! The crate parses hands from five space-separated two-character card
//! tokens, classifies them into the ten standard poker categories (high
//! card through royal flush), and compares two hands for a win, loss, or
//! tie. Classification handles overlapping shapes (straight vs. flush vs.
//! straight flush) and the ace-low wheel straight.
//!
//! Everything is a pure function of its inputs: hands are immutable after
//! construction, evaluation allocates nothing, and independent hands can
//! be used from multiple threads without coordination.
//!
//! # Example
//!
//! ```
//! use phrs::{Category, CompareResult, Hand};
//!
//! let royal: Hand = "AD TD KD JD QD".parse()?;
//! let quads: Hand = "9D 9H 9S 9C AD".parse()?;
//!
//! assert_eq!(royal.outcome().category, Category::RoyalFlush);
//! assert_eq!(royal.compare_with(&quads), CompareResult::Win);
//! assert_eq!(quads.compare_with(&royal), CompareResult::Loss);
//! # Ok::<(), phrs::ParseHandError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod hand;
pub mod outcome;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use error::{ParseCardError, ParseHandError};
pub use hand::{HAND_SIZE, Hand};
pub use outcome::{Category, CompareResult, Outcome};
