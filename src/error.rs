//! Error types for card and hand parsing.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Token is not exactly two characters.
    #[error("card token must be two characters, got {len}")]
    WrongLength {
        /// Number of characters in the rejected token.
        len: usize,
    },
    /// Unrecognized rank character.
    #[error("unrecognized rank `{0}`")]
    InvalidRank(char),
    /// Unrecognized suit character.
    #[error("unrecognized suit `{0}`")]
    InvalidSuit(char),
}

/// Errors that can occur when parsing a five-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseHandError {
    /// Input did not split into exactly five tokens.
    #[error("hand must contain exactly five cards, got {count}")]
    WrongCardCount {
        /// Number of whitespace-separated tokens found.
        count: usize,
    },
    /// A token failed to parse as a card.
    #[error(transparent)]
    Card(#[from] ParseCardError),
    /// The same card appears more than once.
    #[error("duplicate card `{0}`")]
    DuplicateCard(Card),
}
