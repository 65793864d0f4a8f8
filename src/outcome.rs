//! Hand categories, classification outcomes, and comparison results.

/// The ten standard poker hand categories, in ascending strength.
///
/// The derived ordering follows the discriminants, so categories compare
/// directly: a flush beats a straight, a full house beats both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// No other category applies; the highest card plays.
    HighCard = 0,
    /// Two cards of one rank.
    Pair = 1,
    /// Two cards of one rank plus two cards of another.
    TwoPair = 2,
    /// Three cards of one rank.
    ThreeOfAKind = 3,
    /// Five contiguous ranks, mixed suits.
    Straight = 4,
    /// Five cards of one suit, not contiguous.
    Flush = 5,
    /// Three cards of one rank plus a pair of another.
    FullHouse = 6,
    /// Four cards of one rank.
    FourOfAKind = 7,
    /// Five contiguous ranks of one suit.
    StraightFlush = 8,
    /// The ten-to-ace straight flush.
    RoyalFlush = 9,
}

/// The classification of a hand: a category plus a tie-breaking rank value.
///
/// Outcomes order lexicographically, category first then tie-breaker, which
/// the derived ordering provides through field order. A royal flush carries
/// a tie-breaker of zero since two royal flushes always tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// The hand category.
    pub category: Category,
    /// Rank value used to order hands within the same category.
    pub tie_breaker: u8,
}

impl Outcome {
    /// Creates an outcome from a category and tie-breaker.
    #[must_use]
    pub const fn new(category: Category, tie_breaker: u8) -> Self {
        Self {
            category,
            tie_breaker,
        }
    }
}

/// Result of comparing one hand against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompareResult {
    /// This hand beats the other.
    Win,
    /// This hand loses to the other.
    Loss,
    /// Both hands have equal outcomes.
    Tie,
}
