//! Five-card hand construction and classification.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::card::{Card, Rank, Suit};
use crate::error::ParseHandError;
use crate::outcome::{Category, CompareResult, Outcome};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Per-rank card counts, indexed by rank value (2 through 14).
type RankCounts = [u8; 15];

/// A five-card poker hand.
///
/// Cards are sorted ascending by rank at construction, so every
/// classification predicate reduces to a positional check on the sorted
/// sequence. Hands are immutable once constructed; classification and
/// comparison cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from five cards.
    ///
    /// # Errors
    ///
    /// Returns [`ParseHandError::DuplicateCard`] if the same card appears
    /// more than once.
    pub fn new(mut cards: [Card; HAND_SIZE]) -> Result<Self, ParseHandError> {
        for (i, card) in cards.iter().enumerate() {
            if cards[i + 1..].contains(card) {
                return Err(ParseHandError::DuplicateCard(*card));
            }
        }
        cards.sort_unstable_by_key(|card| card.rank);
        Ok(Self { cards })
    }

    /// Parses a hand from five whitespace-separated card tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ParseHandError`] if the input does not split into exactly
    /// five tokens, a token is not a valid card, or a card repeats.
    ///
    /// # Example
    ///
    /// ```
    /// use phrs::{Category, Hand};
    ///
    /// let hand = Hand::parse("AD TD KD JD QD")?;
    /// assert_eq!(hand.outcome().category, Category::RoyalFlush);
    /// # Ok::<(), phrs::ParseHandError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseHandError> {
        let mut cards = [Card::new(Rank::Two, Suit::Spades); HAND_SIZE];
        let mut count = 0usize;

        for token in text.split_whitespace() {
            if count < HAND_SIZE {
                cards[count] = Card::parse(token)?;
            }
            count += 1;
        }

        if count == HAND_SIZE {
            Self::new(cards)
        } else {
            Err(ParseHandError::WrongCardCount { count })
        }
    }

    /// Returns the five cards, sorted ascending by rank.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns whether all five cards share one suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|card| card.suit == suit)
    }

    /// Returns whether the five ranks form a contiguous run.
    ///
    /// The wheel (A-2-3-4-5) counts as a straight even though the ace is
    /// otherwise ranked high; it is the one exception to the generic
    /// contiguous-run rule and needs an explicit check.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        let values = self.rank_values();
        values.windows(2).all(|pair| pair[1] == pair[0] + 1) || values == [2, 3, 4, 5, 14]
    }

    /// Returns whether the hand is both a straight and a flush.
    #[must_use]
    pub fn is_straight_flush(&self) -> bool {
        self.is_flush() && self.is_straight()
    }

    /// Returns whether the hand is the ten-to-ace straight flush.
    ///
    /// A flush cannot repeat a rank, so five flush ranks bounded by Ten and
    /// Ace are exactly T-J-Q-K-A; no separate straight check is needed.
    #[must_use]
    pub fn is_royal_flush(&self) -> bool {
        self.is_flush() && self.cards[0].rank == Rank::Ten && self.cards[4].rank == Rank::Ace
    }

    /// Returns whether four cards share one rank.
    #[must_use]
    pub fn is_four_of_a_kind(&self) -> bool {
        rank_with_count(&self.rank_counts(), 4).is_some()
    }

    /// Returns whether the hand is three cards of one rank plus a pair.
    #[must_use]
    pub fn is_full_house(&self) -> bool {
        let counts = self.rank_counts();
        distinct_ranks(&counts) == 2 && rank_with_count(&counts, 3).is_some()
    }

    /// Returns whether three cards share one rank.
    #[must_use]
    pub fn is_three_of_a_kind(&self) -> bool {
        rank_with_count(&self.rank_counts(), 3).is_some()
    }

    /// Returns whether the hand holds two pairs of distinct ranks.
    ///
    /// Five cards over exactly three distinct ranks partition as {3,1,1} or
    /// {2,2,1}; only {2,2,1} contains a count-2 entry, so a single count-2
    /// check cannot be confused with a three-of-a-kind plus two kickers.
    #[must_use]
    pub fn is_two_pair(&self) -> bool {
        let counts = self.rank_counts();
        distinct_ranks(&counts) == 3 && rank_with_count(&counts, 2).is_some()
    }

    /// Returns whether the hand holds exactly one pair.
    ///
    /// Requiring four distinct ranks excludes the two-pair and full-house
    /// shapes, which also contain a count-2 entry.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        let counts = self.rank_counts();
        distinct_ranks(&counts) == 4 && rank_with_count(&counts, 2).is_some()
    }

    /// Classifies the hand into its category and tie-breaking rank value.
    ///
    /// Categories are tested in descending strength, so overlapping
    /// predicates (a straight flush is both a straight and a flush) resolve
    /// to the strongest match. The rank-count table is built once per call
    /// rather than once per predicate.
    ///
    /// # Example
    ///
    /// ```
    /// use phrs::{Category, Hand, Outcome};
    ///
    /// let wheel = Hand::parse("AH 2D 3C 4S 5D")?;
    /// assert_eq!(wheel.outcome(), Outcome::new(Category::Straight, 5));
    /// # Ok::<(), phrs::ParseHandError>(())
    /// ```
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let counts = self.rank_counts();
        let distinct = distinct_ranks(&counts);
        let flush = self.is_flush();
        let straight = self.is_straight();
        let high = self.cards[HAND_SIZE - 1].rank;

        if flush && self.cards[0].rank == Rank::Ten && high == Rank::Ace {
            return Outcome::new(Category::RoyalFlush, 0);
        }
        if flush && straight {
            return Outcome::new(Category::StraightFlush, high.value());
        }
        if let Some(rank) = rank_with_count(&counts, 4) {
            return Outcome::new(Category::FourOfAKind, rank);
        }
        if distinct == 2 {
            // Quads are ruled out above, so two ranks split {3,2}.
            if let Some(rank) = rank_with_count(&counts, 3) {
                return Outcome::new(Category::FullHouse, rank);
            }
        }
        if flush {
            return Outcome::new(Category::Flush, high.value());
        }
        if straight {
            return Outcome::new(Category::Straight, self.straight_high().value());
        }
        if let Some(rank) = rank_with_count(&counts, 3) {
            return Outcome::new(Category::ThreeOfAKind, rank);
        }
        if distinct == 3 {
            // Scanning high to low picks the higher of the two pairs.
            if let Some(rank) = rank_with_count(&counts, 2) {
                return Outcome::new(Category::TwoPair, rank);
            }
        }
        if let Some(rank) = rank_with_count(&counts, 2) {
            return Outcome::new(Category::Pair, rank);
        }
        Outcome::new(Category::HighCard, high.value())
    }

    /// Compares this hand against another.
    ///
    /// Higher category wins; within a category the higher tie-breaker wins;
    /// equal on both is a tie.
    ///
    /// # Example
    ///
    /// ```
    /// use phrs::{CompareResult, Hand};
    ///
    /// let royal = Hand::parse("AD TD KD JD QD")?;
    /// let straight_flush = Hand::parse("9D TD JD QD KD")?;
    /// assert_eq!(royal.compare_with(&straight_flush), CompareResult::Win);
    /// assert_eq!(straight_flush.compare_with(&royal), CompareResult::Loss);
    /// # Ok::<(), phrs::ParseHandError>(())
    /// ```
    #[must_use]
    pub fn compare_with(&self, other: &Self) -> CompareResult {
        match self.outcome().cmp(&other.outcome()) {
            Ordering::Greater => CompareResult::Win,
            Ordering::Less => CompareResult::Loss,
            Ordering::Equal => CompareResult::Tie,
        }
    }

    /// The rank at the top of a straight's run.
    ///
    /// Only meaningful when the hand is a straight. For the wheel the run
    /// tops out at the Five and the ace plays low.
    fn straight_high(&self) -> Rank {
        if self.cards[4].rank == Rank::Ace && self.cards[3].rank != Rank::King {
            self.cards[3].rank
        } else {
            self.cards[4].rank
        }
    }

    fn rank_counts(&self) -> RankCounts {
        let mut counts = [0u8; 15];
        for card in &self.cards {
            counts[card.rank.value() as usize] += 1;
        }
        counts
    }

    fn rank_values(&self) -> [u8; HAND_SIZE] {
        self.cards.map(|card| card.rank.value())
    }
}

impl FromStr for Hand {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Highest rank value with exactly `target` cards, if any.
fn rank_with_count(counts: &RankCounts, target: u8) -> Option<u8> {
    (2..=14u8).rev().find(|&value| counts[value as usize] == target)
}

fn distinct_ranks(counts: &RankCounts) -> usize {
    counts.iter().filter(|&&count| count > 0).count()
}
