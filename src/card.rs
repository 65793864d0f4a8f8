//! Card types: suits, ranks, and two-character card tokens.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// Suits carry no ordering; only flush detection looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades (`S`).
    Spades,
    /// Hearts (`H`).
    Hearts,
    /// Diamonds (`D`).
    Diamonds,
    /// Clubs (`C`).
    Clubs,
}

impl Suit {
    /// Parses a suit from its one-character symbol, case-insensitively.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            _ => None,
        }
    }

    /// Returns the one-character uppercase symbol for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }
}

/// Card rank, ace high.
///
/// Discriminants are the comparison scale: 2 through 10, then Jack 11,
/// Queen 12, King 13, Ace 14. The derived ordering is rank ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// Two (`2`).
    Two = 2,
    /// Three (`3`).
    Three,
    /// Four (`4`).
    Four,
    /// Five (`5`).
    Five,
    /// Six (`6`).
    Six,
    /// Seven (`7`).
    Seven,
    /// Eight (`8`).
    Eight,
    /// Nine (`9`).
    Nine,
    /// Ten (`T`).
    Ten,
    /// Jack (`J`).
    Jack,
    /// Queen (`Q`).
    Queen,
    /// King (`K`).
    King,
    /// Ace (`A`).
    Ace,
}

impl Rank {
    /// Parses a rank from its one-character symbol, case-insensitively.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    /// Returns the numeric rank value (2 through 14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the one-character uppercase symbol for this rank.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

/// A playing card.
///
/// `Card` does not implement `Ord`: hands order cards by rank alone, and a
/// suit-inclusive derived ordering would contradict that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parses a card from a two-character `<rank><suit>` token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError`] if the token is not exactly two
    /// characters or either character is unrecognized.
    ///
    /// # Example
    ///
    /// ```
    /// use phrs::{Card, Rank, Suit};
    ///
    /// let card = Card::parse("aS")?;
    /// assert_eq!(card, Card::new(Rank::Ace, Suit::Spades));
    /// # Ok::<(), phrs::ParseCardError>(())
    /// ```
    pub fn parse(token: &str) -> Result<Self, ParseCardError> {
        let mut chars = token.chars();
        let (Some(rank_char), Some(suit_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCardError::WrongLength {
                len: token.chars().count(),
            });
        };

        let rank = Rank::from_char(rank_char).ok_or(ParseCardError::InvalidRank(rank_char))?;
        let suit = Suit::from_char(suit_char).ok_or(ParseCardError::InvalidSuit(suit_char))?;
        Ok(Self { rank, suit })
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}
