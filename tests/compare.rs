//! Hand classification and comparison integration tests.

use phrs::{
    Card, Category, CompareResult, Hand, Outcome, ParseCardError, ParseHandError, Rank, Suit,
};

fn hand(text: &str) -> Hand {
    text.parse().expect("valid hand")
}

fn category(text: &str) -> Category {
    hand(text).outcome().category
}

#[test]
fn royal_flush_identification() {
    assert_eq!(category("TD JD QD KD AD"), Category::RoyalFlush);

    // Mixed suits or a rank outside ten-to-ace break the royal flush.
    assert_ne!(category("TD JS QD KD AD"), Category::RoyalFlush);
    assert_ne!(category("TD JD AS KD AD"), Category::RoyalFlush);
}

#[test]
fn straight_flush_identification() {
    assert_eq!(category("9D TD JD QD KD"), Category::StraightFlush);
    // The wheel in one suit is still a straight flush.
    assert_eq!(category("AD 2D 3D 4D 5D"), Category::StraightFlush);

    assert_ne!(category("9D TS JD QD KD"), Category::StraightFlush);
    assert_ne!(category("7D 9D TD JD QD"), Category::StraightFlush);
}

#[test]
fn four_of_a_kind_identification() {
    assert_eq!(category("9D 9H 9S 9C AS"), Category::FourOfAKind);
    assert_ne!(category("9D TS JD QD KD"), Category::FourOfAKind);
}

#[test]
fn full_house_identification() {
    assert_eq!(category("9D 9H 9S AC AS"), Category::FullHouse);

    // Missing the pair or the set is not a full house.
    assert_eq!(category("9D 9H 9S QD KD"), Category::ThreeOfAKind);
    assert_eq!(category("8D 9H 9S QD QH"), Category::TwoPair);
}

#[test]
fn flush_identification() {
    assert_eq!(category("2D 4D 6D 8D TD"), Category::Flush);
    assert_eq!(category("2D 4H 6D 8D TD"), Category::HighCard);
}

#[test]
fn straight_identification() {
    assert_eq!(category("9H TD JC QS KD"), Category::Straight);
    assert_eq!(category("AH 2D 3C 4S 5D"), Category::Straight);
    assert_eq!(category("7H 9D TC JS QD"), Category::HighCard);
}

#[test]
fn paired_hand_identification() {
    assert_eq!(category("9D 9H 9S 8C AS"), Category::ThreeOfAKind);
    assert_eq!(category("9D 9H 8S 8C AS"), Category::TwoPair);
    assert_eq!(category("9D 2S 3H 6D 9S"), Category::Pair);
    assert_eq!(category("9D 9H 7S 8C AS"), Category::Pair);

    // A full house contains a set and a pair but classifies as neither.
    assert_eq!(category("9D 9S 9H QD QS"), Category::FullHouse);
}

#[test]
fn high_and_low_span_without_run_is_not_a_straight() {
    // Highest minus lowest equals four, but the ranks are not contiguous.
    assert_eq!(category("2D 2H 3S 4C 6D"), Category::Pair);
}

#[test]
fn predicates_overlap_but_classification_is_single() {
    let straight_flush = hand("9D TD JD QD KD");
    assert!(straight_flush.is_flush());
    assert!(straight_flush.is_straight());
    assert!(straight_flush.is_straight_flush());
    assert!(!straight_flush.is_royal_flush());
    assert_eq!(straight_flush.outcome().category, Category::StraightFlush);

    let full_house = hand("9D 9H 9S AC AS");
    assert!(full_house.is_full_house());
    assert!(full_house.is_three_of_a_kind());
    assert!(!full_house.is_two_pair());
    assert!(!full_house.is_pair());
    assert_eq!(full_house.outcome().category, Category::FullHouse);
}

#[test]
fn royal_flush_beats_straight_flush() {
    let royal = hand("AD TD KD JD QD");
    let straight_flush = hand("9D TD JD QD KD");

    assert_eq!(royal.compare_with(&straight_flush), CompareResult::Win);
    assert_eq!(straight_flush.compare_with(&royal), CompareResult::Loss);
}

#[test]
fn straight_flush_beats_four_of_a_kind() {
    let wheel_flush = hand("AD 2D 3D 4D 5D");
    let quads = hand("9D 9H 9S 9C AD");

    assert_eq!(wheel_flush.compare_with(&quads), CompareResult::Win);
    assert_eq!(quads.compare_with(&wheel_flush), CompareResult::Loss);
}

#[test]
fn straight_flush_tie_breaks_on_high_card() {
    let seven_high = hand("3D 4D 5D 6D 7D");
    let six_high = hand("2H 3H 4H 5H 6H");

    assert_eq!(seven_high.compare_with(&six_high), CompareResult::Win);
    assert_eq!(six_high.compare_with(&seven_high), CompareResult::Loss);
}

#[test]
fn four_of_a_kind_beats_full_house() {
    let quads = hand("9D 9H 9S 9C AD");
    let full_house = hand("9D 9H 9S AC AD");

    assert_eq!(quads.compare_with(&full_house), CompareResult::Win);
    assert_eq!(full_house.compare_with(&quads), CompareResult::Loss);
}

#[test]
fn four_of_a_kind_tie_breaks_on_quad_rank() {
    let tens = hand("TD TH TS TC AD");
    let nines = hand("9D 9H 9S 9C AH");

    assert_eq!(tens.compare_with(&nines), CompareResult::Win);
    assert_eq!(nines.compare_with(&tens), CompareResult::Loss);
}

#[test]
fn wheel_tie_breaks_on_the_five_not_the_ace() {
    let wheel = hand("AH 2D 3C 4S 5D");
    assert_eq!(wheel.outcome(), Outcome::new(Category::Straight, 5));

    // A six-high straight beats the wheel even though the wheel holds an ace.
    let six_high = hand("2H 3C 4D 5S 6H");
    assert_eq!(wheel.compare_with(&six_high), CompareResult::Loss);
    assert_eq!(six_high.compare_with(&wheel), CompareResult::Win);

    // Two wheels in different suits tie.
    let other_wheel = hand("AS 2C 3H 4D 5S");
    assert_eq!(wheel.compare_with(&other_wheel), CompareResult::Tie);
}

#[test]
fn two_pair_tie_breaks_on_higher_pair() {
    let nines_and_eights = hand("9D 9H 8S 8C AS");
    let eights_and_sevens = hand("8D 8H 7S 7C AD");
    assert_eq!(
        nines_and_eights.outcome(),
        Outcome::new(Category::TwoPair, 9)
    );
    assert_eq!(
        nines_and_eights.compare_with(&eights_and_sevens),
        CompareResult::Win
    );

    // The lower pair never participates in the tie-break.
    let nines_and_twos = hand("9S 9C 2S 2C 3S");
    assert_eq!(
        nines_and_eights.compare_with(&nines_and_twos),
        CompareResult::Tie
    );
}

#[test]
fn comparison_is_reflexive_and_antisymmetric() {
    let hands = [
        "TD JD QD KD AD",
        "AD 2D 3D 4D 5D",
        "9D 9H 9S 9C AS",
        "9D 9H 9S AC AS",
        "2D 4D 6D 8D TD",
        "9H TD JC QS KD",
        "9D 9H 9S 8C AS",
        "9D 9H 8S 8C AS",
        "9D 9H 7S 8C AS",
        "2D 5H 7S 9C JS",
    ];

    for text in hands {
        assert_eq!(hand(text).compare_with(&hand(text)), CompareResult::Tie);
    }

    for first in hands {
        for second in hands {
            let forward = hand(first).compare_with(&hand(second));
            let backward = hand(second).compare_with(&hand(first));
            match forward {
                CompareResult::Win => assert_eq!(backward, CompareResult::Loss),
                CompareResult::Loss => assert_eq!(backward, CompareResult::Win),
                CompareResult::Tie => assert_eq!(backward, CompareResult::Tie),
            }
        }
    }
}

#[test]
fn category_ordering_is_ascending() {
    let ascending = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    for pair in ascending.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn outcome_ordering_is_category_then_tie_breaker() {
    assert!(Outcome::new(Category::Flush, 10) > Outcome::new(Category::Flush, 9));
    // A higher category wins regardless of tie-breaker.
    assert!(Outcome::new(Category::Straight, 5) > Outcome::new(Category::ThreeOfAKind, 14));
}

#[test]
fn parsing_is_case_insensitive() {
    assert_eq!(hand("ad td kd jd qd"), hand("AD TD KD JD QD"));
    assert_eq!(category("tD jd Qd kD Ad"), Category::RoyalFlush);
}

#[test]
fn hand_displays_sorted_canonical_tokens() {
    assert_eq!(hand("AH 2D 3C 4S 5D").to_string(), "2D 3C 4S 5D AH");
    assert_eq!(Card::parse("tD").expect("valid card").to_string(), "TD");
}

#[test]
fn hand_construction_from_cards() {
    let cards = [
        Card::new(Rank::Ace, Suit::Diamonds),
        Card::new(Rank::Ten, Suit::Diamonds),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Jack, Suit::Diamonds),
        Card::new(Rank::Queen, Suit::Diamonds),
    ];

    let hand = Hand::new(cards).expect("valid cards");
    assert_eq!(hand.outcome().category, Category::RoyalFlush);
    assert_eq!(hand.cards()[0].rank, Rank::Ten);
    assert_eq!(hand.cards()[4].rank, Rank::Ace);
}

#[test]
fn wrong_token_count_is_rejected() {
    assert_eq!(
        Hand::parse("AD TD KD JD"),
        Err(ParseHandError::WrongCardCount { count: 4 })
    );
    assert_eq!(
        Hand::parse("AD TD KD JD QD 2S"),
        Err(ParseHandError::WrongCardCount { count: 6 })
    );
    assert_eq!(
        Hand::parse(""),
        Err(ParseHandError::WrongCardCount { count: 0 })
    );
}

#[test]
fn malformed_tokens_are_rejected() {
    assert_eq!(
        Hand::parse("AD TD KD JD QX"),
        Err(ParseHandError::Card(ParseCardError::InvalidSuit('X')))
    );
    assert_eq!(
        Hand::parse("1D TD KD JD QD"),
        Err(ParseHandError::Card(ParseCardError::InvalidRank('1')))
    );
    assert_eq!(
        Hand::parse("AD TD KD JD QDX"),
        Err(ParseHandError::Card(ParseCardError::WrongLength { len: 3 }))
    );
    assert_eq!(
        Hand::parse("A TD KD JD QD"),
        Err(ParseHandError::Card(ParseCardError::WrongLength { len: 1 }))
    );
}

#[test]
fn duplicate_cards_are_rejected() {
    assert_eq!(
        Hand::parse("AD AD KD JD QD"),
        Err(ParseHandError::DuplicateCard(Card::new(
            Rank::Ace,
            Suit::Diamonds
        )))
    );

    // Same rank in different suits is fine.
    assert!(Hand::parse("AD AS KD JD QD").is_ok());
}
