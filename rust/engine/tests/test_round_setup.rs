use std::collections::HashSet;

use felt_engine::cards::Card;
use felt_engine::errors::GameError;
use felt_engine::round::{Round, Stakes, Street, Variant};

#[test]
fn holdem_start_deals_two_cards_and_posts_blinds() {
    let mut round = Round::new(Variant::Holdem, 2, Some(42)).unwrap();
    round.start_round().unwrap();

    for p in round.participants() {
        assert_eq!(p.hole_cards().len(), 2);
    }
    assert_eq!(round.pot(), 30); // 10 + 20
    assert_eq!(round.table_bet(), 20);
    assert_eq!(round.street(), Street::Preflop);
    assert!(round.community().is_empty());
    assert_eq!(round.participants()[0].chips(), 990);
    assert_eq!(round.participants()[1].chips(), 980);
    assert_eq!(round.participants()[2].chips(), 1_000);
    assert_eq!(round.deck_remaining(), 46); // 52 - 3 seats x 2 cards
}

#[test]
fn omaha_start_deals_four_cards_each() {
    let mut round = Round::new(Variant::Omaha, 3, Some(7)).unwrap();
    round.start_round().unwrap();
    for p in round.participants() {
        assert_eq!(p.hole_cards().len(), 4);
    }
}

#[test]
fn dealt_hole_cards_are_all_distinct() {
    let mut round = Round::new(Variant::Omaha, 7, Some(11)).unwrap();
    round.start_round().unwrap();
    let mut seen: HashSet<Card> = HashSet::new();
    for p in round.participants() {
        for &c in p.hole_cards() {
            assert!(seen.insert(c), "card dealt twice: {}", c);
        }
    }
    assert_eq!(seen.len(), 8 * 4);
}

#[test]
fn opponent_count_outside_range_is_rejected() {
    assert_eq!(
        Round::new(Variant::Holdem, 0, None).unwrap_err(),
        GameError::InvalidOpponentCount { count: 0 }
    );
    assert_eq!(
        Round::new(Variant::Holdem, 8, None).unwrap_err(),
        GameError::InvalidOpponentCount { count: 8 }
    );
    assert!(Round::new(Variant::Holdem, 1, None).is_ok());
    assert!(Round::new(Variant::Holdem, 7, None).is_ok());
}

#[test]
fn variant_parses_from_strings() {
    assert_eq!("holdem".parse::<Variant>().unwrap(), Variant::Holdem);
    assert_eq!("Omaha".parse::<Variant>().unwrap(), Variant::Omaha);
    assert_eq!(
        "stud".parse::<Variant>().unwrap_err(),
        GameError::InvalidVariant {
            input: "stud".to_string()
        }
    );
}

#[test]
fn seating_names_primary_seat_you() {
    let round = Round::new(Variant::Holdem, 3, None).unwrap();
    let names: Vec<&str> = round.participants().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["You", "Opponent 1", "Opponent 2", "Opponent 3"]);
}

#[test]
fn blind_poster_without_chips_fails_round_start() {
    let stakes = Stakes {
        starting_chips: 5, // below the small blind
        small_blind: 10,
        big_blind: 20,
    };
    let mut round = Round::with_stakes(Variant::Holdem, 1, Some(1), stakes).unwrap();
    let err = round.start_round().unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientChips {
            needed: 10,
            available: 5
        }
    );
}

#[test]
fn restarting_replaces_all_round_state() {
    let mut round = Round::new(Variant::Holdem, 2, Some(3)).unwrap();
    round.start_round().unwrap();
    round.advance_street(Street::Flop).unwrap();
    round.advance_street(Street::Turn).unwrap();

    round.start_round().unwrap();
    assert_eq!(round.street(), Street::Preflop);
    assert!(round.community().is_empty());
    assert_eq!(round.pot(), 30);
    assert_eq!(round.table_bet(), 20);
    for p in round.participants() {
        assert_eq!(p.hole_cards().len(), 2);
        assert!(p.is_active());
    }
}
