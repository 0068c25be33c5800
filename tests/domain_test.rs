//! Интеграционные тесты для доменной модели (crate::domain).

use poker_hand_eval::domain::*;
use poker_hand_eval::validate;

/// Card/Suit/Rank: Display + FromStr roundtrip.
#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        Card::new(Rank::Ace, Suit::Hearts),    // Ah
        Card::new(Rank::Ten, Suit::Spades),    // Ts
        Card::new(Rank::Two, Suit::Clubs),     // 2c
        Card::new(Rank::Nine, Suit::Diamonds), // 9d
    ];

    for card in cards {
        let s = card.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }

    // Регистр не важен.
    assert_eq!("ah".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!("tS".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Spades));

    // Неверные строки
    assert!("".parse::<Card>().is_err());
    assert!("A".parse::<Card>().is_err());
    assert!("Ahh".parse::<Card>().is_err());
    assert!("1h".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
}

/// Младший туз: 1 <-> Ace, остальные ранги без изменений.
#[test]
fn rank_low_value_conventions() {
    assert_eq!(Rank::Ace.low_value(), 1);
    assert_eq!(Rank::Ace.value(), 14);
    assert_eq!(Rank::King.low_value(), 13);
    assert_eq!(Rank::Two.low_value(), 2);

    assert_eq!(Rank::from_low_value(1), Some(Rank::Ace));
    assert_eq!(Rank::from_low_value(11), Some(Rank::Jack));
    assert_eq!(Rank::from_low_value(13), Some(Rank::King));
    assert_eq!(Rank::from_low_value(0), None);
    assert_eq!(Rank::from_low_value(14), None);

    for rank in Rank::ALL {
        assert_eq!(Rank::from_low_value(rank.low_value()), Some(rank));
    }
}

#[test]
fn card_from_raw_checks_ranges() {
    assert_eq!(Card::from_raw(1, 2), Ok(Card::new(Rank::Ace, Suit::Hearts)));
    assert_eq!(Card::from_raw(12, 0), Ok(Card::new(Rank::Queen, Suit::Clubs)));
    assert_eq!(Card::from_raw(0, 0), Err(HandError::InvalidRank(0)));
    assert_eq!(Card::from_raw(14, 0), Err(HandError::InvalidRank(14)));
    assert_eq!(Card::from_raw(5, 4), Err(HandError::InvalidSuit(4)));
}

#[test]
fn hand_parse_and_display() {
    let hand: Hand = "Ah Kd 7c 7s 2h".parse().unwrap();
    assert_eq!(hand.to_string(), "Ah Kd 7c 7s 2h");
    assert_eq!(hand.cards()[1], Card::new(Rank::King, Suit::Diamonds));
    assert_eq!(hand.low_values(), [1, 13, 7, 7, 2]);
    assert!(!hand.is_flush());

    let flush: Hand = "2s 9s Js 4s Ks".parse().unwrap();
    assert!(flush.is_flush());
}

#[test]
fn hand_requires_exactly_five_cards() {
    assert_eq!("Ah Kd 7c 7s".parse::<Hand>(), Err(HandError::WrongCardCount(4)));
    assert_eq!(
        "Ah Kd 7c 7s 2h 3h".parse::<Hand>(),
        Err(HandError::WrongCardCount(6))
    );

    let cards = [Card::new(Rank::Ace, Suit::Hearts); 3];
    assert_eq!(Hand::from_slice(&cards), Err(HandError::WrongCardCount(3)));

    assert!(matches!(
        "Ah Kd 7c 7s Zz".parse::<Hand>(),
        Err(HandError::InvalidCardNotation(_))
    ));
}

#[test]
fn validate_rejects_duplicate_cards() {
    let ok: Hand = "Ah Kd 7c 7s 2h".parse().unwrap();
    assert_eq!(validate(&ok), Ok(()));

    let dup: Hand = "Ah Kd 7c Ah 2h".parse().unwrap();
    assert_eq!(
        validate(&dup),
        Err(HandError::DuplicateCard(Card::new(Rank::Ace, Suit::Hearts)))
    );
}

#[test]
fn errors_have_messages() {
    let err = HandError::WrongCardCount(3);
    assert!(err.to_string().contains('3'));

    let err = HandError::DuplicateCard(Card::new(Rank::Ten, Suit::Clubs));
    assert!(err.to_string().contains("Tc"));
}

/// JSON-форма руки: массив из 5 карт {rank, suit}.
#[test]
fn hand_json_shape() {
    let hand: Hand = "Ah Kd 7c 7s 2h".parse().unwrap();
    let json = serde_json::to_value(hand).unwrap();

    let arr = json.as_array().expect("hand serializes as array");
    assert_eq!(arr.len(), 5);
    assert_eq!(arr[0], serde_json::json!({ "rank": "Ace", "suit": "Hearts" }));

    let back: Hand = serde_json::from_value(json).unwrap();
    assert_eq!(back, hand);
}
