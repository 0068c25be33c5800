use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::HandError;

/// Масть карты. Старшинства мастей нет – важна только для флеша.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Масть по индексу 0..=3 (порядок как в `Suit::ALL`).
    pub fn from_index(idx: u8) -> Result<Self, HandError> {
        Self::ALL
            .get(idx as usize)
            .copied()
            .ok_or(HandError::InvalidSuit(idx))
    }
}

/// Ранг карты.
///
/// Внутри храним туз старшим (Ace = 14). Младший туз (1) нужен только
/// при поиске стрита A2345, см. `low_value`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Значение с "высоким" тузом: 2..=14.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Значение с "низким" тузом: Ace = 1, остальные 2..=13.
    pub const fn low_value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            r => r as u8,
        }
    }

    /// Обратное к `low_value`: 1 = туз, 11 = валет, 12 = дама, 13 = король.
    pub fn from_low_value(v: u8) -> Option<Self> {
        match v {
            1 => Some(Rank::Ace),
            2..=13 => Some(Self::ALL[(v - 2) as usize]),
            _ => None,
        }
    }
}

/// Обычная покерная карта (52-карточная колода).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Карта из "сырых" чисел внешнего движка: ранг 1..=13 (туз = 1),
    /// масть 0..=3.
    pub fn from_raw(rank: u8, suit: u8) -> Result<Self, HandError> {
        let rank = Rank::from_low_value(rank).ok_or(HandError::InvalidRank(rank))?;
        let suit = Suit::from_index(suit)?;
        Ok(Card { rank, suit })
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ah", "Td", "7c".
impl FromStr for Card {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (r_ch, s_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => return Err(HandError::InvalidCardNotation(s.to_string())),
        };

        let rank = match r_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | 't' => Rank::Ten,
            'J' | 'j' => Rank::Jack,
            'Q' | 'q' => Rank::Queen,
            'K' | 'k' => Rank::King,
            'A' | 'a' => Rank::Ace,
            _ => return Err(HandError::InvalidCardNotation(s.to_string())),
        };

        let suit = match s_ch {
            'c' | 'C' => Suit::Clubs,
            'd' | 'D' => Suit::Diamonds,
            'h' | 'H' => Suit::Hearts,
            's' | 'S' => Suit::Spades,
            _ => return Err(HandError::InvalidCardNotation(s.to_string())),
        };

        Ok(Card { rank, suit })
    }
}
