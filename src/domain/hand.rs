use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::errors::HandError;

/// Количество карт в руке.
pub const HAND_SIZE: usize = 5;

/// Покерная рука из ровно 5 карт. Порядок карт значения не имеет.
///
/// Рука принадлежит вызывающему коду: eval её не меняет, а работает
/// с собственными копиями значений рангов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    /// Рука без проверок (дубликаты не ищем, см. `eval::validate`).
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    /// Рука из среза. Проверяем только длину.
    pub fn from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::WrongCardCount(cards.len()))?;
        Ok(Self(cards))
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    /// Копия значений рангов в соглашении "туз = 1", в порядке карт.
    pub fn low_values(&self) -> [u8; HAND_SIZE] {
        self.0.map(|c| c.rank.low_value())
    }

    /// Все пять карт одной масти.
    pub fn is_flush(&self) -> bool {
        let first = self.0[0].suit;
        self.0.iter().all(|c| c.suit == first)
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}

impl fmt::Display for Hand {
    /// Формат вида `Ah Kh Qh Jh Th`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Парсинг строки вида "Ah Kd 7c 7s 2h" (карты через пробелы).
impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&cards)
    }
}
