use serde::{Deserialize, Serialize};

use crate::domain::hand::{Hand, HAND_SIZE};

use super::ace::hand_values;
use super::classifier::classify;
use super::hand_rank::HandCategory;
use super::tie_break::{tie_break_key, TieBreakKey};

/// Упакованная сила руки: сравнение двух `HandStrength` совпадает
/// с `compare` для соответствующих рук.
///
/// Схема кодирования (u32):
///   [категория:4 бита][k0:4][k1:4][k2:4][k3:4][k4:4]
/// где k0..k4 – ключ тай-брейка (значения 0..=14, влазят в 4 бита).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandStrength(pub u32);

impl HandStrength {
    /// Собрать из категории и ключа тай-брейка.
    pub fn from_category_and_key(category: HandCategory, key: TieBreakKey) -> Self {
        let value = key
            .iter()
            .fold((category as u32) & 0x0F, |acc, &k| (acc << 4) | (k as u32 & 0x0F));
        HandStrength(value)
    }

    /// Вытащить категорию.
    pub fn category(&self) -> HandCategory {
        let id = ((self.0 >> 20) & 0x0F) as u8;
        // Значение собрано из настоящей категории, fallback недостижим.
        HandCategory::from_id(id).unwrap_or(HandCategory::HighCard)
    }

    /// Достать ключ тай-брейка.
    pub fn key(&self) -> TieBreakKey {
        let mut key = [0u8; HAND_SIZE];
        for (i, slot) in key.iter_mut().enumerate() {
            let shift = 4 * (HAND_SIZE - 1 - i);
            *slot = ((self.0 >> shift) & 0x0F) as u8;
        }
        key
    }
}

/// Сила руки одним числом – удобно сортировать и хранить.
pub fn evaluate(hand: &Hand) -> HandStrength {
    let category = classify(hand);
    HandStrength::from_category_and_key(category, tie_break_key(category, hand_values(hand)))
}
