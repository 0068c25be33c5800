//! Тай-брейк внутри одной категории.
//!
//! Для каждой категории строим ключ – значимые значения рангов
//! (туз = 14) в порядке важности, хвост забит нулями. Ключи двух рук
//! сравниваются лексикографически: первое же различие решает, полное
//! совпадение = ничья.

use std::cmp::Ordering;

use crate::domain::hand::{Hand, HAND_SIZE};

use super::ace::{hand_values, promote_aces};
use super::hand_rank::HandCategory;
use super::straight::detect_straight;

/// Значимые ранги руки для тай-брейка, от главного к младшему.
pub type TieBreakKey = [u8; HAND_SIZE];

/// Сравнить две руки, про которые уже известно, что у них одна категория.
pub fn break_tie(category: HandCategory, a: &Hand, b: &Hand) -> Ordering {
    let key_a = tie_break_key(category, hand_values(a));
    let key_b = tie_break_key(category, hand_values(b));
    key_a.cmp(&key_b)
}

/// Ключ тай-брейка по отсортированным значениям (туз = 1).
pub fn tie_break_key(category: HandCategory, values: [u8; HAND_SIZE]) -> TieBreakKey {
    match category {
        // Роял-флеш один на масть, масти равны.
        HandCategory::RoyalFlush => [0; HAND_SIZE],

        // Стрит решает только старшая карта; у wheel это пятёрка.
        HandCategory::Straight | HandCategory::StraightFlush => {
            let high = detect_straight(values).unwrap_or_else(|| promote_aces(values)[HAND_SIZE - 1]);
            fill_key([high])
        }

        HandCategory::Flush | HandCategory::HighCard => {
            let v = promote_aces(values);
            fill_key(v.into_iter().rev())
        }

        HandCategory::FourOfAKind => {
            let v = promote_aces(values);
            let quad = v[2];
            let kicker = if v[0] != quad { v[0] } else { v[4] };
            fill_key([quad, kicker])
        }

        HandCategory::FullHouse => {
            let v = promote_aces(values);
            let trips = v[2];
            // "full of": соседняя с тройкой карта, отличная от неё.
            let pair = if v[1] != trips { v[1] } else { v[3] };
            fill_key([trips, pair])
        }

        HandCategory::ThreeOfAKind => {
            let v = promote_aces(values);
            let trips = v[2];
            let kickers = v.into_iter().rev().filter(|&x| x != trips);
            fill_key(std::iter::once(trips).chain(kickers))
        }

        HandCategory::TwoPair => {
            let counts = value_counts(promote_aces(values));
            let pairs = values_with_count(&counts, 2);
            let kicker = values_with_count(&counts, 1);
            fill_key(pairs.chain(kicker))
        }

        HandCategory::OnePair => {
            let counts = value_counts(promote_aces(values));
            let pair = values_with_count(&counts, 2);
            let kickers = values_with_count(&counts, 1);
            fill_key(pair.chain(kickers))
        }
    }
}

/// Гистограмма значений с тузом = 14 (индексы 2..=14).
fn value_counts(values: [u8; HAND_SIZE]) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for v in values {
        counts[v as usize] += 1;
    }
    counts
}

/// Значения, встречающиеся ровно `n` раз, от старшего к младшему.
fn values_with_count(counts: &[u8; 15], n: u8) -> impl Iterator<Item = u8> + '_ {
    (2u8..=14).rev().filter(move |&v| counts[v as usize] == n)
}

fn fill_key(parts: impl IntoIterator<Item = u8>) -> TieBreakKey {
    let mut key = [0; HAND_SIZE];
    for (slot, v) in key.iter_mut().zip(parts) {
        *slot = v;
    }
    key
}
