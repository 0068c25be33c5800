use crate::domain::hand::Hand;

use super::ace::{hand_values, promote_aces};
use super::hand_rank::HandCategory;
use super::sort::sorted;
use super::straight::detect_straight;

/// Ровно такие значения (туз = 14) даёт роял-флеш.
const ROYAL_VALUES: [u8; 5] = [10, 11, 12, 13, 14];

/// Отнести 5-карточную руку к одной из десяти категорий.
///
/// Рука должна быть корректной (5 разных карт одной колоды) –
/// на некорректной руке результат не определён, но паники нет.
pub fn classify(hand: &Hand) -> HandCategory {
    let values = hand_values(hand);

    // Гистограмма повторов рангов: 13 корзин, туз = 1.
    let mut histogram = [0u8; 13];
    for v in values {
        histogram[(v - 1) as usize] += 1;
    }
    let histogram = sorted(histogram);

    match (histogram[12], histogram[11]) {
        (n, _) if n >= 4 => return HandCategory::FourOfAKind,
        (3, 2) => return HandCategory::FullHouse,
        (3, _) => return HandCategory::ThreeOfAKind,
        (2, 2) => return HandCategory::TwoPair,
        (2, _) => return HandCategory::OnePair,
        _ => {}
    }

    // Дальше все ранги разные.
    let flush = hand.is_flush();

    // Роял проверяем до общего стрит-флеша, иначе его перехватит
    // второй проход detect_straight.
    if flush && promote_aces(values) == ROYAL_VALUES {
        return HandCategory::RoyalFlush;
    }

    match (detect_straight(values).is_some(), flush) {
        (true, true) => HandCategory::StraightFlush,
        (true, false) => HandCategory::Straight,
        (false, true) => HandCategory::Flush,
        (false, false) => HandCategory::HighCard,
    }
}
