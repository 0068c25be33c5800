use std::cmp::Ordering;

use log::trace;

use crate::domain::hand::Hand;

use super::classifier::classify;
use super::tie_break::break_tie;

/// Сравнить две руки на шоудауне.
///
/// Разные категории решают сразу, одинаковые уходят в тай-брейк.
/// `compare(a, b)` всегда обратно `compare(b, a)`, `compare(a, a) == Equal`.
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    let cat_a = classify(a);
    let cat_b = classify(b);

    let verdict = if cat_a != cat_b {
        cat_a.cmp(&cat_b)
    } else {
        break_tie(cat_a, a, b)
    };

    trace!("compare [{a}] ({cat_a}) vs [{b}] ({cat_b}) -> {verdict:?}");
    verdict
}
