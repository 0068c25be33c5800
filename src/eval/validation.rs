use log::debug;

use crate::domain::errors::HandError;
use crate::domain::hand::Hand;

/// Проверка руки на границе: в ней не должно быть одинаковых карт.
///
/// Классификатор и сравнение эту проверку не вызывают – целостность
/// колоды обеспечивает вызывающий код.
pub fn validate(hand: &Hand) -> Result<(), HandError> {
    let cards = hand.cards();
    for (i, card) in cards.iter().enumerate() {
        if cards[i + 1..].contains(card) {
            debug!("rejecting hand [{hand}]: duplicate {card}");
            return Err(HandError::DuplicateCard(*card));
        }
    }
    Ok(())
}
