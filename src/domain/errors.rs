use thiserror::Error;

use crate::domain::card::Card;

/// Ошибки на границе: сборка карт/рук из внешних данных и валидация.
///
/// Само ядро (классификация и сравнение) ошибок не возвращает.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("В руке должно быть ровно 5 карт, получено {0}")]
    WrongCardCount(usize),

    #[error("Карта {0} встречается в руке дважды")]
    DuplicateCard(Card),

    #[error("Недопустимый ранг {0} (ожидается 1..=13)")]
    InvalidRank(u8),

    #[error("Недопустимая масть {0} (ожидается 0..=3)")]
    InvalidSuit(u8),

    #[error("Не удалось разобрать карту: {0:?}")]
    InvalidCardNotation(String),
}
