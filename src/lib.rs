//! Классификация и сравнение 5-карточных покерных рук.
//!
//! Главная функция:
//!   `eval::compare(&a, &b) -> Ordering`
//!
//! Сначала обе руки относятся к одной из десяти категорий
//! (`HandCategory`), при равных категориях работает тай-брейк
//! конкретной категории.

pub mod domain;
pub mod eval;

pub use domain::{Card, Hand, HandError, Rank, Suit};
pub use eval::{classify, compare, evaluate, showdown_winners, validate, HandCategory, HandStrength};
