//! Модуль оценки 5-карточных рук.
//!
//! Основная функция:
//!   `compare(&a, &b) -> Ordering`
//!
//! Поток: `classify` для каждой руки → если категории разные, ответ готов;
//! иначе `break_tie` по правилам конкретной категории.

pub mod ace;
pub mod classifier;
pub mod comparator;
pub mod hand_rank;
pub mod showdown;
pub mod sort;
pub mod straight;
pub mod strength;
pub mod tie_break;
pub mod validation;

pub use classifier::classify;
pub use comparator::compare;
pub use hand_rank::HandCategory;
pub use showdown::showdown_winners;
pub use strength::{evaluate, HandStrength};
pub use tie_break::{break_tie, TieBreakKey};
pub use validation::validate;
