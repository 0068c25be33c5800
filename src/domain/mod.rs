//! Доменная модель: карты, масти, ранги и 5-карточная рука.
//!
//! Колода, раздача и выбор лучших 5 карт из 7 живут во внешнем движке.

pub mod card;
pub mod errors;
pub mod hand;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use errors::*;
pub use hand::*;
