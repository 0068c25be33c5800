use crate::domain::hand::{Hand, HAND_SIZE};

use super::sort::sorted;

/// Значение туза в соглашении "туз = 1".
pub const ACE_LOW: u8 = 1;
/// Значение туза в соглашении "туз = 14".
pub const ACE_HIGH: u8 = 14;

/// Отсортированная копия значений рангов руки (туз = 1).
///
/// Это рабочее представление и для классификатора, и для тай-брейка.
pub fn hand_values(hand: &Hand) -> [u8; HAND_SIZE] {
    sorted(hand.low_values())
}

/// Переписать тузы 1 → 14 и заново отсортировать.
///
/// Идемпотентна: на уже "поднятых" значениях ничего не меняет.
pub fn promote_aces(values: [u8; HAND_SIZE]) -> [u8; HAND_SIZE] {
    sorted(values.map(|v| if v == ACE_LOW { ACE_HIGH } else { v }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promote_moves_aces_to_the_top() {
        assert_eq!(promote_aces([1, 1, 5, 9, 13]), [5, 9, 13, 14, 14]);
    }

    #[test]
    fn promote_is_idempotent() {
        let once = promote_aces([1, 2, 3, 4, 5]);
        assert_eq!(promote_aces(once), once);
    }

    #[test]
    fn promote_without_aces_only_sorts() {
        assert_eq!(promote_aces([9, 2, 7, 7, 3]), [2, 3, 7, 7, 9]);
    }
}
