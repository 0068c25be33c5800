use crate::domain::hand::HAND_SIZE;

use super::ace::{promote_aces, ACE_LOW};

/// Найти стрит в отсортированных значениях (туз = 1, без повторов).
/// Возвращает старшую карту стрита в соглашении "туз = 14".
///
/// Не больше двух проходов:
///   1) как есть – ловит wheel A2345 (старшая карта 5);
///   2) если первый не прошёл и минимум = туз, повторяем с тузом 14
///      (ловит TJQKA, старшая карта 14).
///
/// Повторы рангов должны быть исключены раньше (гистограммой).
pub fn detect_straight(values: [u8; HAND_SIZE]) -> Option<u8> {
    let mut current = values;
    for _ in 0..2 {
        if current[HAND_SIZE - 1] - current[0] == 4 {
            return Some(current[HAND_SIZE - 1]);
        }
        if current[0] != ACE_LOW {
            break;
        }
        current = promote_aces(current);
    }
    None
}
