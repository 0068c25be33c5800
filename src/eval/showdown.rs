use std::cmp::Ordering;

use crate::domain::hand::Hand;

use super::comparator::compare;

/// Индексы всех рук, делящих лучший результат (сплит при нескольких).
///
/// Каждая рука – уже готовые 5 карт; выбор лучших 5 из 7 делает
/// внешний движок. Пустой вход → пустой результат.
pub fn showdown_winners(hands: &[Hand]) -> Vec<usize> {
    let mut winners: Vec<usize> = Vec::new();

    for (idx, hand) in hands.iter().enumerate() {
        match winners.first() {
            None => winners.push(idx),
            Some(&best) => match compare(hand, &hands[best]) {
                Ordering::Greater => {
                    winners.clear();
                    winners.push(idx);
                }
                Ordering::Equal => winners.push(idx),
                Ordering::Less => {}
            },
        }
    }

    winners
}
