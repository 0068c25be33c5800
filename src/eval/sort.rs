/// Отсортированная по возрастанию копия массива.
///
/// Массивы маленькие (5 значений рангов или 13 корзин гистограммы),
/// поэтому работаем по значению и ничего не выделяем.
pub fn sorted<const N: usize>(mut values: [u8; N]) -> [u8; N] {
    values.sort();
    values
}

#[cfg(test)]
mod tests {
    use super::sorted;

    #[test]
    fn sorts_hand_values_ascending() {
        assert_eq!(sorted([13, 1, 9, 1, 4]), [1, 1, 4, 9, 13]);
    }

    #[test]
    fn sorts_histogram_buckets() {
        let mut hist = [0u8; 13];
        hist[3] = 2;
        hist[7] = 3;
        let s = sorted(hist);
        assert_eq!(s[12], 3);
        assert_eq!(s[11], 2);
        assert!(s[..11].iter().all(|&c| c == 0));
    }
}
