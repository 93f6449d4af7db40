use std::collections::BTreeMap;

/// Occurrences counted per bucket key.
pub type FrequencyTable<K> = BTreeMap<K, u32>;

pub fn tally<K, I>(keys: I) -> FrequencyTable<K>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut table = FrequencyTable::new();
    for key in keys {
        *table.entry(key).or_insert(0) += 1;
    }
    table
}

/// Returns the key with the greatest count.
///
/// Ties go to the smallest key. `None` when the table is empty or no count is positive.
pub fn mode<K>(table: &FrequencyTable<K>) -> Option<K>
where
    K: Ord + Copy,
{
    table
        .iter()
        .filter(|(_, count)| **count > 0)
        .fold(None, |best: Option<(K, u32)>, (key, count)| match best {
            Some((_, best_count)) if best_count >= *count => best,
            _ => Some((*key, *count)),
        })
        .map(|(key, _)| key)
}

/// Tests

#[test]
fn mode_empty_test() {
    let table: FrequencyTable<u32> = FrequencyTable::new();
    assert_eq!(mode(&table), None);
}

#[test]
fn mode_all_zero_test() {
    let table: FrequencyTable<u32> = [(3, 0), (7, 0)].into_iter().collect();
    assert_eq!(mode(&table), None);
}

#[test]
fn mode_strict_max_test() {
    let table = tally([10, 0, 10, 10, 10]);
    assert_eq!(mode(&table), Some(10));
}

#[test]
fn mode_tie_picks_smallest_key_test() {
    let table = tally([14, 9, 14, 9, 21]);
    assert_eq!(mode(&table), Some(9));
}
