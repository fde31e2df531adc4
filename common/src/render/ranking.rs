//! Top-N selection and tallying with encounter-order tie breaking.

use std::collections::HashMap;

/// Sorts descending by `count` and keeps the first `n`; equal counts keep their input order.
pub fn top_n<T>(mut items: Vec<T>, n: usize, count: impl Fn(&T) -> u64) -> Vec<T> {
    items.sort_by_key(|item| std::cmp::Reverse(count(item)));
    items.truncate(n);
    items
}

/// Counts occurrences of each key, listed in the order keys were first seen.
pub fn tally<I, K>(keys: I) -> Vec<(K, u64)>
where
    I: IntoIterator<Item = K>,
    K: std::hash::Hash + Eq + Clone,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, u64)> = Vec::new();
    for key in keys {
        match positions.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                positions.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_encounter_order() {
        let items = vec![("a", 2), ("b", 5), ("c", 2), ("d", 5), ("e", 1)];
        let top = top_n(items, 3, |(_, c)| *c);
        assert_eq!(top, vec![("b", 5), ("d", 5), ("a", 2)]);
    }

    #[test]
    fn prefix_longer_than_input() {
        let top = top_n(vec![1u64, 3, 2], 8, |v| *v);
        assert_eq!(top, vec![3, 2, 1]);
    }

    #[test]
    fn tally_in_first_seen_order() {
        let counts = tally(["Acme", "Globex", "Acme", "Initech", "Globex", "Acme"]);
        assert_eq!(counts, vec![("Acme", 3), ("Globex", 2), ("Initech", 1)]);
    }
}
