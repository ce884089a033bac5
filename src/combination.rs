use crate::EnumerationError;

/// Enumerates every unordered selection of `p` items as a strictly
/// increasing tuple of indices into the borrowed input, in lexicographic
/// index order. Elements therefore keep their original relative order.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

/// Enumerate all `binomial(n, p)` combinations of `p` items from `items`.
///
/// `p == 0` yields exactly one empty tuple; `p > n` is rejected.
pub fn combinations<T>(items: &[T], p: usize) -> Result<Combinations<'_, T>, EnumerationError> {
    if p > items.len() {
        return Err(EnumerationError::SelectionTooLarge {
            p,
            n: items.len(),
        });
    }
    Ok(Combinations {
        items,
        indices: (0..p).collect(),
        done: false,
    })
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let out = self
            .indices
            .iter()
            .map(|&i| self.items[i].clone())
            .collect();

        // advance the deepest index that still has room for the suffix,
        // then refill the suffix with consecutive successors
        let n = self.items.len();
        let p = self.indices.len();
        let mut k = p;
        loop {
            if k == 0 {
                self.done = true;
                break;
            }
            k -= 1;
            self.indices[k] += 1;
            if self.indices[k] + (p - 1 - k) < n {
                for j in k + 1..p {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn two_of_three_letters() -> anyhow::Result<()> {
        let tuples = combinations(&['a', 'b', 'c'], 2)?.collect::<Vec<_>>();
        assert_eq!(
            tuples,
            [['a', 'b'], ['a', 'c'], ['b', 'c']].map(|t| t.to_vec())
        );
        Ok(())
    }

    #[test]
    fn counts_are_binomial() -> anyhow::Result<()> {
        let items = (0..6).collect::<Vec<_>>();
        assert_eq!(combinations(&items, 0)?.count(), 1);
        assert_eq!(combinations(&items, 2)?.count(), 15);
        assert_eq!(combinations(&items, 3)?.count(), 20);
        assert_eq!(combinations(&items, 6)?.count(), 1);
        Ok(())
    }

    #[test]
    fn elements_keep_their_relative_order() -> anyhow::Result<()> {
        let items = [10, 3, 7, 5];
        for tuple in combinations(&items, 3)? {
            let mut positions = tuple
                .iter()
                .map(|x| items.iter().position(|y| y == x).unwrap())
                .collect::<Vec<_>>();
            positions.dedup();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
        Ok(())
    }

    #[test]
    fn zero_size_yields_one_empty_tuple() -> anyhow::Result<()> {
        let tuples = combinations(&[1, 2, 3], 0)?.collect::<Vec<_>>();
        assert_eq!(tuples, [Vec::<i32>::new()]);
        Ok(())
    }

    #[test]
    fn oversized_selection_is_rejected() {
        assert_eq!(
            combinations(&[1, 2], 5).err(),
            Some(EnumerationError::SelectionTooLarge { p: 5, n: 2 })
        );
    }
}
