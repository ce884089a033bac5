use crate::{
    EnumerationError,
    rotate::{rotate_left, rotate_right},
};

/// Enumerates every ordered selection of `p` items from a sequence, by the
/// same rotation-based backtracking as permutation enumeration but with the
/// descent cut off at depth `p`.
#[derive(Debug, Clone)]
pub struct Arrangements<T> {
    working: Vec<T>,
    select: Vec<usize>,
    started: bool,
    done: bool,
}

/// Enumerate all `n!/(n-p)!` arrangements of `p` items drawn from `items`.
///
/// The input is cloned into a working array and never mutated. `p == 0`
/// yields exactly one empty tuple; `p > n` is rejected.
pub fn arrangements<T: Clone>(
    items: &[T],
    p: usize,
) -> Result<Arrangements<T>, EnumerationError> {
    if p > items.len() {
        return Err(EnumerationError::SelectionTooLarge {
            p,
            n: items.len(),
        });
    }
    Ok(Arrangements {
        working: items.to_vec(),
        select: (0..p).collect(),
        started: false,
        done: false,
    })
}

impl<T> Arrangements<T> {
    fn advance(&mut self) -> bool {
        let n = self.working.len();
        let mut k = self.select.len();
        loop {
            if k == 0 {
                return false;
            }
            k -= 1;
            rotate_left(&mut self.working, k, self.select[k]);
            self.select[k] += 1;
            if self.select[k] < n {
                rotate_right(&mut self.working, k, self.select[k]);
                for j in k + 1..self.select.len() {
                    self.select[j] = j;
                }
                return true;
            }
        }
    }
}

impl<T: Clone> Iterator for Arrangements<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started && !self.advance() {
            self.done = true;
            return None;
        }
        self.started = true;
        // only the first p slots of the working array are meaningful
        Some(self.working[..self.select.len()].to_vec())
    }
}
