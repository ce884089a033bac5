use crate::rotate::{rotate_left, rotate_right};

/// Enumerates all `n!` orderings of a sequence by rotation-based
/// backtracking over a private working array.
///
/// `select[k]` records which offset is currently rotated into slot `k`;
/// advancing undoes the deepest rotation, steps its offset and re-rotates,
/// so each ordering is produced exactly once with no used-marker set.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    working: Vec<T>,
    select: Vec<usize>,
    started: bool,
    done: bool,
}

/// Enumerate every permutation of `items`.
///
/// The input is cloned into a working array; the caller's sequence is never
/// mutated. An empty input yields exactly one empty tuple.
pub fn permutations<T: Clone>(items: &[T]) -> Permutations<T> {
    Permutations {
        working: items.to_vec(),
        select: (0..items.len()).collect(),
        started: false,
        done: false,
    }
}

impl<T> Permutations<T> {
    /// Backtracks to the deepest slot whose candidate can still advance,
    /// rotates the next candidate in and resets every deeper slot to the
    /// identity selection. Returns `false` once all slots are exhausted.
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

impl<T: Clone> Iterator for Permutations<T> {
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
        // fresh clone so the caller never observes later rotations
        Some(self.working.clone())
    }
}
