use std::ops::Range;

use crate::EnumerationError;

/// Cartesian product of one index per array, each ranging over its bound.
///
/// The last coordinate varies fastest, like an odometer. The input arrays
/// are borrowed read-only; each yielded tuple is a fresh `Vec`.
#[derive(Debug, Clone)]
pub struct Product<'a, T> {
    arrays: Vec<&'a [T]>,
    bounds: Vec<Range<usize>>,
    coord: Vec<usize>,
    done: bool,
}

/// Enumerate the Cartesian product of `arrays`, each over its full range.
///
/// Zero input arrays yield exactly one empty tuple.
pub fn products<T, S: AsRef<[T]>>(arrays: &[S]) -> Product<'_, T> {
    let arrays: Vec<&[T]> = arrays.iter().map(AsRef::as_ref).collect();
    let bounds = arrays.iter().map(|a| 0..a.len()).collect();
    Product::from_parts(arrays, bounds)
}

/// Enumerate the Cartesian product of `arrays` restricted to `bounds`, one
/// half-open index range per array.
pub fn bounded_products<'a, T, S: AsRef<[T]>>(
    arrays: &'a [S],
    bounds: &[Range<usize>],
) -> Result<Product<'a, T>, EnumerationError> {
    let arrays: Vec<&[T]> = arrays.iter().map(AsRef::as_ref).collect();
    if bounds.len() != arrays.len() {
        return Err(EnumerationError::BoundsLengthMismatch {
            bounds: bounds.len(),
            arrays: arrays.len(),
        });
    }
    for (index, (bound, array)) in bounds.iter().zip(&arrays).enumerate() {
        if bound.start > bound.end || bound.end > array.len() {
            return Err(EnumerationError::BoundOutOfRange {
                index,
                lower: bound.start,
                upper: bound.end,
                len: array.len(),
            });
        }
    }
    Ok(Product::from_parts(arrays, bounds.to_vec()))
}

impl<'a, T> Product<'a, T> {
    fn from_parts(arrays: Vec<&'a [T]>, bounds: Vec<Range<usize>>) -> Self {
        let coord = bounds.iter().map(|b| b.start).collect();
        let done = bounds.iter().any(|b| b.is_empty());
        Product {
            arrays,
            bounds,
            coord,
            done,
        }
    }
}

impl<T: Clone> Iterator for Product<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let out = self
            .coord
            .iter()
            .zip(&self.arrays)
            .map(|(&c, a)| a[c].clone())
            .collect();

        // increment like an odometer, least-significant digit at the end
        let mut i = self.coord.len();
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            self.coord[i] += 1;
            if self.coord[i] < self.bounds[i].end {
                break;
            }
            self.coord[i] = self.bounds[i].start;
        }

        Some(out)
    }
}
