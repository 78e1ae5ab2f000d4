// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Linear-time stable counting sort over integer keys.
//!
//! Used by the planarity tester to order adjacency lists by nesting
//! depth; keys there span a small contiguous range (twice the maximum
//! DFS height, signed), which is exactly the regime where counting sort
//! beats a comparison sort.

use crate::error::Error;

/// Sorts `items` non-decreasingly by `key`, stable, in O(n + (max - min))
/// time. Every key must lie in `[min, max]`; `max < min` is an error.
///
/// The counter array is allocated with `try_reserve`, so an allocation
/// failure for a huge key range surfaces as [`Error::Alloc`] instead of
/// aborting the process.
pub fn counting_sort<T, F>(items: Vec<T>, min: i64, max: i64, key: F) -> Result<Vec<T>, Error>
where
    F: Fn(&T) -> i64,
{
    if max < min {
        return Err(Error::InvalidKeyRange { min, max });
    }
    if items.len() < 2 {
        return Ok(items);
    }

    let range = (max - min + 1) as usize;
    let mut counter: Vec<usize> = Vec::new();
    counter.try_reserve_exact(range)?;
    counter.resize(range, 0);

    for item in &items {
        let k = key(item);
        if k < min || k > max {
            return Err(Error::KeyOutOfRange { key: k, min, max });
        }
        counter[(k - min) as usize] += 1;
    }

    // prefix sums: counter[i] = number of elements with key <= min + i
    for i in 1..range {
        counter[i] += counter[i - 1];
    }

    // place from the back so equal keys keep their relative order
    let n = items.len();
    let mut result: Vec<Option<T>> = std::iter::repeat_with(|| None).take(n).collect();
    for item in items.into_iter().rev() {
        let slot = (key(&item) - min) as usize;
        counter[slot] -= 1;
        result[counter[slot]] = Some(item);
    }

    Ok(result.into_iter().flatten().collect())
}

/// Like [`counting_sort`], but derives the key range from the items with
/// the pairwise min/max scan (three comparisons per two elements).
pub fn counting_sort_auto<T, F>(items: Vec<T>, key: F) -> Result<Vec<T>, Error>
where
    F: Fn(&T) -> i64,
{
    if items.len() < 2 {
        return Ok(items);
    }

    let mut min = key(&items[0]);
    let mut max = min;
    let mut start = 1;
    if items.len() % 2 == 0 {
        let k = key(&items[1]);
        if k >= max {
            max = k;
        } else {
            min = k;
        }
        start = 2;
    }
    // after the parity fix-up an even number of elements remains
    let mut i = start;
    while i + 1 < items.len() {
        let a = key(&items[i]);
        let b = key(&items[i + 1]);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        if lo < min {
            min = lo;
        }
        if hi > max {
            max = hi;
        }
        i += 2;
    }

    counting_sort(items, min, max, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_is_stable() {
        let items = vec![(3, 'a'), (1, 'b'), (3, 'c'), (0, 'd'), (1, 'e')];
        let sorted = counting_sort(items, 0, 3, |it| it.0).unwrap();
        assert_eq!(
            sorted,
            vec![(0, 'd'), (1, 'b'), (1, 'e'), (3, 'a'), (3, 'c')]
        );
    }

    #[test]
    fn negative_keys() {
        let items = vec![2i64, -5, 0, -5, 7];
        let sorted = counting_sort_auto(items, |&k| k).unwrap();
        assert_eq!(sorted, vec![-5, -5, 0, 2, 7]);
    }

    #[test]
    fn empty_and_singleton() {
        assert!(counting_sort_auto(Vec::<i64>::new(), |&k| k).unwrap().is_empty());
        assert_eq!(counting_sort_auto(vec![42i64], |&k| k).unwrap(), vec![42]);
    }

    #[test]
    fn rejects_inverted_range() {
        let err = counting_sort(vec![1i64], 5, 2, |&k| k).unwrap_err();
        assert!(matches!(err, Error::InvalidKeyRange { .. }));
    }

    #[test]
    fn rejects_key_outside_range() {
        let err = counting_sort(vec![1i64, 9], 0, 3, |&k| k).unwrap_err();
        assert!(matches!(err, Error::KeyOutOfRange { key: 9, .. }));
    }
}
