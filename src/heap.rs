// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A min-heap that accepts custom comparators.
//!
//! Unlike [`BinaryHeap`][bh], a `MinHeap` is ordered by a [`Compare`] implementation rather
//! than by the item's `Ord` impl, so the same item type can be ordered by any key without
//! newtype wrappers. [`MinHeap::by_key`] orders items by a key extraction function.
//!
//! Insertion and popping the smallest item are `O(log n)`. Retrieving the smallest item is
//! `O(1)`.
//!
//! [bh]: https://doc.rust-lang.org/stable/std/collections/struct.BinaryHeap.html

use std::fmt::{self, Debug};
use std::slice;
use std::vec;

use compare::{natural, Compare, Extract, Natural};

// The heap is a complete binary tree stored in a Vec. The children of the
// item at offset i live at 2i + 1 and 2i + 2:
//
//          0
//        /   \
//       1     2
//      / \   / \
//     3   4 5   6
//
// Every item compares greater than or equal to its parent, so the smallest
// item is always at offset 0.

fn parent(x: usize) -> usize {
    debug_assert!(x > 0);
    (x - 1) / 2
}

/// The first `v.len() - 1` items are considered a valid heap
/// and the last item is to be inserted.
fn sift_up<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    debug_assert!(!v.is_empty());
    let mut node = v.len() - 1;
    while node > 0 {
        let par = parent(node);
        if cmp.compares_lt(&v[node], &v[par]) {
            v.swap(node, par);
            node = par;
        } else {
            return; // nothing to do anymore
        }
    }
}

/// The root of an otherwise valid heap has been replaced with some other
/// value. This function restores the heap property.
fn sift_down<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    let mut node = 0;
    loop {
        let c1 = node * 2 + 1;
        let c2 = node * 2 + 2;
        if v.len() <= c1 { return; } // No children. We're done.
        // Pick child with lowest item
        let ch = if v.len() <= c2 || cmp.compares_le(&v[c1], &v[c2]) { c1 }
                 else { c2 };
        if cmp.compares_lt(&v[ch], &v[node]) {
            v.swap(ch, node);
            node = ch;
        } else {
            break;
        }
    }
}

/// A comparator ordering items by the key returned from a function pointer.
pub type KeyOrder<T, K> = Extract<fn(&T) -> K, Natural<K>>;

/// A priority queue that always yields its smallest item first.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap. This is normally only
/// possible through `Cell`, `RefCell`, global state, I/O, or unsafe code.
#[derive(Clone)]
pub struct MinHeap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> MinHeap<T> {
    /// Returns an empty heap ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_cluster::heap::MinHeap;
    ///
    /// let heap = MinHeap::<u32>::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> MinHeap<T> { Self::with_comparator(natural()) }

    /// Returns an empty heap with the given capacity and ordered according to the
    /// natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_cluster::heap::MinHeap;
    ///
    /// let heap = MinHeap::<u32>::with_capacity(5);
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> MinHeap<T> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T, K: Ord> MinHeap<T, KeyOrder<T, K>> {
    /// Returns an empty heap ordered by the key `key` extracts from each item.
    ///
    /// Items with equal keys are yielded in unspecified order.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_cluster::heap::MinHeap;
    ///
    /// fn second(pair: &(char, u32)) -> u32 { pair.1 }
    ///
    /// let mut heap = MinHeap::by_key(second as fn(&(char, u32)) -> u32);
    /// heap.push(('a', 7));
    /// heap.push(('b', 3));
    /// assert_eq!(heap.peek(), Some(&('b', 3)));
    /// ```
    pub fn by_key(key: fn(&T) -> K) -> MinHeap<T, KeyOrder<T, K>> {
        Self::with_comparator(Extract::new(key))
    }

    /// Returns an empty heap with the given capacity, ordered by the key `key`
    /// extracts from each item.
    pub fn with_capacity_by_key(capacity: usize, key: fn(&T) -> K) -> MinHeap<T, KeyOrder<T, K>> {
        Self::with_capacity_and_comparator(capacity, Extract::new(key))
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_cluster::heap::MinHeap;
    ///
    /// let heap = MinHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    fn from(vec: Vec<T>) -> MinHeap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    pub fn with_comparator(cmp: C) -> MinHeap<T, C> {
        MinHeap { data: vec![], cmp }
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> MinHeap<T, C> {
        MinHeap { data: Vec::with_capacity(capacity), cmp }
    }

    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the given comparator.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> MinHeap<T, C> {
        for to in 2..vec.len() + 1 {
            sift_up(&mut vec[..to], &cmp);
        }
        let heap = MinHeap { data: vec, cmp };
        debug_assert!(heap.is_valid());
        heap
    }

    /// Returns an iterator visiting all items in the heap in arbitrary order.
    pub fn iter(&self) -> Iter<T> {
        debug_assert!(self.is_valid());
        Iter(self.data.iter())
    }

    /// Returns a reference to the smallest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.first()
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more items to be inserted into the heap.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Removes the smallest item from the heap and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        let min = match self.data.len() {
            0 => None,
            1 => self.data.pop(),
            _ => {
                let res = self.data.swap_remove(0);
                sift_down(&mut self.data, &self.cmp);
                Some(res)
            }
        };
        debug_assert!(self.is_valid());
        min
    }

    /// Pushes an item onto the heap.
    pub fn push(&mut self, item: T) {
        debug_assert!(self.is_valid());
        self.data.push(item);
        sift_up(&mut self.data, &self.cmp);
        debug_assert!(self.is_valid());
    }

    /// Consumes the heap and returns its items as a vector in sorted (ascending) order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            vec.push(item);
        }
        vec
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Clears the heap, returning an iterator over the removed items in arbitrary order.
    pub fn drain(&mut self) -> Drain<T> {
        Drain(self.data.drain(..))
    }

    /// Checks if the heap is valid.
    ///
    /// The heap is valid if no item compares less than its parent.
    fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| self.cmp.compares_ge(&self.data[i], &self.data[parent(i)]))
    }
}

impl<T: Debug, C: Compare<T>> Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// An iterator over a `MinHeap` in arbitrary order.
///
/// Acquire through [`MinHeap::iter`].
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline] fn next(&mut self) -> Option<&'a T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An iterator that drains a `MinHeap` in arbitrary order.
///
/// Acquire through [`MinHeap::drain`].
pub struct Drain<'a, T: 'a>(vec::Drain<'a, T>);

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}

impl<'a, T, C: Compare<T>> IntoIterator for &'a MinHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

#[cfg(test)]
mod test {
    use rand::{thread_rng, Rng};
    use super::MinHeap;

    #[test]
    fn fuzz_push_into_sorted_vec() {
        let mut rng = thread_rng();
        let mut tmp = Vec::with_capacity(100);
        for _ in 0..100 {
            tmp.clear();
            let mut heap = MinHeap::from(tmp);
            for _ in 0..100 {
                heap.push(rng.gen::<u32>());
            }
            tmp = heap.into_sorted_vec();
            for pair in tmp.windows(2) {
                assert!(pair[0] <= pair[1]);
            }
        }
    }

    #[test]
    fn fuzz_pop() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let mut heap = MinHeap::with_capacity(100);
            for _ in 0..100 {
                heap.push(rng.gen_range(0..50u32));
            }
            let mut last: Option<u32> = None;
            while let Some(item) = heap.pop() {
                if let Some(prev) = last {
                    assert!(prev <= item);
                }
                last = Some(item);
            }
            assert!(heap.is_empty());
        }
    }

    #[test]
    fn fuzz_interleaved_push_pop() {
        let mut rng = thread_rng();
        let mut heap = MinHeap::new();
        let mut shadow: Vec<i32> = vec![];
        for _ in 0..2000 {
            if rng.gen_bool(0.6) {
                let item = rng.gen_range(-100..100);
                heap.push(item);
                shadow.push(item);
            } else {
                shadow.sort_unstable_by(|a, b| b.cmp(a));
                assert_eq!(heap.pop(), shadow.pop());
            }
            assert_eq!(heap.len(), shadow.len());
        }
    }

    #[test]
    fn test_from_vec() {
        let heap = MinHeap::<i32>::from(vec![]);
        assert_eq!(heap.peek(), None);

        let heap = MinHeap::from(vec![2]);
        assert_eq!(heap.peek(), Some(&2));

        let heap = MinHeap::from(vec![2, 1]);
        assert_eq!(heap.peek(), Some(&1));

        let heap = MinHeap::from(vec![2, 1, 3]);
        assert_eq!(heap.peek(), Some(&1));
    }

    #[test]
    fn test_is_valid() {
        fn new(data: Vec<i32>) -> MinHeap<i32> {
            MinHeap { data, cmp: ::compare::natural() }
        }

        assert!(new(vec![]).is_valid());
        assert!(new(vec![1]).is_valid());
        assert!(new(vec![1, 1]).is_valid());
        assert!(new(vec![1, 5, 2]).is_valid());
        assert!(new(vec![1, 5, 2, 5, 6]).is_valid());
        assert!(new(vec![1, 2, 2, 3, 4, 5, 6]).is_valid());

        assert!(!new(vec![2, 1]).is_valid());
        assert!(!new(vec![1, 5, 2, 4]).is_valid());
        assert!(!new(vec![1, 2, 3, 4, 5, 2]).is_valid());
    }

    #[test]
    fn test_by_key_pops_pairs_by_end() {
        fn end(pair: &(i64, i64)) -> i64 { pair.1 }

        let pairs = [(1, 2), (3, 4), (2, 4), (1, 5), (5, 7), (6, 7), (8, 9)];
        let mut heap = MinHeap::by_key(end as fn(&(i64, i64)) -> i64);
        heap.extend(&pairs);

        let mut ends = vec![];
        while let Some(pair) = heap.pop() {
            ends.push(pair.1);
        }
        assert_eq!(ends, vec![2, 4, 4, 5, 7, 7, 9]);
    }

    #[test]
    fn test_drain_and_iter() {
        let mut heap = MinHeap::from(vec![4u8, 2, 9, 1]);
        let iter = heap.iter();
        assert_eq!(iter.len(), 4);
        let mut seen: Vec<u8> = iter.clone().cloned().collect();
        seen.sort();
        assert_eq!(seen, vec![1, 2, 4, 9]);
        assert_eq!(iter.max(), Some(&9));

        let mut sum = 0;
        for item in &heap {
            sum += *item;
        }
        assert_eq!(sum, 16);

        let drain = heap.drain();
        assert_eq!(drain.len(), 4);
        let mut drained: Vec<u8> = drain.collect();
        drained.sort();
        assert_eq!(drained, vec![1, 2, 4, 9]);
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_debug() {
        let heap = MinHeap::from(vec![3, 1, 2]);
        assert_eq!(format!("{:?}", heap), "[1, 3, 2]");
        assert_eq!(format!("{:?}", MinHeap::<i32>::new()), "[]");
    }
}
