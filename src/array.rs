//! Array: contiguous growable buffer with an explicit logical capacity.
//!
//! Storage is a `Vec<T>` holding exactly the live elements; the array
//! tracks its own capacity so growth is observable and deterministic
//! (doubling from a base of 32), independent of the allocator's rounding.

use crate::error::{Error, Result};
use core::fmt;
use core::ops::{Index, IndexMut};

/// Capacity allocated by the first push into an array with no capacity.
pub const GROWTH_BASE: usize = 32;

pub struct Array<T> {
    buf: Vec<T>,
    cap: usize, // logical capacity; always >= buf.len()
}

impl<T> Array<T> {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            cap: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut a = Self::new();
        a.reserve(capacity);
        a
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Checked access; fails with `OutOfBounds` when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.buf.len();
        self.buf.get(index).ok_or(Error::OutOfBounds { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.buf.len();
        self.buf
            .get_mut(index)
            .ok_or(Error::OutOfBounds { index, len })
    }

    /// Grow capacity to at least `capacity`. Never shrinks; keeps elements in order.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.cap {
            return;
        }
        self.buf.reserve_exact(capacity - self.buf.len());
        self.cap = capacity;
    }

    /// Append at the end, doubling capacity when full.
    pub fn push_back(&mut self, value: T) {
        if self.buf.len() == self.cap {
            let grown = if self.cap == 0 {
                GROWTH_BASE
            } else {
                self.cap * 2
            };
            self.reserve(grown);
        }
        self.buf.push(value);
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Result<T> {
        self.buf.pop().ok_or(Error::empty("pop_back"))
    }

    /// Drop every element. Capacity is retained.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Exchange contents (elements and capacity) with `other`.
    pub fn swap_with(&mut self, other: &mut Array<T>) {
        core::mem::swap(self, other);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            it: self.buf.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            it: self.buf.iter_mut(),
        }
    }
}

impl<T: Default> Array<T> {
    /// Set the length to `len`. Growing fills new slots with `T::default()`;
    /// shrinking drops the tail but keeps the allocation.
    pub fn resize(&mut self, len: usize) {
        self.reserve(len);
        self.buf.resize_with(len, T::default);
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.cap);
        buf.extend(self.buf.iter().cloned());
        Self { buf, cap: self.cap }
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T> Index<usize> for Array<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.buf[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buf[index]
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut a = Self::new();
        a.extend(iter);
        a
    }
}

/// Forward/reverse iterator over shared elements.
pub struct Iter<'a, T> {
    it: core::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.it.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// Forward/reverse iterator over mutable elements.
pub struct IterMut<'a, T> {
    it: core::slice::IterMut<'a, T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.it.next_back()
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

/// Owning iterator.
pub struct IntoIter<T> {
    it: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<T> {
        self.it.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.it.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            it: self.buf.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: The first push into an empty array allocates the growth base.
    #[test]
    fn first_push_allocates_growth_base() {
        let mut a = Array::new();
        assert_eq!(a.capacity(), 0);
        a.push_back(1);
        assert_eq!(a.capacity(), GROWTH_BASE);
        assert_eq!(a.len(), 1);
    }

    /// Invariant: A full array doubles its capacity and the overflowing element
    /// lands at the next index.
    #[test]
    fn push_into_full_array_doubles_capacity() {
        let mut a = Array::with_capacity(2);
        a.push_back(10);
        a.push_back(20);
        assert_eq!(a.capacity(), 2);
        a.push_back(30);
        assert_eq!(a.capacity(), 4);
        assert_eq!(a[2], 30);
        assert_eq!(a.at(2), Ok(&30));
    }

    /// Invariant: `reserve` never shrinks and keeps elements in order.
    #[test]
    fn reserve_grows_only() {
        let mut a: Array<i32> = (0..5).collect();
        let cap = a.capacity();
        a.reserve(1);
        assert_eq!(a.capacity(), cap);
        a.reserve(100);
        assert_eq!(a.capacity(), 100);
        assert_eq!(a.as_slice(), &[0, 1, 2, 3, 4]);
    }

    /// Invariant: `resize` fills with defaults when growing and truncates
    /// without giving back capacity when shrinking.
    #[test]
    fn resize_fills_and_truncates() {
        let mut a: Array<String> = Array::new();
        a.push_back("x".to_string());
        a.resize(3);
        assert_eq!(a.len(), 3);
        assert_eq!(a[0], "x");
        assert_eq!(a[1], "");
        assert_eq!(a[2], "");
        let cap = a.capacity();
        a.resize(1);
        assert_eq!(a.len(), 1);
        assert_eq!(a.capacity(), cap);
    }

    /// Invariant: `at` past `len` is an error even if capacity covers the index.
    #[test]
    fn at_checks_len_not_capacity() {
        let mut a = Array::with_capacity(8);
        a.push_back('a');
        assert_eq!(a.at(1), Err(Error::OutOfBounds { index: 1, len: 1 }));
        assert!(a.at_mut(7).is_err());
    }

    /// Invariant: `pop_back` on an empty array reports `Empty`.
    #[test]
    fn pop_back_on_empty_is_error() {
        let mut a: Array<u8> = Array::new();
        assert_eq!(a.pop_back(), Err(Error::Empty { op: "pop_back" }));
    }

    /// Invariant: `clear` empties the array but keeps its capacity.
    #[test]
    fn clear_keeps_capacity() {
        let mut a: Array<i32> = (0..40).collect();
        let cap = a.capacity();
        a.clear();
        assert!(a.is_empty());
        assert_eq!(a.capacity(), cap);
    }

    /// Invariant: Taking an array leaves the source with zero len and capacity.
    #[test]
    fn take_leaves_source_zeroed() {
        let mut a: Array<i32> = (0..3).collect();
        let b = core::mem::take(&mut a);
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.as_slice(), &[0, 1, 2]);
    }

    /// Invariant: `swap_with` exchanges both elements and capacity.
    #[test]
    fn swap_with_exchanges_everything() {
        let mut a: Array<i32> = Array::with_capacity(4);
        a.push_back(1);
        let mut b: Array<i32> = Array::new();
        a.swap_with(&mut b);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.as_slice(), &[1]);
        assert_eq!(b.capacity(), 4);
    }
}
