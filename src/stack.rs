//! Stack: LIFO over a chain of boxed nodes.

use crate::array::Array;
use crate::error::{Error, Result};
use core::fmt;

struct Node<T> {
    value: T,
    below: Option<Box<Node<T>>>,
}

pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn push(&mut self, value: T) {
        let below = self.top.take();
        self.top = Some(Box::new(Node { value, below }));
        self.len += 1;
    }

    pub fn pop(&mut self) -> Result<T> {
        let node = self.top.take().ok_or(Error::empty("pop"))?;
        let Node { value, below } = *node;
        self.top = below;
        self.len -= 1;
        Ok(value)
    }

    pub fn top(&self) -> Result<&T> {
        self.top
            .as_deref()
            .map(|n| &n.value)
            .ok_or(Error::empty("top"))
    }

    pub fn top_mut(&mut self) -> Result<&mut T> {
        self.top
            .as_deref_mut()
            .map(|n| &mut n.value)
            .ok_or(Error::empty("top_mut"))
    }

    pub fn clear(&mut self) {
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.below.take();
        }
        self.len = 0;
    }

    /// Iterate from the top of the stack down.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cur: self.top.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively so long stacks don't recurse through Box drops.
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let values: Array<&T> = self.iter().collect();
        let mut out = Stack::new();
        for v in values.iter().rev() {
            out.push(T::clone(v));
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

/// Pushes in iteration order; the last item ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

pub struct Iter<'a, T> {
    cur: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let node = self.cur?;
        self.cur = node.below.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
