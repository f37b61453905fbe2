//! DoublyLinkedList: node chain stored in a generational arena.
//!
//! Nodes live in a `SlotMap` and link to each other by key. The list keeps
//! `head`/`tail` keys; a `Position` is a thin wrapper over a node key and
//! stays valid until that node is erased. Erasing other nodes never moves
//! anything, and a stale `Position` simply resolves to `None`.

use crate::error::{Error, Result};
use core::fmt;
use core::ops::{Index, IndexMut};
use slotmap::{DefaultKey, SecondaryMap, SlotMap};

/// Handle to one node of a specific list.
///
/// A position is only meaningful for the list that returned it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position(DefaultKey);

struct Node<T> {
    value: T,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

pub struct DoublyLinkedList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, value: T) -> Position {
        let k = self.nodes.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(h) => self.nodes[h].prev = Some(k),
            None => self.tail = Some(k),
        }
        self.head = Some(k);
        Position(k)
    }

    pub fn push_back(&mut self, value: T) -> Position {
        let k = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(t) => self.nodes[t].next = Some(k),
            None => self.head = Some(k),
        }
        self.tail = Some(k);
        Position(k)
    }

    pub fn pop_front(&mut self) -> Result<T> {
        self.head
            .and_then(|k| self.unlink(k))
            .ok_or(Error::empty("pop_front"))
    }

    pub fn pop_back(&mut self) -> Result<T> {
        self.tail
            .and_then(|k| self.unlink(k))
            .ok_or(Error::empty("pop_back"))
    }

    pub fn front(&self) -> Result<&T> {
        self.head
            .map(|k| &self.nodes[k].value)
            .ok_or(Error::empty("front"))
    }

    pub fn back(&self) -> Result<&T> {
        self.tail
            .map(|k| &self.nodes[k].value)
            .ok_or(Error::empty("back"))
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        match self.head {
            Some(k) => Ok(&mut self.nodes[k].value),
            None => Err(Error::empty("front_mut")),
        }
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        match self.tail {
            Some(k) => Ok(&mut self.nodes[k].value),
            None => Err(Error::empty("back_mut")),
        }
    }

    /// Splice the node at `pos` out of the chain and return its value.
    ///
    /// O(1). Returns `None` for a position whose node is already gone;
    /// other positions stay valid.
    pub fn erase(&mut self, pos: Position) -> Option<T> {
        self.unlink(pos.0)
    }

    fn unlink(&mut self, k: DefaultKey) -> Option<T> {
        let node = self.nodes.remove(k)?;
        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        Some(node.value)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn first(&self) -> Option<Position> {
        self.head.map(Position)
    }

    pub fn last(&self) -> Option<Position> {
        self.tail.map(Position)
    }

    /// Position after `pos`; `None` at the end or if `pos` is stale.
    pub fn next_of(&self, pos: Position) -> Option<Position> {
        self.nodes.get(pos.0)?.next.map(Position)
    }

    /// Position before `pos`; `None` at the front or if `pos` is stale.
    pub fn prev_of(&self, pos: Position) -> Option<Position> {
        self.nodes.get(pos.0)?.prev.map(Position)
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.nodes.get(pos.0).map(|n| &n.value)
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.nodes.get_mut(pos.0).map(|n| &mut n.value)
    }

    /// First position, walking from the front, whose value satisfies `pred`.
    pub fn position_of<F>(&self, mut pred: F) -> Option<Position>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cur = self.head;
        while let Some(k) = cur {
            let node = &self.nodes[k];
            if pred(&node.value) {
                return Some(Position(k));
            }
            cur = node.next;
        }
        None
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }

    /// Mutable iteration in list order.
    ///
    /// The arena is unordered, so the chain order is materialized up front.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let mut rank: SecondaryMap<DefaultKey, usize> = SecondaryMap::new();
        let mut cur = self.head;
        while let Some(k) = cur {
            rank.insert(k, rank.len());
            cur = self.nodes[k].next;
        }
        let mut ordered: Vec<Option<&mut T>> = Vec::new();
        ordered.resize_with(self.nodes.len(), || None);
        for (k, node) in self.nodes.iter_mut() {
            if let Some(&i) = rank.get(k) {
                ordered[i] = Some(&mut node.value);
            }
        }
        IterMut {
            it: ordered.into_iter().flatten(),
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    /// Rebuilds the chain node by node into a fresh arena.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

/// Access by position; panics if the node was erased.
impl<T> Index<Position> for DoublyLinkedList<T> {
    type Output = T;
    fn index(&self, pos: Position) -> &T {
        &self.nodes[pos.0].value
    }
}

impl<T> IndexMut<Position> for DoublyLinkedList<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        &mut self.nodes[pos.0].value
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut l = Self::new();
        l.extend(iter);
        l
    }
}

/// Double-ended iterator over shared values in list order.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<DefaultKey, Node<T>>,
    front: Option<DefaultKey>,
    back: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// Double-ended iterator over mutable values in list order.
pub struct IterMut<'a, T> {
    it: core::iter::Flatten<std::vec::IntoIter<Option<&'a mut T>>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        self.it.next()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.it.next_back()
    }
}

/// Owning iterator; drains from either end.
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
