//! LinkedList: singly-linked chain in a generational arena.
//!
//! Same storage scheme as `DoublyLinkedList` but with forward links only,
//! so `pop_back` has to walk to the new tail.

use crate::error::{Error, Result};
use core::fmt;
use slotmap::{DefaultKey, SlotMap};

struct Node<T> {
    value: T,
    next: Option<DefaultKey>,
}

pub struct LinkedList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl<T> LinkedList<T> {
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

    pub fn push_front(&mut self, value: T) {
        let k = self.nodes.insert(Node {
            value,
            next: self.head,
        });
        if self.tail.is_none() {
            self.tail = Some(k);
        }
        self.head = Some(k);
    }

    pub fn push_back(&mut self, value: T) {
        let k = self.nodes.insert(Node { value, next: None });
        match self.tail {
            Some(t) => self.nodes[t].next = Some(k),
            None => self.head = Some(k),
        }
        self.tail = Some(k);
    }

    pub fn pop_front(&mut self) -> Result<T> {
        let node = self
            .head
            .and_then(|k| self.nodes.remove(k))
            .ok_or(Error::empty("pop_front"))?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.value)
    }

    /// O(n): walks from the head to find the node before the tail.
    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::empty("pop_back"))?;
        let mut before = None;
        let mut cur = self.head;
        while let Some(k) = cur {
            if k == tail {
                break;
            }
            before = Some(k);
            cur = self.nodes[k].next;
        }
        let node = self.nodes.remove(tail).ok_or(Error::empty("pop_back"))?;
        match before {
            Some(b) => self.nodes[b].next = None,
            None => self.head = None,
        }
        self.tail = before;
        Ok(node.value)
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

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cur: self.head,
            remaining: self.nodes.len(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut l = Self::new();
        l.extend(iter);
        l
    }
}

/// Forward iterator over shared values.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<DefaultKey, Node<T>>,
    cur: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        let node = &nodes[self.cur?];
        self.cur = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator, front to back.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}
