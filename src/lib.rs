//! chained-collections: generic containers with value semantics and a
//! separately chained `HashMap` built from the crate's own array and list.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small set of containers where the hash map is composed from
//!   the other two, so each layer can be reasoned about on its own.
//! - Layers:
//!   - Array<T>: contiguous growable buffer with an explicit logical
//!     capacity (doubling from 32). Serves as the bucket table.
//!   - DoublyLinkedList<T>: nodes in a generational arena, linked by key in
//!     both directions. `Position` handles give O(1) erase and stay valid
//!     until their own node is erased. Serves as each bucket's chain.
//!   - HashMap<K, V, S>: `Array<DoublyLinkedList<Entry>>`; entry with hash
//!     `h` sits in bucket `h % capacity`.
//! - Standalone: LinkedList<T> (singly linked, arena backed) and Stack<T>
//!   (boxed chain).
//!
//! Constraints
//! - Single-threaded; no locks or atomics anywhere.
//! - Unique keys: a duplicate `insert` fails and leaves the map untouched.
//! - Load factor stays below 0.75 after every insert; the table doubles
//!   right before an insert would reach it, and never shrinks.
//! - No `unsafe`: ordering and back-links live in arena keys instead of
//!   raw pointers.
//!
//! Access tiers
//! - `HashMap::at` is strict and fails with `Error::KeyNotFound`.
//! - `HashMap::get_or_insert_default` upserts a `V::default()` instead.
//! - `HashMap::erase` of an absent key is a no-op, not an error.
//!
//! Hashing and rehashing
//! - Each entry stores its `u64` hash; rehash re-threads entries using the
//!   stored hash and never calls `K: Hash` again.
//!
//! Value semantics
//! - `Clone` is a deep copy for every container.
//! - `std::mem::take` moves contents out and leaves an empty, usable
//!   container behind.
//!
//! Notes and non-goals
//! - No serialization, no allocator customization, no open addressing.
//! - Positions are only meaningful for the list that produced them.

pub mod array;
pub mod doubly_linked_list;
mod error;
pub mod hash_map;
mod hash_map_proptest;
pub mod linked_list;
pub mod stack;

// Public surface
pub use array::Array;
pub use doubly_linked_list::{DoublyLinkedList, Position};
pub use error::{Error, Result};
pub use hash_map::HashMap;
pub use linked_list::LinkedList;
pub use stack::Stack;
