//! Singly-linked list with a before-begin sentinel.
//!
//! Nodes live in a [`slab::Slab`] owned by the list. Links are slab keys, so
//! a [`Position`] is a stable handle that does not borrow the list. The first
//! slab entry is a valueless sentinel whose link is the head of the chain.
//! Front mutation is "mutate after the sentinel": `push_front` and
//! `pop_front` are thin wrappers around `insert_after` and `remove_after`.
//!
//! # Example
//!
//! ```
//! use nexus_slist::{ForwardList, forward_list};
//!
//! let mut list: ForwardList<u64> = ForwardList::new();
//!
//! list.push_front(3);
//! list.push_front(1);
//! let one = list.begin();
//! list.insert_after(one, 2);
//!
//! assert_eq!(list, forward_list![1, 2, 3]);
//!
//! // Remove the element after the first
//! let three = list.erase_after(one);
//! assert_eq!(list.get(three), Some(&3));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Failure Safety
//!
//! Every insertion builds its node before changing any link. If producing
//! the value fails (a panicking `Clone`, or an `Err` from
//! [`try_insert_after_with`](ForwardList::try_insert_after_with)) the list
//! is left exactly as it was.
//!
//! ```
//! use nexus_slist::{ForwardList, forward_list};
//!
//! let mut list: ForwardList<u32> = forward_list![1, 2, 3];
//! let begin = list.begin();
//!
//! let result = list.try_insert_after_with(begin, || "bad input".parse::<u32>());
//! assert!(result.is_err());
//! assert_eq!(list, forward_list![1, 2, 3]);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;

use slab::Slab;

use crate::position::{END, SENTINEL};
use crate::{Cursor, CursorMut, Drain, IntoIter, Iter, IterMut, Position};

/// A node in the list's arena.
///
/// Real nodes always hold `Some(value)`. The sentinel is the only node with
/// `None`.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) next: usize,
}

impl<T> Node<T> {
    #[inline]
    const fn sentinel() -> Self {
        Self {
            value: None,
            next: END,
        }
    }

    #[inline]
    const fn new(value: T, next: usize) -> Self {
        Self {
            value: Some(value),
            next,
        }
    }
}

/// A singly-linked list with O(1) front and position-relative mutation.
///
/// # Example
///
/// ```
/// use nexus_slist::{ForwardList, forward_list};
///
/// let a: ForwardList<&str> = forward_list!["x", "y"];
/// let mut b = a.clone();
/// b.push_front("w");
///
/// assert_eq!(a.len(), 2);
/// assert_eq!(b.len(), 3);
/// assert!(a > b); // "x" > "w"
/// ```
pub struct ForwardList<T> {
    nodes: Slab<Node<T>>,
    len: usize,
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Construction and size
// =============================================================================

impl<T> ForwardList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// node arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Slab::with_capacity(capacity.saturating_add(1));
        let key = nodes.insert(Node::sentinel());
        debug_assert_eq!(key, SENTINEL);
        Self { nodes, len: 0 }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the list can hold without
    /// reallocating its node arena.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity() - 1
    }

    /// Reserves room for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Swaps the contents of two lists in O(1).
    ///
    /// No node is touched. Positions keep naming the same nodes, which now
    /// belong to the other list.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

// =============================================================================
// Positions
// =============================================================================

impl<T> ForwardList<T> {
    /// Returns the position before the first element.
    ///
    /// Valid as an anchor for [`insert_after`](Self::insert_after) and
    /// [`erase_after`](Self::erase_after), which is how the logical front is
    /// mutated.
    #[inline]
    pub const fn before_begin(&self) -> Position {
        Position::BEFORE_BEGIN
    }

    /// Read-only alias of [`before_begin`](Self::before_begin).
    #[inline]
    pub const fn cbefore_begin(&self) -> Position {
        self.before_begin()
    }

    /// Returns the position of the first element, or [`end`](Self::end) if
    /// the list is empty.
    #[inline]
    pub fn begin(&self) -> Position {
        Position::from_key(self.nodes[SENTINEL].next)
    }

    /// Read-only alias of [`begin`](Self::begin).
    #[inline]
    pub fn cbegin(&self) -> Position {
        self.begin()
    }

    /// Returns the past-the-end position.
    #[inline]
    pub const fn end(&self) -> Position {
        Position::END
    }

    /// Read-only alias of [`end`](Self::end).
    #[inline]
    pub const fn cend(&self) -> Position {
        self.end()
    }

    /// Returns the position following `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is [`end`](Self::end) or names a removed node.
    #[inline]
    pub fn next(&self, pos: Position) -> Position {
        debug_assert!(!pos.is_end(), "cannot advance past end");
        Position::from_key(self.nodes[pos.key()].next)
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// Returns `None` for before-begin, end, and removed positions.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.nodes.get(pos.key())?.value.as_ref()
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// Returns `None` for before-begin, end, and removed positions.
    #[inline]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.nodes.get_mut(pos.key())?.value.as_mut()
    }

    /// Returns a reference to the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(self.begin())
    }

    /// Returns a mutable reference to the first element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let begin = self.begin();
        self.get_mut(begin)
    }

    /// Walks to the last node, or the sentinel if empty.
    fn tail_key(&self) -> usize {
        let mut key = SENTINEL;
        loop {
            let next = self.nodes[key].next;
            if next == END {
                return key;
            }
            key = next;
        }
    }
}

// =============================================================================
// Mutation
// =============================================================================

impl<T> ForwardList<T> {
    /// Allocates a node for `value` and splices it after `after`.
    ///
    /// The successor is read before the node is allocated, so a bad anchor
    /// panics with the list untouched.
    #[inline]
    fn link_after(&mut self, after: usize, value: T) -> usize {
        debug_assert!(after != END, "cannot insert after end");
        let next = self.nodes[after].next;
        let key = self.nodes.insert(Node::new(value, next));
        self.nodes[after].next = key;
        self.len += 1;
        key
    }

    /// Pushes a value to the front of the list.
    ///
    /// Returns the position of the new element. No other position is
    /// invalidated.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Position {
        Position::from_key(self.link_after(SENTINEL, value))
    }

    /// Removes and returns the first element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove_after(Position::BEFORE_BEGIN)
    }

    /// Inserts `value` immediately after `pos`.
    ///
    /// `pos` may be [`before_begin`](Self::before_begin) to insert at the
    /// front. Returns the position of the new element.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is [`end`](Self::end) or names a removed node. The
    /// list is unchanged when this happens.
    #[inline]
    pub fn insert_after(&mut self, pos: Position, value: T) -> Position {
        Position::from_key(self.link_after(pos.key(), value))
    }

    /// Inserts a clone of `value` immediately after `pos`.
    ///
    /// The clone is made before any link changes. If `T::clone` panics the
    /// list is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is [`end`](Self::end) or names a removed node.
    #[inline]
    pub fn insert_after_cloned(&mut self, pos: Position, value: &T) -> Position
    where
        T: Clone,
    {
        let value = value.clone();
        self.insert_after(pos, value)
    }

    /// Inserts the value produced by `f` immediately after `pos`.
    ///
    /// `f` runs before any link changes.
    ///
    /// # Errors
    ///
    /// Returns the error from `f` unchanged. The list is left exactly as
    /// it was.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is [`end`](Self::end) or names a removed node.
    #[inline]
    pub fn try_insert_after_with<E, F>(&mut self, pos: Position, f: F) -> Result<Position, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let value = f()?;
        Ok(self.insert_after(pos, value))
    }

    /// Inserts every value of `iter` after `pos`, in iteration order.
    ///
    /// Returns the position of the last inserted element, or `pos` if the
    /// iterator was empty. The values are collected before any link changes,
    /// so a panicking iterator leaves the list unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is [`end`](Self::end) or names a removed node.
    pub fn extend_after<I>(&mut self, pos: Position, iter: I) -> Position
    where
        I: IntoIterator<Item = T>,
    {
        let mut staged: ForwardList<T> = iter.into_iter().collect();
        self.reserve(staged.len());

        let mut last = pos;
        while let Some(value) = staged.pop_front() {
            last = self.insert_after(last, value);
        }
        last
    }

    /// Removes the element immediately after `pos` and returns it.
    ///
    /// Returns `None` if `pos` is the last element, end, or a removed node.
    #[inline]
    pub fn remove_after(&mut self, pos: Position) -> Option<T> {
        let key = self.nodes.get(pos.key())?.next;
        if key == END {
            return None;
        }

        let node = self.nodes.remove(key);
        self.nodes[pos.key()].next = node.next;
        self.len -= 1;
        node.value
    }

    /// Drops the element immediately after `pos`.
    ///
    /// Returns the position now following `pos`, or [`end`](Self::end).
    /// Only positions naming the erased element are invalidated.
    ///
    /// # Panics
    ///
    /// Panics if no element follows `pos`.
    #[inline]
    pub fn erase_after(&mut self, pos: Position) -> Position {
        let key = self.nodes[pos.key()].next;
        debug_assert!(key != END, "erase_after: no element follows position");

        let node = self.nodes.remove(key);
        let next = node.next;
        self.nodes[pos.key()].next = next;
        self.len -= 1;
        drop(node);

        Position::from_key(next)
    }

    /// Removes every element, front to back.
    pub fn clear(&mut self) {
        // Detach the chain first so a panicking destructor leaves an empty,
        // consistent list. Unvisited nodes are still owned by the slab.
        let mut key = mem::replace(&mut self.nodes[SENTINEL].next, END);
        self.len = 0;

        while key != END {
            let node = self.nodes.remove(key);
            key = node.next;
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> ForwardList<T> {
    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.nodes[SENTINEL].next, self.len)
    }

    /// Returns an iterator over mutable references to elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let head = self.nodes[SENTINEL].next;
        IterMut::new(&mut self.nodes, head, self.len)
    }

    /// Removes every element, returning them front to back.
    ///
    /// Elements not consumed are dropped when the iterator is dropped.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Returns a read-only cursor at the before-begin position.
    #[inline]
    pub fn cursor_before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, SENTINEL)
    }

    /// Returns a read-only cursor at the first element.
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.nodes[SENTINEL].next)
    }

    /// Returns a mutable cursor at the before-begin position.
    #[inline]
    pub fn cursor_before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, SENTINEL)
    }

    /// Returns a mutable cursor at the first element.
    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.nodes[SENTINEL].next;
        CursorMut::new(self, head)
    }

    #[inline]
    pub(crate) fn node(&self, key: usize) -> &Node<T> {
        &self.nodes[key]
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

// =============================================================================
// Construction from values
// =============================================================================

impl<T> FromIterator<T> for ForwardList<T> {
    /// Builds the list in one forward pass, appending after the last node.
    ///
    /// If the iterator panics the partial list is dropped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);

        let mut tail = SENTINEL;
        for value in iter {
            tail = list.link_after(tail, value);
        }
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// Appends values at the back. Finding the back is O(len).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let tail = Position::from_key(self.tail_key());
        self.extend_after(tail, iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for ForwardList<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    /// Deep copy in the same order. A panicking `T::clone` drops the
    /// partial copy.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copy-and-swap: the copy is built in full before `self` changes, so a
    /// panicking `T::clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Swaps the contents of two lists in O(1).
#[inline]
pub fn swap<T>(a: &mut ForwardList<T>, b: &mut ForwardList<T>) {
    a.swap(b);
}
