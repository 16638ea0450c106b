//! Position handles into a [`ForwardList`](crate::ForwardList).
//!
//! A [`Position`] is a plain `Copy` key naming one node of a list: the
//! before-begin sentinel, a real element, or the past-the-end state.
//! Positions do not borrow the list, so they can be held across mutations
//! and used as anchors for `insert_after` / `erase_after`.
//!
//! # Validity
//!
//! A position stays valid until the node it names is removed. Other
//! insertions and removals never move a node, so positions to untouched
//! nodes survive them.
//!
//! Using an invalidated position is a logic error. It is memory-safe: the
//! call either panics, returns `None`, or (if the slot has been reused by a
//! later insert) addresses the newer node.

/// Key of the before-begin sentinel. It is the first entry inserted into a
/// list's arena and is never removed.
pub(crate) const SENTINEL: usize = 0;

/// Link value marking "no next node".
pub(crate) const END: usize = usize::MAX;

/// A non-owning handle to a node in a [`ForwardList`](crate::ForwardList).
///
/// Obtain positions from [`before_begin`](crate::ForwardList::before_begin),
/// [`begin`](crate::ForwardList::begin), [`end`](crate::ForwardList::end),
/// [`next`](crate::ForwardList::next), or from the insertion methods.
///
/// # Example
///
/// ```
/// use nexus_slist::{ForwardList, forward_list};
///
/// let mut list: ForwardList<u32> = forward_list![1, 3];
///
/// let one = list.begin();
/// let two = list.insert_after(one, 2);
///
/// assert_eq!(list.next(one), two);
/// assert_eq!(list.get(two), Some(&2));
/// assert_eq!(list, forward_list![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(usize);

impl Position {
    /// The past-the-end position. Equal to [`ForwardList::end`](crate::ForwardList::end)
    /// for every list.
    pub const END: Self = Position(END);

    /// The before-begin position. Equal to
    /// [`ForwardList::before_begin`](crate::ForwardList::before_begin) for every list.
    pub const BEFORE_BEGIN: Self = Position(SENTINEL);

    #[inline]
    pub(crate) const fn from_key(key: usize) -> Self {
        Position(key)
    }

    #[inline]
    pub(crate) const fn key(self) -> usize {
        self.0
    }

    /// Returns `true` if this is the past-the-end position.
    #[inline]
    pub const fn is_end(self) -> bool {
        self.0 == END
    }

    /// Returns `true` if this is the before-begin position.
    #[inline]
    pub const fn is_before_begin(self) -> bool {
        self.0 == SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_constants() {
        assert!(Position::END.is_end());
        assert!(!Position::END.is_before_begin());
        assert!(Position::BEFORE_BEGIN.is_before_begin());
        assert!(!Position::BEFORE_BEGIN.is_end());
    }

    #[test]
    fn key_round_trip() {
        let pos = Position::from_key(7);
        assert_eq!(pos.key(), 7);
        assert!(!pos.is_end());
        assert!(!pos.is_before_begin());
    }
}
