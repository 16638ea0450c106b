//! Cursors over a [`ForwardList`].
//!
//! A cursor borrows the list and tracks one position. [`CursorMut`] can
//! insert and remove after its position while walking, which is the usual
//! shape of "filter in place" loops on a singly-linked list.
//!
//! ```
//! use nexus_slist::{ForwardList, forward_list};
//!
//! let mut list: ForwardList<u64> = forward_list![1, 2, 3, 4, 5, 6];
//!
//! // Drop every even element
//! let mut cursor = list.cursor_before_begin_mut();
//! while let Some(&next) = cursor.peek_next() {
//!     if next % 2 == 0 {
//!         cursor.remove_after();
//!     } else {
//!         cursor.move_next();
//!     }
//! }
//!
//! assert_eq!(list, forward_list![1, 3, 5]);
//! ```

use crate::position::END;
use crate::{ForwardList, Position};

/// A read-only cursor over a list.
pub struct Cursor<'a, T> {
    list: &'a ForwardList<T>,
    current: usize,
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn new(list: &'a ForwardList<T>, current: usize) -> Self {
        Self { list, current }
    }

    /// Returns the cursor's position.
    #[inline]
    pub fn position(&self) -> Position {
        Position::from_key(self.current)
    }

    /// Returns the current element.
    ///
    /// Returns `None` at before-begin and at end.
    #[inline]
    pub fn current(&self) -> Option<&'a T> {
        self.list.get(self.position())
    }

    /// Returns the element after the current position.
    #[inline]
    pub fn peek_next(&self) -> Option<&'a T> {
        if self.current == END {
            return None;
        }
        let next = self.list.node(self.current).next;
        self.list.get(Position::from_key(next))
    }

    /// Advances to the next position. At end, stays at end.
    #[inline]
    pub fn move_next(&mut self) {
        if self.current != END {
            self.current = self.list.node(self.current).next;
        }
    }

    /// Returns `true` if the cursor is past the last element.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current == END
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
        }
    }
}

/// A cursor with mutable access and insert/remove-after capability.
pub struct CursorMut<'a, T> {
    list: &'a mut ForwardList<T>,
    current: usize,
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(crate) fn new(list: &'a mut ForwardList<T>, current: usize) -> Self {
        Self { list, current }
    }

    /// Returns the cursor's position.
    #[inline]
    pub fn position(&self) -> Position {
        Position::from_key(self.current)
    }

    /// Returns the current element.
    #[inline]
    pub fn current(&self) -> Option<&T> {
        self.list.get(self.position())
    }

    /// Returns the current element mutably.
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let pos = self.position();
        self.list.get_mut(pos)
    }

    /// Returns the element after the current position.
    #[inline]
    pub fn peek_next(&self) -> Option<&T> {
        if self.current == END {
            return None;
        }
        let next = self.list.node(self.current).next;
        self.list.get(Position::from_key(next))
    }

    /// Advances to the next position. At end, stays at end.
    #[inline]
    pub fn move_next(&mut self) {
        if self.current != END {
            self.current = self.list.node(self.current).next;
        }
    }

    /// Returns `true` if the cursor is past the last element.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current == END
    }

    /// Inserts `value` after the current position. The cursor does not move.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at end.
    #[inline]
    pub fn insert_after(&mut self, value: T) -> Position {
        let pos = self.position();
        self.list.insert_after(pos, value)
    }

    /// Removes the element after the current position. The cursor does not
    /// move.
    ///
    /// Returns `None` if nothing follows the cursor.
    #[inline]
    pub fn remove_after(&mut self) -> Option<T> {
        let pos = self.position();
        self.list.remove_after(pos)
    }

    /// Returns a read-only view of the list.
    #[inline]
    pub fn list(&self) -> &ForwardList<T> {
        self.list
    }
}

#[cfg(test)]
mod tests {
    use crate::{ForwardList, forward_list};

    #[test]
    fn cursor_starts_before_begin() {
        let list: ForwardList<u64> = forward_list![1, 2];
        let mut cursor = list.cursor_before_begin();

        assert_eq!(cursor.position(), list.before_begin());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek_next(), Some(&1));

        cursor.move_next();
        assert_eq!(cursor.position(), list.begin());
        assert_eq!(cursor.current(), Some(&1));
    }

    #[test]
    fn cursor_walks_to_end() {
        let list: ForwardList<u64> = forward_list![1, 2, 3];
        let mut cursor = list.cursor_front();
        let mut seen = Vec::new();

        while let Some(&value) = cursor.current() {
            seen.push(value);
            cursor.move_next();
        }

        assert_eq!(seen, vec![1, 2, 3]);
        assert!(cursor.is_end());
        assert_eq!(cursor.peek_next(), None);

        // Stays at end
        cursor.move_next();
        assert!(cursor.is_end());
    }

    #[test]
    fn cursor_empty_list() {
        let list: ForwardList<u64> = ForwardList::new();
        let cursor = list.cursor_front();
        assert!(cursor.is_end());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn cursor_mut_insert_after_keeps_position() {
        let mut list: ForwardList<u64> = forward_list![1, 3];
        let mut cursor = list.cursor_front_mut();

        cursor.insert_after(2);
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.peek_next(), Some(&2));

        assert_eq!(list, forward_list![1, 2, 3]);
    }

    #[test]
    fn cursor_mut_insert_at_front() {
        let mut list: ForwardList<u64> = forward_list![2];
        let mut cursor = list.cursor_before_begin_mut();

        cursor.insert_after(1);
        assert_eq!(cursor.list().len(), 2);
        assert_eq!(list, forward_list![1, 2]);
    }

    #[test]
    fn cursor_mut_current_mut() {
        let mut list: ForwardList<u64> = forward_list![1, 2, 3];
        let mut cursor = list.cursor_front_mut();

        while !cursor.is_end() {
            if let Some(value) = cursor.current_mut() {
                *value *= 2;
            }
            cursor.move_next();
        }

        assert_eq!(list, forward_list![2, 4, 6]);
    }

    #[test]
    fn cursor_mut_remove_after_filters() {
        let mut list: ForwardList<u64> = (1..=10).collect();
        let mut cursor = list.cursor_before_begin_mut();

        while let Some(&next) = cursor.peek_next() {
            if next % 3 == 0 {
                assert_eq!(cursor.remove_after(), Some(next));
            } else {
                cursor.move_next();
            }
        }
        assert_eq!(cursor.remove_after(), None);

        assert_eq!(list, forward_list![1, 2, 4, 5, 7, 8, 10]);
        assert_eq!(list.len(), 7);
    }
}
