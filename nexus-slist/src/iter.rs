//! Forward iterators over a [`ForwardList`].

use core::iter::FusedIterator;

use slab::Slab;

use crate::ForwardList;
use crate::list::Node;
use crate::position::END;

/// Iterator over references to list elements.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    current: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(nodes: &'a Slab<Node<T>>, head: usize, len: usize) -> Self {
        Self {
            nodes,
            current: head,
            remaining: len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current == END {
            return None;
        }

        let nodes: &'a Slab<Node<T>> = self.nodes;
        let node = &nodes[self.current];
        self.current = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over mutable references to list elements.
///
/// The slab is borrowed once, up front: every occupied node is split into
/// its element and its link, indexed by key. Walking the chain takes each
/// element out of that table exactly once.
pub struct IterMut<'a, T> {
    slots: Vec<Option<(&'a mut T, usize)>>,
    current: usize,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(nodes: &'a mut Slab<Node<T>>, head: usize, len: usize) -> Self {
        let mut slots = Vec::new();
        if len > 0 {
            slots.resize_with(nodes.capacity(), || None);
            for (key, node) in nodes.iter_mut() {
                let Node { value, next } = node;
                // Sentinel has no value
                if let Some(value) = value {
                    if key >= slots.len() {
                        slots.resize_with(key + 1, || None);
                    }
                    slots[key] = Some((value, *next));
                }
            }
        }

        Self {
            slots,
            current: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current == END {
            return None;
        }

        let (value, next) = self.slots.get_mut(self.current)?.take()?;
        self.current = next;
        self.remaining -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator, yielding elements front to back.
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) fn new(list: ForwardList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Iterator that removes and returns elements from a list.
///
/// Created by [`ForwardList::drain`].
pub struct Drain<'a, T> {
    list: &'a mut ForwardList<T>,
}

impl<'a, T> Drain<'a, T> {
    #[inline]
    pub(crate) fn new(list: &'a mut ForwardList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.list.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::{ForwardList, forward_list};

    #[test]
    fn iter_empty() {
        let list: ForwardList<u64> = ForwardList::new();
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.iter().len(), 0);
    }

    #[test]
    fn iter_in_order_with_exact_size() {
        let list: ForwardList<u64> = forward_list![1, 2, 3];
        let mut iter = list.iter();

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_is_reenterable_after_mutation() {
        let mut list: ForwardList<u64> = forward_list![1, 2];
        let first: Vec<_> = list.iter().copied().collect();

        list.push_front(0);
        let second: Vec<_> = list.iter().copied().collect();

        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![0, 1, 2]);
    }

    #[test]
    fn iter_mut() {
        let mut list: ForwardList<u64> = forward_list![1, 2, 3];

        for value in list.iter_mut() {
            *value *= 10;
        }

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![10, 20, 30]);
    }

    #[test]
    fn iter_mut_refs_outlive_each_step() {
        let mut list: ForwardList<u64> = forward_list![1, 2, 3, 4];
        list.erase_after(list.begin());
        list.push_front(0);

        let iter = list.iter_mut();
        assert_eq!(iter.len(), 4);
        let refs: Vec<&mut u64> = iter.collect();
        for value in refs {
            *value += 10;
        }

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![10, 11, 13, 14]);
    }

    #[test]
    fn iter_mut_empty() {
        let mut list: ForwardList<u64> = ForwardList::new();
        assert_eq!(list.iter_mut().next(), None);
    }

    #[test]
    fn for_loop_over_refs() {
        let mut list: ForwardList<u64> = forward_list![1, 2, 3];

        for value in &mut list {
            *value += 1;
        }

        let mut sum = 0;
        for value in &list {
            sum += value;
        }
        assert_eq!(sum, 9);
    }

    #[test]
    fn into_iter_owned() {
        let list: ForwardList<String> = forward_list!["a".to_string(), "b".to_string()];
        let values: Vec<String> = list.into_iter().collect();
        assert_eq!(values, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn drain_all() {
        let mut list: ForwardList<u64> = forward_list![1, 2, 3];

        let drained: Vec<_> = list.drain().collect();
        assert_eq!(drained, vec![1, 2, 3]);
        assert!(list.is_empty());
    }

    #[test]
    fn drain_partial_then_drop() {
        let mut list: ForwardList<u64> = forward_list![1, 2, 3, 4, 5];

        {
            let mut drain = list.drain();
            assert_eq!(drain.next(), Some(1));
            assert_eq!(drain.next(), Some(2));
        }

        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
    }
}
