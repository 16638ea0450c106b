/// Creates a [`ForwardList`](crate::ForwardList) holding the given values in
/// order.
///
/// ```
/// use nexus_slist::{ForwardList, forward_list};
///
/// let list: ForwardList<u32> = forward_list![1, 2, 3];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.front(), Some(&1));
///
/// let empty: ForwardList<u32> = forward_list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! forward_list {
    () => {
        $crate::ForwardList::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::ForwardList::from([$($value),+])
    };
}
