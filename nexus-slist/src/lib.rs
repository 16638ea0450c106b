//! Singly-linked list with stable position handles.
//!
//! [`ForwardList`] is a forward-only sequence with O(1) front insertion and
//! removal, and O(1) insertion and removal after any [`Position`]. It has
//! value semantics: `Clone` is a deep copy, `clone_from` is copy-and-swap,
//! and comparison is lexicographic.
//!
//! # Design
//!
//! ```text
//! before_begin      begin                      end
//!      │              │                         │
//!  [sentinel] ──► [ v0 ] ──► [ v1 ] ──► [ v2 ] ──► END
//! ```
//!
//! - Nodes live in a slab owned by the list. Links are slab keys, so a
//!   [`Position`] is a `Copy` handle that survives unrelated mutation.
//! - A valueless sentinel node precedes the first element. Front mutation is
//!   "insert/erase after the sentinel", so one primitive covers front and
//!   interior.
//! - Teardown walks the chain in a loop. Dropping a list of any length uses
//!   constant stack.
//!
//! # Quick Start
//!
//! ```
//! use nexus_slist::{ForwardList, forward_list};
//!
//! let mut list: ForwardList<u64> = forward_list![1, 2, 3, 4];
//!
//! // Front mutation through the sentinel
//! list.erase_after(list.before_begin());
//! assert_eq!(list, forward_list![2, 3, 4]);
//!
//! // Interior mutation through a handle
//! let begin = list.begin();
//! list.insert_after(begin, 9);
//! assert_eq!(list, forward_list![2, 9, 3, 4]);
//!
//! assert!(list < forward_list![3]);
//! ```
//!
//! # Failure Safety
//!
//! Insertions construct the node before touching any link, and construction
//! builds into a fresh list that is dropped on failure. A panicking `Clone`
//! or an `Err` from a fallible constructor leaves every existing list
//! exactly as it was:
//!
//! ```
//! use nexus_slist::{ForwardList, forward_list};
//!
//! let parsed: Result<ForwardList<u8>, _> =
//!     ["1", "2", "300"].iter().map(|s| s.parse::<u8>()).collect();
//! assert!(parsed.is_err());
//! ```
//!
//! # Performance
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_front` / `pop_front` | O(1) |
//! | `insert_after` / `erase_after` | O(1) |
//! | `len` / `is_empty` / `swap` | O(1) |
//! | `clone` / `clear` / comparison | O(n) |
//! | `Extend` (append at back) | O(n + k) |
//!
//! Run the latency histograms with
//! `cargo test --release -p nexus-slist bench_forward_list::bench_all -- --ignored --nocapture`.

#![warn(missing_docs)]

mod macros;

pub mod cursor;
pub mod iter;
pub mod list;
pub mod position;

pub use cursor::{Cursor, CursorMut};
pub use iter::{Drain, IntoIter, Iter, IterMut};
pub use list::{ForwardList, swap};
pub use position::Position;
