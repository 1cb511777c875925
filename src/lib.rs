//! This crate provides a circular doubly-linked list whose nodes live in an
//! arena, together with cursors that tell the "first element" and the "end"
//! position apart by a boundary flag instead of a sentinel node.
//!
//! The [`List`] allows inserting and removing elements at both ends, or before
//! any cursor position, in constant time. In compromise, reaching an element
//! at an arbitrary index takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use circular_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4, 5]);
//! assert_eq!(list.iter().sum::<i32>(), 15);
//! assert_eq!(list.front(), Ok(&1));
//! assert_eq!(list.back(), Ok(&5));
//!
//! // Erase the second element.
//! let mut cursor = list.begin();
//! cursor.move_next();
//! let second = cursor.position();
//! let at_three = list.erase(second).unwrap();
//! assert_eq!(list, List::from([1, 3, 4, 5]));
//!
//! // Put it back, before the element `3`.
//! list.insert(at_three, 2);
//! assert_eq!(list, List::from([1, 2, 3, 4, 5]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!       ┌────────────────────────────────────────────────────────────────┐
//!       ↓                                                                │
//!    ┌───────────┐           ┌───────────┐                  ┌───────────┐│
//!    │   next    │ ────────→ │   next    │ ───→ ┄┄ ───────→ │   next    │┘
//!    ├───────────┤           ├───────────┤  Node 2, 3, ...  ├───────────┤
//! ┌─ │   prev    │ ←──────── │   prev    │ ←─── ┄┄ ←─────── │   prev    │
//! │  ├───────────┤           ├───────────┤                  ├───────────┤
//! │  │ element T │           │ element T │                  │ element T │
//! │  └───────────┘           └───────────┘                  └───────────┘
//! │    Node 0 ↑                Node 1                         Node n-1 ↑
//! └───────────┼────────────────────────────────────────────────────────┘
//! ┌───────────┐
//! │   head    │    nodes: Slab<Node<T>>  (every link is a slab index)
//! └───────────┘
//!     List
//! ```
//! The `List` contains:
//! - an arena `nodes` which owns every node of the ring;
//! - an index `head` to the entry node, i.e. the first element. It is `None`
//!   if and only if the list is empty.
//!
//! Each node contains:
//! - the `next` index, the owning direction of the ring: the entry node is
//!   reached again after following it `len` times;
//! - the `prev` index, a back-reference used only for reverse traversal;
//! - the element `T`.
//!
//! There is no sentinel node. The last node links straight back to the entry
//! node.
//!
//! # Cursors
//!
//! A [`Cursor`] or [`CursorMut`] denotes one of the *n* + 1 positions of a list
//! with length *n*: one per element, plus the "end" position past the last
//! element. The end position refers to the entry node too, but carries the
//! boundary flag. This is why, on a single-element list, `begin()` and `end()`
//! refer to the same node and still compare unequal:
//!
//! ```
//! use circular_list::List;
//!
//! let list = List::from(['A']);
//! assert_ne!(list.begin(), list.end());
//!
//! let mut cursor = list.begin();
//! cursor.move_next();
//! assert_eq!(cursor, list.end());
//! ```
//!
//! A cursor borrows its list. Its detached, `Copy` form is a [`Position`],
//! which is what [`List::insert`] and [`List::erase`] take and return.
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] edits the list in place:
//! - [`insert`]: insert a new element before the cursor, and move onto it;
//! - [`erase`]: remove the element at the cursor, and move onto its successor.
//!
//! ```
//! use circular_list::List;
//!
//! let mut list = List::from([1, 2, 4]);
//! let mut cursor = list.end_mut();
//! cursor.move_prev();
//! cursor.insert(3); // becomes [1, 2, 3, 4], points to 3
//! assert_eq!(cursor.current(), Some(&3));
//!
//! cursor.move_to_begin();
//! assert_eq!(cursor.erase(), Ok(1)); // becomes [2, 3, 4], points to 2
//! assert_eq!(cursor.current(), Some(&2));
//! assert_eq!(Vec::from_iter(list), vec![2, 3, 4]);
//! ```
//!
//! # Errors
//!
//! Reading or removing an element of an empty list fails with
//! [`ListError::OutOfRange`]; the list is left untouched.
//!
//! # Features
//!
//! - `tracing` (default): emit `tracing` events for out-of-range errors and
//!   for the branches taken by positional insertion and removal.
//!
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`erase`]: crate::list::cursor::CursorMut::erase

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    }};
}

#[doc(inline)]
pub use error::{ListError, Result};
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut, Position};
#[doc(inline)]
pub use list::iterator::{CursorIter, IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod error;
