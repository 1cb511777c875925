use std::fmt::{Debug, Formatter};

use slab::Slab;

use crate::error::{ListError, Result};
use crate::list::cursor::{Cursor, CursorMut, Position};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a circular doubly-linked list. It allows inserting, removing
/// elements at both ends or before any cursor position in constant time.
/// In compromise, accessing or mutating elements at any position take *O*(*n*)
/// time.
///
/// The `List` contains:
/// - an arena `nodes` that owns every node of the ring;
/// - an index `head` to the entry node (the first element), or `None` if the
///   list is empty.
///
/// # Naming Conventions
///
/// - `head`: the entry node, i.e. the first element;
/// - `tail`: the predecessor of `head`, i.e. the last element;
/// - `begin..end`: the half-open range of positions covering every element,
///   where `end` is the boundary-flagged position past `tail`.
pub struct List<T> {
    nodes: Slab<Node<T>>,
    head: Option<usize>,
}

pub(crate) struct Node<T> {
    /// the owning direction of the ring
    pub(crate) next: usize,
    /// back-reference, only used for reverse traversal
    pub(crate) prev: usize,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    pub(crate) fn node(&self, node: usize) -> &Node<T> {
        &self.nodes[node]
    }
    pub(crate) fn next_of(&self, node: usize) -> usize {
        self.nodes[node].next
    }
    pub(crate) fn prev_of(&self, node: usize) -> usize {
        self.nodes[node].prev
    }
    pub(crate) fn tail(&self) -> Option<usize> {
        self.head.map(|head| self.prev_of(head))
    }

    /// The position reached by moving forward onto `node`: stepping onto the
    /// head again means the ring was wrapped, which is the end position.
    pub(crate) fn forward_position(&self, node: usize) -> Position {
        Position::new(Some(node), Some(node) == self.head)
    }

    pub(crate) fn step_forward(&self, pos: Position) -> Position {
        match pos.node() {
            None => pos,
            Some(_) if pos.is_end() => self.begin_position(),
            Some(node) => self.forward_position(self.next_of(node)),
        }
    }

    pub(crate) fn step_backward(&self, pos: Position) -> Position {
        match (pos.node(), self.tail()) {
            (None, _) | (_, None) => pos,
            (Some(_), Some(tail)) if pos.is_end() => Position::at(tail),
            (Some(node), Some(_)) => Position::at(self.prev_of(node)),
        }
    }

    pub(crate) fn element_at(&self, pos: Position) -> Option<&T> {
        match pos.node() {
            Some(node) if !pos.is_end() => self.nodes.get(node).map(|node| &node.element),
            _ => None,
        }
    }

    pub(crate) fn element_at_mut(&mut self, pos: Position) -> Option<&mut T> {
        match pos.node() {
            Some(node) if !pos.is_end() => self.nodes.get_mut(node).map(|node| &mut node.element),
            _ => None,
        }
    }

    /// Indices of the ring, from `head` to `tail`.
    pub(crate) fn ring(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, move |&node| Some(self.next_of(node))).take(self.len())
    }

    fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Allocate a node holding `element` and attach it between `next.prev`
    /// and `next`, returning the new node.
    ///
    /// The head is left unchanged.
    fn attach_before(&mut self, next: usize, element: T) -> usize {
        let prev = self.prev_of(next);
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = self.nodes.insert(Node {
            next,
            prev,
            element,
        });
        // The forward link to the new node is set before `next` lets go of
        // its back-reference.
        self.connect(prev, node);
        self.connect(node, next);
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, node);
            self.assert_adjacent(node, next);
        }
        node
    }

    /// Allocate a node holding `element` as the last element, returning the
    /// new node. An empty list becomes a ring of one node that links to
    /// itself in both directions.
    fn attach_back(&mut self, element: T) -> usize {
        match self.head {
            Some(head) => self.attach_before(head, element),
            None => {
                let entry = self.nodes.vacant_entry();
                let node = entry.key();
                entry.insert(Node {
                    next: node,
                    prev: node,
                    element,
                });
                self.head = Some(node);
                node
            }
        }
    }

    /// Detach a single node from the ring and reclaim it, returning its
    /// element.
    ///
    /// If `node` is the head, the head advances to its successor; if it is
    /// the only node, the list becomes empty.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not an occupied slot of the arena.
    fn detach_node(&mut self, node: usize) -> T {
        let Node { next, prev, .. } = self.nodes[node];
        if next == node {
            self.head = None;
        } else {
            self.connect(prev, next);
            if self.head == Some(node) {
                self.head = Some(next);
            }
            #[cfg(debug_assertions)]
            self.assert_adjacent(prev, next);
        }
        self.nodes.remove(node).element
    }

    pub(crate) fn take_front(&mut self) -> Option<T> {
        self.head.map(|head| self.detach_node(head))
    }

    pub(crate) fn take_back(&mut self) -> Option<T> {
        self.tail().map(|tail| self.detach_node(tail))
    }

    /// Remove the element at `pos`, returning it with the position of its
    /// successor.
    pub(crate) fn remove_at(&mut self, pos: Position) -> Result<(T, Position)> {
        let node = match (self.head, pos.node()) {
            (Some(_), Some(node)) if !pos.is_end() => node,
            _ => return Err(ListError::out_of_range("erase")),
        };
        if Some(node) == self.head {
            trace!("erase at the first element, popping front");
            let element = self.detach_node(node);
            return Ok((element, self.begin_position()));
        }
        let next = self.next_of(node);
        let element = self.detach_node(node);
        Ok((element, self.forward_position(next)))
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.nodes[prev].next, next);
        assert_eq!(self.nodes[next].prev, prev);
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use circular_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
        }
    }

    /// Create an empty `List` with room for `capacity` elements before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Removes all elements from the `List`, front to back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert!(list.front().is_err());
    /// ```
    pub fn clear(&mut self) {
        trace!(len = self.len(), "clearing list");
        while self.take_front().is_some() {}
    }

    /// Provides a reference to the front element, or an error if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(
    ///     list.front(),
    ///     Err(ListError::OutOfRange { operation: "front" })
    /// );
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T> {
        match self.head {
            Some(head) => Ok(&self.nodes[head].element),
            None => Err(ListError::out_of_range("front")),
        }
    }

    /// Provides a mutable reference to the front element, or an error if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1]);
    /// if let Ok(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        match self.head {
            Some(head) => Ok(&mut self.nodes[head].element),
            None => Err(ListError::out_of_range("front_mut")),
        }
    }

    /// Provides a reference to the back element, or an error if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.back().is_err());
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T> {
        match self.tail() {
            Some(tail) => Ok(&self.nodes[tail].element),
            None => Err(ListError::out_of_range("back")),
        }
    }

    /// Provides a mutable reference to the back element, or an error if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// if let Ok(x) = list.back_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(list.back(), Ok(&10));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        match self.tail() {
            Some(tail) => Ok(&mut self.nodes[tail].element),
            None => Err(ListError::out_of_range("back_mut")),
        }
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// assert_eq!(list.back(), Ok(&2));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let node = self.attach_back(elt);
        self.head = Some(node);
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.attach_back(elt);
    }

    /// Removes the first element and returns it, or an error if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.pop_front().is_err());
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert!(list.pop_front().is_err());
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        self.take_front()
            .ok_or_else(|| ListError::out_of_range("pop_front"))
    }

    /// Removes the last element from a list and returns it, or an error if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.pop_back().is_err());
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        self.take_back()
            .ok_or_else(|| ListError::out_of_range("pop_back"))
    }

    /// Inserts an element before `pos`, and returns the position of the new
    /// element.
    ///
    /// Inserting before the first element is [`push_front`](List::push_front),
    /// and inserting at the end is [`push_back`](List::push_back).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if `pos` refers to an element that has been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// let mut cursor = list.begin();
    /// cursor.move_next();
    /// let at_three = cursor.position();
    ///
    /// let at_two = list.insert(at_three, 2);
    /// assert_eq!(list.cursor(at_two).current(), Some(&2));
    /// assert_eq!(list, List::from([1, 2, 3]));
    ///
    /// let end = list.end().position();
    /// list.insert(end, 4);
    /// assert_eq!(list.back(), Ok(&4));
    /// ```
    pub fn insert(&mut self, pos: Position, elt: T) -> Position {
        let node = match pos.node() {
            Some(node) if !pos.is_end() => node,
            _ => {
                trace!("insert at end, pushing back");
                return Position::at(self.attach_back(elt));
            }
        };
        if Some(node) == self.head {
            trace!("insert at the first element, pushing front");
            self.push_front(elt);
            return self.begin_position();
        }
        Position::at(self.attach_before(node, elt))
    }

    /// Removes the element at `pos`, and returns the position of its
    /// successor (the end position if the last element was removed).
    ///
    /// Erasing at the end position does nothing and returns `pos` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if the list is empty and `pos` is not
    /// the end position.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if `pos` refers to an element that has been removed while the
    /// list is not empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let first = list.begin_position();
    /// let next = list.erase(first).unwrap();
    /// assert_eq!(next, list.begin_position());
    /// assert_eq!(list, List::from([2, 3]));
    ///
    /// let end = list.end_position();
    /// assert_eq!(list.erase(end), Ok(end));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn erase(&mut self, pos: Position) -> Result<Position> {
        if pos.is_end() {
            trace!("erase at end is a no-op");
            return Ok(pos);
        }
        self.remove_at(pos).map(|(_, next)| next)
    }

    /// Returns the position of the first element, which is the end position if
    /// the list is empty.
    #[inline]
    pub fn begin_position(&self) -> Position {
        Position::new(self.head, self.head.is_none())
    }

    /// Returns the end position: the entry node, flagged as past the last
    /// element.
    #[inline]
    pub fn end_position(&self) -> Position {
        Position::new(self.head, true)
    }

    /// Provides a cursor at the first element.
    ///
    /// The cursor is at the end position if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.begin();
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// let empty: List<i32> = List::new();
    /// assert_eq!(empty.begin(), empty.end());
    /// ```
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.begin_position())
    }

    /// Provides a cursor at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let mut cursor = list.end();
    /// assert_eq!(cursor.current(), None);
    /// cursor.move_prev();
    /// assert_eq!(cursor.current(), Some(&3));
    /// ```
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.end_position())
    }

    /// Provides a cursor with editing operations at the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.begin_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let pos = self.begin_position();
        CursorMut::new(self, pos)
    }

    /// Provides a cursor with editing operations at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// let mut cursor = list.end_mut();
    /// cursor.insert(3);
    /// assert_eq!(list, List::from([1, 2, 3]));
    /// ```
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let pos = self.end_position();
        CursorMut::new(self, pos)
    }

    /// Provides a cursor at `pos`.
    pub fn cursor(&self, pos: Position) -> Cursor<'_, T> {
        Cursor::new(self, pos)
    }

    /// Provides a cursor with editing operations at `pos`.
    pub fn cursor_mut(&mut self, pos: Position) -> CursorMut<'_, T> {
        CursorMut::new(self, pos)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(list, List::from([10, 11, 12]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
