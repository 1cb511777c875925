use crate::error::{ListError, Result};
use crate::list::List;
use std::fmt;
use std::fmt::Formatter;

/// A position in a `List`, detached from any borrow of the list.
///
/// A position is the pair of a node and a boundary flag. The end position
/// refers to the entry node of the list (the first element) with the flag
/// set, so on a single-element list the first position and the end position
/// share a node and still compare unequal. Both are the same flagged empty
/// position on an empty list.
///
/// Positions are only produced by a list or its cursors. A position whose
/// element has been erased is dangling: passing it back to the list may
/// panic or address another element.
///
/// # Examples
///
/// ```
/// use circular_list::List;
///
/// let list = List::from([1]);
/// assert_ne!(list.begin_position(), list.end_position());
///
/// let empty: List<i32> = List::new();
/// assert_eq!(empty.begin_position(), empty.end_position());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    node: Option<usize>,
    is_end: bool,
}

impl Position {
    pub(crate) fn new(node: Option<usize>, is_end: bool) -> Self {
        Self { node, is_end }
    }

    pub(crate) fn at(node: usize) -> Self {
        Self::new(Some(node), false)
    }

    pub(crate) fn node(&self) -> Option<usize> {
        self.node
    }

    /// Returns `true` if this is the end position (past the last element).
    #[inline]
    pub fn is_end(&self) -> bool {
        self.is_end
    }
}

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid positions for the cursor:
/// one per element, and the end position past the last element.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The end position
/// is denoted by `#`).
/// ```
/// use circular_list::List;
///
/// // Create a list: [ A B C D #]
/// let list = List::from(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at the beginning: [|A B C D #]
/// let mut cursor = list.begin();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #]
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor at the end: [ A B C D|#]
/// let mut cursor = list.end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #]
/// cursor.move_prev();
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // Moving forward from the end wraps to the beginning: [|A B C D #]
/// let mut cursor = list.end();
/// cursor.move_next();
/// assert_eq!(cursor, list.begin());
/// ```
pub struct Cursor<'a, T: 'a> {
    pos: Position,
    list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

/// Compare cursors by their positions.
///
/// Only cursors that belong to the same list and have the same positions
/// are considered equal.
///
/// # Examples
/// ```
/// use circular_list::List;
///
/// let list = List::from([1, 2, 3]);
/// let cursor1 = list.begin();
/// let mut cursor2 = cursor1;
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// // Different lists.
/// assert_ne!(list.end(), another_list.end());
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.pos == other.pos
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek
/// back-and-forth, and can safely mutate the list during iteration. The
/// references it yields are tied to its own lifetime, instead of just the
/// underlying list.
///
/// For convenience, [`CursorMut::view`] temporarily borrows the list back as
/// an immutable reference whose lifetime is shorter than the cursor.
///
/// # Examples
///
/// ```compile_fail
/// use circular_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.begin_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pos: Position,
    list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the detached position of the cursor.
            #[inline]
            pub fn position(&self) -> Position {
                self.pos
            }

            /// Returns `true` if the cursor is at the end position.
            #[inline]
            pub fn is_end(&self) -> bool {
                self.pos.is_end()
            }

            /// Returns `true` if the cursor is at the first element, or at the
            /// end position of an empty list.
            #[inline]
            pub fn is_begin(&self) -> bool {
                self.pos == self.list.begin_position()
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position.
            ///
            /// Moving forward from the last element reaches the end position,
            /// and moving forward from the end position wraps to the first
            /// element. On an empty list the cursor stays put.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use circular_list::List;
            ///
            /// let list = List::from([1, 2]);
            /// let mut cursor = list.begin();
            /// cursor.move_next();
            /// assert_eq!(cursor.current(), Some(&2));
            /// cursor.move_next();
            /// assert!(cursor.is_end());
            /// cursor.move_next();
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_next(&mut self) {
                self.pos = self.list.step_forward(self.pos);
            }

            /// Move the cursor to the previous position.
            ///
            /// Moving backward from the end position reaches the last element,
            /// and moving backward from the first element follows the ring to
            /// the last element. On an empty list the cursor stays put.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use circular_list::List;
            ///
            /// let list = List::from([1, 2]);
            /// let mut cursor = list.end();
            /// cursor.move_prev();
            /// assert_eq!(cursor.current(), Some(&2));
            /// cursor.move_prev();
            /// assert_eq!(cursor.current(), Some(&1));
            /// cursor.move_prev();
            /// assert_eq!(cursor.current(), Some(&2));
            /// ```
            pub fn move_prev(&mut self) {
                self.pos = self.list.step_backward(self.pos);
            }

            /// Set the cursor to the first element (the end position if the
            /// list is empty).
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_begin(&mut self) {
                self.pos = self.list.begin_position();
            }

            /// Set the cursor to the end position.
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.pos = self.list.end_position();
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("is_end", &self.pos.is_end())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, pos: Position) -> Self {
        Self { pos, list }
    }

    /// Return an immutable reference of the element at the cursor, or
    /// return `None` if it is at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.begin().current(), Some(&1));
    /// assert_eq!(list.end().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        self.list.element_at(self.pos)
    }

    /// Return the element one step forward, or `None` if that step reaches
    /// the end position.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.list.element_at(self.list.step_forward(self.pos))
    }

    /// Return the element one step backward, or `None` if the list is empty.
    pub fn peek_prev(&self) -> Option<&'a T> {
        self.list.element_at(self.list.step_backward(self.pos))
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, pos: Position) -> Self {
        Self { pos, list }
    }

    /// Re-read the end position, whose node follows the head of the list.
    fn refresh_end(&mut self) {
        if self.pos.is_end() {
            self.pos = self.list.end_position();
        }
    }
}

// Methods that do not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return an immutable reference of the element at the cursor, or
    /// return `None` if it is at the end position.
    pub fn current(&self) -> Option<&T> {
        self.list.element_at(self.pos)
    }

    /// Return a mutable reference of the element at the cursor, or
    /// return `None` if it is at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let mut cursor = list.begin_mut();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate at the end.
    /// assert!(list.end_mut().current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.list.element_at_mut(self.pos)
    }

    /// Return the element one step forward, or `None` if that step reaches
    /// the end position.
    pub fn peek_next(&self) -> Option<&T> {
        self.list.element_at(self.list.step_forward(self.pos))
    }

    /// Return the element one step backward, or `None` if the list is empty.
    pub fn peek_prev(&self) -> Option<&T> {
        self.list.element_at(self.list.step_backward(self.pos))
    }

    /// Return a read-only cursor at the same position, borrowing from this
    /// cursor.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.pos)
    }

    /// Convert into a read-only cursor at the same position.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.pos)
    }

    /// Provides a read-only view of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// let mut cursor = list.begin_mut();
    /// cursor.insert(0);
    /// assert_eq!(cursor.view(), &List::from([0, 1, 2]));
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Insert a new element before the cursor, and move the cursor onto it.
    ///
    /// At the end position, the element is appended to the list.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// let mut cursor = list.begin_mut();
    /// cursor.move_next();
    /// cursor.insert(2);
    /// assert_eq!(cursor.current(), Some(&2));
    /// cursor.move_to_end();
    /// cursor.insert(4);
    /// assert_eq!(cursor.current(), Some(&4));
    /// assert_eq!(list, List::from([1, 2, 3, 4]));
    /// ```
    pub fn insert(&mut self, elt: T) {
        self.pos = self.list.insert(self.pos, elt);
    }

    /// Remove the element at the cursor and return it, moving the cursor onto
    /// its successor (the end position if the last element was removed).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] at the end position, where there is
    /// no element to remove.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.begin_mut();
    /// cursor.move_next();
    /// assert_eq!(cursor.erase(), Ok(2));
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert_eq!(cursor.erase(), Ok(3));
    /// assert!(cursor.is_end());
    /// assert!(cursor.erase().is_err());
    /// assert_eq!(list, List::from([1]));
    /// ```
    pub fn erase(&mut self) -> Result<T> {
        if self.pos.is_end() {
            return Err(ListError::out_of_range("erase"));
        }
        let (element, next) = self.list.remove_at(self.pos)?;
        self.pos = next;
        Ok(element)
    }

    /// Adds an element first in the list. The cursor stays at its element,
    /// or at the end position.
    pub fn push_front(&mut self, elt: T) {
        self.list.push_front(elt);
        self.refresh_end();
    }

    /// Appends an element to the back of the list. The cursor stays at its
    /// element, or at the end position.
    pub fn push_back(&mut self, elt: T) {
        self.list.push_back(elt);
    }

    /// Removes the first element and returns it. A cursor at that element
    /// moves onto the new first element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.end_mut();
    /// assert_eq!(cursor.pop_front(), Ok(1));
    /// cursor.move_prev();
    /// assert_eq!(cursor.current(), Some(&3));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let at_front = self.is_begin() && !self.pos.is_end();
        let element = self.list.pop_front()?;
        if at_front {
            self.move_to_begin();
        }
        self.refresh_end();
        Ok(element)
    }

    /// Removes the last element and returns it. A cursor at that element
    /// moves onto the end position.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let at_back = !self.pos.is_end() && self.pos.node() == self.list.tail();
        let element = self.list.pop_back()?;
        if at_back {
            self.move_to_end();
        }
        self.refresh_end();
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use crate::ListError;
    use test_case::test_case;

    #[test]
    fn cursor_single_element_boundary() {
        let list = List::from([42]);
        let begin = list.begin();
        let end = list.end();
        assert_eq!(begin.position().node(), end.position().node());
        assert_ne!(begin, end);

        let mut cursor = begin;
        cursor.move_next();
        assert_eq!(cursor, end);
        cursor.move_prev();
        assert_eq!(cursor, begin);
        assert_eq!(cursor.current(), Some(&42));
    }

    #[test]
    fn cursor_empty_list() {
        let list = List::<i32>::new();
        let mut cursor = list.begin();
        assert_eq!(cursor, list.end());
        assert!(cursor.is_begin());
        assert!(cursor.is_end());
        cursor.move_next();
        assert_eq!(cursor, list.end());
        cursor.move_prev();
        assert_eq!(cursor, list.end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.peek_prev(), None);
    }

    #[test_case(&[1]; "single")]
    #[test_case(&[1, 2]; "pair")]
    #[test_case(&[1, 2, 3, 4, 5]; "five")]
    fn cursor_walk_forward_and_backward(values: &[i32]) {
        let list = List::from_iter(values.iter().copied());

        let mut forward = Vec::new();
        let mut cursor = list.begin();
        while cursor != list.end() {
            forward.push(*cursor.current().unwrap());
            cursor.move_next();
        }
        assert_eq!(forward, values);

        let mut backward = Vec::new();
        let mut cursor = list.end();
        while cursor != list.begin() {
            cursor.move_prev();
            backward.push(*cursor.current().unwrap());
        }
        backward.reverse();
        assert_eq!(backward, values);
    }

    #[test]
    fn cursor_wraps_around() {
        let list = List::from([1, 2, 3]);
        let mut cursor = list.end();
        cursor.move_next();
        assert_eq!(cursor, list.begin());

        // before the first element is the last element, not the end position
        cursor.move_prev();
        assert_eq!(cursor.current(), Some(&3));
        assert!(!cursor.is_end());
    }

    #[test]
    fn cursor_peek() {
        let list = List::from([1, 2, 3]);
        let mut cursor = list.begin();
        assert_eq!(cursor.peek_prev(), Some(&3));
        assert_eq!(cursor.peek_next(), Some(&2));
        cursor.move_next();
        cursor.move_next();
        assert_eq!(cursor.peek_next(), None);
        cursor.move_next();
        assert_eq!(cursor.peek_prev(), Some(&3));
        assert_eq!(cursor.peek_next(), Some(&1));
    }

    #[test]
    fn cursor_end_follows_head() {
        let mut list = List::from([2, 3]);
        let stale_end = list.end().position();
        list.push_front(1);
        // the end position names the entry node, which has changed
        assert_ne!(list.end().position(), stale_end);
        // but stepping from any end position still uses the current ring
        let mut cursor = list.cursor(stale_end);
        cursor.move_prev();
        assert_eq!(cursor.current(), Some(&3));
    }

    #[test]
    fn cursor_mut_insert_and_erase() {
        let mut list = List::new();
        let mut cursor = list.begin_mut();
        cursor.insert(1);
        assert_eq!(cursor.current(), Some(&1));
        assert!(cursor.is_begin());
        cursor.move_next();
        assert!(cursor.is_end());
        cursor.insert(3);
        cursor.insert(2);
        assert_eq!(cursor.view(), &List::from([1, 2, 3]));
        assert_eq!(cursor.peek_next(), Some(&3));

        assert_eq!(cursor.erase(), Ok(2));
        assert_eq!(cursor.current(), Some(&3));
        assert_eq!(cursor.erase(), Ok(3));
        assert!(cursor.is_end());
        assert_eq!(
            cursor.erase(),
            Err(ListError::OutOfRange { operation: "erase" })
        );
        cursor.move_next();
        assert_eq!(cursor.erase(), Ok(1));
        assert!(cursor.is_empty());
        assert!(cursor.is_end());
        assert!(list.is_empty());
    }

    #[test]
    fn cursor_mut_push_and_pop() {
        let mut list = List::from([2, 3]);
        let mut cursor = list.end_mut();
        cursor.push_front(1);
        assert!(cursor.is_end());
        cursor.move_next();
        assert_eq!(cursor.current(), Some(&1));

        assert_eq!(cursor.pop_front(), Ok(1));
        assert_eq!(cursor.current(), Some(&2));

        cursor.move_next();
        assert_eq!(cursor.pop_back(), Ok(3));
        assert!(cursor.is_end());
        cursor.push_back(4);
        cursor.move_prev();
        assert_eq!(cursor.current(), Some(&4));
        assert_eq!(cursor.as_cursor().peek_prev(), Some(&2));

        assert_eq!(cursor.pop_back(), Ok(4));
        assert_eq!(cursor.pop_back(), Ok(2));
        assert!(cursor.pop_back().is_err());
        assert!(cursor.pop_front().is_err());
    }

    #[test]
    fn cursor_mut_current_mut() {
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.begin_mut();
        while let Some(x) = cursor.current_mut() {
            *x *= 10;
            cursor.move_next();
        }
        let cursor = cursor.into_cursor();
        assert!(cursor.is_end());
        assert_eq!(list, List::from([10, 20, 30]));
    }
}
