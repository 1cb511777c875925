use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Two lists are equal if they have the same length and equal elements in
/// order, from first to last. The comparison stops at the first mismatch.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = List::with_capacity(self.len());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    /// Build a list from an array, pushing each element to the back in
    /// order.
    fn from(array: [T; N]) -> Self {
        let mut list = List::with_capacity(N);
        list.extend(array);
        list
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use test_case::test_case;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test_case(&[], &[], true; "both empty")]
    #[test_case(&[1, 2, 3], &[1, 2, 3], true; "same elements")]
    #[test_case(&[1, 2, 3], &[1, 2], false; "different length")]
    #[test_case(&[1, 2, 3], &[1, 2, 4], false; "last element differs")]
    #[test_case(&[1, 2, 3], &[3, 2, 1], false; "different order")]
    fn list_eq(a: &[i32], b: &[i32], expected: bool) {
        let a = List::from_iter(a.iter().copied());
        let b = List::from_iter(b.iter().copied());
        assert_eq!(a == b, expected);
        assert_eq!(b == a, expected);
        assert_eq!(a != b, !expected);
    }

    #[test]
    fn list_eq_ignores_history() {
        let mut a = List::from([1, 2, 3]);
        a.clear();
        let b = List::<i32>::new();
        assert_eq!(a, b);

        // same elements, different slot layout and entry node
        let mut a = List::from([0, 1, 2]);
        a.pop_front().unwrap();
        a.push_back(3);
        let b = List::from([1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_eq_after_append() {
        let mut a = List::from([1, 2, 3]);
        let b = List::from([1, 2, 3]);
        assert_eq!(a, b);
        a.push_back(4);
        assert_ne!(a, b);
    }

    #[test]
    fn list_ord() {
        assert!(List::from([1, 2]) < List::from([1, 3]));
        assert!(List::from([1, 2]) < List::from([1, 2, 0]));
        assert!(List::<i32>::new() < List::from([0]));
        assert_eq!(
            List::from([2]).cmp(&List::from([1, 9])),
            std::cmp::Ordering::Greater
        );
    }

    #[test]
    fn list_clone() {
        let list = List::from([String::from("a"), String::from("b")]);
        let mut cloned = list.clone();
        assert_eq!(list, cloned);
        cloned.push_front(String::from("z"));
        assert_ne!(list, cloned);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn list_contains() {
        let list = List::from(['x', 'y']);
        assert!(list.contains(&'y'));
        assert!(!list.contains(&'z'));
        assert!(!List::<char>::new().contains(&'x'));
    }
}
