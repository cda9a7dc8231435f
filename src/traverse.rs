use super::{Array};

/// # Predicates
///
/// Predicates borrow each element; they are called in order and stop as soon
/// as the answer is known.
impl<T> Array<T> {
    /// Returns `true` if every element satisfies `predicate`. Returns `true`
    /// for an empty array.
    ///
    /// ```
    /// use array_extra::Array;
    /// assert!(Array::new([2, 4]).all(|x| x % 2 == 0));
    /// assert!(!Array::new([2, 3]).all(|x| x % 2 == 0));
    /// assert!(Array::<i32>::empty().all(|_| false));
    /// ```
    pub fn all(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.iter().all(predicate)
    }

    /// Returns `true` if at least one element satisfies `predicate`. Returns
    /// `false` for an empty array.
    ///
    /// ```
    /// use array_extra::Array;
    /// assert!(Array::new([1, 2]).any(|x| x % 2 == 0));
    /// assert!(!Array::new([1, 3]).any(|x| x % 2 == 0));
    /// assert!(!Array::<i32>::empty().any(|_| true));
    /// ```
    pub fn any(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.iter().any(predicate)
    }

    /// Returns `true` if some element equals `value`.
    pub fn member(&self, value: &T) -> bool where T: PartialEq {
        self.any(|t| t == value)
    }
}

/// # Filtering and mapping
impl<T: Clone> Array<T> {
    /// Keeps the elements that do not satisfy `predicate`, in order.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new([1, 2, 3, 4, 5]);
    /// assert_eq!(a.remove_when(|x| x % 2 == 0).as_ref(), [1, 3, 5]);
    /// ```
    pub fn remove_when(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        self.iter().filter(|t| !predicate(*t)).cloned().collect()
    }

    /// Applies `f` to each element and keeps the results that are `Some`, in
    /// order.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new(["3", "x", "4"]);
    /// assert_eq!(a.filter_map(|s| s.parse::<u32>().ok()).as_ref(), [3, 4]);
    /// ```
    pub fn filter_map<U>(&self, f: impl FnMut(T) -> Option<U>) -> Array<U> {
        self.iter().cloned().filter_map(f).collect()
    }

    /// Applies `f` to each element and collects the results into a `Vec`.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new([1, 2, 3]);
    /// assert_eq!(a.map_to_list(|x| x * 2), vec![2, 4, 6]);
    /// ```
    pub fn map_to_list<U>(&self, f: impl FnMut(T) -> U) -> Vec<U> {
        self.iter().cloned().map(f).collect()
    }

    /// Like [`map_to_list()`], but `f` also receives the index of each
    /// element.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new(["a", "b"]);
    /// assert_eq!(a.indexed_map_to_list(|i, s| format!("{i}:{s}")), ["0:a", "1:b"]);
    /// ```
    ///
    /// [`map_to_list()`]: Self::map_to_list()
    pub fn indexed_map_to_list<U>(&self, mut f: impl FnMut(usize, T) -> U) -> Vec<U> {
        self.iter().cloned().enumerate().map(|(i, t)| f(i, t)).collect()
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_stop_early() {
        let a = Array::new([1, 2, 3, 4]);
        let mut calls = 0;
        assert!(!a.all(|&x| { calls += 1; x < 2 }));
        assert_eq!(calls, 2);
        calls = 0;
        assert!(a.any(|&x| { calls += 1; x == 3 }));
        assert_eq!(calls, 3);
    }

    #[test]
    fn member() {
        let a = Array::new(["apple", "body"]);
        assert!(a.member(&"body"));
        assert!(!a.member(&"crane"));
        assert!(!Array::<&str>::empty().member(&"apple"));
    }

    #[test]
    fn remove_when_is_filter_by_negation() {
        let a = Array::from_fn(10, |i| i);
        let kept = a.remove_when(|&x| x % 3 == 0);
        assert_eq!(kept.as_ref(), [1, 2, 4, 5, 7, 8]);
        assert_eq!(a.remove_when(|_| false), a);
        assert!(a.remove_when(|_| true).is_empty());
    }

    #[test]
    fn filter_map_keeps_order() {
        let a = Array::new([4, -1, 9, -16, 25]);
        let roots = a.filter_map(|x: i32| u32::try_from(x).ok().map(|x| (x as f64).sqrt() as u32));
        assert_eq!(roots.as_ref(), [2, 3, 5]);
    }

    #[test]
    fn map_to_list() {
        let a = Array::new(['x', 'y', 'z']);
        assert_eq!(a.map_to_list(|c| c.to_ascii_uppercase()), ['X', 'Y', 'Z']);
        assert_eq!(a.indexed_map_to_list(|i, c| (i, c)), [(0, 'x'), (1, 'y'), (2, 'z')]);
        assert!(Array::<char>::empty().map_to_list(|c| c).is_empty());
    }
}
