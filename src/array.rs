/// A dense, fixed-length array of `T`.
///
/// An `Array` is never modified by the methods of this crate. Every method
/// that "changes" an `Array` returns a new one and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array<T> {
    items: Box<[T]>,
}

impl<T> Array<T> {
    /// Constructs an `Array` given its elements.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new(["apple", "body", "crane"]);
    /// assert_eq!(a.len(), 3);
    /// assert_eq!(a[1], "body");
    /// ```
    pub fn new(items: impl Into<Box<[T]>>) -> Self {
        Self {items: items.into()}
    }

    /// Constructs an `Array` with no elements.
    pub fn empty() -> Self { Self::new(Vec::new()) }

    /// Construct an `Array` of length `length` from a function of the index.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::from_fn(10, |x| x % 3 == 0);
    /// assert_eq!(a.as_ref(), [true, false, false, true, false, false, true, false, false, true]);
    /// ```
    pub fn from_fn(length: usize, f: impl FnMut(usize) -> T) -> Self {
        (0..length).map(f).collect()
    }

    /// Construct an `Array` of length `length` in which every element is
    /// `value`.
    ///
    /// ```
    /// use array_extra::Array;
    /// assert_eq!(Array::repeat(3, 'x').as_ref(), ['x', 'x', 'x']);
    /// ```
    pub fn repeat(length: usize, value: T) -> Self where T: Clone {
        Self::new(vec![value; length])
    }

    /// Returns the raw array elements.
    pub fn to_raw(self) -> Box<[T]> { self.items }

    /// Copies the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> where T: Clone { self.items.to_vec() }

    /// The number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize { self.items.len() }

    #[inline(always)]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Borrow the element at `index`, or `None` if `index` is out of bounds.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> { self.items.get(index) }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.items.iter() }

    /// Returns the elements from `start` (inclusive) to `end` (exclusive).
    ///
    /// Both bounds are absolute. They are clamped to `0..=len()`, and if
    /// `start >= end` the result is empty.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new([0, 1, 2, 3, 4]);
    /// assert_eq!(a.slice(1, 3).as_ref(), [1, 2]);
    /// assert_eq!(a.slice(3, 100).as_ref(), [3, 4]);
    /// assert!(a.slice(4, 2).is_empty());
    /// ```
    pub fn slice(&self, start: usize, end: usize) -> Self where T: Clone {
        let end = end.min(self.len());
        let start = start.min(end);
        Self::new(&self.items[start..end])
    }

    /// Returns the elements of `self` followed by the elements of `other`.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new(["apple", "body"]);
    /// let b = Array::new(["crane", "dump"]);
    /// assert_eq!(a.concat(&b).as_ref(), ["apple", "body", "crane", "dump"]);
    /// ```
    pub fn concat(&self, other: &Self) -> Self where T: Clone {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Returns a copy of `self` with the element at `index` replaced by
    /// `value`.
    ///
    /// If `index` is negative or not less than `len()` the copy is unchanged.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new([1, 2, 3]);
    /// assert_eq!(a.set(0, 9).as_ref(), [9, 2, 3]);
    /// assert_eq!(a.set(3, 9), a);
    /// ```
    pub fn set(&self, index: isize, value: T) -> Self where T: Clone {
        self.update(index, |_| value)
    }

    /// Creates an `Array` that applies `f` to the elements of `self`.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::from_fn(5, |x| x);
    /// assert_eq!(a.map(|x| x * x).as_ref(), [0, 1, 4, 9, 16]);
    /// ```
    pub fn map<U>(&self, f: impl FnMut(T) -> U) -> Array<U> where T: Clone {
        self.iter().cloned().map(f).collect()
    }

    /// Like [`map()`], but `f` also receives the index of each element.
    ///
    /// [`map()`]: Self::map()
    pub fn indexed_map<U>(&self, mut f: impl FnMut(usize, T) -> U) -> Array<U> where T: Clone {
        self.iter().cloned().enumerate().map(|(i, t)| f(i, t)).collect()
    }

    /// Returns `Some(index)` if `index` is a valid position in `self`.
    pub(crate) fn position(&self, index: isize) -> Option<usize> {
        usize::try_from(index).ok().filter(|&i| i < self.len())
    }

    /// Resolves an offset that counts backwards from the end when negative.
    /// The result is clamped to `0..=len()`.
    pub(crate) fn offset(&self, n: isize) -> usize {
        if n < 0 {
            self.len().saturating_sub(n.unsigned_abs())
        } else {
            self.len().min(n as usize)
        }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self { Self::empty() }
}

impl<T> std::convert::AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] { &self.items }
}

impl<T> std::convert::AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.items }
}

impl<T> std::ops::Index<usize> for Array<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: usize) -> &T { &self.items[index] }
}

impl<T> std::ops::IndexMut<usize> for Array<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T { &mut self.items[index] }
}

// ----------------------------------------------------------------------------

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self { Self::new(items) }
}

impl<T> From<Box<[T]>> for Array<T> {
    fn from(items: Box<[T]>) -> Self { Self::new(items) }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(items: [T; N]) -> Self { Self::new(items) }
}

impl<T> From<Array<T>> for Vec<T> {
    fn from(array: Array<T>) -> Self { array.items.into_vec() }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { self.items.into_vec().into_iter() }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Array::<u8>::empty().len(), 0);
        assert_eq!(Array::<u8>::default(), Array::empty());
        assert_eq!(Array::from(vec![1, 2]), Array::new([1, 2]));
        assert_eq!(Array::from_fn(3, |i| i * 10).as_ref(), [0, 10, 20]);
        assert_eq!(Array::repeat(0, 'x'), Array::empty());
        let a: Array<_> = "abc".chars().collect();
        assert_eq!(Vec::from(a), vec!['a', 'b', 'c']);
    }

    #[test]
    fn position() {
        let a = Array::new([1, 2, 3]);
        assert_eq!(a.position(-1), None);
        assert_eq!(a.position(0), Some(0));
        assert_eq!(a.position(2), Some(2));
        assert_eq!(a.position(3), None);
        assert_eq!(Array::<u8>::empty().position(0), None);
    }

    #[test]
    fn offset() {
        let a = Array::new([1, 2, 3]);
        assert_eq!(a.offset(0), 0);
        assert_eq!(a.offset(2), 2);
        assert_eq!(a.offset(7), 3);
        assert_eq!(a.offset(-1), 2);
        assert_eq!(a.offset(-3), 0);
        assert_eq!(a.offset(-4), 0);
        assert_eq!(a.offset(isize::MIN), 0);
        assert_eq!(a.offset(isize::MAX), 3);
    }

    #[test]
    fn slice_clamps() {
        let a = Array::new([1, 2, 3]);
        assert_eq!(a.slice(0, 3), a);
        assert_eq!(a.slice(0, usize::MAX), a);
        assert!(a.slice(5, 9).is_empty());
        assert!(a.slice(2, 1).is_empty());
    }

    #[test]
    fn inputs_are_untouched() {
        let a = Array::new([1, 2, 3]);
        let b = a.set(1, 20).concat(&a);
        assert_eq!(a.as_ref(), [1, 2, 3]);
        assert_eq!(b.as_ref(), [1, 20, 3, 1, 2, 3]);
    }

    #[test]
    fn iterate() {
        let a = Array::new(["x", "y"]);
        assert_eq!((&a).into_iter().count(), 2);
        assert_eq!(a.clone().into_iter().collect::<Vec<_>>(), ["x", "y"]);
        assert_eq!(a.indexed_map(|i, s| format!("{i}{s}")).as_ref(), ["0x", "1y"]);
    }
}
