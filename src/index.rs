//! Index-based access, slicing, resizing and splicing.
//!
//! Indices are `isize` so that they can be negative. Two conventions apply:
//!
//! - [`Array::slice_from()`] and [`Array::slice_until()`] count a negative
//!   offset backwards from the end, and clamp any offset to the bounds of the
//!   array.
//! - [`Array::update()`], [`Array::split_at()`], [`Array::remove_at()`] and
//!   [`Array::insert_at()`] treat a negative or out-of-range index as a
//!   request to do nothing.
//!
//! Neither convention ever panics.

use super::{Array};

/// Converts a requested length to a real one. Non-positive lengths become `0`.
fn clamp_length(new_length: isize) -> usize {
    usize::try_from(new_length).unwrap_or(0)
}

impl<T: Clone> Array<T> {
    /// Returns a copy of `self` in which the element at `index` is replaced
    /// by `f` of its old value.
    ///
    /// If `index` is negative or not less than `len()`, returns `self`
    /// unchanged and does not call `f`.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new([1, 2, 3]);
    /// assert_eq!(a.update(1, |x| x + 10).as_ref(), [1, 12, 3]);
    /// assert_eq!(a.update(-1, |x| x + 10), a);
    /// assert_eq!(a.update(3, |x| x + 10), a);
    /// ```
    pub fn update(&self, index: isize, f: impl FnOnce(T) -> T) -> Self {
        let Some(index) = self.position(index) else { return self.clone() };
        let mut items = self.to_vec();
        items[index] = f(items[index].clone());
        Self::new(items)
    }

    /// Keeps the elements from offset `n` to the end.
    ///
    /// A negative `n` counts backwards from the end. If `n` is out of bounds
    /// the result is the whole array or an empty array.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new([0, 1, 2, 3, 4]);
    /// assert_eq!(a.slice_from(3).as_ref(), [3, 4]);
    /// assert_eq!(a.slice_from(-1).as_ref(), [4]);
    /// assert_eq!(a.slice_from(-10), a);
    /// assert!(a.slice_from(10).is_empty());
    /// ```
    pub fn slice_from(&self, n: isize) -> Self {
        self.slice(self.offset(n), self.len())
    }

    /// Keeps the elements from the start up to, but excluding, offset `n`.
    ///
    /// A negative `n` counts backwards from the end. If `n` is out of bounds
    /// the result is the whole array or an empty array.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new([0, 1, 2, 3, 4]);
    /// assert_eq!(a.slice_until(2).as_ref(), [0, 1]);
    /// assert_eq!(a.slice_until(-1).as_ref(), [0, 1, 2, 3]);
    /// assert!(a.slice_until(-10).is_empty());
    /// assert_eq!(a.slice_until(10), a);
    /// ```
    pub fn slice_until(&self, n: isize) -> Self {
        self.slice(0, self.offset(n))
    }

    /// Splits `self` into the elements before `index` and the rest.
    ///
    /// Unlike [`slice_until()`] and [`slice_from()`], a non-positive `index`
    /// does not count from the end: the left part is then empty and the right
    /// part is all of `self`.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new(["a", "b", "c"]);
    /// let (l, r) = a.split_at(1);
    /// assert_eq!((l.as_ref(), r.as_ref()), (&["a"][..], &["b", "c"][..]));
    /// let (l, r) = a.split_at(-1);
    /// assert!(l.is_empty());
    /// assert_eq!(r, a);
    /// ```
    ///
    /// [`slice_until()`]: Self::slice_until()
    /// [`slice_from()`]: Self::slice_from()
    pub fn split_at(&self, index: isize) -> (Self, Self) {
        if index > 0 {
            (self.slice_until(index), self.slice_from(index))
        } else {
            (Self::empty(), self.clone())
        }
    }

    /// Removes the last element. An empty array stays empty.
    ///
    /// ```
    /// use array_extra::Array;
    /// assert_eq!(Array::new([1, 2, 3]).pop().as_ref(), [1, 2]);
    /// assert!(Array::<i32>::empty().pop().is_empty());
    /// ```
    pub fn pop(&self) -> Self {
        self.slice_until(-1)
    }

    /// Removes the element at `index`.
    ///
    /// If `index` is negative or not less than `len()`, returns `self`
    /// unchanged.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new(['a', 'b', 'c']);
    /// assert_eq!(a.remove_at(1).as_ref(), ['a', 'c']);
    /// assert_eq!(a.remove_at(-1), a);
    /// assert_eq!(a.remove_at(3), a);
    /// ```
    pub fn remove_at(&self, index: isize) -> Self {
        let Some(index) = self.position(index) else { return self.clone() };
        self.slice(0, index).concat(&self.slice(index + 1, self.len()))
    }

    /// Inserts `value` so that it becomes the element at `index`.
    ///
    /// `index` may equal `len()`, in which case `value` is appended. If
    /// `index` is negative or greater than `len()`, returns `self` unchanged.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new(['a', 'c']);
    /// assert_eq!(a.insert_at(1, 'b').as_ref(), ['a', 'b', 'c']);
    /// assert_eq!(a.insert_at(2, 'd').as_ref(), ['a', 'c', 'd']);
    /// assert_eq!(a.insert_at(-1, 'b'), a);
    /// assert_eq!(a.insert_at(100, 'b'), a);
    /// ```
    pub fn insert_at(&self, index: isize, value: T) -> Self {
        match usize::try_from(index) {
            Ok(index) if index <= self.len() => {
                self.items_before(index)
                    .chain(std::iter::once(value))
                    .chain(self.items_after(index))
                    .collect()
            },
            _ => self.clone(),
        }
    }

    fn items_before(&self, index: usize) -> impl Iterator<Item=T> + '_ {
        self.as_ref()[..index].iter().cloned()
    }

    fn items_after(&self, index: usize) -> impl Iterator<Item=T> + '_ {
        self.as_ref()[index..].iter().cloned()
    }

    // ------------------------------------------------------------------------

    /// Resizes to `new_length`, keeping the start of `self` in place.
    ///
    /// Grows by appending copies of `pad`; shrinks by dropping elements from
    /// the end. A non-positive `new_length` gives an empty array.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new([1, 2, 3]);
    /// assert_eq!(a.resizel_repeat(5, 0).as_ref(), [1, 2, 3, 0, 0]);
    /// assert_eq!(a.resizel_repeat(2, 0).as_ref(), [1, 2]);
    /// assert!(a.resizel_repeat(-1, 0).is_empty());
    /// ```
    pub fn resizel_repeat(&self, new_length: isize, pad: T) -> Self {
        let new_length = clamp_length(new_length);
        if new_length <= self.len() {
            self.slice(0, new_length)
        } else {
            self.concat(&Self::repeat(new_length - self.len(), pad))
        }
    }

    /// Resizes to `new_length`, keeping the end of `self` in place.
    ///
    /// Grows by prepending copies of `pad`; shrinks by dropping elements from
    /// the start. A non-positive `new_length` gives an empty array.
    ///
    /// ```
    /// use array_extra::Array;
    /// assert_eq!(Array::new([1, 2]).resizer_repeat(4, 0).as_ref(), [0, 0, 1, 2]);
    /// assert_eq!(Array::new([1, 2, 3]).resizer_repeat(2, 0).as_ref(), [2, 3]);
    /// ```
    pub fn resizer_repeat(&self, new_length: isize, pad: T) -> Self {
        let new_length = clamp_length(new_length);
        if new_length <= self.len() {
            self.slice(self.len() - new_length, self.len())
        } else {
            Self::repeat(new_length - self.len(), pad).concat(self)
        }
    }

    /// Like [`resizel_repeat()`], but each appended element is `f(i)` where
    /// `i` is its index in the result.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new([10, 20]);
    /// assert_eq!(a.resizel_indexed(4, |i| i * 100).as_ref(), [10, 20, 200, 300]);
    /// assert_eq!(a.resizel_indexed(1, |i| i * 100).as_ref(), [10]);
    /// ```
    ///
    /// [`resizel_repeat()`]: Self::resizel_repeat()
    pub fn resizel_indexed(&self, new_length: isize, mut f: impl FnMut(usize) -> T) -> Self {
        let new_length = clamp_length(new_length);
        let len = self.len();
        if new_length <= len {
            self.slice(0, new_length)
        } else {
            self.concat(&Self::from_fn(new_length - len, |i| f(len + i)))
        }
    }

    /// Like [`resizer_repeat()`], but each prepended element is `f(i)` where
    /// `i` is its index in the result, counting up from `0`.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new([10, 20]);
    /// assert_eq!(a.resizer_indexed(4, |i| i * 100).as_ref(), [0, 100, 10, 20]);
    /// assert_eq!(a.resizer_indexed(1, |i| i * 100).as_ref(), [20]);
    /// ```
    ///
    /// [`resizer_repeat()`]: Self::resizer_repeat()
    pub fn resizer_indexed(&self, new_length: isize, f: impl FnMut(usize) -> T) -> Self {
        let new_length = clamp_length(new_length);
        if new_length <= self.len() {
            self.slice(self.len() - new_length, self.len())
        } else {
            Self::from_fn(new_length - self.len(), f).concat(self)
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fmt::{Debug};

    use super::*;

    /// `update()` at `index` must not change the length, and must leave every
    /// other position alone.
    fn assert_update_only_touches<T: Clone + Debug + PartialEq>(
        a: &Array<T>,
        index: isize,
        f: impl Fn(T) -> T,
    ) {
        let b = a.update(index, &f);
        assert_eq!(b.len(), a.len());
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            if i as isize == index {
                assert_eq!(*y, f(x.clone()));
            } else {
                assert_eq!(x, y);
            }
        }
    }

    #[test]
    fn update() {
        let a = Array::new([1, 2, 3]);
        for index in -2..5 {
            assert_update_only_touches(&a, index, |x| x * 7);
        }
        assert_eq!(a.update(isize::MIN, |_| 0), a);
        assert_eq!(a.update(isize::MAX, |_| 0), a);
        assert!(Array::<i32>::empty().update(0, |_| 0).is_empty());
    }

    #[test]
    fn update_skips_f_when_out_of_range() {
        let a = Array::new([1]);
        a.update(1, |_| panic!("should not be called"));
    }

    #[test]
    fn slice_from() {
        let a = Array::new(['a', 'b', 'c']);
        assert_eq!(a.slice_from(0), a);
        assert_eq!(a.slice_from(1).as_ref(), ['b', 'c']);
        assert_eq!(a.slice_from(-1).as_ref(), ['c']);
        assert_eq!(a.slice_from(-2).as_ref(), ['b', 'c']);
        assert_eq!(a.slice_from(-3), a);
        assert_eq!(a.slice_from(isize::MIN), a);
        assert!(a.slice_from(3).is_empty());
        assert!(Array::<char>::empty().slice_from(-1).is_empty());
    }

    #[test]
    fn slice_until() {
        let a = Array::new(['a', 'b', 'c']);
        assert!(a.slice_until(0).is_empty());
        assert_eq!(a.slice_until(1).as_ref(), ['a']);
        assert_eq!(a.slice_until(-2).as_ref(), ['a']);
        assert_eq!(a.slice_until(3), a);
        assert_eq!(a.slice_until(isize::MAX), a);
        assert!(a.slice_until(-3).is_empty());
    }

    #[test]
    fn split_at() {
        let a = Array::new([1, 2, 3, 4]);
        for k in 1..4 {
            let (l, r) = a.split_at(k);
            assert_eq!(l.len(), k as usize);
            assert_eq!(l.concat(&r), a);
        }
        assert_eq!(a.split_at(0), (Array::empty(), a.clone()));
        assert_eq!(a.split_at(-2), (Array::empty(), a.clone()));
        assert_eq!(a.split_at(9), (a.clone(), Array::empty()));
    }

    #[test]
    fn pop() {
        assert_eq!(Array::new([1]).pop(), Array::empty());
        assert_eq!(Array::new([1, 2]).pop().as_ref(), [1]);
    }

    #[test]
    fn remove_at() {
        let a = Array::new([1, 2, 3]);
        assert_eq!(a.remove_at(0).as_ref(), [2, 3]);
        assert_eq!(a.remove_at(2).as_ref(), [1, 2]);
        assert!(Array::new([1]).remove_at(0).is_empty());
        assert!(Array::<i32>::empty().remove_at(0).is_empty());
    }

    #[test]
    fn insert_at() {
        let a = Array::new([1, 2]);
        assert_eq!(a.insert_at(0, 0).as_ref(), [0, 1, 2]);
        assert_eq!(a.insert_at(1, 9).as_ref(), [1, 9, 2]);
        assert_eq!(a.insert_at(2, 3).as_ref(), [1, 2, 3]);
        assert_eq!(a.insert_at(3, 3), a);
        assert_eq!(Array::empty().insert_at(0, 'x').as_ref(), ['x']);
    }

    #[test]
    fn resize_repeat() {
        let a = Array::new([1, 2, 3]);
        for n in -3..7 {
            let expected_len = n.max(0) as usize;
            let l = a.resizel_repeat(n, 0);
            let r = a.resizer_repeat(n, 0);
            assert_eq!(l.len(), expected_len);
            assert_eq!(r.len(), expected_len);
            if n <= 3 {
                assert_eq!(l, a.slice_until(n.max(0)));
                assert_eq!(r, a.slice_from(3 - n.max(0)));
            } else {
                assert_eq!(l.slice_until(3), a);
                assert!(l.slice_from(3).all(|&x| x == 0));
                assert_eq!(r.slice_from(-3), a);
                assert!(r.slice_until(-3).all(|&x| x == 0));
            }
        }
    }

    #[test]
    fn resize_indexed() {
        let a = Array::new(["a", "b"]);
        let names = ["0", "1", "2", "3"];
        assert_eq!(a.resizel_indexed(4, |i| names[i]).as_ref(), ["a", "b", "2", "3"]);
        assert_eq!(a.resizer_indexed(4, |i| names[i]).as_ref(), ["0", "1", "a", "b"]);
        assert_eq!(a.resizel_indexed(2, |_| unreachable!()), a);
        assert!(a.resizel_indexed(-5, |i| names[i]).is_empty());
        assert!(a.resizer_indexed(0, |i| names[i]).is_empty());
    }
}
