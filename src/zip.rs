//! Positional combination of several [`Array`]s.
//!
//! Everything here except [`unzip()`] and [`Array::interweave()`] truncates:
//! the result is as long as the shortest input, and the excess elements of
//! longer inputs are ignored.

use super::{Array, Binary, ops};

/// Applies `f` to corresponding elements of `a` and `b`.
///
/// ```
/// use array_extra::{Array, map2};
/// let a = Array::new([1, 2, 3]);
/// let b = Array::new([1, 2, 3, 4]);
/// assert_eq!(map2(|x, y| x + y, &a, &b).as_ref(), [2, 4, 6]);
/// ```
pub fn map2<A: Clone, B: Clone, C>(
    mut f: impl FnMut(A, B) -> C,
    a: &Array<A>,
    b: &Array<B>,
) -> Array<C> {
    a.iter().zip(b.iter()).map(|(x, y)| f(x.clone(), y.clone())).collect()
}

/// Applies each function in `fns` to the corresponding element of `args`.
///
/// ```
/// use array_extra::{Array, apply};
/// let inc: fn(i32) -> i32 = |x| x + 1;
/// let tenfold: fn(i32) -> i32 = |x| x * 10;
/// let fns = Array::new([inc, tenfold]);
/// assert_eq!(apply(fns, &Array::new([5, 6, 7])).as_ref(), [6, 60]);
/// ```
pub fn apply<A: Clone, B, F: FnOnce(A) -> B>(fns: Array<F>, args: &Array<A>) -> Array<B> {
    fns.into_iter().zip(args.iter()).map(|(f, x)| f(x.clone())).collect()
}

/// Applies `f` to corresponding elements of `a`, `b` and `c`.
///
/// ```
/// use array_extra::{Array, map3};
/// let a = Array::new([1, 2, 3]);
/// let b = Array::new([10, 20]);
/// let c = Array::new([100, 200, 300]);
/// assert_eq!(map3(|x, y, z| x + y + z, &a, &b, &c).as_ref(), [111, 222]);
/// ```
pub fn map3<A: Clone, B: Clone, C: Clone, D>(
    f: impl Fn(A, B, C) -> D,
    a: &Array<A>,
    b: &Array<B>,
    c: &Array<C>,
) -> Array<D> {
    let f = &f;
    apply(map2(|x, y| move |z| f(x, y, z), a, b), c)
}

/// Applies `f` to corresponding elements of four `Array`s.
pub fn map4<A: Clone, B: Clone, C: Clone, D: Clone, E>(
    f: impl Fn(A, B, C, D) -> E,
    a: &Array<A>,
    b: &Array<B>,
    c: &Array<C>,
    d: &Array<D>,
) -> Array<E> {
    let f = &f;
    apply(map3(|x, y, z| move |w| f(x, y, z, w), a, b, c), d)
}

/// Applies `f` to corresponding elements of five `Array`s.
///
/// ```
/// use array_extra::{Array, map5};
/// let a = Array::new(["a", "b"]);
/// let joined = map5(|v, w, x, y, z| [v, w, x, y, z].concat(), &a, &a, &a, &a, &a);
/// assert_eq!(joined.as_ref(), ["aaaaa", "bbbbb"]);
/// ```
pub fn map5<A: Clone, B: Clone, C: Clone, D: Clone, E: Clone, R>(
    f: impl Fn(A, B, C, D, E) -> R,
    a: &Array<A>,
    b: &Array<B>,
    c: &Array<C>,
    d: &Array<D>,
    e: &Array<E>,
) -> Array<R> {
    let f = &f;
    apply(map4(|v, w, x, y| move |z| f(v, w, x, y, z), a, b, c, d), e)
}

/// Like [`map2()`], but the function is given by a type that implements
/// [`Binary`].
///
/// ```
/// use array_extra::{Array, binary, ops::Max};
/// let a = Array::new([9, 1, 7]);
/// let b = Array::new([2, 8]);
/// assert_eq!(binary::<Max, _, _>(&a, &b).as_ref(), [9, 8]);
/// ```
pub fn binary<Op, A: Clone, B: Clone>(a: &Array<A>, b: &Array<B>) -> Array<Op::Output> where
    Op: Binary<A, B>,
{
    map2(Op::call, a, b)
}

/// Pairs up corresponding elements of `a` and `b`.
///
/// ```
/// use array_extra::{Array, zip};
/// let a = Array::new([0, 1, 2]);
/// let b = Array::new(["apple", "body"]);
/// assert_eq!(zip(&a, &b).as_ref(), [(0, "apple"), (1, "body")]);
/// ```
pub fn zip<A: Clone, B: Clone>(a: &Array<A>, b: &Array<B>) -> Array<(A, B)> {
    binary::<ops::Pair, A, B>(a, b)
}

/// Groups corresponding elements of `a`, `b` and `c` into triples.
pub fn zip3<A: Clone, B: Clone, C: Clone>(
    a: &Array<A>,
    b: &Array<B>,
    c: &Array<C>,
) -> Array<(A, B, C)> {
    map3(|x, y, z| (x, y, z), a, b, c)
}

/// Splits an `Array` of pairs into an `Array` of first components and an
/// `Array` of second components, both as long as `pairs`.
///
/// ```
/// use array_extra::{Array, unzip};
/// let pairs = Array::new([(1, 'a'), (2, 'b')]);
/// let (numbers, letters) = unzip(&pairs);
/// assert_eq!(numbers.as_ref(), [1, 2]);
/// assert_eq!(letters.as_ref(), ['a', 'b']);
/// ```
pub fn unzip<A: Clone, B: Clone>(pairs: &Array<(A, B)>) -> (Array<A>, Array<B>) {
    let (a, b): (Vec<A>, Vec<B>) = pairs.iter().cloned().unzip();
    (a.into(), b.into())
}

// ----------------------------------------------------------------------------

impl<T: Clone> Array<T> {
    /// Places the elements of `other` after successive elements of `self`.
    ///
    /// Elements of `self` and `other` alternate, starting with `self`, until
    /// one of them runs out. The remaining elements of the other are then
    /// appended. No element of either input is dropped.
    ///
    /// ```
    /// use array_extra::Array;
    /// let t = Array::new(["t", "t", "t"]);
    /// assert_eq!(t.interweave(&Array::new(["on", "on"])).as_ref(), ["t", "on", "t", "on", "t"]);
    /// assert_eq!(t.interweave(&Array::new(["on"])).as_ref(), ["t", "on", "t", "t"]);
    /// assert_eq!(
    ///     t.interweave(&Array::repeat(5, "on")).as_ref(),
    ///     ["t", "on", "t", "on", "t", "on", "on", "on"],
    /// );
    /// ```
    pub fn interweave(&self, other: &Self) -> Self {
        let mut items = Vec::with_capacity(self.len() + other.len());
        let mut rest = other.iter().cloned();
        for t in self.iter().cloned() {
            items.push(t);
            items.extend(rest.next());
        }
        items.extend(rest);
        Self::new(items)
    }
}

// ----------------------------------------------------------------------------
