//! Generic programming over binary operators.
//!
//! For each binary arithmetic operator in [`std::ops`] this module contains a
//! type of the same name that cannot be instantiated and that implements
//! [`Binary`]. For example, [`Add`] corresponds to [`std::ops::Add`]. This can
//! be passed as a type parameter to [`binary()`].
//!
//! The same operators are also implemented for [`Array`] itself, pointwise.
//! Like [`map2()`], they truncate to the shorter operand:
//!
//! ```
//! use array_extra::Array;
//! let a = Array::new([1, 2, 3]);
//! let b = Array::new([10, 20, 30, 40]);
//! assert_eq!((&a + &b).as_ref(), [11, 22, 33]);
//! assert_eq!((b - a).as_ref(), [9, 18, 27]);
//! ```
//!
//! [`binary()`]: super::binary()
//! [`map2()`]: super::map2()

use super::{Array, binary};

/// A function that combines `T` with `U`.
///
/// This trait has no methods that take `self`. It makes sense to implement it
/// for types that cannot be instantiated, such as empty enumerations.
pub trait Binary<T, U> {
    type Output;

    fn call(t: T, u: U) -> Self::Output;
}

// ----------------------------------------------------------------------------

/// An implementation of [`Binary`] that constructs a pair.
pub enum Pair {}

impl<T, U> Binary<T, U> for Pair {
    type Output = (T, U);
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { (t, u) }
}

/// Keeps the smaller of two values, or the first if they are equal.
pub enum Min {}

impl<T: Ord> Binary<T, T> for Min {
    type Output = T;
    #[inline(always)]
    fn call(t: T, u: T) -> Self::Output { std::cmp::min(t, u) }
}

/// Keeps the larger of two values, or the second if they are equal.
pub enum Max {}

impl<T: Ord> Binary<T, T> for Max {
    type Output = T;
    #[inline(always)]
    fn call(t: T, u: T) -> Self::Output { std::cmp::max(t, u) }
}

// ----------------------------------------------------------------------------

/// Defines an uninhabited type `$op` that implements [`Binary`] by calling
/// `std::ops::$op`, and implements `std::ops::$op` for [`Array`] in terms of
/// it.
macro_rules! binary_op {
    ($op:ident { $method:ident }) => {
        pub enum $op {}

        impl<T, U> Binary<T, U> for $op where T: std::ops::$op<U> {
            type Output = T::Output;
            #[inline(always)]
            fn call(t: T, u: U) -> Self::Output { std::ops::$op::$method(t, u) }
        }

        impl<'a, 'b, T: Clone, U: Clone> std::ops::$op<&'b Array<U>> for &'a Array<T> where
            T: std::ops::$op<U>,
        {
            type Output = Array<T::Output>;
            fn $method(self, other: &'b Array<U>) -> Self::Output { binary::<$op, T, U>(self, other) }
        }

        impl<T: Clone, U: Clone> std::ops::$op<Array<U>> for Array<T> where
            T: std::ops::$op<U>,
        {
            type Output = Array<T::Output>;
            fn $method(self, other: Array<U>) -> Self::Output { binary::<$op, T, U>(&self, &other) }
        }
    };
}

binary_op! { Add { add } }
binary_op! { Sub { sub } }
binary_op! { Mul { mul } }
binary_op! { Div { div } }
binary_op! { Rem { rem } }
binary_op! { BitAnd { bitand } }
binary_op! { BitOr { bitor } }
binary_op! { BitXor { bitxor } }

// ----------------------------------------------------------------------------
