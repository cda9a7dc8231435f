//! A pure-Rust library of operations on fixed-length arrays that the standard
//! slice type lacks.
//!
//! [`Array<T>`] is a dense sequence of `T` stored in a [`Box<[T]>`]. Its
//! methods never modify `self`: each one returns a new `Array` and leaves the
//! input as it was. The operations fall into four groups:
//!
//! - Index-based access: [`Array::update()`], [`Array::slice_from()`],
//!   [`Array::insert_at()`], the `resize` family, and so on. These take
//!   `isize` indices and never panic, however far out of range the index is.
//! - Combination of several arrays: [`map2()`] to [`map5()`], [`apply()`],
//!   [`zip()`], [`unzip()`] and [`Array::interweave()`]. Apart from `unzip()`
//!   and `interweave()` these truncate to the shortest input.
//! - Traversal: [`Array::all()`], [`Array::any()`], [`Array::filter_map()`],
//!   [`Array::map_to_list()`], and so on.
//! - Reordering: [`Array::reverse()`] and [`Array::intersperse()`].
//!
//! ```
//! use array_extra::{Array, map2};
//! let a = Array::new([1, 2, 3, 4]);
//! let (front, back) = a.split_at(2);
//! assert_eq!(map2(|x, y| x * y, &front, &back).as_ref(), [3, 8]);
//! assert_eq!(a.slice_from(-1).as_ref(), [4]);
//! assert_eq!(a.resizer_repeat(6, 0).as_ref(), [0, 0, 1, 2, 3, 4]);
//! ```
//!
//! Pointwise arithmetic is available through the standard operators, and
//! generically through [`ops::Binary`] and [`binary()`].
//!
//! With the `serde` feature, `Array` implements `Serialize` and `Deserialize`
//! as a plain sequence.

mod array;
pub use array::{Array};

mod index;
mod traverse;
mod reorder;

pub mod ops;
pub use ops::{Binary};

mod zip;
pub use zip::{map2, map3, map4, map5, apply, binary, zip, zip3, unzip};

#[cfg(feature = "serde")]
mod array_serde;
