use super::{Array};

impl<T: Clone> Array<T> {
    /// Returns the elements in the opposite order.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new([1, 2, 3]);
    /// assert_eq!(a.reverse().as_ref(), [3, 2, 1]);
    /// assert_eq!(a.reverse().reverse(), a);
    /// ```
    pub fn reverse(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// Places `separator` between each pair of adjacent elements.
    ///
    /// An array with fewer than two elements is returned unchanged.
    ///
    /// ```
    /// use array_extra::Array;
    /// let a = Array::new(["turtles", "turtles", "turtles"]);
    /// assert_eq!(a.intersperse("on").as_ref(), ["turtles", "on", "turtles", "on", "turtles"]);
    /// ```
    pub fn intersperse(&self, separator: T) -> Self {
        let mut items = Vec::with_capacity((2 * self.len()).saturating_sub(1));
        for (i, t) in self.iter().enumerate() {
            if i > 0 { items.push(separator.clone()); }
            items.push(t.clone());
        }
        Self::new(items)
    }
}

// ----------------------------------------------------------------------------
