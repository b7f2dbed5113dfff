use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Position or size in a 3D lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims3D(pub i32, pub i32, pub i32);

impl Dims3D {
    pub const ZERO: Dims3D = Dims3D(0, 0, 0);

    /// Iterates over the box `from..to`, x changes the fastest, so the positions come out in
    /// [`Dims3D::linear_index`] order.
    pub fn iter_fill(from: Dims3D, to: Dims3D) -> impl Iterator<Item = Dims3D> {
        (from.2..to.2).flat_map(move |z| {
            (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims3D(x, y, z)))
        })
    }

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0 && self.2 > 0
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0 && self.2 >= 0
    }

    pub fn product(self) -> i32 {
        self.0 * self.1 * self.2
    }

    /// Returns true if the position lies inside a box of the given size.
    pub fn is_in_bounds(self, size: Dims3D) -> bool {
        self.all_non_negative() && self.0 < size.0 && self.1 < size.1 && self.2 < size.2
    }

    /// Linear index of this position, `x + y * width + z * width * height`.
    ///
    /// Only the width and height of `size` are used.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is negative.
    pub fn linear_index(&self, size: Dims3D) -> usize {
        assert!(self.all_non_negative());
        (self.2 * size.0 * size.1 + self.1 * size.0 + self.0) as usize
    }

    /// Inverse of [`Dims3D::linear_index`].
    ///
    /// # Panics
    ///
    /// Panics if the width or height of `size` is less than 1.
    pub fn from_linear_index(index: usize, size: Dims3D) -> Dims3D {
        assert!(size.0 >= 1 && size.1 >= 1);
        let (width, height) = (size.0 as usize, size.1 as usize);

        let x = index % width;
        let y = (index / width) % height;
        let z = index / (width * height);

        Dims3D(x as i32, y as i32, z as i32)
    }
}

impl Add for Dims3D {
    type Output = Dims3D;

    fn add(self, other: Dims3D) -> Dims3D {
        Dims3D(self.0 + other.0, self.1 + other.1, self.2 + other.2)
    }
}

#[cfg(test)]
mod tests {
    use super::Dims3D;

    #[test]
    fn linear_index() {
        let size = Dims3D(3, 4, 5);
        assert_eq!(Dims3D(0, 0, 0).linear_index(size), 0);
        assert_eq!(Dims3D(2, 0, 0).linear_index(size), 2);
        assert_eq!(Dims3D(0, 1, 0).linear_index(size), 3);
        assert_eq!(Dims3D(1, 2, 0).linear_index(size), 7);
        assert_eq!(Dims3D(0, 0, 1).linear_index(size), 12);
        assert_eq!(Dims3D(2, 3, 4).linear_index(size), 59);
    }

    #[test]
    fn from_linear_index() {
        let size = Dims3D(3, 4, 5);
        assert_eq!(Dims3D::from_linear_index(0, size), Dims3D(0, 0, 0));
        assert_eq!(Dims3D::from_linear_index(7, size), Dims3D(1, 2, 0));
        assert_eq!(Dims3D::from_linear_index(12, size), Dims3D(0, 0, 1));
        assert_eq!(Dims3D::from_linear_index(59, size), Dims3D(2, 3, 4));
    }

    #[test]
    fn iter_fill_is_in_index_order() {
        let size = Dims3D(4, 3, 2);
        for (i, pos) in Dims3D::iter_fill(Dims3D::ZERO, size).enumerate() {
            assert_eq!(pos.linear_index(size), i);
            assert_eq!(Dims3D::from_linear_index(i, size), pos);
        }
        assert_eq!(Dims3D::iter_fill(Dims3D::ZERO, size).count(), 24);
    }

    #[test]
    fn bounds() {
        let size = Dims3D(2, 2, 1);
        assert!(Dims3D(1, 1, 0).is_in_bounds(size));
        assert!(!Dims3D(2, 0, 0).is_in_bounds(size));
        assert!(!Dims3D(0, 0, 1).is_in_bounds(size));
        assert!(!Dims3D(-1, 0, 0).is_in_bounds(size));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Dims3D(1, 2, 3) + Dims3D(-1, 1, 0), Dims3D(0, 3, 3));
        assert_eq!(Dims3D(2, 3, 4).product(), 24);
    }

    #[test]
    #[should_panic]
    fn negative_position_has_no_index() {
        Dims3D(-1, 0, 0).linear_index(Dims3D(3, 3, 3));
    }

    #[test]
    #[should_panic]
    fn zero_width_has_no_positions() {
        Dims3D::from_linear_index(4, Dims3D(0, 3, 3));
    }
}
