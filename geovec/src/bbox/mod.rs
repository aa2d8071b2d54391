//! Axis-aligned bounding boxes.
//!
//! Bounding boxes use floating-point coordinates. An empty box (minimum
//! greater than maximum on some axis) is the identity of union, which is
//! exposed through `Add` and `Zero` so that boxes can be summed like any other
//! additive element.

mod vector;

use approx::AbsDiffEq;
use decorum::Total;
use num::Zero;
use std::ops::Add;

use crate::exact;
use crate::kernel::{Element, Row};
use crate::{Kind, TypeTag};

pub use crate::bbox::vector::{AnyBbox, BboxVector};

const COLUMNS2: [&str; 4] = ["xmin", "ymin", "xmax", "ymax"];
const COLUMNS3: [&str; 6] = ["xmin", "ymin", "zmin", "xmax", "ymax", "zmax"];

/// Axis-aligned bounding box in `N` dimensions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Bbox<const N: usize> {
    min: [Total<f64>; N],
    max: [Total<f64>; N],
}

pub type Bbox2 = Bbox<2>;
pub type Bbox3 = Bbox<3>;

impl<const N: usize> Bbox<N> {
    /// Creates a bounding box from its extrema.
    ///
    /// Returns `None` if any coordinate is NaN. Infinite coordinates are
    /// allowed, and a minimum greater than its maximum yields an empty box.
    pub fn new(min: [f64; N], max: [f64; N]) -> Option<Self> {
        if min.iter().chain(max.iter()).any(|value| value.is_nan()) {
            None
        }
        else {
            Some(Bbox {
                min: min.map(Total::from_inner),
                max: max.map(Total::from_inner),
            })
        }
    }

    pub fn from_point(point: [f64; N]) -> Self {
        let point = point.map(Total::from_inner);
        Bbox {
            min: point,
            max: point,
        }
    }

    /// Gets the empty bounding box.
    pub fn empty() -> Self {
        Bbox {
            min: [Total::from_inner(f64::INFINITY); N],
            max: [Total::from_inner(f64::NEG_INFINITY); N],
        }
    }

    pub fn min(&self, axis: usize) -> f64 {
        self.min[axis].into_inner()
    }

    pub fn max(&self, axis: usize) -> f64 {
        self.max[axis].into_inner()
    }

    pub fn is_empty(&self) -> bool {
        self.min.iter().zip(self.max.iter()).any(|(min, max)| min > max)
    }

    /// Determines if two boxes share at least one point.
    ///
    /// Intervals are closed, so boxes that only touch overlap. Empty boxes
    /// overlap nothing.
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..N).all(|axis| self.min[axis] <= other.max[axis] && other.min[axis] <= self.max[axis])
    }
}

impl<const N: usize> AbsDiffEq for Bbox<N> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.min
            .iter()
            .zip(other.min.iter())
            .chain(self.max.iter().zip(other.max.iter()))
            .all(|(a, b)| {
                let (a, b) = (a.into_inner(), b.into_inner());
                a == b || a.abs_diff_eq(&b, epsilon)
            })
    }
}

impl<const N: usize> Add for Bbox<N> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        let mut output = self;
        for axis in 0..N {
            output.min[axis] = self.min[axis].min(other.min[axis]);
            output.max[axis] = self.max[axis].max(other.max[axis]);
        }
        output
    }
}

impl<const N: usize> Default for Bbox<N> {
    fn default() -> Self {
        Bbox::empty()
    }
}

impl<const N: usize> Zero for Bbox<N> {
    fn zero() -> Self {
        Bbox::empty()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<const N: usize> Element for Bbox<N> {
    fn type_tag() -> TypeTag {
        TypeTag::new(Kind::Bbox, N)
    }

    fn columns() -> &'static [&'static str] {
        match N {
            2 => &COLUMNS2,
            _ => &COLUMNS3,
        }
    }

    fn to_row(&self) -> Row {
        self.min
            .iter()
            .chain(self.max.iter())
            .map(|value| value.into_inner())
            .collect()
    }

    fn from_row(row: &[f64]) -> Option<Self> {
        if row.len() != 2 * N {
            return None;
        }
        let mut min = [0.0; N];
        let mut max = [0.0; N];
        min.copy_from_slice(&row[..N]);
        max.copy_from_slice(&row[N..]);
        Bbox::new(min, max)
    }

    fn format(&self) -> String {
        let corner = |values: &[Total<f64>; N]| {
            values
                .iter()
                .map(|value| exact::format_significant(value.into_inner(), 3))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("<<{}>, <{}>>", corner(&self.min), corner(&self.max))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use num::Zero;

    use crate::bbox::{Bbox2, Bbox3};
    use crate::kernel::Element;

    #[test]
    fn union_with_empty_identity() {
        let a = Bbox2::new([0.0, 0.0], [1.0, 1.0]).unwrap();
        let b = Bbox2::new([2.0, -1.0], [3.0, 0.5]).unwrap();

        assert_eq!(a, a + Bbox2::zero());
        assert_eq!(a, Bbox2::zero() + a);
        assert_eq!(Bbox2::new([0.0, -1.0], [3.0, 1.0]).unwrap(), a + b);
        assert!(Bbox2::zero().is_empty());
        assert!(!a.is_empty());
    }

    #[test]
    fn overlap_closed_intervals() {
        let a = Bbox2::new([0.0, 0.0], [1.0, 1.0]).unwrap();
        let b = Bbox2::new([1.0, 1.0], [2.0, 2.0]).unwrap();
        let c = Bbox2::new([1.5, 0.0], [2.0, 1.0]).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&Bbox2::zero()));
    }

    #[test]
    fn format_corners() {
        let bbox = Bbox2::new([0.0, 1.0 / 3.0], [1234.5, 2.0]).unwrap();
        assert_eq!("<<0, 0.333>, <1.23e+03, 2>>", bbox.format());
    }

    #[test]
    fn read_and_write_rows() {
        let bbox = Bbox3::from_row(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        assert_eq!(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], bbox.to_row().as_slice());
        assert_eq!(2.0, bbox.min(2));
        assert_eq!(3.0, bbox.max(0));
        assert_eq!(None, Bbox2::from_row(&[0.0, f64::NAN, 1.0, 1.0]));
        assert_eq!(6, Bbox3::columns().len());
        assert_abs_diff_eq!(bbox, bbox);
    }
}
