//! Exact geometric kernel.
//!
//! This module provides the primitives stored in geometry containers along
//! with the traits used to construct, inspect, and query them. Equality and
//! hashing of primitives agree with geometric equality, while definitions
//! report the values a primitive was constructed from.
//!
//! # Definitions
//!
//! Every primitive is described by a fixed, ordered list of named scalar
//! definitions (e.g., `x` and `y` for a two-dimensional point). Definitions
//! are the columns of the numeric table of a container and are also the means
//! of constructing a primitive from raw values.

pub mod e2;
pub mod e3;
pub mod query;

use num::{Signed, Zero};
use smallvec::SmallVec;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Neg, Sub};
use typenum::{NonZero, Unsigned};

use crate::bbox::Bbox;
use crate::exact::{self, Exact};
use crate::{Kind, TypeTag};

pub use crate::kernel::e2::{Circle2, Direction2, IsoRect, Line2, Point2, Ray2, Segment2, Triangle2, Vector2};
pub use crate::kernel::e3::{
    Direction3, IsoCuboid, Line3, Plane, Point3, Ray3, Segment3, Sphere, Tetrahedron, Triangle3, Vector3,
};

/// Ordered scalar definitions of a primitive.
pub type Definitions = SmallVec<[Exact; 6]>;

/// Numeric row of an element.
pub type Row = SmallVec<[f64; 6]>;

/// Value that can be stored in a geometry container.
///
/// Elements have a fixed type tag and a fixed set of named numeric columns.
/// Both kernel primitives and bounding boxes are elements.
pub trait Element: Clone + Debug + Eq + Hash + 'static {
    fn type_tag() -> TypeTag;

    /// Names of the numeric columns of the element.
    fn columns() -> &'static [&'static str];

    fn to_row(&self) -> Row;

    /// Reads an element from a complete row of cells.
    ///
    /// Returns `None` if the row does not describe a valid element. Callers
    /// treat such rows as missing.
    fn from_row(row: &[f64]) -> Option<Self>;

    fn format(&self) -> String;
}

/// Exact geometric primitive.
pub trait Primitive: Clone + Debug + Eq + Hash + 'static {
    type Dimension: NonZero + Unsigned;

    const KIND: Kind;
    /// Names of the scalar definitions of the primitive.
    const DEFINITIONS: &'static [&'static str];

    fn definitions(&self) -> Definitions;

    /// Constructs a primitive from its definitions.
    ///
    /// Returns `None` if the definitions do not describe a valid primitive
    /// (e.g., a line with a zero normal).
    fn from_definitions(definitions: &[Exact]) -> Option<Self>;

    fn definition(&self, index: usize) -> Option<Exact> {
        self.definitions().into_iter().nth(index)
    }
}

impl<T> Element for T
where
    T: Primitive,
{
    fn type_tag() -> TypeTag {
        TypeTag::new(T::KIND, T::Dimension::USIZE)
    }

    fn columns() -> &'static [&'static str] {
        T::DEFINITIONS
    }

    fn to_row(&self) -> Row {
        self.definitions().iter().map(exact::to_f64).collect()
    }

    fn from_row(row: &[f64]) -> Option<Self> {
        let definitions = row
            .iter()
            .map(|value| exact::from_f64(*value))
            .collect::<Option<Definitions>>()?;
        T::from_definitions(&definitions)
    }

    fn format(&self) -> String {
        let fields = T::DEFINITIONS
            .iter()
            .zip(self.definitions().iter())
            .map(|(name, value)| format!("{}:{}", name, exact::format_significant(exact::to_f64(value), 3)))
            .collect::<Vec<_>>();
        format!("<{}>", fields.join(", "))
    }
}

/// Primitive with a finite extent.
///
/// Unbounded primitives (lines, rays, planes, etc.) and free vectors have no
/// bounding box and yield `None`.
pub trait Bounded: Primitive {
    type Bbox: Element;

    fn bbox(&self) -> Option<Self::Bbox>;
}

/// Free vector.
pub trait VectorSpace: Primitive + Neg<Output = Self> + Sub<Output = Self> + Zero {
    fn dot(&self, other: &Self) -> Exact;

    fn scale(&self, factor: &Exact) -> Self;

    fn squared_length(&self) -> Exact {
        self.dot(self)
    }
}

/// Point of a Euclidean space.
pub trait EuclideanSpace: Primitive {
    type Vector: VectorSpace<Dimension = Self::Dimension>;

    fn origin() -> Self;

    /// Translates the point by a vector.
    fn translate(&self, vector: &Self::Vector) -> Self;

    /// Gets the vector from `other` to the point.
    fn difference(&self, other: &Self) -> Self::Vector;

    fn coordinates(&self) -> Self::Vector {
        self.difference(&Self::origin())
    }
}

/// Gets the bounding box of a point set given as rows of coordinates.
pub(crate) fn bbox_of<'a, const N: usize, I>(points: I) -> Bbox<N>
where
    I: IntoIterator<Item = [&'a Exact; N]>,
{
    points
        .into_iter()
        .map(|point| {
            let mut coordinates = [0.0; N];
            for (coordinate, value) in coordinates.iter_mut().zip(point.iter()) {
                *coordinate = exact::to_f64(value);
            }
            Bbox::from_point(coordinates)
        })
        .fold(Bbox::zero(), |bbox, next| bbox + next)
}

pub(crate) fn definition_slice<const N: usize>(definitions: &[Exact]) -> Option<&[Exact; N]> {
    definitions.try_into().ok()
}

/// Scales values such that the largest absolute value is one. Returns `None`
/// if all values are zero.
pub(crate) fn normalized<const N: usize>(values: [Exact; N]) -> Option<[Exact; N]> {
    let scale = values.iter().map(|value| value.abs()).max()?;
    if scale.is_zero() {
        None
    }
    else {
        Some(values.map(|value| value / &scale))
    }
}

/// Rotates values such that the sequence is lexicographically smallest.
pub(crate) fn smallest_rotation<T, const N: usize>(mut values: [T; N]) -> [T; N]
where
    T: Ord,
{
    let rotation = |offset: usize| values[offset..].iter().chain(values[..offset].iter());
    let offset = (0..N)
        .min_by(|a, b| rotation(*a).cmp(rotation(*b)))
        .unwrap_or(0);
    values.rotate_left(offset);
    values
}

#[cfg(test)]
mod tests {
    use crate::exact;
    use crate::kernel::{normalized, smallest_rotation, Element, Line2, Point2, Primitive};
    use crate::{Kind, TypeTag};

    #[test]
    fn element_from_primitive() {
        assert_eq!(TypeTag::new(Kind::Point, 2), Point2::type_tag());
        assert_eq!(&["x", "y"], Point2::columns());

        let point = Point2::from_row(&[1.0, -2.5]).unwrap();
        assert_eq!(&[1.0, -2.5], point.to_row().as_slice());
        assert_eq!("<x:1, y:-2.5>", point.format());
        assert_eq!(Some(exact::from_i64(1)), point.definition(0));
        assert_eq!(None, point.definition(2));
    }

    #[test]
    fn canonical_rotation() {
        assert_eq!([1, 4, 2, 3], smallest_rotation([2, 3, 1, 4]));
        assert_eq!([0, 0, 1], smallest_rotation([0, 1, 0]));
        assert_eq!(
            Some([exact::from_i64(-1), exact::from_i64(1) / exact::from_i64(2)]),
            normalized([exact::from_i64(-4), exact::from_i64(2)]),
        );
        assert_eq!(None, normalized([exact::from_i64(0), exact::from_i64(0)]));
    }

    #[test]
    fn reject_invalid_rows() {
        assert_eq!(None, Point2::from_row(&[1.0, f64::INFINITY]));
        assert_eq!(None, Line2::from_row(&[0.0, 0.0, 1.0]));
    }
}
