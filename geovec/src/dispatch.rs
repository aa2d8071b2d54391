//! Runtime dispatch of binary geometric queries.
//!
//! Queries between two erased containers are resolved by explicit tables of
//! supported pairs of variants. Every supported pair pairs a point with a
//! primitive of the same dimensionality and is listed in both orders; the
//! receiver always provides the rows (outer side) of the output.
//!
//! Operands must have the same dimensionality. For pairs that are not in a
//! table, `intersection` fails while the remaining queries yield NA.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::iter;

use crate::any::{AnyGeometry, AnyPrimitive};
use crate::exact::{self, Exact};
use crate::geometry::GeometryVector;
use crate::kernel::query::{Intersection, Intersects, SquaredDistance};
use crate::kernel::Primitive;
use crate::table::Matrix;
use crate::{storage, GeometryError};

macro_rules! with_intersecting_pair {
    ($lhs:expr, $rhs:expr, ($a:ident, $b:ident) => $body:expr, _ => $fallback:expr $(,)?) => {
        match ($lhs, $rhs) {
            (AnyGeometry::Point2($a), AnyGeometry::Circle2($b)) => $body,
            (AnyGeometry::Point2($a), AnyGeometry::IsoRect($b)) => $body,
            (AnyGeometry::Point2($a), AnyGeometry::Line2($b)) => $body,
            (AnyGeometry::Point2($a), AnyGeometry::Point2($b)) => $body,
            (AnyGeometry::Point2($a), AnyGeometry::Ray2($b)) => $body,
            (AnyGeometry::Point2($a), AnyGeometry::Segment2($b)) => $body,
            (AnyGeometry::Point2($a), AnyGeometry::Triangle2($b)) => $body,
            (AnyGeometry::Circle2($a), AnyGeometry::Point2($b)) => $body,
            (AnyGeometry::IsoRect($a), AnyGeometry::Point2($b)) => $body,
            (AnyGeometry::Line2($a), AnyGeometry::Point2($b)) => $body,
            (AnyGeometry::Ray2($a), AnyGeometry::Point2($b)) => $body,
            (AnyGeometry::Segment2($a), AnyGeometry::Point2($b)) => $body,
            (AnyGeometry::Triangle2($a), AnyGeometry::Point2($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::IsoCuboid($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Line3($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Plane($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Ray3($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Segment3($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Sphere($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Tetrahedron($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Triangle3($b)) => $body,
            (AnyGeometry::IsoCuboid($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Line3($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Plane($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Ray3($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Segment3($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Sphere($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Tetrahedron($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Triangle3($a), AnyGeometry::Point3($b)) => $body,
            _ => $fallback,
        }
    };
}

macro_rules! with_measurable_pair {
    ($lhs:expr, $rhs:expr, ($a:ident, $b:ident) => $body:expr, _ => $fallback:expr $(,)?) => {
        match ($lhs, $rhs) {
            (AnyGeometry::Point2($a), AnyGeometry::Line2($b)) => $body,
            (AnyGeometry::Point2($a), AnyGeometry::Point2($b)) => $body,
            (AnyGeometry::Point2($a), AnyGeometry::Ray2($b)) => $body,
            (AnyGeometry::Point2($a), AnyGeometry::Segment2($b)) => $body,
            (AnyGeometry::Point2($a), AnyGeometry::Triangle2($b)) => $body,
            (AnyGeometry::Line2($a), AnyGeometry::Point2($b)) => $body,
            (AnyGeometry::Ray2($a), AnyGeometry::Point2($b)) => $body,
            (AnyGeometry::Segment2($a), AnyGeometry::Point2($b)) => $body,
            (AnyGeometry::Triangle2($a), AnyGeometry::Point2($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Line3($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Plane($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Ray3($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Segment3($b)) => $body,
            (AnyGeometry::Point3($a), AnyGeometry::Triangle3($b)) => $body,
            (AnyGeometry::Line3($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Plane($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Ray3($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Segment3($a), AnyGeometry::Point3($b)) => $body,
            (AnyGeometry::Triangle3($a), AnyGeometry::Point3($b)) => $body,
            _ => $fallback,
        }
    };
}

impl AnyGeometry {
    /// Computes pairwise intersections, recycling the shorter operand.
    ///
    /// The output is NA where either element is NA or where the elements do
    /// not intersect.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands differ in dimensionality or if the
    /// pair of kinds is not supported.
    pub fn intersection(&self, other: &AnyGeometry) -> Result<Vec<Option<AnyPrimitive>>, GeometryError> {
        self.check_dimensions(other)?;
        with_intersecting_pair!(
            self,
            other,
            (lhs, rhs) => Ok(intersection(lhs, rhs)),
            _ => Err(GeometryError::UnsupportedOperation {
                operation: "intersection",
                lhs: self.type_tag(),
                rhs: other.type_tag(),
            }),
        )
    }

    /// Determines if elements intersect pairwise, recycling the shorter
    /// operand.
    ///
    /// Unsupported pairs of kinds yield NA for every element.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands differ in dimensionality.
    pub fn do_intersect(&self, other: &AnyGeometry) -> Result<Vec<Option<bool>>, GeometryError> {
        self.check_dimensions(other)?;
        Ok(with_intersecting_pair!(
            self,
            other,
            (lhs, rhs) => storage::recycle(lhs.as_slice(), rhs.as_slice(), |a, b| a.intersects(b)),
            _ => self.unknown("do_intersect", other),
        ))
    }

    /// Computes exact squared distances pairwise, recycling the shorter
    /// operand.
    ///
    /// Unsupported pairs of kinds yield NA for every element.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands differ in dimensionality.
    pub fn squared_distance(&self, other: &AnyGeometry) -> Result<Vec<Option<Exact>>, GeometryError> {
        self.check_dimensions(other)?;
        Ok(with_measurable_pair!(
            self,
            other,
            (lhs, rhs) => storage::recycle(lhs.as_slice(), rhs.as_slice(), |a, b| a.squared_distance(b)),
            _ => self.unknown("squared_distance", other),
        ))
    }

    /// Computes the distance between every element of the receiver (rows) and
    /// every element of `other` (columns).
    ///
    /// Unsupported pairs of kinds yield a matrix of NA.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands differ in dimensionality.
    pub fn distance_matrix(&self, other: &AnyGeometry) -> Result<Matrix<Option<f64>>, GeometryError> {
        self.check_dimensions(other)?;
        with_measurable_pair!(
            self,
            other,
            (lhs, rhs) => distance_matrix(lhs, rhs),
            _ => {
                log::debug!(
                    "no distance_matrix routine for {} and {} geometries; yielding NA",
                    self.type_tag(),
                    other.type_tag(),
                );
                Ok(Matrix::from_fn(self.len(), other.len(), |_, _| None))
            },
        )
    }

    fn check_dimensions(&self, other: &AnyGeometry) -> Result<(), GeometryError> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        }
        else {
            Err(GeometryError::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            })
        }
    }

    fn unknown<T>(&self, operation: &'static str, other: &AnyGeometry) -> Vec<Option<T>> {
        log::debug!(
            "no {} routine for {} and {} geometries; yielding NA",
            operation,
            self.type_tag(),
            other.type_tag(),
        );
        iter::repeat_with(|| None)
            .take(storage::recycled_len(self.len(), other.len()))
            .collect()
    }
}

fn intersection<L, R>(lhs: &GeometryVector<L>, rhs: &GeometryVector<R>) -> Vec<Option<AnyPrimitive>>
where
    L: Intersection<R> + Primitive,
    L::Output: Into<AnyPrimitive>,
    R: Primitive,
{
    storage::recycle_filter(lhs.as_slice(), rhs.as_slice(), |a, b| {
        a.intersection(b).map(Into::into)
    })
}

fn distance_matrix<L, R>(lhs: &GeometryVector<L>, rhs: &GeometryVector<R>) -> Result<Matrix<Option<f64>>, GeometryError>
where
    L: Primitive + SquaredDistance<R> + Sync,
    R: Primitive + Sync,
{
    let (lhs, rhs) = (lhs.as_slice(), rhs.as_slice());
    let ncol = rhs.len();
    let distance = |index: usize| match (&lhs[index / ncol], &rhs[index % ncol]) {
        (Some(a), Some(b)) => Some(exact::to_f64(&a.squared_distance(b)).sqrt()),
        _ => None,
    };
    #[cfg(feature = "parallel")]
    let data = (0..(lhs.len() * ncol)).into_par_iter().map(distance).collect();
    #[cfg(not(feature = "parallel"))]
    let data = (0..(lhs.len() * ncol)).map(distance).collect();
    Matrix::new(lhs.len(), ncol, data)
}
