//! Geometric queries between pairs of primitives.
//!
//! Queries are implemented for every pairing of a point with another
//! primitive of the same dimensionality, in both orders. Pairs that are not
//! implemented here are not supported by dispatch either.

use crate::exact::Exact;
use crate::kernel::e2::{Circle2, IsoRect, Line2, Point2, Ray2, Segment2, Triangle2};
use crate::kernel::e3::{IsoCuboid, Line3, Plane, Point3, Ray3, Segment3, Sphere, Tetrahedron, Triangle3};

/// Determines if two primitives share at least one point.
pub trait Intersects<T> {
    fn intersects(&self, other: &T) -> bool;
}

/// Computes the intersection of two primitives.
///
/// Returns `None` if the primitives do not intersect.
pub trait Intersection<T>: Intersects<T> {
    type Output;

    fn intersection(&self, other: &T) -> Option<Self::Output>;
}

/// Computes the exact squared Euclidean distance between two primitives.
pub trait SquaredDistance<T> {
    fn squared_distance(&self, other: &T) -> Exact;
}

macro_rules! impl_point_intersection {
    (point => $point:ident, others => [$($other:ident),* $(,)?]) => {
        impl Intersection<$point> for $point {
            type Output = $point;

            fn intersection(&self, other: &$point) -> Option<Self::Output> {
                self.intersects(other).then(|| self.clone())
            }
        }

        $(
            impl Intersection<$other> for $point {
                type Output = $point;

                fn intersection(&self, other: &$other) -> Option<Self::Output> {
                    self.intersects(other).then(|| self.clone())
                }
            }

            impl Intersects<$point> for $other {
                fn intersects(&self, point: &$point) -> bool {
                    point.intersects(self)
                }
            }

            impl Intersection<$point> for $other {
                type Output = $point;

                fn intersection(&self, point: &$point) -> Option<Self::Output> {
                    point.intersection(self)
                }
            }
        )*
    };
}
impl_point_intersection!(
    point => Point2,
    others => [Circle2, IsoRect, Line2, Ray2, Segment2, Triangle2]
);
impl_point_intersection!(
    point => Point3,
    others => [IsoCuboid, Line3, Plane, Ray3, Segment3, Sphere, Tetrahedron, Triangle3]
);

macro_rules! impl_point_distance {
    (point => $point:ident, others => [$($other:ident),* $(,)?]) => {
        $(
            impl SquaredDistance<$point> for $other {
                fn squared_distance(&self, point: &$point) -> Exact {
                    point.squared_distance(self)
                }
            }
        )*
    };
}
impl_point_distance!(
    point => Point2,
    others => [Line2, Ray2, Segment2, Triangle2]
);
impl_point_distance!(
    point => Point3,
    others => [Line3, Plane, Ray3, Segment3, Triangle3]
);

#[cfg(test)]
mod tests {
    use crate::exact::{self, Exact};
    use crate::kernel::e2::{Circle2, Point2, Segment2};
    use crate::kernel::e3::{Plane, Point3};
    use crate::kernel::query::{Intersection, Intersects, SquaredDistance};

    fn n(value: i64) -> Exact {
        exact::from_i64(value)
    }

    #[test]
    fn symmetric_queries() {
        let point = Point2::new(n(1), n(0));
        let circle = Circle2::new(Point2::new(n(0), n(0)), n(1)).unwrap();
        let segment = Segment2::new(Point2::new(n(0), n(2)), Point2::new(n(2), n(2)));

        assert!(circle.intersects(&point));
        assert_eq!(Some(point.clone()), circle.intersection(&point));
        assert_eq!(point.intersection(&circle), circle.intersection(&point));
        assert_eq!(None, segment.intersection(&point));
        assert_eq!(n(4), segment.squared_distance(&point));
    }

    #[test]
    fn point_intersection_is_point() {
        let point = Point3::new(n(1), n(2), n(3));
        let plane = Plane::new(n(0), n(0), n(1), n(-3)).unwrap();

        assert_eq!(Some(point.clone()), point.intersection(&plane));
        assert_eq!(Some(point.clone()), point.intersection(&point));
        assert_eq!(None, point.intersection(&Point3::new(n(0), n(0), n(0))));
        assert_eq!(n(0), plane.squared_distance(&point));
    }
}
