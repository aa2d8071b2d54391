//! Type-erased geometry containers.
//!
//! [`AnyGeometry`] is a closed enumeration with one variant per primitive kind
//! and dimensionality. It is the handle used for heterogeneous operations: the
//! dispatch queries (`intersection`, `do_intersect`, etc.) as well as
//! kind-checked operations like concatenation and assignment.
//!
//! Kind-preserving operations require both operands to have the same type
//! tag and fail with `KindMismatch` otherwise. Operations that are only
//! meaningful for some kinds (ordering for points, summation for vectors) fail
//! with `UnsupportedKind` for the rest.
//!
//! [`AnyGeometry`]: crate::any::AnyGeometry

use std::rc::Rc;

use crate::bbox::AnyBbox;
use crate::exact::Exact;
use crate::geometry::GeometryVector;
use crate::kernel::{
    Circle2, Direction2, Direction3, Element, IsoCuboid, IsoRect, Line2, Line3, Plane, Point2, Point3, Primitive,
    Ray2, Ray3, Segment2, Segment3, Sphere, Tetrahedron, Triangle2, Triangle3, Vector2, Vector3,
};
use crate::table::Matrix;
use crate::{GeometryError, Kind, TypeTag};

/// Shared handle to an erased container.
pub type Handle = Rc<AnyGeometry>;

/// Primitive that can be erased into an [`AnyGeometry`].
///
/// [`AnyGeometry`]: crate::any::AnyGeometry
pub trait Variant: Primitive {
    fn into_any(vector: GeometryVector<Self>) -> AnyGeometry;

    fn from_any(geometry: &AnyGeometry) -> Option<&GeometryVector<Self>>;
}

macro_rules! impl_any_geometry {
    ($($kind:ident),+ $(,)?) => {
        /// Geometry container of any kind and dimensionality.
        #[derive(Clone, Debug, PartialEq)]
        pub enum AnyGeometry {
            $($kind(GeometryVector<$kind>),)+
        }

        impl AnyGeometry {
            pub fn type_tag(&self) -> TypeTag {
                match self {
                    $(AnyGeometry::$kind(_) => <$kind as Element>::type_tag(),)+
                }
            }
        }

        /// Single primitive of any kind and dimensionality.
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub enum AnyPrimitive {
            $($kind($kind),)+
        }

        impl AnyPrimitive {
            pub fn type_tag(&self) -> TypeTag {
                match self {
                    $(AnyPrimitive::$kind(_) => <$kind as Element>::type_tag(),)+
                }
            }

            pub fn format(&self) -> String {
                match self {
                    $(AnyPrimitive::$kind(primitive) => primitive.format(),)+
                }
            }
        }

        $(
            impl Variant for $kind {
                fn into_any(vector: GeometryVector<Self>) -> AnyGeometry {
                    AnyGeometry::$kind(vector)
                }

                fn from_any(geometry: &AnyGeometry) -> Option<&GeometryVector<Self>> {
                    match geometry {
                        AnyGeometry::$kind(vector) => Some(vector),
                        _ => None,
                    }
                }
            }

            impl From<GeometryVector<$kind>> for AnyGeometry {
                fn from(vector: GeometryVector<$kind>) -> Self {
                    AnyGeometry::$kind(vector)
                }
            }

            impl From<$kind> for AnyPrimitive {
                fn from(primitive: $kind) -> Self {
                    AnyPrimitive::$kind(primitive)
                }
            }
        )+
    };
}
impl_any_geometry!(
    Circle2,
    Direction2,
    IsoRect,
    Line2,
    Point2,
    Ray2,
    Segment2,
    Triangle2,
    Vector2,
    Direction3,
    IsoCuboid,
    Line3,
    Plane,
    Point3,
    Ray3,
    Segment3,
    Sphere,
    Tetrahedron,
    Triangle3,
    Vector3,
);

macro_rules! with_geometry {
    ($geometry:expr, $vector:ident => $body:expr) => {
        match $geometry {
            AnyGeometry::Circle2($vector) => $body,
            AnyGeometry::Direction2($vector) => $body,
            AnyGeometry::IsoRect($vector) => $body,
            AnyGeometry::Line2($vector) => $body,
            AnyGeometry::Point2($vector) => $body,
            AnyGeometry::Ray2($vector) => $body,
            AnyGeometry::Segment2($vector) => $body,
            AnyGeometry::Triangle2($vector) => $body,
            AnyGeometry::Vector2($vector) => $body,
            AnyGeometry::Direction3($vector) => $body,
            AnyGeometry::IsoCuboid($vector) => $body,
            AnyGeometry::Line3($vector) => $body,
            AnyGeometry::Plane($vector) => $body,
            AnyGeometry::Point3($vector) => $body,
            AnyGeometry::Ray3($vector) => $body,
            AnyGeometry::Segment3($vector) => $body,
            AnyGeometry::Sphere($vector) => $body,
            AnyGeometry::Tetrahedron($vector) => $body,
            AnyGeometry::Triangle3($vector) => $body,
            AnyGeometry::Vector3($vector) => $body,
        }
    };
}

// Ordering is only defined for points.
macro_rules! with_points {
    ($geometry:expr, $operation:expr, $vector:ident => $body:expr) => {
        match $geometry {
            AnyGeometry::Point2($vector) => Ok($body),
            AnyGeometry::Point3($vector) => Ok($body),
            geometry => Err(geometry.unsupported($operation)),
        }
    };
}

// Summation is only defined for vectors.
macro_rules! with_vectors {
    ($geometry:expr, $operation:expr, $vector:ident => $body:expr) => {
        match $geometry {
            AnyGeometry::Vector2($vector) => Ok($body),
            AnyGeometry::Vector3($vector) => Ok($body),
            geometry => Err(geometry.unsupported($operation)),
        }
    };
}

impl AnyGeometry {
    /// Reads a container of the given type from a numeric table.
    ///
    /// # Errors
    ///
    /// Returns an error if no primitive has the given type tag or if the table
    /// does not have one column per definition.
    pub fn from_table(tag: TypeTag, table: &Matrix<Option<f64>>) -> Result<Self, GeometryError> {
        fn read<T>(table: &Matrix<Option<f64>>) -> Result<AnyGeometry, GeometryError>
        where
            T: Variant,
        {
            GeometryVector::<T>::from_table(table).map(T::into_any)
        }

        match (tag.kind, tag.dimensions) {
            (Kind::Circle, 2) => read::<Circle2>(table),
            (Kind::Direction, 2) => read::<Direction2>(table),
            (Kind::IsoRect, 2) => read::<IsoRect>(table),
            (Kind::Line, 2) => read::<Line2>(table),
            (Kind::Point, 2) => read::<Point2>(table),
            (Kind::Ray, 2) => read::<Ray2>(table),
            (Kind::Segment, 2) => read::<Segment2>(table),
            (Kind::Triangle, 2) => read::<Triangle2>(table),
            (Kind::Vector, 2) => read::<Vector2>(table),
            (Kind::Direction, 3) => read::<Direction3>(table),
            (Kind::IsoCuboid, 3) => read::<IsoCuboid>(table),
            (Kind::Line, 3) => read::<Line3>(table),
            (Kind::Plane, 3) => read::<Plane>(table),
            (Kind::Point, 3) => read::<Point3>(table),
            (Kind::Ray, 3) => read::<Ray3>(table),
            (Kind::Segment, 3) => read::<Segment3>(table),
            (Kind::Sphere, 3) => read::<Sphere>(table),
            (Kind::Tetrahedron, 3) => read::<Tetrahedron>(table),
            (Kind::Triangle, 3) => read::<Triangle3>(table),
            (Kind::Vector, 3) => read::<Vector3>(table),
            _ => Err(GeometryError::UnsupportedKind {
                operation: "construction",
                tag,
            }),
        }
    }

    pub fn into_handle(self) -> Handle {
        Rc::new(self)
    }

    /// Gets the kind of the contained primitives.
    pub fn geometry_type(&self) -> Kind {
        self.type_tag().kind
    }

    pub fn dimensions(&self) -> usize {
        self.type_tag().dimensions
    }

    pub fn len(&self) -> usize {
        with_geometry!(self, vector => vector.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the names of the definitions of the contained primitives.
    pub fn definition_names(&self) -> &'static [&'static str] {
        with_geometry!(self, vector => vector.columns())
    }

    /// Downcasts to a concrete container.
    ///
    /// # Errors
    ///
    /// Returns an error if the container does not hold primitives of type
    /// `T`.
    pub fn downcast<T>(&self) -> Result<&GeometryVector<T>, GeometryError>
    where
        T: Variant,
    {
        T::from_any(self).ok_or_else(|| GeometryError::KindMismatch {
            expected: <T as Element>::type_tag(),
            actual: self.type_tag(),
        })
    }

    pub fn as_numeric(&self) -> Matrix<Option<f64>> {
        with_geometry!(self, vector => vector.as_numeric())
    }

    pub fn definition(&self, index: usize) -> Result<Vec<Option<Exact>>, GeometryError> {
        with_geometry!(self, vector => vector.definition(index))
    }

    pub fn format(&self) -> Vec<String> {
        with_geometry!(self, vector => vector.format())
    }

    pub fn is_na(&self) -> Vec<bool> {
        with_geometry!(self, vector => vector.is_na())
    }

    pub fn any_na(&self) -> bool {
        with_geometry!(self, vector => vector.any_na())
    }

    pub fn equals(&self, other: &AnyGeometry) -> Result<Vec<Option<bool>>, GeometryError> {
        with_geometry!(self, vector => Ok(vector.equals(other.downcast()?)))
    }

    pub fn subset(&self, indices: &[Option<usize>]) -> Result<AnyGeometry, GeometryError> {
        with_geometry!(self, vector => Ok(vector.subset(indices)?.into()))
    }

    /// Replaces elements at one-based indices.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of indices and values differ (checked
    /// first), if `values` has a different type tag, or if an index is NA or
    /// zero.
    pub fn assign(&self, indices: &[Option<usize>], values: &AnyGeometry) -> Result<AnyGeometry, GeometryError> {
        if indices.len() != values.len() {
            return Err(GeometryError::SizeMismatch {
                expected: indices.len(),
                actual: values.len(),
            });
        }
        with_geometry!(self, vector => Ok(vector.assign(indices, values.downcast()?)?.into()))
    }

    /// Concatenates containers.
    ///
    /// # Errors
    ///
    /// Returns an error if any container has a different type tag.
    pub fn combine(&self, others: &[&AnyGeometry]) -> Result<AnyGeometry, GeometryError> {
        with_geometry!(self, vector => {
            let others = others
                .iter()
                .map(|other| other.downcast())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(vector.combine(others).into())
        })
    }

    pub fn unique(&self) -> AnyGeometry {
        with_geometry!(self, vector => vector.unique().into())
    }

    pub fn duplicated(&self) -> Vec<bool> {
        with_geometry!(self, vector => vector.duplicated())
    }

    pub fn any_duplicated(&self) -> Option<usize> {
        with_geometry!(self, vector => vector.any_duplicated())
    }

    /// Matches elements against a table. If the table has a different type
    /// tag, nothing matches.
    pub fn matches(&self, table: &AnyGeometry) -> Vec<Option<usize>> {
        with_geometry!(self, vector => match table.downcast() {
            Ok(table) => vector.matches(table),
            Err(_) => vec![None; vector.len()],
        })
    }

    /// Gets the bounding box of each element.
    pub fn bbox(&self) -> AnyBbox {
        match self {
            AnyGeometry::Circle2(vector) => vector.bbox().into(),
            AnyGeometry::IsoRect(vector) => vector.bbox().into(),
            AnyGeometry::Point2(vector) => vector.bbox().into(),
            AnyGeometry::Segment2(vector) => vector.bbox().into(),
            AnyGeometry::Triangle2(vector) => vector.bbox().into(),
            AnyGeometry::IsoCuboid(vector) => vector.bbox().into(),
            AnyGeometry::Point3(vector) => vector.bbox().into(),
            AnyGeometry::Segment3(vector) => vector.bbox().into(),
            AnyGeometry::Sphere(vector) => vector.bbox().into(),
            AnyGeometry::Tetrahedron(vector) => vector.bbox().into(),
            AnyGeometry::Triangle3(vector) => vector.bbox().into(),
            geometry => match geometry.dimensions() {
                2 => AnyBbox::Bbox2(vec![None; geometry.len()].into()),
                _ => AnyBbox::Bbox3(vec![None; geometry.len()].into()),
            },
        }
    }

    /// Adds vectors to vectors or translates points by vectors.
    pub fn add(&self, other: &AnyGeometry) -> Result<AnyGeometry, GeometryError> {
        match (self, other) {
            (AnyGeometry::Vector2(a), AnyGeometry::Vector2(b)) => Ok(a.add(b).into()),
            (AnyGeometry::Vector3(a), AnyGeometry::Vector3(b)) => Ok(a.add(b).into()),
            (AnyGeometry::Point2(a), AnyGeometry::Vector2(b)) => Ok(a.translate(b).into()),
            (AnyGeometry::Point3(a), AnyGeometry::Vector3(b)) => Ok(a.translate(b).into()),
            (AnyGeometry::Vector2(_), _) | (AnyGeometry::Point2(_), _) => {
                Err(other.mismatch::<Vector2>())
            }
            (AnyGeometry::Vector3(_), _) | (AnyGeometry::Point3(_), _) => {
                Err(other.mismatch::<Vector3>())
            }
            _ => Err(self.unsupported("addition")),
        }
    }

    /// Subtracts vectors from vectors or points, or computes the vectors
    /// between points.
    pub fn sub(&self, other: &AnyGeometry) -> Result<AnyGeometry, GeometryError> {
        match (self, other) {
            (AnyGeometry::Vector2(a), AnyGeometry::Vector2(b)) => Ok(a.sub(b).into()),
            (AnyGeometry::Vector3(a), AnyGeometry::Vector3(b)) => Ok(a.sub(b).into()),
            (AnyGeometry::Point2(a), AnyGeometry::Vector2(b)) => Ok(a.translate_back(b).into()),
            (AnyGeometry::Point3(a), AnyGeometry::Vector3(b)) => Ok(a.translate_back(b).into()),
            (AnyGeometry::Point2(a), AnyGeometry::Point2(b)) => Ok(a.difference(b).into()),
            (AnyGeometry::Point3(a), AnyGeometry::Point3(b)) => Ok(a.difference(b).into()),
            (AnyGeometry::Vector2(_), _) | (AnyGeometry::Point2(_), _) => {
                Err(other.mismatch::<Vector2>())
            }
            (AnyGeometry::Vector3(_), _) | (AnyGeometry::Point3(_), _) => {
                Err(other.mismatch::<Vector3>())
            }
            _ => Err(self.unsupported("subtraction")),
        }
    }

    pub fn neg(&self) -> Result<AnyGeometry, GeometryError> {
        with_vectors!(self, "negation", vector => vector.neg().into())
    }

    pub fn sum(&self, na_rm: bool) -> Result<AnyGeometry, GeometryError> {
        with_vectors!(self, "sum", vector => vector.sum(na_rm).into())
    }

    pub fn cumsum(&self) -> Result<AnyGeometry, GeometryError> {
        with_vectors!(self, "cumsum", vector => vector.cumsum().into())
    }

    pub fn sort(&self, decreasing: bool, na_last: Option<bool>) -> Result<AnyGeometry, GeometryError> {
        with_points!(self, "sort", vector => vector.sort(decreasing, na_last).into())
    }

    pub fn rank(&self) -> Result<Vec<usize>, GeometryError> {
        with_points!(self, "rank", vector => vector.rank())
    }

    pub fn min(&self, na_rm: bool) -> Result<AnyGeometry, GeometryError> {
        with_points!(self, "min", vector => vector.min(na_rm).into())
    }

    pub fn max(&self, na_rm: bool) -> Result<AnyGeometry, GeometryError> {
        with_points!(self, "max", vector => vector.max(na_rm).into())
    }

    pub fn cummin(&self) -> Result<AnyGeometry, GeometryError> {
        with_points!(self, "cummin", vector => vector.cummin().into())
    }

    pub fn cummax(&self) -> Result<AnyGeometry, GeometryError> {
        with_points!(self, "cummax", vector => vector.cummax().into())
    }

    fn unsupported(&self, operation: &'static str) -> GeometryError {
        GeometryError::UnsupportedKind {
            operation,
            tag: self.type_tag(),
        }
    }

    fn mismatch<T>(&self) -> GeometryError
    where
        T: Element,
    {
        GeometryError::KindMismatch {
            expected: T::type_tag(),
            actual: self.type_tag(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::any::AnyGeometry;
    use crate::exact::{self, Exact};
    use crate::geometry::GeometryVector;
    use crate::kernel::{Point2, Segment2, Vector2};
    use crate::table::Matrix;
    use crate::{GeometryError, Kind, TypeTag};

    fn n(value: i64) -> Exact {
        exact::from_i64(value)
    }

    fn points(storage: Vec<Option<(i64, i64)>>) -> AnyGeometry {
        storage
            .into_iter()
            .map(|point| point.map(|(x, y)| Point2::new(n(x), n(y))))
            .collect::<GeometryVector<Point2>>()
            .into()
    }

    fn vectors(storage: Vec<Option<(i64, i64)>>) -> AnyGeometry {
        storage
            .into_iter()
            .map(|vector| vector.map(|(x, y)| Vector2::new(n(x), n(y))))
            .collect::<GeometryVector<Vector2>>()
            .into()
    }

    fn segments() -> AnyGeometry {
        GeometryVector::new(vec![Some(Segment2::new(
            Point2::new(n(0), n(0)),
            Point2::new(n(1), n(1)),
        ))])
        .into()
    }

    #[test]
    fn downcast_checked() {
        let geometry = points(vec![Some((1, 2))]);

        assert_eq!(1, geometry.downcast::<Point2>().unwrap().len());
        assert_eq!(
            Err(GeometryError::KindMismatch {
                expected: TypeTag::new(Kind::Segment, 2),
                actual: TypeTag::new(Kind::Point, 2),
            }),
            geometry.downcast::<Segment2>(),
        );
        assert_eq!(Kind::Point, geometry.geometry_type());
        assert_eq!(&["x", "y"], geometry.definition_names());
    }

    #[test]
    fn construct_from_tag() {
        let table = Matrix::from_rows(2, vec![vec![Some(1.0), Some(2.0)], vec![None, None]]).unwrap();

        assert_eq!(
            points(vec![Some((1, 2)), None]),
            AnyGeometry::from_table(TypeTag::new(Kind::Point, 2), &table).unwrap(),
        );
        assert_eq!(
            Err(GeometryError::UnsupportedKind {
                operation: "construction",
                tag: TypeTag::new(Kind::Plane, 2),
            }),
            AnyGeometry::from_table(TypeTag::new(Kind::Plane, 2), &table),
        );
    }

    #[test]
    fn kind_checked_operations() {
        let a = points(vec![Some((0, 0)), Some((1, 1))]);
        let b = points(vec![Some((1, 1)), Some((0, 0)), None]);
        let mismatch = GeometryError::KindMismatch {
            expected: TypeTag::new(Kind::Point, 2),
            actual: TypeTag::new(Kind::Segment, 2),
        };

        assert_eq!(vec![Some(2), Some(1)], a.matches(&b));
        assert_eq!(vec![None, None], a.matches(&segments()));
        assert_eq!(Err(mismatch.clone()), a.equals(&segments()));
        assert_eq!(Err(mismatch.clone()), a.combine(&[&b, &segments()]));
        assert_eq!(Err(mismatch), a.assign(&[Some(1)], &segments()));
        assert_eq!(5, a.combine(&[&b]).unwrap().len());
        assert_eq!(
            Err(GeometryError::SizeMismatch {
                expected: 2,
                actual: 1,
            }),
            a.assign(&[Some(1), Some(2)], &segments()),
        );
    }

    #[test]
    fn arithmetic_by_kind() {
        let p = points(vec![Some((1, 1)), None]);
        let v = vectors(vec![Some((2, 3))]);

        assert_eq!(Ok(points(vec![Some((3, 4)), None])), p.add(&v));
        assert_eq!(Ok(points(vec![Some((-1, -2)), None])), p.sub(&v));
        assert_eq!(Ok(vectors(vec![Some((0, 0)), None])), p.sub(&p));
        assert_eq!(Ok(vectors(vec![Some((-2, -3))])), v.neg());
        assert_eq!(
            Err(GeometryError::KindMismatch {
                expected: TypeTag::new(Kind::Vector, 2),
                actual: TypeTag::new(Kind::Segment, 2),
            }),
            p.add(&segments()),
        );
        assert_eq!(
            Err(GeometryError::UnsupportedKind {
                operation: "addition",
                tag: TypeTag::new(Kind::Segment, 2),
            }),
            segments().add(&p),
        );
    }

    #[test]
    fn kind_restricted_operations() {
        let p = points(vec![Some((1, 1)), None, Some((0, 5))]);
        let v = vectors(vec![Some((2, 3)), Some((1, 1))]);

        assert_eq!(Ok(vec![3, 1, 2]), p.rank());
        assert_eq!(Ok(points(vec![Some((0, 5))])), p.min(true));
        assert_eq!(Ok(vectors(vec![Some((3, 4))])), v.sum(false));
        assert_eq!(
            Err(GeometryError::UnsupportedKind {
                operation: "sort",
                tag: TypeTag::new(Kind::Vector, 2),
            }),
            v.sort(false, Some(true)),
        );
        assert!(p.cumsum().is_err());
    }

    #[test]
    fn bounding_boxes_by_kind() {
        let bbox = points(vec![Some((1, 2)), None]).bbox();
        let unbounded = vectors(vec![Some((1, 2))]).bbox();

        assert_eq!(vec![false, true], bbox.is_na());
        assert_eq!(2, unbounded.dimensions());
        assert_eq!(vec![true], unbounded.is_na());
    }
}
