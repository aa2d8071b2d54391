//! **geovec** is a library of vectorized geometry containers backed by an
//! exact arithmetic kernel.
//!
//! Geometry is stored in homogeneous, fixed-kind containers
//! ([`GeometryVector`]) whose elements may be missing (NA). Containers of any
//! kind can be erased into an [`AnyGeometry`] and combined with other erased
//! containers through runtime dispatch. Bounding boxes live in their own
//! containers ([`BboxVector`] and [`AnyBbox`]) and never take part in that
//! dispatch.
//!
//! Please note that versions in the `0.0.*` series are experimental and
//! unstable! Use exact version constraints when specifying a dependency to
//! avoid spurious breakage.
//!
//! [`AnyBbox`]: crate::bbox::AnyBbox
//! [`AnyGeometry`]: crate::any::AnyGeometry
//! [`BboxVector`]: crate::bbox::BboxVector
//! [`GeometryVector`]: crate::geometry::GeometryVector
#![allow(unknown_lints)] // Allow clippy lints.

use std::fmt::{self, Display, Formatter};
use thiserror::Error;

pub mod any;
pub mod bbox;
mod dispatch;
pub mod exact;
pub mod geometry;
pub mod kernel;
mod order;
mod storage;
pub mod table;

pub use typenum::{U2, U3};

pub use crate::any::Handle;

pub mod prelude {
    //! Re-exports commonly used types and traits.
    //!
    //! Kernel traits are re-exported anonymously so that queries on single
    //! primitives can be used without lengthy imports.

    pub use crate::any::{AnyGeometry, AnyPrimitive, Handle};
    pub use crate::bbox::{AnyBbox, Bbox2, Bbox3, BboxVector};
    pub use crate::exact::Exact;
    pub use crate::geometry::GeometryVector;
    pub use crate::kernel::query::{
        Intersection as _, Intersects as _, SquaredDistance as _,
    };
    pub use crate::kernel::{
        Bounded as _, Element as _, EuclideanSpace as _, Primitive as _, VectorSpace as _,
    };
    pub use crate::table::Matrix;
    pub use crate::{GeometryError, Kind, TypeTag};
}

/// Kind of a geometric value.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    Bbox,
    Circle,
    Direction,
    IsoCuboid,
    IsoRect,
    Line,
    Plane,
    Point,
    Ray,
    Segment,
    Sphere,
    Tetrahedron,
    Triangle,
    Vector,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match *self {
            Kind::Bbox => "bbox",
            Kind::Circle => "circle",
            Kind::Direction => "direction",
            Kind::IsoCuboid => "iso_cuboid",
            Kind::IsoRect => "iso_rect",
            Kind::Line => "line",
            Kind::Plane => "plane",
            Kind::Point => "point",
            Kind::Ray => "ray",
            Kind::Segment => "segment",
            Kind::Sphere => "sphere",
            Kind::Tetrahedron => "tetrahedron",
            Kind::Triangle => "triangle",
            Kind::Vector => "vector",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Runtime identity of a container: its kind and dimensionality.
///
/// Two containers are compatible for kind-preserving operations (equality,
/// assignment, concatenation, etc.) if and only if their tags are equal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TypeTag {
    pub kind: Kind,
    pub dimensions: usize,
}

impl TypeTag {
    pub const fn new(kind: Kind, dimensions: usize) -> Self {
        TypeTag { kind, dimensions }
    }
}

impl Display for TypeTag {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} ({}D)", self.kind, self.dimensions)
    }
}

/// Errors raised by geometry containers and dispatch.
///
/// Operations that fail never produce partial results: either a complete
/// result is returned or the error is.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeometryError {
    /// An operand does not have the kind (or dimensionality) required by a
    /// kind-preserving operation.
    #[error("incompatible geometry; expected {expected}, but got {actual}")]
    KindMismatch {
        /// The required type of the operand.
        expected: TypeTag,
        /// The type of the operand that was encountered.
        actual: TypeTag,
    },
    /// The operands of a binary geometric query differ in dimensionality.
    #[error("geometries must have the same dimensionality; expected {expected}D, but got {actual}D")]
    DimensionMismatch { expected: usize, actual: usize },
    /// The lengths of paired inputs disagree, or a table has the wrong number
    /// of columns.
    #[error("conflicting size; expected {expected}, but got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// A binary operation has no routine for the given pair of geometries.
    #[error("don't know how to calculate the {operation} of {lhs} and {rhs} geometries")]
    UnsupportedOperation {
        operation: &'static str,
        lhs: TypeTag,
        rhs: TypeTag,
    },
    /// A unary or summary operation is not defined for a geometry.
    #[error("{operation} is not defined for {tag} geometries")]
    UnsupportedKind { operation: &'static str, tag: TypeTag },
    /// A one-based index is zero or past the end of a container.
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// An index is missing (NA) where a position is required.
    #[error("index is missing")]
    IndexMissing,
}
