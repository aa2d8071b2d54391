//! Three-dimensional primitives.

use derivative::Derivative;
use num::{Signed, Zero};
use smallvec::smallvec;
use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};
use typenum::U3;

use crate::bbox::Bbox3;
use crate::exact::{self, Exact};
use crate::kernel::query::{Intersects, SquaredDistance};
use crate::kernel::{self, Bounded, Definitions, EuclideanSpace, Primitive, VectorSpace};
use crate::Kind;

// Permutations of four vertices that preserve orientation.
const EVEN_PERMUTATIONS: [[usize; 4]; 12] = [
    [0, 1, 2, 3],
    [0, 2, 3, 1],
    [0, 3, 1, 2],
    [1, 0, 3, 2],
    [1, 2, 0, 3],
    [1, 3, 2, 0],
    [2, 0, 1, 3],
    [2, 1, 3, 0],
    [2, 3, 0, 1],
    [3, 0, 2, 1],
    [3, 1, 0, 2],
    [3, 2, 1, 0],
];

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Point3 {
    pub x: Exact,
    pub y: Exact,
    pub z: Exact,
}

impl Point3 {
    pub fn new(x: Exact, y: Exact, z: Exact) -> Self {
        Point3 { x, y, z }
    }

    fn coordinates_ref(&self) -> [&Exact; 3] {
        [&self.x, &self.y, &self.z]
    }
}

impl Bounded for Point3 {
    type Bbox = Bbox3;

    fn bbox(&self) -> Option<Self::Bbox> {
        Some(kernel::bbox_of([self.coordinates_ref()]))
    }
}

impl EuclideanSpace for Point3 {
    type Vector = Vector3;

    fn origin() -> Self {
        Point3::new(Exact::zero(), Exact::zero(), Exact::zero())
    }

    fn translate(&self, vector: &Self::Vector) -> Self {
        Point3::new(
            &self.x + &vector.x,
            &self.y + &vector.y,
            &self.z + &vector.z,
        )
    }

    fn difference(&self, other: &Self) -> Self::Vector {
        Vector3::new(
            &self.x - &other.x,
            &self.y - &other.y,
            &self.z - &other.z,
        )
    }
}

impl Primitive for Point3 {
    type Dimension = U3;

    const KIND: Kind = Kind::Point;
    const DEFINITIONS: &'static [&'static str] = &["x", "y", "z"];

    fn definitions(&self) -> Definitions {
        smallvec![self.x.clone(), self.y.clone(), self.z.clone()]
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x, y, z] = kernel::definition_slice::<3>(definitions)?;
        Some(Point3::new(x.clone(), y.clone(), z.clone()))
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Vector3 {
    pub x: Exact,
    pub y: Exact,
    pub z: Exact,
}

impl Vector3 {
    pub fn new(x: Exact, y: Exact, z: Exact) -> Self {
        Vector3 { x, y, z }
    }

    pub fn cross(&self, other: &Self) -> Self {
        Vector3::new(
            (&self.y * &other.z) - (&self.z * &other.y),
            (&self.z * &other.x) - (&self.x * &other.z),
            (&self.x * &other.y) - (&self.y * &other.x),
        )
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Primitive for Vector3 {
    type Dimension = U3;

    const KIND: Kind = Kind::Vector;
    const DEFINITIONS: &'static [&'static str] = &["x", "y", "z"];

    fn definitions(&self) -> Definitions {
        smallvec![self.x.clone(), self.y.clone(), self.z.clone()]
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x, y, z] = kernel::definition_slice::<3>(definitions)?;
        Some(Vector3::new(x.clone(), y.clone(), z.clone()))
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl VectorSpace for Vector3 {
    fn dot(&self, other: &Self) -> Exact {
        (&self.x * &other.x) + (&self.y * &other.y) + (&self.z * &other.z)
    }

    fn scale(&self, factor: &Exact) -> Self {
        Vector3::new(&self.x * factor, &self.y * factor, &self.z * factor)
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Vector3::new(Exact::zero(), Exact::zero(), Exact::zero())
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

/// Direction in space. Compares by its components scaled such that the
/// largest absolute component is one.
#[derive(Clone, Debug, Derivative, Eq)]
#[derivative(Hash, PartialEq)]
pub struct Direction3 {
    #[derivative(Hash = "ignore", PartialEq = "ignore")]
    given: [Exact; 3],
    dx: Exact,
    dy: Exact,
    dz: Exact,
}

impl Direction3 {
    /// Creates a direction. Returns `None` for the zero vector.
    pub fn new(dx: Exact, dy: Exact, dz: Exact) -> Option<Self> {
        let given = [dx, dy, dz];
        let [dx, dy, dz] = kernel::normalized(given.clone())?;
        Some(Direction3 { given, dx, dy, dz })
    }

    pub fn to_vector(&self) -> Vector3 {
        Vector3::new(self.dx.clone(), self.dy.clone(), self.dz.clone())
    }
}

impl Primitive for Direction3 {
    type Dimension = U3;

    const KIND: Kind = Kind::Direction;
    const DEFINITIONS: &'static [&'static str] = &["dx", "dy", "dz"];

    fn definitions(&self) -> Definitions {
        self.given.iter().cloned().collect()
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [dx, dy, dz] = kernel::definition_slice::<3>(definitions)?;
        Direction3::new(dx.clone(), dy.clone(), dz.clone())
    }
}

/// Oriented line in space.
///
/// Lines keep the point they were given, but compare by the point closest to
/// the origin (the foot point) and their direction, so any two descriptions
/// of the same line are equal.
#[derive(Clone, Debug, Derivative, Eq)]
#[derivative(Hash, PartialEq)]
pub struct Line3 {
    #[derivative(Hash = "ignore", PartialEq = "ignore")]
    point: Point3,
    foot: Point3,
    direction: Direction3,
}

impl Line3 {
    pub fn new(point: Point3, direction: Direction3) -> Self {
        let d = direction.to_vector();
        let t = point.coordinates().dot(&d) / d.squared_length();
        let foot = point.translate(&-d.scale(&t));
        Line3 {
            point,
            foot,
            direction,
        }
    }

    pub fn through(p: &Point3, q: &Point3) -> Option<Self> {
        let d = q.difference(p);
        Direction3::new(d.x, d.y, d.z).map(|direction| Line3::new(p.clone(), direction))
    }

    pub fn point(&self) -> &Point3 {
        &self.point
    }

    pub fn foot(&self) -> &Point3 {
        &self.foot
    }

    pub fn direction(&self) -> &Direction3 {
        &self.direction
    }
}

impl Primitive for Line3 {
    type Dimension = U3;

    const KIND: Kind = Kind::Line;
    const DEFINITIONS: &'static [&'static str] = &["x", "y", "z", "dx", "dy", "dz"];

    fn definitions(&self) -> Definitions {
        let [dx, dy, dz] = &self.direction.given;
        smallvec![
            self.point.x.clone(),
            self.point.y.clone(),
            self.point.z.clone(),
            dx.clone(),
            dy.clone(),
            dz.clone(),
        ]
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x, y, z, dx, dy, dz] = kernel::definition_slice::<6>(definitions)?;
        Some(Line3::new(
            Point3::new(x.clone(), y.clone(), z.clone()),
            Direction3::new(dx.clone(), dy.clone(), dz.clone())?,
        ))
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Ray3 {
    source: Point3,
    direction: Direction3,
}

impl Ray3 {
    pub fn new(source: Point3, direction: Direction3) -> Self {
        Ray3 { source, direction }
    }

    pub fn source(&self) -> &Point3 {
        &self.source
    }

    pub fn direction(&self) -> &Direction3 {
        &self.direction
    }
}

impl Primitive for Ray3 {
    type Dimension = U3;

    const KIND: Kind = Kind::Ray;
    const DEFINITIONS: &'static [&'static str] = &["x", "y", "z", "dx", "dy", "dz"];

    fn definitions(&self) -> Definitions {
        let [dx, dy, dz] = &self.direction.given;
        smallvec![
            self.source.x.clone(),
            self.source.y.clone(),
            self.source.z.clone(),
            dx.clone(),
            dy.clone(),
            dz.clone(),
        ]
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x, y, z, dx, dy, dz] = kernel::definition_slice::<6>(definitions)?;
        Some(Ray3::new(
            Point3::new(x.clone(), y.clone(), z.clone()),
            Direction3::new(dx.clone(), dy.clone(), dz.clone())?,
        ))
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Segment3 {
    source: Point3,
    target: Point3,
}

impl Segment3 {
    pub fn new(source: Point3, target: Point3) -> Self {
        Segment3 { source, target }
    }

    pub fn source(&self) -> &Point3 {
        &self.source
    }

    pub fn target(&self) -> &Point3 {
        &self.target
    }
}

impl Bounded for Segment3 {
    type Bbox = Bbox3;

    fn bbox(&self) -> Option<Self::Bbox> {
        Some(kernel::bbox_of([
            self.source.coordinates_ref(),
            self.target.coordinates_ref(),
        ]))
    }
}

impl Primitive for Segment3 {
    type Dimension = U3;

    const KIND: Kind = Kind::Segment;
    const DEFINITIONS: &'static [&'static str] = &["x0", "y0", "z0", "x1", "y1", "z1"];

    fn definitions(&self) -> Definitions {
        smallvec![
            self.source.x.clone(),
            self.source.y.clone(),
            self.source.z.clone(),
            self.target.x.clone(),
            self.target.y.clone(),
            self.target.z.clone(),
        ]
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x0, y0, z0, x1, y1, z1] = kernel::definition_slice::<6>(definitions)?;
        Some(Segment3::new(
            Point3::new(x0.clone(), y0.clone(), z0.clone()),
            Point3::new(x1.clone(), y1.clone(), z1.clone()),
        ))
    }
}

/// Triangle in space with its vertices rotated such that the smallest vertex
/// comes first.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Triangle3 {
    vertices: [Point3; 3],
}

impl Triangle3 {
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Triangle3 {
            vertices: kernel::smallest_rotation([a, b, c]),
        }
    }

    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    pub fn normal(&self) -> Vector3 {
        let [a, b, c] = &self.vertices;
        triangle_normal(a, b, c)
    }

    pub fn is_degenerate(&self) -> bool {
        self.normal().is_zero()
    }
}

impl Bounded for Triangle3 {
    type Bbox = Bbox3;

    fn bbox(&self) -> Option<Self::Bbox> {
        Some(kernel::bbox_of(
            self.vertices.iter().map(Point3::coordinates_ref),
        ))
    }
}

impl Primitive for Triangle3 {
    type Dimension = U3;

    const KIND: Kind = Kind::Triangle;
    const DEFINITIONS: &'static [&'static str] =
        &["x0", "y0", "z0", "x1", "y1", "z1", "x2", "y2", "z2"];

    fn definitions(&self) -> Definitions {
        self.vertices
            .iter()
            .flat_map(|point| point.coordinates_ref())
            .cloned()
            .collect()
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x0, y0, z0, x1, y1, z1, x2, y2, z2] = kernel::definition_slice::<9>(definitions)?;
        Some(Triangle3::new(
            Point3::new(x0.clone(), y0.clone(), z0.clone()),
            Point3::new(x1.clone(), y1.clone(), z1.clone()),
            Point3::new(x2.clone(), y2.clone(), z2.clone()),
        ))
    }
}

/// Oriented plane `ax + by + cz + d = 0`.
///
/// Planes compare by their coefficients scaled such that the largest absolute
/// normal component is one.
#[derive(Clone, Debug, Derivative, Eq)]
#[derivative(Hash, PartialEq)]
pub struct Plane {
    #[derivative(Hash = "ignore", PartialEq = "ignore")]
    given: [Exact; 4],
    a: Exact,
    b: Exact,
    c: Exact,
    d: Exact,
}

impl Plane {
    /// Creates a plane from its coefficients. Returns `None` if the normal
    /// `(a, b, c)` is zero.
    pub fn new(a: Exact, b: Exact, c: Exact, d: Exact) -> Option<Self> {
        let scale = a.abs().max(b.abs()).max(c.abs());
        if scale.is_zero() {
            return None;
        }
        let given = [a, b, c, d];
        let [a, b, c, d] = given.clone().map(|value| value / &scale);
        Some(Plane { given, a, b, c, d })
    }

    pub fn through(p: &Point3, q: &Point3, r: &Point3) -> Option<Self> {
        let normal = triangle_normal(p, q, r);
        let d = -normal.dot(&p.coordinates());
        Plane::new(normal.x, normal.y, normal.z, d)
    }

    pub fn normal(&self) -> Vector3 {
        Vector3::new(self.a.clone(), self.b.clone(), self.c.clone())
    }

    fn evaluate(&self, point: &Point3) -> Exact {
        (&self.a * &point.x) + (&self.b * &point.y) + (&self.c * &point.z) + &self.d
    }
}

impl Primitive for Plane {
    type Dimension = U3;

    const KIND: Kind = Kind::Plane;
    const DEFINITIONS: &'static [&'static str] = &["a", "b", "c", "d"];

    fn definitions(&self) -> Definitions {
        self.given.iter().cloned().collect()
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [a, b, c, d] = kernel::definition_slice::<4>(definitions)?;
        Plane::new(a.clone(), b.clone(), c.clone(), d.clone())
    }
}

/// Axis-aligned cuboid stored as its minimum and maximum corners.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IsoCuboid {
    min: Point3,
    max: Point3,
}

impl IsoCuboid {
    /// Creates a cuboid from any two opposite corners.
    pub fn new(p: Point3, q: Point3) -> Self {
        let (xmin, xmax) = if p.x <= q.x { (p.x, q.x) } else { (q.x, p.x) };
        let (ymin, ymax) = if p.y <= q.y { (p.y, q.y) } else { (q.y, p.y) };
        let (zmin, zmax) = if p.z <= q.z { (p.z, q.z) } else { (q.z, p.z) };
        IsoCuboid {
            min: Point3::new(xmin, ymin, zmin),
            max: Point3::new(xmax, ymax, zmax),
        }
    }

    pub fn min(&self) -> &Point3 {
        &self.min
    }

    pub fn max(&self) -> &Point3 {
        &self.max
    }
}

impl Bounded for IsoCuboid {
    type Bbox = Bbox3;

    fn bbox(&self) -> Option<Self::Bbox> {
        Some(kernel::bbox_of([
            self.min.coordinates_ref(),
            self.max.coordinates_ref(),
        ]))
    }
}

impl Primitive for IsoCuboid {
    type Dimension = U3;

    const KIND: Kind = Kind::IsoCuboid;
    const DEFINITIONS: &'static [&'static str] = &["xmin", "ymin", "zmin", "xmax", "ymax", "zmax"];

    fn definitions(&self) -> Definitions {
        self.min
            .coordinates_ref()
            .into_iter()
            .chain(self.max.coordinates_ref())
            .cloned()
            .collect()
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [xmin, ymin, zmin, xmax, ymax, zmax] = kernel::definition_slice::<6>(definitions)?;
        Some(IsoCuboid::new(
            Point3::new(xmin.clone(), ymin.clone(), zmin.clone()),
            Point3::new(xmax.clone(), ymax.clone(), zmax.clone()),
        ))
    }
}

/// Sphere given by its center and squared radius.
///
/// A sphere is a surface: only points on its boundary lie on it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Sphere {
    center: Point3,
    squared_radius: Exact,
}

impl Sphere {
    /// Creates a sphere. Returns `None` for a negative squared radius.
    pub fn new(center: Point3, squared_radius: Exact) -> Option<Self> {
        if squared_radius.is_negative() {
            None
        }
        else {
            Some(Sphere {
                center,
                squared_radius,
            })
        }
    }

    pub fn center(&self) -> &Point3 {
        &self.center
    }

    pub fn squared_radius(&self) -> &Exact {
        &self.squared_radius
    }
}

impl Bounded for Sphere {
    type Bbox = Bbox3;

    fn bbox(&self) -> Option<Self::Bbox> {
        let radius = exact::to_f64(&self.squared_radius).sqrt();
        let center = self.center.coordinates_ref().map(exact::to_f64);
        Bbox3::new(
            center.map(|value| value - radius),
            center.map(|value| value + radius),
        )
    }
}

impl Primitive for Sphere {
    type Dimension = U3;

    const KIND: Kind = Kind::Sphere;
    const DEFINITIONS: &'static [&'static str] = &["x", "y", "z", "r2"];

    fn definitions(&self) -> Definitions {
        smallvec![
            self.center.x.clone(),
            self.center.y.clone(),
            self.center.z.clone(),
            self.squared_radius.clone(),
        ]
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x, y, z, r2] = kernel::definition_slice::<4>(definitions)?;
        Sphere::new(Point3::new(x.clone(), y.clone(), z.clone()), r2.clone())
    }
}

/// Tetrahedron stored as the lexicographically smallest even permutation of
/// its vertices. Even permutations preserve orientation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Tetrahedron {
    vertices: [Point3; 4],
}

impl Tetrahedron {
    pub fn new(a: Point3, b: Point3, c: Point3, d: Point3) -> Self {
        let vertices = [a, b, c, d];
        let permutation = EVEN_PERMUTATIONS
            .iter()
            .min_by(|p, q| {
                p.iter()
                    .map(|&index| &vertices[index])
                    .cmp(q.iter().map(|&index| &vertices[index]))
            })
            .copied()
            .unwrap_or(EVEN_PERMUTATIONS[0]);
        Tetrahedron {
            vertices: permutation.map(|index| vertices[index].clone()),
        }
    }

    pub fn vertices(&self) -> &[Point3; 4] {
        &self.vertices
    }

    pub fn orientation(&self) -> Ordering {
        let [a, b, c, d] = &self.vertices;
        orientation(a, b, c, d)
    }

    fn faces(&self) -> impl '_ + Iterator<Item = [&Point3; 3]> {
        let [a, b, c, d] = &self.vertices;
        IntoIterator::into_iter([[a, b, c], [a, b, d], [a, c, d], [b, c, d]])
    }
}

impl Bounded for Tetrahedron {
    type Bbox = Bbox3;

    fn bbox(&self) -> Option<Self::Bbox> {
        Some(kernel::bbox_of(
            self.vertices.iter().map(Point3::coordinates_ref),
        ))
    }
}

impl Primitive for Tetrahedron {
    type Dimension = U3;

    const KIND: Kind = Kind::Tetrahedron;
    const DEFINITIONS: &'static [&'static str] = &[
        "x0", "y0", "z0", "x1", "y1", "z1", "x2", "y2", "z2", "x3", "y3", "z3",
    ];

    fn definitions(&self) -> Definitions {
        self.vertices
            .iter()
            .flat_map(|point| point.coordinates_ref())
            .cloned()
            .collect()
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let definitions = kernel::definition_slice::<12>(definitions)?;
        let point = |index: usize| {
            Point3::new(
                definitions[3 * index].clone(),
                definitions[(3 * index) + 1].clone(),
                definitions[(3 * index) + 2].clone(),
            )
        };
        Some(Tetrahedron::new(point(0), point(1), point(2), point(3)))
    }
}

fn triangle_normal(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
    b.difference(a).cross(&c.difference(a))
}

fn orientation(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> Ordering {
    b.difference(a)
        .dot(&c.difference(a).cross(&d.difference(a)))
        .cmp(&Exact::zero())
}

fn segment_contains(source: &Point3, target: &Point3, point: &Point3) -> bool {
    if source == target {
        return point == source;
    }
    let d = target.difference(source);
    let v = point.difference(source);
    if !d.cross(&v).is_zero() {
        return false;
    }
    let t = v.dot(&d);
    !t.is_negative() && t <= d.squared_length()
}

fn segment_squared_distance(source: &Point3, target: &Point3, point: &Point3) -> Exact {
    let d = target.difference(source);
    let v = point.difference(source);
    let dd = d.squared_length();
    let t = v.dot(&d);
    if dd.is_zero() || !t.is_positive() {
        v.squared_length()
    }
    else if t >= dd {
        point.difference(target).squared_length()
    }
    else {
        d.cross(&v).squared_length() / dd
    }
}

// Determines if a point in the plane of a non-degenerate triangle is within
// the triangle.
fn triangle_encloses(vertices: [&Point3; 3], normal: &Vector3, point: &Point3) -> bool {
    (0..3).all(|index| {
        let source = vertices[index];
        let target = vertices[(index + 1) % 3];
        !target
            .difference(source)
            .cross(&point.difference(source))
            .dot(normal)
            .is_negative()
    })
}

fn triangle_contains(vertices: [&Point3; 3], point: &Point3) -> bool {
    let normal = triangle_normal(vertices[0], vertices[1], vertices[2]);
    if normal.is_zero() {
        (0..3).any(|index| segment_contains(vertices[index], vertices[(index + 1) % 3], point))
    }
    else {
        point.difference(vertices[0]).dot(&normal).is_zero() && triangle_encloses(vertices, &normal, point)
    }
}

impl Intersects<Point3> for Point3 {
    fn intersects(&self, other: &Point3) -> bool {
        self == other
    }
}

impl Intersects<Line3> for Point3 {
    fn intersects(&self, line: &Line3) -> bool {
        line.direction
            .to_vector()
            .cross(&self.difference(&line.foot))
            .is_zero()
    }
}

impl Intersects<Ray3> for Point3 {
    fn intersects(&self, ray: &Ray3) -> bool {
        let d = ray.direction.to_vector();
        let v = self.difference(&ray.source);
        d.cross(&v).is_zero() && !v.dot(&d).is_negative()
    }
}

impl Intersects<Segment3> for Point3 {
    fn intersects(&self, segment: &Segment3) -> bool {
        segment_contains(&segment.source, &segment.target, self)
    }
}

impl Intersects<Triangle3> for Point3 {
    fn intersects(&self, triangle: &Triangle3) -> bool {
        let [a, b, c] = &triangle.vertices;
        triangle_contains([a, b, c], self)
    }
}

impl Intersects<Plane> for Point3 {
    fn intersects(&self, plane: &Plane) -> bool {
        plane.evaluate(self).is_zero()
    }
}

impl Intersects<IsoCuboid> for Point3 {
    fn intersects(&self, cuboid: &IsoCuboid) -> bool {
        self.coordinates_ref()
            .iter()
            .zip(cuboid.min.coordinates_ref().iter())
            .zip(cuboid.max.coordinates_ref().iter())
            .all(|((value, min), max)| min <= value && value <= max)
    }
}

impl Intersects<Sphere> for Point3 {
    fn intersects(&self, sphere: &Sphere) -> bool {
        self.difference(&sphere.center).squared_length() == sphere.squared_radius
    }
}

impl Intersects<Tetrahedron> for Point3 {
    fn intersects(&self, tetrahedron: &Tetrahedron) -> bool {
        let volume = tetrahedron.orientation();
        if volume == Ordering::Equal {
            return tetrahedron
                .faces()
                .any(|face| triangle_contains(face, self));
        }
        let [a, b, c, d] = &tetrahedron.vertices;
        [
            orientation(self, b, c, d),
            orientation(a, self, c, d),
            orientation(a, b, self, d),
            orientation(a, b, c, self),
        ]
        .iter()
        .all(|sign| *sign != volume.reverse())
    }
}

impl SquaredDistance<Point3> for Point3 {
    fn squared_distance(&self, other: &Point3) -> Exact {
        self.difference(other).squared_length()
    }
}

impl SquaredDistance<Line3> for Point3 {
    fn squared_distance(&self, line: &Line3) -> Exact {
        let d = line.direction.to_vector();
        d.cross(&self.difference(&line.foot)).squared_length() / d.squared_length()
    }
}

impl SquaredDistance<Ray3> for Point3 {
    fn squared_distance(&self, ray: &Ray3) -> Exact {
        let d = ray.direction.to_vector();
        let v = self.difference(&ray.source);
        if v.dot(&d).is_positive() {
            d.cross(&v).squared_length() / d.squared_length()
        }
        else {
            v.squared_length()
        }
    }
}

impl SquaredDistance<Segment3> for Point3 {
    fn squared_distance(&self, segment: &Segment3) -> Exact {
        segment_squared_distance(&segment.source, &segment.target, self)
    }
}

impl SquaredDistance<Triangle3> for Point3 {
    fn squared_distance(&self, triangle: &Triangle3) -> Exact {
        let [a, b, c] = &triangle.vertices;
        let normal = triangle.normal();
        if !normal.is_zero() {
            let height = self.difference(a).dot(&normal);
            let nn = normal.squared_length();
            let projection = self.translate(&normal.scale(&-(&height / &nn)));
            if triangle_encloses([a, b, c], &normal, &projection) {
                return (&height * &height) / nn;
            }
        }
        [(a, b), (b, c), (c, a)]
            .iter()
            .map(|(source, target)| segment_squared_distance(source, target, self))
            .min()
            .unwrap_or_else(Exact::zero)
    }
}

impl SquaredDistance<Plane> for Point3 {
    fn squared_distance(&self, plane: &Plane) -> Exact {
        let value = plane.evaluate(self);
        (&value * &value) / plane.normal().squared_length()
    }
}

#[cfg(test)]
mod tests {
    use num::Zero;
    use std::cmp::Ordering;

    use crate::exact::{self, Exact};
    use crate::kernel::e3::*;
    use crate::kernel::query::{Intersects, SquaredDistance};
    use crate::kernel::{Bounded, Primitive};

    fn n(value: i64) -> Exact {
        exact::from_i64(value)
    }

    fn p(x: i64, y: i64, z: i64) -> Point3 {
        Point3::new(n(x), n(y), n(z))
    }

    fn unit() -> Tetrahedron {
        Tetrahedron::new(p(0, 0, 0), p(1, 0, 0), p(0, 1, 0), p(0, 0, 1))
    }

    #[test]
    fn canonical_lines() {
        let a = Line3::through(&p(1, 1, 0), &p(1, 1, 5)).unwrap();
        let b = Line3::through(&p(1, 1, -3), &p(1, 1, 2)).unwrap();
        let c = Line3::through(&p(1, 1, 2), &p(1, 1, -3)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(&p(1, 1, 0), a.foot());
        assert_eq!(&p(1, 1, 0), a.point());
        assert_eq!(&p(1, 1, -3), b.point());
        assert_eq!(None, Line3::through(&p(1, 1, 1), &p(1, 1, 1)));
    }

    #[test]
    fn keep_given_definitions() {
        let line = Line3::new(p(1, 0, 0), Direction3::new(n(1), n(1), n(1)).unwrap());
        let plane = Plane::new(n(1), n(3), n(0), n(1)).unwrap();

        assert_eq!(
            vec![n(1), n(0), n(0), n(1), n(1), n(1)],
            line.definitions().to_vec(),
        );
        assert_eq!(vec![n(1), n(3), n(0), n(1)], plane.definitions().to_vec());
        assert_eq!(
            line,
            Line3::new(p(0, -1, -1), Direction3::new(n(2), n(2), n(2)).unwrap()),
        );
        assert_eq!(plane, Plane::new(n(2), n(6), n(0), n(2)).unwrap());
        assert_ne!(plane, Plane::new(n(-2), n(-6), n(0), n(-2)).unwrap());
    }

    #[test]
    fn canonical_tetrahedra() {
        let a = unit();
        let b = Tetrahedron::new(p(1, 0, 0), p(0, 0, 0), p(0, 0, 1), p(0, 1, 0));
        let c = Tetrahedron::new(p(1, 0, 0), p(0, 0, 0), p(0, 1, 0), p(0, 0, 1));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.orientation().reverse(), c.orientation());
        assert_eq!(&p(0, 0, 0), &a.vertices()[0]);
    }

    #[test]
    fn canonical_planes() {
        assert_eq!(
            Plane::new(n(0), n(0), n(2), n(-4)).unwrap(),
            Plane::through(&p(0, 0, 2), &p(1, 0, 2), &p(0, 1, 2)).unwrap(),
        );
        assert_eq!(None, Plane::new(n(0), n(0), n(0), n(1)));
    }

    #[test]
    fn point_in_regions() {
        let tetrahedron = unit();
        let cuboid = IsoCuboid::new(p(1, 1, 1), p(0, 0, 0));
        let sphere = Sphere::new(p(0, 0, 0), n(9)).unwrap();
        let triangle = Triangle3::new(p(0, 0, 0), p(2, 0, 0), p(0, 2, 0));

        assert!(p(0, 0, 0).intersects(&tetrahedron));
        assert!(p(1, 0, 0).intersects(&tetrahedron));
        assert!(!p(1, 1, 1).intersects(&tetrahedron));
        assert!(p(1, 1, 1).intersects(&cuboid));
        assert!(!p(2, 1, 1).intersects(&cuboid));
        assert!(p(0, 0, 3).intersects(&sphere));
        assert!(!p(0, 0, 0).intersects(&sphere));
        assert!(p(1, 1, 0).intersects(&triangle));
        assert!(!p(1, 1, 1).intersects(&triangle));
        assert!(!p(2, 2, 0).intersects(&triangle));

        let flat = Tetrahedron::new(p(0, 0, 0), p(1, 0, 0), p(0, 1, 0), p(1, 1, 0));
        assert_eq!(Ordering::Equal, flat.orientation());
        assert!(p(1, 0, 0).intersects(&flat));
        assert!(!p(0, 0, 1).intersects(&flat));
    }

    #[test]
    fn point_on_primitives() {
        let line = Line3::through(&p(0, 0, 0), &p(1, 1, 1)).unwrap();
        let ray = Ray3::new(p(0, 0, 0), Direction3::new(n(0), n(0), n(1)).unwrap());
        let segment = Segment3::new(p(0, 0, 0), p(0, 0, 2));
        let plane = Plane::new(n(1), n(1), n(1), n(-3)).unwrap();

        assert!(p(-2, -2, -2).intersects(&line));
        assert!(!p(1, 0, 0).intersects(&line));
        assert!(p(0, 0, 7).intersects(&ray));
        assert!(!p(0, 0, -1).intersects(&ray));
        assert!(p(0, 0, 1).intersects(&segment));
        assert!(!p(0, 0, 3).intersects(&segment));
        assert!(p(1, 1, 1).intersects(&plane));
        assert!(!p(0, 0, 0).intersects(&plane));
    }

    #[test]
    fn squared_distances() {
        let triangle = Triangle3::new(p(0, 0, 0), p(2, 0, 0), p(0, 2, 0));
        let plane = Plane::new(n(0), n(0), n(1), n(0)).unwrap();
        let line = Line3::through(&p(0, 0, 0), &p(0, 0, 1)).unwrap();
        let ray = Ray3::new(p(0, 0, 0), Direction3::new(n(1), n(0), n(0)).unwrap());

        assert_eq!(n(4), p(1, 1, 2).squared_distance(&triangle));
        assert_eq!(n(1), p(-1, 0, 0).squared_distance(&triangle));
        assert_eq!(n(9), p(5, 5, -3).squared_distance(&plane));
        assert_eq!(n(25), p(3, 4, 9).squared_distance(&line));
        assert_eq!(n(2), p(4, 1, 1).squared_distance(&ray));
        assert_eq!(n(3), p(-1, 1, 1).squared_distance(&ray));
        assert_eq!(Exact::zero(), p(1, 2, 3).squared_distance(&p(1, 2, 3)));
    }

    #[test]
    fn bounding_boxes() {
        let sphere = Sphere::new(p(0, 0, 0), n(1)).unwrap().bbox().unwrap();
        let tetrahedron = unit().bbox().unwrap();

        assert_eq!((-1.0, 1.0), (sphere.min(2), sphere.max(2)));
        assert_eq!((0.0, 1.0), (tetrahedron.min(1), tetrahedron.max(1)));
        assert_eq!(12, unit().definitions().len());
    }
}
