//! Two-dimensional primitives.

use derivative::Derivative;
use num::{Signed, Zero};
use smallvec::smallvec;
use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};
use typenum::U2;

use crate::bbox::Bbox2;
use crate::exact::{self, Exact};
use crate::kernel::query::{Intersects, SquaredDistance};
use crate::kernel::{self, Bounded, Definitions, EuclideanSpace, Primitive, VectorSpace};
use crate::Kind;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Point2 {
    pub x: Exact,
    pub y: Exact,
}

impl Point2 {
    pub fn new(x: Exact, y: Exact) -> Self {
        Point2 { x, y }
    }
}

impl Bounded for Point2 {
    type Bbox = Bbox2;

    fn bbox(&self) -> Option<Self::Bbox> {
        Some(kernel::bbox_of([[&self.x, &self.y]]))
    }
}

impl EuclideanSpace for Point2 {
    type Vector = Vector2;

    fn origin() -> Self {
        Point2::new(Exact::zero(), Exact::zero())
    }

    fn translate(&self, vector: &Self::Vector) -> Self {
        Point2::new(&self.x + &vector.x, &self.y + &vector.y)
    }

    fn difference(&self, other: &Self) -> Self::Vector {
        Vector2::new(&self.x - &other.x, &self.y - &other.y)
    }
}

impl Primitive for Point2 {
    type Dimension = U2;

    const KIND: Kind = Kind::Point;
    const DEFINITIONS: &'static [&'static str] = &["x", "y"];

    fn definitions(&self) -> Definitions {
        smallvec![self.x.clone(), self.y.clone()]
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x, y] = kernel::definition_slice::<2>(definitions)?;
        Some(Point2::new(x.clone(), y.clone()))
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Vector2 {
    pub x: Exact,
    pub y: Exact,
}

impl Vector2 {
    pub fn new(x: Exact, y: Exact) -> Self {
        Vector2 { x, y }
    }

    /// Gets the scalar cross product (the signed area of the parallelogram
    /// spanned by the vectors).
    pub fn perp_dot(&self, other: &Self) -> Exact {
        (&self.x * &other.y) - (&self.y * &other.x)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl Primitive for Vector2 {
    type Dimension = U2;

    const KIND: Kind = Kind::Vector;
    const DEFINITIONS: &'static [&'static str] = &["x", "y"];

    fn definitions(&self) -> Definitions {
        smallvec![self.x.clone(), self.y.clone()]
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x, y] = kernel::definition_slice::<2>(definitions)?;
        Some(Vector2::new(x.clone(), y.clone()))
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl VectorSpace for Vector2 {
    fn dot(&self, other: &Self) -> Exact {
        (&self.x * &other.x) + (&self.y * &other.y)
    }

    fn scale(&self, factor: &Exact) -> Self {
        Vector2::new(&self.x * factor, &self.y * factor)
    }
}

impl Zero for Vector2 {
    fn zero() -> Self {
        Vector2::new(Exact::zero(), Exact::zero())
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

/// Direction in the plane.
///
/// Directions are equal if they differ by a positive factor. The given
/// components are kept as definitions, and equality compares the components
/// scaled such that the largest absolute component is one.
#[derive(Clone, Debug, Derivative, Eq)]
#[derivative(Hash, PartialEq)]
pub struct Direction2 {
    #[derivative(Hash = "ignore", PartialEq = "ignore")]
    given: [Exact; 2],
    dx: Exact,
    dy: Exact,
}

impl Direction2 {
    /// Creates a direction. Returns `None` for the zero vector.
    pub fn new(dx: Exact, dy: Exact) -> Option<Self> {
        let given = [dx, dy];
        let [dx, dy] = kernel::normalized(given.clone())?;
        Some(Direction2 { given, dx, dy })
    }

    pub fn dx(&self) -> &Exact {
        &self.dx
    }

    pub fn dy(&self) -> &Exact {
        &self.dy
    }

    pub fn to_vector(&self) -> Vector2 {
        Vector2::new(self.dx.clone(), self.dy.clone())
    }
}

impl Primitive for Direction2 {
    type Dimension = U2;

    const KIND: Kind = Kind::Direction;
    const DEFINITIONS: &'static [&'static str] = &["dx", "dy"];

    fn definitions(&self) -> Definitions {
        self.given.iter().cloned().collect()
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [dx, dy] = kernel::definition_slice::<2>(definitions)?;
        Direction2::new(dx.clone(), dy.clone())
    }
}

/// Oriented line `ax + by + c = 0`.
///
/// Lines compare by their coefficients scaled such that the largest absolute
/// normal component is one.
#[derive(Clone, Debug, Derivative, Eq)]
#[derivative(Hash, PartialEq)]
pub struct Line2 {
    #[derivative(Hash = "ignore", PartialEq = "ignore")]
    given: [Exact; 3],
    a: Exact,
    b: Exact,
    c: Exact,
}

impl Line2 {
    /// Creates a line from its coefficients. Returns `None` if both `a` and
    /// `b` are zero.
    pub fn new(a: Exact, b: Exact, c: Exact) -> Option<Self> {
        let scale = a.abs().max(b.abs());
        if scale.is_zero() {
            return None;
        }
        let given = [a, b, c];
        let [a, b, c] = given.clone().map(|value| value / &scale);
        Some(Line2 { given, a, b, c })
    }

    pub fn through(p: &Point2, q: &Point2) -> Option<Self> {
        let a = &p.y - &q.y;
        let b = &q.x - &p.x;
        let c = (&p.x * &q.y) - (&p.y * &q.x);
        Line2::new(a, b, c)
    }

    pub fn coefficients(&self) -> [&Exact; 3] {
        [&self.a, &self.b, &self.c]
    }

    fn evaluate(&self, point: &Point2) -> Exact {
        (&self.a * &point.x) + (&self.b * &point.y) + &self.c
    }
}

impl Primitive for Line2 {
    type Dimension = U2;

    const KIND: Kind = Kind::Line;
    const DEFINITIONS: &'static [&'static str] = &["a", "b", "c"];

    fn definitions(&self) -> Definitions {
        self.given.iter().cloned().collect()
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [a, b, c] = kernel::definition_slice::<3>(definitions)?;
        Line2::new(a.clone(), b.clone(), c.clone())
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Ray2 {
    source: Point2,
    direction: Direction2,
}

impl Ray2 {
    pub fn new(source: Point2, direction: Direction2) -> Self {
        Ray2 { source, direction }
    }

    pub fn source(&self) -> &Point2 {
        &self.source
    }

    pub fn direction(&self) -> &Direction2 {
        &self.direction
    }
}

impl Primitive for Ray2 {
    type Dimension = U2;

    const KIND: Kind = Kind::Ray;
    const DEFINITIONS: &'static [&'static str] = &["x", "y", "dx", "dy"];

    fn definitions(&self) -> Definitions {
        let [dx, dy] = &self.direction.given;
        smallvec![
            self.source.x.clone(),
            self.source.y.clone(),
            dx.clone(),
            dy.clone(),
        ]
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x, y, dx, dy] = kernel::definition_slice::<4>(definitions)?;
        Some(Ray2::new(
            Point2::new(x.clone(), y.clone()),
            Direction2::new(dx.clone(), dy.clone())?,
        ))
    }
}

/// Directed segment. Segments with coincident endpoints are degenerate but
/// valid.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Segment2 {
    source: Point2,
    target: Point2,
}

impl Segment2 {
    pub fn new(source: Point2, target: Point2) -> Self {
        Segment2 { source, target }
    }

    pub fn source(&self) -> &Point2 {
        &self.source
    }

    pub fn target(&self) -> &Point2 {
        &self.target
    }

    pub fn is_degenerate(&self) -> bool {
        self.source == self.target
    }
}

impl Bounded for Segment2 {
    type Bbox = Bbox2;

    fn bbox(&self) -> Option<Self::Bbox> {
        Some(kernel::bbox_of(
            [&self.source, &self.target]
                .iter()
                .map(|point| [&point.x, &point.y]),
        ))
    }
}

impl Primitive for Segment2 {
    type Dimension = U2;

    const KIND: Kind = Kind::Segment;
    const DEFINITIONS: &'static [&'static str] = &["x0", "y0", "x1", "y1"];

    fn definitions(&self) -> Definitions {
        smallvec![
            self.source.x.clone(),
            self.source.y.clone(),
            self.target.x.clone(),
            self.target.y.clone(),
        ]
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x0, y0, x1, y1] = kernel::definition_slice::<4>(definitions)?;
        Some(Segment2::new(
            Point2::new(x0.clone(), y0.clone()),
            Point2::new(x1.clone(), y1.clone()),
        ))
    }
}

/// Triangle with its vertices rotated such that the smallest vertex comes
/// first. Rotation preserves orientation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Triangle2 {
    vertices: [Point2; 3],
}

impl Triangle2 {
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Triangle2 {
            vertices: kernel::smallest_rotation([a, b, c]),
        }
    }

    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    pub fn orientation(&self) -> Ordering {
        let [a, b, c] = &self.vertices;
        orientation(a, b, c)
    }

    pub fn is_degenerate(&self) -> bool {
        self.orientation() == Ordering::Equal
    }

    fn edges(&self) -> impl '_ + Iterator<Item = (&Point2, &Point2)> {
        (0..3).map(move |index| (&self.vertices[index], &self.vertices[(index + 1) % 3]))
    }
}

impl Bounded for Triangle2 {
    type Bbox = Bbox2;

    fn bbox(&self) -> Option<Self::Bbox> {
        Some(kernel::bbox_of(
            self.vertices.iter().map(|point| [&point.x, &point.y]),
        ))
    }
}

impl Primitive for Triangle2 {
    type Dimension = U2;

    const KIND: Kind = Kind::Triangle;
    const DEFINITIONS: &'static [&'static str] = &["x0", "y0", "x1", "y1", "x2", "y2"];

    fn definitions(&self) -> Definitions {
        self.vertices
            .iter()
            .flat_map(|point| [point.x.clone(), point.y.clone()])
            .collect()
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x0, y0, x1, y1, x2, y2] = kernel::definition_slice::<6>(definitions)?;
        Some(Triangle2::new(
            Point2::new(x0.clone(), y0.clone()),
            Point2::new(x1.clone(), y1.clone()),
            Point2::new(x2.clone(), y2.clone()),
        ))
    }
}

/// Circle given by its center and squared radius.
///
/// A circle is a curve: only points on its boundary lie on it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Circle2 {
    center: Point2,
    squared_radius: Exact,
}

impl Circle2 {
    /// Creates a circle. Returns `None` for a negative squared radius.
    pub fn new(center: Point2, squared_radius: Exact) -> Option<Self> {
        if squared_radius.is_negative() {
            None
        }
        else {
            Some(Circle2 {
                center,
                squared_radius,
            })
        }
    }

    pub fn center(&self) -> &Point2 {
        &self.center
    }

    pub fn squared_radius(&self) -> &Exact {
        &self.squared_radius
    }
}

impl Bounded for Circle2 {
    type Bbox = Bbox2;

    fn bbox(&self) -> Option<Self::Bbox> {
        let radius = exact::to_f64(&self.squared_radius).sqrt();
        let x = exact::to_f64(&self.center.x);
        let y = exact::to_f64(&self.center.y);
        Bbox2::new([x - radius, y - radius], [x + radius, y + radius])
    }
}

impl Primitive for Circle2 {
    type Dimension = U2;

    const KIND: Kind = Kind::Circle;
    const DEFINITIONS: &'static [&'static str] = &["x", "y", "r2"];

    fn definitions(&self) -> Definitions {
        smallvec![
            self.center.x.clone(),
            self.center.y.clone(),
            self.squared_radius.clone(),
        ]
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [x, y, r2] = kernel::definition_slice::<3>(definitions)?;
        Circle2::new(Point2::new(x.clone(), y.clone()), r2.clone())
    }
}

/// Axis-aligned rectangle stored as its minimum and maximum corners.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IsoRect {
    min: Point2,
    max: Point2,
}

impl IsoRect {
    /// Creates a rectangle from any two opposite corners.
    pub fn new(p: Point2, q: Point2) -> Self {
        let (xmin, xmax) = if p.x <= q.x { (p.x, q.x) } else { (q.x, p.x) };
        let (ymin, ymax) = if p.y <= q.y { (p.y, q.y) } else { (q.y, p.y) };
        IsoRect {
            min: Point2::new(xmin, ymin),
            max: Point2::new(xmax, ymax),
        }
    }

    pub fn min(&self) -> &Point2 {
        &self.min
    }

    pub fn max(&self) -> &Point2 {
        &self.max
    }
}

impl Bounded for IsoRect {
    type Bbox = Bbox2;

    fn bbox(&self) -> Option<Self::Bbox> {
        Some(kernel::bbox_of(
            [&self.min, &self.max].iter().map(|point| [&point.x, &point.y]),
        ))
    }
}

impl Primitive for IsoRect {
    type Dimension = U2;

    const KIND: Kind = Kind::IsoRect;
    const DEFINITIONS: &'static [&'static str] = &["xmin", "ymin", "xmax", "ymax"];

    fn definitions(&self) -> Definitions {
        smallvec![
            self.min.x.clone(),
            self.min.y.clone(),
            self.max.x.clone(),
            self.max.y.clone(),
        ]
    }

    fn from_definitions(definitions: &[Exact]) -> Option<Self> {
        let [xmin, ymin, xmax, ymax] = kernel::definition_slice::<4>(definitions)?;
        Some(IsoRect::new(
            Point2::new(xmin.clone(), ymin.clone()),
            Point2::new(xmax.clone(), ymax.clone()),
        ))
    }
}

pub(in crate::kernel) fn orientation(a: &Point2, b: &Point2, c: &Point2) -> Ordering {
    b.difference(a)
        .perp_dot(&c.difference(a))
        .cmp(&Exact::zero())
}

fn segment_contains(source: &Point2, target: &Point2, point: &Point2) -> bool {
    if source == target {
        return point == source;
    }
    let d = target.difference(source);
    let v = point.difference(source);
    if !d.perp_dot(&v).is_zero() {
        return false;
    }
    let t = v.dot(&d);
    !t.is_negative() && t <= d.squared_length()
}

fn segment_squared_distance(source: &Point2, target: &Point2, point: &Point2) -> Exact {
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
        let cross = d.perp_dot(&v);
        (&cross * &cross) / dd
    }
}

impl Intersects<Point2> for Point2 {
    fn intersects(&self, other: &Point2) -> bool {
        self == other
    }
}

impl Intersects<Line2> for Point2 {
    fn intersects(&self, line: &Line2) -> bool {
        line.evaluate(self).is_zero()
    }
}

impl Intersects<Ray2> for Point2 {
    fn intersects(&self, ray: &Ray2) -> bool {
        let d = ray.direction.to_vector();
        let v = self.difference(&ray.source);
        d.perp_dot(&v).is_zero() && !v.dot(&d).is_negative()
    }
}

impl Intersects<Segment2> for Point2 {
    fn intersects(&self, segment: &Segment2) -> bool {
        segment_contains(&segment.source, &segment.target, self)
    }
}

impl Intersects<Triangle2> for Point2 {
    fn intersects(&self, triangle: &Triangle2) -> bool {
        let orientation = triangle.orientation();
        if orientation == Ordering::Equal {
            triangle
                .edges()
                .any(|(source, target)| segment_contains(source, target, self))
        }
        else {
            triangle
                .edges()
                .all(|(source, target)| self::orientation(source, target, self) != orientation.reverse())
        }
    }
}

impl Intersects<Circle2> for Point2 {
    fn intersects(&self, circle: &Circle2) -> bool {
        self.difference(&circle.center).squared_length() == circle.squared_radius
    }
}

impl Intersects<IsoRect> for Point2 {
    fn intersects(&self, rect: &IsoRect) -> bool {
        rect.min.x <= self.x && self.x <= rect.max.x && rect.min.y <= self.y && self.y <= rect.max.y
    }
}

impl SquaredDistance<Point2> for Point2 {
    fn squared_distance(&self, other: &Point2) -> Exact {
        self.difference(other).squared_length()
    }
}

impl SquaredDistance<Line2> for Point2 {
    fn squared_distance(&self, line: &Line2) -> Exact {
        let value = line.evaluate(self);
        (&value * &value) / ((&line.a * &line.a) + (&line.b * &line.b))
    }
}

impl SquaredDistance<Ray2> for Point2 {
    fn squared_distance(&self, ray: &Ray2) -> Exact {
        let d = ray.direction.to_vector();
        let v = self.difference(&ray.source);
        if v.dot(&d).is_positive() {
            let cross = d.perp_dot(&v);
            (&cross * &cross) / d.squared_length()
        }
        else {
            v.squared_length()
        }
    }
}

impl SquaredDistance<Segment2> for Point2 {
    fn squared_distance(&self, segment: &Segment2) -> Exact {
        segment_squared_distance(&segment.source, &segment.target, self)
    }
}

impl SquaredDistance<Triangle2> for Point2 {
    fn squared_distance(&self, triangle: &Triangle2) -> Exact {
        if !triangle.is_degenerate() && self.intersects(triangle) {
            return Exact::zero();
        }
        triangle
            .edges()
            .map(|(source, target)| segment_squared_distance(source, target, self))
            .min()
            .unwrap_or_else(Exact::zero)
    }
}

#[cfg(test)]
mod tests {
    use num::Zero;
    use std::cmp::Ordering;

    use crate::exact::{self, Exact};
    use crate::kernel::e2::*;
    use crate::kernel::query::{Intersects, SquaredDistance};
    use crate::kernel::{Bounded, Element, Primitive};

    fn n(value: i64) -> Exact {
        exact::from_i64(value)
    }

    fn p(x: i64, y: i64) -> Point2 {
        Point2::new(n(x), n(y))
    }

    #[test]
    fn canonical_directions_and_lines() {
        assert_eq!(
            Direction2::new(n(2), n(4)).unwrap(),
            Direction2::new(n(1), n(2)).unwrap(),
        );
        assert_ne!(
            Direction2::new(n(1), n(2)).unwrap(),
            Direction2::new(n(-1), n(-2)).unwrap(),
        );
        assert_eq!(None, Direction2::new(n(0), n(0)));
        assert_eq!(
            Line2::new(n(2), n(-4), n(6)).unwrap(),
            Line2::new(n(1), n(-2), n(3)).unwrap(),
        );
        assert_eq!(None, Line2::new(n(0), n(0), n(1)));
    }

    #[test]
    fn keep_given_definitions() {
        let line = Line2::new(n(2), n(-4), n(6)).unwrap();
        let direction = Direction2::new(n(1), n(3)).unwrap();
        let ray = Ray2::new(p(1, 1), direction.clone());

        assert_eq!(vec![n(2), n(-4), n(6)], line.definitions().to_vec());
        assert_eq!(vec![n(1), n(3)], direction.definitions().to_vec());
        assert_eq!(vec![n(1), n(1), n(1), n(3)], ray.definitions().to_vec());
        assert_eq!(&[1.0, 3.0], direction.to_row().as_slice());
        assert_eq!(
            ray,
            Ray2::new(p(1, 1), Direction2::new(n(2), n(6)).unwrap()),
        );
    }

    #[test]
    fn canonical_triangle_rotation() {
        let a = Triangle2::new(p(0, 0), p(1, 0), p(0, 1));
        let b = Triangle2::new(p(1, 0), p(0, 1), p(0, 0));
        let c = Triangle2::new(p(0, 0), p(0, 1), p(1, 0));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(Ordering::Greater, a.orientation());
        assert_eq!(Ordering::Less, c.orientation());
    }

    #[test]
    fn point_on_primitives() {
        let segment = Segment2::new(p(0, 0), p(2, 2));
        let ray = Ray2::new(p(0, 0), Direction2::new(n(1), n(1)).unwrap());
        let line = Line2::through(&p(0, 0), &p(1, 1)).unwrap();

        assert!(p(1, 1).intersects(&segment));
        assert!(!p(3, 3).intersects(&segment));
        assert!(p(3, 3).intersects(&ray));
        assert!(!p(-1, -1).intersects(&ray));
        assert!(p(-1, -1).intersects(&line));
        assert!(!p(1, 0).intersects(&line));
        assert!(p(0, 0).intersects(&Segment2::new(p(0, 0), p(0, 0))));
        assert!(!p(1, 0).intersects(&Segment2::new(p(0, 0), p(0, 0))));
    }

    #[test]
    fn point_in_regions() {
        let triangle = Triangle2::new(p(0, 0), p(4, 0), p(0, 4));
        let rect = IsoRect::new(p(2, 2), p(0, 0));
        let circle = Circle2::new(p(0, 0), n(25)).unwrap();

        assert!(p(1, 1).intersects(&triangle));
        assert!(p(2, 2).intersects(&triangle));
        assert!(!p(3, 3).intersects(&triangle));
        assert!(p(2, 0).intersects(&rect));
        assert!(!p(3, 0).intersects(&rect));
        assert!(p(3, 4).intersects(&circle));
        assert!(!p(0, 0).intersects(&circle));

        let degenerate = Triangle2::new(p(0, 0), p(1, 1), p(2, 2));
        assert!(degenerate.is_degenerate());
        assert!(p(2, 2).intersects(&degenerate));
        assert!(!p(1, 0).intersects(&degenerate));
    }

    #[test]
    fn squared_distances() {
        let segment = Segment2::new(p(0, 0), p(2, 0));
        let triangle = Triangle2::new(p(0, 0), p(4, 0), p(0, 4));
        let line = Line2::new(n(1), n(1), n(0)).unwrap();
        let ray = Ray2::new(p(0, 0), Direction2::new(n(1), n(0)).unwrap());

        assert_eq!(n(25), p(3, 4).squared_distance(&p(0, 0)));
        assert_eq!(n(1), p(1, 1).squared_distance(&segment));
        assert_eq!(n(2), p(3, 1).squared_distance(&segment));
        assert_eq!(Exact::zero(), p(1, 1).squared_distance(&triangle));
        assert_eq!(n(1), p(-1, 0).squared_distance(&triangle));
        assert_eq!(n(2), p(1, 1).squared_distance(&line));
        assert_eq!(n(4), p(-2, 0).squared_distance(&ray));
        assert_eq!(n(9), p(5, 3).squared_distance(&ray));
    }

    #[test]
    fn bounding_boxes() {
        let circle = Circle2::new(p(1, 1), n(4)).unwrap();
        let bbox = circle.bbox().unwrap();

        assert_eq!((-1.0, 3.0), (bbox.min(0), bbox.max(1)));
        assert_eq!(None, Line2::new(n(1), n(0), n(0)).unwrap().definition(3));
        assert_eq!(None, Vector2::new(n(1), n(1)).definition(2));
    }
}
