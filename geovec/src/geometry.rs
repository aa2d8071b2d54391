//! Homogeneous geometry containers.
//!
//! [`GeometryVector`] is an ordered sequence of elements of a single kind and
//! dimensionality, any of which may be missing (NA). Operations never mutate a
//! container; derived containers are new values.
//!
//! Binary elementwise operations recycle the shorter operand by modulo
//! indexing, so the output has the length of the longer operand. If either
//! operand is empty, the output is empty.
//!
//! # Examples
//!
//! Reading points from a numeric table and sorting them:
//!
//! ```rust
//! use geovec::geometry::GeometryVector;
//! use geovec::kernel::Point2;
//! use geovec::table::Matrix;
//!
//! let table = Matrix::from_rows(
//!     2,
//!     vec![
//!         vec![Some(2.0), Some(0.0)],
//!         vec![None, Some(1.0)],
//!         vec![Some(1.0), Some(5.0)],
//!     ],
//! )
//! .unwrap();
//! let points = GeometryVector::<Point2>::from_table(&table).unwrap();
//! let sorted = points.sort(false, Some(true));
//!
//! assert_eq!(vec!["<x:1, y:5>", "<x:2, y:0>", "<NA>"], sorted.format());
//! ```
//!
//! [`GeometryVector`]: crate::geometry::GeometryVector

use derivative::Derivative;
use num::Zero;
use std::iter::FromIterator;

use crate::bbox::Bbox;
use crate::exact::{self, Exact};
use crate::kernel::{Bounded, Element, EuclideanSpace, Primitive, VectorSpace};
use crate::table::Matrix;
use crate::{order, storage, GeometryError, TypeTag};

/// Ordered, NA-aware sequence of elements of one kind.
#[derive(Clone, Debug, Derivative, Eq, Hash, PartialEq)]
#[derivative(Default(bound = ""))]
pub struct GeometryVector<T>
where
    T: Element,
{
    storage: Vec<Option<T>>,
}

impl<T> GeometryVector<T>
where
    T: Element,
{
    pub fn new(storage: Vec<Option<T>>) -> Self {
        GeometryVector { storage }
    }

    /// Reads a container from a numeric table with one row per element.
    ///
    /// Rows with a missing or NaN cell, and rows that do not describe a valid
    /// element, are read as NA. Primitives are not valid with infinite
    /// coordinates, while bounding boxes are.
    ///
    /// # Errors
    ///
    /// Returns an error if the table does not have exactly one column per
    /// definition of `T`.
    pub fn from_table(table: &Matrix<Option<f64>>) -> Result<Self, GeometryError> {
        let columns = T::columns().len();
        if table.ncol() != columns {
            return Err(GeometryError::SizeMismatch {
                expected: columns,
                actual: table.ncol(),
            });
        }
        Ok(table
            .rows()
            .enumerate()
            .map(|(index, row)| {
                let element = row
                    .iter()
                    .map(|cell| cell.filter(|value| !value.is_nan()))
                    .collect::<Option<Vec<_>>>()
                    .and_then(|row| T::from_row(&row));
                if element.is_none() {
                    log::trace!("row {} of {} table read as NA", index + 1, T::type_tag());
                }
                element
            })
            .collect())
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn type_tag(&self) -> TypeTag {
        T::type_tag()
    }

    pub fn dimensions(&self) -> usize {
        T::type_tag().dimensions
    }

    pub fn columns(&self) -> &'static [&'static str] {
        T::columns()
    }

    pub fn as_slice(&self) -> &[Option<T>] {
        self.storage.as_slice()
    }

    pub fn into_inner(self) -> Vec<Option<T>> {
        self.storage
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl '_ + ExactSizeIterator<Item = Option<&T>> {
        self.storage.iter().map(Option::as_ref)
    }

    /// Writes the container as a numeric table with one row per element.
    ///
    /// Every cell of a row describing an NA element is `None`.
    pub fn as_numeric(&self) -> Matrix<Option<f64>> {
        let columns = T::columns().len();
        let mut data = Vec::with_capacity(self.len() * columns);
        for element in self.storage.iter() {
            match element {
                Some(element) => data.extend(element.to_row().into_iter().map(Some)),
                None => data.extend((0..columns).map(|_| None)),
            }
        }
        Matrix::from_fn(self.len(), columns, |row, column| data[(row * columns) + column])
    }

    pub fn format(&self) -> Vec<String> {
        self.storage
            .iter()
            .map(|element| match element {
                Some(element) => element.format(),
                None => "<NA>".to_owned(),
            })
            .collect()
    }

    /// Compares elements for exact equality. NA propagates.
    pub fn equals(&self, other: &Self) -> Vec<Option<bool>> {
        storage::recycle(&self.storage, &other.storage, |a, b| a == b)
    }

    /// Selects elements by one-based index. NA indices select NA.
    pub fn subset(&self, indices: &[Option<usize>]) -> Result<Self, GeometryError> {
        storage::subset(&self.storage, indices).map(GeometryVector::new)
    }

    /// Replaces elements at one-based indices with the elements of `values`.
    ///
    /// Indices past the end grow the container, padding with NA.
    pub fn assign(&self, indices: &[Option<usize>], values: &Self) -> Result<Self, GeometryError> {
        storage::assign(&self.storage, indices, &values.storage).map(GeometryVector::new)
    }

    pub fn combine<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut storage = self.storage.clone();
        for other in others {
            storage.extend(other.storage.iter().cloned());
        }
        GeometryVector::new(storage)
    }

    pub fn unique(&self) -> Self {
        GeometryVector::new(storage::unique(&self.storage))
    }

    pub fn duplicated(&self) -> Vec<bool> {
        storage::duplicated(&self.storage)
    }

    pub fn any_duplicated(&self) -> Option<usize> {
        storage::any_duplicated(&self.storage)
    }

    pub fn matches(&self, table: &Self) -> Vec<Option<usize>> {
        storage::matches(&self.storage, &table.storage)
    }

    pub fn is_na(&self) -> Vec<bool> {
        storage::is_na(&self.storage)
    }

    pub fn any_na(&self) -> bool {
        storage::any_na(&self.storage)
    }
}

impl<T> GeometryVector<T>
where
    T: Primitive,
{
    /// Gets the exact values of one definition (column) by its one-based
    /// index.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is zero or past the definitions of `T`.
    pub fn definition(&self, index: usize) -> Result<Vec<Option<Exact>>, GeometryError> {
        let column = index
            .checked_sub(1)
            .filter(|column| *column < T::DEFINITIONS.len())
            .ok_or(GeometryError::IndexOutOfBounds {
                index,
                len: T::DEFINITIONS.len(),
            })?;
        Ok(self
            .storage
            .iter()
            .map(|element| element.as_ref().and_then(|element| element.definition(column)))
            .collect())
    }
}

impl<T> GeometryVector<T>
where
    T: Bounded,
{
    /// Gets the bounding box of each element. Unbounded and NA elements have
    /// no bounding box.
    pub fn bbox(&self) -> GeometryVector<T::Bbox> {
        self.storage
            .iter()
            .map(|element| element.as_ref().and_then(Bounded::bbox))
            .collect()
    }
}

impl<T> GeometryVector<T>
where
    T: Element + Ord,
{
    pub fn sort(&self, decreasing: bool, na_last: Option<bool>) -> Self {
        GeometryVector::new(order::sort(&self.storage, decreasing, na_last))
    }

    pub fn rank(&self) -> Vec<usize> {
        order::rank(&self.storage)
    }

    pub fn min(&self, na_rm: bool) -> Self {
        GeometryVector::new(vec![order::min(&self.storage, na_rm)])
    }

    pub fn max(&self, na_rm: bool) -> Self {
        GeometryVector::new(vec![order::max(&self.storage, na_rm)])
    }

    pub fn cummin(&self) -> Self {
        GeometryVector::new(order::cummin(&self.storage))
    }

    pub fn cummax(&self) -> Self {
        GeometryVector::new(order::cummax(&self.storage))
    }

    pub fn lt(&self, other: &Self) -> Vec<Option<bool>> {
        storage::recycle(&self.storage, &other.storage, |a, b| a < b)
    }

    pub fn gt(&self, other: &Self) -> Vec<Option<bool>> {
        storage::recycle(&self.storage, &other.storage, |a, b| a > b)
    }
}

impl<T> GeometryVector<T>
where
    T: Element + Zero,
{
    /// Adds elements pairwise. NA propagates.
    pub fn add(&self, other: &Self) -> Self {
        storage::recycle(&self.storage, &other.storage, |a, b| a.clone() + b.clone()).into()
    }

    /// Sums all elements, starting from the additive identity. The sum of an
    /// empty container is the identity.
    pub fn sum(&self, na_rm: bool) -> Self {
        GeometryVector::new(vec![storage::fold(
            &self.storage,
            na_rm,
            Some(T::zero()),
            |sum, element| sum + element.clone(),
        )])
    }

    pub fn cumsum(&self) -> Self {
        storage::scan(&self.storage, |sum, element| sum.clone() + element.clone()).into()
    }
}

impl<T> GeometryVector<T>
where
    T: VectorSpace,
{
    pub fn sub(&self, other: &Self) -> Self {
        storage::recycle(&self.storage, &other.storage, |a, b| a.clone() - b.clone()).into()
    }

    pub fn neg(&self) -> Self {
        self.storage
            .iter()
            .map(|element| element.clone().map(|element| -element))
            .collect()
    }

    pub fn dot(&self, other: &Self) -> Vec<Option<Exact>> {
        storage::recycle(&self.storage, &other.storage, |a, b| a.dot(b))
    }

    pub fn scale(&self, factors: &[Option<Exact>]) -> Self {
        storage::recycle(&self.storage, factors, |vector, factor| vector.scale(factor)).into()
    }

    /// Divides vectors by scalars. Division by zero yields NA.
    pub fn divide(&self, divisors: &[Option<Exact>]) -> Self {
        storage::recycle_filter(&self.storage, divisors, |vector, divisor| {
            if divisor.is_zero() {
                None
            }
            else {
                Some(vector.scale(&divisor.recip()))
            }
        })
        .into()
    }

    /// Scales vectors by doubles. Non-finite factors yield NA.
    pub fn scale_f64(&self, factors: &[Option<f64>]) -> Self {
        self.scale(&exact_factors(factors))
    }

    pub fn divide_f64(&self, divisors: &[Option<f64>]) -> Self {
        self.divide(&exact_factors(divisors))
    }
}

impl<T> GeometryVector<T>
where
    T: EuclideanSpace,
{
    /// Translates points by vectors.
    pub fn translate(&self, vectors: &GeometryVector<T::Vector>) -> Self {
        storage::recycle(&self.storage, &vectors.storage, |point, vector| point.translate(vector)).into()
    }

    /// Translates points by the opposites of vectors.
    pub fn translate_back(&self, vectors: &GeometryVector<T::Vector>) -> Self {
        storage::recycle(&self.storage, &vectors.storage, |point, vector| {
            point.translate(&-vector.clone())
        })
        .into()
    }

    /// Gets the vectors from the points of `other` to the points of `self`.
    pub fn difference(&self, other: &Self) -> GeometryVector<T::Vector> {
        storage::recycle(&self.storage, &other.storage, |a, b| a.difference(b)).into()
    }
}

impl<const N: usize> GeometryVector<Bbox<N>> {
    /// Determines which boxes overlap. NA propagates.
    pub fn overlaps(&self, other: &Self) -> Vec<Option<bool>> {
        storage::recycle(&self.storage, &other.storage, |a, b| a.overlaps(b))
    }

    /// Gets the minimum of each box along an axis.
    pub fn axis_min(&self, axis: usize) -> Vec<Option<f64>> {
        self.storage
            .iter()
            .map(|bbox| bbox.map(|bbox| bbox.min(axis)))
            .collect()
    }

    /// Gets the maximum of each box along an axis.
    pub fn axis_max(&self, axis: usize) -> Vec<Option<f64>> {
        self.storage
            .iter()
            .map(|bbox| bbox.map(|bbox| bbox.max(axis)))
            .collect()
    }
}

impl<T> From<Vec<Option<T>>> for GeometryVector<T>
where
    T: Element,
{
    fn from(storage: Vec<Option<T>>) -> Self {
        GeometryVector::new(storage)
    }
}

impl<T> FromIterator<Option<T>> for GeometryVector<T>
where
    T: Element,
{
    fn from_iter<I>(input: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        GeometryVector::new(input.into_iter().collect())
    }
}

impl<T> FromIterator<T> for GeometryVector<T>
where
    T: Element,
{
    fn from_iter<I>(input: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        GeometryVector::new(input.into_iter().map(Some).collect())
    }
}

fn exact_factors(factors: &[Option<f64>]) -> Vec<Option<Exact>> {
    factors
        .iter()
        .map(|factor| factor.and_then(exact::from_f64))
        .collect()
}
