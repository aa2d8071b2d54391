use crate::bbox::Bbox;
use crate::geometry::GeometryVector;
use crate::table::Matrix;
use crate::{GeometryError, TypeTag};

/// Container of bounding boxes.
pub type BboxVector<const N: usize> = GeometryVector<Bbox<N>>;

/// Bounding box container of either dimensionality.
///
/// Binary operations require both operands to have the same dimensionality
/// and fail with `KindMismatch` otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyBbox {
    Bbox2(BboxVector<2>),
    Bbox3(BboxVector<3>),
}

macro_rules! with_bbox {
    ($bbox:expr, $vector:ident => $body:expr) => {
        match $bbox {
            AnyBbox::Bbox2($vector) => $body,
            AnyBbox::Bbox3($vector) => $body,
        }
    };
}

macro_rules! with_bbox_pair {
    ($lhs:expr, $rhs:expr, ($a:ident, $b:ident) => $body:expr) => {
        match ($lhs, $rhs) {
            (AnyBbox::Bbox2($a), AnyBbox::Bbox2($b)) => Ok($body),
            (AnyBbox::Bbox3($a), AnyBbox::Bbox3($b)) => Ok($body),
            (lhs, rhs) => Err(GeometryError::KindMismatch {
                expected: lhs.type_tag(),
                actual: rhs.type_tag(),
            }),
        }
    };
}

impl AnyBbox {
    pub fn len(&self) -> usize {
        with_bbox!(self, vector => vector.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn type_tag(&self) -> TypeTag {
        with_bbox!(self, vector => vector.type_tag())
    }

    pub fn dimensions(&self) -> usize {
        self.type_tag().dimensions
    }

    pub fn as_numeric(&self) -> Matrix<Option<f64>> {
        with_bbox!(self, vector => vector.as_numeric())
    }

    pub fn format(&self) -> Vec<String> {
        with_bbox!(self, vector => vector.format())
    }

    pub fn equals(&self, other: &AnyBbox) -> Result<Vec<Option<bool>>, GeometryError> {
        with_bbox_pair!(self, other, (a, b) => a.equals(b))
    }

    /// Unites boxes pairwise.
    pub fn add(&self, other: &AnyBbox) -> Result<AnyBbox, GeometryError> {
        with_bbox_pair!(self, other, (a, b) => a.add(b).into())
    }

    pub fn overlaps(&self, other: &AnyBbox) -> Result<Vec<Option<bool>>, GeometryError> {
        with_bbox_pair!(self, other, (a, b) => a.overlaps(b))
    }

    pub fn subset(&self, indices: &[Option<usize>]) -> Result<AnyBbox, GeometryError> {
        with_bbox!(self, vector => vector.subset(indices).map(AnyBbox::from))
    }

    pub fn assign(&self, indices: &[Option<usize>], values: &AnyBbox) -> Result<AnyBbox, GeometryError> {
        if indices.len() != values.len() {
            return Err(GeometryError::SizeMismatch {
                expected: indices.len(),
                actual: values.len(),
            });
        }
        with_bbox_pair!(self, values, (a, b) => a.assign(indices, b)?.into())
    }

    pub fn combine(&self, others: &[&AnyBbox]) -> Result<AnyBbox, GeometryError> {
        let mut output = self.clone();
        for other in others {
            output = with_bbox_pair!(&output, *other, (a, b) => a.combine(Some(b)).into())?;
        }
        Ok(output)
    }

    pub fn unique(&self) -> AnyBbox {
        with_bbox!(self, vector => vector.unique().into())
    }

    pub fn duplicated(&self) -> Vec<bool> {
        with_bbox!(self, vector => vector.duplicated())
    }

    pub fn any_duplicated(&self) -> Option<usize> {
        with_bbox!(self, vector => vector.any_duplicated())
    }

    /// Matches boxes against a table. If the table has a different
    /// dimensionality, nothing matches.
    pub fn matches(&self, table: &AnyBbox) -> Vec<Option<usize>> {
        with_bbox_pair!(self, table, (a, b) => a.matches(b)).unwrap_or_else(|_| vec![None; self.len()])
    }

    pub fn is_na(&self) -> Vec<bool> {
        with_bbox!(self, vector => vector.is_na())
    }

    pub fn any_na(&self) -> bool {
        with_bbox!(self, vector => vector.any_na())
    }

    pub fn sum(&self, na_rm: bool) -> AnyBbox {
        with_bbox!(self, vector => vector.sum(na_rm).into())
    }

    pub fn cumsum(&self) -> AnyBbox {
        with_bbox!(self, vector => vector.cumsum().into())
    }
}

impl From<BboxVector<2>> for AnyBbox {
    fn from(vector: BboxVector<2>) -> Self {
        AnyBbox::Bbox2(vector)
    }
}

impl From<BboxVector<3>> for AnyBbox {
    fn from(vector: BboxVector<3>) -> Self {
        AnyBbox::Bbox3(vector)
    }
}

#[cfg(test)]
mod tests {
    use crate::bbox::{AnyBbox, Bbox2, Bbox3, BboxVector};
    use crate::{GeometryError, Kind, TypeTag};

    fn boxes2() -> AnyBbox {
        BboxVector::new(vec![
            Bbox2::new([0.0, 0.0], [1.0, 1.0]),
            None,
            Bbox2::new([2.0, 2.0], [3.0, 3.0]),
        ])
        .into()
    }

    fn boxes3() -> AnyBbox {
        BboxVector::new(vec![Bbox3::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0])]).into()
    }

    #[test]
    fn numeric_min_then_max() {
        let numeric = boxes2().as_numeric();

        assert_eq!(4, numeric.ncol());
        assert_eq!(&[Some(0.0), Some(0.0), Some(1.0), Some(1.0)], numeric.row(0));
        assert_eq!(&[None, None, None, None], numeric.row(1));
        assert_eq!(vec!["<<0, 0>, <1, 1>>", "<NA>", "<<2, 2>, <3, 3>>"], boxes2().format());
    }

    #[test]
    fn reject_mixed_dimensions() {
        let error = GeometryError::KindMismatch {
            expected: TypeTag::new(Kind::Bbox, 2),
            actual: TypeTag::new(Kind::Bbox, 3),
        };

        assert_eq!(Err(error.clone()), boxes2().add(&boxes3()));
        assert_eq!(Err(error.clone()), boxes2().overlaps(&boxes3()));
        assert_eq!(Err(error), boxes2().combine(&[&boxes3()]));
        assert_eq!(vec![None, None, None], boxes2().matches(&boxes3()));
    }

    #[test]
    fn overlap_and_union() {
        let window: AnyBbox = BboxVector::new(vec![Bbox2::new([0.5, 0.5], [2.0, 2.0])]).into();

        assert_eq!(Ok(vec![Some(true), None, Some(true)]), boxes2().overlaps(&window));
        assert_eq!(
            AnyBbox::from(BboxVector::new(vec![Bbox2::new([0.0, 0.0], [3.0, 3.0])])),
            boxes2().sum(true),
        );
        assert_eq!(
            AnyBbox::from(BboxVector::<2>::new(vec![None])),
            boxes2().sum(false),
        );
        assert_eq!(
            Ok(AnyBbox::from(BboxVector::new(vec![
                Bbox2::new([0.0, 0.0], [2.0, 2.0]),
                None,
                Bbox2::new([0.5, 0.5], [3.0, 3.0]),
            ]))),
            boxes2().add(&window),
        );
    }

    #[test]
    fn assign_checks_length_first() {
        assert_eq!(
            Err(GeometryError::SizeMismatch {
                expected: 2,
                actual: 1,
            }),
            boxes2().assign(&[Some(1), Some(2)], &boxes3()),
        );
        assert_eq!(4, boxes2().assign(&[Some(4)], &boxes2().subset(&[Some(1)]).unwrap()).unwrap().len());
    }
}
