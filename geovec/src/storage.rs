//! NA-aware algorithms over element storage.
//!
//! Storage is a slice of `Option<T>`, where `None` is a missing (NA) element.
//! These functions implement the container semantics shared by geometry and
//! bounding box vectors: recycling, one-based indexing, uniqueness, and
//! cumulative scans.
//!
//! Indices accepted and returned by this module are one-based. Conversion to
//! zero-based positions happens here and nowhere else.

use ahash::AHashMap;
use std::hash::Hash;

use crate::GeometryError;

/// Gets the length of a recycled binary operation.
///
/// The result is empty if either operand is empty.
pub(in crate) fn recycled_len(lhs: usize, rhs: usize) -> usize {
    if lhs == 0 || rhs == 0 {
        0
    }
    else {
        lhs.max(rhs)
    }
}

/// Applies a binary function elementwise, recycling the shorter operand.
///
/// NA in either operand yields NA without calling `f`.
pub(in crate) fn recycle<L, R, T, F>(lhs: &[Option<L>], rhs: &[Option<R>], mut f: F) -> Vec<Option<T>>
where
    F: FnMut(&L, &R) -> T,
{
    recycle_filter(lhs, rhs, |lhs, rhs| Some(f(lhs, rhs)))
}

/// Like `recycle`, but `f` may itself yield NA.
pub(in crate) fn recycle_filter<L, R, T, F>(
    lhs: &[Option<L>],
    rhs: &[Option<R>],
    mut f: F,
) -> Vec<Option<T>>
where
    F: FnMut(&L, &R) -> Option<T>,
{
    (0..recycled_len(lhs.len(), rhs.len()))
        .map(|index| {
            match (&lhs[index % lhs.len()], &rhs[index % rhs.len()]) {
                (Some(lhs), Some(rhs)) => f(lhs, rhs),
                _ => None,
            }
        })
        .collect()
}

/// Selects elements by one-based index. NA indices select NA.
pub(in crate) fn subset<T>(storage: &[Option<T>], indices: &[Option<usize>]) -> Result<Vec<Option<T>>, GeometryError>
where
    T: Clone,
{
    indices
        .iter()
        .map(|index| match *index {
            Some(index) => position(index, storage.len()).map(|position| storage[position].clone()),
            None => Ok(None),
        })
        .collect()
}

/// Replaces elements at one-based indices.
///
/// Indices past the end grow the storage, and any gap is filled with NA.
///
/// # Errors
///
/// Returns `IndexOutOfBounds` for a zero index or an index too large to grow
/// the storage to.
pub(in crate) fn assign<T>(
    storage: &[Option<T>],
    indices: &[Option<usize>],
    values: &[Option<T>],
) -> Result<Vec<Option<T>>, GeometryError>
where
    T: Clone,
{
    if indices.len() != values.len() {
        return Err(GeometryError::SizeMismatch {
            expected: indices.len(),
            actual: values.len(),
        });
    }
    let mut output = storage.to_vec();
    for (index, value) in indices.iter().zip(values) {
        match *index {
            None => {
                return Err(GeometryError::IndexMissing);
            }
            Some(0) => {
                return Err(GeometryError::IndexOutOfBounds {
                    index: 0,
                    len: storage.len(),
                });
            }
            Some(index) => {
                if index > output.len() {
                    output
                        .try_reserve(index - output.len())
                        .map_err(|_| GeometryError::IndexOutOfBounds {
                            index,
                            len: storage.len(),
                        })?;
                    output.resize(index, None);
                }
                output[index - 1] = value.clone();
            }
        }
    }
    Ok(output)
}

/// Keeps the first occurrence of each distinct element, including NA.
pub(in crate) fn unique<T>(storage: &[Option<T>]) -> Vec<Option<T>>
where
    T: Clone + Eq + Hash,
{
    storage
        .iter()
        .zip(duplicated(storage))
        .filter(|(_, duplicated)| !duplicated)
        .map(|(element, _)| element.clone())
        .collect()
}

/// Flags elements equal to an earlier element. NA is equal to NA.
pub(in crate) fn duplicated<T>(storage: &[Option<T>]) -> Vec<bool>
where
    T: Eq + Hash,
{
    let mut seen = AHashMap::with_capacity(storage.len());
    storage
        .iter()
        .map(|element| seen.insert(element.as_ref(), ()).is_some())
        .collect()
}

/// Finds the one-based position of the first element that recurs later.
///
/// An NA is reported if an NA occurred before it. A non-NA element is reported
/// if an equal element occurs after it.
pub(in crate) fn any_duplicated<T>(storage: &[Option<T>]) -> Option<usize>
where
    T: Eq + Hash,
{
    let mut remaining = AHashMap::<&T, usize>::with_capacity(storage.len());
    for element in storage.iter().flatten() {
        *remaining.entry(element).or_insert(0) += 1;
    }
    let mut na = false;
    for (index, element) in storage.iter().enumerate() {
        match element {
            Some(element) => {
                let count = remaining.entry(element).or_insert(0);
                if *count > 1 {
                    return Some(index + 1);
                }
                *count = 0;
            }
            None => {
                if na {
                    return Some(index + 1);
                }
                na = true;
            }
        }
    }
    None
}

/// Finds the one-based position of the first occurrence of each element in a
/// table. NA elements match the first NA in the table.
pub(in crate) fn matches<T>(storage: &[Option<T>], table: &[Option<T>]) -> Vec<Option<usize>>
where
    T: Eq + Hash,
{
    let mut positions = AHashMap::with_capacity(table.len());
    for (index, element) in table.iter().enumerate() {
        positions.entry(element.as_ref()).or_insert(index + 1);
    }
    storage
        .iter()
        .map(|element| positions.get(&element.as_ref()).copied())
        .collect()
}

/// Computes a cumulative scan. Once an NA is encountered, it and every
/// subsequent output is NA.
pub(in crate) fn scan<T, F>(storage: &[Option<T>], mut f: F) -> Vec<Option<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> T,
{
    let mut accumulator: Option<T> = None;
    let mut na = false;
    storage
        .iter()
        .map(|element| {
            if na {
                return None;
            }
            match element {
                Some(element) => {
                    let next = match accumulator.take() {
                        Some(accumulator) => f(&accumulator, element),
                        None => element.clone(),
                    };
                    accumulator = Some(next.clone());
                    Some(next)
                }
                None => {
                    log::trace!("cumulative scan reached an NA element");
                    na = true;
                    None
                }
            }
        })
        .collect()
}

/// Folds storage into a single value starting from `initial`.
///
/// NA elements are skipped if `na_rm` is `true` and otherwise make the result
/// NA. If `initial` is `None`, the first non-NA element starts the fold and an
/// input without one yields NA.
pub(in crate) fn fold<T, F>(storage: &[Option<T>], na_rm: bool, initial: Option<T>, mut f: F) -> Option<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let mut accumulator = initial;
    for element in storage {
        match element {
            Some(element) => {
                accumulator = Some(match accumulator.take() {
                    Some(accumulator) => f(accumulator, element),
                    None => element.clone(),
                });
            }
            None => {
                if !na_rm {
                    return None;
                }
            }
        }
    }
    accumulator
}

pub(in crate) fn is_na<T>(storage: &[Option<T>]) -> Vec<bool> {
    storage.iter().map(Option::is_none).collect()
}

pub(in crate) fn any_na<T>(storage: &[Option<T>]) -> bool {
    storage.iter().any(Option::is_none)
}

// Converts a one-based index into a position.
fn position(index: usize, len: usize) -> Result<usize, GeometryError> {
    if index == 0 || index > len {
        Err(GeometryError::IndexOutOfBounds { index, len })
    }
    else {
        Ok(index - 1)
    }
}

#[cfg(test)]
mod tests {
    use crate::storage;
    use crate::GeometryError;

    #[test]
    fn recycle_shorter_operand() {
        let output = storage::recycle(&[Some(1), Some(2), None, Some(4)], &[Some(10), Some(20)], |a, b| a + b);

        assert_eq!(vec![Some(11), Some(22), None, Some(24)], output);
        assert!(storage::recycle(&[Some(1)], &[] as &[Option<i32>], |a, b| a + b).is_empty());
    }

    #[test]
    fn subset_one_based() {
        let storage = [Some('a'), None, Some('c')];

        assert_eq!(
            Ok(vec![Some('c'), None, Some('a'), None]),
            storage::subset(&storage, &[Some(3), None, Some(1), Some(2)]),
        );
        assert_eq!(
            Err(GeometryError::IndexOutOfBounds { index: 4, len: 3 }),
            storage::subset(&storage, &[Some(4)]),
        );
        assert_eq!(
            Err(GeometryError::IndexOutOfBounds { index: 0, len: 3 }),
            storage::subset(&storage, &[Some(0)]),
        );
    }

    #[test]
    fn assign_with_padding() {
        let storage = [Some('a'), Some('b')];

        assert_eq!(
            Ok(vec![Some('z'), Some('b'), None, Some('y')]),
            storage::assign(&storage, &[Some(1), Some(4)], &[Some('z'), Some('y')]),
        );
        assert_eq!(
            Err(GeometryError::SizeMismatch {
                expected: 1,
                actual: 2,
            }),
            storage::assign(&storage, &[Some(1)], &[Some('z'), Some('y')]),
        );
        assert_eq!(
            Err(GeometryError::IndexMissing),
            storage::assign(&storage, &[None], &[Some('z')]),
        );
        assert_eq!(
            Err(GeometryError::IndexOutOfBounds {
                index: usize::MAX,
                len: 2,
            }),
            storage::assign(&storage, &[Some(usize::MAX)], &[Some('z')]),
        );
    }

    #[test]
    fn unique_and_duplicated() {
        let storage = [Some(1), None, Some(2), Some(1), None, Some(3)];

        assert_eq!(
            vec![false, false, false, true, true, false],
            storage::duplicated(&storage),
        );
        assert_eq!(vec![Some(1), None, Some(2), Some(3)], storage::unique(&storage));
        let unique = storage::unique(&storage);
        assert_eq!(unique, storage::unique(&unique));
    }

    #[test]
    fn any_duplicated_forward_scan() {
        assert_eq!(Some(1), storage::any_duplicated(&[Some(1), Some(2), Some(1)]));
        assert_eq!(Some(2), storage::any_duplicated(&[Some(1), Some(2), Some(3), Some(2)]));
        assert_eq!(Some(3), storage::any_duplicated(&[None, Some(1), None]));
        assert_eq!(None, storage::any_duplicated(&[Some(1), None, Some(2)]));
        assert_eq!(None, storage::any_duplicated::<i32>(&[]));
    }

    #[test]
    fn match_first_positions() {
        let table = [Some('b'), Some('a'), None, Some('a')];

        assert_eq!(
            vec![Some(2), Some(1), Some(3), None],
            storage::matches(&[Some('a'), Some('b'), None, Some('z')], &table),
        );
        assert_eq!(vec![None], storage::matches(&[None], &[Some('a')]));
    }

    #[test]
    fn sticky_scan() {
        assert_eq!(
            vec![Some(1), Some(3), None, None],
            storage::scan(&[Some(1), Some(2), None, Some(4)], |a, b| a + b),
        );
        assert_eq!(
            vec![None, None],
            storage::scan(&[None, Some(1)], |a, b| a + b),
        );
    }

    #[test]
    fn fold_with_na() {
        let storage = [Some(1), None, Some(3)];

        assert_eq!(None, storage::fold(&storage, false, Some(0), |a, b| a + b));
        assert_eq!(Some(4), storage::fold(&storage, true, Some(0), |a, b| a + b));
        assert_eq!(Some(0), storage::fold(&[], false, Some(0), |a: i32, b| a + b));
        assert_eq!(None, storage::fold(&[], false, None, |a: i32, b| a + b));
    }
}
