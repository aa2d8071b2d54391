//! Ordering of element storage.
//!
//! These functions require a total order over elements, which only points
//! provide (lexicographically by coordinate). NA elements never take part in
//! comparisons.

use std::cmp::Ordering;
use std::iter;

use crate::storage;

/// Sorts non-NA elements stably and reinserts NA elements.
///
/// NA elements are appended if `na_last` is `Some(true)`, prepended if it is
/// `Some(false)`, and dropped if it is `None`.
pub(in crate) fn sort<T>(storage: &[Option<T>], decreasing: bool, na_last: Option<bool>) -> Vec<Option<T>>
where
    T: Clone + Ord,
{
    let mut elements = storage.iter().flatten().cloned().collect::<Vec<_>>();
    if decreasing {
        elements.sort_by(|a, b| b.cmp(a));
    }
    else {
        elements.sort();
    }
    let na = storage.len() - elements.len();
    let mut output = elements.into_iter().map(Some).collect::<Vec<_>>();
    match na_last {
        Some(true) => {
            output.extend(iter::repeat_with(|| None).take(na));
        }
        Some(false) => {
            output.extend(iter::repeat_with(|| None).take(na));
            output.rotate_right(na);
        }
        None => {}
    }
    output
}

/// Gets the one-based positions of elements in ascending order.
///
/// The order is stable and NA elements come after every other element.
pub(in crate) fn rank<T>(storage: &[Option<T>]) -> Vec<usize>
where
    T: Ord,
{
    let mut positions = (0..storage.len()).collect::<Vec<_>>();
    positions.sort_by(|i, j| match (&storage[*i], &storage[*j]) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    positions.into_iter().map(|position| position + 1).collect()
}

pub(in crate) fn min<T>(storage: &[Option<T>], na_rm: bool) -> Option<T>
where
    T: Clone + Ord,
{
    storage::fold(storage, na_rm, None, |min, element| {
        if *element < min {
            element.clone()
        }
        else {
            min
        }
    })
}

pub(in crate) fn max<T>(storage: &[Option<T>], na_rm: bool) -> Option<T>
where
    T: Clone + Ord,
{
    storage::fold(storage, na_rm, None, |max, element| {
        if *element > max {
            element.clone()
        }
        else {
            max
        }
    })
}

pub(in crate) fn cummin<T>(storage: &[Option<T>]) -> Vec<Option<T>>
where
    T: Clone + Ord,
{
    storage::scan(storage, |min, element| {
        (if element < min { element } else { min }).clone()
    })
}

pub(in crate) fn cummax<T>(storage: &[Option<T>]) -> Vec<Option<T>>
where
    T: Clone + Ord,
{
    storage::scan(storage, |max, element| {
        (if element > max { element } else { max }).clone()
    })
}

#[cfg(test)]
mod tests {
    use crate::order;

    // Stand-ins for points `A < B < C`.
    const A: Option<u8> = Some(1);
    const B: Option<u8> = Some(2);
    const C: Option<u8> = Some(3);

    #[test]
    fn sort_and_reinsert_na() {
        let storage = [A, None, B, None, C];

        assert_eq!(vec![A, B, C, None, None], order::sort(&storage, false, Some(true)));
        assert_eq!(vec![None, None, A, B, C], order::sort(&storage, false, Some(false)));
        assert_eq!(vec![A, B, C], order::sort(&storage, false, None));
        assert_eq!(vec![C, B, A, None, None], order::sort(&storage, true, Some(true)));
    }

    #[test]
    fn rank_with_na_last() {
        assert_eq!(vec![4, 1, 5, 2, 3], order::rank(&[B, C, None, A, B]));
    }

    #[test]
    fn extrema() {
        let storage = [B, None, A, C];

        assert_eq!(None, order::min(&storage, false));
        assert_eq!(A, order::min(&storage, true));
        assert_eq!(C, order::max(&storage, true));
        assert_eq!(None, order::max::<u8>(&[], true));
        assert_eq!(None, order::min::<u8>(&[None, None], true));
    }

    #[test]
    fn cumulative_extrema() {
        assert_eq!(vec![B, A, A, None, None], order::cummin(&[B, A, C, None, A]));
        assert_eq!(vec![B, B, C, C], order::cummax(&[B, A, C, A]));
    }
}
