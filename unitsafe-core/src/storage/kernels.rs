//! Cell-level loops shared by vector and matrix storage.
//!
//! Sparse payloads are `(indices, values)` pairs over a linear index space of `size` cells with `indices`
//! strictly increasing and no stored zero.

use super::PARALLEL_THRESHOLD;
use crate::error::{ValueError, ValueResult};
use rayon::prelude::*;

/// Apply `f` to every value.
pub(crate) fn map<F>(values: &[f64], f: F) -> Vec<f64>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    if values.len() > PARALLEL_THRESHOLD {
        values.par_iter().map(|&v| f(v)).collect()
    } else {
        values.iter().map(|&v| f(v)).collect()
    }
}

/// Apply `f` to every value in place.
pub(crate) fn map_in_place<F>(values: &mut [f64], f: F)
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    if values.len() > PARALLEL_THRESHOLD {
        values.par_iter_mut().for_each(|v| *v = f(*v));
    } else {
        values.iter_mut().for_each(|v| *v = f(*v));
    }
}

/// Combine two equally long slices cell by cell.
pub(crate) fn zip_map<F>(left: &[f64], right: &[f64], f: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    debug_assert_eq!(left.len(), right.len());
    if left.len() > PARALLEL_THRESHOLD {
        left.par_iter()
            .zip(right.par_iter())
            .map(|(&a, &b)| f(a, b))
            .collect()
    } else {
        left.iter().zip(right).map(|(&a, &b)| f(a, b)).collect()
    }
}

/// Sum of all values.
pub(crate) fn sum(values: &[f64]) -> f64 {
    if values.len() > PARALLEL_THRESHOLD {
        values.par_iter().sum()
    } else {
        values.iter().sum()
    }
}

/// Number of non-zero values. `NaN` counts as non-zero.
pub(crate) fn count_non_zero(values: &[f64]) -> usize {
    if values.len() > PARALLEL_THRESHOLD {
        values.par_iter().filter(|v| **v != 0.0).count()
    } else {
        values.iter().filter(|v| **v != 0.0).count()
    }
}

/// Sparse payload of a dense slice.
pub(crate) fn compress(values: &[f64]) -> (Vec<usize>, Vec<f64>) {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v != 0.0)
        .map(|(i, &v)| (i, v))
        .unzip()
}

/// Dense slice of a sparse payload.
pub(crate) fn expand(indices: &[usize], values: &[f64], size: usize) -> Vec<f64> {
    let mut dense = vec![0.0; size];
    for (&i, &v) in indices.iter().zip(values) {
        dense[i] = v;
    }
    dense
}

/// Value at `index` of a sparse payload.
pub(crate) fn sparse_get(indices: &[usize], values: &[f64], index: usize) -> f64 {
    match indices.binary_search(&index) {
        Ok(pos) => values[pos],
        Err(_) => 0.0,
    }
}

/// Write `value` at `index` of a sparse payload, inserting or removing the cell as needed.
pub(crate) fn sparse_set(indices: &mut Vec<usize>, values: &mut Vec<f64>, index: usize, value: f64) {
    match indices.binary_search(&index) {
        Ok(pos) if value == 0.0 => {
            indices.remove(pos);
            values.remove(pos);
        }
        Ok(pos) => values[pos] = value,
        Err(_) if value == 0.0 => {}
        Err(pos) => {
            indices.insert(pos, index);
            values.insert(pos, value);
        }
    }
}

/// Drop cells whose value became zero.
pub(crate) fn prune(indices: &mut Vec<usize>, values: &mut Vec<f64>) {
    let mut keep = 0;
    for k in 0..values.len() {
        if values[k] != 0.0 {
            indices[keep] = indices[k];
            values[keep] = values[k];
            keep += 1;
        }
    }
    indices.truncate(keep);
    values.truncate(keep);
}

/// Sparse payload from `(index, value)` entries in any order.
///
/// Out-of-range indices are reported through `out_of_range`, duplicates are malformed input, and zero values
/// are dropped.
pub(crate) fn from_entries<E>(
    mut entries: Vec<(usize, f64)>,
    size: usize,
    out_of_range: E,
) -> ValueResult<(Vec<usize>, Vec<f64>)>
where
    E: Fn(usize) -> ValueError,
{
    if let Some(&(index, _)) = entries.iter().find(|(i, _)| *i >= size) {
        return Err(out_of_range(index));
    }
    entries.sort_by_key(|(i, _)| *i);
    if let Some(pair) = entries.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(ValueError::malformed(format!(
            "duplicate sparse entry at index {}",
            pair[0].0
        )));
    }
    Ok(entries.into_iter().filter(|(_, v)| *v != 0.0).unzip())
}

/// Cell-wise combination of two sparse payloads over the union of their indices.
///
/// Only valid when `f(0, 0) == 0`, which holds for addition and subtraction.
pub(crate) fn merge<F>(
    left: (&[usize], &[f64]),
    right: (&[usize], &[f64]),
    f: F,
) -> (Vec<usize>, Vec<f64>)
where
    F: Fn(f64, f64) -> f64,
{
    let (li, lv) = left;
    let (ri, rv) = right;
    let mut indices = Vec::with_capacity(li.len() + ri.len());
    let mut values = Vec::with_capacity(li.len() + ri.len());
    let (mut a, mut b) = (0, 0);

    while a < li.len() || b < ri.len() {
        let (index, value) = if b >= ri.len() || (a < li.len() && li[a] < ri[b]) {
            a += 1;
            (li[a - 1], f(lv[a - 1], 0.0))
        } else if a >= li.len() || ri[b] < li[a] {
            b += 1;
            (ri[b - 1], f(0.0, rv[b - 1]))
        } else {
            a += 1;
            b += 1;
            (li[a - 1], f(lv[a - 1], rv[b - 1]))
        };
        if value != 0.0 {
            indices.push(index);
            values.push(value);
        }
    }
    (indices, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn compress_and_expand() {
        let dense = [0.0, 0.0, 3.0, 0.0, f64::NAN];
        let (indices, values) = compress(&dense);
        assert_eq!(indices, vec![2, 4]);
        assert_eq!(values[0], 3.0);
        assert!(values[1].is_nan());
        let back = expand(&indices, &values, 5);
        assert_eq!(back[..4], dense[..4]);
        assert!(back[4].is_nan());
    }

    #[test]
    fn sparse_set_inserts_and_removes() {
        let (mut indices, mut values) = (vec![1, 5], vec![1.0, 5.0]);
        sparse_set(&mut indices, &mut values, 3, 3.0);
        assert_eq!(indices, vec![1, 3, 5]);
        sparse_set(&mut indices, &mut values, 1, 0.0);
        assert_eq!(indices, vec![3, 5]);
        sparse_set(&mut indices, &mut values, 0, 0.0);
        assert_eq!(indices, vec![3, 5]);
        sparse_set(&mut indices, &mut values, 5, 7.0);
        assert_eq!(values, vec![3.0, 7.0]);
        assert_eq!(sparse_get(&indices, &values, 5), 7.0);
        assert_eq!(sparse_get(&indices, &values, 4), 0.0);
    }

    #[test]
    fn entries_are_sorted_and_validated() {
        let oor = |i: usize| ValueError::malformed(format!("oor {}", i));
        let (indices, values) = from_entries(vec![(3, 3.0), (0, 1.0), (2, 0.0)], 4, oor).unwrap();
        assert_eq!(indices, vec![0, 3]);
        assert_eq!(values, vec![1.0, 3.0]);

        assert!(matches!(
            from_entries(vec![(1, 1.0), (1, 2.0)], 4, oor),
            Err(ValueError::MalformedInput { .. })
        ));
        assert_eq!(
            from_entries(vec![(4, 1.0)], 4, oor).unwrap_err(),
            ValueError::malformed("oor 4")
        );
    }

    #[test]
    fn merge_drops_cancelled_cells() {
        let (indices, values) = merge(
            (&[0, 2], &[1.0, 2.0]),
            (&[2, 3], &[2.0, 4.0]),
            |a, b| a - b,
        );
        assert_eq!(indices, vec![0, 3]);
        assert_eq!(values, vec![1.0, -4.0]);
    }

    #[test]
    fn prune_removes_zeros() {
        let (mut indices, mut values) = (vec![0, 1, 2], vec![1.0, 0.0, 2.0]);
        prune(&mut indices, &mut values);
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn parallel_paths_agree() {
        let values: Vec<f64> = (0..2 * PARALLEL_THRESHOLD).map(|i| (i % 7) as f64).collect();
        assert_eq!(count_non_zero(&values), values.iter().filter(|v| **v != 0.0).count());
        let doubled = map(&values, |v| v * 2.0);
        assert_eq!(doubled[13], 2.0 * values[13]);
        let diff = zip_map(&doubled, &values, |a, b| a - b);
        assert_eq!(diff, values);
    }

    proptest! {
        #[test]
        fn prop_compress_expand_roundtrip(values in prop::collection::vec(prop_oneof![Just(0.0), -1e6..1e6f64], 0..64)) {
            let (indices, stored) = compress(&values);
            prop_assert_eq!(stored.len(), count_non_zero(&values));
            prop_assert!(stored.iter().all(|v| *v != 0.0));
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(expand(&indices, &stored, values.len()), values);
        }

        #[test]
        fn prop_merge_matches_dense(
            pair in prop::collection::vec((prop_oneof![Just(0.0), -1e3..1e3f64], prop_oneof![Just(0.0), -1e3..1e3f64]), 0..64)
        ) {
            let (left, right): (Vec<f64>, Vec<f64>) = pair.into_iter().unzip();
            let (li, lv) = compress(&left);
            let (ri, rv) = compress(&right);
            let (indices, values) = merge((li.as_slice(), lv.as_slice()), (ri.as_slice(), rv.as_slice()), |a, b| a + b);
            prop_assert_eq!(expand(&indices, &values, left.len()), zip_map(&left, &right, |a, b| a + b));
        }
    }
}
