use ndarray::{ArrayBase, ArrayView, Axis, Data, Dimension, Slice};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SliceError {
    #[error("axis {axis} out of range for a {ndim}-dimensional image")]
    InvalidAxis { axis: usize, ndim: usize },

    #[error("split count must be positive")]
    ZeroCount,
}

/// Partitions `img` into `n` contiguous, non-overlapping views along `axis`,
/// keeping the full extent of every other axis.
///
/// Each view spans `extent / n` indices (integer division); when the extent is
/// not evenly divisible by `n`, the trailing remainder is excluded from every
/// view, so the views together cover `n * (extent / n)` indices.
pub fn split_axis<S, D>(
    img: &ArrayBase<S, D>,
    axis: usize,
    n: usize,
) -> Result<Vec<ArrayView<'_, S::Elem, D>>, SliceError>
where
    S: Data,
    D: Dimension,
{
    if axis >= img.ndim() {
        return Err(SliceError::InvalidAxis { axis, ndim: img.ndim() });
    }
    if n == 0 {
        return Err(SliceError::ZeroCount);
    }

    let step = img.len_of(Axis(axis)) / n;
    Ok((0..n)
        .map(|i| img.slice_axis(Axis(axis), Slice::from(i * step..(i + 1) * step)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3, concatenate, s};

    fn gradient(h: usize, w: usize) -> Array3<u8> {
        Array3::from_shape_fn((h, w, 3), |(y, x, c)| ((y * 7 + x * 3 + c) % 251) as u8)
    }

    #[test]
    fn splits_into_equal_thirds() {
        let img = gradient(400, 900);
        let slices = split_axis(&img, 1, 3).unwrap();
        assert_eq!(slices.len(), 3);
        for slice in &slices {
            assert_eq!(slice.shape(), &[400, 300, 3]);
        }
    }

    #[test]
    fn drops_trailing_remainder() {
        let img = gradient(400, 901);
        let slices = split_axis(&img, 1, 3).unwrap();
        let covered: usize = slices.iter().map(|s| s.len_of(Axis(1))).sum();
        assert_eq!(covered, 900);
        for slice in &slices {
            assert_eq!(slice.shape(), &[400, 300, 3]);
        }
    }

    #[test]
    fn rejects_out_of_range_axis() {
        let img = gradient(400, 900);
        let err = split_axis(&img, 3, 3).unwrap_err();
        assert_eq!(err, SliceError::InvalidAxis { axis: 3, ndim: 3 });
    }

    #[test]
    fn rejects_zero_count() {
        let img = gradient(4, 9);
        assert_eq!(split_axis(&img, 1, 0).unwrap_err(), SliceError::ZeroCount);
    }

    #[test]
    fn slices_are_ordered_and_disjoint() {
        // Column index encoded in the pixel value, so range mix-ups show up
        // as value mismatches.
        let img = Array3::from_shape_fn((2, 9, 1), |(_, x, _)| x as u8);
        let slices = split_axis(&img, 1, 3).unwrap();
        for (i, slice) in slices.iter().enumerate() {
            for (j, col) in slice.axis_iter(Axis(1)).enumerate() {
                assert!(col.iter().all(|&v| v as usize == i * 3 + j));
            }
        }
    }

    #[test]
    fn concatenating_slices_restores_truncated_source() {
        let img = gradient(40, 91);
        let slices = split_axis(&img, 1, 3).unwrap();
        let rebuilt = concatenate(Axis(1), &slices).unwrap();
        assert_eq!(rebuilt, img.slice(s![.., ..90, ..]));
    }

    #[test]
    fn splits_grayscale_rows() {
        let img = Array2::from_shape_fn((10, 4), |(y, x)| (y * 4 + x) as u8);
        let slices = split_axis(&img, 0, 2).unwrap();
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0], img.slice(s![..5, ..]));
        assert_eq!(slices[1], img.slice(s![5.., ..]));
    }
}
