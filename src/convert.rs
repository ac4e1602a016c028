use ndarray::{Array3, ArrayView3};
use opencv::core::Mat;
use opencv::prelude::{MatTraitConst, MatTraitConstManual};

use crate::pipeline::PanoError;

pub fn mat_to_array(mat: &Mat) -> Result<Array3<u8>, PanoError> {
    let rows = mat.rows() as usize;
    let cols = mat.cols() as usize;
    let channels = mat.channels() as usize;
    let data = mat.data_bytes()?.to_vec();
    Ok(Array3::from_shape_vec((rows, cols, channels), data)?)
}

pub fn array_to_mat(img: ArrayView3<'_, u8>) -> Result<Mat, PanoError> {
    let (rows, _, channels) = img.dim();
    let standard = img.as_standard_layout();
    let flat = Mat::from_slice(standard.as_slice().expect("standard layout is contiguous"))?;
    let shaped = flat.reshape(channels as i32, rows as i32)?;
    Ok(shaped.clone_pointee())
}
