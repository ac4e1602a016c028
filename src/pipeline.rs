use std::path::Path;

use log::info;
use opencv::core::{Mat, Size, Vector};
use opencv::prelude::*;
use opencv::stitching::{Stitcher, Stitcher_Mode, Stitcher_Status};
use opencv::{highgui, imgcodecs, imgproc};
use thiserror::Error;

use crate::slicer::SliceError;

#[derive(Error, Debug)]
pub enum PanoError {
    #[error("could not decode image at {0}")]
    Decode(String),

    #[error("stitching failed with status {0:?}")]
    Stitch(Stitcher_Status),

    #[error(transparent)]
    Slice(#[from] SliceError),

    #[error("OpenCV error: {0}")]
    OpenCv(#[from] opencv::Error),

    #[error("image buffer has unexpected shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Reads a BGR image. `imread` signals decode failure with an empty `Mat`
/// rather than an error, so that sentinel is checked here.
pub fn decode(path: &Path) -> Result<Mat, PanoError> {
    let img = imgcodecs::imread(path.to_string_lossy().as_ref(), imgcodecs::IMREAD_COLOR)?;
    if img.empty() {
        return Err(PanoError::Decode(path.display().to_string()));
    }
    Ok(img)
}

/// Composes `slices` into a panorama. `confidence_threshold` is the minimum
/// match confidence for two images to count as overlapping; 0 accepts all
/// candidate matches.
pub fn stitch(slices: &Vector<Mat>, confidence_threshold: f64) -> Result<Mat, PanoError> {
    let mut stitcher = Stitcher::create(Stitcher_Mode::PANORAMA)?;
    stitcher.set_pano_confidence_thresh(confidence_threshold)?;

    let mut pano = Mat::default();
    let status = stitcher.stitch(slices, &mut pano)?;
    info!("stitcher status: {status:?}");
    if status != Stitcher_Status::OK {
        return Err(PanoError::Stitch(status));
    }
    Ok(pano)
}

pub fn resize(img: &Mat, width: i32, height: i32) -> Result<Mat, PanoError> {
    let mut out = Mat::default();
    imgproc::resize(
        img,
        &mut out,
        Size::new(width, height),
        0.0,
        0.0,
        imgproc::INTER_LINEAR,
    )?;
    Ok(out)
}

/// Shows `img` in a window that blocks until a key is pressed.
pub fn display(title: &str, img: &Mat) -> Result<(), PanoError> {
    highgui::imshow(title, img)?;
    highgui::wait_key(0)?;
    highgui::destroy_all_windows()?;
    Ok(())
}
