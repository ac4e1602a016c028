use std::env;
use std::path::Path;
use std::time::Instant;

use log::info;
use opencv::core::{Mat, Vector};

use crate::pipeline::PanoError;

mod convert;
mod pipeline;
mod slicer;

const DEFAULT_IMAGE: &str = "assets/sb_pano.jpg";
const SPLIT_AXIS: usize = 1;
const SPLIT_COUNT: usize = 3;
const CONFIDENCE_THRESHOLD: f64 = 0.0;
const OUTPUT_WIDTH: i32 = 1800;
const OUTPUT_HEIGHT: i32 = 400;

fn main() -> Result<(), PanoError> {
    env_logger::init();
    let start = Instant::now();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_IMAGE.to_string());
    let src = pipeline::decode(Path::new(&path))?;

    let pano = convert::mat_to_array(&src)?;
    info!("decoded {path}: shape {:?}", pano.shape());

    let slices = slicer::split_axis(&pano, SPLIT_AXIS, SPLIT_COUNT)?;
    info!(
        "slice shapes: {:?}",
        slices.iter().map(|s| s.shape().to_vec()).collect::<Vec<_>>()
    );

    let mut mats: Vector<Mat> = Vector::new();
    for slice in slices {
        mats.push(convert::array_to_mat(slice)?);
    }

    let stitched = pipeline::stitch(&mats, CONFIDENCE_THRESHOLD)?;
    let resized = pipeline::resize(&stitched, OUTPUT_WIDTH, OUTPUT_HEIGHT)?;
    pipeline::display("pano", &resized)?;

    println!("{}", start.elapsed().as_secs_f64());
    Ok(())
}
