use tone_enhancer::image::DecodedImage;
use tone_enhancer::{EnhanceParams, Enhancer};

fn main() {
    // Demo stub: runs the pipeline on a synthetic horizontal gradient
    let w = 640usize;
    let h = 480usize;
    let data: Vec<u8> = (0..w * h).map(|i| ((i % w) * 255 / (w - 1)) as u8).collect();
    let image = DecodedImage::gray(w, h, data).expect("buffer length matches geometry");

    let enhancer = Enhancer::new(EnhanceParams::default());
    match enhancer.process(&image) {
        Ok(outcome) => println!(
            "equalized {}x{} in {:.3} ms (lut[0]={}, lut[255]={})",
            outcome.equalized.w,
            outcome.equalized.h,
            outcome.trace.total_ms,
            outcome.trace.histogram.lut[0],
            outcome.trace.histogram.lut[255]
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
