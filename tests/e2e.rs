mod common;

use common::synthetic_image::{constant_rgb, constant_u8, gradient_u8};
use tone_enhancer::equalize::LookupTable;
use tone_enhancer::histogram::Histogram;
use tone_enhancer::image::DecodedImage;
use tone_enhancer::{convert_to_grayscale, equalize, EnhanceError, EnhanceParams, Enhancer};

#[test]
fn four_intensity_quad_spans_the_output_range() {
    let image = DecodedImage::gray(2, 2, vec![0, 64, 128, 255]).expect("valid buffer");
    let gray = convert_to_grayscale(&image).expect("grayscale input");

    let lut = LookupTable::from_cdf(&Histogram::from_image(&gray).cdf())
        .expect("four distinct intensities");
    assert_eq!(lut.get(0), 0, "lowest populated bin maps to black");
    assert_eq!(lut.get(255), 255, "maximum maps to white");
    // the four populated bins map to strictly increasing outputs
    let populated = [lut.get(0), lut.get(64), lut.get(128), lut.get(255)];
    for pair in populated.windows(2) {
        assert!(pair[1] > pair[0], "populated bins must strictly increase");
    }

    let equalized = equalize(&gray).expect("four distinct intensities");
    assert_eq!(equalized.data, vec![0, 85, 170, 255]);
}

#[test]
fn gradient_runs_through_the_full_pipeline() {
    let width = 320usize;
    let height = 240usize;
    let image =
        DecodedImage::gray(width, height, gradient_u8(width, height)).expect("valid buffer");

    let enhancer = Enhancer::new(EnhanceParams::default());
    let outcome = enhancer.process(&image).expect("gradient input");

    assert_eq!(outcome.equalized.w, width);
    assert_eq!(outcome.equalized.h, height);
    assert_eq!(*outcome.equalized.data.iter().min().expect("pixels"), 0);
    assert_eq!(*outcome.equalized.data.iter().max().expect("pixels"), 255);

    let stretched = outcome.stretched.expect("stretch enabled by default");
    assert_eq!(*stretched.data.iter().max().expect("pixels"), 255);

    let trace = &outcome.trace;
    assert_eq!(trace.input.channels, 1);
    assert_eq!(trace.histogram.lut.len(), 256);
    let stretch = trace.stretch.as_ref().expect("stretch enabled by default");
    // gain 1.5 pushes everything above 170 past white
    assert!(stretch.clipped_high > 0);
}

#[test]
fn constant_color_rgb_reduces_to_weighted_luma() {
    let image = DecodedImage::rgb(8, 4, constant_rgb(8, 4, [100, 150, 200])).expect("valid buffer");
    let gray = convert_to_grayscale(&image).expect("rgb input");

    assert_eq!(gray.w, 8);
    assert_eq!(gray.h, 4);
    for &v in &gray.data {
        assert!((v - 140.74).abs() < 1e-2);
    }
}

#[test]
fn flat_image_reports_degenerate_histogram() {
    let image = DecodedImage::gray(16, 16, constant_u8(16, 16, 90)).expect("valid buffer");
    let gray = convert_to_grayscale(&image).expect("grayscale input");

    let err = equalize(&gray).unwrap_err();
    assert!(matches!(err, EnhanceError::DegenerateHistogram(_)));
}

#[test]
fn trace_serializes_to_camel_case_json() {
    let image = DecodedImage::gray(4, 4, gradient_u8(4, 4)).expect("valid buffer");
    let outcome = Enhancer::new(EnhanceParams::default())
        .process(&image)
        .expect("gradient input");

    let json = serde_json::to_value(&outcome.trace).expect("serializable trace");
    assert_eq!(json["input"]["channels"], 1);
    assert!(json["histogram"]["populatedBins"].as_u64().expect("count") >= 4);
    assert_eq!(json["histogram"]["lut"].as_array().expect("table").len(), 256);
    assert!(json["totalMs"].is_number());
}
