//! Pipeline regression test
//!
//! Runs every pipeline file-to-file and compares the saved result with
//! the same chain applied in memory.

use netpix::color::{gray_to_bw, hsv_to_rgb, modify_in_hsv, rgb_to_gray, rgb_to_hsv};
use netpix::io::{
    IoError, PnmFormat, PnmOptions, detect_format, load_bw_image, load_grayscale_image,
    load_rgb_image, save_grayscale_image, save_rgb_image,
};
use netpix::{ColorSpace, Pipeline, RgbImage, run_pipeline};
use netpix_test::RegParams;

fn make_source(width: u32, height: u32) -> RgbImage {
    let mut image = RgbImage::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / (width - 1)) as f32 / 255.0;
            let g = (y * 255 / (height - 1)) as f32 / 255.0;
            let b = ((x + y) * 255 / (width + height - 2)) as f32 / 255.0;
            image.set_pixel(x, y, [r, g, b]).unwrap();
        }
    }
    image
}

/// One 8-bit quantization step plus float noise
const STEP: f32 = 0.5 / 255.0 + 1e-5;

#[test]
fn pipeline_reg() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rp = RegParams::new("pipeline");
    let options = PnmOptions::default();

    let rgb = make_source(24, 16);
    let rgb_path = rp.regout_path("ppm").unwrap();
    save_rgb_image(&rgb_path, &rgb, false, false).unwrap();

    // --- gray ---
    let target = rp.regout_path("pgm").unwrap();
    run_pipeline(Pipeline::Gray, &rgb_path, &target, &options).unwrap();
    assert_eq!(Pipeline::Gray.target_format(false), Some(detect_format(&target).unwrap()));
    let gray = load_grayscale_image(&target).unwrap();
    rp.compare_images(&rgb_to_gray(&rgb), &gray, STEP);

    // --- bw ---
    let gray_path = rp.regout_path("pgm").unwrap();
    save_grayscale_image(&gray_path, &gray, false, false).unwrap();
    let target = rp.regout_path("pbm").unwrap();
    run_pipeline(Pipeline::Bw, &gray_path, &target, &options).unwrap();
    let bw = load_bw_image(&target).unwrap();
    rp.compare_images(&gray_to_bw(&gray), &bw, 0.0);

    // --- hsv round trip ---
    let target = rp.regout_path("ppm").unwrap();
    run_pipeline(Pipeline::HsvRoundTrip, &rgb_path, &target, &options).unwrap();
    let back = load_rgb_image(&target).unwrap();
    rp.compare_images(&rgb, &back, 1e-5);

    // --- color key, 16-bit plain output ---
    let target = rp.regout_path("ppm").unwrap();
    let wide = PnmOptions::new().with_double_precision(true).with_plain(true);
    run_pipeline(Pipeline::ColorKey, &rgb_path, &target, &wide).unwrap();
    assert_eq!(detect_format(&target).unwrap(), PnmFormat::PlainPpm);
    assert_eq!(Pipeline::ColorKey.target_format(true), Some(PnmFormat::PlainPpm));
    let keyed = load_rgb_image(&target).unwrap();
    let expected = hsv_to_rgb(&modify_in_hsv(&rgb_to_hsv(&rgb)));
    rp.compare_images(&expected, &keyed, 0.5 / 65535.0 + 1e-5);

    assert!(rp.cleanup(), "pipeline regression test failed");
}

#[test]
fn pipeline_reg_mismatch() {
    let mut rp = RegParams::new("pipeline_mismatch");

    // The bi-level pipeline needs a graymap, not a pixmap
    let source = rp.regout_path("ppm").unwrap();
    save_rgb_image(&source, &make_source(4, 4), false, false).unwrap();
    let target = rp.regout_path("pbm").unwrap();
    let err = run_pipeline(Pipeline::Bw, &source, &target, &PnmOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        IoError::ColorSpaceMismatch {
            requested: ColorSpace::Gray,
            found: PnmFormat::Ppm
        }
    ));

    // The same mismatch is reported from the magic number alone
    let err = Pipeline::Bw.check_source(&source).unwrap_err();
    assert!(matches!(
        err,
        IoError::ColorSpaceMismatch {
            requested: ColorSpace::Gray,
            found: PnmFormat::Ppm
        }
    ));
    assert_eq!(Pipeline::Gray.check_source(&source).unwrap(), PnmFormat::Ppm);
    assert!(Pipeline::Bw.matches_target_extension(&target));
    assert!(!Pipeline::ColorKey.matches_target_extension(&source.replace(".ppm", ".pgm")));

    assert!(rp.cleanup(), "pipeline mismatch test failed");
}
