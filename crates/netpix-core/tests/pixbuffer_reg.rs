//! Pixel buffer regression test
//!
//! Exercises construction, indexed access, fills and the tagged
//! `AnyImage` handle across every color space.

use netpix_core::{
    AnyImage, BwImage, ColorSpace, Error, GrayImage, HsvImage, PixelBuffer, Rgb, RgbImage,
};
use netpix_test::RegParams;

#[test]
fn pixbuffer_reg() {
    let mut rp = RegParams::new("pixbuffer");

    // Channel counts follow the color space
    let hsv = HsvImage::new(3, 2).unwrap();
    rp.compare_values(3.0, hsv.channels() as f64, 0.0);
    rp.compare_values(1.0, BwImage::new(1, 1).unwrap().channels() as f64, 0.0);
    assert_eq!(hsv.color_space(), ColorSpace::Hsv);

    // Writes through at_mut are visible at the same coordinate only
    let mut rgb = RgbImage::new(4, 3).unwrap();
    *rgb.at_mut(3, 2).unwrap() = [0.1, 0.2, 0.3];
    rp.compare_values(0.2, f64::from(rgb.at(3, 2).unwrap()[1]), 1e-6);
    rp.compare_values(0.0, f64::from(rgb.at(2, 2).unwrap()[1]), 0.0);
    rp.compare_values(0.3, f64::from(rgb.pixels()[3 + 2 * 4][2]), 1e-6);

    // Out of range access fails on either axis
    for (x, y) in [(4, 0), (0, 3), (u32::MAX, u32::MAX)] {
        assert!(matches!(
            rgb.at(x, y),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    // fill and fill_pixel overwrite everything
    rgb.fill(0.25);
    let expected = RgbImage::new_with_value(4, 3, 0.25).unwrap();
    rp.compare_images(&expected, &rgb, 0.0);
    rgb.fill_pixel([1.0, 0.0, 0.5]);
    let expected = RgbImage::from_pixels(4, 3, vec![[1.0, 0.0, 0.5]; 12]).unwrap();
    rp.compare_images(&expected, &rgb, 0.0);

    // Rows are width-long slices in order
    let mut gray = GrayImage::new(5, 4).unwrap();
    for (idx, pixel) in gray.pixels_mut().iter_mut().enumerate() {
        pixel[0] = idx as f32;
    }
    let row = gray.row(2).unwrap();
    rp.compare_values(5.0, row.len() as f64, 0.0);
    rp.compare_values(10.0, f64::from(row[0][0]), 0.0);
    rp.compare_values(4.0, gray.rows().count() as f64, 0.0);

    // Empty buffers
    let empty: PixelBuffer<Rgb> = PixelBuffer::new(0, 7).unwrap();
    assert!(empty.is_empty());
    assert!(empty.at(0, 0).is_err());

    // Tagged handle expands to RGB
    let any = AnyImage::from(gray.clone());
    assert_eq!(any.color_space(), ColorSpace::Gray);
    let expanded = any.into_rgb_lossy();
    rp.compare_values(19.0, f64::from(expanded.at(4, 3).unwrap()[2]), 0.0);

    assert!(rp.cleanup(), "pixbuffer regression test failed");
}
