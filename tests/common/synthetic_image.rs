/// Generates a horizontal gradient covering the full 8-bit range.
pub fn gradient_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 1 && height > 0, "image dimensions must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = (x * 255 / (width - 1)) as u8;
        }
    }
    img
}

/// Generates a constant-intensity frame.
pub fn constant_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// Generates an interleaved RGB frame filled with a single color.
pub fn constant_rgb(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    rgb.repeat(width * height)
}
