//! I/O helpers for image files and JSON reports.
//!
//! - `load_image`: read a PNG/JPEG/etc. into an owned interleaved buffer.
//! - `save_grayscale_u8` / `save_grayscale_f32`: write single-channel PNGs.
//! - `save_montage_u8`: write several panels side by side for before/after
//!   comparison.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{DecodedImage, GrayImageU8, ImageF32, ImageView};
use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk into an interleaved 8-bit buffer.
///
/// 8-bit grayscale and RGB pass through unchanged. Every other decoded format
/// (alpha-bearing, paletted, 16-bit) is converted here, so the transforms only
/// ever see 1- or 3-channel data: grayscale-with-alpha drops its alpha plane,
/// anything else collapses to 8-bit RGB.
pub fn load_image(path: &Path) -> Result<DecodedImage, String> {
    let img =
        image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let decoded = match img {
        DynamicImage::ImageLuma8(gray) => {
            let (w, h) = (gray.width() as usize, gray.height() as usize);
            DecodedImage::gray(w, h, gray.into_raw())
        }
        DynamicImage::ImageLumaA8(gray_alpha) => {
            let gray = DynamicImage::ImageLumaA8(gray_alpha).to_luma8();
            let (w, h) = (gray.width() as usize, gray.height() as usize);
            DecodedImage::gray(w, h, gray.into_raw())
        }
        DynamicImage::ImageRgb8(rgb) => {
            let (w, h) = (rgb.width() as usize, rgb.height() as usize);
            DecodedImage::rgb(w, h, rgb.into_raw())
        }
        other => {
            let rgb = other.to_rgb8();
            let (w, h) = (rgb.width() as usize, rgb.height() as usize);
            DecodedImage::rgb(w, h, rgb.into_raw())
        }
    };
    decoded.map_err(|e| format!("Failed to load {}: {e}", path.display()))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = buffer.data.clone();
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.w as u32, buffer.h as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a float image to a grayscale PNG, clamping values to [0, 255].
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = px.clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save several grayscale panels side by side, separated by a thin white gap.
///
/// All panels must share the same height.
pub fn save_montage_u8(panels: &[&GrayImageU8], path: &Path) -> Result<(), String> {
    const GAP: usize = 2;

    let first = panels
        .first()
        .ok_or_else(|| "Montage requires at least one panel".to_string())?;
    let h = first.h;
    if panels.iter().any(|p| p.h != h) {
        return Err("Montage panels must share the same height".to_string());
    }

    let total_w: usize = panels.iter().map(|p| p.w).sum::<usize>() + GAP * (panels.len() - 1);
    let mut out = GrayImage::from_pixel(total_w as u32, h as u32, Luma([255u8]));
    let mut x0 = 0usize;
    for panel in panels {
        for y in 0..panel.h {
            let row = panel.row(y);
            for (x, &px) in row.iter().enumerate() {
                out.put_pixel((x0 + x) as u32, y as u32, Luma([px]));
            }
        }
        x0 += panel.w + GAP;
    }

    ensure_parent_dir(path)?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::save_montage_u8;
    use crate::image::GrayImageU8;
    use std::path::Path;

    #[test]
    fn montage_rejects_mismatched_heights() {
        let a = GrayImageU8::new(4, 4);
        let b = GrayImageU8::new(4, 3);
        let err = save_montage_u8(&[&a, &b], Path::new("unused.png")).unwrap_err();
        assert!(err.contains("height"));
    }

    #[test]
    fn montage_rejects_empty_panel_list() {
        let err = save_montage_u8(&[], Path::new("unused.png")).unwrap_err();
        assert!(err.contains("at least one"));
    }
}
