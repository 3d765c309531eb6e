use std::path::Path;

use anyhow::Context;
use image::DynamicImage;
use placefix_core::GridSnapshot;

/// Decode an image file into a fresh snapshot.
pub fn load_snapshot(path: &Path) -> anyhow::Result<GridSnapshot> {
    let img = image::open(path).with_context(|| format!("failed to decode {}", path.display()))?;
    snapshot_from_image(&img).with_context(|| format!("unusable image {}", path.display()))
}

pub fn snapshot_from_image(img: &DynamicImage) -> anyhow::Result<GridSnapshot> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(GridSnapshot::from_rgba8(width, height, rgba.as_raw())?)
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use placefix_core::Color;

    use super::*;

    #[test]
    fn converts_rgba_image_pixels() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, Rgba([0xA1, 0xB2, 0xC3, 255]));
        img.put_pixel(0, 1, Rgba([9, 9, 9, 0]));

        let grid = snapshot_from_image(&DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.pixel_at(2, 1).unwrap(), Some(Color::rgb(0xA1, 0xB2, 0xC3)));
        assert!(grid.pixel_at(0, 1).unwrap().unwrap().is_transparent());
    }

    #[test]
    fn rgb_images_become_opaque() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(1, 1, image::Rgb([1, 2, 3])));
        let grid = snapshot_from_image(&img).unwrap();
        assert_eq!(grid.pixel_at(0, 0).unwrap(), Some(Color::rgb(1, 2, 3)));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_snapshot(Path::new("/nonexistent/motif.png")).is_err());
    }
}
