use std::path::Path;

use crate::utils::errors::HelplineError;

/// Decode an image file into an egui image (RGBA)
pub fn load_icon_from_path(path: &Path) -> Result<egui::ColorImage, HelplineError> {
    let bytes = std::fs::read(path).map_err(|e| HelplineError::Icon {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    load_icon_from_bytes(&bytes).map_err(|reason| HelplineError::Icon {
        path: path.display().to_string(),
        reason,
    })
}

/// Decode raw image bytes into an egui image (RGBA)
pub fn load_icon_from_bytes(bytes: &[u8]) -> Result<egui::ColorImage, String> {
    let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Generate the window icon: white phone handset on a red rounded square
pub fn window_icon() -> egui::IconData {
    let size = 64usize;
    let mut pixels = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let brightness = 1.0 - (y as f32 / size as f32) * 0.25;
            let (r, g, b) = if in_handset(x as i32, y as i32) {
                (255, 255, 255)
            } else {
                ((220.0 * brightness) as u8, (40.0 * brightness) as u8, (40.0 * brightness) as u8)
            };
            pixels[idx] = r;
            pixels[idx + 1] = g;
            pixels[idx + 2] = b;
            pixels[idx + 3] = if in_rounded_square(x as i32, y as i32, size as i32, 12) {
                255
            } else {
                0
            };
        }
    }

    egui::IconData {
        rgba: pixels,
        width: size as u32,
        height: size as u32,
    }
}

fn in_rounded_square(x: i32, y: i32, size: i32, radius: i32) -> bool {
    let cx = x.clamp(radius, size - 1 - radius);
    let cy = y.clamp(radius, size - 1 - radius);
    let (dx, dy) = (x - cx, y - cy);
    dx * dx + dy * dy <= radius * radius
}

// Two earpiece blobs joined by a diagonal grip
fn in_handset(x: i32, y: i32) -> bool {
    let blob = |cx: i32, cy: i32| (x - cx).pow(2) + (y - cy).pow(2) < 64;
    let on_grip = (x + y - 64).abs() < 7 && (16..=48).contains(&x);
    blob(18, 22) || blob(42, 46) || on_grip
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_icon_dimensions() {
        let icon = window_icon();
        assert_eq!(icon.width, 64);
        assert_eq!(icon.height, 64);
        assert_eq!(icon.rgba.len(), 64 * 64 * 4);
        // Corners transparent, centre opaque
        assert_eq!(icon.rgba[3], 0);
        assert_eq!(icon.rgba[(32 * 64 + 32) * 4 + 3], 255);
    }

    #[test]
    fn test_missing_icon_is_an_error() {
        let err = load_icon_from_path(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, HelplineError::Icon { .. }));
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(load_icon_from_bytes(b"not an image").is_err());
    }

    #[test]
    fn test_png_bytes_decode() {
        let mut png = Vec::new();
        let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([255, 0, 0, 255]));
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let decoded = load_icon_from_bytes(&png).unwrap();
        assert_eq!(decoded.size, [2, 3]);
    }
}
