use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("image buffer does not match {width}x{height}")]
    BadBuffer { width: usize, height: usize },
    #[error("failed to save image: {0}")]
    Image(#[from] image::ImageError),
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// An RGBA8 image cut out of a viewport screenshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaCapture {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// Crop a screenshot to `rect` (in points). Without a rect the whole frame
/// is kept. Pixels outside the screenshot are clipped away.
pub fn crop_screenshot(
    image: &egui::ColorImage,
    rect: Option<egui::Rect>,
    pixels_per_point: f32,
) -> RgbaCapture {
    let full_w = image.width();
    let full_h = image.height();

    let (x0, y0, x1, y1) = match rect {
        Some(rect) => (
            ((rect.left() * pixels_per_point).max(0.0) as usize).min(full_w),
            ((rect.top() * pixels_per_point).max(0.0) as usize).min(full_h),
            ((rect.right() * pixels_per_point).ceil().max(0.0) as usize).min(full_w),
            ((rect.bottom() * pixels_per_point).ceil().max(0.0) as usize).min(full_h),
        ),
        None => (0, 0, full_w, full_h),
    };

    let width = x1.saturating_sub(x0);
    let height = y1.saturating_sub(y0);
    let mut rgba = Vec::with_capacity(width * height * 4);
    for row in y0..y1 {
        for col in x0..x1 {
            let c = image.pixels[row * full_w + col];
            rgba.extend_from_slice(&[c.r(), c.g(), c.b(), c.a()]);
        }
    }

    RgbaCapture {
        width,
        height,
        rgba,
    }
}

pub fn save_png(capture: RgbaCapture, path: &Path) -> Result<(), ExportError> {
    let RgbaCapture {
        width,
        height,
        rgba,
    } = capture;
    let img = image::RgbaImage::from_raw(width as u32, height as u32, rgba)
        .ok_or(ExportError::BadBuffer { width, height })?;
    img.save(path)?;
    tracing::info!("Saved plot image to {:?}", path);
    Ok(())
}

pub fn copy_image(capture: RgbaCapture) -> Result<(), ExportError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_image(arboard::ImageData {
        width: capture.width,
        height: capture.height,
        bytes: std::borrow::Cow::Owned(capture.rgba),
    })?;
    tracing::info!("Copied plot image to clipboard");
    Ok(())
}

pub fn copy_text(text: &str) -> Result<(), ExportError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    tracing::info!("Copied report to clipboard");
    Ok(())
}
