//! Pack icon providers
//!
//! The merge engine only ever consumes PNG bytes; where those bytes come
//! from is abstracted behind [`IconProvider`]. The default icon reproduces
//! the tool's branding: a 64×64 cyan-to-violet diagonal gradient with a
//! bold white "M".

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::Result;

/// Icon edge length in pixels (resource pack icons are square).
pub const ICON_SIZE: u32 = 64;

/// Gradient start color at the top-left corner (#06b6d4).
const GRADIENT_START: [u8; 3] = [0x06, 0xb6, 0xd4];

/// Gradient end color at the bottom-right corner (#8b5cf6).
const GRADIENT_END: [u8; 3] = [0x8b, 0x5c, 0xf6];

/// A source of PNG bytes for the merged pack's `pack.png` entry.
pub trait IconProvider {
    /// Produce the icon as encoded PNG bytes.
    fn icon_png(&self) -> Result<Vec<u8>>;
}

/// Icon bytes supplied by the caller, passed through verbatim.
///
/// No decoding or validation happens here: whatever the user picked is
/// what lands in the archive, matching resource-pack convention.
#[derive(Debug, Clone)]
pub struct SuppliedIcon {
    bytes: Vec<u8>,
}

impl SuppliedIcon {
    /// Wrap caller-supplied icon bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl IconProvider for SuppliedIcon {
    fn icon_png(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// The synthesized default icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIcon;

impl IconProvider for DefaultIcon {
    fn icon_png(&self) -> Result<Vec<u8>> {
        let mut img = RgbaImage::new(ICON_SIZE, ICON_SIZE);

        // Diagonal gradient from the top-left to the bottom-right corner.
        let span = f32::from((2 * (ICON_SIZE - 1)) as u16);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let t = (x + y) as f32 / span;
            let channel = |start: u8, end: u8| -> u8 {
                (f32::from(start) + t * (f32::from(end) - f32::from(start))).round() as u8
            };
            *pixel = Rgba([
                channel(GRADIENT_START[0], GRADIENT_END[0]),
                channel(GRADIENT_START[1], GRADIENT_END[1]),
                channel(GRADIENT_START[2], GRADIENT_END[2]),
                0xff,
            ]);
        }

        draw_glyph(&mut img);

        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }
}

/// Rasterize a bold centered "M": two vertical stems and two diagonal
/// strokes meeting mid-glyph.
fn draw_glyph(img: &mut RgbaImage) {
    const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

    // Stems.
    fill_rect(img, 15, 15, 7, 34, WHITE);
    fill_rect(img, 42, 15, 7, 34, WHITE);

    // Diagonals, 5 px wide, descending from each stem to the center.
    for step in 0..=23u32 {
        let y = 15 + step;
        let left_x = 21 + (step * 9) / 23;
        let right_x = 38 - (step * 9) / 23;
        fill_rect(img, left_x, y, 5, 1, WHITE);
        fill_rect(img, right_x, y, 5, 1, WHITE);
    }
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    for py in y..(y + height).min(img.height()) {
        for px in x..(x + width).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}
