//! CPU evaluation of the fragment shaders over a full-screen quad.
//!
//! Runs the same `swatch_gpu::shade` functions the SPIR-V modules are built
//! from, one invocation per pixel center.

use std::fmt;

use image::{Rgba, RgbaImage};
use log::{debug, info};
use swatch_gpu::{
    Uniforms,
    glam::{Vec2, Vec3, Vec4},
    shade,
};

use crate::{
    settings::{Resolution, Settings},
    shader::ShaderKind,
};

/// Per-corner vertex colors of the quad, interpolated into `in_color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub top_left: Vec3,
    pub top_right: Vec3,
    pub bottom_left: Vec3,
    pub bottom_right: Vec3,
}

impl Default for Corners {
    fn default() -> Self {
        Self {
            top_left: Vec3::new(1.0, 0.0, 0.0),
            top_right: Vec3::new(0.0, 1.0, 0.0),
            bottom_left: Vec3::new(0.0, 0.0, 1.0),
            bottom_right: Vec3::ONE,
        }
    }
}

impl Corners {
    pub fn uniform(color: Vec3) -> Self {
        Self {
            top_left: color,
            top_right: color,
            bottom_left: color,
            bottom_right: color,
        }
    }

    pub fn sample(&self, uv: Vec2) -> Vec3 {
        let top = self.top_left.lerp(self.top_right, uv.x);
        let bottom = self.bottom_left.lerp(self.bottom_right, uv.x);
        top.lerp(bottom, uv.y)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum PreviewError {
    EmptyResolution(Resolution),
    ResolutionTooLarge(Resolution),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::EmptyResolution(resolution) => {
                write!(f, "cannot render a {}x{} preview", resolution.width, resolution.height)
            }
            PreviewError::ResolutionTooLarge(resolution) => write!(
                f,
                "{}x{} preview exceeds {MAX_DIMENSION} pixels per side",
                resolution.width, resolution.height
            ),
        }
    }
}

impl std::error::Error for PreviewError {}

/// Largest preview edge, the `maxImageDimension2D` most Vulkan devices report.
pub const MAX_DIMENSION: u32 = 16384;

fn buffer_len(resolution: Resolution) -> Option<usize> {
    if resolution.width > MAX_DIMENSION || resolution.height > MAX_DIMENSION {
        return None;
    }
    (resolution.width as usize)
        .checked_mul(resolution.height as usize)?
        .checked_mul(4)
}

/// Interpolated color and uv for the fragment at pixel `(x, y)`.
pub fn varyings(x: u32, y: u32, resolution: Resolution, corners: &Corners) -> (Vec3, Vec2) {
    let uv = (Vec2::new(x as f32, y as f32) + 0.5) / resolution.as_vec2();
    (corners.sample(uv), uv)
}

pub fn shade(kind: ShaderKind, color: Vec3, uv: Vec2, uniforms: &Uniforms) -> Vec4 {
    match kind {
        ShaderKind::Tinted => shade::tint(color, uniforms.time),
        ShaderKind::Checkerboard => shade::checkerboard(uv),
    }
}

fn to_rgba8(color: Vec4) -> Rgba<u8> {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([channel(color.x), channel(color.y), channel(color.z), channel(color.w)])
}

pub fn render(kind: ShaderKind, settings: &Settings, corners: &Corners) -> Result<RgbaImage, PreviewError> {
    let resolution = settings.resolution;
    if resolution.is_empty() {
        return Err(PreviewError::EmptyResolution(resolution));
    }
    let Some(len) = buffer_len(resolution) else {
        return Err(PreviewError::ResolutionTooLarge(resolution));
    };

    let uniforms = settings.uniforms();
    debug!("swatch::preview - allocating {len} bytes, uniforms {:?}", uniforms);

    let image = RgbaImage::from_fn(resolution.width, resolution.height, |x, y| {
        let (color, uv) = varyings(x, y, resolution, corners);
        to_rgba8(shade(kind, color, uv, &uniforms))
    });

    info!(
        "swatch::preview - rendered {kind} at {}x{}, time {}",
        resolution.width, resolution.height, settings.time
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn varyings_sample_pixel_centers() {
        let resolution = Resolution::new(4, 2);
        let (color, uv) = varyings(0, 0, resolution, &Corners::uniform(Vec3::splat(0.5)));
        assert_eq!(uv, Vec2::new(0.125, 0.25));
        assert_eq!(color, Vec3::splat(0.5));

        let (_, uv) = varyings(3, 1, resolution, &Corners::default());
        assert_eq!(uv, Vec2::new(0.875, 0.75));
    }

    #[test]
    fn corners_interpolate_bilinearly() {
        let corners = Corners::default();
        assert_eq!(corners.sample(Vec2::ZERO), corners.top_left);
        assert_eq!(corners.sample(Vec2::new(1.0, 0.0)), corners.top_right);
        assert_eq!(corners.sample(Vec2::new(0.0, 1.0)), corners.bottom_left);
        assert_eq!(corners.sample(Vec2::ONE), corners.bottom_right);
    }

    #[test]
    fn tinted_render_is_flat_for_uniform_corners() {
        let settings = Settings::default().resolution(Resolution::new(8, 8)).frame(314);
        let corners = Corners::uniform(Vec3::new(0.2, 0.4, 0.6));
        let image = render(ShaderKind::Tinted, &settings, &corners).expect("render");

        assert!(image.pixels().all(|pixel| *pixel == Rgba([51, 102, 153, 255])));
    }

    #[test]
    fn tinted_render_ignores_time() {
        let corners = Corners::default();
        let settings = Settings::default().resolution(Resolution::new(16, 16));
        let first = render(ShaderKind::Tinted, &settings.time(0.0), &corners).expect("render");
        let later = render(ShaderKind::Tinted, &settings.time(42.0), &corners).expect("render");
        assert_eq!(first, later);
    }

    #[test]
    fn checkerboard_render_alternates_cells() {
        // one pixel per checker cell
        let settings = Settings::default().resolution(Resolution::new(12, 12));
        let image = render(ShaderKind::Checkerboard, &settings, &Corners::default()).expect("render");

        for (x, y, pixel) in image.enumerate_pixels() {
            let expected = if (x + y) % 2 == 0 { WHITE } else { BLACK };
            assert_eq!(*pixel, expected, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn empty_resolution_is_rejected() {
        let settings = Settings::default().resolution(Resolution::new(0, 12));
        assert_eq!(
            render(ShaderKind::Checkerboard, &settings, &Corners::default()),
            Err(PreviewError::EmptyResolution(Resolution::new(0, 12)))
        );
    }

    #[test]
    fn oversized_resolution_is_rejected() {
        for resolution in [
            Resolution::new(u32::MAX, u32::MAX),
            Resolution::new(MAX_DIMENSION + 1, 1),
            Resolution::new(1, MAX_DIMENSION + 1),
        ] {
            let settings = Settings::default().resolution(resolution);
            assert_eq!(
                render(ShaderKind::Checkerboard, &settings, &Corners::default()),
                Err(PreviewError::ResolutionTooLarge(resolution))
            );
        }
    }

    #[test]
    fn buffer_len_covers_rgba8() {
        assert_eq!(buffer_len(Resolution::new(3, 2)), Some(24));
        assert_eq!(buffer_len(Resolution::new(MAX_DIMENSION, MAX_DIMENSION)), Some(16384 * 16384 * 4));
        assert_eq!(buffer_len(Resolution::new(u32::MAX, 1)), None);
    }
}
