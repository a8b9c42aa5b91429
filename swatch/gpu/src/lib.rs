#![cfg_attr(target_arch = "spirv", no_std)]

#[cfg(not(target_arch = "spirv"))]
use bytemuck::cast;

pub use spirv_std::glam;

use spirv_std::glam::Vec2;

pub mod shade;

/// Push-constant block shared by every fragment entry point.
#[cfg_attr(not(target_arch = "spirv"), derive(Debug, Clone, Copy, PartialEq))]
#[repr(C)]
pub struct Uniforms {
    pub time: f32,
    pub _pad: f32,
    pub resolution: Vec2,
}

#[cfg(not(target_arch = "spirv"))]
impl Uniforms {
    pub fn time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    pub fn resolution(mut self, resolution: Vec2) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn as_buffer(&self) -> [u8; 16] {
        cast::<[f32; 4], [u8; 16]>([self.time, 0.0, self.resolution.x, self.resolution.y])
    }
}

#[cfg(not(target_arch = "spirv"))]
impl Default for Uniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            _pad: 0.0,
            resolution: Vec2::new(800.0, 800.0),
        }
    }
}

#[cfg(not(target_arch = "spirv"))]
pub const UNIFORMS_SIZE: u64 = size_of::<Uniforms>() as u64;
