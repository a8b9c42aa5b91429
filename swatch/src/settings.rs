use swatch_gpu::{Uniforms, glam::Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self{ width: 800, height: 800 }
    }
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self{ width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Seconds of shader time advanced per frame.
pub const FRAME_TIME_STEP: f32 = 0.01;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Settings {
    pub resolution: Resolution,
    pub time: f32,
}

impl Settings {
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    pub fn frame(self, frame: u32) -> Self {
        self.time(frame as f32 * FRAME_TIME_STEP)
    }

    pub fn uniforms(&self) -> Uniforms {
        Uniforms::default()
            .time(self.time)
            .resolution(self.resolution.as_vec2())
    }
}
