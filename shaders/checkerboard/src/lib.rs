#![cfg_attr(target_arch = "spirv", no_std)]

use spirv_std::{
    glam::{Vec2, Vec3, Vec4},
    spirv,
};
use swatch_gpu::{Uniforms, shade};

// Same input interface as `tinted`, so both share one vertex stage.
#[spirv(fragment)]
pub fn main_fs(
    #[spirv(push_constant)] _uniforms: &Uniforms,
    _in_color: Vec3,
    in_uv: Vec2,
    output: &mut Vec4,
) {
    *output = shade::checkerboard(in_uv);
}
