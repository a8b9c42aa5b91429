#![cfg_attr(target_arch = "spirv", no_std)]

use spirv_std::{
    glam::{Vec2, Vec3, Vec4},
    spirv,
};
use swatch_gpu::{Uniforms, shade};

#[spirv(fragment)]
pub fn main_fs(
    #[spirv(push_constant)] uniforms: &Uniforms,
    in_color: Vec3,
    _in_uv: Vec2,
    output: &mut Vec4,
) {
    *output = shade::tint(in_color, uniforms.time);
}
