use spirv_std::glam::{Vec2, Vec3, Vec4};
#[allow(unused)]
use spirv_std::num_traits::Float;

/// Checker cells per unit of UV along each axis.
pub const CHECKER_DENSITY: f32 = 12.0;

pub const WHITE: Vec3 = Vec3::ONE;
pub const BLACK: Vec3 = Vec3::ZERO;

/// GLSL `mod`: the result takes the sign of `y`.
fn glsl_mod(x: f32, y: f32) -> f32 {
    x - y * (x / y).floor()
}

/// Passes the interpolated vertex color through with an opaque alpha.
///
/// `sin(time)` is evaluated and dropped; the tint does not pulse.
pub fn tint(color: Vec3, time: f32) -> Vec4 {
    let _pulse = time.sin();
    Vec4::from((color, 1.0))
}

/// 0.0 on white cells, 1.0 on black cells.
pub fn checker_parity(uv: Vec2) -> f32 {
    let p = uv * CHECKER_DENSITY;
    glsl_mod(p.x.floor() + p.y.floor(), 2.0)
}

/// Black and white checkerboard, `CHECKER_DENSITY` cells per UV unit.
pub fn checkerboard(uv: Vec2) -> Vec4 {
    let check = checker_parity(uv);
    // check is exactly 0 or 1, so the lerp is a select
    let c = WHITE.lerp(BLACK, check);
    Vec4::from((c, 1.0))
}
