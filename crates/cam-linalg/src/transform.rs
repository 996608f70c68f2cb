//! 4x4 transformation and projection matrices.
//!
//! All matrices follow the OpenGL conventions: they operate on column vectors, the camera looks
//! down its negative Z axis, and projections map the view volume onto the `[-1, 1]` cube in
//! normalized device coordinates.
//!
//! Degenerate arguments (zero-sized view volumes, `pos == target` in [`look_at`], ...) are not
//! rejected and result in infinite or NaN elements.

use crate::{Mat4, Vec3, Vec4};

/// Returns a matrix that translates points by `v`.
///
/// ```
/// # use cam_linalg::*;
/// # use cam_linalg::transform::translate;
/// let m = translate(&vec3(5.0, 6.0, 7.0));
/// assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(5.0, 6.0, 7.0, 1.0));
/// ```
pub fn translate(v: &Vec3) -> Mat4 {
    Mat4::from_columns([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [v.x, v.y, v.z, 1.0],
    ])
}

/// Returns the scale matrix whose first column is `(v.x, v.y, v.z, 0)`.
///
/// All other columns are the ones of [`Mat4::IDENTITY`]. Only `v.x` therefore acts as a scale
/// factor on the diagonal; `v.y` and `v.z` shear the Y and Z coordinates by the input's X
/// coordinate.
///
/// ```
/// # use cam_linalg::*;
/// # use cam_linalg::transform::scale;
/// let m = scale(&vec3(2.0, 3.0, 4.0));
/// assert_eq!(m.column(0), vec4(2.0, 3.0, 4.0, 0.0));
/// assert_eq!(m.column(1), Vec4::Y);
/// ```
pub fn scale(v: &Vec3) -> Mat4 {
    Mat4::from_columns([
        [v.x, v.y, v.z, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating by `angle` radians counterclockwise around `axis`.
///
/// `axis` is used as given and should be a unit vector.
pub fn rotate(angle: f32, axis: &Vec3) -> Mat4 {
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    Mat4::from_columns([
        [c + x * x * t, y * x * t + z * s, z * x * t - y * s, 0.0],
        [x * y * t - z * s, c + y * y * t, z * y * t + x * s, 0.0],
        [x * z * t + y * s, y * z * t - x * s, c + z * z * t, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns an orthographic projection of the given box.
///
/// `near` and `far` are distances along the view direction, so the box spans
/// `z = -near ..= -far` in view space.
pub fn ortho(left: f32, right: f32, near: f32, far: f32, top: f32, bottom: f32) -> Mat4 {
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;

    Mat4::from_columns([
        [2.0 / width, 0.0, 0.0, 0.0],
        [0.0, 2.0 / height, 0.0, 0.0],
        [0.0, 0.0, -2.0 / depth, 0.0],
        [
            -(right + left) / width,
            -(top + bottom) / height,
            -(far + near) / depth,
            1.0,
        ],
    ])
}

/// Returns a perspective projection of the view frustum whose near plane spans
/// `left..right` and `bottom..top`.
///
/// This is the matrix computed by OpenGL's `glFrustum`.
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    log::trace!(
        "frustum: left={left}, right={right}, bottom={bottom}, top={top}, near={near}, far={far}"
    );

    let width = right - left;
    let height = top - bottom;
    let depth = far - near;

    Mat4::from_columns([
        [2.0 * near / width, 0.0, 0.0, 0.0],
        [0.0, 2.0 * near / height, 0.0, 0.0],
        [
            (right + left) / width,
            (top + bottom) / height,
            -(far + near) / depth,
            -1.0,
        ],
        [0.0, 0.0, -2.0 * far * near / depth, 0.0],
    ])
}

/// Returns a symmetric perspective projection.
///
/// `fov` is the vertical field of view in radians, `aspect` is the ratio of width to height.
///
/// ```
/// # use cam_linalg::*;
/// # use cam_linalg::transform::perspective;
/// # use approx::assert_relative_eq;
/// let m = perspective(90f32.to_radians(), 1.0, 1.0, 10.0);
/// let near = m * vec4(0.0, 0.0, -1.0, 1.0);
/// assert_relative_eq!(near.z / near.w, -1.0, epsilon = 1e-6);
/// ```
pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let top = (fov / 2.0).tan() * near;
    let right = top * aspect;
    frustum(-right, right, -top, top, near, far)
}

/// Returns a view matrix for a camera at `pos` that looks at `target`.
///
/// `up` only needs to point roughly upwards; it must not be parallel to the view direction.
///
/// ```
/// # use cam_linalg::*;
/// # use cam_linalg::transform::look_at;
/// let view = look_at(&vec3(0.0, 0.0, 5.0), &Vec3::ZERO, &Vec3::Y);
/// assert_eq!(view * vec4(0.0, 0.0, 0.0, 1.0), vec4(0.0, 0.0, -5.0, 1.0));
/// ```
#[doc(alias = "lookat")]
pub fn look_at(pos: &Vec3, target: &Vec3, up: &Vec3) -> Mat4 {
    let direction = (pos - target).normalize();
    let right = up.cross(&direction).normalize();
    let camera_up = direction.cross(&right);
    log::trace!("look_at: right={right}, up={camera_up}, direction={direction}");

    let rotation = Mat4::from_rows([
        right.extend(0.0),
        camera_up.extend(0.0),
        direction.extend(0.0),
        Vec4::W,
    ]);
    rotation * translate(&-pos)
}
