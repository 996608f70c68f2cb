//! Views a unit cube through a perspective camera and prints the projected corners.
//!
//! Usage: `cam [x y z]`, where `x y z` is the camera position (default `0 0 5`). The camera
//! always looks at the origin.

use std::env;

use anyhow::{bail, Context};
use cam_linalg::{
    simd,
    transform::{look_at, perspective},
    vec2, vec3, vec4, Mat4, Vec3,
};
use log::LevelFilter;

const FOV_DEGREES: f32 = 60.0;
const ASPECT: f32 = 16.0 / 9.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

fn main() -> anyhow::Result<()> {
    init_logger();
    log::debug!("arithmetic backend: {}", simd::BACKEND);

    let eye = parse_eye(env::args().skip(1))?;
    log::debug!("camera at {eye}");

    basics();

    let view = look_at(&eye, &Vec3::ZERO, &Vec3::Y);
    let projection = perspective(FOV_DEGREES.to_radians(), ASPECT, NEAR, FAR);
    let view_projection = &projection * &view;
    log::debug!("view-projection: {view_projection:?}");

    for corner in cube_corners() {
        let clip = &view_projection * corner.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        println!("{corner} -> {ndc:.3}");
    }

    Ok(())
}

/// Initializes logging to *stderr*: this binary and the library log at *debug* level unless
/// overridden by `RUST_LOG`.
fn init_logger() {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("cam_linalg"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

fn parse_eye(args: impl Iterator<Item = String>) -> anyhow::Result<Vec3> {
    let args = args.collect::<Vec<_>>();
    match args.as_slice() {
        [] => Ok(vec3(0.0, 0.0, 5.0)),
        [x, y, z] => {
            let mut coords = [0.0; 3];
            for (coord, (arg, name)) in coords.iter_mut().zip([(x, "x"), (y, "y"), (z, "z")]) {
                *coord = arg
                    .parse()
                    .with_context(|| format!("invalid {name} coordinate '{arg}'"))?;
            }
            Ok(Vec3::from(coords))
        }
        _ => bail!("usage: cam [x y z] (got {} arguments)", args.len()),
    }
}

fn cube_corners() -> impl Iterator<Item = Vec3> {
    (0..8).map(|i| {
        let coord = |bit: usize| if i & bit == 0 { -0.5 } else { 0.5 };
        vec3(coord(1), coord(2), coord(4))
    })
}

/// Prints a few basic results: a scaled vector, the identity check, and cached magnitudes.
fn basics() {
    let v = vec4(1.0, 2.0, 3.0, 4.0).scale(2.0);
    println!("({:.2}, {:.2}, {:.2}, {:.2})", v.x, v.y, v.z, v.w);

    let m = Mat4::default();
    if m.is_identity() {
        println!("id");
    }
    println!("{}", m.determinant());

    let mut g = vec2(0.0, 0.0);
    println!("{}", g.magnitude());
    g.x = 1.0;
    println!("{}", g.magnitude());
}
