// SPDX-License-Identifier: MPL-2.0
//! Procedural mesh builders for the decorative canvases.
//!
//! All three assets are generated rather than shipped: a wireframe desktop
//! rig for the hero section, a latitude/longitude point globe for the
//! contact section, and a starfield shell for the page background. Builders
//! return plain [`MeshGeometry`]; the sanitation pass runs when the asset
//! registry loads them.

use crate::error::AssetError;
use crate::scene::geometry::MeshGeometry;
use std::f32::consts::{PI, TAU};

/// Wireframe desktop rig: a monitor slab, a neck, and a base, centered on
/// the origin. Vertices are corner points strung for line rendering.
pub fn desktop_rig() -> Result<MeshGeometry, AssetError> {
    let mut positions = Vec::new();

    // Monitor: 16:9-ish slab, slightly above the base plane.
    push_box(&mut positions, [0.0, 0.45, 0.0], [1.6, 0.9, 0.08]);
    // Neck.
    push_box(&mut positions, [0.0, -0.15, 0.0], [0.12, 0.3, 0.08]);
    // Base.
    push_box(&mut positions, [0.0, -0.34, 0.1], [0.7, 0.06, 0.4]);

    let normals = outward_normals(&positions);
    MeshGeometry::new(positions, normals)
}

pub const GLOBE_LAT_STEPS: usize = 9;
pub const GLOBE_LON_STEPS: usize = 18;

/// Latitude/longitude point grid on a unit sphere. Poles are excluded so
/// no grid row degenerates to a single repeated point.
pub fn globe(lat_steps: usize, lon_steps: usize) -> Result<MeshGeometry, AssetError> {
    if lat_steps == 0 || lon_steps == 0 {
        return Err(AssetError::EmptyGeometry);
    }
    let mut positions = Vec::with_capacity(lat_steps * lon_steps * 3);
    for lat in 0..lat_steps {
        // Latitude in (0, PI), open at both poles.
        let theta = PI * (lat as f32 + 1.0) / (lat_steps as f32 + 1.0);
        for lon in 0..lon_steps {
            let phi = TAU * lon as f32 / lon_steps as f32;
            positions.push(theta.sin() * phi.cos());
            positions.push(theta.cos());
            positions.push(theta.sin() * phi.sin());
        }
    }
    // Unit sphere: every position is its own outward normal.
    let normals = positions.clone();
    MeshGeometry::new(positions, normals)
}

pub const STARFIELD_COUNT: usize = 400;

/// Deterministic point shell between radius 1.0 and 1.4. The distribution
/// comes from a small multiplicative hash per star index, so the field is
/// stable across runs without a random-number dependency.
pub fn starfield(count: usize) -> Result<MeshGeometry, AssetError> {
    if count == 0 {
        return Err(AssetError::EmptyGeometry);
    }
    let mut positions = Vec::with_capacity(count * 3);
    for i in 0..count as u32 {
        let u = hash_unit(i.wrapping_mul(3) + 1);
        let v = hash_unit(i.wrapping_mul(3) + 2);
        let w = hash_unit(i.wrapping_mul(3) + 3);

        // Uniform direction on the sphere from (u, v).
        let z = 2.0 * u - 1.0;
        let planar = (1.0 - z * z).max(0.0).sqrt();
        let phi = TAU * v;
        let radius = 1.0 + 0.4 * w;

        positions.push(radius * planar * phi.cos());
        positions.push(radius * planar * phi.sin());
        positions.push(radius * z);
    }
    let normals = outward_normals(&positions);
    MeshGeometry::new(positions, normals)
}

/// SplitMix32 step mapped into `[0, 1)`.
fn hash_unit(seed: u32) -> f32 {
    let mut x = seed.wrapping_add(0x9E37_79B9);
    x ^= x >> 16;
    x = x.wrapping_mul(0x21F0_AAAD);
    x ^= x >> 15;
    x = x.wrapping_mul(0x735A_2D97);
    x ^= x >> 15;
    (x >> 8) as f32 / (1u32 << 24) as f32
}

/// Eight corner points of an axis-aligned box.
fn push_box(positions: &mut Vec<f32>, center: [f32; 3], size: [f32; 3]) {
    for sx in [-0.5f32, 0.5] {
        for sy in [-0.5f32, 0.5] {
            for sz in [-0.5f32, 0.5] {
                positions.push(center[0] + sx * size[0]);
                positions.push(center[1] + sy * size[1]);
                positions.push(center[2] + sz * size[2]);
            }
        }
    }
}

/// Normal per vertex pointing away from the origin. Vertices at the origin
/// keep a zero normal rather than dividing by zero.
fn outward_normals(positions: &[f32]) -> Vec<f32> {
    let mut normals = Vec::with_capacity(positions.len());
    for triple in positions.chunks_exact(3) {
        let len = (triple[0] * triple[0] + triple[1] * triple[1] + triple[2] * triple[2]).sqrt();
        if len > f32::EPSILON {
            normals.push(triple[0] / len);
            normals.push(triple[1] / len);
            normals.push(triple[2] / len);
        } else {
            normals.extend_from_slice(&[0.0, 0.0, 0.0]);
        }
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn desktop_rig_has_three_boxes_of_corners() {
        let mesh = desktop_rig().expect("rig builds");
        assert_eq!(mesh.vertex_count(), 24);
    }

    #[test]
    fn globe_grid_size_matches_steps() {
        let mesh = globe(4, 8).expect("globe builds");
        assert_eq!(mesh.vertex_count(), 32);
    }

    #[test]
    fn globe_points_lie_on_unit_sphere() {
        let mesh = globe(GLOBE_LAT_STEPS, GLOBE_LON_STEPS).expect("globe builds");
        for p in mesh.points() {
            let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert_abs_diff_eq!(len, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn globe_rejects_zero_steps() {
        assert_eq!(globe(0, 8), Err(AssetError::EmptyGeometry));
        assert_eq!(globe(8, 0), Err(AssetError::EmptyGeometry));
    }

    #[test]
    fn starfield_is_deterministic() {
        let a = starfield(64).expect("field builds");
        let b = starfield(64).expect("field builds");
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn starfield_stays_inside_shell() {
        let mesh = starfield(STARFIELD_COUNT).expect("field builds");
        for p in mesh.points() {
            let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!(len >= 0.999, "star inside inner shell: {len}");
            assert!(len <= 1.401, "star outside outer shell: {len}");
        }
    }

    #[test]
    fn starfield_rejects_zero_count() {
        assert_eq!(starfield(0), Err(AssetError::EmptyGeometry));
    }

    #[test]
    fn builders_produce_finite_geometry() {
        for mesh in [
            desktop_rig().expect("rig"),
            globe(GLOBE_LAT_STEPS, GLOBE_LON_STEPS).expect("globe"),
            starfield(STARFIELD_COUNT).expect("stars"),
        ] {
            assert!(mesh.points().iter().flatten().all(|c| c.is_finite()));
        }
    }
}
