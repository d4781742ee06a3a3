// SPDX-License-Identifier: MPL-2.0
//! Custom canvas widgets for the decorative 3D scenes.
//!
//! Each widget is a `canvas::Program` that projects sanitized mesh geometry
//! from the scene registry into the canvas plane. Rotation angles come from
//! the application tick; the widgets themselves hold no clock.

pub mod desktop_rig;
pub mod globe;
pub mod starfield;

pub use desktop_rig::DesktopRig;
pub use globe::Globe;
pub use starfield::Starfield;

use iced::Point;

/// Projected vertex: canvas position plus a depth in `[-1, 1]`-ish range
/// used for fading and size attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Projected {
    pub position: Point,
    pub depth: f32,
}

/// Camera distance for the weak-perspective divide. Must stay well outside
/// the unit-ish meshes so the divisor cannot reach zero.
const FOCAL_DISTANCE: f32 = 4.0;

/// Rotates `point` around the Y axis by `yaw` (with a fixed slight X tilt)
/// and projects it onto a canvas of half-extent `radius` centered on
/// `center`.
pub(crate) fn project(point: [f32; 3], yaw: f32, tilt: f32, center: Point, radius: f32) -> Projected {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let x = point[0] * cos_yaw + point[2] * sin_yaw;
    let z = -point[0] * sin_yaw + point[2] * cos_yaw;

    let (sin_tilt, cos_tilt) = tilt.sin_cos();
    let y = point[1] * cos_tilt - z * sin_tilt;
    let z = point[1] * sin_tilt + z * cos_tilt;

    // Weak perspective: geometry is bounded well below FOCAL_DISTANCE, so
    // the divisor stays positive.
    let scale = FOCAL_DISTANCE / (FOCAL_DISTANCE - z);
    Projected {
        position: Point::new(center.x + x * scale * radius, center.y - y * scale * radius),
        depth: z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn origin_projects_to_center() {
        let center = Point::new(100.0, 100.0);
        let projected = project([0.0, 0.0, 0.0], 1.3, 0.4, center, 80.0);
        assert_abs_diff_eq!(projected.position.x, center.x);
        assert_abs_diff_eq!(projected.position.y, center.y);
        assert_abs_diff_eq!(projected.depth, 0.0);
    }

    #[test]
    fn yaw_rotation_moves_x_into_depth() {
        use std::f32::consts::FRAC_PI_2;
        let center = Point::new(0.0, 0.0);
        let projected = project([1.0, 0.0, 0.0], FRAC_PI_2, 0.0, center, 1.0);
        // A quarter turn sends +x to -z.
        assert_abs_diff_eq!(projected.depth, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(projected.position.x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn nearer_points_project_larger() {
        let center = Point::new(0.0, 0.0);
        let near = project([0.5, 0.5, 0.9], 0.0, 0.0, center, 100.0);
        let far = project([0.5, 0.5, -0.9], 0.0, 0.0, center, 100.0);
        assert!(near.position.x.abs() > far.position.x.abs());
    }
}
