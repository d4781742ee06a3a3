// SPDX-License-Identifier: MPL-2.0
//! Decorative 3D scene assets.
//!
//! The page's canvases (desktop rig, globe, starfield) draw projected mesh
//! geometry. This module owns that geometry: [`geometry`] defines the
//! attribute-array mesh representation, [`models`] builds the meshes
//! procedurally, and [`sanitize`] runs the one-time pass that scrubs
//! non-finite attribute values before an asset is first rendered.
//!
//! Rendering itself (projection, stroking paths into a canvas frame) lives
//! with the widgets in `ui::widgets`; this module is pure data.

pub mod geometry;
pub mod models;
pub mod sanitize;

pub use geometry::{BoundingSphere, MeshGeometry};
pub use sanitize::{AssetId, SanitizeReport, SceneAssets};
