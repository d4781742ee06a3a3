// SPDX-License-Identifier: MPL-2.0
//! One-time mesh sanitation, keyed by asset identity.
//!
//! Imported geometry can carry non-finite attribute values out of the asset
//! pipeline. Before an asset is first rendered, every position and normal
//! component is scanned once; invalid entries are replaced with zero, and
//! the bounding sphere is recomputed when anything changed so downstream
//! visibility checks never see a stale volume.
//!
//! The pass is idempotent and runs once per [`AssetId`]: [`SceneAssets`]
//! caches the sanitized mesh, so a second load of the same asset returns
//! the cached copy without rescanning.

use crate::error::AssetError;
use crate::scene::geometry::MeshGeometry;
use std::collections::HashMap;

/// Identity of a loadable scene asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    DesktopRig,
    Globe,
    Starfield,
}

/// What the sanitation pass had to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SanitizeReport {
    pub replaced_positions: usize,
    pub replaced_normals: usize,
}

impl SanitizeReport {
    #[must_use]
    pub fn replaced_any(&self) -> bool {
        self.replaced_positions + self.replaced_normals > 0
    }
}

/// Replaces every non-finite component with `0.0` and refreshes the
/// bounding sphere iff a replacement occurred or no sphere was cached.
pub fn sanitize(mesh: &mut MeshGeometry) -> SanitizeReport {
    let report = SanitizeReport {
        replaced_positions: scrub(mesh.positions_mut()),
        replaced_normals: scrub(mesh.normals_mut()),
    };

    if report.replaced_any() || mesh.bounding_sphere().is_none() {
        mesh.compute_bounding_sphere();
    }

    if report.replaced_any() {
        tracing::warn!(
            positions = report.replaced_positions,
            normals = report.replaced_normals,
            "replaced non-finite mesh attribute values"
        );
    }
    report
}

fn scrub(attribute: &mut [f32]) -> usize {
    let mut replaced = 0;
    for value in attribute.iter_mut() {
        if !value.is_finite() {
            *value = 0.0;
            replaced += 1;
        }
    }
    replaced
}

/// A loaded, sanitized asset.
#[derive(Debug, Clone)]
pub struct MeshAsset {
    pub geometry: MeshGeometry,
    pub report: SanitizeReport,
}

/// Registry of loaded scene assets. Sanitation runs exactly once per id.
#[derive(Debug, Default)]
pub struct SceneAssets {
    assets: HashMap<AssetId, MeshAsset>,
}

impl SceneAssets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the asset for `id`, building and sanitizing it on first use.
    /// The builder only runs when the asset is not cached yet.
    pub fn load_with<F>(&mut self, id: AssetId, build: F) -> Result<&MeshAsset, AssetError>
    where
        F: FnOnce() -> Result<MeshGeometry, AssetError>,
    {
        use std::collections::hash_map::Entry;
        match self.assets.entry(id) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let mut geometry = build()?;
                let report = sanitize(&mut geometry);
                tracing::debug!(?id, vertices = geometry.vertex_count(), "scene asset loaded");
                Ok(entry.insert(MeshAsset { geometry, report }))
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: AssetId) -> Option<&MeshAsset> {
        self.assets.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn mesh_with_nan_at_position_5() -> MeshGeometry {
        // Three vertices; index 5 (second vertex, z component) is NaN.
        let positions = vec![
            1.0, 0.0, 0.0, //
            0.0, 1.0, f32::NAN, //
            0.0, 0.0, 1.0,
        ];
        let normals = vec![
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ];
        MeshGeometry::new(positions, normals).expect("valid shape")
    }

    #[test]
    fn nan_at_index_5_becomes_exactly_zero() {
        let mut mesh = mesh_with_nan_at_position_5();
        let report = sanitize(&mut mesh);

        assert_eq!(report.replaced_positions, 1);
        assert_eq!(report.replaced_normals, 0);
        assert_abs_diff_eq!(mesh.points()[1][2], 0.0);
    }

    #[test]
    fn bounding_sphere_is_recomputed_after_replacement() {
        let mut mesh = mesh_with_nan_at_position_5();
        // Seed a stale sphere so the pass has something to invalidate. The
        // NaN z component poisons the centroid.
        mesh.compute_bounding_sphere();
        let stale = mesh.bounding_sphere().expect("seeded");
        assert!(stale.center[2].is_nan());

        let report = sanitize(&mut mesh);
        assert!(report.replaced_any());
        let fresh = mesh.bounding_sphere().expect("recomputed");
        assert!(fresh.center[2].is_finite());
        assert!(fresh.radius.is_finite());
        assert!(fresh.radius > 0.0);
    }

    #[test]
    fn clean_mesh_with_cached_sphere_is_untouched() {
        let mut mesh = MeshGeometry::new(vec![1.0, 2.0, 3.0], vec![]).expect("valid");
        mesh.compute_bounding_sphere();
        let before = mesh.bounding_sphere();

        let report = sanitize(&mut mesh);
        assert!(!report.replaced_any());
        assert_eq!(mesh.bounding_sphere(), before);
    }

    #[test]
    fn sanitize_computes_missing_sphere_even_when_clean() {
        let mut mesh = MeshGeometry::new(vec![1.0, 2.0, 3.0], vec![]).expect("valid");
        mesh.clear_bounding_sphere();
        sanitize(&mut mesh);
        assert!(mesh.bounding_sphere().is_some());
    }

    #[test]
    fn sanitize_is_idempotent() {
        let mut mesh = mesh_with_nan_at_position_5();
        let first = sanitize(&mut mesh);
        assert!(first.replaced_any());
        let snapshot = mesh.clone();

        let second = sanitize(&mut mesh);
        assert!(!second.replaced_any());
        assert_eq!(mesh, snapshot);
    }

    #[test]
    fn registry_builds_each_asset_once() {
        let mut assets = SceneAssets::new();
        let mut builds = 0;

        for _ in 0..3 {
            let asset = assets
                .load_with(AssetId::Globe, || {
                    builds += 1;
                    Ok(mesh_with_nan_at_position_5())
                })
                .expect("builder succeeds");
            assert!(asset.report.replaced_any());
        }
        assert_eq!(builds, 1);
        assert!(assets.get(AssetId::Globe).is_some());
        assert!(assets.get(AssetId::Starfield).is_none());
    }

    #[test]
    fn registry_propagates_builder_errors() {
        let mut assets = SceneAssets::new();
        let err = assets
            .load_with(AssetId::DesktopRig, || Err(AssetError::EmptyGeometry))
            .unwrap_err();
        assert_eq!(err, AssetError::EmptyGeometry);
        // A failed build is not cached; the next load retries.
        assert!(assets.get(AssetId::DesktopRig).is_none());
    }
}
