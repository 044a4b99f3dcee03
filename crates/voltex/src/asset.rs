//! Asset-slot checking for host inspectors.
//!
//! The slot a host asks us to preview may be empty or may reference an
//! asset of some other type; both cases surface as descriptive errors the
//! host renders as a label instead of a preview.

use std::any::Any;

use voltex_core::{Result, VoltexError};
use voltex_volume::Volume;

/// An asset that may occupy a host's preview slot.
///
/// Hosts hand the preview layer whatever the inspected field currently
/// references; downcasting decides whether it can be volume-rendered.
pub trait PreviewAsset: Any {
    /// Returns self as `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Human-readable asset type name, used in error labels.
    fn type_name(&self) -> &'static str;
}

impl PreviewAsset for Volume {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        "Volume"
    }
}

/// Resolves the volume occupying a preview slot.
///
/// # Errors
/// - [`VoltexError::EmptyReference`] when the slot is empty
/// - [`VoltexError::WrongAssetType`] when the asset is not a [`Volume`]
pub fn expect_volume(slot: Option<&dyn PreviewAsset>) -> Result<&Volume> {
    let asset = slot.ok_or(VoltexError::EmptyReference)?;
    asset
        .as_any()
        .downcast_ref::<Volume>()
        .ok_or_else(|| VoltexError::WrongAssetType(asset.type_name().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{UVec3, Vec4};

    struct MeshAsset;

    impl PreviewAsset for MeshAsset {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn type_name(&self) -> &'static str {
            "Mesh"
        }
    }

    #[test]
    fn test_empty_slot() {
        let err = expect_volume(None).unwrap_err();
        assert!(matches!(err, VoltexError::EmptyReference));
    }

    #[test]
    fn test_wrong_asset_type_names_the_offender() {
        let mesh = MeshAsset;
        let err = expect_volume(Some(&mesh)).unwrap_err();
        match err {
            VoltexError::WrongAssetType(name) => assert_eq!(name, "Mesh"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_volume_slot_resolves() {
        let volume = Volume::solid(UVec3::splat(2), Vec4::ONE).unwrap();
        let resolved = expect_volume(Some(&volume)).unwrap();
        assert_eq!(resolved.dim(), UVec3::splat(2));
    }
}
