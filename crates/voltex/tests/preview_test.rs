//! End-to-end tests for the preview pipeline, driving the public API the
//! way a host inspector would: resolve the asset slot, orbit the camera,
//! render interactive frames, and bake a static thumbnail.

use voltex::*;

/// A 2x2x2 volume of fully opaque red texels.
fn red_cube() -> Volume {
    Volume::solid(UVec3::splat(2), Vec4::new(1.0, 0.0, 0.0, 1.0)).unwrap()
}

#[test]
fn test_red_cube_end_to_end() {
    let volume = red_cube();
    let renderer = PreviewRenderer::new();
    let mut session = PreviewSession::new();
    session.settings_mut().quality = SampleQuality::Q16;

    // Session defaults match the documented reset pose.
    assert_eq!(session.angle(), OrbitAngle::new(127.5, -22.5));
    assert_eq!(session.settings().distance, 6.5);
    assert_eq!(session.settings().density, 1.0);

    let frame = session.render_preview(&renderer, &volume, 64, 64);

    // A red cube silhouette surrounded by transparent background: the
    // center pixel is saturated red, the corners show nothing.
    assert_eq!(frame.pixel(32, 32), Vec4::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(frame.pixel(0, 0), Vec4::ZERO);
    assert_eq!(frame.pixel(63, 0), Vec4::ZERO);
    assert_eq!(frame.pixel(0, 63), Vec4::ZERO);
    assert_eq!(frame.pixel(63, 63), Vec4::ZERO);

    // Some pixels are covered, some are not.
    let covered = frame.pixels().iter().filter(|p| p.w > 0.0).count();
    assert!(covered > 0);
    assert!(covered < frame.pixels().len());

    // Re-rendering with identical inputs is byte-identical.
    let again = session.render_preview(&renderer, &volume, 64, 64);
    assert_eq!(frame.to_rgba8(), again.to_rgba8());
}

#[test]
fn test_thumbnail_matches_preview_math() {
    let volume = red_cube();
    let renderer = PreviewRenderer::new();
    let session = PreviewSession::new();

    // The static thumbnail path and the interactive path share one code
    // path, so equal sizes produce equal frames.
    let preview = session.render_preview(&renderer, &volume, 128, 128);
    let thumbnail = session.render_thumbnail(&renderer, &volume, 128, 128);
    assert_eq!(preview, thumbnail);

    // Thumbnails encode for the host's asset-browser cache.
    let png = encode_png(&thumbnail).unwrap();
    assert!(!png.is_empty());
}

#[test]
fn test_orbit_drag_and_reset() {
    let mut session = PreviewSession::new();

    session.drag(Vec2::new(128.0, 64.0), Vec2::new(256.0, 256.0));
    assert_eq!(session.angle(), OrbitAngle::new(127.5 - 90.0, -22.5 - 45.0));

    session.drag(Vec2::new(-32.0, 0.0), Vec2::new(256.0, 256.0));
    assert_eq!(session.angle().yaw, 127.5 - 90.0 + 22.5);

    // Reset restores exactly the documented default regardless of drags.
    session.reset_camera();
    assert_eq!(session.angle(), OrbitAngle::new(127.5, -22.5));
}

#[test]
fn test_full_turn_renders_identically() {
    let volume = red_cube();
    let renderer = PreviewRenderer::new();
    let mut session = PreviewSession::new();

    let before = session.render_preview(&renderer, &volume, 32, 32);

    // Drag exactly one full turn on both axes: 360 = delta / 256 * 180.
    session.drag(Vec2::new(512.0, 512.0), Vec2::new(256.0, 256.0));
    let after = session.render_preview(&renderer, &volume, 32, 32);
    assert_eq!(before, after);
}

#[test]
fn test_asset_slot_errors_are_label_ready() {
    let err = expect_volume(None).unwrap_err();
    assert_eq!(err.to_string(), "no volume assigned to the preview slot");

    let volume = red_cube();
    let resolved = expect_volume(Some(&volume)).unwrap();
    assert_eq!(resolved.dim(), UVec3::splat(2));
}

#[test]
fn test_quality_tiers_match_host_dropdown() {
    let names: Vec<&str> = SampleQuality::ALL.iter().map(|q| q.name()).collect();
    assert_eq!(names, vec!["16", "32", "64", "128", "256", "512"]);

    for (index, quality) in SampleQuality::ALL.iter().enumerate() {
        assert_eq!(SampleQuality::from_index(index as u32), *quality);
    }
}

#[test]
fn test_degenerate_requests_produce_empty_results() {
    let volume = red_cube();
    let renderer = PreviewRenderer::new();
    let mut session = PreviewSession::new();

    // Zero-sized frame request.
    assert!(session.render_preview(&renderer, &volume, 0, 0).is_empty());

    // Camera inside the subject still renders without panicking.
    session.settings_mut().distance = 0.0;
    let frame = session.render_preview(&renderer, &volume, 16, 16);
    assert_eq!(frame.width(), 16);
}
