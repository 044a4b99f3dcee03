//! Per-editing-session preview state.
//!
//! A [`PreviewSession`] is what a host keeps alive between repaints of one
//! preview widget: the current orbit angle and render settings. It lives
//! for the editing session only; nothing here persists on its own.

use glam::Vec2;
use voltex_core::RenderSettings;
use voltex_render::{OrbitAngle, PreviewRenderer, DEFAULT_ANGLE};
use voltex_volume::{Frame, Volume};

/// Maximum edge length of an inspector preview, in pixels.
pub const MAX_PREVIEW_SIZE: u32 = 512;

/// Orbit and settings state for one preview widget.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSession {
    angle: OrbitAngle,
    settings: RenderSettings,
}

impl Default for PreviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewSession {
    /// Creates a session at the default camera angle and settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            angle: DEFAULT_ANGLE,
            settings: RenderSettings::default(),
        }
    }

    /// Creates a session with explicit settings.
    #[must_use]
    pub fn with_settings(settings: RenderSettings) -> Self {
        Self {
            angle: DEFAULT_ANGLE,
            settings,
        }
    }

    /// Returns the current camera angle.
    #[must_use]
    pub fn angle(&self) -> OrbitAngle {
        self.angle
    }

    /// Returns the current render settings.
    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Returns the render settings for mutation by host widgets.
    pub fn settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.settings
    }

    /// Sets back the camera angle.
    pub fn reset_camera(&mut self) {
        self.angle = DEFAULT_ANGLE;
    }

    /// Applies a pointer drag over the preview rectangle to the camera
    /// angle: `angle -= delta / min(rect_w, rect_h) * 180`.
    ///
    /// A zero or negative rectangle dimension is degenerate and leaves the
    /// angle unchanged.
    pub fn drag(&mut self, delta: Vec2, rect_size: Vec2) {
        let edge = rect_size.x.min(rect_size.y);
        if edge <= 0.0 {
            return;
        }
        let scaled = delta / edge * 180.0;
        self.angle.yaw -= scaled.x;
        self.angle.pitch -= scaled.y;
    }

    /// Renders one interactive preview frame at the session's current
    /// angle and settings. Called once per host repaint.
    #[must_use]
    pub fn render_preview(
        &self,
        renderer: &PreviewRenderer,
        volume: &Volume,
        width: u32,
        height: u32,
    ) -> Frame {
        renderer.render(volume, self.angle, &self.settings, width, height)
    }

    /// Renders a one-shot static thumbnail at the session's current angle
    /// (the default angle when the camera was never dragged).
    ///
    /// Identical math to [`render_preview`](Self::render_preview); caching
    /// the result is the caller's concern.
    #[must_use]
    pub fn render_thumbnail(
        &self,
        renderer: &PreviewRenderer,
        volume: &Volume,
        width: u32,
        height: u32,
    ) -> Frame {
        log::debug!("baking {width}x{height} static thumbnail");
        renderer.render(volume, self.angle, &self.settings, width, height)
    }
}

/// Computes the preview edge length for an inspector of `view_width`
/// pixels, reserving `margin` and clamping to [`MAX_PREVIEW_SIZE`].
#[must_use]
pub fn preview_size(view_width: u32, margin: u32) -> u32 {
    view_width.saturating_sub(margin).min(MAX_PREVIEW_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_defaults() {
        let session = PreviewSession::new();
        assert_eq!(session.angle(), DEFAULT_ANGLE);
        assert_eq!(*session.settings(), RenderSettings::default());
    }

    #[test]
    fn test_drag_scales_by_short_edge() {
        let mut session = PreviewSession::new();
        session.drag(Vec2::new(128.0, 0.0), Vec2::new(256.0, 512.0));
        // yaw -= 128 / 256 * 180
        assert_eq!(session.angle().yaw, 127.5 - 90.0);
        assert_eq!(session.angle().pitch, -22.5);
    }

    #[test]
    fn test_drag_moves_both_axes() {
        let mut session = PreviewSession::new();
        session.drag(Vec2::new(64.0, -64.0), Vec2::new(128.0, 128.0));
        assert_eq!(session.angle().yaw, 127.5 - 90.0);
        assert_eq!(session.angle().pitch, -22.5 + 90.0);
    }

    #[test]
    fn test_zero_rect_drag_is_ignored() {
        let mut session = PreviewSession::new();
        session.drag(Vec2::new(50.0, 50.0), Vec2::ZERO);
        session.drag(Vec2::new(50.0, 50.0), Vec2::new(-10.0, 128.0));
        assert_eq!(session.angle(), DEFAULT_ANGLE);
    }

    #[test]
    fn test_reset_restores_default_angle() {
        let mut session = PreviewSession::new();
        session.drag(Vec2::new(300.0, -120.0), Vec2::new(256.0, 256.0));
        assert_ne!(session.angle(), DEFAULT_ANGLE);

        session.reset_camera();
        assert_eq!(session.angle(), DEFAULT_ANGLE);
        assert_eq!(session.angle().yaw, 127.5);
        assert_eq!(session.angle().pitch, -22.5);
    }

    #[test]
    fn test_preview_size_clamps_to_maximum() {
        assert_eq!(preview_size(400, 20), 380);
        assert_eq!(preview_size(2000, 20), MAX_PREVIEW_SIZE);
        // Margin wider than the view saturates to zero.
        assert_eq!(preview_size(16, 20), 0);
    }
}
