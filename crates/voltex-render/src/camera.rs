//! Orbit camera rig for preview rendering.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Radius of the sphere bounding the unit preview cube (√3 / 2).
pub const BOUNDING_RADIUS: f32 = 0.866_025_4;

/// Default preview camera angle, also used when baking thumbnails.
pub const DEFAULT_ANGLE: OrbitAngle = OrbitAngle {
    yaw: 127.5,
    pitch: -22.5,
};

/// Yaw/pitch pair in degrees controlling the camera position on a sphere
/// around the preview subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitAngle {
    /// Rotation around the vertical axis, in degrees.
    pub yaw: f32,
    /// Elevation above the horizontal plane, in degrees.
    pub pitch: f32,
}

impl OrbitAngle {
    /// Creates an orbit angle from yaw and pitch in degrees.
    #[must_use]
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Returns the angle with both components wrapped into [0, 360).
    ///
    /// Camera math normalizes first, which makes rendering exactly
    /// 360°-periodic: an angle and angle+360° produce bit-identical views.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            yaw: self.yaw.rem_euclid(360.0),
            pitch: self.pitch.rem_euclid(360.0),
        }
    }
}

impl Default for OrbitAngle {
    fn default() -> Self {
        DEFAULT_ANGLE
    }
}

/// A perspective camera orbiting the preview cube at a fixed distance.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera orientation.
    pub rotation: Quat,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl OrbitCamera {
    /// Builds the camera for an orbit angle and distance.
    ///
    /// Both angle axes are sign-inverted before the Euler rotation so that
    /// drag gestures orbit the subject in the expected direction, and the
    /// camera is pulled back along its own backward vector by `distance`.
    /// A zero or negative distance is degenerate (camera at or inside the
    /// subject) but still produces a valid camera.
    #[must_use]
    pub fn build_view(angle: OrbitAngle, distance: f32, fov_degrees: f32) -> Self {
        let angle = angle.normalized();
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            (-angle.yaw).to_radians(),
            (-angle.pitch).to_radians(),
            0.0,
        );
        let position = (rotation * Vec3::NEG_Z) * -distance;
        Self {
            position,
            rotation,
            fov: fov_degrees.to_radians().clamp(0.01, std::f32::consts::PI - 0.01),
            near: 0.01,
            far: 100.0,
        }
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    /// Returns the projection matrix for the given aspect ratio.
    #[must_use]
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect_ratio, self.near, self.far)
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        self.projection_matrix(aspect_ratio) * self.view_matrix()
    }
}

/// Returns the camera distance at which a sphere of `radius` exactly fills
/// a vertical field of view of `fov_degrees`.
///
/// The stock settings use a fixed distance of 6.5; this derives one from
/// the bounding sphere instead, for hosts that want the subject to fill
/// the preview regardless of FOV. [`BOUNDING_RADIUS`] bounds the unit cube.
#[must_use]
pub fn fit_distance(fov_degrees: f32, radius: f32) -> f32 {
    let half_fov = (fov_degrees.to_radians() * 0.5).clamp(0.005, std::f32::consts::FRAC_PI_2);
    radius / half_fov.sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_angle() {
        let angle = OrbitAngle::default();
        assert_eq!(angle.yaw, 127.5);
        assert_eq!(angle.pitch, -22.5);
    }

    #[test]
    fn test_normalized_wraps_into_range() {
        let angle = OrbitAngle::new(487.5, -22.5).normalized();
        assert_eq!(angle.yaw, 127.5);
        assert_eq!(angle.pitch, 337.5);
    }

    #[test]
    fn test_camera_faces_the_origin() {
        let camera = OrbitCamera::build_view(DEFAULT_ANGLE, 6.5, 30.0);
        assert!((camera.position.length() - 6.5).abs() < 1e-4);
        // Marching `distance` along the forward vector lands at the subject.
        let subject = camera.position + camera.forward() * 6.5;
        assert!(subject.length() < 1e-4);
    }

    #[test]
    fn test_zero_distance_is_degenerate_but_valid() {
        let camera = OrbitCamera::build_view(DEFAULT_ANGLE, 0.0, 30.0);
        assert_eq!(camera.position, Vec3::ZERO);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn test_negative_distance_places_camera_past_subject() {
        let camera = OrbitCamera::build_view(DEFAULT_ANGLE, -2.0, 30.0);
        assert!((camera.position.length() - 2.0).abs() < 1e-4);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn test_fit_distance_exceeds_radius() {
        let d = fit_distance(30.0, BOUNDING_RADIUS);
        assert!(d > BOUNDING_RADIUS);
        // Wider FOV needs less distance.
        assert!(fit_distance(60.0, BOUNDING_RADIUS) < d);
    }

    proptest! {
        // Angles on a 0.5° lattice keep angle+360 exactly representable,
        // so periodicity can be checked bit-for-bit.
        #[test]
        fn prop_view_is_360_periodic(yaw_steps in -1440i32..1440, pitch_steps in -1440i32..1440) {
            let yaw = yaw_steps as f32 * 0.5;
            let pitch = pitch_steps as f32 * 0.5;
            let a = OrbitCamera::build_view(OrbitAngle::new(yaw, pitch), 6.5, 30.0);
            let b = OrbitCamera::build_view(OrbitAngle::new(yaw + 360.0, pitch - 360.0), 6.5, 30.0);
            prop_assert_eq!(a.position, b.position);
            prop_assert_eq!(a.rotation, b.rotation);
        }

        #[test]
        fn prop_camera_distance_matches_request(yaw in -720.0f32..720.0, pitch in -720.0f32..720.0, distance in 0.1f32..50.0) {
            let camera = OrbitCamera::build_view(OrbitAngle::new(yaw, pitch), distance, 30.0);
            prop_assert!((camera.position.length() - distance).abs() < distance * 1e-4 + 1e-4);
        }
    }
}
