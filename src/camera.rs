use ct_math::{transform::{look_at, perspective}, *};
use crate::settings::{CameraSettings, VisionSettings};

/// Graphics camera description
#[derive(Clone, PartialEq, Debug)]
pub struct CameraInfo {
    pub name:         String,
    /// Vertical field of view in degrees
    pub fov_y:        f32,
    pub aspect_ratio: f32,
    pub near_plane:   f32,
    pub far_plane:    f32,
    pub position:     f32v3,
    pub target:       f32v3,
    pub up:           f32v3,
}

impl Default for CameraInfo {
    fn default() -> Self {
        Self::from(&CameraSettings::default())
    }
}

impl From<&CameraSettings> for CameraInfo {
    fn from(settings: &CameraSettings) -> Self {
        Self {
            name: settings.name.clone(),
            fov_y: settings.fov_y,
            aspect_ratio: settings.aspect_ratio,
            near_plane: settings.near_plane,
            far_plane: settings.far_plane,
            position: f32v3::from_array(settings.position),
            target: f32v3::from_array(settings.target),
            up: f32v3::from_array(settings.up),
        }
    }
}

/// Right-handed perspective camera, looking from `position` towards `target`
#[derive(Clone, PartialEq, Debug)]
pub struct Camera {
    info: CameraInfo,
}

impl Camera {
    pub fn new(info: CameraInfo) -> Self {
        Self { info }
    }

    pub fn info(&self) -> &CameraInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn set_position(&mut self, position: f32v3) {
        self.info.position = position;
    }

    pub fn set_target(&mut self, target: f32v3) {
        self.info.target = target;
    }

    /// World to view space
    #[must_use]
    pub fn view(&self) -> f32m4 {
        look_at(self.info.position, self.info.target, self.info.up)
    }

    /// View to clip space
    #[must_use]
    pub fn projection(&self) -> f32m4 {
        perspective(radians(self.info.fov_y), self.info.aspect_ratio, self.info.near_plane, self.info.far_plane)
    }

    #[must_use]
    pub fn view_projection(&self) -> f32m4 {
        self.projection() * self.view()
    }

    /// Project a world space point to normalized device coordinates
    ///
    /// Returns `None` for points behind the camera.
    pub fn project(&self, point: f32v3) -> Option<f32v3> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w() <= 0.0 {
            return None;
        }
        Some(clip.xyz() / clip.w())
    }
}

/// Pinhole camera model, as used in computer vision
///
/// The camera looks down `+z` in its own space, pixel coordinates grow right and down from the image origin.
/// Lens distortion coefficients `k1, k2, p1, p2, k3` are carried for consumers, projection ignores them.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PinholeCamera {
    pub intrinsics: f32m3,
    /// World to camera space
    pub extrinsics: f32m4,
    pub distortion: Vector<f32, 5>,
}

impl PinholeCamera {
    pub fn new(focal: f32v2, principal_point: f32v2) -> Self {
        Self {
            intrinsics: f32m3::new(Layout::RowMajor, [
                focal.x(), 0.0,       principal_point.x(),
                0.0,       focal.y(), principal_point.y(),
                0.0,       0.0,       1.0,
            ]),
            extrinsics: f32m4::identity(),
            distortion: Vector::zero(),
        }
    }

    pub fn focal(&self) -> f32v2 {
        f32v2::new(self.intrinsics[(0, 0)], self.intrinsics[(1, 1)])
    }

    pub fn principal_point(&self) -> f32v2 {
        f32v2::new(self.intrinsics[(0, 2)], self.intrinsics[(1, 2)])
    }

    /// Project a world space point to pixel coordinates
    ///
    /// Returns `None` for points that are not in front of the camera.
    pub fn project(&self, point: f32v3) -> Option<f32v2> {
        let cam = (self.extrinsics * point.extend(1.0)).xyz();
        if cam.z() <= 0.0 {
            return None;
        }
        let image = self.intrinsics * cam;
        Some(image.xy() / image.z())
    }

    /// Get the world space point at `depth` along the ray through `pixel`
    pub fn unproject(&self, pixel: f32v2, depth: f32) -> f32v3 {
        let ray = self.intrinsics.inverse() * pixel.extend(1.0);
        let cam = ray * depth;
        (self.extrinsics.inverse() * cam.extend(1.0)).xyz()
    }
}

impl Default for PinholeCamera {
    fn default() -> Self {
        Self::from(&VisionSettings::default())
    }
}

impl From<&VisionSettings> for PinholeCamera {
    fn from(settings: &VisionSettings) -> Self {
        let mut camera = Self::new(f32v2::from_array(settings.focal), f32v2::from_array(settings.principal_point));
        camera.distortion = Vector::from_array(settings.distortion);
        camera
    }
}
