use crate::constants::{CAMERA_FAR, CAMERA_NEAR, DEFAULT_CAMERA_EYE, DEFAULT_FOV_Y_DEG};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// World-space ray with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Perspective camera as pushed by the host's camera rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_radians: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::from_array(DEFAULT_CAMERA_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_radians: DEFAULT_FOV_Y_DEG.to_radians(),
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

impl PerspectiveCamera {
    pub fn looking_at(eye: Vec3, target: Vec3, fov_y_deg: f32) -> Self {
        Self {
            eye,
            target,
            fov_y_radians: fov_y_deg.to_radians(),
            ..Self::default()
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.fov_y_radians,
            self.aspect.max(1e-3),
            self.near,
            self.far,
        );
        let view = Mat4::look_at_rh(self.eye, self.target, self.view_up());
        proj * view
    }

    /// `up`, or a substitute axis when the view direction is parallel to it
    /// (a top-down camera with `up = Y`).
    fn view_up(&self) -> Vec3 {
        let forward = (self.target - self.eye).normalize_or_zero();
        if forward.cross(self.up).length_squared() > 1e-8 {
            return self.up;
        }
        if forward.cross(Vec3::Z).length_squared() > 1e-8 {
            Vec3::Z
        } else {
            Vec3::X
        }
    }

    /// Ray from the eye through a point given in normalized device
    /// coordinates (`-1..1`, Y up).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let forward = (self.target - self.eye).normalize_or_zero();
        let right = forward.cross(self.view_up()).normalize_or_zero();
        let up = right.cross(forward);
        let tan_half = (self.fov_y_radians * 0.5).tan();
        let dir = forward
            + right * (ndc.x * tan_half * self.aspect.max(1e-3))
            + up * (ndc.y * tan_half);
        Ray {
            origin: self.eye,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Project a world point to normalized device coordinates. `None` when
    /// the point is behind the eye.
    pub fn project(&self, p: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * Vec4::new(p.x, p.y, p.z, 1.0);
        (clip.w > 0.0).then(|| Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}
