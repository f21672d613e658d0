use crate::camera::Ray;
use crate::constants::RAY_PARALLEL_EPSILON;
use glam::{Vec2, Vec3};

/// Client-space pointer position to normalized device coordinates, using the
/// full window as viewport. `None` for an empty viewport.
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, inner_width: f32, inner_height: f32) -> Option<Vec2> {
    if inner_width <= 0.0 || inner_height <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (client_x / inner_width) * 2.0 - 1.0,
        -(client_y / inner_height) * 2.0 + 1.0,
    ))
}

/// First touch of a touch list, given as `(client_x, client_y)` pairs.
#[inline]
pub fn first_touch_point(touches: &[(f32, f32)]) -> Option<Vec2> {
    touches.first().map(|&(x, y)| Vec2::new(x, y))
}

/// Invisible surface the pointer is projected onto while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPlane {
    pub origin: Vec3,
    pub normal: Vec3,
    /// Half width/height of a finite rectangle; `None` is unbounded.
    pub half_extents: Option<Vec2>,
    pub double_sided: bool,
}

impl DragPlane {
    /// Unbounded plane hit from both sides.
    pub fn infinite(origin: Vec3, normal: Vec3) -> Self {
        Self {
            origin,
            normal: normal.normalize_or_zero(),
            half_extents: None,
            double_sided: true,
        }
    }

    /// `size` rectangle centered on `origin`, facing `normal`.
    pub fn rect(origin: Vec3, normal: Vec3, size: Vec2, double_sided: bool) -> Self {
        Self {
            origin,
            normal: normal.normalize_or_zero(),
            half_extents: Some(size * 0.5),
            double_sided,
        }
    }

    /// In-plane axes used to bound the rectangle.
    fn tangents(&self) -> (Vec3, Vec3) {
        let n = self.normal;
        let helper = if n.y.abs() < 0.999 { Vec3::Y } else { Vec3::Z };
        let u = helper.cross(n).normalize();
        let v = n.cross(u);
        (u, v)
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        if self.normal == Vec3::ZERO {
            return None;
        }
        let denom = self.normal.dot(ray.dir);
        // NaN fails every comparison below, so reject it up front
        if !denom.is_finite() || denom.abs() <= RAY_PARALLEL_EPSILON {
            return None;
        }
        // Front face is the side the normal points toward
        if !self.double_sided && denom > 0.0 {
            return None;
        }
        let t = (self.origin - ray.origin).dot(self.normal) / denom;
        if !t.is_finite() || t < 0.0 {
            return None;
        }
        let hit = ray.at(t);
        if !hit.is_finite() {
            return None;
        }
        if let Some(half) = self.half_extents {
            let (u, v) = self.tangents();
            let local = hit - self.origin;
            if local.dot(u).abs() > half.x || local.dot(v).abs() > half.y {
                return None;
            }
        }
        Some(hit)
    }
}
