use crate::color::{fallback_color, Gradient, Rgb};
use crate::constants::{LINE_WIDTH_PX, LINE_Y_OFFSET};
use crate::state::SceneState;
use glam::{Vec2, Vec3};

/// Tunables for the drag line, defaulting to the values in `constants`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragLineConfig {
    pub y_offset: f32,
    pub width_px: f32,
    pub gradient: Gradient,
    pub fallback: Rgb,
}

impl Default for DragLineConfig {
    fn default() -> Self {
        Self {
            y_offset: LINE_Y_OFFSET,
            width_px: LINE_WIDTH_PX,
            gradient: Gradient::default(),
            fallback: fallback_color(),
        }
    }
}

/// What the caller must do with the global pointer listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerChange {
    Attach,
    Detach,
    Unchanged,
}

/// Renderable primitive handed to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Rgb,
    pub width_px: f32,
}

#[derive(Debug, Clone, Default)]
pub struct DragLine {
    config: DragLineConfig,
    dragging: bool,
    start: Option<Vec3>,
    end: Option<Vec3>,
}

impl DragLine {
    pub fn new(config: DragLineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &DragLineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DragLineConfig) {
        self.config = config;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn start(&self) -> Option<Vec3> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Vec3> {
        self.end
    }

    /// Follow the host's drag flag. The endpoint is dropped when a drag ends.
    pub fn set_dragging(&mut self, dragging: bool) -> ListenerChange {
        let was = self.dragging;
        self.dragging = dragging;
        if !dragging {
            self.end = None;
        }
        match (was, dragging) {
            (false, true) => ListenerChange::Attach,
            (true, false) => ListenerChange::Detach,
            _ => ListenerChange::Unchanged,
        }
    }

    /// Recompute both endpoints for a pointer at `ndc`. Returns true when the
    /// endpoint moved; a ray that misses the plane leaves it as it was.
    pub fn handle_pointer_move(&mut self, ndc: Vec2, scene: &SceneState) -> bool {
        if !self.dragging {
            return false;
        }
        let Some(plane) = scene.drag_plane.as_ref() else {
            return false;
        };
        let lift = Vec3::new(0.0, self.config.y_offset, 0.0);
        if let Some(src) = scene.drag_source() {
            self.start = Some(src + lift);
        }
        let ray = scene.camera.ray_from_ndc(ndc);
        match plane.intersect(&ray) {
            Some(hit) => {
                self.end = Some(hit + lift);
                true
            }
            None => {
                log::debug!("[drag] ray missed drag plane at ndc=({:.3},{:.3})", ndc.x, ndc.y);
                false
            }
        }
    }

    #[inline]
    pub fn distance(&self) -> Option<f32> {
        Some(self.start?.distance(self.end?))
    }

    pub fn color(&self) -> Rgb {
        match self.distance() {
            Some(d) => self.config.gradient.sample(d),
            None => self.config.fallback,
        }
    }

    pub fn segment(&self) -> Option<LineSegment> {
        if !self.dragging {
            return None;
        }
        let (start, end) = (self.start?, self.end?);
        Some(LineSegment {
            start,
            end,
            color: self.config.gradient.sample(start.distance(end)),
            width_px: self.config.width_px,
        })
    }
}
