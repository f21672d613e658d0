use crate::camera::PerspectiveCamera;
use crate::constants::MAX_TRACKED_OBJECTS;
use crate::input::DragPlane;
use glam::Vec3;

/// Host game state the drag line reads while tracking the pointer.
///
/// Everything here is owned by the game; the overlay only mirrors what the
/// host pushes through the bindings. The drag flag itself lives on
/// `DragLine` so flag edges can drive listener changes.
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    /// Tracked object positions; the drag originates from the first one.
    pub tracked: Vec<Option<Vec3>>,
    pub camera: PerspectiveCamera,
    pub drag_plane: Option<DragPlane>,
}

impl SceneState {
    /// Store a tracked position. Indices at or past `MAX_TRACKED_OBJECTS`
    /// are rejected and return false.
    pub fn set_tracked(&mut self, index: usize, pos: Option<Vec3>) -> bool {
        if index >= MAX_TRACKED_OBJECTS {
            log::warn!("[scene] tracked index {} out of range", index);
            return false;
        }
        if index >= self.tracked.len() {
            if pos.is_none() {
                return true;
            }
            self.tracked.resize(index + 1, None);
        }
        self.tracked[index] = pos;
        true
    }

    #[inline]
    pub fn drag_source(&self) -> Option<Vec3> {
        self.tracked.first().copied().flatten()
    }
}
