/// Drag line tuning constants.
///
/// Distances are in world units of the host scene; colors are `0xRRGGBB`.
// Vertical lift applied to both endpoints so the line floats above the surface
pub const LINE_Y_OFFSET: f32 = 0.035;

// Distance at which the gradient saturates to red
pub const MAX_DRAG_DISTANCE: f32 = 0.5;

// Gradient stops
pub const COLOR_NEAR: u32 = 0x04ff00; // green
pub const COLOR_MID: u32 = 0xffbb00; // orange
pub const COLOR_FAR: u32 = 0xff0000; // red

// Shown when an endpoint is missing
pub const COLOR_FALLBACK: u32 = 0x0000ff; // blue

// Line width in CSS pixels
pub const LINE_WIDTH_PX: f32 = 3.0;

// Default camera used until the host pushes its own
pub const DEFAULT_CAMERA_EYE: [f32; 3] = [0.0, 1.5, 2.0];
pub const DEFAULT_FOV_Y_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 100.0;

// Upper bound on tracked object slots the host may fill
pub const MAX_TRACKED_OBJECTS: usize = 64;

// Rays closer than this to parallel with the plane are treated as misses
pub const RAY_PARALLEL_EPSILON: f32 = 1e-6;
