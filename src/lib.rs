#![cfg(target_arch = "wasm32")]
use crate::camera::PerspectiveCamera;
use crate::color::Gradient;
use crate::drag_line::{DragLine, DragLineConfig};
use crate::input::DragPlane;
use crate::state::SceneState;
use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod camera;
mod color;
mod constants;
mod dom;
mod drag_line;
mod events;
mod frame;
mod input;
mod render;
mod state;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn window_aspect() -> f32 {
    let Some(w) = web::window() else {
        return 1.0;
    };
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    let (width, height) = (dim(w.inner_width()), dim(w.inner_height()));
    if height > 0.0 {
        width / height
    } else {
        1.0
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drag-line starting");
    Ok(())
}

/// Drag line overlay bound to a canvas stacked over the game view.
///
/// The game owns every input here and pushes changes as they happen.
#[wasm_bindgen]
pub struct DragLineOverlay {
    wiring: events::PointerWiring,
    listeners: Rc<RefCell<Option<events::DragListeners>>>,
    // Dropped with the overlay, which stops drawing
    _frame_loop: frame::FrameLoop,
}

#[wasm_bindgen]
impl DragLineOverlay {
    /// Mirror the game's drag flag; starts or stops pointer tracking.
    pub fn set_dragging(&self, dragging: bool) {
        events::sync_drag_listeners(&self.wiring, &self.listeners, dragging);
    }

    /// Returns false when `index` is out of range.
    pub fn set_tracked_position(&self, index: usize, x: f32, y: f32, z: f32) -> bool {
        self.wiring
            .scene
            .borrow_mut()
            .set_tracked(index, Some(Vec3::new(x, y, z)))
    }

    pub fn clear_tracked(&self, index: usize) -> bool {
        self.wiring.scene.borrow_mut().set_tracked(index, None)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_camera(
        &self,
        eye_x: f32,
        eye_y: f32,
        eye_z: f32,
        target_x: f32,
        target_y: f32,
        target_z: f32,
        fov_deg: f32,
    ) {
        let mut cam = PerspectiveCamera::looking_at(
            Vec3::new(eye_x, eye_y, eye_z),
            Vec3::new(target_x, target_y, target_z),
            fov_deg,
        );
        cam.aspect = window_aspect();
        self.wiring.scene.borrow_mut().camera = cam;
    }

    /// `width`/`height` of zero or less give an unbounded plane.
    #[allow(clippy::too_many_arguments)]
    pub fn set_drag_plane(
        &self,
        origin_x: f32,
        origin_y: f32,
        origin_z: f32,
        normal_x: f32,
        normal_y: f32,
        normal_z: f32,
        width: f32,
        height: f32,
        double_sided: bool,
    ) {
        let origin = Vec3::new(origin_x, origin_y, origin_z);
        let normal = Vec3::new(normal_x, normal_y, normal_z);
        let plane = if width > 0.0 && height > 0.0 {
            DragPlane::rect(origin, normal, Vec2::new(width, height), double_sided)
        } else {
            DragPlane {
                double_sided,
                ..DragPlane::infinite(origin, normal)
            }
        };
        self.wiring.scene.borrow_mut().drag_plane = Some(plane);
    }

    pub fn clear_drag_plane(&self) {
        self.wiring.scene.borrow_mut().drag_plane = None;
    }

    /// Current line color as `#rrggbb`.
    pub fn line_color(&self) -> String {
        self.wiring.line.borrow().color().to_hex_string()
    }

    pub fn has_line(&self) -> bool {
        self.wiring.line.borrow().segment().is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.wiring.line.borrow().is_dragging()
    }

    /// Line origin as `[x, y, z]`, if known.
    pub fn line_start(&self) -> Option<Vec<f32>> {
        self.wiring.line.borrow().start().map(|p| p.to_array().to_vec())
    }

    /// Line endpoint as `[x, y, z]`, if known.
    pub fn line_end(&self) -> Option<Vec<f32>> {
        self.wiring.line.borrow().end().map(|p| p.to_array().to_vec())
    }

    /// Replace the gradient stops (`#rrggbb`) and saturation distance.
    pub fn set_gradient(
        &self,
        near: &str,
        mid: &str,
        far: &str,
        max_distance: f32,
    ) -> Result<(), JsValue> {
        let gradient = Gradient::from_hex(near, mid, far, max_distance)
            .ok_or_else(|| js_sys::Error::new("invalid gradient stops"))?;
        let mut line = self.wiring.line.borrow_mut();
        let config = DragLineConfig {
            gradient,
            ..*line.config()
        };
        line.set_config(config);
        Ok(())
    }
}

/// Create the overlay on `#canvas_id` and start its frame loop.
#[wasm_bindgen]
pub async fn create_overlay(canvas_id: String) -> Result<DragLineOverlay, JsValue> {
    init(&canvas_id)
        .await
        .map_err(|e| js_sys::Error::new(&format!("{:?}", e)).into())
}

async fn init(canvas_id: &str) -> anyhow::Result<DragLineOverlay> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let scene = Rc::new(RefCell::new(SceneState {
        camera: PerspectiveCamera {
            aspect: window_aspect(),
            ..PerspectiveCamera::default()
        },
        ..SceneState::default()
    }));
    let line = Rc::new(RefCell::new(DragLine::new(DragLineConfig::default())));

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        line: line.clone(),
        canvas,
        gpu,
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    Ok(DragLineOverlay {
        wiring: events::PointerWiring { scene, line },
        listeners: Rc::new(RefCell::new(None)),
        _frame_loop: frame_loop,
    })
}
