use crate::dom;
use crate::drag_line::DragLine;
use crate::render;
use crate::state::SceneState;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneState>>,
    pub line: Rc<RefCell<DragLine>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());

        let segment = self.line.borrow().segment();
        let camera = self.scene.borrow().camera;
        if let Err(e) = gpu.render(segment.as_ref(), &camera, dom::device_pixel_ratio()) {
            log::warn!("[frame] render skipped: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = RefCell<Option<Closure<dyn FnMut()>>>;

/// Owner of the `requestAnimationFrame` loop. The tick closure only holds a
/// weak reference to itself, so dropping this handle cancels the pending
/// frame and releases the frame context.
pub struct FrameLoop {
    tick: Rc<TickSlot>,
    handle: Rc<Cell<i32>>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.handle.get());
        }
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> FrameLoop {
    let tick: Rc<TickSlot> = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(0));
    let weak_tick: Weak<TickSlot> = Rc::downgrade(&tick);
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(tick) = weak_tick.upgrade() {
            request_frame(&tick, &handle_tick);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &handle);
    FrameLoop { tick, handle }
}

fn request_frame(tick: &TickSlot, handle: &Cell<i32>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            handle.set(id);
        }
    }
}
