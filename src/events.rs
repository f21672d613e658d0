use crate::drag_line::{DragLine, ListenerChange};
use crate::input;
use crate::state::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared handles the pointer callbacks write through.
#[derive(Clone)]
pub struct PointerWiring {
    pub scene: Rc<RefCell<SceneState>>,
    pub line: Rc<RefCell<DragLine>>,
}

/// Window-level `mousemove`/`touchmove` subscriptions for one drag.
///
/// Dropping the guard unsubscribes both and resets the body cursor.
pub struct DragListeners {
    window: web::Window,
    mouse_move: Closure<dyn FnMut(web::MouseEvent)>,
    touch_move: Closure<dyn FnMut(web::TouchEvent)>,
}

impl DragListeners {
    pub fn attach(w: &PointerWiring) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

        let wm = w.clone();
        let mouse_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            on_pointer_move(&wm, ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(_)>);

        let wt = w.clone();
        let touch_move = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let touches = ev.touches();
            let points: Vec<(f32, f32)> = touches
                .get(0)
                .map(|t| (t.client_x() as f32, t.client_y() as f32))
                .into_iter()
                .collect();
            if let Some(p) = input::first_touch_point(&points) {
                on_pointer_move(&wt, p.x, p.y);
            }
        }) as Box<dyn FnMut(_)>);

        window
            .add_event_listener_with_callback("mousemove", mouse_move.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if let Err(e) = window
            .add_event_listener_with_callback("touchmove", touch_move.as_ref().unchecked_ref())
        {
            _ = window.remove_event_listener_with_callback(
                "mousemove",
                mouse_move.as_ref().unchecked_ref(),
            );
            return Err(anyhow::anyhow!("{:?}", e));
        }

        Ok(Self {
            window,
            mouse_move,
            touch_move,
        })
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        _ = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.mouse_move.as_ref().unchecked_ref(),
        );
        _ = self.window.remove_event_listener_with_callback(
            "touchmove",
            self.touch_move.as_ref().unchecked_ref(),
        );
        if let Some(body) = self.window.document().and_then(|d| d.body()) {
            _ = body.style().set_property("cursor", "default");
        }
    }
}

fn on_pointer_move(w: &PointerWiring, client_x: f32, client_y: f32) {
    let Some(window) = web::window() else {
        return;
    };
    let inner = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    let width = inner(window.inner_width());
    let height = inner(window.inner_height());
    let Some(ndc) = input::pointer_ndc(client_x, client_y, width, height) else {
        return;
    };
    w.scene.borrow_mut().camera.aspect = width / height;
    let scene = w.scene.borrow();
    w.line.borrow_mut().handle_pointer_move(ndc, &scene);
}

/// Apply a drag flag change: subscribe on drag start, drop the guard on end.
pub fn sync_drag_listeners(
    w: &PointerWiring,
    slot: &RefCell<Option<DragListeners>>,
    dragging: bool,
) {
    let change = w.line.borrow_mut().set_dragging(dragging);
    match change {
        ListenerChange::Attach => match DragListeners::attach(w) {
            Ok(l) => {
                *slot.borrow_mut() = Some(l);
                log::info!("[drag] begin");
            }
            Err(e) => log::error!("[drag] listener attach failed: {:?}", e),
        },
        ListenerChange::Detach => {
            slot.borrow_mut().take();
            log::info!("[drag] end");
        }
        ListenerChange::Unchanged => {}
    }
}
