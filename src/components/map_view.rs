use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::{Closure, WasmClosure};
use web_sys::{
    CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent, WheelEvent,
};
use yew::prelude::*;

use super::SharedViewer;
use crate::geometry::{Point, Size};
use crate::render::paint_scene;
use crate::state::ViewerState;

type DrawSlot = Rc<RefCell<Option<Rc<dyn Fn()>>>>;
type NotifySlot = Rc<RefCell<Callback<()>>>;

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub viewer: SharedViewer,
    /// Changes whenever the viewer was updated from outside the canvas.
    pub revision: u64,
    /// Fired when canvas input changed something the overlays show: the
    /// selection or the zoom level.
    pub on_change: Callback<()>,
}

/// Listeners registered on one target. Removed on `detach` or drop.
struct Listeners {
    target: EventTarget,
    attached: Vec<(&'static str, js_sys::Function)>,
    owned: Vec<Box<dyn Any>>,
}

impl Listeners {
    fn new(target: EventTarget) -> Self {
        Self {
            target,
            attached: Vec::new(),
            owned: Vec::new(),
        }
    }

    fn attach(&mut self, event: &'static str, callback: &js_sys::Function) {
        match self.target.add_event_listener_with_callback(event, callback) {
            Ok(()) => self.attached.push((event, callback.clone())),
            Err(err) => log::warn!("could not listen for {event}: {err:?}"),
        }
    }

    /// Wraps `handler` in a closure owned by this set and attaches it.
    fn on<E: 'static>(&mut self, event: &'static str, handler: impl FnMut(E) + 'static)
    where
        dyn FnMut(E): WasmClosure,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        self.attach(event, closure.as_ref().unchecked_ref());
        self.owned.push(Box::new(closure));
    }

    /// Keeps a closure alive without attaching it here.
    fn hold<T: ?Sized + 'static>(&mut self, closure: Closure<T>) {
        self.owned.push(Box::new(closure));
    }

    fn detach(&mut self) {
        for (event, callback) in self.attached.drain(..) {
            let _ = self.target.remove_event_listener_with_callback(event, &callback);
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Everything the mount effect wired up; dropping it unwires it all.
struct CanvasBindings {
    _canvas: Listeners,
    _window: Listeners,
    drag: Rc<RefCell<Listeners>>,
    draw_ref: DrawSlot,
}

impl Drop for CanvasBindings {
    fn drop(&mut self) {
        self.drag.borrow_mut().detach();
        *self.draw_ref.borrow_mut() = None;
    }
}

fn function_of<T: ?Sized>(closure: &Closure<T>) -> js_sys::Function {
    closure.as_ref().unchecked_ref::<js_sys::Function>().clone()
}

fn local_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(client_x as f64 - rect.left(), client_y as f64 - rect.top())
}

/// Matches the canvas backing store to its container.
fn fit_canvas(canvas: &HtmlCanvasElement) -> Size {
    let (w, h) = canvas
        .parent_element()
        .map(|parent| (parent.client_width(), parent.client_height()))
        .unwrap_or((canvas.client_width(), canvas.client_height()));
    let (w, h) = (w.max(0) as u32, h.max(0) as u32);
    canvas.set_width(w);
    canvas.set_height(h);
    Size::new(w as f64, h as f64)
}

/// Presses the map takes over. Only the primary button pans or selects.
fn claims_press(button: i16) -> bool {
    button == 0
}

fn set_cursor(canvas: &HtmlCanvasElement, dragging: bool) {
    let cursor = if dragging { "grabbing" } else { "grab" };
    let _ = canvas.style().set_property("cursor", cursor);
}

fn redraw(draw_ref: &DrawSlot) {
    let draw = draw_ref.borrow().clone();
    if let Some(draw) = draw {
        draw();
    }
}

fn notify(on_change: &NotifySlot) {
    // clone first: emitting may re-render the parent, which writes the slot
    let callback = on_change.borrow().clone();
    callback.emit(());
}

fn bind_canvas(
    canvas_ref: &NodeRef,
    viewer: Rc<RefCell<ViewerState>>,
    draw_ref: DrawSlot,
    on_change: NotifySlot,
) -> Option<CanvasBindings> {
    let window = web_sys::window()?;
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;

    viewer.borrow_mut().set_viewport(fit_canvas(&canvas));

    let draw: Rc<dyn Fn()> = {
        let canvas = canvas.clone();
        let viewer = viewer.clone();
        Rc::new(move || {
            if !canvas.is_connected() {
                return;
            }
            let Some(mut ctx) = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            else {
                return;
            };
            let viewer = viewer.borrow();
            if let Some(viewport) = viewer.viewport() {
                paint_scene(&mut ctx, viewport, &viewer.scene());
            }
        })
    };
    *draw_ref.borrow_mut() = Some(draw);

    let mut on_canvas = Listeners::new(canvas.clone().into());
    let mut on_window = Listeners::new(window.clone().into());
    let drag = Rc::new(RefCell::new(Listeners::new(window.into())));

    // Move and release are tracked on the window so a drag survives the
    // pointer leaving the canvas.
    let move_cb = {
        let canvas = canvas.clone();
        let viewer = viewer.clone();
        let draw_ref = draw_ref.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let pos = local_point(&canvas, e.client_x(), e.client_y());
            let moved = viewer.borrow_mut().pointer_move(pos);
            if moved {
                redraw(&draw_ref);
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let up_cb = {
        let canvas = canvas.clone();
        let viewer = viewer.clone();
        let draw_ref = draw_ref.clone();
        let on_change = on_change.clone();
        let drag = drag.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            drag.borrow_mut().detach();
            set_cursor(&canvas, false);
            let pos = local_point(&canvas, e.client_x(), e.client_y());
            let changed = viewer.borrow_mut().pointer_up(pos);
            redraw(&draw_ref);
            if changed {
                notify(&on_change);
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    {
        let canvas = canvas.clone();
        let viewer = viewer.clone();
        let drag = drag.clone();
        let move_fn = function_of(&move_cb);
        let up_fn = function_of(&up_cb);
        on_canvas.on("mousedown", move |e: MouseEvent| {
            if !claims_press(e.button()) {
                return;
            }
            // keeps a drag from selecting text in the overlay panels
            e.prevent_default();
            let pos = local_point(&canvas, e.client_x(), e.client_y());
            let dragging = {
                let mut viewer = viewer.borrow_mut();
                viewer.pointer_down(pos);
                viewer.is_dragging()
            };
            if !dragging {
                return;
            }
            let mut drag = drag.borrow_mut();
            drag.detach();
            drag.attach("mousemove", &move_fn);
            drag.attach("mouseup", &up_fn);
            set_cursor(&canvas, true);
        });
    }
    on_canvas.hold(move_cb);
    on_canvas.hold(up_cb);

    {
        let canvas = canvas.clone();
        let viewer = viewer.clone();
        let draw_ref = draw_ref.clone();
        let on_change = on_change.clone();
        on_canvas.on("wheel", move |e: WheelEvent| {
            e.prevent_default();
            let pos = local_point(&canvas, e.client_x(), e.client_y());
            let zoomed = {
                let mut viewer = viewer.borrow_mut();
                let before = viewer.camera().zoom();
                viewer.wheel(pos, e.delta_y());
                viewer.camera().zoom() != before
            };
            redraw(&draw_ref);
            if zoomed {
                notify(&on_change);
            }
        });
    }

    // Single-finger touch drives the same pipeline as the mouse.
    {
        let canvas = canvas.clone();
        let viewer = viewer.clone();
        on_canvas.on("touchstart", move |e: TouchEvent| {
            e.prevent_default();
            let touches = e.touches();
            if touches.length() != 1 {
                viewer.borrow_mut().cancel_gesture();
                return;
            }
            if let Some(t) = touches.item(0) {
                let pos = local_point(&canvas, t.client_x(), t.client_y());
                viewer.borrow_mut().pointer_down(pos);
            }
        });
    }
    {
        let canvas = canvas.clone();
        let viewer = viewer.clone();
        let draw_ref = draw_ref.clone();
        on_canvas.on("touchmove", move |e: TouchEvent| {
            e.prevent_default();
            let Some(t) = e.touches().item(0) else {
                return;
            };
            let pos = local_point(&canvas, t.client_x(), t.client_y());
            let moved = viewer.borrow_mut().pointer_move(pos);
            if moved {
                redraw(&draw_ref);
            }
        });
    }
    {
        let canvas = canvas.clone();
        let viewer = viewer.clone();
        let draw_ref = draw_ref.clone();
        let on_change = on_change.clone();
        on_canvas.on("touchend", move |e: TouchEvent| {
            e.prevent_default();
            if e.touches().length() > 0 {
                return;
            }
            let Some(t) = e.changed_touches().item(0) else {
                return;
            };
            let pos = local_point(&canvas, t.client_x(), t.client_y());
            let changed = viewer.borrow_mut().pointer_up(pos);
            redraw(&draw_ref);
            if changed {
                notify(&on_change);
            }
        });
    }
    {
        let viewer = viewer.clone();
        on_canvas.on("touchcancel", move |_e: TouchEvent| {
            viewer.borrow_mut().cancel_gesture();
        });
    }

    {
        let canvas = canvas.clone();
        let viewer = viewer.clone();
        let draw_ref = draw_ref.clone();
        on_window.on("resize", move |_e: web_sys::Event| {
            viewer.borrow_mut().set_viewport(fit_canvas(&canvas));
            redraw(&draw_ref);
        });
    }

    redraw(&draw_ref);
    Some(CanvasBindings {
        _canvas: on_canvas,
        _window: on_window,
        drag,
        draw_ref,
    })
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    // always the latest callback; listeners are wired once on mount
    let on_change = use_mut_ref(|| props.on_change.clone());
    *on_change.borrow_mut() = props.on_change.clone();

    {
        let canvas_ref = canvas_ref.clone();
        let viewer = props.viewer.0.clone();
        let draw_ref = draw_ref.clone();
        let on_change = on_change.clone();
        use_effect_with((), move |_| {
            let bindings = bind_canvas(&canvas_ref, viewer, draw_ref, on_change);
            if bindings.is_none() {
                log::warn!("map canvas unavailable; input is not wired");
            }
            move || drop(bindings)
        });
    }
    {
        let draw_ref = draw_ref.clone();
        use_effect_with(props.revision, move |_| {
            redraw(&draw_ref);
            || ()
        });
    }

    html! {
        <div style="position:absolute; inset:0;">
            <canvas
                ref={canvas_ref}
                style="display:block; cursor:grab; touch-action:none;"
            />
        </div>
    }
}
