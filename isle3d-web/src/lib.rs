//! Isle3D Web - WASM bindings for the island component
//!
//! The page owns rendering and the animation frame loop. It constructs an
//! [`IslandView`] for its canvas, calls `update()` once per frame and reads the
//! island transform back through `rotationY()` / `modelMatrix()`.

use std::cell::RefCell;
use std::rc::Rc;

use isle3d_core::{Island, IslandHandle, IslandProps, MotionConfig};
use js_sys::Function;
use nalgebra::Vector3;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, HtmlCanvasElement};

pub mod events;
pub mod host;
pub mod listeners;

use events::{passive_option, translate, DomInput, CANVAS_EVENTS, WINDOW_EVENTS};
use host::JsHost;
use listeners::EventSubscription;

type SharedIsland = Rc<RefCell<Island<JsHost>>>;

#[wasm_bindgen]
pub struct IslandView {
    island: SharedIsland,
    handle: IslandHandle,
    subscriptions: Vec<EventSubscription>,
}

#[wasm_bindgen]
impl IslandView {
    /// Mount the island on `canvas` with the default motion tuning.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        viewport_width: f64,
        set_is_rotating: Function,
        set_current_stage: Function,
    ) -> Result<IslandView, JsValue> {
        Self::mount(
            canvas,
            viewport_width,
            set_is_rotating,
            set_current_stage,
            MotionConfig::default(),
        )
    }

    /// Mount with an initial tilt (X) and roll (Z); Y follows the spin.
    #[wasm_bindgen(js_name = "withRotation")]
    pub fn with_rotation(
        canvas: HtmlCanvasElement,
        viewport_width: f64,
        set_is_rotating: Function,
        set_current_stage: Function,
        rotation_x: f64,
        rotation_z: f64,
    ) -> Result<IslandView, JsValue> {
        let view = Self::mount(
            canvas,
            viewport_width,
            set_is_rotating,
            set_current_stage,
            MotionConfig::default(),
        )?;
        view.handle.set_tilt(rotation_x, rotation_z);
        Ok(view)
    }

    /// Mount with custom tuning; missing values keep their defaults.
    #[wasm_bindgen(js_name = "withMotion")]
    pub fn with_motion(
        canvas: HtmlCanvasElement,
        viewport_width: f64,
        set_is_rotating: Function,
        set_current_stage: Function,
        damping: Option<f64>,
        gain: Option<f64>,
        drag_multiplier: Option<f64>,
    ) -> Result<IslandView, JsValue> {
        let defaults = MotionConfig::default();
        let config = MotionConfig {
            damping: damping.unwrap_or(defaults.damping),
            gain: gain.unwrap_or(defaults.gain),
            drag_multiplier: drag_multiplier.unwrap_or(defaults.drag_multiplier),
        };
        Self::mount(canvas, viewport_width, set_is_rotating, set_current_stage, config)
    }

    /// Render-loop callback, once per animation frame
    pub fn update(&self) {
        match self.island.try_borrow_mut() {
            Ok(mut island) => island.on_frame(),
            Err(_) => log::warn!("frame skipped: island is busy"),
        }
    }

    /// Push the parent's `isRotating` value without triggering `setIsRotating`
    #[wasm_bindgen(js_name = "syncIsRotating")]
    pub fn sync_is_rotating(&self, rotating: bool) {
        match self.island.try_borrow_mut() {
            Ok(mut island) => island.host_mut().sync_is_rotating(rotating),
            Err(_) => log::warn!("isRotating sync skipped: island is busy"),
        }
    }

    #[wasm_bindgen(js_name = "setViewportWidth")]
    pub fn set_viewport_width(&self, width: f64) {
        match self.island.try_borrow_mut() {
            Ok(mut island) => island.set_viewport_width(width),
            Err(_) => log::warn!("viewport width {width} skipped: island is busy"),
        }
    }

    #[wasm_bindgen(js_name = "rotationY")]
    pub fn rotation_y(&self) -> f64 {
        self.handle.rotation_y()
    }

    /// Island model matrix, column-major, 16 values
    #[wasm_bindgen(js_name = "modelMatrix")]
    pub fn model_matrix(&self) -> Vec<f64> {
        self.handle.model_matrix().as_slice().to_vec()
    }

    #[wasm_bindgen(js_name = "setPosition")]
    pub fn set_position(&self, x: f64, y: f64, z: f64) {
        self.handle.set_position(Vector3::new(x, y, z));
    }

    /// X tilt and Z roll of the island group, in radians
    #[wasm_bindgen(js_name = "setRotation")]
    pub fn set_rotation(&self, x: f64, z: f64) {
        self.handle.set_tilt(x, z);
    }

    #[wasm_bindgen(js_name = "setScale")]
    pub fn set_scale(&self, x: f64, y: f64, z: f64) {
        self.handle.set_scale(Vector3::new(x, y, z));
    }

    /// Remove every listener. The view stays usable for reading the transform.
    pub fn dispose(&mut self) {
        let count = self.subscriptions.len();
        self.subscriptions.clear();
        log::info!("island unmounted, removed {count} listeners");
    }
}

impl IslandView {
    fn mount(
        canvas: HtmlCanvasElement,
        viewport_width: f64,
        set_is_rotating: Function,
        set_current_stage: Function,
        config: MotionConfig,
    ) -> Result<IslandView, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let props = IslandProps {
            viewport_width,
            ..IslandProps::default()
        };
        let host = JsHost::new(set_is_rotating, set_current_stage);
        let (island, handle) = Island::new(props, config, host)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let island = Rc::new(RefCell::new(island));

        let canvas: &EventTarget = canvas.as_ref();
        let window: &EventTarget = window.as_ref();
        let mut subscriptions = Vec::with_capacity(CANVAS_EVENTS.len() + WINDOW_EVENTS.len());
        for (name, kind) in CANVAS_EVENTS {
            subscriptions.push(subscribe(canvas, name, kind, &island)?);
        }
        for (name, kind) in WINDOW_EVENTS {
            subscriptions.push(subscribe(window, name, kind, &island)?);
        }
        log::info!("island mounted with {} listeners", subscriptions.len());

        Ok(IslandView {
            island,
            handle,
            subscriptions,
        })
    }
}

fn subscribe(
    target: &EventTarget,
    name: &'static str,
    kind: DomInput,
    island: &SharedIsland,
) -> Result<EventSubscription, JsValue> {
    let island = Rc::clone(island);
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Some(input) = translate(kind, &event) else {
            return;
        };
        let consumed = match island.try_borrow_mut() {
            Ok(mut island) => island.on_event(input),
            Err(_) => {
                log::warn!("{name} dropped: island is busy");
                return;
            }
        };
        if consumed {
            event.prevent_default();
        }
    });
    EventSubscription::new(target, name, passive_option(kind), callback)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("isle3d-web loaded");
    Ok(())
}
