/// DOM event names and their translation into component input
use isle3d_core::{InputEvent, Key, PointerPosition};
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent, TouchEvent, WheelEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomInput {
    Down,
    Up,
    Move,
    Wheel,
    KeyDown,
    KeyUp,
}

/// Listeners attached to the canvas
pub const CANVAS_EVENTS: [(&str, DomInput); 7] = [
    ("pointerdown", DomInput::Down),
    ("pointerup", DomInput::Up),
    ("pointermove", DomInput::Move),
    ("touchstart", DomInput::Down),
    ("touchend", DomInput::Up),
    ("touchmove", DomInput::Move),
    ("wheel", DomInput::Wheel),
];

/// Listeners attached to the window
pub const WINDOW_EVENTS: [(&str, DomInput); 2] =
    [("keydown", DomInput::KeyDown), ("keyup", DomInput::KeyUp)];

/// The wheel listener must be able to cancel scrolling
pub fn passive_option(kind: DomInput) -> Option<bool> {
    (kind == DomInput::Wheel).then_some(false)
}

/// First touch point wins over the mouse coordinate
pub fn pointer_position(event: &Event) -> PointerPosition {
    let client_x = event
        .dyn_ref::<MouseEvent>()
        .map(|e| e.client_x() as f64)
        .unwrap_or(0.0);
    let touch_x = event
        .dyn_ref::<TouchEvent>()
        .and_then(|e| e.touches().get(0))
        .map(|touch| touch.client_x() as f64);
    PointerPosition { client_x, touch_x }
}

pub fn translate(kind: DomInput, event: &Event) -> Option<InputEvent> {
    match kind {
        DomInput::Down => Some(InputEvent::PointerDown(pointer_position(event))),
        DomInput::Up => Some(InputEvent::PointerUp),
        DomInput::Move => Some(InputEvent::PointerMove(pointer_position(event))),
        DomInput::Wheel => event
            .dyn_ref::<WheelEvent>()
            .map(|e| InputEvent::Wheel { delta_y: e.delta_y() }),
        DomInput::KeyDown => event
            .dyn_ref::<KeyboardEvent>()
            .map(|e| InputEvent::KeyDown(Key::from_dom(&e.key()))),
        DomInput::KeyUp => event
            .dyn_ref::<KeyboardEvent>()
            .map(|e| InputEvent::KeyUp(Key::from_dom(&e.key()))),
    }
}
