/// Translation of pointer, touch, wheel and keyboard input into rotation impulses
use crate::motion::Motion;
use crate::stage::Stage;

/// Collaborator that owns the "is rotating" flag and receives stage updates.
///
/// The flag belongs to the parent UI; the component only reads and writes it
/// through this trait.
pub trait IslandHost {
    fn is_rotating(&self) -> bool;
    fn set_is_rotating(&mut self, rotating: bool);
    fn set_current_stage(&mut self, stage: Option<Stage>);
}

/// Horizontal coordinate of a pointer or touch sample.
///
/// Touch events carry the first touch point; mouse and pointer events only
/// have `client_x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub client_x: f64,
    pub touch_x: Option<f64>,
}

impl PointerPosition {
    pub fn mouse(client_x: f64) -> Self {
        Self {
            client_x,
            touch_x: None,
        }
    }

    pub fn touch(touch_x: f64) -> Self {
        Self {
            client_x: touch_x,
            touch_x: Some(touch_x),
        }
    }

    pub fn x(&self) -> f64 {
        self.touch_x.unwrap_or(self.client_x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }

    fn direction(self) -> Option<f64> {
        match self {
            Key::ArrowLeft => Some(1.0),
            Key::ArrowRight => Some(-1.0),
            Key::Other => None,
        }
    }
}

/// Host-neutral input event. Pointer and touch variants share handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerPosition),
    PointerUp,
    PointerMove(PointerPosition),
    Wheel { delta_y: f64 },
    /// Fired for the initial press and for every key repeat
    KeyDown(Key),
    KeyUp(Key),
}

/// Where an impulse came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpulseSource {
    Wheel,
    Drag,
    Keyboard,
}

/// Feeds input events into a [`Motion`]
#[derive(Debug, Clone)]
pub struct InputAdapter {
    last_x: f64,
    viewport_width: f64,
}

impl InputAdapter {
    pub fn new(viewport_width: f64) -> Self {
        let mut adapter = Self::default();
        adapter.set_viewport_width(viewport_width);
        adapter
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Width used to normalize drag distances. Non-positive or non-finite
    /// widths are ignored.
    pub fn set_viewport_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.viewport_width = width;
        } else {
            log::warn!(
                "ignoring viewport width {width}, keeping {}",
                self.viewport_width
            );
        }
    }

    pub fn last_x(&self) -> f64 {
        self.last_x
    }

    /// Apply one event. Returns `true` when the event was consumed and the
    /// host should suppress its default action.
    pub fn handle<H: IslandHost + ?Sized>(
        &mut self,
        event: InputEvent,
        motion: &mut Motion,
        host: &mut H,
    ) -> bool {
        match event {
            InputEvent::PointerDown(position) => {
                host.set_is_rotating(true);
                self.last_x = position.x();
                true
            }
            InputEvent::PointerUp => {
                host.set_is_rotating(false);
                true
            }
            InputEvent::PointerMove(position) => {
                if !host.is_rotating() {
                    return false;
                }
                let x = position.x();
                let delta = (x - self.last_x) / self.viewport_width;
                self.impulse(
                    ImpulseSource::Drag,
                    -delta * motion.config().drag_multiplier,
                    motion,
                );
                self.last_x = x;
                true
            }
            InputEvent::Wheel { delta_y } => {
                let raw = if delta_y > 0.0 { 1.0 } else { -1.0 };
                self.impulse(ImpulseSource::Wheel, raw, motion);
                false
            }
            InputEvent::KeyDown(key) => {
                if let Some(raw) = key.direction() {
                    host.set_is_rotating(true);
                    self.impulse(ImpulseSource::Keyboard, raw, motion);
                }
                false
            }
            InputEvent::KeyUp(key) => {
                if key != Key::Other {
                    host.set_is_rotating(false);
                }
                false
            }
        }
    }

    fn impulse(&self, source: ImpulseSource, raw: f64, motion: &mut Motion) {
        log::debug!("{source:?} impulse {raw:+.4}");
        motion.apply_impulse(raw);
    }
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self {
            last_x: 0.0,
            viewport_width: 1.0,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Default)]
    pub(crate) struct RecordingHost {
        pub rotating: bool,
        pub rotating_calls: Vec<bool>,
        pub stages: Vec<Option<Stage>>,
    }

    impl IslandHost for RecordingHost {
        fn is_rotating(&self) -> bool {
            self.rotating
        }

        fn set_is_rotating(&mut self, rotating: bool) {
            self.rotating = rotating;
            self.rotating_calls.push(rotating);
        }

        fn set_current_stage(&mut self, stage: Option<Stage>) {
            self.stages.push(stage);
        }
    }

    fn setup(width: f64) -> (InputAdapter, Motion, RecordingHost) {
        (InputAdapter::new(width), Motion::default(), RecordingHost::default())
    }

    #[test]
    fn test_wheel_direction() {
        let (mut adapter, mut motion, mut host) = setup(1.0);
        let consumed = adapter.handle(InputEvent::Wheel { delta_y: 120.0 }, &mut motion, &mut host);
        assert!(!consumed);
        assert!((motion.velocity() - 0.0015).abs() < 1e-12);

        adapter.handle(InputEvent::Wheel { delta_y: -3.0 }, &mut motion, &mut host);
        adapter.handle(InputEvent::Wheel { delta_y: -3.0 }, &mut motion, &mut host);
        assert!((motion.velocity() + 0.0015).abs() < 1e-12);
        assert!(host.rotating_calls.is_empty());
    }

    #[test]
    fn test_zero_wheel_delta_counts_as_up() {
        let (mut adapter, mut motion, mut host) = setup(1.0);
        adapter.handle(InputEvent::Wheel { delta_y: 0.0 }, &mut motion, &mut host);
        assert!((motion.velocity() + 0.0015).abs() < 1e-12);
    }

    #[test]
    fn test_move_ignored_when_not_dragging() {
        let (mut adapter, mut motion, mut host) = setup(10.0);
        let consumed = adapter.handle(
            InputEvent::PointerMove(PointerPosition::mouse(500.0)),
            &mut motion,
            &mut host,
        );
        assert!(!consumed);
        assert_eq!(motion.velocity(), 0.0);
        assert_eq!(adapter.last_x(), 0.0);
    }

    #[test]
    fn test_drag_impulse() {
        let (mut adapter, mut motion, mut host) = setup(20.0);
        assert!(adapter.handle(
            InputEvent::PointerDown(PointerPosition::mouse(100.0)),
            &mut motion,
            &mut host,
        ));
        assert!(host.rotating);

        // 10 units right over a 20 unit viewport: raw -0.5 * 10 = -5
        assert!(adapter.handle(
            InputEvent::PointerMove(PointerPosition::mouse(110.0)),
            &mut motion,
            &mut host,
        ));
        assert!((motion.velocity() + 5.0 * 0.0015).abs() < 1e-12);
        assert_eq!(adapter.last_x(), 110.0);

        // Moving back to the start cancels the impulse exactly
        adapter.handle(
            InputEvent::PointerMove(PointerPosition::mouse(100.0)),
            &mut motion,
            &mut host,
        );
        assert!(motion.velocity().abs() < 1e-12);

        assert!(adapter.handle(InputEvent::PointerUp, &mut motion, &mut host));
        assert!(!host.rotating);
    }

    #[test]
    fn test_touch_coordinate_preferred() {
        let position = PointerPosition {
            client_x: 5.0,
            touch_x: Some(42.0),
        };
        assert_eq!(position.x(), 42.0);
        assert_eq!(PointerPosition::mouse(7.0).x(), 7.0);
        assert_eq!(PointerPosition::touch(3.0).x(), 3.0);
    }

    #[test]
    fn test_arrow_repeats_stack() {
        let (mut adapter, mut motion, mut host) = setup(1.0);
        for _ in 0..3 {
            adapter.handle(InputEvent::KeyDown(Key::ArrowLeft), &mut motion, &mut host);
        }
        assert!((motion.velocity() - 3.0 * 0.0015).abs() < 1e-12);
        assert!(host.rotating);

        adapter.handle(InputEvent::KeyDown(Key::ArrowRight), &mut motion, &mut host);
        assert!((motion.velocity() - 2.0 * 0.0015).abs() < 1e-12);

        adapter.handle(InputEvent::KeyUp(Key::ArrowRight), &mut motion, &mut host);
        assert!(!host.rotating);
    }

    #[test]
    fn test_other_keys_ignored() {
        let (mut adapter, mut motion, mut host) = setup(1.0);
        adapter.handle(InputEvent::KeyDown(Key::Other), &mut motion, &mut host);
        adapter.handle(InputEvent::KeyUp(Key::Other), &mut motion, &mut host);
        assert_eq!(motion.velocity(), 0.0);
        assert!(host.rotating_calls.is_empty());
        assert_eq!(Key::from_dom("a"), Key::Other);
        assert_eq!(Key::from_dom("ArrowLeft"), Key::ArrowLeft);
    }

    #[test]
    fn test_invalid_viewport_width_kept() {
        let mut adapter = InputAdapter::new(12.5);
        adapter.set_viewport_width(0.0);
        adapter.set_viewport_width(f64::NAN);
        adapter.set_viewport_width(-3.0);
        assert_eq!(adapter.viewport_width(), 12.5);
    }
}
