/// Island host backed by JavaScript setter callbacks
use isle3d_core::{IslandHost, Stage};
use js_sys::Function;
use wasm_bindgen::JsValue;

/// Mirrors the parent's `isRotating` flag and forwards updates to
/// `setIsRotating(bool)` and `setCurrentStage(number | null)`.
pub struct JsHost {
    is_rotating: bool,
    set_is_rotating: Function,
    set_current_stage: Function,
}

impl JsHost {
    pub fn new(set_is_rotating: Function, set_current_stage: Function) -> Self {
        Self {
            is_rotating: false,
            set_is_rotating,
            set_current_stage,
        }
    }

    /// Sync the mirror with the parent without calling back into it
    pub fn sync_is_rotating(&mut self, rotating: bool) {
        self.is_rotating = rotating;
    }
}

/// Value handed to `setCurrentStage`: the stage number, or null for none
pub fn stage_number(stage: Option<Stage>) -> Option<u8> {
    stage.map(Stage::number)
}

impl IslandHost for JsHost {
    fn is_rotating(&self) -> bool {
        self.is_rotating
    }

    fn set_is_rotating(&mut self, rotating: bool) {
        self.is_rotating = rotating;
        if let Err(e) = self
            .set_is_rotating
            .call1(&JsValue::NULL, &JsValue::from_bool(rotating))
        {
            log::error!("setIsRotating threw: {:?}", e);
        }
    }

    fn set_current_stage(&mut self, stage: Option<Stage>) {
        let value = match stage_number(stage) {
            Some(number) => JsValue::from(number),
            None => JsValue::NULL,
        };
        if let Err(e) = self.set_current_stage.call1(&JsValue::NULL, &value) {
            log::error!("setCurrentStage threw: {:?}", e);
        }
    }
}
