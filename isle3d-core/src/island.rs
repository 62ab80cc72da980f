/// The island component: input, motion and stage reporting behind one frame callback
use std::cell::RefCell;
use std::rc::Rc;

use nalgebra::{Matrix4, Vector3};

use crate::config::MotionConfig;
use crate::error::Result;
use crate::input::{InputAdapter, InputEvent, IslandHost};
use crate::motion::{Motion, RotationState};
use crate::scene::{attach_island_meshes, AssetBundle, MeshAttachment};
use crate::stage::{classify, Stage};
use crate::transform::TransformNode;

/// Initial placement of the island group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IslandProps {
    pub position: Vector3<f64>,
    pub rotation: Vector3<f64>,
    pub scale: Vector3<f64>,
    /// Width used to normalize drag distances
    pub viewport_width: f64,
}

impl Default for IslandProps {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: Vector3::zeros(),
            scale: Vector3::repeat(1.0),
            viewport_width: 1.0,
        }
    }
}

/// Owner-side view of the island's transform node.
///
/// Cloning shares the same node. Motion state is not reachable from here.
#[derive(Debug, Clone)]
pub struct IslandHandle {
    node: Rc<RefCell<TransformNode>>,
}

impl IslandHandle {
    pub fn transform(&self) -> TransformNode {
        *self.node.borrow()
    }

    pub fn rotation_y(&self) -> f64 {
        self.node.borrow().rotation.y
    }

    pub fn model_matrix(&self) -> Matrix4<f64> {
        self.node.borrow().model_matrix()
    }

    pub fn set_position(&self, position: Vector3<f64>) {
        self.node.borrow_mut().position = position;
    }

    pub fn set_scale(&self, scale: Vector3<f64>) {
        self.node.borrow_mut().scale = scale;
    }

    /// Set the X tilt and Z roll. Y belongs to the motion and is rewritten
    /// every frame.
    pub fn set_tilt(&self, x: f64, z: f64) {
        let mut node = self.node.borrow_mut();
        node.rotation.x = x;
        node.rotation.z = z;
    }
}

pub struct Island<H> {
    motion: Motion,
    input: InputAdapter,
    node: Rc<RefCell<TransformNode>>,
    host: H,
    last_stage: Option<Stage>,
}

impl<H: IslandHost> Island<H> {
    /// Build the component and the handle its owner keeps.
    pub fn new(props: IslandProps, config: MotionConfig, host: H) -> Result<(Self, IslandHandle)> {
        config.validate()?;

        let node = Rc::new(RefCell::new(TransformNode::new(
            props.position,
            props.rotation,
            props.scale,
        )));
        let handle = IslandHandle { node: node.clone() };

        let island = Self {
            motion: Motion::new(config),
            input: InputAdapter::new(props.viewport_width),
            node,
            host,
            last_stage: None,
        };
        Ok((island, handle))
    }

    /// Attach the fixed island meshes from a pre-loaded bundle
    pub fn attach_meshes<B: AssetBundle>(
        &self,
        bundle: &B,
    ) -> Result<Vec<MeshAttachment<B::Geometry, B::Material>>> {
        let attachments = attach_island_meshes(bundle)?;
        log::debug!("attached {} island meshes", attachments.len());
        Ok(attachments)
    }

    /// Feed one input event. Returns `true` when the host should prevent
    /// the event's default action.
    pub fn on_event(&mut self, event: InputEvent) -> bool {
        self.input.handle(event, &mut self.motion, &mut self.host)
    }

    /// Per-frame update: integrate, rotate the node, report the stage.
    ///
    /// The stage is reported on every call, changed or not.
    pub fn on_frame(&mut self) {
        let angle = self.motion.step();
        self.node.borrow_mut().rotation.y = angle;

        let stage = classify(angle);
        if stage != self.last_stage {
            log::debug!("stage {:?} -> {:?} at angle {angle:.4}", self.last_stage, stage);
            self.last_stage = stage;
        }
        self.host.set_current_stage(stage);
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.input.set_viewport_width(width);
    }

    pub fn rotation(&self) -> RotationState {
        self.motion.state()
    }

    pub fn current_stage(&self) -> Option<Stage> {
        self.last_stage
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
