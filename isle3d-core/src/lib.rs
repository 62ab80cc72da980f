//! Isle3D Core Library - host-independent island rotation component
//!
//! Turns pointer, touch, wheel and keyboard input into a damped rotation of
//! the island's transform node and derives the stage indicator the
//! surrounding UI shows. Hosts (web, terminal) only translate native events
//! and drive [`Island::on_frame`] once per rendered frame.

pub mod config;
pub mod error;
pub mod input;
pub mod island;
pub mod motion;
pub mod scene;
pub mod stage;
pub mod transform;

// Re-export commonly used types
pub use config::MotionConfig;
pub use error::IslandError;
pub use input::{InputAdapter, InputEvent, IslandHost, Key, PointerPosition};
pub use island::{Island, IslandHandle, IslandProps};
pub use motion::{Motion, RotationState};
pub use scene::{AssetBundle, MemoryBundle, MeshAttachment};
pub use stage::{classify, normalize_angle, Stage};
pub use transform::{Transform, TransformNode};
