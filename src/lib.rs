mod camera;
mod error;
mod geom;
mod input;
pub mod math;
mod settings;

pub use camera::{Camera, FirstPersonCamera, OrbitCamera, Projection, MAX_PITCH};
pub use error::CameraError;
pub use geom::{Position, Viewport};
pub use input::{sample_mouse, CursorDevice, FrameInput, MouseDelta, Movement, MovementKeys};
pub use settings::{CameraSettings, FirstPersonSettings, OrbitSettings, ProjectionSettings};
