pub mod flash;
pub mod rotation;
pub mod scroll;
pub mod transition;

pub use flash::*;
pub use rotation::*;
pub use scroll::*;
pub use transition::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static GLITCH_WGSL: &str = include_str!("../../shaders/glitch.wgsl");
