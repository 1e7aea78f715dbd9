//! WebGPU rendering module
//!
//! Classic triangle-list pipeline with per-vertex colors. World-space
//! geometry is projected through the camera on the CPU before upload, so
//! the shader stays a passthrough.

pub mod frame;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use frame::Frame;
pub use pipeline::RenderState;
pub use vertex::Vertex;
