pub mod backend;
pub mod softbuffer_backend;

pub use backend::{Color, RenderBackend};
pub use softbuffer_backend::SoftbufferBackend;
