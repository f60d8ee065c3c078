pub mod group;
pub mod host;
pub mod layout;
pub mod mirror;
pub mod side;

pub use group::PanelGroup;
pub use host::{MirroredPanels, PanelHost};
pub use layout::{LayoutState, RawLayoutReport, Rect};
pub use mirror::OvershootPolicy;
pub use side::ActiveSide;
