mod loader;
mod types;

pub use loader::{init_config, load_config};
pub use types::Config;
