mod error;

pub use error::{Result, TriPaneError};
