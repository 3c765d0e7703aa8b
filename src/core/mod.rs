pub mod error;
pub mod metrics;

pub use error::{ForgeError, Result};
pub use metrics::StageTimer;
