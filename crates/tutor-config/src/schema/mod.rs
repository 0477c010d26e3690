//! Configuration schema types for the tutor.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the classroom deployment uses.

mod api;
mod model;
mod session;
mod system;

pub use api::*;
pub use model::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TutorConfig {
    pub session: SessionConfig,
    pub model: ModelConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}
