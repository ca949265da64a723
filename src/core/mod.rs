//! Core module - settings and their persistence
//!
//! - [`GameSettings`] - session preferences (promotion default, undo policy)
//! - [`settings_persistence`] - JSON load/save in the platform config directory
//! - [`CoreError`] - failures from the above

pub mod error;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use resources::GameSettings;
pub use settings_persistence::{
    load_settings, load_settings_or_default, save_settings, settings_path,
};
