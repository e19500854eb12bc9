//! ShapeKit Settings Crate
//!
//! Handles editor configuration, validation, and settings persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, InteractionSettings, RenderSettings, ShapeDefaults};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
