//! # ShapeKit
//!
//! The core of an interactive 2D vector-shape editor: shapes with vertex
//! editing, grab/rotate/scale sessions and polygon mesh operations, driven
//! by pointer and keyboard input and rendered through a pluggable backend.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Vector and transform math, vertex buffer layout, errors
//! 2. **shapekit-settings** - Editor configuration and persistence
//! 3. **shapekit-designer** - Shapes, mesh operations, editor state and rendering
//! 4. **shapekit** - Headless binary that drives a scripted editing session

pub mod demo;

pub use shapekit_core as core;
pub use shapekit_designer as designer;
pub use shapekit_settings as settings;

pub use shapekit_core::{Color, Transform, Vector2};
pub use shapekit_designer::{
    DesignerShape, EditMode, Editor, EditorCommand, EditorError, EditorEvent, RenderBackend,
    Shape, ViewMode,
};
pub use shapekit_settings::{Config, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
