use shapekit::demo::{self, LogBackend};
use shapekit::{init_logging, SettingsPersistence, VERSION};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!(version = VERSION, "ShapeKit starting");

    let settings = SettingsPersistence::load_or_default();
    let mut backend = LogBackend::default();
    let editor = demo::run(settings.into_config(), &mut backend)?;

    info!(
        shapes = editor.shapes().len(),
        frames = backend.frames(),
        bytes = backend.bytes(),
        "Session finished"
    );
    Ok(())
}
