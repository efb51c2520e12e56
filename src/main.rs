// src/main.rs
use log::info;
use rc_reference::reference::ReferenceGenerator;
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let outputs = rc_reference::run(&ReferenceGenerator::default())?;
    info!(
        "done: {} and {}",
        outputs.vector_path.display(),
        outputs.raster_path.display()
    );
    Ok(())
}
