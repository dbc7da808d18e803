use sequential_model::build_model;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let model = build_model()?;
    log::debug!("{model}");

    Ok(())
}
