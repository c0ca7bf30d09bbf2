use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = escape_field::RenderArgs::parse();
    let presenter = escape_field::PpmFilePresenter::new();
    let mut controller = escape_field::RenderController::new(presenter);

    controller.generate(&args)?;
    controller.write(&args.output)?;

    Ok(())
}
