use clap::Parser;
use julia_renderer::{
    CliArgs, CliRenderController, FAVOURITES, LoggingConfig, PpmFilePresenter, init_logging,
};

fn run(args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.list_presets {
        for (index, preset) in FAVOURITES.iter().enumerate() {
            println!("{}: {} {}", index, preset.name, preset.c);
        }
        println!("Try: {}", julia_renderer::favourites_text());

        return Ok(());
    }

    let config = args.to_config()?;

    if let Some(dir) = args.output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let mut controller = CliRenderController::new(PpmFilePresenter::new());

    controller.generate(&config);
    controller.write(&args.output)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::default());

    run(&CliArgs::parse())
}
