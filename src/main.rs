use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use softraster::config::{Cli, RenderConfig};
use softraster::pattern::test_pattern;
use softraster::{Engine, FrameBuffer, Mesh};

fn render(config: &RenderConfig) -> softraster::Result<FrameBuffer> {
    match &config.model {
        None => {
            log::info!("generating test image...");
            Ok(test_pattern(config.width, config.height))
        }
        Some(path) => {
            log::info!(
                "rendering {} ({} mode) from model at {}...",
                config.output.display(),
                config.mode,
                path.display()
            );
            let mesh = Mesh::from_obj(path)?;
            let mut engine = Engine::new(config.width, config.height);
            engine.set_render_mode(config.mode);
            engine.set_light(config.light);
            engine.render(&mesh);
            Ok(engine.into_buffer())
        }
    }
}

fn run(config: &RenderConfig) -> softraster::Result<()> {
    let mut image = render(config)?;

    // Origin at the bottom-left corner of the written image
    image.flip_vertically();
    image.write_file(&config.output)?;
    log::info!("wrote {}", config.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.help {
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    }

    let config = RenderConfig::from(cli);
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
