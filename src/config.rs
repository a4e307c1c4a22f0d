//! Render settings and the command line that fills them in.

use std::path::PathBuf;

use clap::Parser;

use crate::engine::RenderMode;
use crate::light::DirectionalLight;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_OUTPUT: &str = "output.tga";

/// Everything one invocation needs to produce an image.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// OBJ model to render. `None` renders the test pattern instead.
    pub model: Option<PathBuf>,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub mode: RenderMode,
    pub light: DirectionalLight,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            model: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mode: RenderMode::default(),
            light: DirectionalLight::default(),
        }
    }
}

/// Render an OBJ model (vertices in [-1, 1]) to an image file.
///
/// Without a model a procedural test pattern is written instead.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, disable_help_flag = true)]
pub struct Cli {
    /// OBJ model to render
    pub model: Option<PathBuf>,

    /// Where to write the image; the extension picks the format
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    #[arg(short = 'm', long = "mode", value_enum, default_value_t = RenderMode::Flat)]
    pub mode: RenderMode,

    /// Print usage and exit without rendering
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

impl From<Cli> for RenderConfig {
    fn from(cli: Cli) -> Self {
        Self {
            model: cli.model,
            output: cli.output,
            width: cli.width,
            height: cli.height,
            mode: cli.mode,
            ..Self::default()
        }
    }
}
