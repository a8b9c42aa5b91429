use std::{error::Error, path::PathBuf};

use clap::Parser;
use log::info;
use swatch::{
    preview::{self, Corners},
    settings::{Resolution, Settings},
    shader::ShaderKind,
};

/// Renders a swatch fragment shader on the CPU and saves it as an image.
#[derive(Debug, Parser)]
struct Args {
    /// Shader to evaluate: `tinted` or `checkerboard`.
    shader: ShaderKind,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Value of the time uniform, in seconds.
    #[arg(long, conflicts_with = "frame")]
    time: Option<f32>,

    /// Derive the time uniform from a frame index.
    #[arg(long)]
    frame: Option<u32>,

    #[arg(short, long)]
    output: PathBuf,
}

impl Args {
    fn settings(&self) -> Settings {
        let settings = Settings::default().resolution(Resolution::new(self.width, self.height));
        match (self.time, self.frame) {
            (Some(time), _) => settings.time(time),
            (None, Some(frame)) => settings.frame(frame),
            (None, None) => settings,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    // the GPU module for the same entry point must be well-formed too
    #[cfg(feature = "compile-shaders")]
    {
        let words = args.shader.module()?;
        info!("preview - {} SPIR-V module has {} words", args.shader, words.len());
    }

    let image = preview::render(args.shader, &args.settings(), &Corners::default())?;
    image.save(&args.output)?;

    info!("preview - wrote {}", args.output.display());
    Ok(())
}
