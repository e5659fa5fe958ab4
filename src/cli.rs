use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

use crate::renderer::RenderSettings;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sphere_tracer")]
#[command(about = "Renders a small sphere scene to a PPM image")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 256)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 256)]
    pub height: u32,

    /// Samples per pixel
    #[arg(short = 's', long, default_value_t = 100)]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Seed for the random generator; omit for a non-reproducible render
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output PPM file; its directory is created if missing
    #[arg(short, long, default_value = "output/materials.ppm")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            image_width: self.width,
            image_height: self.height,
            samples_per_pixel: self.samples_per_pixel,
            max_depth: self.max_depth,
        }
    }
}
