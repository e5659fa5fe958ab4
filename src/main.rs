use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::{self, File};
use std::io::{BufWriter, Write};

use sphere_tracer::cli::Args;
use sphere_tracer::logger::init_logger;
use sphere_tracer::{render, scenes, write_ppm};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let settings = args.render_settings();
    settings.validate()?;

    let world = scenes::materials_scene().context("building the scene")?;
    let camera = scenes::default_camera(settings.aspect_ratio()).context("building the camera")?;

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("seeding the generator with {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_os_rng(),
    };

    let image = render(&camera, &world, &settings, &mut rng)?;

    if let Some(dir) = args.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }
    let file = File::create(&args.output)
        .with_context(|| format!("opening {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    write_ppm(&mut out, &image).context("writing the image")?;
    out.flush()?;

    log::info!("wrote {}", args.output.display());
    Ok(())
}
