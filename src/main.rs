mod config;
mod pattern;
mod utils;

use anyhow::Result;
use config::{
    PatternKind, BACKGROUND, CONFIRMATION, FOREGROUND, JOBS, OUTPUT_DIR, PATTERN_HEIGHT,
    PATTERN_WIDTH,
};
use image::RgbaImage;
use pattern::{generate_dots_pattern, generate_grid_pattern};
use std::path::{Path, PathBuf};
use utils::{ensure_dir, save_png};

fn render(kind: PatternKind) -> Result<RgbaImage> {
    match kind {
        PatternKind::Dots => {
            generate_dots_pattern(PATTERN_WIDTH, PATTERN_HEIGHT, BACKGROUND, FOREGROUND)
        }
        PatternKind::Grid => {
            generate_grid_pattern(PATTERN_WIDTH, PATTERN_HEIGHT, BACKGROUND, FOREGROUND)
        }
    }
}

/// Write every pattern under `root`, returning the paths written
fn run(root: &Path) -> Result<Vec<PathBuf>> {
    let out_dir = root.join(OUTPUT_DIR);
    ensure_dir(&out_dir)?;

    let mut written = Vec::with_capacity(JOBS.len());
    for job in JOBS.iter() {
        let img = render(job.kind)?;
        let path = out_dir.join(job.file_name);
        save_png(&img, &path)?;
        written.push(path);
    }
    Ok(written)
}

fn main() -> Result<()> {
    env_logger::init();

    run(Path::new("."))?;
    println!("{}", CONFIRMATION);
    Ok(())
}
