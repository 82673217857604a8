// src/config.rs
use image::Rgba;

/// Android resource directory the patterns are written to, relative to the project root
pub const OUTPUT_DIR: &str = "app/src/main/res/drawable-nodpi";

pub const PATTERN_WIDTH: u32 = 20;
pub const PATTERN_HEIGHT: u32 = 20;

/// Distance between dots, both axes
pub const DOT_SPACING: u32 = 10;
/// Distance between grid lines, both axes
pub const GRID_SPACING: u32 = 5;

/// Printed to stdout once both files are written
pub const CONFIRMATION: &str = "Patterns created successfully!";

pub const BACKGROUND: Rgba<u8> = Rgba([10, 21, 37, 255]);
pub const FOREGROUND: Rgba<u8> = Rgba([15, 31, 48, 255]);

#[derive(Debug, Clone, Copy)]
pub enum PatternKind {
    Dots,
    Grid,
}

/// One generated file
#[derive(Debug)]
pub struct PatternJob {
    pub kind: PatternKind,
    pub file_name: &'static str,
}

/// Everything the program writes, in order
pub const JOBS: [PatternJob; 2] = [
    PatternJob {
        kind: PatternKind::Dots,
        file_name: "pattern_dots.png",
    },
    PatternJob {
        kind: PatternKind::Grid,
        file_name: "pattern_grid.png",
    },
];
