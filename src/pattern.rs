// src/pattern.rs
use crate::config::{DOT_SPACING, GRID_SPACING};
use anyhow::{ensure, Result};
use image::{Rgba, RgbaImage};
use ndarray::{Array1, Array2, Zip};

/// Create a meshgrid from x and y arrays, similar to numpy's meshgrid.
/// Both grids have shape (y.len(), x.len()), so they index as [[row, column]].
pub fn meshgrid<T: Clone + Default>(x: &Array1<T>, y: &Array1<T>) -> (Array2<T>, Array2<T>) {
    let nx = x.len();
    let ny = y.len();

    let mut x_grid = Array2::from_elem((ny, nx), T::default());
    for i in 0..ny {
        x_grid.row_mut(i).assign(x);
    }

    let mut y_grid = Array2::from_elem((ny, nx), T::default());
    for j in 0..nx {
        y_grid.column_mut(j).assign(y);
    }

    (x_grid, y_grid)
}

fn pixel_axis(len: u32) -> Array1<u32> {
    Array1::from_iter(0..len)
}

/// Evaluate `f(x, y)` over every pixel of a `width` x `height` canvas
fn mask(
    width: u32,
    height: u32,
    spacing: u32,
    f: impl Fn(u32, u32) -> bool + Sync,
) -> Result<Array2<bool>> {
    ensure!(spacing > 0, "pattern spacing must be positive");
    let (x_grid, y_grid) = meshgrid(&pixel_axis(width), &pixel_axis(height));

    let mut mask = Array2::from_elem(x_grid.raw_dim(), false);
    Zip::from(&mut mask)
        .and(&x_grid)
        .and(&y_grid)
        .par_for_each(|covered, &x, &y| {
            *covered = f(x, y);
        });
    Ok(mask)
}

/// Pixels where both coordinates are multiples of `spacing`
pub fn dot_mask(width: u32, height: u32, spacing: u32) -> Result<Array2<bool>> {
    mask(width, height, spacing, |x, y| {
        x % spacing == 0 && y % spacing == 0
    })
}

/// Pixels lying on a 1px row or column at every multiple of `spacing`
pub fn grid_mask(width: u32, height: u32, spacing: u32) -> Result<Array2<bool>> {
    mask(width, height, spacing, |x, y| {
        x % spacing == 0 || y % spacing == 0
    })
}

/// Render a coverage mask: `foreground` where the mask is set, `background` elsewhere
pub fn paint(mask: &Array2<bool>, background: Rgba<u8>, foreground: Rgba<u8>) -> RgbaImage {
    let (height, width) = mask.dim();
    let mut img = RgbaImage::from_pixel(width as u32, height as u32, background);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if mask[[y as usize, x as usize]] {
            *pixel = foreground;
        }
    }
    img
}

fn covered_count(mask: &Array2<bool>) -> usize {
    mask.iter().filter(|&&covered| covered).count()
}

pub fn generate_dots_pattern(
    width: u32,
    height: u32,
    background: Rgba<u8>,
    dot: Rgba<u8>,
) -> Result<RgbaImage> {
    let mask = dot_mask(width, height, DOT_SPACING)?;
    log::debug!(
        "dots pattern {}x{}: {} dots",
        width,
        height,
        covered_count(&mask)
    );
    Ok(paint(&mask, background, dot))
}

pub fn generate_grid_pattern(
    width: u32,
    height: u32,
    background: Rgba<u8>,
    line: Rgba<u8>,
) -> Result<RgbaImage> {
    let mask = grid_mask(width, height, GRID_SPACING)?;
    log::debug!(
        "grid pattern {}x{}: {} line pixels",
        width,
        height,
        covered_count(&mask)
    );
    Ok(paint(&mask, background, line))
}
