#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

pub const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Save a `width x height` black PNG with the given pixels recolored.
pub fn write_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    marks: &[(u32, u32, Rgba<u8>)],
) -> PathBuf {
    let mut img = RgbaImage::from_pixel(width, height, BLACK);
    for &(x, y, c) in marks {
        img.put_pixel(x, y, c);
    }
    let path = dir.join(name);
    img.save(&path).expect("save png");
    path
}

/// Same as [`write_png`] but without an alpha channel.
pub fn write_rgb_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    marks: &[(u32, u32)],
) -> PathBuf {
    let mut img = RgbImage::from_pixel(width, height, Rgb([0, 0, 0]));
    for &(x, y) in marks {
        img.put_pixel(x, y, Rgb([0, 255, 0]));
    }
    let path = dir.join(name);
    img.save(&path).expect("save png");
    path
}
