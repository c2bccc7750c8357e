use marker_points::core::{CoordMode, ExtractParams, Rgba};
use marker_points::extract;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: extract_markers <image_path> [color-hex]");
        return Ok(());
    };
    let target = match std::env::args().nth(2) {
        Some(hex) => Rgba::from_hex(&hex)?,
        None => Rgba::DEFAULT_TARGET,
    };

    let img = extract::load_rgba(&path)?;
    for mode in CoordMode::ALL {
        let params = ExtractParams { mode, target };
        let markers = extract::extract_from_image(&img, &params);
        println!("{mode}: {} points", markers.len());
        for m in markers.iter().take(5) {
            println!("  ({:>4}, {:>4}) -> {}", m.pixel.x, m.pixel.y, m.point);
        }
    }

    Ok(())
}
