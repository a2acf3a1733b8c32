/// Basic example: Convert a simple test image to ASCII text
///
/// This creates a test image with a circle and a diagonal line and prints
/// it with a couple of built-in ramps.
use ascii_ramp::{AsciiRenderer, RampPreset, RenderConfig, RenderRequest};
use image::{Rgba, RgbaImage};

fn main() {
    println!("ASCII Ramp - Basic Example");
    println!("==========================\n");

    let width = 160;
    let height = 80;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([40, 40, 40, 255]));

    // White circle in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 30.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            } else if (dist - radius).abs() < 3.0 {
                img.put_pixel(x, y, Rgba([140, 140, 140, 255]));
            }
        }
    }

    // Red diagonal
    for i in 0..height {
        img.put_pixel(i * 2, i, Rgba([255, 0, 0, 255]));
    }

    println!("Created test image: {}x{}\n", width, height);

    let mut renderer = match AsciiRenderer::new(RenderConfig::default()) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    for preset in [RampPreset::LightToDark, RampPreset::Classic] {
        let request = RenderRequest::new(&img, 40.0, preset.chars());
        match renderer.render(&request) {
            Ok(art) => {
                println!("{} ({})", preset.name(), art.info());
                print!("{}", art.text);
                println!();
            }
            Err(e) => eprintln!("{}: {}", preset.name(), e),
        }
    }
}
