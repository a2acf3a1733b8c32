mod app;

use app::AsciiApp;
use ascii_ramp::ramp::{CharacterRamp, ramp_index};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("ASCII Ramp")
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "ASCII Ramp",
        options,
        Box::new(|cc| Box::new(AsciiApp::new(cc))),
    )
}

/// Application icon: a diagonal gray ramp quantized to the default ramp's levels
fn load_icon() -> egui::IconData {
    let icon_size = 32;
    let levels = CharacterRamp::default().len();
    let mut pixels = vec![0u8; icon_size * icon_size * 4];

    for y in 0..icon_size {
        for x in 0..icon_size {
            let idx = (y * icon_size + x) * 4;
            let gray = ((x + y) * 255 / (2 * (icon_size - 1))) as f32;
            let band = ramp_index(gray, levels);
            let value = (band * 255 / (levels - 1)) as u8;

            pixels[idx] = value; // R
            pixels[idx + 1] = value; // G
            pixels[idx + 2] = value; // B
            pixels[idx + 3] = 255; // A
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_size as u32,
        height: icon_size as u32,
    }
}
