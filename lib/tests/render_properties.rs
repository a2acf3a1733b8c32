use ascii_ramp::{
    AsciiRenderer, CharacterRamp, DEFAULT_RAMP, RampPreset, RenderConfig, RenderRequest,
    ResampleFilter, render_ascii, target_size,
};
use image::{Rgba, RgbaImage};

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        let b = ((x + y) % 256) as u8;
        Rgba([r, g, b, 255])
    })
}

#[test]
fn grid_shape_matches_target_size() {
    let img = gradient(123, 77);
    for scale in [1.0, 7.5, 33.0, 50.0, 100.0] {
        for preset in RampPreset::ALL {
            let art = render_ascii(&img, scale, preset.chars()).unwrap();
            let expected = target_size(123, 77, scale, 0.55);
            assert_eq!(art.size, expected);

            let lines: Vec<&str> = art.text.split('\n').collect();
            assert_eq!(lines.len(), expected.height as usize + 1, "scale {scale}");
            assert_eq!(lines.last(), Some(&""));
            for line in &lines[..lines.len() - 1] {
                assert_eq!(line.chars().count(), expected.width as usize);
            }
        }
    }
}

#[test]
fn every_character_comes_from_the_ramp() {
    let img = gradient(64, 64);
    for preset in RampPreset::ALL {
        let ramp = CharacterRamp::new(preset.chars());
        let art = render_ascii(&img, 100.0, preset.chars()).unwrap();
        for ch in art.text.chars().filter(|&c| c != '\n') {
            assert!(ramp.chars().contains(&ch), "{ch:?} not in {}", preset.name());
        }
    }
}

#[test]
fn degenerate_scales_still_render_one_cell() {
    let img = gradient(5, 5);
    for scale in [0.0, -10.0, f32::NAN] {
        let art = render_ascii(&img, scale, "").unwrap();
        assert!(art.size.width >= 1);
        assert!(art.size.height >= 1);
        assert!(!art.text.is_empty());
    }
}

#[test]
fn rendering_twice_is_byte_identical() {
    let img = gradient(200, 150);
    let config = RenderConfig {
        filter: ResampleFilter::Lanczos3,
        ..Default::default()
    };
    let mut renderer = AsciiRenderer::new(config).unwrap();
    let request = RenderRequest::new(&img, 40.0, RampPreset::HighDetail.chars());

    let first = renderer.render(&request).unwrap();
    let second = renderer.render(&request).unwrap();
    assert_eq!(first.text.as_bytes(), second.text.as_bytes());

    let fresh = AsciiRenderer::new(config)
        .unwrap()
        .render(&request)
        .unwrap();
    assert_eq!(first, fresh);
}

#[test]
fn empty_ramp_renders_like_default_ramp() {
    let img = gradient(90, 60);
    let empty = render_ascii(&img, 60.0, "").unwrap();
    let explicit = render_ascii(&img, 60.0, DEFAULT_RAMP).unwrap();
    assert_eq!(empty.text, explicit.text);
}

#[test]
fn preview_matches_grid_size() {
    let img = gradient(100, 100);
    let mut renderer = AsciiRenderer::new(RenderConfig::default()).unwrap();
    assert!(renderer.preview().is_none());

    let art = renderer.render(&RenderRequest::new(&img, 50.0, "")).unwrap();
    let preview = renderer.preview().unwrap();
    assert_eq!(preview.dimensions(), (art.size.width, art.size.height));
    assert_eq!(preview.dimensions(), (27, 50));
}
