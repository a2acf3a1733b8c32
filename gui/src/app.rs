use ascii_ramp::config::{DEFAULT_SCALE_PERCENT, MAX_SCALE_PERCENT, MIN_SCALE_PERCENT};
use ascii_ramp::dimensions::{parse_scale_percent, preview_size};
use ascii_ramp::{
    AsciiArt, AsciiRenderer, DEFAULT_RAMP, RampPreset, RampSelection, RenderConfig,
    RenderRequest, ResampleFilter,
};
use eframe::egui;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Font sizes offered for the text view, in points
const FONT_SIZES: [f32; 9] = [4.0, 5.0, 6.0, 7.0, 8.0, 10.0, 12.0, 14.0, 16.0];
const DEFAULT_FONT_SIZE: f32 = 6.0;

/// How long the copy button feedback stays visible
const COPY_STATUS_DURATION: Duration = Duration::from_millis(1300);

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "webp"];

/// Main application state for the ASCII ramp GUI
pub struct AsciiApp {
    /// Decoded source image
    input_image: Option<RgbaImage>,
    /// Display name of the loaded source
    input_name: Option<String>,

    renderer: AsciiRenderer,
    /// Scale in percent of the source image
    scale_percent: f32,
    /// Contents of the scale text box, committed on Enter or focus loss
    scale_text: String,
    ramp: RampSelection,
    filter: ResampleFilter,
    font_size: f32,

    /// Last successfully generated grid
    output: Option<AsciiArt>,
    /// Text currently shown in the output view
    displayed_text: String,
    /// Texture of the sampled pixels
    preview_texture: Option<egui::TextureHandle>,

    /// Inputs changed since the last render
    needs_render: bool,
    /// Last render time in milliseconds
    last_render_time_ms: f64,
    /// Error message to display (if any)
    error_message: Option<String>,
    /// Copy button feedback and when it was set
    copy_status: Option<(String, Instant)>,
    /// System clipboard, opened on first use
    clipboard: Option<arboard::Clipboard>,
}

/// What a paste gesture on the window should load
#[derive(Debug, PartialEq)]
enum PasteAction {
    Path(PathBuf),
    ClipboardImage,
}

impl Default for AsciiApp {
    fn default() -> Self {
        Self {
            input_image: None,
            input_name: None,
            renderer: AsciiRenderer::default(),
            scale_percent: DEFAULT_SCALE_PERCENT,
            scale_text: DEFAULT_SCALE_PERCENT.to_string(),
            ramp: RampSelection::default(),
            filter: ResampleFilter::default(),
            font_size: DEFAULT_FONT_SIZE,
            output: None,
            displayed_text: String::new(),
            preview_texture: None,
            needs_render: false,
            last_render_time_ms: 0.0,
            error_message: None,
            copy_status: None,
            clipboard: None,
        }
    }
}

impl AsciiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Load an image from file path
    ///
    /// A decode failure keeps the previously loaded image and output.
    pub fn load_image(&mut self, path: &Path) {
        match image::open(path) {
            Ok(img) => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.set_input(img.to_rgba8(), name);
            }
            Err(e) => {
                log::warn!("failed to load {}: {}", path.display(), e);
                self.error_message = Some(format!("Failed to load image: {}", e));
            }
        }
    }

    /// Load the image currently held by the system clipboard
    fn paste_clipboard_image(&mut self) {
        match self.clipboard().and_then(|clipboard| clipboard.get_image()) {
            Ok(data) => match rgba_from_clipboard(data) {
                Some(rgba) => self.set_input(rgba, "Clipboard image".to_string()),
                None => {
                    log::warn!("clipboard image size does not match its pixel data");
                    self.error_message = Some("Clipboard image is malformed".to_string());
                }
            },
            Err(e) => {
                log::warn!("clipboard paste failed: {}", e);
                self.error_message = Some(format!("Failed to paste image: {}", e));
            }
        }
    }

    fn set_input(&mut self, rgba: RgbaImage, name: String) {
        log::info!("loaded {} ({}x{})", name, rgba.width(), rgba.height());
        self.input_image = Some(rgba);
        self.input_name = Some(name);
        self.error_message = None;
        self.needs_render = true;
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard, arboard::Error> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new()?);
        }
        self.clipboard
            .as_mut()
            .ok_or(arboard::Error::ClipboardNotSupported)
    }

    /// Render the loaded image with the current settings
    fn render(&mut self) {
        self.needs_render = false;
        let Some(input) = &self.input_image else {
            return;
        };

        let start = Instant::now();
        let request = RenderRequest::new(input, self.scale_percent, self.ramp.active_text());

        match self.renderer.render(&request) {
            Ok(art) => {
                self.last_render_time_ms = start.elapsed().as_secs_f64() * 1000.0;
                self.displayed_text.clone_from(&art.text);
                self.output = Some(art);
                self.preview_texture = None; // Rebuilt from the new buffer
                self.error_message = None;
            }
            Err(e) => {
                // Keep the previous output on screen
                log::error!("render failed: {}", e);
                self.error_message = Some(format!("Render failed: {}", e));
            }
        }
    }

    fn apply_filter(&mut self) {
        let config = RenderConfig {
            filter: self.filter,
            ..*self.renderer.config()
        };
        if let Err(e) = self.renderer.set_config(config) {
            self.error_message = Some(e.to_string());
        }
    }

    /// The last generated text, falling back to what is displayed
    fn copy_text(&self) -> Option<&str> {
        self.output
            .as_ref()
            .map(|art| art.text.as_str())
            .filter(|text| !text.is_empty())
            .or_else(|| Some(self.displayed_text.as_str()).filter(|text| !text.is_empty()))
    }

    fn copy_output(&mut self, ctx: &egui::Context) {
        let status = match self.copy_text().map(str::to_owned) {
            None => "✗ Copy failed: nothing to copy".to_string(),
            Some(text) => match self.clipboard().and_then(|clipboard| clipboard.set_text(text)) {
                Ok(()) => "✓ Copied!".to_string(),
                Err(e) => {
                    log::warn!("clipboard copy failed: {}", e);
                    format!("✗ Copy failed: {}", e)
                }
            },
        };

        self.copy_status = Some((status, Instant::now()));
        ctx.request_repaint_after(COPY_STATUS_DURATION);
    }

    /// Apply the scale text box, returning whether the scale changed
    fn commit_scale_text(&mut self) -> bool {
        let percent = parse_scale_percent(&self.scale_text);
        self.scale_text = percent.to_string();
        let changed = percent != self.scale_percent;
        self.scale_percent = percent;
        changed
    }

    /// Pick up dropped files and paste gestures aimed at the window
    fn handle_external_input(&mut self, ctx: &egui::Context) {
        // Paste into a focused text box belongs to that box
        let text_focused = ctx.memory(|m| m.focus().is_some());
        let (dropped, paste) = ctx.input(|i| {
            let dropped = i.raw.dropped_files.iter().find_map(|f| f.path.clone());
            (dropped, paste_action(&i.events, text_focused))
        });

        if let Some(path) = dropped {
            self.load_image(&path);
            return;
        }
        match paste {
            Some(PasteAction::Path(path)) => self.load_image(&path),
            Some(PasteAction::ClipboardImage) => self.paste_clipboard_image(),
            None => {}
        }
    }

    /// Render the control panel UI
    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.heading("Controls");
        ui.separator();

        ui.horizontal(|ui| {
            let slider = ui
                .add(
                    egui::Slider::new(&mut self.scale_percent, MIN_SCALE_PERCENT..=MAX_SCALE_PERCENT)
                        .clamp_to_range(false)
                        .show_value(false)
                        .text("Scale"),
                )
                .on_hover_text("Output resolution relative to the source image");
            if slider.changed() {
                self.scale_text = self.scale_percent.to_string();
                changed = true;
            }

            let typed = ui.add(egui::TextEdit::singleline(&mut self.scale_text).desired_width(40.0));
            if typed.lost_focus() {
                changed |= self.commit_scale_text();
            }
            ui.label("%");
        });

        ui.add_space(8.0);

        ui.collapsing("Character Ramp", |ui| {
            egui::ComboBox::from_label("Model")
                .selected_text(self.ramp.preset.name())
                .show_ui(ui, |ui| {
                    for preset in RampPreset::ALL {
                        if ui
                            .selectable_value(&mut self.ramp.preset, preset, preset.name())
                            .changed()
                        {
                            if preset != RampPreset::Custom {
                                self.ramp.custom.clear();
                            }
                            changed = true;
                        }
                    }
                });

            let custom = ui
                .add(
                    egui::TextEdit::singleline(&mut self.ramp.custom)
                        .hint_text(DEFAULT_RAMP)
                        .font(egui::TextStyle::Monospace),
                )
                .on_hover_text("Custom ramp, first character maps to the darkest pixels");
            if custom.changed() {
                self.ramp.preset = RampPreset::Custom;
                changed = true;
            }

            ui.label(
                egui::RichText::new(format!("Active: \"{}\"", self.ramp.resolve()))
                    .monospace()
                    .small(),
            );
        });

        ui.add_space(8.0);

        ui.collapsing("Rendering", |ui| {
            let mut filter_changed = false;
            egui::ComboBox::from_label("Resample")
                .selected_text(self.filter.name())
                .show_ui(ui, |ui| {
                    for filter in ResampleFilter::ALL {
                        filter_changed |= ui
                            .selectable_value(&mut self.filter, filter, filter.name())
                            .changed();
                    }
                });
            if filter_changed {
                self.apply_filter();
                changed = true;
            }

            egui::ComboBox::from_label("Font size")
                .selected_text(format!("{} px", self.font_size))
                .show_ui(ui, |ui| {
                    for size in FONT_SIZES {
                        ui.selectable_value(&mut self.font_size, size, format!("{} px", size));
                    }
                });
        });

        ui.add_space(16.0);
        ui.separator();

        if self.last_render_time_ms > 0.0 {
            ui.label(format!("Last render: {:.1} ms", self.last_render_time_ms));
        }

        changed
    }

    /// Show the sampled pixels at 2x, capped to the preview bounds
    fn display_preview(&mut self, ui: &mut egui::Ui) {
        ui.heading("Preview");

        let Some(art) = &self.output else {
            ui.label("No image loaded");
            return;
        };

        if self.preview_texture.is_none() {
            if let Some(sampled) = self.renderer.preview() {
                let size = [sampled.width() as usize, sampled.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, sampled.as_raw());
                self.preview_texture = Some(ui.ctx().load_texture(
                    "preview",
                    color_image,
                    egui::TextureOptions::NEAREST,
                ));
            }
        }

        if let Some(tex) = &self.preview_texture {
            let (w, h) = preview_size(art.size);
            ui.image((tex.id(), egui::vec2(w as f32, h as f32)));
        }

        ui.label(art.info());
        if let Some(name) = &self.input_name {
            ui.label(name.as_str());
        }
    }

    /// Show the generated text in a monospaced, scrollable view
    fn display_text(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("ASCII Output");
            if ui.button("📋 Copy ASCII").clicked() {
                self.copy_output(ui.ctx());
            }
            if let Some((status, _)) = &self.copy_status {
                ui.label(status.as_str());
            }
        });

        egui::ScrollArea::both()
            .id_source("ascii_output")
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&self.displayed_text)
                            .monospace()
                            .size(self.font_size),
                    )
                    .wrap(false),
                );
            });
    }
}

impl eframe::App for AsciiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_external_input(ctx);

        if let Some((_, since)) = &self.copy_status {
            if since.elapsed() >= COPY_STATUS_DURATION {
                self.copy_status = None;
            }
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", &IMAGE_EXTENSIONS)
                            .pick_file()
                        {
                            self.load_image(&path);
                        }
                        ui.close_menu();
                    }

                    if ui.button("Paste Image").clicked() {
                        self.paste_clipboard_image();
                        ui.close_menu();
                    }

                    if ui.button("Copy ASCII").clicked() {
                        self.copy_output(ctx);
                        ui.close_menu();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.error_message = Some(
                            "ASCII Ramp\nOpen, drop, or paste an image (or its path) to convert it.\n\nBuilt with Rust + egui".to_string(),
                        );
                        ui.close_menu();
                    }
                });
            });
        });

        // Left panel: Controls
        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(250.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.render_controls(ui) {
                        self.needs_render = true;
                    }
                });
            });

        if self.needs_render && self.input_image.is_some() {
            self.render();
        }

        // Central panel: preview and text
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(msg) = &self.error_message {
                ui.colored_label(egui::Color32::RED, msg.as_str());
                if ui.button("Clear Error").clicked() {
                    self.error_message = None;
                }
                ui.separator();
            }

            ui.horizontal_top(|ui| {
                ui.allocate_ui_with_layout(
                    egui::vec2(620.0_f32.min(ui.available_width() / 2.0), ui.available_height()),
                    egui::Layout::top_down(egui::Align::Center),
                    |ui| self.display_preview(ui),
                );

                ui.separator();

                ui.vertical(|ui| self.display_text(ui));
            });
        });
    }
}

/// Decide what a frame's input events ask to paste
///
/// A pasted image path wins over a bare Ctrl+V, which reads the clipboard
/// image. Nothing is pasted while a text widget holds focus.
fn paste_action(events: &[egui::Event], text_focused: bool) -> Option<PasteAction> {
    if text_focused {
        return None;
    }

    let path = events.iter().find_map(|event| match event {
        egui::Event::Paste(text) => pasted_image_path(text),
        _ => None,
    });
    if let Some(path) = path {
        return Some(PasteAction::Path(path));
    }

    events
        .iter()
        .any(|event| {
            matches!(
                event,
                egui::Event::Key {
                    key: egui::Key::V,
                    pressed: true,
                    modifiers,
                    ..
                } if modifiers.command
            )
        })
        .then_some(PasteAction::ClipboardImage)
}

/// Convert clipboard pixels (tightly packed RGBA) into an image
fn rgba_from_clipboard(data: arboard::ImageData<'_>) -> Option<RgbaImage> {
    let width = u32::try_from(data.width).ok()?;
    let height = u32::try_from(data.height).ok()?;
    RgbaImage::from_raw(width, height, data.bytes.into_owned())
}

/// Interpret pasted text as a path to an existing image file
fn pasted_image_path(text: &str) -> Option<PathBuf> {
    let trimmed = text.trim().trim_matches('"');
    let trimmed = trimmed.strip_prefix("file://").unwrap_or(trimmed);
    let path = PathBuf::from(trimmed);

    let is_image = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false);

    (is_image && path.is_file()).then_some(path)
}
