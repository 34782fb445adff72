//! Message view demo - a small chat playground built with egui.
//!
//! Seeds a short conversation showing every message shape (inbound and
//! outbound text, an image, a picture avatar, a named speaker) and lets
//! you append your own outbound messages from the input bar. The theme
//! choice is persisted between runs.

use directories::ProjectDirs;
use eframe::egui;
use eframe::egui::load::SizedTexture;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use egui_message_view::{render_message, Avatar, MessageConfig, MessageContent, MessageTheme};

// ============================================================================
// Persisted demo settings
// ============================================================================

#[derive(Serialize, Deserialize)]
struct Settings {
    dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "egui-message-view", "message-view-demo") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings).expect("settings serialize");
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

// ============================================================================
// Demo conversation model
// ============================================================================

/// What a seeded or typed message displays. The sample image texture is
/// uploaded once per app, so messages reference it symbolically and the
/// render loop turns it into a `MessageContent` each frame.
enum DemoContent {
    Text(String),
    SampleImage,
}

struct DemoMessage {
    content: DemoContent,
    trailing: bool,
    speaker_name: Option<String>,
    picture_avatar: bool,
}

impl DemoMessage {
    fn new(content: DemoContent) -> Self {
        Self {
            content,
            trailing: false,
            speaker_name: None,
            picture_avatar: false,
        }
    }

    fn text(value: &str) -> Self {
        Self::new(DemoContent::Text(value.to_string()))
    }
}

/// The conversation every fresh demo starts with.
fn seed_conversation() -> Vec<DemoMessage> {
    vec![
        DemoMessage::text("Hello"),
        DemoMessage {
            trailing: true,
            ..DemoMessage::text("Hi")
        },
        DemoMessage::new(DemoContent::SampleImage),
        DemoMessage {
            picture_avatar: true,
            ..DemoMessage::text("This is my image")
        },
        DemoMessage {
            speaker_name: Some("Set".to_string()),
            ..DemoMessage::text("My name is Set")
        },
    ]
}

/// Generate the gradient used for the image message and picture avatar.
/// Wider than the 200 unit cap, so the demo also shows the downscaling.
fn sample_image() -> egui::ColorImage {
    const WIDTH: usize = 256;
    const HEIGHT: usize = 160;
    let mut image = egui::ColorImage::new([WIDTH, HEIGHT], egui::Color32::BLACK);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            image.pixels[y * WIDTH + x] = egui::Color32::from_rgb(
                (x * 255 / (WIDTH - 1)) as u8,
                (y * 255 / (HEIGHT - 1)) as u8,
                190,
            );
        }
    }
    image
}

// ============================================================================
// App
// ============================================================================

struct DemoApp {
    messages: Vec<DemoMessage>,
    input: String,
    dark_mode: bool,
    sample_texture: Option<egui::TextureHandle>,
}

impl DemoApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings().unwrap_or_default();
        cc.egui_ctx.set_visuals(visuals(settings.dark_mode));
        Self {
            messages: seed_conversation(),
            input: String::new(),
            dark_mode: settings.dark_mode,
            sample_texture: None,
        }
    }

    fn push_outbound(&mut self, content: DemoContent) {
        self.messages.push(DemoMessage {
            content,
            trailing: true,
            speaker_name: None,
            picture_avatar: false,
        });
    }
}

fn visuals(dark_mode: bool) -> egui::Visuals {
    if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let handle = self.sample_texture.get_or_insert_with(|| {
            ctx.load_texture("sample-image", sample_image(), egui::TextureOptions::LINEAR)
        });
        let sample = SizedTexture::from_handle(handle);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Messages");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.dark_mode { "Light" } else { "Dark" };
                    if ui.button(label).clicked() {
                        self.dark_mode = !self.dark_mode;
                        ctx.set_visuals(visuals(self.dark_mode));
                        if let Err(e) = save_settings(&Settings {
                            dark_mode: self.dark_mode,
                        }) {
                            eprintln!("Failed to save settings: {}", e);
                        }
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("input").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let send_clicked = ui.button("Send").clicked();
                let image_clicked = ui.button("Image").clicked();
                let response = ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::singleline(&mut self.input).hint_text("Send a message"),
                );

                let submitted = response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (send_clicked || submitted) && !self.input.trim().is_empty() {
                    let text = self.input.trim().to_string();
                    self.push_outbound(DemoContent::Text(text));
                    self.input.clear();
                    response.request_focus();
                }
                if image_clicked {
                    self.push_outbound(DemoContent::SampleImage);
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let theme = if self.dark_mode {
                MessageTheme::dark()
            } else {
                MessageTheme::light()
            };

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.add_space(8.0);

                    for message in &self.messages {
                        let content = match &message.content {
                            DemoContent::Text(text) => MessageContent::text(text),
                            DemoContent::SampleImage => MessageContent::Image(sample),
                        };
                        let avatar = if message.picture_avatar {
                            Avatar::new(move |ui| {
                                ui.add(
                                    egui::Image::from_texture(sample)
                                        .fit_to_exact_size(ui.available_size()),
                                );
                            })
                        } else {
                            Avatar::person()
                        };
                        let config = MessageConfig {
                            trailing: message.trailing,
                            avatar: Some(avatar),
                            speaker_name: message.speaker_name.clone(),
                        };
                        render_message(ui, &content, &config, &theme);
                    }

                    ui.add_space(8.0);
                });
        });
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Message View Demo",
        options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    )
}
