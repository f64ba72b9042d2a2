use eframe::egui;
use egui::{Color32, RichText, TextureHandle, Widget};

use crate::config::Settings;
use crate::core::catalog::Catalog;
use crate::core::image_cache::ImageCache;
use crate::core::preload_manager::PreloadManager;
use crate::core::viewer_state::ViewerState;
use crate::i18n::Strings;

const DESCRIPTION_FILL: Color32 = Color32::from_rgb(0xCC, 0xC2, 0xDC);
const IMAGE_PADDING: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Navigation {
    Previous,
    Next,
}

pub struct ArtSpaceApp {
    catalog: Catalog,
    state: ViewerState,
    strings: &'static Strings,
    image_cache: ImageCache<usize, TextureHandle>,
    preload_manager: PreloadManager,
}

impl ArtSpaceApp {
    pub fn new(catalog: Catalog, settings: &Settings) -> Self {
        Self {
            state: ViewerState::new(&catalog),
            catalog,
            strings: settings.locale.strings(),
            image_cache: ImageCache::new(
                settings.preload.cache_size.max(settings.preload.window()),
            ),
            preload_manager: PreloadManager::new(settings.preload.range),
        }
    }

    fn navigate(&mut self, navigation: Navigation) {
        let moved = match navigation {
            Navigation::Previous => self.state.retreat(),
            Navigation::Next => self.state.advance(),
        };
        if moved {
            log::debug!(
                "Showing artwork {}/{}: {}",
                self.state.position() + 1,
                self.state.total_artworks(),
                self.catalog.get(self.state.position()).title()
            );
        }
    }

    fn handle_keyboard_input(&self, ctx: &egui::Context) -> Option<Navigation> {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                Some(Navigation::Previous)
            } else if i.key_pressed(egui::Key::ArrowRight) {
                Some(Navigation::Next)
            } else {
                None
            }
        })
    }

    fn show_navigation_controls(&self, ctx: &egui::Context) -> Option<Navigation> {
        let mut clicked = None;

        egui::TopBottomPanel::bottom("navigation")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let previous = egui::Button::new(self.strings.previous);
                    if ui.add_enabled(self.state.can_retreat(), previous).clicked() {
                        clicked = Some(Navigation::Previous);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let next = egui::Button::new(self.strings.next);
                        if ui.add_enabled(self.state.can_advance(), next).clicked() {
                            clicked = Some(Navigation::Next);
                        }

                        ui.centered_and_justified(|ui| {
                            ui.weak(format!("{} / {}", self.state.position() + 1, self.state.total_artworks()));
                        });
                    });
                });
                ui.add_space(8.0);
            });

        clicked
    }

    fn show_description(&self, ctx: &egui::Context) {
        let artwork = self.catalog.get(self.state.position());

        egui::TopBottomPanel::bottom("description")
            .show_separator_line(false)
            .frame(egui::Frame::default().fill(DESCRIPTION_FILL).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.label(RichText::new(artwork.title()).size(24.0));
                ui.horizontal(|ui| {
                    ui.label(RichText::new(artwork.author()).size(14.0).strong());
                    ui.label(RichText::new(format!("({})", artwork.year())).size(14.0));
                });
            });
    }

    fn show_main_content(&mut self, ctx: &egui::Context) {
        let position = self.state.position();
        let texture = self.image_cache.get(&position).cloned();
        let failed = self.preload_manager.is_failed(position);

        egui::CentralPanel::default().show(ctx, |ui| match texture {
            Some(texture) => self.render_image(ui, &texture),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(if failed {
                        self.strings.image_unavailable
                    } else {
                        self.strings.loading
                    });
                });
            }
        });
    }

    fn render_image(&self, ui: &mut egui::Ui, texture: &TextureHandle) {
        let artwork = self.catalog.get(self.state.position());

        let available_size = (ui.available_size() - egui::Vec2::splat(2.0 * IMAGE_PADDING + 2.0))
            .max(egui::Vec2::splat(1.0));
        let image_size = texture.size_vec2();
        let scale = (available_size.x / image_size.x).min(available_size.y / image_size.y);
        let scaled_size = image_size * scale;

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(Color32::WHITE)
                .stroke(egui::Stroke::new(1.0, Color32::from_gray(210)))
                .inner_margin(IMAGE_PADDING)
                .show(ui, |ui| {
                    egui::Image::from_texture(texture)
                        .fit_to_exact_size(scaled_size)
                        .ui(ui)
                        .on_hover_text(artwork.description());
                });
        });
    }
}

impl eframe::App for ArtSpaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.preload_manager
            .process_loaded_images(ctx, &self.catalog, &mut self.image_cache);
        self.preload_manager.preload_around(
            ctx,
            &self.catalog,
            self.state.position(),
            &self.image_cache,
        );

        let keyboard = self.handle_keyboard_input(ctx);
        let clicked = self.show_navigation_controls(ctx);
        self.show_description(ctx);
        self.show_main_content(ctx);

        if let Some(navigation) = clicked.or(keyboard) {
            self.navigate(navigation);
        }
    }
}
