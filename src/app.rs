use crate::config::config::*;
use crate::config::Settings;
use crate::core::catalog::Catalog;
use crate::ui::viewer::ArtSpaceApp;

pub fn run(settings: Settings, catalog: Catalog) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_app_id(APP_ID)
            .with_inner_size([settings.window.width, settings.window.height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    log::info!(
        "Opening {} with {} artworks ({:?} locale)",
        APP_NAME,
        catalog.len(),
        settings.locale
    );

    for (i, artwork) in catalog.iter().enumerate() {
        log::debug!(
            "Artwork {}: '{}' by {} ({}), image {}",
            i + 1,
            artwork.title(),
            artwork.author(),
            artwork.year(),
            artwork.image()
        );
    }

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(ArtSpaceApp::new(catalog, &settings)))
        }),
    )
}
