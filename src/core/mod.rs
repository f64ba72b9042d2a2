pub mod artwork;
pub mod asset_loader;
pub mod catalog;
pub mod image_cache;
pub mod image_format;
pub mod preload_manager;
pub mod viewer_state;
