pub const APP_NAME: &str = "Art Space";
pub const APP_ID: &str = "art-space";

pub const DEFAULT_WINDOW_WIDTH: f32 = 412.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 892.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub const DEFAULT_PRELOAD_RANGE: usize = 1;
pub const DEFAULT_CACHE_SIZE: usize = 5;

pub const CONFIG_FILE_NAME: &str = "config.toml";
