use super::Strings;

pub const STRINGS: Strings = Strings {
    previous: "Previous",
    next: "Next",
    loading: "Loading image...",
    image_unavailable: "Image unavailable",
};
