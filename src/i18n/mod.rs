use serde::Deserialize;

pub mod en;
pub mod es;

/// Text shown by the viewer in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub previous: &'static str,
    pub next: &'static str,
    pub loading: &'static str,
    pub image_unavailable: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::En => &en::STRINGS,
            Locale::Es => &es::STRINGS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_labels_per_locale() {
        assert_eq!(Locale::En.strings().previous, "Previous");
        assert_eq!(Locale::En.strings().next, "Next");
        assert_eq!(Locale::Es.strings().previous, "Anterior");
        assert_eq!(Locale::Es.strings().next, "Siguiente");
    }
}
