//! Display preferences.
//!
//! Settings live for the lifetime of the page only, nothing is sent to the server.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Ro,
    En,
    It,
    Es,
    Fr,
    De,
    Pt,
    Hu,
    Tr,
}

impl Language {
    pub const ALL: [Language; 9] = [
        Self::Ro,
        Self::En,
        Self::It,
        Self::Es,
        Self::Fr,
        Self::De,
        Self::Pt,
        Self::Hu,
        Self::Tr,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Ro => "RO",
            Self::En => "EN",
            Self::It => "IT",
            Self::Es => "ES",
            Self::Fr => "FR",
            Self::De => "DE",
            Self::Pt => "PT",
            Self::Hu => "HU",
            Self::Tr => "TR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ro => "Română",
            Self::En => "English",
            Self::It => "Italiano",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::Pt => "Português",
            Self::Hu => "Magyar",
            Self::Tr => "Türkçe",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Theme {
    /// Value of the `data-theme` attribute, `None` follows the browser preference
    pub fn data_theme(&self) -> Option<&'static str> {
        match self {
            Self::Light => Some("light"),
            Self::Dark => Some("dark"),
            Self::Auto => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl TextSize {
    pub const ALL: [TextSize; 4] = [Self::Small, Self::Medium, Self::Large, Self::ExtraLarge];

    pub fn class(&self) -> &'static str {
        match self {
            Self::Small => "text-sm",
            Self::Medium => "text-base",
            Self::Large => "text-lg",
            Self::ExtraLarge => "text-xl",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "A-",
            Self::Medium => "A",
            Self::Large => "A+",
            Self::ExtraLarge => "A++",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SettingsState {
    pub language: Language,
    pub theme: Theme,
    pub text_size: TextSize,
    /// Only kept as state, no notification is ever sent
    pub notifications: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: Theme::default(),
            text_size: TextSize::default(),
            notifications: true,
        }
    }
}
