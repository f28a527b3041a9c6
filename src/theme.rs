/// Visual theme applied to the page's root element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn root_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

/// Runs once while the app is assembled. Nothing re-applies it afterwards.
pub fn activate() -> Theme {
    tracing::debug!("Dark theme enabled");
    Theme::Dark
}
