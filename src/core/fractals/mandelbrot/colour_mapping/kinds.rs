use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MandelbrotColourMapKinds {
    #[default]
    #[value(name = "fire", alias = "fire-gradient")]
    FireGradient,
    Grayscale,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::FireGradient, Self::Grayscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FireGradient => "Fire gradient",
            Self::Grayscale => "Grayscale",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
