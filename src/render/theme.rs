use clap::ValueEnum;

/// Colours for one colour scheme of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub current: &'static str,
    pub label: &'static str,
    pub range: &'static str,
    pub fire: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub light: Palette,
    pub dark: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ThemeName {
    Ocean,
    Forest,
    Github,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Ocean, ThemeName::Forest, ThemeName::Github];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Ocean => "ocean",
            ThemeName::Forest => "forest",
            ThemeName::Github => "github",
        }
    }

    pub fn file_name(self) -> String {
        format!("streak-{}.svg", self.as_str())
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeName::Ocean => OCEAN,
            ThemeName::Forest => FOREST,
            ThemeName::Github => GITHUB,
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const OCEAN: Theme = Theme {
    light: Palette {
        bg: "#F8FAFC",
        border: "#CBD5E1",
        accent: "#3B82F6",
        current: "#8B5CF6",
        label: "#1D4ED8",
        range: "#10B981",
        fire: "#3B82F6",
    },
    dark: Palette {
        bg: "#1A1B27",
        border: "#E4E2E2",
        accent: "#5B9EFF",
        current: "#A78BFA",
        label: "#5B9EFF",
        range: "#34D399",
        fire: "#5B9EFF",
    },
};

const FOREST: Theme = Theme {
    light: Palette {
        bg: "#F8FAFC",
        border: "#CBD5E1",
        accent: "#10B981",
        current: "#059669",
        label: "#047857",
        range: "#F59E0B",
        fire: "#10B981",
    },
    dark: Palette {
        bg: "#1A1B27",
        border: "#E4E2E2",
        accent: "#10B981",
        current: "#34D399",
        label: "#10B981",
        range: "#FBBF24",
        fire: "#10B981",
    },
};

const GITHUB: Theme = Theme {
    light: Palette {
        bg: "#FFFFFF",
        border: "#D0D7DE",
        accent: "#0969DA",
        current: "#0969DA",
        label: "#57606A",
        range: "#57606A",
        fire: "#D95641",
    },
    dark: Palette {
        bg: "#0D1117",
        border: "#30363D",
        accent: "#58A6FF",
        current: "#58A6FF",
        label: "#8B949E",
        range: "#8B949E",
        fire: "#D95641",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(ThemeName::Ocean.file_name(), "streak-ocean.svg");
        assert_eq!(ThemeName::Forest.file_name(), "streak-forest.svg");
        assert_eq!(ThemeName::Github.file_name(), "streak-github.svg");
    }

    #[test]
    fn test_value_enum_names_match_file_names() {
        for name in ThemeName::ALL {
            let parsed = ThemeName::from_str(name.as_str(), false).unwrap();
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn test_github_theme_keeps_brand_fire() {
        let theme = ThemeName::Github.theme();

        assert_eq!(theme.light.fire, "#D95641");
        assert_eq!(theme.dark.fire, "#D95641");
        assert_eq!(theme.dark.bg, "#0D1117");
    }
}
