#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub text_light: &'static str,
    pub card: &'static str,
}

pub const DARK: Theme = Theme {
    name: "dark",
    background: "#0f0f1a",
    primary: "#8b5cf6",
    accent: "#ec4899",
    text: "#ffffff",
    text_light: "#a1a1aa",
    card: "#1c1c2e",
};

pub const LIGHT: Theme = Theme {
    name: "light",
    background: "#fdf7ff",
    primary: "#7c3aed",
    accent: "#db2777",
    text: "#18181b",
    text_light: "#52525b",
    card: "#ffffff",
};

pub const SUNSET: Theme = Theme {
    name: "sunset",
    background: "#1f0a1a",
    primary: "#f97316",
    accent: "#f43f5e",
    text: "#fff7ed",
    text_light: "#fdba74",
    card: "#2d1324",
};

pub const OCEAN: Theme = Theme {
    name: "ocean",
    background: "#04172b",
    primary: "#0ea5e9",
    accent: "#14b8a6",
    text: "#f0f9ff",
    text_light: "#7dd3fc",
    card: "#0b2540",
};

pub const ALL: [Theme; 4] = [DARK, LIGHT, SUNSET, OCEAN];

impl Theme {
    /// Look up a palette by tag, falling back to [`DARK`] for anything unknown.
    pub fn from_tag(tag: &str) -> Theme {
        let tag = tag.trim();
        ALL.into_iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(tag))
            .unwrap_or(DARK)
    }
}

impl Default for Theme {
    fn default() -> Self {
        DARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve() {
        assert_eq!(Theme::from_tag("light"), LIGHT);
        assert_eq!(Theme::from_tag("sunset"), SUNSET);
        assert_eq!(Theme::from_tag("ocean"), OCEAN);
        assert_eq!(Theme::from_tag("dark"), DARK);
    }

    #[test]
    fn tags_are_case_insensitive_and_trimmed() {
        assert_eq!(Theme::from_tag("  Ocean "), OCEAN);
        assert_eq!(Theme::from_tag("LIGHT"), LIGHT);
    }

    #[test]
    fn unknown_tag_falls_back_to_dark() {
        assert_eq!(Theme::from_tag("neon"), DARK);
        assert_eq!(Theme::from_tag(""), DARK);
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
