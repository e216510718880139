use serde::{Deserialize, Serialize};

/// Replacement text for anything redacted.
pub const REDACTED: &str = "***";

/// Render-time redaction switches. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivacyMode {
    pub hide_names: bool,
    pub blur_sensitive: bool,
    pub hide_dates: bool,
    pub safe_quote: bool,
}

impl PrivacyMode {
    pub fn name<'a>(&self, name: &'a str) -> &'a str {
        if self.hide_names { REDACTED } else { name }
    }

    pub fn quote<'a>(&self, quote: &'a str) -> &'a str {
        if self.safe_quote { REDACTED } else { quote }
    }

    pub fn date<'a>(&self, date: &'a str) -> &'a str {
        if self.hide_dates { REDACTED } else { date }
    }

    pub fn is_active(&self) -> bool {
        self.hide_names || self.blur_sensitive || self.hide_dates || self.safe_quote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_passes_everything_through() {
        let privacy = PrivacyMode::default();
        assert_eq!(privacy.name("Elfan"), "Elfan");
        assert_eq!(privacy.quote("hi"), "hi");
        assert_eq!(privacy.date("1 Jan"), "1 Jan");
        assert!(!privacy.is_active());
    }

    #[test]
    fn each_flag_redacts_only_its_field() {
        let privacy = PrivacyMode {
            hide_names: true,
            ..Default::default()
        };
        assert_eq!(privacy.name("Elfan"), REDACTED);
        assert_eq!(privacy.quote("hi"), "hi");

        let privacy = PrivacyMode {
            safe_quote: true,
            ..Default::default()
        };
        assert_eq!(privacy.quote("hi"), REDACTED);
        assert_eq!(privacy.date("1 Jan"), "1 Jan");

        let privacy = PrivacyMode {
            hide_dates: true,
            ..Default::default()
        };
        assert_eq!(privacy.date("1 Jan"), REDACTED);
        assert_eq!(privacy.name("Elfan"), "Elfan");
        assert!(privacy.is_active());
    }

    #[test]
    fn deserializes_partial_flags() {
        let privacy: PrivacyMode = serde_json::from_str(r#"{"hideNames": true}"#).unwrap();
        assert!(privacy.hide_names);
        assert!(!privacy.safe_quote);
    }
}
