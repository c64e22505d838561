use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card theme. Chosen per render and passed explicitly, never stored globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    SunnyDay,
    StarryNight,
    Party,
    Focused,
    RetroPop,
    Lofi,
}

impl Theme {
    /// Picker order.
    pub const ALL: [Theme; 6] = [
        Theme::SunnyDay,
        Theme::StarryNight,
        Theme::Party,
        Theme::Focused,
        Theme::RetroPop,
        Theme::Lofi,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::SunnyDay => "Sunny Day",
            Theme::StarryNight => "Starry Night",
            Theme::Party => "Party",
            Theme::Focused => "Focused",
            Theme::RetroPop => "Retro Pop",
            Theme::Lofi => "Lo-fi",
        }
    }

    /// Stylesheet class applied to the card container.
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::SunnyDay => "theme-sunny-day",
            Theme::StarryNight => "theme-starry-night",
            Theme::Party => "theme-party",
            Theme::Focused => "theme-focused",
            Theme::RetroPop => "theme-retro-pop",
            Theme::Lofi => "theme-lofi",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Theme {
    type Err = String;

    /// Accepts a css class (`theme-party`), a bare class suffix (`party`) or a
    /// display name (`Sunny Day`), ignoring case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| {
                let class = theme.css_class();
                wanted.eq_ignore_ascii_case(class)
                    || wanted.eq_ignore_ascii_case(&class["theme-".len()..])
                    || wanted.eq_ignore_ascii_case(theme.display_name())
            })
            .ok_or_else(|| format!("Unknown theme: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parsing_accepts_class_and_name() {
        assert_eq!("theme-retro-pop".parse::<Theme>().unwrap(), Theme::RetroPop);
        assert_eq!("retro-pop".parse::<Theme>().unwrap(), Theme::RetroPop);
        assert_eq!("starry night".parse::<Theme>().unwrap(), Theme::StarryNight);
        assert_eq!("Lo-fi".parse::<Theme>().unwrap(), Theme::Lofi);
        assert_eq!("lofi".parse::<Theme>().unwrap(), Theme::Lofi);
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_classes_are_unique() {
        let mut classes: Vec<&str> = Theme::ALL.iter().map(|t| t.css_class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), Theme::ALL.len());
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(
            serde_json::to_string(&Theme::SunnyDay).unwrap(),
            "\"sunny-day\""
        );
    }
}
