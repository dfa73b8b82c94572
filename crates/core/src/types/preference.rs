//! Two-valued visitor preferences: colour theme and interface language.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored preference value did not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownPreference {
    kind: &'static str,
    value: String,
}

/// Colour theme applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The value written to storage and to `data-theme`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownPreference {
                kind: "theme",
                value: other.to_owned(),
            }),
        }
    }
}

/// Interface language. Portuguese is the storefront's home language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Pt,
    En,
}

impl Lang {
    /// The language code, as written to storage and matched against
    /// `data-lang` tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    /// Label shown on the language toggle button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pt => "PT",
            Self::En => "EN",
        }
    }

    /// The other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pt => Self::En,
            Self::En => Self::Pt,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = UnknownPreference;

    /// Codes are case-sensitive: `"EN"` is not a language.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt" => Ok(Self::Pt),
            "en" => Ok(Self::En),
            other => Err(UnknownPreference {
                kind: "lang",
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Lang::default(), Lang::Pt);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Lang::Pt.toggled(), Lang::En);
        assert_eq!(Lang::Pt.toggled().toggled(), Lang::Pt);
    }

    #[test]
    fn test_round_trip_through_str() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("en".parse::<Lang>().unwrap(), Lang::En);
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Lang::En.label(), "EN");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "EN".parse::<Lang>().unwrap_err();
        assert_eq!(err.to_string(), "unknown lang value: \"EN\"");
        assert!("Dark".parse::<Theme>().is_err());
    }
}
