//! The fixed, ordered set of floating icons.

use serde::{Deserialize, Serialize};

/// A floating icon image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    AsteroidOne,
    AsteroidTwo,
    Github,
    Python,
    RLang,
}

impl Icon {
    /// All icons in their canonical order.
    pub const ALL: [Icon; 5] = [
        Icon::AsteroidOne,
        Icon::AsteroidTwo,
        Icon::Github,
        Icon::Python,
        Icon::RLang,
    ];

    /// Path of the image asset this icon stands for.
    pub fn asset_path(self) -> &'static str {
        match self {
            Icon::AsteroidOne => "floating-icons/asteroid1.png",
            Icon::AsteroidTwo => "floating-icons/asteroid2.png",
            Icon::Github => "floating-icons/github.png",
            Icon::Python => "floating-icons/python.png",
            Icon::RLang => "floating-icons/rprogram.png",
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Icon::AsteroidOne => "Asteroid",
            Icon::AsteroidTwo => "Asteroid (small)",
            Icon::Github => "GitHub",
            Icon::Python => "Python",
            Icon::RLang => "R",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_order() {
        assert_eq!(Icon::ALL[0], Icon::AsteroidOne);
        assert_eq!(Icon::ALL[4], Icon::RLang);
        assert!(Icon::ALL[2].asset_path().ends_with("github.png"));
    }

    #[test]
    fn test_icon_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            icons: Vec<Icon>,
        }
        let parsed: Wrapper = toml::from_str(r#"icons = ["python", "r-lang", "asteroid-one"]"#)
            .expect("valid icon list");
        assert_eq!(
            parsed.icons,
            vec![Icon::Python, Icon::RLang, Icon::AsteroidOne]
        );
    }
}
