//! Theme registry: a closed set of stylesheets for published documents.

/// A named stylesheet embedded at compile time.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub description: &'static str,
    pub css: &'static str,
}

/// Published posts always use this theme, matching the writer's defaults.
pub const DEFAULT_THEME: &str = "retro";

static THEMES: &[Theme] = &[
    Theme {
        name: "air",
        description: "Light, centered, airy sans-serif",
        css: include_str!("../assets/themes/air.css"),
    },
    Theme {
        name: "markdowncss",
        description: "Classic serif markdown styling",
        css: include_str!("../assets/themes/markdowncss.css"),
    },
    Theme {
        name: "retro",
        description: "Terminal green on dark",
        css: include_str!("../assets/themes/retro.css"),
    },
    Theme {
        name: "splendor",
        description: "Big elegant long-form serif",
        css: include_str!("../assets/themes/splendor.css"),
    },
];

impl Theme {
    pub fn all() -> &'static [Theme] {
        THEMES
    }

    pub fn get(name: &str) -> Option<&'static Theme> {
        THEMES.iter().find(|t| t.name == name)
    }

    pub fn default_theme() -> &'static Theme {
        // The registry is a compile-time constant, so the default is always present.
        Theme::get(DEFAULT_THEME).expect("default theme registered")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_the_closed_set() {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
        assert_eq!(names, ["air", "markdowncss", "retro", "splendor"]);
    }

    #[test]
    fn lookup_by_name() {
        assert!(Theme::get("splendor").is_some());
        assert!(Theme::get("solarized").is_none());
    }

    #[test]
    fn default_is_retro() {
        assert_eq!(Theme::default_theme().name, "retro");
    }

    #[test]
    fn stylesheets_are_not_empty() {
        for theme in Theme::all() {
            assert!(!theme.css.trim().is_empty(), "{} has empty css", theme.name);
        }
    }
}
