use dioxus::prelude::*;

/// `data-theme` value applied before any preference is stored.
pub const DEFAULT_THEME: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// The `data-theme` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Anything but `"dark"` is light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Reads the `theme` entry out of a `document.cookie` string.
pub fn stored_mode(cookie: &str) -> ThemeMode {
    cookie
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == "theme")
        .map(|(_, value)| ThemeMode::from_key(value))
        .unwrap_or_default()
}

/// Theme signal provided as context; the sidebar footer toggles it.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(*self.is_dark.read())
    }

    pub fn apply(&self) {
        set_theme(self.mode().as_str());
    }
}

/// Provides [`ThemeState`], seeded from the stored `theme` cookie so the
/// toggle matches what [`ThemeSeed`] already applied.
pub fn use_theme_state() -> ThemeState {
    let state = use_context_provider(|| ThemeState {
        is_dark: Signal::new(false),
    });
    use_future(move || async move {
        let mut is_dark = state.is_dark;
        if let Ok(cookie) = document::eval("return document.cookie;")
            .join::<String>()
            .await
        {
            is_dark.set(stored_mode(&cookie).is_dark());
        }
    });
    state
}

/// Applies the theme stored in the `theme` cookie to `<html>` at startup.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(&format!(
            r#"
            (function() {{
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : '{DEFAULT_THEME}';
                document.documentElement.setAttribute('data-theme', theme);
            }})();
            "#,
        ));
    });

    rsx! {}
}

/// Stores `theme` in a cookie and applies it to the document.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_default_theme() {
        assert_eq!(ThemeMode::default().as_str(), DEFAULT_THEME);
    }

    #[test]
    fn unknown_keys_are_light() {
        assert_eq!(ThemeMode::from_key("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_key("evergreen"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_key(""), ThemeMode::Light);
    }

    #[test]
    fn stored_dark_cookie_seeds_dark_mode() {
        assert!(stored_mode("theme=dark").is_dark());
        assert!(stored_mode("session=abc; theme=dark; lang=en").is_dark());
    }

    #[test]
    fn missing_or_light_cookie_seeds_light_mode() {
        assert_eq!(stored_mode(""), ThemeMode::Light);
        assert_eq!(stored_mode("theme=light"), ThemeMode::Light);
        assert_eq!(stored_mode("subtheme=dark"), ThemeMode::Light);
    }
}
