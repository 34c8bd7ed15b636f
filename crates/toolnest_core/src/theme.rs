//! Color theme preference.
//!
//! # Responsibility
//! - Persist the light/dark preference under the `theme` key.
//! - Keep the preference a closed enum so invalid themes are
//!   unrepresentable.
//!
//! # Invariants
//! - Anything stored that is not exactly `dark` loads as [`Light`].
//! - Persisting is an explicit call by the owner of the store, performed
//!   after the in-memory switch, never a reactive side effect.
//!
//! [`Light`]: ThemePreference::Light

use crate::store::KeyValueStore;
use log::debug;

/// Store key holding the theme label.
pub const THEME_KEY: &str = "theme";

/// User-selected color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Stable label persisted under [`THEME_KEY`].
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite preference.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Loads the persisted preference, falling back to [`Light`] for
    /// absent or unrecognized values.
    ///
    /// [`Light`]: Self::Light
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        match store.read(THEME_KEY).as_deref() {
            Some("dark") => Self::Dark,
            Some("light") | None => Self::Light,
            Some(other) => {
                debug!(
                    "event=theme_load module=theme status=fallback stored_len={}",
                    other.len()
                );
                Self::Light
            }
        }
    }

    /// Persists this preference.
    pub fn save<S: KeyValueStore>(self, store: &mut S) {
        store.write(THEME_KEY, self.label());
    }
}
