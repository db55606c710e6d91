/*!
 * Persisted display preferences.
 *
 * Only the color-scheme choice is modeled; rendering is the UI's concern.
 */

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::storage::{keys, KeyValueStore};

/// Preferred color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

impl ColorScheme {
    /// The other scheme
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(anyhow::anyhow!("Invalid color scheme: {}", s)),
        }
    }
}

/// Store for persisted display preferences
#[derive(Clone)]
pub struct PreferenceStore {
    /// Durability layer
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    /// Create a preference store over the given key-value store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the persisted color scheme
    ///
    /// Absent, unreadable, or unparseable values fall back to the default.
    pub async fn color_scheme(&self) -> ColorScheme {
        match self.store.get(keys::COLOR_SCHEME).await {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!("Discarding unparseable color scheme: {}", e);
                ColorScheme::default()
            }),
            Ok(None) => ColorScheme::default(),
            Err(e) => {
                warn!("Failed to read color scheme, using default: {}", e);
                ColorScheme::default()
            }
        }
    }

    /// Persist a color scheme choice
    pub async fn set_color_scheme(&self, scheme: ColorScheme) -> Result<()> {
        self.store
            .set(keys::COLOR_SCHEME, &scheme.to_string())
            .await
            .context("Failed to persist color scheme")
    }

    /// Flip the persisted scheme, returning the new value
    pub async fn toggle_color_scheme(&self) -> Result<ColorScheme> {
        let next = self.color_scheme().await.toggled();
        self.set_color_scheme(next).await?;
        Ok(next)
    }
}
