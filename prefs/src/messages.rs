//! Per-locale translated content bundles.
//!
//! Bundles are JSON trees compiled into the binary, one per [`Locale`].
//! Lookups use dotted paths (`contact.form.send`). A missing string renders
//! as its own key so gaps are visible on the page instead of blank.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locale::Locale;

const PT_BUNDLE: &str = include_str!("../messages/pt.json");
const EN_BUNDLE: &str = include_str!("../messages/en.json");

/// Error returned when an embedded bundle cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum MessagesError {
    #[error("invalid {locale} message bundle: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
    #[error("{locale} message bundle must be a JSON object")]
    NotObject { locale: Locale },
}

/// Translation tree for a single locale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Messages {
    root: Value,
}

impl Messages {
    /// Parse a bundle; the top level must be an object of namespaces.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not valid JSON or not an object.
    pub fn from_json(locale: Locale, raw: &str) -> Result<Self, MessagesError> {
        let root: Value = serde_json::from_str(raw).map_err(|source| MessagesError::Parse { locale, source })?;
        if !root.is_object() {
            return Err(MessagesError::NotObject { locale });
        }
        Ok(Self { root })
    }

    /// Load the bundle compiled into the binary for `locale`.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is malformed.
    pub fn embedded(locale: Locale) -> Result<Self, MessagesError> {
        let raw = match locale {
            Locale::Pt => PT_BUNDLE,
            Locale::En => EN_BUNDLE,
        };
        Self::from_json(locale, raw)
    }

    /// Bundle with no entries; every lookup falls back to its key.
    #[must_use]
    pub fn empty() -> Self {
        Self { root: Value::Object(serde_json::Map::new()) }
    }

    /// Raw node at a dotted path.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.').try_fold(&self.root, |node, segment| node.get(segment))
    }

    /// String at `key`, or `key` itself when missing or not a scalar.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                tracing::debug!(key, "missing message");
                key.to_owned()
            }
        }
    }

    /// Typed array at `key`. Missing or mistyped arrays yield no items.
    #[must_use]
    pub fn items<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(node) = self.lookup(key) else {
            tracing::debug!(key, "missing message list");
            return Vec::new();
        };
        match serde_json::from_value(node.clone()) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key, error = %e, "message list has unexpected shape");
                Vec::new()
            }
        }
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// All bundles, parsed once at startup and shared behind `Arc`.
#[derive(Clone, Debug)]
pub struct Catalog {
    bundles: HashMap<Locale, Arc<Messages>>,
}

impl Catalog {
    /// Parse every embedded bundle.
    ///
    /// # Errors
    ///
    /// Returns the first bundle that fails to parse.
    pub fn embedded() -> Result<Self, MessagesError> {
        let mut bundles = HashMap::new();
        for locale in Locale::ALL {
            bundles.insert(locale, Arc::new(Messages::embedded(locale)?));
        }
        Ok(Self { bundles })
    }

    /// Bundle for `locale`; an empty bundle if none was loaded.
    #[must_use]
    pub fn bundle(&self, locale: Locale) -> Arc<Messages> {
        self.bundles
            .get(&locale)
            .cloned()
            .unwrap_or_else(|| Arc::new(Messages::empty()))
    }
}

// =============================================================================
// CONTENT RECORDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub platform: String,
    pub hours: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReadme {
    pub about: String,
    pub features: Vec<String>,
    pub installation: String,
}

/// A portfolio project card and its detail view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub github: String,
    #[serde(default)]
    pub demo: String,
    #[serde(default)]
    pub image: String,
    pub technologies: Vec<String>,
    pub readme: ProjectReadme,
}
