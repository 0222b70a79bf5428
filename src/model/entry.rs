//! Configuration entries as served by the config API
//!
//! Entries are deserialized straight from the Console JSON shape and are
//! treated as an immutable snapshot: edits never write into them, a refresh
//! replaces the whole list.

use serde::{Deserialize, Serialize};

/// Which layer supplied an entry's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigSource {
    DefaultConfig,
    DynamicBrokerConfig,
    DynamicDefaultBrokerConfig,
    DynamicTopicConfig,
    StaticBrokerConfig,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ConfigSource {
    /// Human readable explanation of where the value comes from
    pub fn explanation(self) -> &'static str {
        match self {
            ConfigSource::DefaultConfig => "built-in default when not overridden",
            ConfigSource::DynamicBrokerConfig | ConfigSource::DynamicDefaultBrokerConfig => {
                "set at broker level"
            }
            ConfigSource::DynamicTopicConfig => "set for this specific topic",
            ConfigSource::StaticBrokerConfig => {
                "set on the broker by config file or environment variable"
            }
            ConfigSource::Unknown => "",
        }
    }
}

/// Declared input kind for an entry's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrontendFormat {
    Boolean,
    Select,
    MultiSelect,
    ByteSize,
    Duration,
    Password,
    Ratio,
    Integer,
    Decimal,
    #[default]
    #[serde(other)]
    String,
}

/// The same key as it resolves at a broader scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSynonym {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub source: ConfigSource,
}

/// One named configuration key with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub is_explicitly_set: bool,
    #[serde(default)]
    pub source: ConfigSource,
    #[serde(default)]
    pub synonyms: Vec<ConfigSynonym>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub frontend_format: FrontendFormat,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enum_values: Vec<String>,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// The value an entry falls back to when its override is removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritedDefault {
    pub value: Option<String>,
    pub source: ConfigSource,
}

impl ConfigEntry {
    /// Create an entry with only a name and a value; everything else empty
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            is_explicitly_set: false,
            source: ConfigSource::Unknown,
            synonyms: Vec::new(),
            frontend_format: FrontendFormat::String,
            enum_values: Vec::new(),
            documentation: None,
            category: None,
        }
    }

    /// The value as a string, absent values read as ""
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Documentation text, if there is any worth showing
    pub fn documentation(&self) -> Option<&str> {
        self.documentation
            .as_deref()
            .map(str::trim)
            .filter(|doc| !doc.is_empty())
    }

    /// Walk the synonym chain to the broadest scope.
    ///
    /// The last synonym is the ultimate default; without synonyms the entry
    /// is its own default.
    pub fn inherited_default(&self) -> InheritedDefault {
        match self.synonyms.last() {
            Some(synonym) => InheritedDefault {
                value: synonym.value.clone(),
                source: synonym.source,
            },
            None => InheritedDefault {
                value: self.value.clone(),
                source: self.source,
            },
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
