use crate::server::{content::sanity::SanityConfig, error::config::ConfigError};

static DEFAULT_DATASET: &str = "production";
static DEFAULT_API_VERSION: &str = "2024-01-01";

/// Where the server reads content from.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentSource {
    /// Hosted content store
    Sanity(SanityConfig),
    /// Built-in Hitman 3 dataset served from memory
    Fallback {
        /// Project and dataset used to build image URLs; without a project no image
        /// resolves
        image_project_id: Option<String>,
        image_dataset: String,
    },
}

pub struct Config {
    pub content_source: ContentSource,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `var`, which returns `None` for unset variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `SANITY_PROJECT_ID` unset while the source is `sanity`
    /// - `Err(ConfigError::InvalidEnvValue)` - `CONTENT_SOURCE` or `SANITY_USE_CDN` not recognized
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| var(name).filter(|value| !value.trim().is_empty());

        let dataset = var("SANITY_DATASET").unwrap_or_else(|| DEFAULT_DATASET.to_string());

        let content_source = match var("CONTENT_SOURCE").as_deref() {
            None | Some("sanity") => {
                let project_id = var("SANITY_PROJECT_ID")
                    .ok_or_else(|| ConfigError::MissingEnvVar("SANITY_PROJECT_ID".to_string()))?;

                let use_cdn = match var("SANITY_USE_CDN") {
                    Some(value) => parse_bool("SANITY_USE_CDN", &value)?,
                    // Live reads while developing, cached reads in release builds
                    None => !cfg!(debug_assertions),
                };

                ContentSource::Sanity(SanityConfig {
                    project_id,
                    dataset,
                    api_version: var("SANITY_API_VERSION")
                        .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
                    token: var("SANITY_API_TOKEN"),
                    use_cdn,
                    api_host: var("SANITY_API_HOST"),
                })
            }
            Some("fallback") => ContentSource::Fallback {
                image_project_id: var("SANITY_PROJECT_ID"),
                image_dataset: dataset,
            },
            Some(other) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "CONTENT_SOURCE".to_string(),
                    reason: format!("expected `sanity` or `fallback`, got {:?}", other),
                })
            }
        };

        Ok(Self { content_source })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvValue {
            var: name.to_string(),
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}
