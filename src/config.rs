use log::debug;
use phonenumber::country;

use crate::analyzer::{
    errors::ConfigError,
    helper_constants::{DEFAULT_LANGUAGE, DEFAULT_REGION},
};

pub const DEFAULT_REGION_VAR: &str = "PHONEINTEL_DEFAULT_REGION";
pub const LANGUAGE_VAR: &str = "PHONEINTEL_LANGUAGE";

/// Settings of a `PhoneAnalyzer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Region assumed when the input has no country calling code.
    pub default_region: country::Id,
    /// Language of the primary location and of carrier names.
    pub language: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            default_region: country::US,
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

impl AnalyzerConfig {
    /// Reads `PHONEINTEL_DEFAULT_REGION` and `PHONEINTEL_LANGUAGE`,
    /// falling back to the defaults for unset or blank variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let region = read(DEFAULT_REGION_VAR).unwrap_or_else(|| DEFAULT_REGION.to_owned());
        let default_region = region
            .to_ascii_uppercase()
            .parse::<country::Id>()
            .map_err(|_| ConfigError::UnknownRegion(region.clone()))?;
        let language = read(LANGUAGE_VAR)
            .map(|language| language.to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned());

        debug!("Default region {:?}, language {}", default_region, language);
        Ok(Self { default_region, language })
    }
}

#[cfg(test)]
mod tests {
    use phonenumber::country;

    use super::{AnalyzerConfig, DEFAULT_REGION_VAR, LANGUAGE_VAR};
    use crate::analyzer::errors::ConfigError;

    #[test]
    fn defaults_when_unset() {
        let config = AnalyzerConfig::from_lookup(|_| None).expect("defaults are valid");
        assert_eq!(AnalyzerConfig::default(), config);
    }

    #[test]
    fn reads_variables() {
        let config = AnalyzerConfig::from_lookup(|name| match name {
            DEFAULT_REGION_VAR => Some("ch".to_owned()),
            LANGUAGE_VAR => Some(" FR ".to_owned()),
            _ => None,
        })
        .expect("CH is a region");
        assert_eq!(country::CH, config.default_region);
        assert_eq!("fr", config.language);
    }

    #[test]
    fn blank_values_fall_back() {
        let config = AnalyzerConfig::from_lookup(|_| Some("  ".to_owned())).expect("defaults are valid");
        assert_eq!(country::US, config.default_region);
        assert_eq!("en", config.language);
    }

    #[test]
    fn unknown_region() {
        let result = AnalyzerConfig::from_lookup(|name| {
            (name == DEFAULT_REGION_VAR).then(|| "Atlantis".to_owned())
        });
        assert_eq!(Err(ConfigError::UnknownRegion("Atlantis".to_owned())), result);
    }
}
