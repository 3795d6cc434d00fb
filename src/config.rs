//! Configuration for building location trees.

/// How the builder chooses the point a group of locations is split around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    /// Split at the centroid (mean x, mean y) of the group.
    #[default]
    Mean,
    /// Split at the upper median x and upper median y of the group.
    Median,
}

/// Tree builder configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub split_strategy: SplitStrategy,

    /// Reject locations with NaN or infinite coordinates
    #[serde(default = "Config::default_validate_input")]
    pub validate_input: bool,
}

impl Config {
    const fn default_validate_input() -> bool {
        true
    }

    pub fn with_split_strategy(mut self, strategy: SplitStrategy) -> Self {
        self.split_strategy = strategy;
        self
    }

    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_input = enabled;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split_strategy: SplitStrategy::default(),
            validate_input: Self::default_validate_input(),
        }
    }
}
