use config::{Config, ConfigError, Environment, File};
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub contact: ContactSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub log_level: Option<String>,
}

#[derive(serde::Deserialize, Clone)]
pub struct ContactSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub submission_delay_ms: u64,
    pub whatsapp_number: String,
}

impl ContactSettings {
    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            submission_delay_ms: 1500,
            whatsapp_number: "9875018888".to_owned(),
        }
    }
}

// Read top-level configuration file with compatible extension YAML,JSON...
// Environment variables such as APP__APPLICATION__PORT override file values.
pub fn get_configuration(filename: &str) -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name(filename))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::get_configuration;
    use claims::assert_ok;
    use std::time::Duration;

    #[test]
    fn bundled_configuration_is_readable() {
        let settings = assert_ok!(get_configuration("configuration"));
        assert_eq!(settings.contact.submission_delay(), Duration::from_millis(1500));
        assert!(!settings.contact.whatsapp_number.is_empty());
    }
}
