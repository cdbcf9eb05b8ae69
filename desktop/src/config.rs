use std::path::PathBuf;

use engine::config::{ConfigManager, Validate};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "snake_arcade_config.yaml";

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Presentation preferences only. Board dimensions and pacing belong to the
/// engine settings and are not read from any file.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub cell_size_px: f32,
    pub show_grid_lines: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size_px: 20.0,
            show_grid_lines: true,
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size_px < 4.0 {
            return Err("cell_size_px must be at least 4".to_string());
        }
        if self.cell_size_px > 64.0 {
            return Err("cell_size_px must not exceed 64".to_string());
        }
        Ok(())
    }
}

/// Loads the display config, defaulting when no file exists. An explicit
/// `path` overrides the per-executable location.
pub fn load_display_config(path: Option<&str>) -> Result<DisplayConfig, String> {
    let path = match path {
        Some(p) => PathBuf::from(p),
        None => default_config_path(),
    };
    ConfigManager::from_yaml_file(&path).get_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::config::{
        ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
    };

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_arcade_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = DisplayConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: DisplayConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_round_trips_through_manager() {
        let config = DisplayConfig {
            cell_size_px: 32.0,
            show_grid_lines: false,
        };
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, DisplayConfig, _> = ConfigManager::new(
            FileContentConfigProvider::new(&file_path),
            YamlConfigSerializer::new(),
        );

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        std::fs::remove_file(file_path).ok();
    }

    #[test]
    fn test_missing_file_yields_default() {
        let manager: ConfigManager<_, DisplayConfig, _> = ConfigManager::new(
            FileContentConfigProvider::new("this_file_does_not_exist.yaml"),
            YamlConfigSerializer::new(),
        );
        assert_eq!(manager.get_config().unwrap(), DisplayConfig::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        provider
            .set_config_content("cell_size_px: 1.0\nshow_grid_lines: true\n")
            .unwrap();

        let manager: ConfigManager<_, DisplayConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        std::fs::remove_file(file_path).ok();
    }
}
