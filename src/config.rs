/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{fmt, fs};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Clone, Debug, EnumIter, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConfigKey {
    Server,
    AuthToken,
    UserRole,
    UserProfile,
    SavedJobs,
    SearchHistory,
    CvDraft,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::iter()
            .find(|key| format!("{}", key) == s.to_lowercase())
            .ok_or(())
    }
}

pub fn get_config_file() -> PathBuf {
    let mut config_dir = dirs::config_dir().expect("Could not find configuration directory");
    config_dir.push("vieclam");
    config_dir.push("config.toml");
    config_dir
}

pub fn load_config_at(config_file: &Path) -> HashMap<ConfigKey, Option<String>> {
    if config_file.exists() {
        let contents = fs::read_to_string(config_file).expect("Failed to read configuration file");
        toml::from_str(&contents).expect("Failed to parse configuration file")
    } else {
        let mut config = HashMap::new();

        for config_key in ConfigKey::iter() {
            config.insert(config_key, None);
        }

        config
    }
}

pub fn load_config() -> HashMap<ConfigKey, Option<String>> {
    load_config_at(&get_config_file())
}

pub fn save_config_at(config_file: &Path, config: &HashMap<ConfigKey, Option<String>>) {
    let config_dir = config_file
        .parent()
        .expect("Failed to get configuration directory");

    fs::create_dir_all(config_dir).expect("Failed to create configuration directory");

    let contents = toml::to_string_pretty(config).expect("Failed to serialize configuration");
    let mut file = fs::File::create(config_file).expect("Failed to create configuration file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write configuration file");
}

pub fn save_config(config: &HashMap<ConfigKey, Option<String>>) {
    save_config_at(&get_config_file(), config);
}

/// Sets the key when a value is given, otherwise reads it. `quiet`
/// suppresses the printed result for programmatic callers.
pub fn set_get_value(key: ConfigKey, value: Option<String>, quiet: bool) -> Option<String> {
    if let Some(value) = value {
        let mut config = load_config();
        config.insert(key.clone(), Some(value.clone()));
        save_config(&config);

        if !quiet {
            println!("{} set to \"{}\"", key, value);
        }

        Some(value)
    } else {
        let config = load_config();
        let found = config.get(&key).cloned().flatten();

        if !quiet {
            match &found {
                Some(value) => println!("{}", value),
                None => println!("[unset]"),
            }
        }

        found
    }
}

pub fn set_get_value_from_string(
    key: String,
    value: Option<String>,
    quiet: bool,
) -> Result<Option<String>, String> {
    match key.parse::<ConfigKey>() {
        Ok(config_key) => Ok(set_get_value(config_key, value, quiet)),
        Err(()) => {
            if !quiet {
                println!("Invalid key: {}", key);
                println!("Valid keys are:");
                for config_key in ConfigKey::iter() {
                    println!("{}", config_key);
                }
            }

            Err("Invalid key".to_string())
        }
    }
}
