//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for one headless run.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `config.toml`, `items.ron` and `floors/`.
    pub data_dir: PathBuf,
    /// Fixed seed for a reproducible run; random when unset.
    pub seed: Option<u64>,
    /// Accepted actions before the run is cut short.
    pub max_steps: u64,
    /// Overrides the hero name from the content config.
    pub hero_name: Option<String>,
    /// Print the revealed floor when the run ends.
    pub show_map: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data")),
            seed: None,
            max_steps: 1_000,
            hero_name: None,
            show_map: false,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_DATA_DIR` - Content directory (default: bundled data)
    /// - `DUNGEON_SEED` - Session seed (default: random)
    /// - `DUNGEON_MAX_STEPS` - Step limit (default: 1000)
    /// - `DUNGEON_HERO_NAME` - Hero name override
    /// - `DUNGEON_SHOW_MAP` - Render the floor when the run ends (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("DUNGEON_DATA_DIR") {
            config.data_dir = dir;
        }
        config.seed = read_env("DUNGEON_SEED");
        if let Some(steps) = read_env::<u64>("DUNGEON_MAX_STEPS") {
            config.max_steps = steps.max(1);
        }
        config.hero_name = read_env::<String>("DUNGEON_HERO_NAME").filter(|name| !name.is_empty());
        if let Some(show) = read_bool_env("DUNGEON_SHOW_MAP") {
            config.show_map = show;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_bool_env(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
