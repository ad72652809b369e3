//! Configuration file support for MyChef.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/mychef/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Public HowToCook recipe dump
pub const DEFAULT_RECIPES_URL: &str =
    "https://weilei.site/all_recipes.json";

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub categories: CategoryNames,

    #[serde(default)]
    pub shopping: ShoppingConfig,

    #[serde(default)]
    pub recommend: RecommendConfig,
}

/// Where the catalog comes from
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_remote_url")]
    pub remote_url: Option<String>,

    /// Archive read when the remote fetch fails. Unset means the bundled archive.
    #[serde(default)]
    pub archive_path: Option<PathBuf>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub offline: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            remote_url: default_remote_url(),
            archive_path: None,
            timeout_secs: default_timeout_secs(),
            offline: false,
        }
    }
}

/// Dataset labels for the category roles the planners rely on
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CategoryNames {
    pub breakfast: String,
    pub staple: String,
    pub aquatic: String,
    pub meat: String,
    pub vegetable: String,
    pub dessert: String,
    pub soup: String,
}

impl Default for CategoryNames {
    fn default() -> Self {
        Self {
            breakfast: "早餐".into(),
            staple: "主食".into(),
            aquatic: "水产".into(),
            meat: "荤菜".into(),
            vegetable: "素菜".into(),
            dessert: "甜品".into(),
            soup: "汤羹".into(),
        }
    }
}

/// Keyword lists for shopping buckets, checked spice → fresh → pantry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShoppingConfig {
    #[serde(default = "default_spice_keywords")]
    pub spice_keywords: Vec<String>,

    #[serde(default = "default_fresh_keywords")]
    pub fresh_keywords: Vec<String>,

    #[serde(default = "default_pantry_keywords")]
    pub pantry_keywords: Vec<String>,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            spice_keywords: default_spice_keywords(),
            fresh_keywords: default_fresh_keywords(),
            pantry_keywords: default_pantry_keywords(),
        }
    }
}

/// Quick recommendation parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Meat types tried in order when filling the meat quota
    #[serde(default = "default_meat_keywords")]
    pub meat_keywords: Vec<String>,

    /// Groups larger than this get a dedicated fish dish
    #[serde(default = "default_fish_dish_threshold")]
    pub fish_dish_threshold: u32,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            meat_keywords: default_meat_keywords(),
            fish_dish_threshold: default_fish_dish_threshold(),
        }
    }
}

// Default value functions
fn default_remote_url() -> Option<String> {
    Some(DEFAULT_RECIPES_URL.into())
}

fn default_timeout_secs() -> u64 {
    10
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_spice_keywords() -> Vec<String> {
    strings(&[
        "盐", "糖", "酱油", "生抽", "老抽", "醋", "料酒", "蚝油", "花椒", "八角", "桂皮",
        "香叶", "胡椒", "辣椒粉", "孜然", "五香粉", "十三香", "味精", "鸡精", "豆瓣酱",
        "淀粉",
    ])
}

fn default_fresh_keywords() -> Vec<String> {
    strings(&[
        "肉", "排骨", "鸡", "鸭", "鱼", "虾", "蟹", "贝", "蛋", "豆腐", "菜", "葱", "姜",
        "蒜", "椒", "瓜", "茄", "番茄", "西红柿", "土豆", "萝卜", "菇", "笋", "芹", "藕",
        "豆芽", "牛奶", "水果",
    ])
}

fn default_pantry_keywords() -> Vec<String> {
    strings(&[
        "米", "面", "粉", "油", "豆", "干", "罐头", "芝麻", "花生", "木耳", "粉丝", "腐竹",
        "红枣", "枸杞",
    ])
}

fn default_meat_keywords() -> Vec<String> {
    strings(&["猪肉", "鸡肉", "牛肉", "羊肉", "鸭肉", "鱼肉"])
}

fn default_fish_dish_threshold() -> u32 {
    8
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        base.join("mychef").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject settings the planners cannot work with
    pub fn validate(&self) -> Result<()> {
        let c = &self.categories;
        let labels = [
            &c.breakfast,
            &c.staple,
            &c.aquatic,
            &c.meat,
            &c.vegetable,
            &c.dessert,
            &c.soup,
        ];
        if labels.iter().any(|l| l.trim().is_empty()) {
            return Err(Error::Config("Category labels must not be empty".into()));
        }

        let keyword_lists = [
            &self.shopping.spice_keywords,
            &self.shopping.fresh_keywords,
            &self.shopping.pantry_keywords,
            &self.recommend.meat_keywords,
        ];
        if keyword_lists
            .iter()
            .any(|list| list.iter().any(|k| k.is_empty()))
        {
            // An empty keyword would match every ingredient name
            return Err(Error::Config("Keywords must not be empty strings".into()));
        }

        if self.source.timeout_secs == 0 {
            return Err(Error::Config("source.timeout_secs must be positive".into()));
        }

        Ok(())
    }
}
