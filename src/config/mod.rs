use crate::errors::{Result, TrashError};
use crate::resolver;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../../config.example.toml");

#[cfg(target_os = "macos")]
const DEFAULT_HOME_ROOT: &str = "/Users";
#[cfg(not(target_os = "macos"))]
const DEFAULT_HOME_ROOT: &str = "/home";

const DEFAULT_TRASH_DIR_NAME: &str = ".Trash";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub trash: TrashConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// ホームディレクトリ配下のゴミ箱配置規約。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrashConfig {
    pub home_root: PathBuf,
    pub dir_name: String,
}

impl Default for TrashConfig {
    fn default() -> Self {
        Self {
            home_root: PathBuf::from(DEFAULT_HOME_ROOT),
            dir_name: DEFAULT_TRASH_DIR_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、ゴミ箱の配置規約を構築する。
    ///
    /// # 判定ルール
    /// 1. `RMTRASH_CONFIG_PATH` または `~/.config/rmtrash/config.toml` を使用
    /// 2. 設定ファイルが存在しない場合はデフォルト設定を作成
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// 指定パスの設定ファイルを読み込んで検証する。
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path).map_err(|source| TrashError::ConfigRead {
            path: config_path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| TrashError::ConfigParse {
            path: config_path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        Ok(config)
    }

    /// 読み込んだ設定値の整合性を検証する。
    ///
    /// `trash.home_root` は絶対パス、`trash.dir_name` は単一のパス要素のみ許可する。
    fn validate(&self) -> Result<()> {
        if !self.trash.home_root.is_absolute() {
            return Err(TrashError::InvalidConfig(format!(
                "trash.home_root must be an absolute path: {}",
                self.trash.home_root.display()
            )));
        }

        if !resolver::is_single_name(&self.trash.dir_name) {
            return Err(TrashError::InvalidConfig(format!(
                "trash.dir_name must be a single directory name: {:?}",
                self.trash.dir_name
            )));
        }

        Ok(())
    }

    /// Determines the path to the configuration file.
    ///
    /// # Priority
    /// 1. RMTRASH_CONFIG_PATH environment variable (for testing and custom setups)
    /// 2. ~/.config/rmtrash/config.toml (default location)
    fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("RMTRASH_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let home_dir = dirs::home_dir().ok_or_else(|| {
            TrashError::InvalidConfig("Could not determine home directory".to_string())
        })?;

        Ok(home_dir.join(".config").join("rmtrash").join("config.toml"))
    }

    /// デフォルト設定ファイルを作成する。
    fn create_default_config(config_path: &Path) -> Result<()> {
        let write_err = |source| TrashError::ConfigWrite {
            path: config_path.to_path_buf(),
            source,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        fs::write(config_path, DEFAULT_CONFIG_TEMPLATE).map_err(write_err)
    }
}
