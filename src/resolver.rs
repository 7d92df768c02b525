use crate::config::TrashConfig;
use crate::errors::{Result, TrashError};
use crate::fs::FileSystem;
use std::path::{Component, Path, PathBuf};

/// ユーザー名からゴミ箱ディレクトリを導く規約。ホスト OS ごとに差し替える。
pub trait TrashRootResolver {
    /// 実行ユーザー名を返す。
    fn current_user(&self) -> Result<String>;

    /// 指定ユーザーのホームディレクトリを返す。
    fn home_dir(&self, user: &str) -> PathBuf;

    /// 指定ユーザーのゴミ箱ディレクトリを返す。
    fn trash_root(&self, user: &str) -> PathBuf;
}

/// `<home_root>/<user>/<dir_name>` 形式の規約。
#[derive(Debug, Clone)]
pub struct HomeRootResolver {
    home_root: PathBuf,
    dir_name: String,
}

impl HomeRootResolver {
    pub fn new(home_root: impl Into<PathBuf>, dir_name: impl Into<String>) -> Self {
        Self {
            home_root: home_root.into(),
            dir_name: dir_name.into(),
        }
    }

    pub fn from_config(config: &TrashConfig) -> Self {
        Self::new(config.home_root.clone(), config.dir_name.clone())
    }
}

impl TrashRootResolver for HomeRootResolver {
    fn current_user(&self) -> Result<String> {
        current_username()
    }

    fn home_dir(&self, user: &str) -> PathBuf {
        self.home_root.join(user)
    }

    fn trash_root(&self, user: &str) -> PathBuf {
        self.home_dir(user).join(&self.dir_name)
    }
}

/// 環境変数 `USER`、`LOGNAME`、ホームディレクトリ名の順で実行ユーザー名を求める。
pub fn current_username() -> Result<String> {
    for key in ["USER", "LOGNAME"] {
        if let Ok(name) = std::env::var(key) {
            if !name.is_empty() {
                return Ok(name);
            }
        }
    }

    dirs::home_dir()
        .and_then(|home| home.file_name().map(|n| n.to_string_lossy().into_owned()))
        .ok_or_else(|| {
            TrashError::UserResolution("USER and LOGNAME are unset and HOME is unknown".to_string())
        })
}

/// 単一の通常パス要素（`/` や `..` を含まない名前）かを判定する。
pub fn is_single_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// 移動先ユーザーを確定し、そのゴミ箱ディレクトリを返す。
///
/// `-u` 指定時はホームディレクトリの存在を先に確認し、無ければ `UnknownUser` を返す。
/// 空文字列の指定は指定なしとして扱う。
pub fn resolve_trash_root<F, R>(
    fs: &F,
    resolver: &R,
    user_override: Option<&str>,
) -> Result<PathBuf>
where
    F: FileSystem + ?Sized,
    R: TrashRootResolver + ?Sized,
{
    let user = match user_override.filter(|name| !name.is_empty()) {
        Some(name) => {
            if !is_single_name(name) {
                return Err(TrashError::UnknownUser(name.to_string()));
            }
            let home = resolver.home_dir(name);
            let exists = fs.entry_exists(&home).map_err(|e| {
                TrashError::UserResolution(format!(
                    "cannot access home directory {}: {e}",
                    home.display()
                ))
            })?;
            if !exists {
                return Err(TrashError::UnknownUser(name.to_string()));
            }
            name.to_string()
        }
        None => resolver.current_user()?,
    };

    let trash_root = resolver.trash_root(&user);
    tracing::debug!(user = %user, trash_root = %trash_root.display(), "resolved trash root");
    Ok(trash_root)
}
