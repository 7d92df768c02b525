use crate::errors::{Result, TrashError};
use crate::fs::FileSystem;
use chrono::{DateTime, Local};
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

/// Destination suffix format: 14 digits, local wall-clock time.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// 1 回の移動に必要なオプション。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOptions {
    /// 存在しないソースを成功扱いにする。
    pub force: bool,
}

/// 1 件の移動操作を表す。引数ごとに生成して使い捨てる。
#[derive(Debug, Clone)]
pub struct TrashTarget {
    pub source_path: PathBuf,
    pub trash_root: PathBuf,
    pub timestamp: DateTime<Local>,
}

impl TrashTarget {
    /// `<trash_root>/<stem>.<timestamp>[.<ext>]` を返す。
    pub fn destination(&self) -> Result<PathBuf> {
        let file_name = self
            .source_path
            .file_name()
            .ok_or_else(|| TrashError::invalid_path(&self.source_path))?;
        let stamp = self.timestamp.format(TIMESTAMP_FORMAT).to_string();
        Ok(self.trash_root.join(trashed_file_name(file_name, &stamp)))
    }
}

/// ファイル名を stem と拡張子に分け、間にタイムスタンプを挟む。
///
/// `.bashrc` のような先頭ドットのみの名前は拡張子なしとして扱う。
pub fn trashed_file_name(file_name: &OsStr, stamp: &str) -> OsString {
    let as_path = Path::new(file_name);
    let mut name = as_path.file_stem().unwrap_or(file_name).to_os_string();
    name.push(".");
    name.push(stamp);
    if let Some(ext) = as_path.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

/// 解決済みのゴミ箱ディレクトリへファイルを移動する。
pub struct Trasher<F> {
    fs: F,
    trash_root: PathBuf,
}

impl<F: FileSystem> Trasher<F> {
    pub fn new(fs: F, trash_root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            trash_root: trash_root.into(),
        }
    }

    pub fn trash_root(&self) -> &Path {
        &self.trash_root
    }

    /// 現在時刻でソースをゴミ箱へ移動する。
    ///
    /// 移動先を返す。`force` で存在しないソースを読み飛ばした場合は `None`。
    pub fn move_to_trash(&self, source: &Path, options: &MoveOptions) -> Result<Option<PathBuf>> {
        self.move_to_trash_at(source, options, Local::now())
    }

    /// タイムスタンプを指定して移動する。
    pub fn move_to_trash_at(
        &self,
        source: &Path,
        options: &MoveOptions,
        timestamp: DateTime<Local>,
    ) -> Result<Option<PathBuf>> {
        let source_path = self.absolutize(source)?;

        let exists = self
            .fs
            .entry_exists(&source_path)
            .map_err(|e| TrashError::move_failed(source, e))?;
        if !exists {
            if options.force {
                tracing::debug!(path = %source.display(), "skipping missing source");
                return Ok(None);
            }
            return Err(TrashError::NotFound(source.to_path_buf()));
        }

        let target = TrashTarget {
            source_path,
            trash_root: self.trash_root.clone(),
            timestamp,
        };
        let destination = target.destination()?;
        tracing::debug!(
            source = %target.source_path.display(),
            destination = %destination.display(),
            "moving to trash"
        );

        self.fs
            .rename(&target.source_path, &destination)
            .map_err(|e| TrashError::move_failed(source, e))?;

        tracing::info!(destination = %destination.display(), "moved to trash");
        Ok(Some(destination))
    }

    /// シンボリックリンクを辿らずに絶対パスへ解決する。
    ///
    /// 最終要素が `..` または `.` のみのパスは移動対象として扱わない。
    fn absolutize(&self, path: &Path) -> Result<PathBuf> {
        match path.components().next_back() {
            Some(Component::Normal(_)) => {}
            _ => return Err(TrashError::invalid_path(path)),
        }

        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            let cwd = self
                .fs
                .current_dir()
                .map_err(|e| TrashError::InvalidPath {
                    path: path.to_path_buf(),
                    source: Some(e),
                })?;
            cwd.join(path)
        };

        Ok(normalize_lexically(&absolute))
    }
}

/// `.` と `..` を語彙的に解決する。
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(name) => normalized.push(name),
        }
    }

    normalized
}
