use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// ゴミ箱への移動で使うファイルシステム操作の境界。
///
/// テストでは呼び出し記録用の実装に差し替え、rename が行われたかを検証する。
pub trait FileSystem {
    /// カレントディレクトリを返す。
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// シンボリックリンクを辿らずにエントリの存在を判定する。
    fn entry_exists(&self, path: &Path) -> io::Result<bool>;

    /// Renames/moves a path.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn entry_exists(&self, path: &Path) -> io::Result<bool> {
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn current_dir(&self) -> io::Result<PathBuf> {
        (**self).current_dir()
    }

    fn entry_exists(&self, path: &Path) -> io::Result<bool> {
        (**self).entry_exists(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn entry_exists_reports_dangling_symlink() {
        // リンク先が無いシンボリックリンクもエントリとして存在扱いになることを確認する。
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("dangling");
        symlink(temp_dir.path().join("missing"), &link).unwrap();

        assert!(RealFileSystem.entry_exists(&link).unwrap());
        assert!(!link.exists(), "std exists() follows the link");
    }

    #[test]
    fn entry_exists_is_false_for_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        assert!(
            !RealFileSystem
                .entry_exists(&temp_dir.path().join("nothing"))
                .unwrap()
        );
    }
}
