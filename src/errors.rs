use std::{io, path::PathBuf};

/// rmtrash の全処理で共有するエラー型。
#[derive(thiserror::Error, Debug)]
pub enum TrashError {
    /// ファイル引数が指定されていない。
    #[error("missing file operand")]
    Usage,

    /// 実行ユーザー名を特定できない。
    #[error("cannot find the current user: {0}")]
    UserResolution(String),

    /// `-u` で指定されたユーザーのホームディレクトリが存在しない。
    #[error("User \"{0}\" does not exist")]
    UnknownUser(String),

    /// 引数を絶対パスへ解決できない。
    #[error("Invalid filepath: {path}")]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    /// 移動対象が存在しない。
    #[error("cannot remove '{0}': no such file or directory")]
    NotFound(PathBuf),

    /// rename が失敗した。
    #[error(
        "could not move \"{path}\" to the trash: {source} (perhaps you don't have sufficient privileges?)"
    )]
    MoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write default config {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl TrashError {
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            source: None,
        }
    }

    pub fn move_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::MoveFailed {
            path: path.into(),
            source,
        }
    }

    /// プロセス終了コードへ変換する。usage エラーのみ 2 を返す。
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage => 2,
            _ => 1,
        }
    }
}

/// Shared result alias for the crate.
pub type Result<T> = std::result::Result<T, TrashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_maps_to_exit_code_two() {
        assert_eq!(TrashError::Usage.exit_code(), 2);
        assert_eq!(TrashError::UnknownUser("nobody".into()).exit_code(), 1);
        assert_eq!(TrashError::NotFound("a.txt".into()).exit_code(), 1);
    }

    #[test]
    fn move_failed_message_carries_privilege_hint() {
        let err = TrashError::move_failed(
            "/protected/file.txt",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        let message = err.to_string();
        assert!(message.contains("/protected/file.txt"));
        assert!(message.contains("sufficient privileges"));
    }
}
