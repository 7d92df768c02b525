pub mod args;
pub mod trasher;

use crate::config::Config;
use crate::errors::{Result, TrashError};
use crate::fs::{FileSystem, RealFileSystem};
use crate::resolver::{self, HomeRootResolver, TrashRootResolver};
use args::Args;
use clap::CommandFactory;
use trasher::{MoveOptions, Trasher};

pub const SOURCE_URL: &str = "https://changkun.de/s/rmtrash";

/// `-v` で表示するバージョン情報を返す。
pub fn version_text() -> String {
    format!(
        "rmtrash {}\n\nSource: {SOURCE_URL}\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// 使い方を stderr に表示し、usage エラーの終了コードを返す。
pub fn print_usage() -> i32 {
    eprint!("{}", Args::command().render_help());
    TrashError::Usage.exit_code()
}

/// rmtrash コマンド全体を実行し、最初のエラーに応じて終了コードを決定する。
pub fn run(args: Args, config: &Config) -> i32 {
    let resolver = HomeRootResolver::from_config(&config.trash);

    match execute(&args, &resolver, RealFileSystem) {
        Ok(()) => 0,
        Err(TrashError::Usage) => print_usage(),
        Err(e) => {
            eprintln!("rmtrash: {e}");
            e.exit_code()
        }
    }
}

/// 引数順にソースを移動する。最初の失敗で処理を打ち切る。
///
/// ユーザー指定の検証はどのソースにも触れる前に行う。
pub fn execute<F, R>(args: &Args, resolver: &R, fs: F) -> Result<()>
where
    F: FileSystem,
    R: TrashRootResolver + ?Sized,
{
    if args.path.is_empty() {
        return Err(TrashError::Usage);
    }

    let trash_root = resolver::resolve_trash_root(&fs, resolver, args.user.as_deref())?;
    let trasher = Trasher::new(fs, trash_root);
    let options = MoveOptions { force: args.force };

    for path in &args.path {
        trasher.move_to_trash(path, &options)?;
    }

    Ok(())
}
