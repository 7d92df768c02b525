use clap::Parser;
use std::path::PathBuf;

/// Move the specified files to the user's trash.
#[derive(Parser, Debug, Default)]
#[command(name = "rmtrash", about, long_about = None)]
#[command(disable_version_flag = true, args_override_self = true)]
pub struct Args {
    /// Move the files to some other user's trash
    #[arg(short = 'u', value_name = "USERNAME")]
    pub user: Option<String>,
    /// Ignore non-existent files
    #[arg(short = 'f')]
    pub force: bool,
    /// 互換性のため `-r` を受理する（挙動は変わらない）
    #[arg(short = 'r')]
    pub recursive: bool,
    /// Print out version info
    #[arg(short = 'v')]
    pub version: bool,
    /// Paths to files or directories to trash
    #[arg(value_name = "FILE")]
    pub path: Vec<PathBuf>,
}
