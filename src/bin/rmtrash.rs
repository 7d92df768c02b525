use clap::Parser;
use rmtrash::commands::rmtrash::{self as command, args::Args};
use rmtrash::config::Config;
use rmtrash::logging;

/// Move files to the user's trash instead of deleting them.
fn main() {
    let args = Args::parse();

    if args.version {
        print!("{}", command::version_text());
        return;
    }

    // 設定に依存しない usage エラーは設定の読み込み前に判定する
    if args.path.is_empty() {
        std::process::exit(command::print_usage());
    }

    // 設定ファイルを読み込む
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("rmtrash: {e}");
            std::process::exit(1);
        }
    };

    logging::init_tracing(&config.log.level);

    let exit_code = command::run(args, &config);
    std::process::exit(exit_code);
}
