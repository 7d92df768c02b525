//! Tracing initialization.
//! `RMTRASH_LOG` が設定されていればそれを、無ければ設定ファイルの `log.level` をフィルタに使う。
//! 出力先は stderr のみ。既定の `warn` では成功時に何も出力しない。

use tracing_subscriber::filter::EnvFilter;

pub const LOG_ENV: &str = "RMTRASH_LOG";

/// Builds the filter from `RMTRASH_LOG`, falling back to the configured level.
fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .ok()
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Initialize tracing. 二重初期化は無視する。
pub fn init_tracing(configured_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured_level))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .try_init();
}
