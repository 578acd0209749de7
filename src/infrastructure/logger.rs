//! 日志基础设施

use tracing::Level;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志：按天滚动的文件日志，可选控制台输出。
    ///
    /// 返回的 guard 需要持有到进程结束，否则缓冲中的日志会丢失。
    pub fn init(config: &AppConfig) -> std::io::Result<WorkerGuard> {
        std::fs::create_dir_all(&config.log_path)?;

        let file_appender = rolling::daily(&config.log_path, &config.name);
        let (file_writer, guard) = non_blocking(file_appender);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Self::level(config.debug).as_str()));

        let console = config
            .console_output
            .then(|| fmt::layer().with_writer(std::io::stdout).with_ansi(true));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false)
                    .with_target(false)
                    .with_thread_ids(true),
            )
            .with(console)
            .init();

        Ok(guard)
    }

    pub fn level(debug: bool) -> Level {
        if debug {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}
