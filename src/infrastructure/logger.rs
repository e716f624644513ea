//! 日志基础设施

use std::io;

use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志系统：按日期分割的文件日志，可选控制台输出。
    ///
    /// `RUST_LOG` 优先于配置中的级别。返回的 guard 必须保持到进程结束，
    /// 否则缓冲中的日志会丢失。
    pub fn init(config: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
        std::fs::create_dir_all(&config.log_dir)?;

        let file_appender = rolling::daily(&config.log_dir, &config.file_prefix);
        let (file_writer, guard) = non_blocking(file_appender);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=debug", config.level)));

        let console = config
            .console_output
            .then(|| fmt::layer().with_writer(io::stdout).with_ansi(true));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                // 文件中不使用颜色
                fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false)
                    .with_target(false)
                    .with_thread_names(true),
            )
            .with(console)
            .try_init()?;

        Ok(guard)
    }
}
