//! 数据库基础设施

use sqlx::{
    postgres::{PgConnectOptions, PgPool, PgPoolOptions},
    ConnectOptions, Error,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::config::{AppConfig, DatabaseConfig};

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn new(app: &AppConfig, config: &DatabaseConfig) -> Result<Self, Error> {
        let options = connect_options(app, config)?;
        info!(
            "Connecting to database: {}:{}/{}",
            options.get_host(),
            options.get_port(),
            options.get_database().unwrap_or_default()
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .max_lifetime(Duration::from_secs(config.max_lifetime_seconds))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn into_pool(self) -> PgPool {
        self.pool
    }
}

/// 构造连接参数
///
/// `url` 非空时以连接串为准，否则使用 host/port/name 等分项。
/// 会话统一设置 application_name、search_path 与 TimeZone。
/// `logging` 关闭时不记录 SQL 语句，开启时沿用 sqlx 默认（语句 debug，超过 1 秒的慢查询 warn）。
pub fn connect_options(app: &AppConfig, config: &DatabaseConfig) -> Result<PgConnectOptions, Error> {
    let options = if config.url.is_empty() {
        let mut options = PgConnectOptions::new_without_pgpass()
            .host(&config.host)
            .port(config.port)
            .database(&config.name);
        if !config.username.is_empty() {
            options = options.username(&config.username);
        }
        if !config.password.is_empty() {
            options = options.password(&config.password);
        }
        options
    } else {
        PgConnectOptions::from_str(&config.url)?
    };

    let mut session = vec![("TimeZone", app.timezone.as_str())];
    if !config.schema.is_empty() {
        session.push(("search_path", config.schema.as_str()));
    }

    let options = options.application_name(&app.name).options(session);
    Ok(if config.logging {
        options
    } else {
        options.disable_statement_logging()
    })
}
