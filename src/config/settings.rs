// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::models::lead::EngineKind;

/// 应用程序配置设置
///
/// 只在入口处读取，核心组件接收的是普通值
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// Redis配置，整段可省略
    #[serde(default)]
    pub redis: RedisSettings,
    /// 线索缓存配置
    pub cache: CacheSettings,
    /// SerpAPI 配置
    pub serpapi: SerpApiSettings,
    /// Reddit 原生搜索配置
    pub reddit: RedditSettings,
    /// 出站HTTP配置
    pub http: HttpSettings,
    /// Prometheus 导出配置
    pub metrics: MetricsSettings,
    /// 日志配置
    pub log: LogSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL（postgres:// 或 sqlite://）
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
    /// 是否记录SQL语句
    #[serde(default)]
    pub log_statements: bool,
}

/// Redis配置设置
#[derive(Debug, Default, Deserialize)]
pub struct RedisSettings {
    /// Redis连接URL，`cache.backend = redis` 时必填
    pub url: Option<String>,
}

/// 缓存后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Database,
    Redis,
    Memory,
}

#[derive(Debug, Deserialize)]
pub struct CacheSettings {
    pub backend: CacheBackend,
    /// 缓存有效期（小时）
    pub ttl_hours: i64,
}

#[derive(Debug, Deserialize)]
pub struct SerpApiSettings {
    /// 未设置时线索搜索返回配置错误
    pub api_key: Option<String>,
    pub base_url: String,
    /// 每个引擎请求的结果数
    pub num: u32,
    /// 按顺序查询的引擎，顺序即去重优先级
    pub engines: Vec<EngineKind>,
    /// 任一引擎失败即整体失败
    pub fail_fast: bool,
}

#[derive(Debug, Deserialize)]
pub struct RedditSettings {
    pub base_url: String,
    pub user_agent: String,
    /// 同时进行的 (子版块, 关键词) 请求数
    pub max_concurrency: usize,
}

#[derive(Debug, Deserialize)]
pub struct HttpSettings {
    /// 出站请求超时（秒）
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct MetricsSettings {
    pub enabled: bool,
    /// Prometheus 监听地址
    pub address: String,
}

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Deserialize)]
pub struct LogSettings {
    pub format: LogFormat,
    /// `EnvFilter` 指令，`RUST_LOG` 优先
    pub filter: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加：内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// `LEADRS__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("LEADRS")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("serpapi.engines")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite://leadrs.db?mode=rwc")?
            .set_default("database.max_connections", 20)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("cache.backend", "database")?
            .set_default("cache.ttl_hours", 6)?
            .set_default("serpapi.base_url", "https://serpapi.com/search.json")?
            .set_default("serpapi.num", 20)?
            .set_default("serpapi.engines", vec!["google", "bing"])?
            .set_default("serpapi.fail_fast", false)?
            .set_default("reddit.base_url", "https://www.reddit.com")?
            .set_default(
                "reddit.user_agent",
                "leadrs/0.1 (lead discovery; +https://github.com/kirky-x)",
            )?
            .set_default("reddit.max_concurrency", 4)?
            .set_default("http.request_timeout_secs", 15)?
            .set_default("metrics.enabled", true)?
            .set_default("metrics.address", "0.0.0.0:9000")?
            .set_default("log.format", "pretty")?
            .set_default("log.filter", "info,leadrs=debug")
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
