//! 配置模块
//!
//! 默认值 ← JSON 配置文件 ← 环境变量（含 .env），后者覆盖前者

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::services::common::ALPHA_VANTAGE_QUERY_API;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// 上游数据源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Alpha Vantage API Key
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// 查询接口地址
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// 缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// 行情缓存有效期（秒）
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,
}

/// 热门列表配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingConfig {
    /// 同时解析的代码数量
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub trending: TrendingConfig,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }
fn default_api_key() -> String { "demo".to_string() }
fn default_base_url() -> String { ALPHA_VANTAGE_QUERY_API.to_string() }
fn default_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 10 }
fn default_ttl() -> u64 { 60 }
fn default_concurrency() -> usize { 8 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_secs: default_ttl() }
    }
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self { concurrency: default_concurrency() }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值，最后应用环境变量
    pub fn load() -> Self {
        let config_paths = ["config.json", "config/config.json"];

        let mut config = config_paths
            .iter()
            .filter(|path| Path::new(path).exists())
            .find_map(|path| match Self::from_file(path) {
                Ok(config) => {
                    log::info!("从 {} 加载配置成功", path);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("加载配置文件 {} 失败: {}", path, e);
                    None
                }
            })
            .unwrap_or_else(|| {
                log::info!("使用默认配置");
                Self::default()
            });

        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// 用环境变量覆盖配置项，无法解析的数值保留原值
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_var(&lookup, "PORT") {
            self.server.port = port;
        }
        if let Some(api_key) = lookup("ALPHA_VANTAGE_API_KEY").filter(|k| !k.is_empty()) {
            self.upstream.api_key = api_key;
        }
        if let Some(base_url) = lookup("ALPHA_VANTAGE_BASE_URL") {
            self.upstream.base_url = base_url;
        }
        if let Some(ttl) = parse_var(&lookup, "QUOTE_CACHE_TTL_SECS") {
            self.cache.ttl_secs = ttl;
        }
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("环境变量 {}={} 无法解析，忽略", key, raw);
            None
        }
    }
}
