//! 上游行情数据源
//!
//! 定义数据源接口和错误类型。
//! 上游可达但数据为空视为"软未命中"（返回 `Ok(None)`），由调用方改用模拟数据；
//! 网络错误、非 2xx 状态码、无法解析的响应体视为硬失败（返回 `Err`），不做重试。
//! 其中 `Status` 仍由服务层按无数据处理，只有 `Transport` 和 `Decode` 会返回 500。

pub mod alpha_vantage;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Quote, SearchResult};

pub use alpha_vantage::AlphaVantageClient;

/// 上游硬失败
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Transport(String),
    #[error("Upstream returned HTTP {0}")]
    Status(u16),
    #[error("Failed to parse upstream response: {0}")]
    Decode(String),
}

/// 行情数据源
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// 获取单只股票报价，`Ok(None)` 表示上游没有数据
    async fn fetch_quote(&self, symbol: &str) -> Result<Option<Quote>, UpstreamError>;

    /// 按关键字搜索代码，`Ok(None)` 表示上游没有数据
    async fn search_symbols(&self, keyword: &str)
        -> Result<Option<Vec<SearchResult>>, UpstreamError>;
}
