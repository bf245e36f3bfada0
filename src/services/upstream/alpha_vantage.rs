//! Alpha Vantage 接口实现
//!
//! 对接 https://www.alphavantage.co/query 的 GLOBAL_QUOTE 和 SYMBOL_SEARCH

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::models::{Quote, SearchResult};
use crate::services::common::{now_epoch_secs, NOT_AVAILABLE};

use super::{QuoteProvider, UpstreamError};

/// Alpha Vantage 客户端
pub struct AlphaVantageClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl AlphaVantageClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .context("创建 HTTP 客户端失败")?;

        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("上游地址无效: {}", config.base_url))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// 发送查询请求，返回原始响应体
    async fn query(&self, function: &str, params: &[(&str, &str)]) -> Result<String, UpstreamError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("function", function)
            .extend_pairs(params)
            .append_pair("apikey", &self.api_key);

        log::debug!("📡 请求上游 function={} params={:?}", function, params);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageClient {
    fn name(&self) -> &'static str {
        "ALPHA_VANTAGE"
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<Option<Quote>, UpstreamError> {
        let body = self.query("GLOBAL_QUOTE", &[("symbol", symbol)]).await?;
        parse_global_quote(symbol, &body)
    }

    async fn search_symbols(
        &self,
        keyword: &str,
    ) -> Result<Option<Vec<SearchResult>>, UpstreamError> {
        let body = self.query("SYMBOL_SEARCH", &[("keywords", keyword)]).await?;
        parse_symbol_search(&body)
    }
}

// ==================== 响应结构 ====================

const GLOBAL_QUOTE_KEY: &str = "Global Quote";
const BEST_MATCHES_KEY: &str = "bestMatches";

#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "09. change")]
    change: Option<String>,
    #[serde(rename = "10. change percent")]
    change_percent: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BestMatch {
    #[serde(rename = "1. symbol", default)]
    symbol: String,
    #[serde(rename = "2. name", default)]
    name: String,
    #[serde(rename = "3. type", default)]
    kind: String,
    #[serde(rename = "4. region", default)]
    region: String,
}

/// 解析响应体并取出顶层字段
///
/// 响应体不是合法 JSON 时为硬失败；字段缺失、为 null 或为空（"", [], {}, 0, false）时返回 `None`
fn top_level_field(body: &str, key: &str) -> Result<Option<Value>, UpstreamError> {
    let mut body: Value =
        serde_json::from_str(body).map_err(|e| UpstreamError::Decode(e.to_string()))?;

    let field = body.get_mut(key).map(Value::take).filter(has_content);
    Ok(field)
}

fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// 字段类型与预期不符时同样视为上游无数据
fn convert<T: DeserializeOwned>(key: &str, value: Value) -> Option<T> {
    serde_json::from_value(value)
        .map_err(|e| log::warn!("上游字段 \"{}\" 格式不符，按无数据处理: {}", key, e))
        .ok()
}

/// 解析 GLOBAL_QUOTE 响应
///
/// 缺少 "Global Quote" 或其为空时返回 `Ok(None)`
pub(crate) fn parse_global_quote(symbol: &str, body: &str) -> Result<Option<Quote>, UpstreamError> {
    let quote: GlobalQuote = match top_level_field(body, GLOBAL_QUOTE_KEY)?
        .and_then(|value| convert(GLOBAL_QUOTE_KEY, value))
    {
        Some(quote) => quote,
        None => return Ok(None),
    };

    let or_na = |field: Option<String>| field.unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Ok(Some(Quote {
        symbol: symbol.to_string(),
        price: or_na(quote.price),
        change: or_na(quote.change),
        percent_change: or_na(quote.change_percent),
        timestamp: now_epoch_secs(),
    }))
}

/// 解析 SYMBOL_SEARCH 响应
///
/// 缺少 "bestMatches" 或其为空时返回 `Ok(None)`
pub(crate) fn parse_symbol_search(body: &str) -> Result<Option<Vec<SearchResult>>, UpstreamError> {
    let matches: Vec<BestMatch> = match top_level_field(body, BEST_MATCHES_KEY)?
        .and_then(|value| convert(BEST_MATCHES_KEY, value))
    {
        Some(matches) => matches,
        None => return Ok(None),
    };

    Ok(Some(
        matches
            .into_iter()
            .map(|m| SearchResult {
                symbol: m.symbol,
                name: m.name,
                kind: m.kind,
                region: m.region,
            })
            .collect(),
    ))
}
