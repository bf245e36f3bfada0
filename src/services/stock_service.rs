//! 股票行情服务
//!
//! 组合缓存、上游数据源和模拟数据：
//! 缓存命中直接返回；未命中时请求上游，上游无数据则改用模拟数据，结果统一写入缓存。

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::models::{Quote, SearchResult, TrendingStock};

use super::cache::QuoteCache;
use super::mock::MockDataGenerator;
use super::trending::TRENDING_SYMBOLS;
use super::upstream::{QuoteProvider, UpstreamError};

/// 热门列表默认并发数
pub const DEFAULT_TRENDING_CONCURRENCY: usize = 8;

pub struct StockService {
    cache: QuoteCache,
    provider: Arc<dyn QuoteProvider>,
    mock: MockDataGenerator,
    trending_concurrency: usize,
}

impl StockService {
    pub fn new(cache: QuoteCache, provider: Arc<dyn QuoteProvider>) -> Self {
        Self {
            cache,
            provider,
            mock: MockDataGenerator::new(),
            trending_concurrency: DEFAULT_TRENDING_CONCURRENCY,
        }
    }

    pub fn with_trending_concurrency(mut self, concurrency: usize) -> Self {
        self.trending_concurrency = concurrency.max(1);
        self
    }

    pub fn cache(&self) -> &QuoteCache {
        &self.cache
    }

    /// 获取单只股票报价
    ///
    /// 上游返回空数据或非 2xx 状态码时使用模拟数据；
    /// 网络错误和无法解析的响应体直接返回错误，不写缓存
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote, UpstreamError> {
        let symbol = symbol.to_uppercase();

        if let Some(quote) = self.cache.get(&symbol) {
            log::debug!("缓存命中: {}", symbol);
            return Ok(quote);
        }

        let fetched = self.provider.fetch_quote(&symbol).await;
        let quote = match status_as_miss(fetched)? {
            Some(quote) => quote,
            None => {
                log::info!("{} 未返回 {} 的数据，使用模拟数据", self.provider.name(), symbol);
                self.mock.quote(&symbol)
            }
        };

        self.cache.put(&symbol, quote.clone());
        Ok(quote)
    }

    /// 获取报价，任何失败都以模拟数据兜底
    async fn get_quote_or_mock(&self, symbol: &str) -> Quote {
        match self.get_quote(symbol).await {
            Ok(quote) => quote,
            Err(e) => {
                log::warn!("获取 {} 行情失败，使用模拟数据: {}", symbol, e);
                let symbol = symbol.to_uppercase();
                let quote = self.mock.quote(&symbol);
                self.cache.put(&symbol, quote.clone());
                quote
            }
        }
    }

    /// 搜索股票代码
    ///
    /// 关键字为空时直接返回空列表，不请求上游
    pub async fn search(&self, keyword: &str) -> Result<Vec<SearchResult>, UpstreamError> {
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let fetched = self.provider.search_symbols(keyword).await;
        match status_as_miss(fetched)? {
            Some(results) => Ok(results),
            None => {
                log::info!("{} 未返回 \"{}\" 的搜索结果，使用模拟数据", self.provider.name(), keyword);
                Ok(self.mock.search_results(keyword))
            }
        }
    }

    /// 获取热门股票列表
    ///
    /// 每个代码独立解析，单个代码失败不影响其他代码，结果顺序与列表一致
    pub async fn trending(&self) -> Vec<TrendingStock> {
        stream::iter(TRENDING_SYMBOLS.iter())
            .map(|(symbol, name)| async move {
                let quote = self.get_quote_or_mock(symbol).await;
                TrendingStock::merge(symbol, name, quote)
            })
            .buffered(self.trending_concurrency)
            .collect()
            .await
    }
}

/// 上游以非 2xx 状态码应答时按无数据处理
fn status_as_miss<T>(result: Result<Option<T>, UpstreamError>) -> Result<Option<T>, UpstreamError> {
    match result {
        Err(UpstreamError::Status(status)) => {
            log::warn!("上游返回 HTTP {}，按无数据处理", status);
            Ok(None)
        }
        other => other,
    }
}
