//! 行情缓存
//!
//! 以股票代码为键的内存缓存，过期判断在读取时进行，不做后台清理。
//! 容量不设上限：可查询的代码集合有限，条目只会被覆盖不会被删除。

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::models::Quote;

use super::common::now_epoch_secs;

/// 默认缓存有效期
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// 缓存条目，仅在缓存内部使用
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Quote,
    /// 写入时间（Unix 秒）
    timestamp: f64,
}

impl CacheEntry {
    fn is_fresh(&self, now: f64, ttl: Duration) -> bool {
        now - self.timestamp < ttl.as_secs_f64()
    }
}

/// 线程安全的行情缓存
///
/// 所有 worker 共享同一把锁，写入是对槽位的整体替换（后写覆盖先写）
pub struct QuoteCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// 读取未过期的报价
    pub fn get(&self, symbol: &str) -> Option<Quote> {
        self.get_at(symbol, now_epoch_secs())
    }

    /// 写入报价，覆盖已有条目
    pub fn put(&self, symbol: &str, quote: Quote) {
        self.put_at(symbol, quote, now_epoch_secs());
    }

    pub(crate) fn get_at(&self, symbol: &str, now: f64) -> Option<Quote> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&normalize(symbol))
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .map(|entry| entry.data.clone())
    }

    pub(crate) fn put_at(&self, symbol: &str, quote: Quote, timestamp: f64) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(normalize(symbol), CacheEntry { data: quote, timestamp });
    }

    /// 物理存在的条目数（含已过期）
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(symbol: &str) -> String {
    symbol.to_uppercase()
}
