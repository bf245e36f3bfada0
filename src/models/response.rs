//! 通用 API 响应模型
//!
//! 成功时直接返回数据本身，失败时返回统一的错误结构

use serde::{Deserialize, Serialize};

/// 错误响应
///
/// - error: 错误类别（如 "Failed to fetch stock data"）
/// - details: 底层错误信息
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: details.into(),
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// 当前缓存中的代码数量（含已过期条目）
    pub cached_symbols: usize,
    /// 响应时间戳（ISO 8601 格式）
    pub timestamp: String,
}
