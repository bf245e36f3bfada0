//! 业务逻辑服务模块
//!
//! 封装行情获取、缓存和兜底逻辑

pub mod cache;          // 行情缓存
pub mod common;         // 公共常量和辅助函数
pub mod mock;           // 模拟数据
pub mod stock_service;  // 股票行情服务
pub mod trending;       // 热门股票列表
pub mod upstream;       // 上游数据源

pub use cache::QuoteCache;
pub use stock_service::StockService;
pub use upstream::AlphaVantageClient;
