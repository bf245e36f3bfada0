//! 股票行情后端服务
//!
//! 代理 Alpha Vantage 行情和搜索接口，上游无数据时返回模拟数据，
//! 行情结果在内存中短暂缓存以减少上游调用

mod config;     // 配置加载
mod handlers;   // HTTP 请求处理器
mod middleware; // 中间件
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use env_logger::Env;

use crate::config::AppConfig;
use crate::services::{AlphaVantageClient, QuoteCache, StockService};

/// 应用程序入口
///
/// 启动 HTTP 服务器，默认监听 0.0.0.0:5000
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // 初始化日志系统，默认日志级别为 info
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::load();
    if config.upstream.api_key == "demo" {
        log::warn!("未设置 ALPHA_VANTAGE_API_KEY，使用 demo key，多数请求将返回模拟数据");
    }

    let provider = AlphaVantageClient::new(&config.upstream)?;
    let cache = QuoteCache::with_ttl(Duration::from_secs(config.cache.ttl_secs));
    let service = web::Data::new(
        StockService::new(cache, Arc::new(provider))
            .with_trending_concurrency(config.trending.concurrency),
    );

    let bind_addr = config.bind_addr();
    log::info!("启动行情服务，监听 {}", bind_addr);

    // 创建并启动 HTTP 服务器
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .wrap(middleware::cors())  // 允许跨域
            .app_data(service.clone())
            .configure(handlers::config)  // 配置路由
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_addr)
        .with_context(|| format!("绑定地址 {} 失败", bind_addr))?
        .run()
        .await
        .context("HTTP 服务异常退出")
}
