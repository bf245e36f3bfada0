//! 股票接口处理器
//!
//! - GET /api/stock/{symbol} - 获取单只股票报价
//! - GET /api/search?keyword= - 搜索股票代码
//! - GET /api/trending - 获取热门股票列表

use actix_web::{web, HttpResponse, Result};

use crate::models::{ErrorResponse, SearchQuery};
use crate::services::StockService;

pub async fn get_stock_quote(
    service: web::Data<StockService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let symbol = path.into_inner();

    match service.get_quote(&symbol).await {
        Ok(quote) => Ok(HttpResponse::Ok().json(quote)),
        Err(e) => {
            log::error!("获取 {} 行情失败: {}", symbol, e);
            let response = ErrorResponse::new("Failed to fetch stock data", e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub async fn search_stocks(
    service: web::Data<StockService>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let keyword = query.into_inner().keyword.unwrap_or_default();

    match service.search(&keyword).await {
        Ok(results) => Ok(HttpResponse::Ok().json(results)),
        Err(e) => {
            log::error!("搜索 \"{}\" 失败: {}", keyword, e);
            let response = ErrorResponse::new("Failed to search stocks", e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub async fn get_trending_stocks(service: web::Data<StockService>) -> Result<HttpResponse> {
    let stocks = service.trending().await;
    Ok(HttpResponse::Ok().json(stocks))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/stock/{symbol}", web::get().to(get_stock_quote))
        .route("/search", web::get().to(search_stocks))
        .route("/trending", web::get().to(get_trending_stocks));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use crate::models::{Quote, SearchResult, TrendingStock};
    use crate::services::stock_service::tests::{upstream_quote, StubProvider};
    use crate::services::upstream::UpstreamError;
    use crate::services::trending::TRENDING_SYMBOLS;
    use crate::services::QuoteCache;

    fn app_data(provider: &Arc<StubProvider>) -> web::Data<StockService> {
        web::Data::new(StockService::new(QuoteCache::new(), provider.clone()))
    }

    macro_rules! init_app {
        ($data:expr) => {
            test::init_service(App::new().app_data($data.clone()).configure(crate::handlers::config)).await
        };
    }

    #[actix_web::test]
    async fn test_get_quote_returns_upstream_quote() {
        let provider = Arc::new(StubProvider::new(Ok(Some(upstream_quote())), Ok(None)));
        let data = app_data(&provider);
        let app = init_app!(data);

        let req = test::TestRequest::get().uri("/api/stock/ibm").to_request();
        let quote: Quote = test::call_and_read_body_json(&app, req).await;

        assert_eq!(quote.symbol, "IBM");
        assert_eq!(quote.price, "169.8200");
    }

    #[actix_web::test]
    async fn test_transport_failure_returns_500() {
        let provider = Arc::new(StubProvider::failing());
        let data = app_data(&provider);
        let app = init_app!(data);

        let req = test::TestRequest::get().uri("/api/stock/AAPL").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to fetch stock data");
        assert!(body["details"].as_str().unwrap().contains("connection refused"));
        assert!(body.get("price").is_none());
    }

    #[actix_web::test]
    async fn test_upstream_status_error_serves_cached_mock() {
        let err = UpstreamError::Status(503);
        let provider = Arc::new(StubProvider::new(Err(err.clone()), Err(err)));
        let data = app_data(&provider);
        let app = init_app!(data);

        let req = test::TestRequest::get().uri("/api/stock/X").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let first: Quote = test::read_body_json(resp).await;
        assert_eq!(first.symbol, "X");
        assert!(first.percent_change.ends_with('%'));

        let req = test::TestRequest::get().uri("/api/stock/x").to_request();
        let second: Quote = test::call_and_read_body_json(&app, req).await;
        assert_eq!(first, second);
        assert_eq!(provider.quote_calls.load(Ordering::SeqCst), 1);

        let req = test::TestRequest::get().uri("/api/search?keyword=apple").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let results: Vec<SearchResult> = test::read_body_json(resp).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Apple Inc.");
    }

    #[actix_web::test]
    async fn test_unparseable_upstream_body_returns_500() {
        let err = UpstreamError::Decode("expected value at line 1 column 1".to_string());
        let provider = Arc::new(StubProvider::new(Err(err.clone()), Err(err)));
        let data = app_data(&provider);
        let app = init_app!(data);

        let req = test::TestRequest::get().uri("/api/stock/IBM").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to fetch stock data");

        let req = test::TestRequest::get().uri("/api/search?keyword=ibm").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to search stocks");
    }

    #[actix_web::test]
    async fn test_empty_global_quote_serves_cached_mock() {
        let provider = Arc::new(StubProvider::empty());
        let data = app_data(&provider);
        let app = init_app!(data);

        let req = test::TestRequest::get().uri("/api/stock/AAPL").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let first: Quote = test::read_body_json(resp).await;

        let req = test::TestRequest::get().uri("/api/stock/aapl").to_request();
        let second: Quote = test::call_and_read_body_json(&app, req).await;

        assert_eq!(first, second);
        assert_eq!(provider.quote_calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_search_without_keyword_returns_empty_list() {
        let provider = Arc::new(StubProvider::failing());
        let data = app_data(&provider);
        let app = init_app!(data);

        for uri in ["/api/search", "/api/search?keyword="] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let results: Vec<SearchResult> = test::call_and_read_body_json(&app, req).await;
            assert!(results.is_empty());
        }
        assert_eq!(provider.search_calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_search_falls_back_to_mock() {
        let provider = Arc::new(StubProvider::empty());
        let data = app_data(&provider);
        let app = init_app!(data);

        let req = test::TestRequest::get().uri("/api/search?keyword=apple").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            serde_json::json!([{
                "symbol": "AAPL",
                "name": "Apple Inc.",
                "type": "Equity",
                "region": "United States"
            }])
        );
    }

    #[actix_web::test]
    async fn test_search_transport_failure_returns_500() {
        let provider = Arc::new(StubProvider::failing());
        let data = app_data(&provider);
        let app = init_app!(data);

        let req = test::TestRequest::get().uri("/api/search?keyword=apple").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to search stocks");
    }

    #[actix_web::test]
    async fn test_trending_returns_every_symbol() {
        let provider = Arc::new(StubProvider::empty());
        let data = app_data(&provider);
        let app = init_app!(data);

        let req = test::TestRequest::get().uri("/api/trending").to_request();
        let stocks: Vec<TrendingStock> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(stocks.len(), TRENDING_SYMBOLS.len());
        assert_eq!(stocks[0].symbol, "NVDA");
        assert_eq!(stocks[0].name, "Nvidia Corporation");
        assert!(stocks.iter().all(|s| !s.price.is_empty() && s.timestamp > 0.0));
    }

    #[actix_web::test]
    async fn test_health() {
        let provider = Arc::new(StubProvider::empty());
        let data = app_data(&provider);
        let app = init_app!(data);

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["cached_symbols"], 0);
    }
}
