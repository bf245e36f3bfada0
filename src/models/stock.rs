//! 股票数据模型
//!
//! 定义行情、搜索结果和热门股票的数据结构

use serde::{Deserialize, Serialize};

/// 单只股票的实时报价
///
/// 价格字段保持字符串形式，上游缺失的子字段用 "N/A" 填充
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Quote {
    /// 股票代码（大写）
    pub symbol: String,
    /// 当前价格
    pub price: String,
    /// 涨跌额
    pub change: String,
    /// 涨跌幅（带 % 后缀）
    pub percent_change: String,
    /// 生成时间（Unix 秒，含小数）
    pub timestamp: f64,
}

/// 代码搜索结果
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchResult {
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
}

/// 热门股票：静态代码/名称与最新报价合并后的结果
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrendingStock {
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub change: String,
    pub percent_change: String,
    pub timestamp: f64,
}

impl TrendingStock {
    /// 用报价字段补全静态条目
    pub fn merge(symbol: &str, name: &str, quote: Quote) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price: quote.price,
            change: quote.change,
            percent_change: quote.percent_change,
            timestamp: quote.timestamp,
        }
    }
}

/// 搜索查询参数
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// 关键字（代码或公司名称）
    pub keyword: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_serializes_type_field() {
        let result = SearchResult {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            kind: "Equity".to_string(),
            region: "United States".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["type"], "Equity");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_trending_merge_keeps_static_fields() {
        let quote = Quote {
            symbol: "BRK.A".to_string(),
            price: "101.00".to_string(),
            change: "1.00".to_string(),
            percent_change: "1.00%".to_string(),
            timestamp: 1_700_000_000.5,
        };

        let stock = TrendingStock::merge("BRK.A", "Berkshire Hathaway Inc.", quote);
        assert_eq!(stock.name, "Berkshire Hathaway Inc.");
        assert_eq!(stock.price, "101.00");
        assert_eq!(stock.timestamp, 1_700_000_000.5);
    }
}
