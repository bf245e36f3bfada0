//! 模拟行情数据
//!
//! 上游不可用或返回空数据时的兜底来源，仅用于演示，随机数不要求可复现

use rand::Rng;

use crate::models::{Quote, SearchResult};

use super::common::{now_epoch_secs, round2};

/// 已知代码的固定基准价
const BASE_PRICES: &[(&str, f64)] = &[
    ("AAPL", 185.40),
    ("MSFT", 420.30),
    ("GOOGL", 165.50),
    ("AMZN", 178.75),
    ("META", 475.25),
    ("TSLA", 190.15),
    ("NVDA", 950.80),
    ("JPM", 198.45),
];

/// 模拟搜索的候选股票 (代码, 名称)
const SEARCH_ROSTER: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc."),
    ("AMZN", "Amazon.com Inc."),
    ("META", "Meta Platforms, Inc."),
    ("TSLA", "Tesla, Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("JPM", "JPMorgan Chase & Co."),
];

const RANDOM_BASE_MIN: f64 = 50.0;
const RANDOM_BASE_MAX: f64 = 500.0;
const MAX_DELTA: f64 = 5.0;

/// 模拟数据生成器
#[derive(Debug, Default, Clone, Copy)]
pub struct MockDataGenerator;

impl MockDataGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 已知代码的基准价
    pub fn base_price(symbol: &str) -> Option<f64> {
        BASE_PRICES
            .iter()
            .find(|(known, _)| *known == symbol)
            .map(|(_, price)| *price)
    }

    /// 生成一条模拟报价
    ///
    /// 已知代码使用固定基准价，其余代码在 [50, 500] 内随机取基准价；
    /// 在此基础上叠加 [-5, 5] 的随机涨跌额
    pub fn quote(&self, symbol: &str) -> Quote {
        let mut rng = rand::rng();
        let base = Self::base_price(symbol)
            .unwrap_or_else(|| rng.random_range(RANDOM_BASE_MIN..=RANDOM_BASE_MAX));

        let change = round2(rng.random_range(-MAX_DELTA..=MAX_DELTA));
        let price = round2(base + change);
        let percent_change = round2(change / base * 100.0);

        Quote {
            symbol: symbol.to_string(),
            price: format_number(price),
            change: format_number(change),
            percent_change: format!("{}%", format_number(percent_change)),
            timestamp: now_epoch_secs(),
        }
    }

    /// 模拟代码搜索：按代码或名称做不区分大小写的子串匹配
    pub fn search_results(&self, keyword: &str) -> Vec<SearchResult> {
        let keyword = keyword.to_lowercase();

        SEARCH_ROSTER
            .iter()
            .filter(|(symbol, name)| {
                symbol.to_lowercase().contains(&keyword) || name.to_lowercase().contains(&keyword)
            })
            .map(|(symbol, name)| SearchResult {
                symbol: symbol.to_string(),
                name: name.to_string(),
                kind: "Equity".to_string(),
                region: "United States".to_string(),
            })
            .collect()
    }
}

/// 以最短形式输出数值，整数保留一位小数（185.4、-0.5、190.0）
fn format_number(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: &str) -> f64 {
        value.trim_end_matches('%').parse().unwrap()
    }

    #[test]
    fn test_known_symbol_uses_fixed_base() {
        let mock = MockDataGenerator::new();

        for _ in 0..200 {
            let quote = mock.quote("AAPL");
            let price = parse(&quote.price);
            assert!((180.40..=190.40).contains(&price), "price {} out of range", price);
            assert_eq!(quote.symbol, "AAPL");
        }
    }

    #[test]
    fn test_unknown_symbol_uses_random_base() {
        let mock = MockDataGenerator::new();

        for _ in 0..200 {
            let price = parse(&mock.quote("ZZZZ").price);
            assert!((45.0..=505.0).contains(&price), "price {} out of range", price);
        }
    }

    #[test]
    fn test_quote_fields_are_consistent() {
        let mock = MockDataGenerator::new();
        let quote = mock.quote("MSFT");

        let price = parse(&quote.price);
        let change = parse(&quote.change);
        let percent = parse(&quote.percent_change);

        assert!(quote.percent_change.ends_with('%'));
        assert!(change.abs() <= 5.0);
        assert!((price - (420.30 + change)).abs() < 0.011);
        assert!((percent - change / 420.30 * 100.0).abs() < 0.011);
    }

    #[test]
    fn test_format_number_is_shortest() {
        assert_eq!(format_number(185.4), "185.4");
        assert_eq!(format_number(round2(0.5)), "0.5");
        assert_eq!(format_number(-1.23), "-1.23");
        assert_eq!(format_number(190.0), "190.0");
        assert_eq!(format_number(-0.0), "-0.0");
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let results = MockDataGenerator::new().search_results("apple");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].symbol, "AAPL");
        assert_eq!(results[0].name, "Apple Inc.");
        assert_eq!(results[0].kind, "Equity");
        assert_eq!(results[0].region, "United States");
    }

    #[test]
    fn test_search_matches_symbol_or_name() {
        let mock = MockDataGenerator::new();

        let symbols: Vec<String> = mock
            .search_results("CORP")
            .into_iter()
            .map(|r| r.symbol)
            .collect();
        assert_eq!(symbols, vec!["MSFT", "NVDA"]);

        let by_symbol = mock.search_results("tsla");
        assert_eq!(by_symbol.len(), 1);
        assert_eq!(by_symbol[0].name, "Tesla, Inc.");

        assert!(mock.search_results("no-such-company").is_empty());
    }
}
