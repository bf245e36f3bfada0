//! 公共常量和辅助函数

use chrono::Utc;

/// Alpha Vantage 查询接口
pub const ALPHA_VANTAGE_QUERY_API: &str = "https://www.alphavantage.co/query";

/// 上游未提供字段时的占位值
pub const NOT_AVAILABLE: &str = "N/A";

/// 当前 Unix 时间（秒，保留微秒精度）
pub fn now_epoch_secs() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// 四舍五入到两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235_000_1), 1.24);
        assert_eq!(round2(-4.996), -5.0);
    }

    #[test]
    fn test_now_epoch_secs_is_recent() {
        let now = now_epoch_secs();
        assert!(now > 1_600_000_000.0);
        assert!((now - Utc::now().timestamp() as f64).abs() < 5.0);
    }
}
