//! Error types for ticket queries.
//!
//! Display strings are the messages shown to the user, so they are in Chinese.

use std::path::PathBuf;

use chrono::NaiveDate;

/// Input rejected before any request is made.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Origin not present in the station table
    #[error("始发站输入错误")]
    UnknownFromStation(String),

    /// Destination not present in the station table
    #[error("到达站输入错误")]
    UnknownToStation(String),

    /// Date is not a `YYYY-MM-DD` calendar date
    #[error("日期输入错误")]
    InvalidDate(String),

    /// Date lies before today
    #[error("无法查询今天之前的车次")]
    PastDate(NaiveDate),
}

/// The query request failed or returned something unusable.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// HTTP request failed (connection, TLS, body read)
    #[error("网络请求失败：{0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("服务器返回错误 {status}")]
    Status { status: u16 },

    /// Body is not the expected JSON envelope
    #[error("无法解析查询结果：{message}")]
    Json { message: String },

    /// Configured endpoint is not a valid URL
    #[error("查询地址无效：{message}")]
    Endpoint { message: String },
}

/// Startup configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("无法读取车站文件 {path}：{source}")]
    StationsFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Any failure of a single `tickets` invocation.
#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages() {
        let err = ValidationError::UnknownFromStation("火星".into());
        assert_eq!(err.to_string(), "始发站输入错误");

        let err = ValidationError::UnknownToStation("火星".into());
        assert_eq!(err.to_string(), "到达站输入错误");

        let date = NaiveDate::from_ymd_opt(2016, 10, 10).unwrap();
        assert_eq!(
            ValidationError::PastDate(date).to_string(),
            "无法查询今天之前的车次"
        );
    }

    #[test]
    fn network_messages() {
        let err = NetworkError::Status { status: 502 };
        assert_eq!(err.to_string(), "服务器返回错误 502");

        let err = NetworkError::Json {
            message: "expected value".into(),
        };
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn umbrella_is_transparent() {
        let err: TicketError = ValidationError::InvalidDate("2016-13-01".into()).into();
        assert_eq!(err.to_string(), "日期输入错误");
        assert!(matches!(err, TicketError::Validation(_)));
    }
}
