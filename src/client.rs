//! Blocking client for the 12306 ticket query endpoint.

use serde::Deserialize;

use crate::config::Config;
use crate::error::NetworkError;
use crate::query::TicketQuery;
use crate::train::TrainRecord;

/// Source of raw train records for a validated query.
pub trait TrainFetcher {
    fn fetch(&self, query: &TicketQuery) -> Result<Vec<TrainRecord>, NetworkError>;
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    data: QueryData,
}

#[derive(Debug, Default, Deserialize)]
struct QueryData {
    /// Absent when no train runs between the stations.
    #[serde(default)]
    datas: Vec<TrainRecord>,
    #[serde(default)]
    message: Option<String>,
}

pub(crate) fn parse_response(body: &str) -> Result<Vec<TrainRecord>, NetworkError> {
    let response: QueryResponse = serde_json::from_str(body).map_err(|e| NetworkError::Json {
        message: e.to_string(),
    })?;

    if let Some(message) = response.data.message.filter(|m| !m.is_empty()) {
        tracing::warn!(%message, "ticket service message");
    }

    Ok(response.data.datas)
}

#[derive(Debug, Clone)]
pub struct TicketClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl TicketClient {
    pub fn new(config: &Config) -> Result<Self, NetworkError> {
        // The endpoint's certificate chain is not trusted by default stores.
        let http = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }
}

impl TrainFetcher for TicketClient {
    fn fetch(&self, query: &TicketQuery) -> Result<Vec<TrainRecord>, NetworkError> {
        let url = query.url(&self.base_url)?;
        tracing::debug!(%url, "querying tickets");

        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let trains = parse_response(&body)?;
        tracing::info!(count = trains.len(), "received trains");

        Ok(trains)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    use chrono::NaiveDate;

    use super::*;

    fn query() -> TicketQuery {
        TicketQuery {
            purpose: crate::query::PurposeCode::Adult,
            date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            from_code: "BJP".to_string(),
            to_code: "SHH".to_string(),
        }
    }

    /// Client for a local test server; proxy settings from the environment are ignored.
    fn local_client(base_url: String) -> TicketClient {
        TicketClient {
            http: reqwest::blocking::Client::builder().no_proxy().build().unwrap(),
            base_url,
        }
    }

    /// Answers a single request with `response` and hands back the request head.
    fn serve_once(response: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/otn/lcxxcx/query", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (base_url, handle)
    }

    #[test]
    fn error_status_is_reported() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let client = local_client(base_url);

        let err = client.fetch(&query()).unwrap_err();
        assert!(matches!(err, NetworkError::Status { status: 503 }), "{err:?}");

        let request = server.join().unwrap();
        assert!(request.starts_with(
            "GET /otn/lcxxcx/query?purpose_codes=ADULT&queryDate=2030-01-01&from_station=BJP&to_station=SHH "
        ));
    }

    #[test]
    fn successful_fetch_returns_trains() {
        let (base_url, server) = serve_once(concat!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 160\r\nConnection: close\r\n\r\n",
            r#"{"data":{"datas":[{"station_train_code":"G1","from_station_name":"a","to_station_name":"b","start_time":"09:00","arrive_time":"13:48","lishi":"04:48"}]},"ok":1}"#,
        ));
        let client = local_client(base_url);

        let trains = client.fetch(&query()).unwrap();
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].station_train_code, "G1");
        server.join().unwrap();
    }

    #[test]
    fn unreachable_endpoint_is_http_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = local_client(format!("http://127.0.0.1:{port}/query"));

        let err = client.fetch(&query()).unwrap_err();
        assert!(matches!(err, NetworkError::Http(_)), "{err:?}");
    }

    #[test]
    fn invalid_endpoint() {
        let config = Config::default().with_base_url("not a url");
        let client = TicketClient::new(&config).unwrap();
        let err = client.fetch(&query()).unwrap_err();
        assert!(matches!(err, NetworkError::Endpoint { .. }), "{err:?}");
    }

    #[test]
    fn parse_trains() {
        let body = r#"{
            "status": true,
            "httpstatus": 200,
            "data": {
                "datas": [{
                    "station_train_code": "G1",
                    "from_station_name": "北京南",
                    "to_station_name": "上海虹桥",
                    "start_time": "09:00",
                    "arrive_time": "13:48",
                    "lishi": "04:48",
                    "zy_num": "有",
                    "ze_num": "12",
                    "rw_num": "--",
                    "yw_num": "--",
                    "yz_num": "--",
                    "wz_num": "无"
                }],
                "flag": true
            }
        }"#;

        let trains = parse_response(body).unwrap();
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].station_train_code, "G1");
        assert_eq!(trains[0].ze_num, "12");
    }

    #[test]
    fn no_trains_is_empty() {
        let body = r#"{"data": {"flag": false, "message": "没有符合条件的车次"}}"#;
        assert!(parse_response(body).unwrap().is_empty());
    }

    #[test]
    fn malformed_body() {
        for body in ["<html>busy</html>", "{}", r#"{"data": {"datas": [{"lishi": 3}]}}"#] {
            let err = parse_response(body).unwrap_err();
            assert!(matches!(err, NetworkError::Json { .. }), "{body}");
        }
    }

    #[test]
    fn client_builds_from_config() {
        let client = TicketClient::new(&Config::default()).unwrap();
        assert_eq!(client.base_url, crate::config::DEFAULT_BASE_URL);
    }
}
