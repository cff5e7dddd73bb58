use serde::Deserialize;

fn unavailable() -> String {
    String::from("--")
}

/// One schedule entry as returned by the ticket query service.
///
/// Seat counts are kept as the service sends them; values such as `无`
/// or `--` are displayed, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrainRecord {
    pub station_train_code: String,
    pub from_station_name: String,
    pub to_station_name: String,
    pub start_time: String,
    pub arrive_time: String,
    pub lishi: String,
    /// Business class
    #[serde(default = "unavailable")]
    pub swz_num: String,
    /// First class
    #[serde(default = "unavailable")]
    pub zy_num: String,
    /// Second class
    #[serde(default = "unavailable")]
    pub ze_num: String,
    /// Soft sleeper
    #[serde(default = "unavailable")]
    pub rw_num: String,
    /// Hard sleeper
    #[serde(default = "unavailable")]
    pub yw_num: String,
    /// Hard seat
    #[serde(default = "unavailable")]
    pub yz_num: String,
    /// Standing
    #[serde(default = "unavailable")]
    pub wz_num: String,
}

impl TrainRecord {
    /// Category key: the lower-cased first character of the train number.
    pub fn category(&self) -> Option<char> {
        self.station_train_code
            .chars()
            .next()
            .map(|c| c.to_lowercase().next().unwrap_or(c))
    }

    pub fn is_in_service(&self) -> bool {
        self.start_time != self.arrive_time
    }
}
