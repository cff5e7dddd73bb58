//! Command-line train ticket viewer for the 12306 service.
//!
//! Resolves station names, validates the travel date, fetches remaining
//! tickets and prints them as a colored table.

pub mod client;
pub mod collection;
pub mod config;
pub mod duration;
pub mod error;
pub mod query;
pub mod stations;
pub mod terminal;
pub mod train;

use chrono::NaiveDate;

use client::TrainFetcher;
use error::TicketError;
use query::TicketQuery;
use stations::StationLookup;
use train::TrainRecord;

/// Validate the request and fetch its trains. Nothing is fetched when
/// validation fails.
pub fn query_trains(
    stations: &impl StationLookup,
    fetcher: &impl TrainFetcher,
    from: &str,
    to: &str,
    date: &str,
    today: NaiveDate,
    student: bool,
) -> Result<Vec<TrainRecord>, TicketError> {
    let query = TicketQuery::new(stations, from, to, date, today, student)?;
    Ok(fetcher.fetch(&query)?)
}
