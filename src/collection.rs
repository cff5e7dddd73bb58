//! Filtering and table rendering of queried trains.

use prettytable::{Row, Table};

use crate::duration;
use crate::query::QueryOptions;
use crate::terminal::Palette;
use crate::train::TrainRecord;

pub const HEADER: [&str; 10] = [
    "车次", "车站", "时间", "历时", "一等", "二等", "软卧", "硬卧", "硬座", "无座",
];

/// One display row, in `HEADER` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainRow {
    pub train_no: String,
    /// Origin and destination, one per line.
    pub stations: String,
    /// Departure and arrival, one per line.
    pub times: String,
    pub duration: String,
    pub first_class: String,
    pub second_class: String,
    pub soft_sleeper: String,
    pub hard_sleeper: String,
    pub hard_seat: String,
    pub standing: String,
}

impl TrainRow {
    fn project(train: &TrainRecord, palette: Palette) -> Self {
        Self {
            train_no: train.station_train_code.clone(),
            stations: [
                palette.departure(&train.from_station_name),
                palette.arrival(&train.to_station_name),
            ]
            .join("\n"),
            times: [
                palette.departure(&train.start_time),
                palette.arrival(&train.arrive_time),
            ]
            .join("\n"),
            duration: duration::normalize(&train.lishi, &train.start_time, &train.arrive_time),
            first_class: train.zy_num.clone(),
            second_class: train.ze_num.clone(),
            soft_sleeper: train.rw_num.clone(),
            hard_sleeper: train.yw_num.clone(),
            hard_seat: train.yz_num.clone(),
            standing: train.wz_num.clone(),
        }
    }

    pub fn cells(&self) -> [&str; 10] {
        [
            &self.train_no,
            &self.stations,
            &self.times,
            &self.duration,
            &self.first_class,
            &self.second_class,
            &self.soft_sleeper,
            &self.hard_sleeper,
            &self.hard_seat,
            &self.standing,
        ]
    }
}

/// Trains returned for one query, together with the active filters.
/// Cells are uncolored unless a palette is given.
pub struct TrainsCollection {
    trains: Vec<TrainRecord>,
    options: QueryOptions,
    palette: Palette,
}

impl TrainsCollection {
    pub fn new(trains: Vec<TrainRecord>, options: QueryOptions) -> Self {
        Self {
            trains,
            options,
            palette: Palette::plain(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Rows for the trains whose category passes the filters, in response order.
    pub fn rows(&self) -> impl Iterator<Item = TrainRow> + '_ {
        self.trains
            .iter()
            .filter(move |train| self.options.accepts(train.category()))
            .map(move |train| TrainRow::project(train, self.palette))
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_titles(Row::from(HEADER));
        for row in self.rows() {
            table.add_row(Row::from(row.cells()));
        }
        table
    }

    pub fn pretty_print(&self) {
        self.table().printstd();
    }
}

#[cfg(test)]
pub(crate) fn train(code: &str, start: &str, arrive: &str, lishi: &str) -> TrainRecord {
    TrainRecord {
        station_train_code: code.to_string(),
        from_station_name: "北京".to_string(),
        to_station_name: "上海".to_string(),
        start_time: start.to_string(),
        arrive_time: arrive.to_string(),
        lishi: lishi.to_string(),
        swz_num: "--".to_string(),
        zy_num: "有".to_string(),
        ze_num: "20".to_string(),
        rw_num: "--".to_string(),
        yw_num: "--".to_string(),
        yz_num: "无".to_string(),
        wz_num: "无".to_string(),
    }
}
