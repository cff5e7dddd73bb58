use chrono::Local;
use clap::{App, Arg, ArgMatches};
use tracing_subscriber::EnvFilter;

use tickets::client::TicketClient;
use tickets::collection::TrainsCollection;
use tickets::config::Config;
use tickets::error::TicketError;
use tickets::query::{QueryOptions, CATEGORIES};
use tickets::terminal::{ColorGuard, Palette};

const CATEGORY_HELP: [(&str, &str); 5] = [
    ("g", "高铁"),
    ("d", "动车"),
    ("t", "特快"),
    ("k", "快速"),
    ("z", "直达"),
];

fn get_args() -> ArgMatches<'static> {
    let mut app = App::new("tickets")
        .version(env!("CARGO_PKG_VERSION"))
        .about("命令行火车票查看器")
        .after_help("Example:\n    tickets 北京 上海 2016-10-10\n    tickets -dg 成都 南京 2016-10-10");

    for &(flag, help) in CATEGORY_HELP.iter() {
        app = app.arg(Arg::with_name(flag).short(flag).help(help));
    }

    app.arg(Arg::with_name("s").short("s").help("查找学生票"))
        .arg(Arg::with_name("from").required(true).index(1).help("始发站"))
        .arg(Arg::with_name("to").required(true).index(2).help("到达站"))
        .arg(Arg::with_name("date").required(true).index(3).help("出发日期 YYYY-MM-DD"))
        .get_matches()
}

fn get_options(matches: &ArgMatches<'_>) -> QueryOptions {
    let categories = CATEGORIES
        .iter()
        .copied()
        .filter(|c| matches.is_present(c.to_string()));

    QueryOptions::new(categories, matches.is_present("s"))
}

fn run(matches: &ArgMatches<'_>, palette: Palette) -> Result<(), TicketError> {
    let config = Config::from_env();
    let stations = config.load_stations()?;
    tracing::debug!(stations = stations.len(), "loaded station table");

    let options = get_options(matches);
    let from = matches.value_of("from").unwrap_or_default();
    let to = matches.value_of("to").unwrap_or_default();
    let date = matches.value_of("date").unwrap_or_default();

    let client = TicketClient::new(&config)?;
    let trains = tickets::query_trains(
        &stations,
        &client,
        from,
        to,
        date,
        Local::now().date_naive(),
        options.student,
    )?;

    TrainsCollection::new(trains, options)
        .with_palette(palette)
        .pretty_print();
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = get_args();
    let colors = ColorGuard::acquire();

    if let Err(e) = run(&matches, colors.palette()) {
        tracing::debug!(error = ?e, "query failed");
        println!("错误：{}", e);
    }
}
