mod report;

use happy_hours::{Catalog, Coordinate, FilterCriteria, UnparsableTime, parse_weekday, resolve_tap};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let catalog = match load_catalog(config.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("error: failed to load catalog: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!(venues = catalog.len(), "catalog loaded");

    let results = catalog.filter(&config.criteria);
    let tap = config.tap.map(|coordinate| (coordinate, resolve_tap(coordinate, results.iter().copied())));
    report::print_run(&config.criteria, &results, tap, config.color);
}

struct CliConfig {
    catalog: Option<String>,
    criteria: FilterCriteria,
    tap: Option<Coordinate>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut catalog: Option<String> = None;
    let mut criteria = FilterCriteria::default();
    let mut tap: Option<Coordinate> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, String> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => args.next().ok_or_else(|| format!("error: {name} expects a value")),
            }
        };

        match flag.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("happy-hours {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--strict" => criteria.unparsable = UnparsableTime::Reject,
            "--catalog" | "-c" => {
                if catalog.is_some() {
                    return Err("error: catalog provided multiple times".to_string());
                }
                catalog = Some(value("--catalog")?);
            }
            "--day" | "-d" => {
                let name = value("--day")?;
                let day = parse_weekday(&name).map_err(|err| format!("error: {err}"))?;
                criteria.selected_days.insert_day(day);
            }
            "--start" => criteria.start_time = value("--start")?,
            "--end" => criteria.end_time = value("--end")?,
            "--search" | "-s" => criteria.search_text = value("--search")?,
            "--location" | "-l" => criteria.location_text = value("--location")?,
            "--tap" => tap = Some(parse_coordinate(&value("--tap")?)?),
            _ => return Err(format!("error: unknown option '{arg}'\n\n{}", help_text())),
        }
    }

    Ok(CliConfig { catalog, criteria, tap, color })
}

fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let invalid = || format!("error: invalid --tap '{value}' (expected LAT,LON)");
    let (lat, lon) = value.split_once(',').ok_or_else(invalid)?;
    let latitude = lat.trim().parse::<f64>().map_err(|_| invalid())?;
    let longitude = lon.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok(Coordinate::new(latitude, longitude))
}

fn load_catalog(path: Option<&str>) -> happy_hours::Result<Catalog> {
    match path {
        Some("-") | None => Catalog::from_reader(io::stdin().lock()),
        Some(path) => Catalog::from_reader(BufReader::new(File::open(path)?)),
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "happy-hours {version}

Filter a venue catalog by day, time window, name and address.

Usage:
  happy-hours [OPTIONS] --catalog <file.json>
  happy-hours [OPTIONS] < file.json

Options:
  -c, --catalog <path>       Catalog JSON (array of venues). Reads stdin when
                             omitted or '-'.
  -d, --day <weekday>        Restrict to a weekday. Repeatable. Default: all days.
  --start <time>             Window start, e.g. \"4 PM\". Default: {start}
  --end <time>               Window end, e.g. \"8:30 PM\". Default: {end}
  -s, --search <text>        Venue name contains <text> (case-insensitive).
  -l, --location <text>      Address contains <text> (case-insensitive).
  --strict                   Unparsable times never match (default: read as 12 AM).
  --tap <lat,lon>            Resolve a map tap against the results.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter (default: warn).

Exit codes:
  0  Success.
  1  Catalog could not be read or decoded.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        start = happy_hours::DEFAULT_START_TIME,
        end = happy_hours::DEFAULT_END_TIME,
    )
}
