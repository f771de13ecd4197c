use clap::{Parser, Subcommand};

use panch_batch::BatchExecutor;
use panch_config::Settings;
use panch_ephemeris::Ayanamsa;
use panch_ephemeris::Body;
use panch_orchestrator::{
    compute_horizon, compute_monthly, compute_planetary_timeseries, render_horizon_record, render_month_record,
};
use panch_time::resolve_timezone;

#[derive(Parser)]
#[command(name = "panch", about = "Monthly planetary-event engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute one calendar month's events for a location
    Monthly {
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// IANA timezone name, e.g. Asia/Kolkata
        #[arg(long)]
        tz: String,
        /// First instant of the target month, ISO-8601 (e.g. 2024-03-01 or 2024-03)
        #[arg(long)]
        month: String,
        /// Ayanamsa: lahiri, raman, or tropical (defaults to the configured default)
        #[arg(long)]
        ayanamsa: Option<String>,
    },
    /// Compute ascendant flips and Moon pada transitions over a forward horizon
    Horizon {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        #[arg(long)]
        tz: String,
        /// Local start instant, ISO-8601 (e.g. 2024-03-01T00:00:00)
        #[arg(long)]
        start: String,
        /// Ascendant-flip horizon, in hours
        #[arg(long, default_value_t = 24.0)]
        asc_hours: f64,
        /// Nakshatra/pada horizon, in days
        #[arg(long, default_value_t = 3.0)]
        moon_days: f64,
        #[arg(long)]
        ayanamsa: Option<String>,
    },
    /// Compute several months at once, backed by the two-tier cache
    Batch {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        #[arg(long)]
        tz: String,
        /// Comma-separated list of month-start strings, at most 60
        #[arg(long, value_delimiter = ',')]
        months: Vec<String>,
        #[arg(long)]
        ayanamsa: Option<String>,
    },
    /// Sample a body's longitude at a list of Unix timestamps
    Timeseries {
        /// Body name, e.g. Sun, Moon, Mercury, Rahu
        #[arg(long)]
        body: String,
        /// Comma-separated Unix timestamps
        #[arg(long, value_delimiter = ',')]
        timestamps: Vec<i64>,
        #[arg(long)]
        ayanamsa: Option<String>,
    },
}

fn parse_ayanamsa(token: Option<&str>, default: Ayanamsa) -> Ayanamsa {
    let Some(token) = token else { return default };
    Ayanamsa::from_token(token).unwrap_or_else(|| {
        eprintln!("unknown ayanamsa: {token} (expected lahiri, raman, or tropical)");
        std::process::exit(1);
    })
}

fn resolve_tz_or_exit(tz: &str) -> chrono_tz::Tz {
    resolve_timezone(tz).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

fn parse_body(name: &str) -> Body {
    match name.to_ascii_lowercase().as_str() {
        "sun" => Body::Sun,
        "moon" => Body::Moon,
        "mercury" => Body::Mercury,
        "venus" => Body::Venus,
        "mars" => Body::Mars,
        "jupiter" => Body::Jupiter,
        "saturn" => Body::Saturn,
        "uranus" => Body::Uranus,
        "neptune" => Body::Neptune,
        "pluto" => Body::Pluto,
        "rahu" => Body::Rahu,
        "ketu" => Body::Ketu,
        other => {
            eprintln!("unknown body: {other}");
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = Settings::resolve().unwrap_or_else(|e| {
        eprintln!("config error: {e}");
        std::process::exit(1);
    });

    match cli.command {
        Commands::Monthly { lat, lon, tz, month, ayanamsa } => {
            let ayanamsa = parse_ayanamsa(ayanamsa.as_deref(), settings.default_ayanamsa);
            let local_tz = resolve_tz_or_exit(&tz);
            match compute_monthly(lat, lon, &tz, &month, ayanamsa) {
                Ok(record) => match serde_json::to_string(&render_month_record(&record, local_tz)) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("failed to serialize record: {e}");
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Horizon { lat, lon, tz, start, asc_hours, moon_days, ayanamsa } => {
            let ayanamsa = parse_ayanamsa(ayanamsa.as_deref(), settings.default_ayanamsa);
            let local_tz = resolve_tz_or_exit(&tz);
            match compute_horizon(lat, lon, &tz, &start, asc_hours, moon_days, ayanamsa) {
                Ok(record) => match serde_json::to_string(&render_horizon_record(&record, local_tz)) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("failed to serialize record: {e}");
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Batch { lat, lon, tz, months, ayanamsa } => {
            if months.len() > 60 {
                eprintln!("at most 60 months may be requested in one batch, got {}", months.len());
                std::process::exit(1);
            }
            let ayanamsa = parse_ayanamsa(ayanamsa.as_deref(), settings.default_ayanamsa);
            let local_tz = resolve_tz_or_exit(&tz);

            let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
                eprintln!("failed to start async runtime: {e}");
                std::process::exit(1);
            });

            let results = runtime.block_on(async {
                let pool = match &settings.database_url {
                    Some(url) => panch_cache::persistent::connect(url).await.ok(),
                    None => None,
                };
                if settings.database_url.is_some() && pool.is_none() {
                    eprintln!("warning: DATABASE_URL set but connection failed, degrading to memory-only caching");
                }
                let executor = BatchExecutor::new(settings.cache_ttl_seconds, pool, settings.batch_concurrency);
                executor.compute_months(lat, lon, &tz, &months, ayanamsa).await
            });

            let mut failed = false;
            for month in &months {
                match results.get(month) {
                    Some(Ok(record)) => match serde_json::to_string(&render_month_record(record, local_tz)) {
                        Ok(json) => println!("{month}: {json}"),
                        Err(e) => println!("{month}: serialization error: {e}"),
                    },
                    Some(Err(e)) => {
                        println!("{month}: error: {e}");
                        failed = true;
                    }
                    None => {
                        println!("{month}: no result");
                        failed = true;
                    }
                }
            }
            if failed {
                std::process::exit(1);
            }
        }

        Commands::Timeseries { body, timestamps, ayanamsa } => {
            let body = parse_body(&body);
            let ayanamsa = parse_ayanamsa(ayanamsa.as_deref(), settings.default_ayanamsa);
            let samples = compute_planetary_timeseries(body, ayanamsa, &timestamps);
            match serde_json::to_string(&samples) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("failed to serialize samples: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
