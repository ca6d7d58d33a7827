use clap::{Parser, Subcommand};
use std::io;
use std::time::Duration;

use nbaplayerlog::config::{self, RateLimitPolicy, ReportConfig};
use nbaplayerlog::nba::params::Season;
use nbaplayerlog::nba::transport::UreqTransport;
use nbaplayerlog::report::{run_lookup, run_report, PlayerStats};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct NBACli {
    #[clap(subcommand)]
    cmd: Option<Commands>
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Career totals and one season's game log for a player
    Report {
        #[clap(short, long, default_value = config::DEFAULT_PLAYER_NAME)]
        player_name: String,

        #[clap(short, long, default_value = config::DEFAULT_SEASON)]
        season: String,

        /// Pause before the game log request
        #[clap(short, long, default_value_t = config::DEFAULT_DELAY_MS)]
        delay_ms: u64,

        #[clap(short, long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
    /// List roster entries whose name contains a keyword
    Lookup {
        keyword: String,

        #[clap(short, long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
}

fn main() {
    pretty_env_logger::init();
    let args = NBACli::parse();
    let stdout = io::stdout();
    let report_config = match args.cmd {
        None => ReportConfig::default(),
        Some(Commands::Report { player_name, season, delay_ms, timeout_secs }) => ReportConfig {
            player_name,
            season: Season::S(season),
            rate_limit: RateLimitPolicy::from_millis(delay_ms),
            timeout: Duration::from_secs(timeout_secs),
        },
        Some(Commands::Lookup { keyword, timeout_secs }) => {
            let transport = UreqTransport::new(Duration::from_secs(timeout_secs));
            let mut stats = PlayerStats::new(&transport, RateLimitPolicy::none(), stdout.lock());
            run_lookup(&mut stats, &keyword);
            return;
        }
    };
    let transport = UreqTransport::new(report_config.timeout);
    let mut stats = PlayerStats::new(&transport, report_config.rate_limit, stdout.lock());
    run_report(&mut stats, &report_config);
}
