use crate::config::{RateLimitPolicy, ReportConfig};
use crate::nba::endpoints::{CommonAllPlayers, NBAEndpoint, Player, PlayerCareerStats, PlayerGameLog};
use crate::nba::params::{PlayerID, Season};
use crate::nba::transport::StatsTransport;
use crate::outcome::Outcome;
use polars::prelude::DataFrame;
use std::fmt;
use std::io::Write;
use tabled::Table;

/// Talks to the stats provider and writes progress lines and diagnostics to `out`.
pub struct PlayerStats<'a, W: Write> {
    transport: &'a dyn StatsTransport,
    rate_limit: RateLimitPolicy,
    out: W,
}

impl<'a, W: Write> PlayerStats<'a, W> {
    pub fn new(transport: &'a dyn StatsTransport, rate_limit: RateLimitPolicy, out: W) -> Self {
        PlayerStats { transport, rate_limit, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn say(&mut self, line: fmt::Arguments) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::error!("could not write output: {}", e);
        }
    }

    fn roster(&mut self) -> anyhow::Result<Vec<Player>> {
        let all_players = CommonAllPlayers::new(Default::default(), Default::default());
        let roster = all_players.load_roster(self.transport);
        if let Err(e) = &roster {
            self.say(format_args!("An error occurred while fetching player list: {:#}", e));
        }
        roster
    }

    /// Case-insensitive exact match on the full name; the first roster hit wins.
    pub fn find_player_id(&mut self, full_name: &str) -> Outcome<PlayerID> {
        let wanted = full_name.trim().to_lowercase();
        let players = match self.roster() {
            Ok(players) => players,
            Err(e) => return Outcome::ProviderError(e),
        };
        match players.iter().find(|p| p.full_name.to_lowercase() == wanted) {
            Some(player) => {
                log::debug!("resolved {} to {}", full_name, player.id);
                Outcome::Found(PlayerID(player.id))
            }
            None => {
                self.say(format_args!("Error: Player '{}' not found.", full_name));
                Outcome::NotFound
            }
        }
    }

    /// Every roster entry whose name contains `keyword`, ignoring case.
    pub fn find_players(&mut self, keyword: &str) -> Outcome<Vec<Player>> {
        let wanted = keyword.trim().to_lowercase();
        let players = match self.roster() {
            Ok(players) => players,
            Err(e) => return Outcome::ProviderError(e),
        };
        let matches: Vec<Player> = players.into_iter()
            .filter(|p| p.full_name.to_lowercase().contains(&wanted))
            .collect();
        if matches.is_empty() {
            Outcome::NotFound
        } else {
            Outcome::Found(matches)
        }
    }

    pub fn career_stats(&mut self, player_id: PlayerID) -> Outcome<DataFrame> {
        self.say(format_args!("Fetching career stats..."));
        let career = PlayerCareerStats::new(player_id);
        let outcome = Outcome::from_frame(career.load_primary_frame(self.transport));
        if let Outcome::ProviderError(e) = &outcome {
            self.say(format_args!("An error occurred while fetching career stats: {:#}", e));
        }
        outcome
    }

    pub fn game_logs(&mut self, player_id: PlayerID, season: &Season) -> Outcome<DataFrame> {
        self.say(format_args!("Fetching game logs for the {} season...", season.as_str()));
        if !season.is_plausible() {
            log::warn!("season {:?} does not look like YYYY-YY, sending it anyway", season.as_str());
        }
        self.rate_limit.pause();
        let game_log = PlayerGameLog::new(player_id, season.clone());
        let outcome = Outcome::from_frame(game_log.load_primary_frame(self.transport));
        if let Outcome::ProviderError(e) = &outcome {
            self.say(format_args!("An error occurred while fetching game logs: {:#}", e));
        }
        outcome
    }
}

/// Resolve the player, then print career totals and the season game log.
pub fn run_report<W: Write>(stats: &mut PlayerStats<W>, config: &ReportConfig) {
    let player_name = &config.player_name;
    let player_id = match stats.find_player_id(player_name) {
        Outcome::Found(id) => id,
        _ => return,
    };

    let career = stats.career_stats(player_id);
    if let Some(df) = career.as_found() {
        stats.say(format_args!("\n--- {} Career Statistics ---", player_name));
        stats.say(format_args!("{}", df));
    }

    let season = &config.season;
    let game_log = stats.game_logs(player_id, season);
    if let Some(df) = game_log.as_found() {
        stats.say(format_args!("\n--- {} Game Logs ({} Season) ---", player_name, season.as_str()));
        stats.say(format_args!("{}", df));
    }

    if !career.is_found() && !game_log.is_found() {
        stats.say(format_args!("\nNo data retrieved. Please check the player name and season."));
    }
}

pub fn run_lookup<W: Write>(stats: &mut PlayerStats<W>, keyword: &str) {
    match stats.find_players(keyword) {
        Outcome::Found(players) => {
            let table = Table::new(players).to_string();
            stats.say(format_args!("{}", table));
        }
        Outcome::NotFound => stats.say(format_args!("No players matching '{}'.", keyword)),
        // already reported while loading the roster
        Outcome::ProviderError(_) => {}
    }
}
