use crate::nba::frames::{primary_frame, primary_result_set, ResultSet};
use crate::nba::params::*;
use crate::nba::transport::StatsTransport;
use polars::prelude::DataFrame;
use serde_json::Value;
use tabled::Tabled;
use anyhow::{Context, Result};

const NBA_BASE_URL: &str = "https://stats.nba.com/stats";
static NULL_CELL: Value = Value::Null;

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct Player {
    pub id: i64,
    pub full_name: String,
    pub from_year: String,
    pub to_year: String,
    pub is_active: bool,
}

pub struct CommonAllPlayers {
    pub league_id: LeagueID,
    pub season: Season,
    pub only_current: IsOnlyCurrentSeason,
}

pub struct PlayerCareerStats {
    pub player_id: PlayerID,
    pub per_mode: PerMode,
    pub league_id: LeagueID,
}

pub struct PlayerGameLog {
    pub player_id: PlayerID,
    pub season: Season,
    pub season_type: SeasonType,
    pub league_id: LeagueID,
}

pub trait NBAEndpoint {
    fn endpoint_url(&self) -> String;

    fn send_request(&self, transport: &dyn StatsTransport) -> Result<Value> {
        transport.fetch_json(&self.endpoint_url())
    }

    /// Requests the endpoint and returns its first result set as a dataframe.
    fn load_primary_frame(&self, transport: &dyn StatsTransport) -> Result<DataFrame> {
        let endpoint_json = self.send_request(transport)?;
        primary_frame(&endpoint_json)
    }
}

impl CommonAllPlayers {
    pub fn new(league_id: LeagueID, season: Season) -> Self {
        CommonAllPlayers { league_id, season, only_current: Default::default() }
    }

    pub fn load_roster(&self, transport: &dyn StatsTransport) -> Result<Vec<Player>> {
        let endpoint_json = self.send_request(transport)?;
        let roster_set = primary_result_set(&endpoint_json)?;
        players_from_result_set(&roster_set)
    }
}

impl PlayerCareerStats {
    pub fn new(player_id: PlayerID) -> Self {
        PlayerCareerStats { player_id, per_mode: Default::default(), league_id: Default::default() }
    }
}

impl PlayerGameLog {
    pub fn new(player_id: PlayerID, season: Season) -> Self {
        PlayerGameLog {
            player_id,
            season,
            season_type: Default::default(),
            league_id: Default::default(),
        }
    }
}

impl NBAEndpoint for CommonAllPlayers {
    fn endpoint_url(&self) -> String {
        format!("{}/commonallplayers?{}&{}&{}", NBA_BASE_URL, self.league_id, self.season, self.only_current)
    }
}

impl NBAEndpoint for PlayerCareerStats {
    fn endpoint_url(&self) -> String {
        format!("{}/playercareerstats?{}&{}&{}", NBA_BASE_URL, self.player_id, self.per_mode, self.league_id)
    }
}

impl NBAEndpoint for PlayerGameLog {
    fn endpoint_url(&self) -> String {
        format!("{}/playergamelog?{}&{}&{}&{}", NBA_BASE_URL, self.player_id, self.season, self.season_type, self.league_id)
    }
}

fn players_from_result_set(roster_set: &ResultSet) -> Result<Vec<Player>> {
    let id_col = roster_set.column_index("PERSON_ID")?;
    let name_col = roster_set.column_index("DISPLAY_FIRST_LAST")?;
    let from_col = roster_set.column_index("FROM_YEAR")?;
    let to_col = roster_set.column_index("TO_YEAR")?;
    let status_col = roster_set.column_index("ROSTERSTATUS")?;
    let mut players = Vec::with_capacity(roster_set.row_set.len());
    for (pos, row) in roster_set.row_set.iter().enumerate() {
        let cell = |col: usize| row.get(col).unwrap_or(&NULL_CELL);
        let id = cell(id_col).as_i64()
            .with_context(|| format!("roster row {} has no PERSON_ID", pos))?;
        players.push(Player {
            id,
            full_name: cell(name_col).as_str().unwrap_or("").to_string(),
            from_year: year_text(cell(from_col)),
            to_year: year_text(cell(to_col)),
            is_active: cell(status_col).as_i64().unwrap_or(0) == 1,
        });
    }
    Ok(players)
}

// FROM_YEAR/TO_YEAR come back as strings, but older payloads used numbers.
fn year_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
