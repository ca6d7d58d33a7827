//! Look up an NBA player on stats.nba.com and print their career totals and
//! one season's game log.

pub mod config;
pub mod nba;
pub mod outcome;
pub mod report;
