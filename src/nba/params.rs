    use core::fmt;
    use std::fmt::Display;
    use chrono::Datelike;

    // New seasons tip off in October.
    const SEASON_START_MONTH: u32 = 10;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PlayerID(pub i64);

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Season {
        S(String)
    }

    pub enum LeagueID {
        NBA,
    }

    pub enum PerMode {
        Totals,
    }

    pub enum SeasonType {
        RegularSeason,
    }

    pub struct IsOnlyCurrentSeason(pub bool);

    impl Season {
        pub fn as_str(&self) -> &str {
            match self {
                Season::S(season) => season
            }
        }

        /// Season that starts in `first_year`, e.g. 2023 -> "2023-24".
        pub fn starting(first_year: i32) -> Self {
            Season::S(format!("{}-{:02}", first_year, (first_year + 1).rem_euclid(100)))
        }

        /// True for strings shaped like "2023-24" where the suffix is the following year.
        pub fn is_plausible(&self) -> bool {
            let s = self.as_str();
            let (first, second) = match s.split_once('-') {
                Some(parts) => parts,
                None => return false,
            };
            let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
            if first.len() != 4 || second.len() != 2 || !all_digits(first) || !all_digits(second) {
                return false;
            }
            match (first.parse::<i32>(), second.parse::<i32>()) {
                (Ok(f), Ok(s)) => (f + 1).rem_euclid(100) == s,
                _ => false,
            }
        }
    }

    impl Display for PlayerID {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "PlayerID={}", self.0)
        }
    }

    impl Display for Season {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                Season::S(season) => write!(f, "Season={}", season)
            }
        }
    }

    impl Display for LeagueID {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                LeagueID::NBA => write!(f, "LeagueID=00")
            }
        }
    }

    impl Display for PerMode {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                PerMode::Totals => write!(f, "PerMode=Totals")
            }
        }
    }

    impl Display for SeasonType {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                SeasonType::RegularSeason => write!(f, "SeasonType=Regular%20Season")
            }
        }
    }

    impl Display for IsOnlyCurrentSeason {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "IsOnlyCurrentSeason={}", if self.0 { 1 } else { 0 })
        }
    }

    impl Default for LeagueID {
        fn default() -> Self { LeagueID::NBA }
    }

    impl Default for Season {
        fn default() -> Self {
            let today = chrono::Utc::now();
            let first_year = if today.month() >= SEASON_START_MONTH {
                today.year()
            } else {
                today.year() - 1
            };
            Season::starting(first_year)
        }
    }

    impl Default for PerMode {
        fn default() -> Self { PerMode::Totals }
    }

    impl Default for SeasonType {
        fn default() -> Self { SeasonType::RegularSeason }
    }

    impl Default for IsOnlyCurrentSeason {
        fn default() -> Self { IsOnlyCurrentSeason(false) }
    }

    impl From<&str> for Season {
        fn from(season: &str) -> Self { Season::S(season.to_string()) }
    }
