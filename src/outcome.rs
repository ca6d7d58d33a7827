use polars::prelude::DataFrame;

/// Result of one call to the stats provider.
///
/// `NotFound` is an ordinary answer (unknown player, season without games).
/// `ProviderError` means the provider could not be asked or answered with
/// something unusable; the cause is kept for the diagnostic.
#[derive(Debug)]
pub enum Outcome<T> {
    Found(T),
    NotFound,
    ProviderError(anyhow::Error),
}

impl<T> Outcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Outcome::Found(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_found(&self) -> Option<&T> {
        match self {
            Outcome::Found(v) => Some(v),
            _ => None,
        }
    }
}

impl Outcome<DataFrame> {
    /// Zero rows counts as nothing found.
    pub fn from_frame(frame: anyhow::Result<DataFrame>) -> Self {
        match frame {
            Ok(df) if df.height() == 0 => Outcome::NotFound,
            Ok(df) => Outcome::Found(df),
            Err(e) => Outcome::ProviderError(e),
        }
    }

    /// Collapses back to a plain table, empty unless something was found.
    pub fn frame_or_empty(self) -> DataFrame {
        self.found().unwrap_or_else(|| DataFrame::new_no_checks(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use polars::prelude::*;

    fn one_row() -> DataFrame {
        DataFrame::new(vec![Series::new("SEASON_ID", vec!["2003-04"])]).unwrap()
    }

    #[test]
    fn frame_outcomes() {
        assert!(Outcome::from_frame(Ok(one_row())).is_found());
        let empty = DataFrame::new(vec![Series::new("SEASON_ID", Vec::<&str>::new())]).unwrap();
        assert!(matches!(Outcome::from_frame(Ok(empty)), Outcome::NotFound));
        assert!(matches!(
            Outcome::from_frame(Err(anyhow!("connection refused"))),
            Outcome::ProviderError(_)
        ));
    }

    #[test]
    fn frame_or_empty_drops_errors() {
        let failed: Outcome<DataFrame> = Outcome::ProviderError(anyhow!("boom"));
        assert_eq!(failed.frame_or_empty().height(), 0);
        assert_eq!(Outcome::Found(one_row()).frame_or_empty().height(), 1);
    }

    #[test]
    fn found_accessors() {
        let hit = Outcome::Found(2544);
        assert_eq!(hit.as_found(), Some(&2544));
        assert_eq!(hit.found(), Some(2544));
        let miss: Outcome<i64> = Outcome::NotFound;
        assert!(!miss.is_found());
        assert_eq!(miss.found(), None);
    }
}
