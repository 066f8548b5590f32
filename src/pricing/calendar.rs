//! Season resolution for calendar dates.

use chrono::NaiveDate;

use super::engine::PricingError;
use super::models::Season;

/// Resolve which season applies to `date`.
///
/// Active seasons may overlap; the highest priority wins. Equal-priority
/// overlaps resolve to the first configured season. A date no active
/// season covers is a setup bug, never a silent zero-price night: the
/// calendar is expected to carry a priority-0 base season spanning all
/// time.
pub fn resolve(seasons: &[Season], date: NaiveDate) -> Result<&Season, PricingError> {
    let mut best: Option<&Season> = None;
    for season in seasons.iter().filter(|s| s.applies_to(date)) {
        match best {
            Some(current) if season.priority <= current.priority => {}
            _ => best = Some(season),
        }
    }
    best.ok_or(PricingError::NoSeasonForDate { date })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use sqlx::types::Json;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn season(name: &str, start: (u32, u32), end: (u32, u32), priority: i32, active: bool) -> Season {
        let mut pitch_rates = HashMap::new();
        pitch_rates.insert("piazzola".to_string(), dec!(10));
        Season {
            id: Uuid::new_v4(),
            name: name.to_string(),
            color: "#2ecc71".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, start.0, start.1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, end.0, end.1).unwrap(),
            priority,
            active,
            pitch_rates: Json(pitch_rates),
            person_rate: Some(dec!(5)),
            child_rate: None,
            dog_rate: None,
            car_rate: None,
        }
    }

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, month, day).unwrap()
    }

    #[test]
    fn test_resolve_single_covering_season() {
        let seasons = vec![season("Bassa", (1, 1), (12, 31), 0, true)];
        assert_eq!(resolve(&seasons, date(7, 15)).unwrap().name, "Bassa");
    }

    #[test]
    fn test_resolve_highest_priority_wins() {
        let seasons = vec![
            season("Bassa", (1, 1), (12, 31), 0, true),
            season("Alta", (6, 1), (8, 31), 5, true),
        ];
        assert_eq!(resolve(&seasons, date(7, 15)).unwrap().name, "Alta");
        assert_eq!(resolve(&seasons, date(5, 15)).unwrap().name, "Bassa");
    }

    #[test]
    fn test_resolve_equal_priority_first_configured_wins() {
        let seasons = vec![
            season("Ferragosto", (8, 1), (8, 20), 5, true),
            season("Alta", (6, 1), (8, 31), 5, true),
        ];
        assert_eq!(resolve(&seasons, date(8, 10)).unwrap().name, "Ferragosto");
    }

    #[test]
    fn test_resolve_skips_inactive_seasons() {
        let seasons = vec![
            season("Bassa", (1, 1), (12, 31), 0, true),
            season("Alta", (6, 1), (8, 31), 5, false),
        ];
        assert_eq!(resolve(&seasons, date(7, 15)).unwrap().name, "Bassa");
    }

    #[test]
    fn test_resolve_range_is_inclusive() {
        let seasons = vec![season("Alta", (6, 1), (8, 31), 5, true)];
        assert!(resolve(&seasons, date(6, 1)).is_ok());
        assert!(resolve(&seasons, date(8, 31)).is_ok());
        assert!(resolve(&seasons, date(9, 1)).is_err());
    }

    #[test]
    fn test_resolve_uncovered_date_is_an_error() {
        let seasons = vec![season("Alta", (6, 1), (8, 31), 5, true)];
        let err = resolve(&seasons, date(3, 1)).unwrap_err();
        assert!(matches!(err, PricingError::NoSeasonForDate { .. }));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let seasons = vec![
            season("Bassa", (1, 1), (12, 31), 0, true),
            season("Media", (5, 1), (9, 30), 3, true),
            season("Alta", (6, 1), (8, 31), 5, true),
        ];
        let first = resolve(&seasons, date(6, 15)).unwrap().id;
        for _ in 0..10 {
            assert_eq!(resolve(&seasons, date(6, 15)).unwrap().id, first);
        }
    }
}
