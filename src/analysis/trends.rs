use crate::entities::health_checkin;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Trend {
    pub direction: Direction,
    pub delta: i32,
}

impl Trend {
    pub fn flat() -> Self {
        Trend {
            direction: Direction::Flat,
            delta: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckinMetric {
    Mood,
    Energy,
    Sleep,
}

fn metric_value(checkin: &health_checkin::Model, metric: CheckinMetric) -> i32 {
    match metric {
        CheckinMetric::Mood => checkin.mood,
        CheckinMetric::Energy => checkin.energy_level,
        CheckinMetric::Sleep => checkin.sleep_quality,
    }
}

/// Compares the two most recent check-ins by date. Fewer than two check-ins
/// always yields a flat trend, regardless of the single value. No smoothing.
pub fn reduce_trend(checkins: &[health_checkin::Model], metric: CheckinMetric) -> Trend {
    let mut sorted: Vec<&health_checkin::Model> = checkins.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    if sorted.len() < 2 {
        return Trend::flat();
    }

    let delta = metric_value(sorted[0], metric) - metric_value(sorted[1], metric);
    let direction = match delta {
        d if d > 0 => Direction::Up,
        d if d < 0 => Direction::Down,
        _ => Direction::Flat,
    };
    Trend { direction, delta }
}

/// One chart point per check-in day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DayPoint {
    pub date: NaiveDate,
    pub mood: i32,
    pub energy_level: i32,
    pub sleep_quality: i32,
}

/// Per-day series for the trend chart, ascending by date, capped to the last
/// seven days present in the input.
pub fn daily_series(checkins: &[health_checkin::Model]) -> Vec<DayPoint> {
    let mut sorted: Vec<&health_checkin::Model> = checkins.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let skip = sorted.len().saturating_sub(7);
    sorted
        .into_iter()
        .skip(skip)
        .map(|c| DayPoint {
            date: c.date,
            mood: c.mood,
            energy_level: c.energy_level,
            sleep_quality: c.sleep_quality,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkin(id: i32, date: &str, mood: i32, energy: i32, sleep: i32) -> health_checkin::Model {
        health_checkin::Model {
            id,
            user_id: 1,
            date: date.parse().unwrap(),
            mood,
            energy_level: energy,
            sleep_quality: sleep,
            symptoms: None,
            notes: None,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    #[test]
    fn single_checkin_is_always_flat() {
        let checkins = vec![checkin(1, "2026-08-01", 9, 2, 5)];
        for metric in [CheckinMetric::Mood, CheckinMetric::Energy, CheckinMetric::Sleep] {
            assert_eq!(reduce_trend(&checkins, metric), Trend::flat());
        }
    }

    #[test]
    fn empty_input_is_flat() {
        assert_eq!(reduce_trend(&[], CheckinMetric::Mood), Trend::flat());
    }

    #[test]
    fn compares_two_most_recent_by_date_not_input_order() {
        // Deliberately unsorted input
        let checkins = vec![
            checkin(1, "2026-08-03", 6, 5, 5),
            checkin(2, "2026-08-01", 9, 5, 5),
            checkin(3, "2026-08-02", 4, 5, 5),
        ];
        let trend = reduce_trend(&checkins, CheckinMetric::Mood);
        // latest (6) vs previous (4)
        assert_eq!(trend.direction, Direction::Up);
        assert_eq!(trend.delta, 2);
    }

    #[test]
    fn downward_and_flat_deltas() {
        let checkins = vec![
            checkin(1, "2026-08-01", 8, 7, 6),
            checkin(2, "2026-08-02", 5, 7, 9),
        ];
        assert_eq!(
            reduce_trend(&checkins, CheckinMetric::Mood),
            Trend { direction: Direction::Down, delta: -3 }
        );
        assert_eq!(reduce_trend(&checkins, CheckinMetric::Energy), Trend::flat());
        assert_eq!(
            reduce_trend(&checkins, CheckinMetric::Sleep),
            Trend { direction: Direction::Up, delta: 3 }
        );
    }

    #[test]
    fn series_is_ascending_and_capped_to_seven() {
        let mut checkins = Vec::new();
        for day in 1..=9 {
            checkins.push(checkin(day, &format!("2026-08-0{}", day), day, day, day));
        }
        // Shuffle a little
        checkins.swap(0, 8);

        let series = daily_series(&checkins);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, "2026-08-03".parse().unwrap());
        assert_eq!(series[6].date, "2026-08-09".parse().unwrap());
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }
}
