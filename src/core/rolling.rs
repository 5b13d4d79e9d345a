use crate::core::history::HistoryRecord;
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Trailing window the suggestion engine averages over.
pub const DEFAULT_WINDOW_MINUTES: i64 = 5;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RollingPoint {
    pub timestamp: NaiveDateTime,
    pub avg_cpu: f64,
    pub avg_gpu: f64,
    pub avg_mem: f64,
}

pub fn default_window() -> TimeDelta {
    TimeDelta::minutes(DEFAULT_WINDOW_MINUTES)
}

/// Time-windowed moving average over `history`, one point per record.
///
/// The window ending at a record's timestamp `t` covers `(t - window, t]`, so
/// every point includes at least its own record. Records are ordered by
/// timestamp first; equal timestamps keep their input order.
pub fn rolling_average(history: &[HistoryRecord], window: TimeDelta) -> Vec<RollingPoint> {
    let mut records: Vec<&HistoryRecord> = history.iter().collect();
    records.sort_by_key(|r| r.timestamp);

    let mut points = Vec::with_capacity(records.len());
    let mut start = 0;
    for (end, record) in records.iter().enumerate() {
        // None: the window reaches back past the start of the series
        if let Some(cutoff) = record.timestamp.checked_sub_signed(window) {
            while start < end && records[start].timestamp <= cutoff {
                start += 1;
            }
        }
        let span = &records[start..=end];
        let n = span.len() as f64;
        let (cpu, gpu, mem) = span.iter().fold((0.0, 0.0, 0.0), |(c, g, m), r| {
            (c + r.actual_cpu, g + r.actual_gpu, m + r.actual_mem)
        });
        points.push(RollingPoint {
            timestamp: record.timestamp,
            avg_cpu: cpu / n,
            avg_gpu: gpu / n,
            avg_mem: mem / n,
        });
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::UsageHistory;

    fn record(ts: &str, cpu: f64, gpu: f64, mem: f64) -> HistoryRecord {
        HistoryRecord::parse(ts, 1, cpu, gpu, mem, 10).unwrap()
    }

    #[test]
    fn test_empty_history() {
        assert!(rolling_average(&[], default_window()).is_empty());
    }

    #[test]
    fn test_gap_larger_than_window_keeps_points_independent() {
        let history = vec![
            record("2025-03-05 10:00", 82.0, 90.0, 65.0),
            record("2025-03-05 11:00", 38.0, 12.0, 28.0),
        ];
        let points = rolling_average(&history, default_window());
        assert_eq!(points.len(), 2);
        assert_eq!(
            (points[0].avg_cpu, points[0].avg_gpu, points[0].avg_mem),
            (82.0, 90.0, 65.0)
        );
        assert_eq!(
            (points[1].avg_cpu, points[1].avg_gpu, points[1].avg_mem),
            (38.0, 12.0, 28.0)
        );
    }

    #[test]
    fn test_records_inside_window_are_averaged() {
        let history = vec![
            record("2025-03-05 10:00", 10.0, 20.0, 30.0),
            record("2025-03-05 10:02", 30.0, 40.0, 50.0),
            record("2025-03-05 10:04", 50.0, 60.0, 70.0),
        ];
        let points = rolling_average(&history, default_window());
        assert_eq!(points[1].avg_cpu, 20.0);
        assert_eq!(points[2].avg_cpu, 30.0);
        assert_eq!(points[2].avg_gpu, 40.0);
        assert_eq!(points[2].avg_mem, 50.0);
    }

    #[test]
    fn test_window_start_is_exclusive() {
        let history = vec![
            record("2025-03-05 10:00", 10.0, 10.0, 10.0),
            record("2025-03-05 10:05", 30.0, 30.0, 30.0),
        ];
        let points = rolling_average(&history, default_window());
        // 10:00 falls exactly on the open edge of (10:00, 10:05]
        assert_eq!(points[1].avg_cpu, 30.0);

        let history = vec![
            record("2025-03-05 10:00", 10.0, 10.0, 10.0),
            record("2025-03-05 10:04", 30.0, 30.0, 30.0),
        ];
        let points = rolling_average(&history, default_window());
        assert_eq!(points[1].avg_cpu, 20.0);
    }

    #[test]
    fn test_unsorted_input_is_ordered() {
        let history = vec![
            record("2025-03-05 10:03", 30.0, 30.0, 30.0),
            record("2025-03-05 10:00", 10.0, 10.0, 10.0),
        ];
        let points = rolling_average(&history, default_window());
        assert!(points[0].timestamp < points[1].timestamp);
        assert_eq!(points[0].avg_cpu, 10.0);
        assert_eq!(points[1].avg_cpu, 20.0);
    }

    #[test]
    fn test_window_near_earliest_timestamp() {
        let earliest = NaiveDateTime::MIN;
        let history: Vec<HistoryRecord> = [(0, 10.0), (1, 30.0)]
            .into_iter()
            .map(|(minutes, cpu)| HistoryRecord {
                timestamp: earliest + TimeDelta::minutes(minutes),
                task_id: 1,
                actual_cpu: cpu,
                actual_gpu: 0.0,
                actual_mem: 0.0,
                duration_minutes: 1,
            })
            .collect();
        let points = rolling_average(&history, default_window());
        assert_eq!(points[0].avg_cpu, 10.0);
        assert_eq!(points[1].avg_cpu, 20.0);
    }

    #[test]
    fn test_builtin_history_last_point() {
        let history = UsageHistory::builtin().unwrap();
        let points = rolling_average(history.records(), default_window());
        let last = points.last().unwrap();
        assert_eq!((last.avg_cpu, last.avg_gpu, last.avg_mem), (38.0, 12.0, 28.0));
    }

    mod proptests {
        use super::*;
        use chrono::NaiveDate;
        use proptest::prelude::*;

        fn arb_history() -> impl Strategy<Value = Vec<HistoryRecord>> {
            prop::collection::vec(
                (0i64..600, 0.0f64..=100.0, 0.0f64..=100.0, 0.0f64..=100.0),
                0..40,
            )
            .prop_map(|rows| {
                let base = NaiveDate::from_ymd_opt(2025, 3, 5)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap();
                rows.into_iter()
                    .map(|(minute, cpu, gpu, mem)| HistoryRecord {
                        timestamp: base + TimeDelta::minutes(minute),
                        task_id: 1,
                        actual_cpu: cpu,
                        actual_gpu: gpu,
                        actual_mem: mem,
                        duration_minutes: 1,
                    })
                    .collect()
            })
        }

        proptest! {
            /// Property: one point per record, in timestamp order
            #[test]
            fn prop_length_and_order(history in arb_history(), window in 1i64..120) {
                let points = rolling_average(&history, TimeDelta::minutes(window));
                prop_assert_eq!(points.len(), history.len());
                prop_assert!(points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
            }

            /// Property: every average stays within the range of the input values
            #[test]
            fn prop_average_within_bounds(history in arb_history(), window in 1i64..120) {
                let points = rolling_average(&history, TimeDelta::minutes(window));
                let eps = 1e-9;
                let (lo, hi) = history.iter().fold((f64::MAX, f64::MIN), |(lo, hi), r| {
                    (lo.min(r.actual_cpu), hi.max(r.actual_cpu))
                });
                for p in &points {
                    prop_assert!(p.avg_cpu >= lo - eps && p.avg_cpu <= hi + eps);
                }
            }
        }
    }
}
