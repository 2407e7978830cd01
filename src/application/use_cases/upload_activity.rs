// ============================================================
// UPLOAD ACTIVITY
// ============================================================
// Per-owner upload counters derived from stored records

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::domain::upload::{DailyUploadCount, UploadRecord, UploadStats};

/// Days covered by the per-day histogram, including today
pub const ACTIVITY_WINDOW_DAYS: i64 = 7;

/// Totals for today (UTC) and the current ISO week
pub fn upload_stats(records: &[UploadRecord], now: DateTime<Utc>) -> UploadStats {
    let today = now.date_naive();
    let week_start = start_of_iso_week(today);

    UploadStats {
        total_files: records.len(),
        today_files: records
            .iter()
            .filter(|r| r.created_at.date_naive() >= today)
            .count(),
        this_week_files: records
            .iter()
            .filter(|r| r.created_at.date_naive() >= week_start)
            .count(),
    }
}

/// Upload counts per day for the last week, ascending by date.
///
/// Days without uploads are omitted.
pub fn uploads_per_day(records: &[UploadRecord], now: DateTime<Utc>) -> Vec<DailyUploadCount> {
    let since = now.date_naive() - Duration::days(ACTIVITY_WINDOW_DAYS - 1);

    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        let day = record.created_at.date_naive();
        if day >= since {
            *per_day.entry(day).or_insert(0) += 1;
        }
    }

    per_day
        .into_iter()
        .map(|(date, count)| DailyUploadCount { date, count })
        .collect()
}

fn start_of_iso_week(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::dataset_profiler::build_profile;
    use crate::domain::dataset::Row;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn record_at(created_at: DateTime<Utc>) -> UploadRecord {
        UploadRecord {
            id: Uuid::new_v4(),
            filename: "f.csv".to_string(),
            uploaded_by: Some("u1".to_string()),
            profile: build_profile(&[Row::new().with("a", 1i64)]).unwrap(),
            created_at,
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_upload_stats() {
        // 2026-10-15 is a Thursday; its ISO week starts Monday 2026-10-12
        let now = at(2026, 10, 15, 18);
        let records = vec![
            record_at(at(2026, 10, 15, 1)),
            record_at(at(2026, 10, 14, 9)),
            record_at(at(2026, 10, 12, 0)),
            record_at(at(2026, 10, 11, 23)),
        ];

        let stats = upload_stats(&records, now);
        assert_eq!(
            stats,
            UploadStats {
                total_files: 4,
                today_files: 1,
                this_week_files: 3,
            }
        );
    }

    #[test]
    fn test_uploads_per_day() {
        let now = at(2026, 10, 15, 18);
        let records = vec![
            record_at(at(2026, 10, 15, 1)),
            record_at(at(2026, 10, 15, 2)),
            record_at(at(2026, 10, 9, 12)),
            record_at(at(2026, 10, 8, 12)),
        ];

        let days = uploads_per_day(&records, now);
        assert_eq!(
            days,
            vec![
                DailyUploadCount {
                    date: NaiveDate::from_ymd_opt(2026, 10, 9).unwrap(),
                    count: 1,
                },
                DailyUploadCount {
                    date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
                    count: 2,
                },
            ]
        );
    }
}
