// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DonationRecord, DonationStatus, DonorStats, add_months, compute_donor_stats, next_upcoming,
    sample_history, sort_newest_first,
};
use time::Date;
use time::macros::date;

fn create_record(id: &str, date: Date, status: DonationStatus) -> DonationRecord {
    DonationRecord {
        id: String::from(id),
        date,
        location: String::from("Central Blood Bank"),
        amount_ml: 450,
        status,
    }
}

#[test]
fn test_add_months_moves_calendar_months() {
    assert_eq!(
        add_months(date!(2024 - 02 - 15), 3),
        Some(date!(2024 - 05 - 15))
    );
    assert_eq!(
        add_months(date!(2024 - 11 - 15), 3),
        Some(date!(2025 - 02 - 15))
    );
    assert_eq!(
        add_months(date!(2024 - 02 - 15), -4),
        Some(date!(2023 - 10 - 15))
    );
}

#[test]
fn test_add_months_clamps_to_month_end() {
    assert_eq!(
        add_months(date!(2024 - 11 - 30), 3),
        Some(date!(2025 - 02 - 28))
    );
    assert_eq!(
        add_months(date!(2023 - 11 - 30), 3),
        Some(date!(2024 - 02 - 29))
    );
    assert_eq!(
        add_months(date!(2024 - 05 - 31), 1),
        Some(date!(2024 - 06 - 30))
    );
}

#[test]
fn test_add_months_out_of_range_is_none() {
    assert_eq!(add_months(date!(2024 - 05 - 01), i32::MAX), None);
    assert_eq!(add_months(date!(2024 - 05 - 01), i32::MIN), None);
    assert_eq!(add_months(Date::MAX, 1), None);
}

#[test]
fn test_compute_donor_stats_counts_completed_only() {
    let records: Vec<DonationRecord> = vec![
        create_record("a", date!(2024 - 01 - 10), DonationStatus::Completed),
        create_record("b", date!(2024 - 03 - 05), DonationStatus::Completed),
        create_record("c", date!(2024 - 04 - 01), DonationStatus::Cancelled),
        create_record("d", date!(2024 - 06 - 01), DonationStatus::Scheduled),
    ];

    let stats: DonorStats = compute_donor_stats(&records);
    assert_eq!(stats.total_donations, 2);
    assert_eq!(stats.lives_impacted, 6);
    assert_eq!(stats.last_donation, Some(date!(2024 - 03 - 05)));
    assert_eq!(stats.next_eligible, Some(date!(2024 - 06 - 05)));
    assert!(!stats.is_eligible_on(date!(2024 - 06 - 04)));
    assert!(stats.is_eligible_on(date!(2024 - 06 - 05)));
}

#[test]
fn test_compute_donor_stats_without_donations_is_eligible() {
    let stats: DonorStats = compute_donor_stats(&[]);
    assert_eq!(stats.total_donations, 0);
    assert_eq!(stats.last_donation, None);
    assert_eq!(stats.next_eligible, None);
    assert!(stats.is_eligible_on(date!(2024 - 01 - 01)));
}

#[test]
fn test_next_upcoming_picks_earliest_future_scheduled() {
    let records: Vec<DonationRecord> = vec![
        create_record("late", date!(2024 - 06 - 20), DonationStatus::Scheduled),
        create_record("past", date!(2024 - 04 - 20), DonationStatus::Scheduled),
        create_record("soon", date!(2024 - 05 - 08), DonationStatus::Scheduled),
        create_record("done", date!(2024 - 05 - 02), DonationStatus::Completed),
    ];

    let upcoming: Option<&DonationRecord> = next_upcoming(&records, date!(2024 - 05 - 01));
    assert_eq!(upcoming.map(|record| record.id.as_str()), Some("soon"));
}

#[test]
fn test_sort_newest_first() {
    let mut records: Vec<DonationRecord> = vec![
        create_record("old", date!(2023 - 02 - 10), DonationStatus::Completed),
        create_record("new", date!(2023 - 12 - 15), DonationStatus::Completed),
        create_record("mid", date!(2023 - 06 - 22), DonationStatus::Completed),
    ];
    sort_newest_first(&mut records);
    let ids: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[test]
fn test_sample_history_is_relative_to_today() {
    let today: Date = date!(2024 - 05 - 01);
    let records: Vec<DonationRecord> = sample_history(today);
    assert_eq!(records.len(), 3);

    let upcoming: Option<&DonationRecord> = next_upcoming(&records, today);
    assert_eq!(upcoming.map(|record| record.date), Some(date!(2024 - 05 - 08)));

    let stats: DonorStats = compute_donor_stats(&records);
    assert_eq!(stats.total_donations, 2);
    assert_eq!(stats.lives_impacted, 6);
    assert_eq!(stats.last_donation, Some(date!(2024 - 04 - 01)));
    assert_eq!(stats.next_eligible, Some(date!(2024 - 07 - 01)));
}
