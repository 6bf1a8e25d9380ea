#[cfg(test)]
mod tests {
    use crate::occupancy::{OccupancyIndex, OccupiedInterval};
    use crate::rules::{AvailabilityRules, LunchBreak};
    use crate::slots::generate_day_slots;
    use crate::time::{ServiceDuration, TimeOfDay};
    use chrono::{Datelike, NaiveDate, Weekday};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn time(minutes: u32) -> TimeOfDay {
        TimeOfDay::from_hm(minutes / 60, minutes % 60).unwrap()
    }

    fn all_weekdays() -> HashSet<Weekday> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .collect()
    }

    // Occupancy roughly within the working day, any minute alignment.
    fn occupancy_strategy() -> impl Strategy<Value = Vec<(u32, i64)>> {
        prop::collection::vec((6 * 60..22 * 60u32, 10..90i64), 0..6)
    }

    fn build_rules(
        open_minutes: u32,
        close_minutes: u32,
        granularity: i64,
        lunch: Option<(u32, u32)>,
    ) -> AvailabilityRules {
        AvailabilityRules::new(
            time(open_minutes),
            time(close_minutes),
            lunch.map(|(start, end)| LunchBreak {
                start: time(start),
                end: time(end),
            }),
            all_weekdays(),
            ServiceDuration::from_minutes(granularity).unwrap(),
        )
        .unwrap()
    }

    fn build_occupancy(bookings: &[(u32, i64)]) -> OccupancyIndex {
        OccupancyIndex::new(
            bookings
                .iter()
                .map(|&(start, duration)| OccupiedInterval {
                    start_time: time(start),
                    duration: ServiceDuration::from_minutes(duration).unwrap(),
                })
                .collect(),
        )
    }

    proptest! {
        // Every generated slot starts within [open, close), and the
        // count matches the granularity grid exactly.
        #[test]
        fn slots_cover_the_open_interval(
            open_hour in 6..12u32,
            close_hour in 13..23u32,
            granularity in prop::sample::select(vec![10i64, 15, 20, 30, 60]),
            duration in 15..120i64,
            bookings in occupancy_strategy(),
        ) {
            let open = open_hour * 60;
            let close = close_hour * 60;
            let rules = build_rules(open, close, granularity, None);
            let occupancy = build_occupancy(&bookings);
            let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();

            let slots = generate_day_slots(
                date,
                ServiceDuration::from_minutes(duration).unwrap(),
                &rules,
                &occupancy,
            );

            let span = close - open;
            let expected = span.div_ceil(granularity as u32) as usize;
            prop_assert_eq!(slots.len(), expected);

            for slot in &slots {
                prop_assert!(slot.time >= rules.open_time());
                prop_assert!(slot.time < rules.close_time());
            }
        }

        // An available slot never runs past close, never touches lunch,
        // and never overlaps an existing booking.
        #[test]
        fn available_slots_satisfy_every_constraint(
            open_hour in 6..10u32,
            close_hour in 16..22u32,
            granularity in prop::sample::select(vec![15i64, 20, 30]),
            duration in 15..90i64,
            bookings in occupancy_strategy(),
        ) {
            let rules = build_rules(
                open_hour * 60,
                close_hour * 60,
                granularity,
                Some((12 * 60, 13 * 60)),
            );
            let occupancy = build_occupancy(&bookings);
            let date = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap();
            let service = ServiceDuration::from_minutes(duration).unwrap();

            let slots = generate_day_slots(date, service, &rules, &occupancy);

            for slot in slots.iter().filter(|s| s.available) {
                let end = slot.time.add_minutes(service);
                prop_assert!(end <= rules.close_time(),
                    "available slot {} runs past close", slot.time);
                prop_assert!(!rules.lunch_overlaps(slot.time, end),
                    "available slot {} intersects lunch", slot.time);
                prop_assert!(!occupancy.overlaps(slot.time, end),
                    "available slot {} overlaps a booking", slot.time);
            }

            // Tagging is total: unavailable slots always carry a reason.
            for slot in &slots {
                prop_assert_eq!(slot.reason.is_some(), !slot.available);
            }
        }

        // Pure function of its inputs: same inputs, same output.
        #[test]
        fn generation_is_deterministic(
            day_offset in 0..28u64,
            granularity in prop::sample::select(vec![10i64, 20, 45]),
            duration in 15..120i64,
            bookings in occupancy_strategy(),
        ) {
            let weekdays: HashSet<Weekday> =
                [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
                    .into_iter()
                    .collect();
            let rules = AvailabilityRules::new(
                time(9 * 60),
                time(18 * 60),
                Some(LunchBreak { start: time(12 * 60), end: time(13 * 60) }),
                weekdays,
                ServiceDuration::from_minutes(granularity).unwrap(),
            )
            .unwrap();
            let occupancy = build_occupancy(&bookings);
            let date = NaiveDate::from_ymd_opt(2025, 5, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(day_offset))
                .unwrap();
            let service = ServiceDuration::from_minutes(duration).unwrap();

            let first = generate_day_slots(date, service, &rules, &occupancy);
            let second = generate_day_slots(date, service, &rules, &occupancy);
            prop_assert_eq!(first, second);

            // Weekday gating is total too: every open weekday produces the
            // full candidate grid, closed ones produce nothing.
            let reference = generate_day_slots(date, service, &rules, &occupancy);
            if rules.is_weekday_open(date.weekday()) {
                prop_assert!(!reference.is_empty());
            } else {
                prop_assert!(reference.is_empty());
            }
        }
    }
}
