use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trimly_config::ScheduleConfig;
use trimly_scheduling::occupancy::{OccupancyIndex, OccupiedInterval};
use trimly_scheduling::rules::AvailabilityRules;
use trimly_scheduling::slots::generate_day_slots;
use trimly_scheduling::time::{ServiceDuration, TimeOfDay};

fn barbershop_rules(granularity: i64) -> AvailabilityRules {
    AvailabilityRules::from_config(&ScheduleConfig {
        open_time: "09:00".to_string(),
        close_time: "20:00".to_string(),
        lunch_start: Some("12:00".to_string()),
        lunch_end: Some("13:00".to_string()),
        open_weekdays: vec![
            "mon".into(),
            "tue".into(),
            "wed".into(),
            "thu".into(),
            "fri".into(),
            "sat".into(),
        ],
        slot_granularity_minutes: granularity,
    })
    .expect("valid bench config")
}

// A day packed with back-to-back bookings, `count` of them.
fn dense_occupancy(count: u32) -> OccupancyIndex {
    let intervals = (0..count)
        .map(|i| {
            let start_minutes = 9 * 60 + i * 45;
            OccupiedInterval {
                start_time: TimeOfDay::from_hm(start_minutes / 60, start_minutes % 60)
                    .expect("within day"),
                duration: ServiceDuration::from_minutes(30).unwrap(),
            }
        })
        .collect();
    OccupancyIndex::new(intervals)
}

fn benchmark_generate_day_slots(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_day_slots");
    let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(); // Monday
    let duration = ServiceDuration::from_minutes(30).unwrap();

    group.bench_function("empty_occupancy", |b| {
        let rules = barbershop_rules(20);
        let occupancy = OccupancyIndex::empty();
        b.iter(|| {
            generate_day_slots(
                black_box(date),
                black_box(duration),
                black_box(&rules),
                black_box(&occupancy),
            )
        })
    });

    group.bench_function("few_bookings", |b| {
        let rules = barbershop_rules(20);
        let occupancy = dense_occupancy(4);
        b.iter(|| {
            generate_day_slots(
                black_box(date),
                black_box(duration),
                black_box(&rules),
                black_box(&occupancy),
            )
        })
    });

    group.bench_function("dense_bookings_fine_grid", |b| {
        let rules = barbershop_rules(5);
        let occupancy = dense_occupancy(12);
        b.iter(|| {
            generate_day_slots(
                black_box(date),
                black_box(duration),
                black_box(&rules),
                black_box(&occupancy),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_generate_day_slots);
criterion_main!(benches);
