use chrono::{DateTime, Datelike, Duration, TimeZone, Utc, Weekday};
use tempoch_rules::{enumerator_fn, finder_fn, Enumerator, Finder, Interval, UtcPeriod};

fn midnight(t: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(t.year(), t.month(), t.day(), 0, 0, 0)
        .single()
        .unwrap_or(t)
}

fn main() {
    let weekdays = finder_fn(|bound: UtcPeriod| {
        let mut day = midnight(bound.start);
        while day < bound.end {
            if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
                if let Some(hit) = Interval::new(day, day + Duration::days(1)).intersection(&bound) {
                    return Some(hit);
                }
            }
            day = day + Duration::days(1);
        }
        None
    });

    let office_hours = finder_fn(|bound: UtcPeriod| {
        let mut day = midnight(bound.start);
        while day < bound.end {
            let window = Interval::new(day + Duration::hours(9), day + Duration::hours(17));
            if let Some(hit) = window.intersection(&bound) {
                return Some(hit);
            }
            day = day + Duration::days(1);
        }
        None
    });

    let christmas = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap();
    let holidays = enumerator_fn(move |bound: UtcPeriod| {
        Interval::new(christmas, christmas + Duration::days(1))
            .intersection(&bound)
            .into_iter()
            .collect()
    });

    let open = weekdays
        .intersect(office_hours)
        .intersect(holidays.negate());

    let start = Utc.with_ymd_and_hms(2024, 12, 23, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 12, 30, 0, 0, 0).unwrap();
    for slot in open.apply(start, end) {
        println!("open: {slot}");
    }

    let second_tuesday = finder_fn(|bound: UtcPeriod| {
        let mut day = midnight(bound.start);
        while day < bound.end {
            if day.weekday() == Weekday::Tue {
                return Interval::new(day, day + Duration::days(1)).intersection(&bound);
            }
            day = day + Duration::days(1);
        }
        None
    })
    .promote()
    .nth_of(
        2,
        enumerator_fn(|bound: UtcPeriod| {
            let first = Utc
                .with_ymd_and_hms(bound.start.year(), bound.start.month(), 1, 0, 0, 0)
                .unwrap();
            let mut spans = Vec::new();
            let mut month = first;
            while month < bound.end {
                let next = month
                    .checked_add_months(chrono::Months::new(1))
                    .unwrap_or(bound.end);
                spans.push(Interval::new(month, next));
                month = next;
            }
            spans
        }),
    );

    match second_tuesday {
        Ok(rule) => match rule.apply_seconds(1_704_067_200, 1_735_689_600) {
            Ok(slots) => {
                for slot in slots {
                    println!("patch day: {}", slot.start.date_naive());
                }
            }
            Err(err) => eprintln!("{err}"),
        },
        Err(err) => eprintln!("{err}"),
    }
}
