use chrono::{TimeZone, Utc};
use gps_calendar::leap_seconds::{count_leaps_before_batch, LEAP_SECONDS};
use gps_calendar::{
    convert_atlas_delta_time, convert_gps_time, convert_gps_time_batch, convert_gps_to_unix,
    convert_gps_to_unix_batch, convert_julian, convert_julian_batch, count_leaps_before,
    julian_day_from_calendar, julian_to_calendar, CalendarDate, CalendarField, CalendarFormat,
    FieldValue, GpsTime, IntegerKind, JulianDate,
};
use qtty::Seconds;

#[test]
fn gps_epoch_converts_to_1980_01_06() {
    let date = convert_gps_time(0.0, 0.0);
    assert_eq!(date.unix.value(), 315_964_800.0);
    assert_eq!(
        date.calendar,
        CalendarDate::new(1980.0, 1.0, 6.0, 0.0, 0.0, 0.0)
    );
}

#[test]
fn j2000_converts_to_new_year_noon() {
    let tuple = convert_julian(2_451_545.0, None, CalendarFormat::Tuple)
        .into_tuple()
        .expect("tuple");
    assert_eq!(
        tuple,
        (
            FieldValue::Float(2000.0),
            FieldValue::Float(1.0),
            FieldValue::Float(1.0),
            FieldValue::Float(12.0),
            FieldValue::Float(0.0),
            FieldValue::Float(0.0),
        )
    );
}

#[test]
fn leap_instant_gets_half_second_over_naive_formula() {
    for (i, &leap) in LEAP_SECONDS.iter().enumerate() {
        let naive = leap + 315_964_800.0 - count_leaps_before(leap) as f64;
        assert_eq!(count_leaps_before(leap), i as u32 + 1);
        assert_eq!(convert_gps_to_unix(leap), naive + 0.5);
    }
}

#[test]
fn leap_count_is_flat_between_entries() {
    for (i, pair) in LEAP_SECONDS.windows(2).enumerate() {
        let probes: Vec<f64> = (1..10)
            .map(|k| pair[0] + (pair[1] - pair[0]) * f64::from(k) / 10.0)
            .collect();
        assert!(count_leaps_before_batch(&probes)
            .iter()
            .all(|&n| n == i as u32 + 1));
    }
}

#[test]
fn unix_is_non_decreasing_on_whole_seconds() {
    let start = LEAP_SECONDS[0] - 5.0;
    let input: Vec<f64> = (0..20).map(|k| start + f64::from(k)).collect();
    let unix = convert_gps_to_unix_batch(&input);
    assert!(unix.windows(2).all(|w| w[0] <= w[1]));

    // Coarse sweep across the whole table.
    let input: Vec<f64> = (0..1_300).map(|k| f64::from(k) * 1.0e6).collect();
    let unix = convert_gps_to_unix_batch(&input);
    assert!(unix.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn calendar_round_trip_after_switchover() {
    // Times of day are dyadic fractions of a day so the Julian Day itself is
    // exact; the seconds field is then within floating tolerance.
    for year in (1583..2101).step_by(7) {
        for month in 1..=12 {
            for day in [1, 9, 17, 28] {
                for hour in (0..24).step_by(3) {
                    for (minute, second) in [(0, 0.0), (45, 0.0), (22, 30.0), (11, 15.0)] {
                        let jd = julian_day_from_calendar(
                            f64::from(year),
                            f64::from(month),
                            f64::from(day),
                            f64::from(hour),
                            f64::from(minute),
                            second,
                        );
                        let date = julian_to_calendar(jd);
                        assert_eq!(
                            (date.year, date.month, date.day, date.hour, date.minute),
                            (
                                f64::from(year),
                                f64::from(month),
                                f64::from(day),
                                f64::from(hour),
                                f64::from(minute)
                            ),
                            "jd = {jd}"
                        );
                        assert!((date.second - second).abs() < 1e-6, "jd = {jd}");
                    }
                }
            }
        }
    }
}

#[test]
fn scalar_and_batch_shapes() {
    let scalar = convert_julian(2_451_545.0, Some(IntegerKind::I64), CalendarFormat::Map)
        .into_map()
        .expect("map");
    assert_eq!(scalar[&CalendarField::Year], FieldValue::I64(2000));

    let jd = [2_451_545.0, 2_440_587.5, 2_444_244.5, 2_299_159.5];
    let batch = convert_julian_batch(&jd, None, CalendarFormat::Map)
        .into_map()
        .expect("map");
    assert_eq!(batch.len(), 6);
    for column in batch.values() {
        assert_eq!(column.len(), jd.len());
    }
    assert_eq!(
        batch[&CalendarField::Year],
        vec![
            FieldValue::Float(2000.0),
            FieldValue::Float(1970.0),
            FieldValue::Float(1980.0),
            FieldValue::Float(1582.0)
        ]
    );
}

#[test]
fn integer_coercion_truncates_instead_of_rounding() {
    // 1999-12-31 07:52:30 lands a hair under 30 s after the float pass.
    let jd = 2_451_543.828_125;
    let float = julian_to_calendar(jd);
    assert!(float.second < 30.0 && float.second > 29.999);

    let ints = convert_julian(jd, Some(IntegerKind::I32), CalendarFormat::Tuple)
        .into_tuple()
        .expect("tuple");
    assert_eq!(ints.4, FieldValue::I32(52));
    assert_eq!(ints.5, FieldValue::I32(29));
}

#[test]
fn gps_batch_carries_unix_column() {
    let input = [0.0, 1.0e9, LEAP_SECONDS[17]];
    let map = convert_gps_time_batch(&input, 0.0)
        .truncate::<i64>()
        .into_map();
    assert_eq!(map.len(), 7);
    assert_eq!(
        map[&CalendarField::Unix],
        input
            .iter()
            .map(|&t| FieldValue::Float(convert_gps_to_unix(t)))
            .collect::<Vec<_>>()
    );
    assert_eq!(map[&CalendarField::Year][0], FieldValue::I64(1980));
}

#[test]
fn atlas_delta_time_to_chrono() {
    // 2018-11-06T16:56:54Z, the granule start of a 2018 ATL10 file.
    let delta = 1_541_523_414.0 - 1_514_764_800.0;
    let batch = convert_atlas_delta_time(&[delta]);
    let date = batch.calendar.get(0).expect("one element");
    let utc = date.truncate::<i64>().to_utc().expect("valid date");
    assert_eq!(utc, Utc.with_ymd_and_hms(2018, 11, 6, 16, 56, 54).unwrap());
}

#[test]
fn typed_instants_chain() {
    let gps = GpsTime::new(1_000_000_000.0) + Seconds::new(0.5);
    let unix = gps.to_unix();
    let jd: JulianDate = unix.to_julian();
    let date = jd.to_calendar();
    assert_eq!(date, convert_gps_time(1_000_000_000.5, 0.0).calendar);
    assert_eq!(gps.leap_seconds(), 15);
    assert!(!gps.is_leap_instant());
}

#[test]
fn offset_shifts_before_leap_lookup() {
    let with_offset = convert_gps_time(LEAP_SECONDS[10] - 100.0, 100.0);
    let absolute = convert_gps_time(LEAP_SECONDS[10], 0.0);
    assert_eq!(with_offset, absolute);
}

#[cfg(feature = "serde")]
#[test]
fn serde_gps_date_is_flat_record() {
    let date = convert_gps_time(0.0, 0.0).truncate::<i64>();
    let json = serde_json::to_value(date).unwrap();
    assert_eq!(json["year"], 1980);
    assert_eq!(json["day"], 6);
    assert_eq!(json["unix"], 315_964_800.0);
}

#[cfg(feature = "serde")]
#[test]
fn serde_selectors_use_lowercase_names() {
    assert_eq!(
        serde_json::to_string(&CalendarFormat::Pairs).unwrap(),
        "\"pairs\""
    );
    let kind: IntegerKind = serde_json::from_str("\"i32\"").unwrap();
    assert_eq!(kind, IntegerKind::I32);
}
