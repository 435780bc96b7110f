use gps_calendar::{
    convert_atlas_delta_time, convert_julian, CalendarFormat, GpsTime, IntegerKind, JulianDate,
};

fn main() {
    let gps = GpsTime::new(1_225_558_632.0);
    let unix = gps.to_unix();
    let jd: JulianDate = unix.to_julian();

    println!("{gps} -> {unix} -> {jd}");
    println!("leap seconds so far: {}", gps.leap_seconds());
    println!("calendar: {:?}", jd.to_calendar().truncate::<i64>());
    println!("chrono:   {:?}", unix.to_utc());

    let j2000 = convert_julian(
        JulianDate::J2000.value(),
        Some(IntegerKind::I64),
        CalendarFormat::Map,
    );
    println!("J2000:    {j2000:?}");

    let track = convert_atlas_delta_time(&[26_758_614.0, 26_758_614.5, 26_758_615.0]);
    for (year, month, day, hour, minute, second) in track.calendar.pairs() {
        println!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:06.3}");
    }
}
