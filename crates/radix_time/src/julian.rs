//! Civil date/time types and Julian Date conversion.
//!
//! The conversion follows Meeus, Astronomical Algorithms, ch. 7, including
//! the calendar switch: dates on or after 1582-Oct-15 are Gregorian, earlier
//! dates are Julian. 1582-Oct-04 and 1582-Oct-15 are consecutive days.
//!
//! Inputs are not validated; callers passing an impossible civil date get an
//! out-of-domain Julian Date back, not an error.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// A civil calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// A civil clock time. Seconds carry the fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilTime {
    pub fn new(hour: u32, minute: u32, second: f64) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Hours past midnight as a fraction.
    pub fn as_hours(self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }
}

/// Offset of local civil time from UTC, in hours.
///
/// Local time = UTC + `utc_offset_hours` + `dst_hours`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeZoneOffset {
    pub utc_offset_hours: f64,
    pub dst_hours: f64,
}

impl TimeZoneOffset {
    pub fn utc() -> Self {
        Self::default()
    }

    pub fn new(utc_offset_hours: f64, dst_hours: f64) -> Self {
        Self {
            utc_offset_hours,
            dst_hours,
        }
    }

    pub fn total_hours(self) -> f64 {
        self.utc_offset_hours + self.dst_hours
    }
}

/// Julian Date of a local civil date/time.
///
/// The time zone offset is subtracted to reach UT before conversion, so the
/// result refers to the UT instant. Returns a JD where `.5` fractions align
/// with civil midnight.
pub fn julian_day(date: CivilDate, time: CivilTime, tz: TimeZoneOffset) -> f64 {
    let ut_hours = time.as_hours() - tz.total_hours();

    let (mut y, mut m) = (date.year as f64, date.month as f64);
    if date.month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    // Gregorian reform: 1582-Oct-15 and later.
    let gregorian = (date.year, date.month, date.day) >= (1582, 10, 15);
    let b = if gregorian {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + date.day as f64 + b
        - 1524.5
        + ut_hours / 24.0
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000_JD) / 36525.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon_utc() {
        let jd = julian_day(
            CivilDate::new(2000, 1, 1),
            CivilTime::new(12, 0, 0.0),
            TimeZoneOffset::utc(),
        );
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn meeus_reference_epochs() {
        // Sputnik launch, Meeus example 7.a: 1957-Oct-4.81 = JD 2436116.31.
        let jd = julian_day(
            CivilDate::new(1957, 10, 4),
            CivilTime::new(19, 26, 24.0),
            TimeZoneOffset::utc(),
        );
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");

        // Meeus example 7.b (Julian calendar): 333-Jan-27.5 = JD 1842713.0.
        let jd = julian_day(
            CivilDate::new(333, 1, 27),
            CivilTime::new(12, 0, 0.0),
            TimeZoneOffset::utc(),
        );
        assert!((jd - 1_842_713.0).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn calendar_reform_days_are_consecutive() {
        let julian_side = julian_day(
            CivilDate::new(1582, 10, 4),
            CivilTime::new(0, 0, 0.0),
            TimeZoneOffset::utc(),
        );
        let gregorian_side = julian_day(
            CivilDate::new(1582, 10, 15),
            CivilTime::new(0, 0, 0.0),
            TimeZoneOffset::utc(),
        );
        assert!((gregorian_side - julian_side - 1.0).abs() < 1e-9);
    }

    #[test]
    fn timezone_shifts_to_ut() {
        // 14:00 at UTC+2 is 12:00 UTC.
        let local = julian_day(
            CivilDate::new(2000, 1, 1),
            CivilTime::new(14, 0, 0.0),
            TimeZoneOffset::new(2.0, 0.0),
        );
        assert!((local - J2000_JD).abs() < 1e-9);

        // DST hour stacks on top of the base offset.
        let dst = julian_day(
            CivilDate::new(2000, 1, 1),
            CivilTime::new(15, 0, 0.0),
            TimeZoneOffset::new(2.0, 1.0),
        );
        assert!((dst - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn century_at_epoch_and_after() {
        assert_eq!(julian_century(J2000_JD), 0.0);
        assert!((julian_century(J2000_JD + 36525.0) - 1.0).abs() < 1e-15);
    }
}
