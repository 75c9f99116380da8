use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use super::error::{DateError, TimestampError};
use super::julian::{calendar_day_to_julian, day_of_year};

/// A timestamp in the utility's `YYYY,DDD,HH:MM:SS.ffff` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedTime {
    pub year: i32,
    pub julian_day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

fn field<T: FromStr>(
    input: &str,
    part: Option<&str>,
    reason: &'static str,
) -> Result<T, TimestampError> {
    part.and_then(|p| p.trim().parse().ok())
        .ok_or_else(|| TimestampError::Malformed {
            input: input.to_string(),
            reason,
        })
}

impl SeedTime {
    /// Parse `YYYY,DDD,HH:MM:SS.ffff`. Anything after a third comma is ignored.
    pub fn parse(input: &str) -> Result<SeedTime, TimestampError> {
        let mut parts = input.split(',');
        let year = field(input, parts.next(), "bad year")?;
        let julian_day = field(input, parts.next(), "bad julian day")?;

        let clock = parts.next();
        let mut clock_parts = clock.into_iter().flat_map(|c| c.split(':'));
        let hour = field(input, clock_parts.next(), "bad hour")?;
        let minute = field(input, clock_parts.next(), "bad minute")?;
        let second: f64 = field(input, clock_parts.next(), "bad second")?;

        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(TimestampError::Malformed {
                input: input.to_string(),
                reason: "time of day out of range",
            });
        }
        // Validates the day against the year.
        day_of_year(year, julian_day)?;

        Ok(SeedTime {
            year,
            julian_day,
            hour,
            minute,
            second,
        })
    }

    /// Calendar date-time, seconds rounded to the nearest whole second.
    pub fn to_datetime(&self) -> Result<NaiveDateTime, TimestampError> {
        let date = day_of_year(self.year, self.julian_day)?;
        let day = NaiveDate::from_ymd_opt(date.year, date.month, date.day).ok_or(
            DateError::InvalidDate {
                year: date.year,
                field: "day",
                value: date.day,
            },
        )?;
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0).ok_or_else(|| {
            TimestampError::Malformed {
                input: self.to_string(),
                reason: "time of day out of range",
            }
        })?;
        Ok(day.and_time(time) + TimeDelta::seconds(self.second.round() as i64))
    }
}

impl fmt::Display for SeedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04},{:03},{:02}:{:02}:{:07.4}",
            self.year, self.julian_day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for SeedTime {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeedTime::parse(s)
    }
}

/// Format a date-time for a request script: `YYYY,DDD,HH:MM:SS.0000`.
pub fn format_seed_time(dt: &NaiveDateTime) -> Result<String, DateError> {
    let julian = calendar_day_to_julian(dt.year(), dt.month(), dt.day())?;
    Ok(format!(
        "{:04},{:03},{:02}:{:02}:{:02}.0000",
        dt.year(),
        julian,
        dt.hour(),
        dt.minute(),
        dt.second()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_timestamp() {
        let t = SeedTime::parse("2020,010,01:30:15.2500").unwrap();
        assert_eq!(t.year, 2020);
        assert_eq!(t.julian_day, 10);
        assert_eq!(t.hour, 1);
        assert_eq!(t.minute, 30);
        assert_eq!(t.second, 15.25);
        assert_eq!(t.to_string(), "2020,010,01:30:15.2500");
    }

    #[test]
    fn converts_to_calendar() {
        let t: SeedTime = "2012,061,12:00:29.6000".parse().unwrap();
        let dt = t.to_datetime().unwrap();
        let expected = NaiveDate::from_ymd_opt(2012, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 30)
            .unwrap();
        assert_eq!(dt, expected);
    }

    #[test]
    fn rounding_into_next_minute() {
        let dt = SeedTime::parse("2011,365,23:59:59.9000")
            .unwrap()
            .to_datetime()
            .unwrap();
        let expected = NaiveDate::from_ymd_opt(2012, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(dt, expected);
    }

    #[test]
    fn rejects_malformed() {
        assert!(matches!(
            SeedTime::parse("2020"),
            Err(TimestampError::Malformed { .. })
        ));
        assert!(matches!(
            SeedTime::parse("2020,abc,00:00:00.0"),
            Err(TimestampError::Malformed { .. })
        ));
        assert!(matches!(
            SeedTime::parse("2020,010,25:00:00.0"),
            Err(TimestampError::Malformed { .. })
        ));
        assert!(matches!(
            SeedTime::parse("2011,366,00:00:00.0"),
            Err(TimestampError::Date(_))
        ));
    }

    #[test]
    fn formats_request_time() {
        let dt = NaiveDate::from_ymd_opt(2011, 3, 1)
            .unwrap()
            .and_hms_opt(4, 5, 6)
            .unwrap();
        assert_eq!(format_seed_time(&dt).unwrap(), "2011,060,04:05:06.0000");
    }

    #[test]
    fn format_then_parse_is_stable() {
        let dt = NaiveDate::from_ymd_opt(2012, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let text = format_seed_time(&dt).unwrap();
        assert_eq!(SeedTime::parse(&text).unwrap().to_datetime().unwrap(), dt);
    }
}
