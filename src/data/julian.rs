use std::fmt;

use serde::Serialize;

use super::error::DateError;

// ---------------------------------------------------------------------------
// Cumulative day tables
// ---------------------------------------------------------------------------

/// Day-of-year of the last day of each month, common year.
const MONTH_DAYS: [u32; 12] = [31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// Day-of-year of the last day of each month, leap year.
const LEAP_DAYS: [u32; 12] = [31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

fn cumulative_days(year: i32) -> &'static [u32; 12] {
    if is_leap_year(year) {
        &LEAP_DAYS
    } else {
        &MONTH_DAYS
    }
}

// ---------------------------------------------------------------------------
// CalendarDate
// ---------------------------------------------------------------------------

/// A Gregorian calendar date. Displays as the fixed-width `MMDDYYYY` string
/// consumers slice month (`[0..2]`) and day (`[2..4]`) out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// The `MMDDYYYY` form.
    pub fn to_mmddyyyy(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:04}", self.month, self.day, self.year)
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    cumulative_days(year)[11]
}

/// Convert a 1-based Julian day of `year` to its calendar date.
///
/// Days outside `1..=days_in_year(year)` are rejected rather than indexing
/// past the month table.
pub fn day_of_year(year: i32, julian_day: u32) -> Result<CalendarDate, DateError> {
    let days = cumulative_days(year);
    if julian_day == 0 || julian_day > days[11] {
        return Err(DateError::InvalidDate {
            year,
            field: "julian day",
            value: julian_day,
        });
    }

    let mut month = 0;
    while days[month] < julian_day {
        month += 1;
    }

    let day = if julian_day <= days[0] {
        julian_day
    } else {
        julian_day - days[month - 1]
    };

    Ok(CalendarDate {
        year,
        month: month as u32 + 1,
        day,
    })
}

/// Convert a calendar date to its 1-based Julian day. Inverse of [`day_of_year`].
pub fn calendar_day_to_julian(year: i32, month: u32, day: u32) -> Result<u32, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidDate {
            year,
            field: "month",
            value: month,
        });
    }
    let days = cumulative_days(year);
    let month_start = if month == 1 { 0 } else { days[month as usize - 2] };
    let month_len = days[month as usize - 1] - month_start;
    if day == 0 || day > month_len {
        return Err(DateError::InvalidDate {
            year,
            field: "day",
            value: day,
        });
    }
    Ok(month_start + day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2012));
        assert!(!is_leap_year(2011));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn calendar_to_julian_known_values() {
        assert_eq!(calendar_day_to_julian(2011, 1, 15).unwrap(), 15);
        assert_eq!(calendar_day_to_julian(2011, 3, 1).unwrap(), 60);
        assert_eq!(calendar_day_to_julian(2012, 3, 1).unwrap(), 61);
        assert_eq!(calendar_day_to_julian(2012, 12, 31).unwrap(), 366);
    }

    #[test]
    fn julian_to_calendar_known_values() {
        let d = day_of_year(2011, 60).unwrap();
        assert_eq!(
            d,
            CalendarDate {
                year: 2011,
                month: 3,
                day: 1
            }
        );
        assert_eq!(d.to_mmddyyyy(), "03012011");
        assert_eq!(day_of_year(2012, 60).unwrap().to_string(), "02292012");
        assert_eq!(day_of_year(2011, 1).unwrap().to_string(), "01012011");
        assert_eq!(day_of_year(2011, 365).unwrap().to_string(), "12312011");
    }

    #[test]
    fn round_trip_every_day() {
        for year in [1900, 2000, 2011, 2012] {
            for month in 1..=12 {
                for day in 1..=31 {
                    let Ok(jd) = calendar_day_to_julian(year, month, day) else {
                        continue;
                    };
                    let date = day_of_year(year, jd).unwrap();
                    assert_eq!(date.to_string(), format!("{month:02}{day:02}{year:04}"));
                }
            }
        }
    }

    #[test]
    fn out_of_range_days_rejected() {
        assert!(day_of_year(2011, 0).is_err());
        assert!(day_of_year(2011, 366).is_err());
        assert!(day_of_year(2012, 366).is_ok());
        assert!(day_of_year(2012, 367).is_err());
        assert!(calendar_day_to_julian(2011, 2, 29).is_err());
        assert!(calendar_day_to_julian(2011, 13, 1).is_err());
        assert!(calendar_day_to_julian(2011, 0, 1).is_err());
        assert!(calendar_day_to_julian(2011, 4, 0).is_err());
    }

    #[test]
    fn year_is_zero_padded() {
        assert_eq!(day_of_year(999, 32).unwrap().to_string(), "02010999");
    }
}
