// Jalali (Persian solar) calendar dates
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    /// Arithmetic conversion on the 33-year cycle; valid for Gregorian years after 1600.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let gy = date.year() as i64;
        let gm = date.month() as usize;
        let gd = date.day() as i64;

        let gy2 = if gm > 2 { gy + 1 } else { gy };
        let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400
            + gd
            + GREGORIAN_DAYS_BEFORE_MONTH[gm - 1];

        let mut year = -1595 + 33 * (days / 12_053);
        days %= 12_053;
        year += 4 * (days / 1461);
        days %= 1461;
        if days > 365 {
            year += (days - 1) / 365;
            days = (days - 1) % 365;
        }

        let (month, day) = if days < 186 {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - 186) / 30, 1 + (days - 186) % 30)
        };

        Self {
            year,
            month: month as u32,
            day: day as u32,
        }
    }

    pub fn today() -> Self {
        Self::from_gregorian(Local::now().date_naive())
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
