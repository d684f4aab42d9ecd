use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Today's calendar date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The calendar date in `tz` of a UNIX timestamp in seconds.
pub fn date_of_timestamp<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|t| t.with_timezone(tz).date_naive())
}

/// Parses `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> chrono::ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, Utc};

    use super::{date_of_timestamp, parse_date};

    #[test]
    fn timestamps() {
        // 2024-03-01T23:30:00Z
        let t = 1_709_335_800;
        assert_eq!(
            date_of_timestamp(t, &Utc),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        let jst = FixedOffset::east_opt(9 * 60 * 60).unwrap();
        assert_eq!(
            date_of_timestamp(t, &jst),
            NaiveDate::from_ymd_opt(2024, 3, 2)
        );
    }

    #[test]
    fn dates() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("03/01/2024").is_err());
    }
}
