use jiff::{Timestamp, Zoned, civil::Date, tz::TimeZone};

/// A timestamp in the browser's time zone.
pub fn localize(timestamp: Timestamp) -> Zoned {
    timestamp.to_zoned(TimeZone::system())
}

pub fn format_timestamp(timestamp: Timestamp) -> String {
    localize(timestamp).strftime("%a, %d %b %Y %H:%M").to_string()
}

/// "09:00 - 10:30", with the date only when the period spans days.
pub fn format_period(start: Timestamp, end: Timestamp) -> String {
    let (start, end) = (localize(start), localize(end));
    if start.date() == end.date() {
        format!(
            "{} {} - {}",
            start.strftime("%d %b %Y"),
            start.strftime("%H:%M"),
            end.strftime("%H:%M")
        )
    } else {
        format!(
            "{} - {}",
            start.strftime("%d %b %Y %H:%M"),
            end.strftime("%d %b %Y %H:%M")
        )
    }
}

pub fn today() -> Date {
    Zoned::now().date()
}
