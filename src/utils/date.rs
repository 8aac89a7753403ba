use chrono::NaiveDate;

/// Parse a date cell as found in spreadsheet exports.
///
/// Accepts plain dates, a few datetime spellings (the time part is
/// discarded), US-style dates and raw Excel date serials.
pub fn parse_flexible_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    let dt_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in dt_formats.iter() {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(d);
    }

    // Excel stores dates as day serials counted from 1899-12-30.
    if let Ok(serial) = s.parse::<f64>() {
        return excel_serial_to_date(serial);
    }

    None
}

/// Convert an Excel day serial to a calendar date.
/// Serials below 1.0 are times of day, not dates; reject them together with
/// anything outside a sane calendar window.
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !(1.0..=200_000.0).contains(&serial) {
        return None;
    }

    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    excel_epoch.checked_add_days(chrono::Days::new(serial.trunc() as u64))
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

pub fn month_abbrev(month: u32) -> &'static str {
    let name = month_name(month);
    if name.len() >= 3 { &name[..3] } else { name }
}
