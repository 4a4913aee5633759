//! Home Header Greeting

use chrono::{DateTime, Local, TimeZone, Timelike};

pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "¡Buenos días! Hoy será un gran día para tus hábitos"
    } else if hour < 19 {
        "¡Buenas tardes! Sigamos con energía"
    } else {
        "¡Buenas noches! Repasemos tus logros de hoy"
    }
}

/// `dd/mm/yyyy`
pub fn date_line<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%d/%m/%Y").to_string()
}

/// Date line and greeting for the current local time
pub fn today() -> (String, &'static str) {
    let now = Local::now();
    (date_line(&now), greeting(now.hour()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_greeting_boundaries() {
        assert!(greeting(0).starts_with("¡Buenos días"));
        assert!(greeting(11).starts_with("¡Buenos días"));
        assert!(greeting(12).starts_with("¡Buenas tardes"));
        assert!(greeting(18).starts_with("¡Buenas tardes"));
        assert!(greeting(19).starts_with("¡Buenas noches"));
        assert!(greeting(23).starts_with("¡Buenas noches"));
    }

    #[test]
    fn test_date_line_is_zero_padded() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 9, 0, 0).unwrap();
        assert_eq!(date_line(&date), "07/03/2026");
    }
}
