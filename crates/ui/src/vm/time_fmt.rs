use chrono::{DateTime, Utc};

/// `HH:MM` label shown under chat bubbles.
#[must_use]
pub fn format_time(value: DateTime<Utc>) -> String {
    value.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::time::fixed_now;

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_time(fixed_now()), "22:13");
    }
}
