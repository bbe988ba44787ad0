/// Utility helpers for the player

/// Formats elapsed seconds as a zero-padded clock label.
/// `MM:SS` below one hour, `HH:MM:SS` from one hour on.
pub fn format_time(seconds: u32) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pads_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(599), "09:59");
        assert_eq!(format_time(3599), "59:59");
    }

    #[test]
    fn long_episodes_get_an_hour_field() {
        assert_eq!(format_time(3600), "01:00:00");
        assert_eq!(format_time(3981), "01:06:21");
    }

    proptest! {
        #[test]
        fn under_an_hour_is_always_mm_ss(s in 0u32..3600) {
            let label = format_time(s);
            prop_assert_eq!(label.len(), 5);
            let (mins, secs) = label.split_once(':').unwrap();
            prop_assert_eq!(mins.parse::<u32>().unwrap() * 60 + secs.parse::<u32>().unwrap(), s);
        }
    }
}
