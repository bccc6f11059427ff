use chrono::{DateTime, Datelike, Utc};

/// Format a story's age relative to `now`:
/// - Relative for <7 days: "2h ago", "3d ago"
/// - Absolute for ≥7 days: "Jan 15", "Dec 3, 2024"
/// - "unknown" when the API sent no timestamp
pub fn format_story_age(created_at: Option<&DateTime<Utc>>, now: &DateTime<Utc>) -> String {
    let Some(created_at) = created_at else {
        return "unknown".to_string();
    };

    let age = now.signed_duration_since(*created_at);
    if age.num_days() < 7 {
        format_relative(age.num_seconds().max(0))
    } else if created_at.year() == now.year() {
        created_at.format("%b %-d").to_string()
    } else {
        created_at.format("%b %-d, %Y").to_string()
    }
}

fn format_relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_timestamp() {
        assert_eq!(format_story_age(None, &now()), "unknown");
    }

    #[test]
    fn test_relative_ages() {
        let now = now();
        assert_eq!(format_story_age(Some(&(now - Duration::seconds(30))), &now), "just now");
        assert_eq!(format_story_age(Some(&(now - Duration::minutes(45))), &now), "45m ago");
        assert_eq!(format_story_age(Some(&(now - Duration::hours(3))), &now), "3h ago");
        assert_eq!(format_story_age(Some(&(now - Duration::days(5))), &now), "5d ago");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        let now = now();
        assert_eq!(format_story_age(Some(&(now + Duration::minutes(5))), &now), "just now");
    }

    #[test]
    fn test_absolute_same_year() {
        let created = Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap();
        assert_eq!(format_story_age(Some(&created), &now()), "Jan 15");
    }

    #[test]
    fn test_absolute_different_year() {
        let created = Utc.with_ymd_and_hms(2007, 4, 4, 19, 16, 40).unwrap();
        assert_eq!(format_story_age(Some(&created), &now()), "Apr 4, 2007");
    }
}
