use chrono::{DateTime, Utc};
use rubric_core::format::OutputFormat;
use rubric_core::model::TimeStatus;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse time status from string
pub fn parse_time_status(s: &str) -> std::result::Result<TimeStatus, String> {
    s.parse::<TimeStatus>().map_err(|e| e.to_string())
}

/// Parse an RFC 3339 handin time
pub fn parse_handin_time(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("invalid handin time '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_status() {
        assert_eq!(parse_time_status("LATE").unwrap(), TimeStatus::Late);
        assert!(parse_time_status("tardy").is_err());
    }

    #[test]
    fn test_parse_handin_time_normalizes_to_utc() {
        let t = parse_handin_time("2026-02-03T20:00:00-05:00").unwrap();
        assert_eq!(t.to_rfc3339(), "2026-02-04T01:00:00+00:00");
        assert!(parse_handin_time("yesterday").is_err());
    }
}
