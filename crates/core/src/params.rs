//! Strict parsing for list-endpoint query parameters.
//!
//! Malformed input is rejected with [`CoreError::InvalidParameter`] before
//! any database query runs; nothing is silently dropped.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a comma-separated list of base-10 ids (e.g. `"1,2,3"`).
///
/// Fails on empty input, empty segments, and any non-numeric segment.
pub fn parse_id_list(raw: &str) -> Result<Vec<DbId>, CoreError> {
    if raw.is_empty() {
        return Err(CoreError::InvalidParameter(
            "id list must not be empty".into(),
        ));
    }

    raw.split(',')
        .map(|segment| {
            segment.parse::<DbId>().map_err(|_| {
                CoreError::InvalidParameter(format!("'{segment}' is not a valid id"))
            })
        })
        .collect()
}

/// Parse a date strictly as zero-padded `YYYY-MM-DD`.
///
/// Rejects calendar-invalid dates (`2024-02-30`) and any other format,
/// including unpadded variants (`2024-2-3`) that chrono would otherwise
/// accept for `%Y-%m-%d`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidParameter(format!("'{raw}' is not a valid YYYY-MM-DD date")))?;

    // Round-trip to enforce zero padding.
    if date.format("%Y-%m-%d").to_string() != raw {
        return Err(CoreError::InvalidParameter(format!(
            "'{raw}' is not a valid YYYY-MM-DD date"
        )));
    }

    Ok(date)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_parse_id_list_valid() {
        assert_eq!(parse_id_list("1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_id_list("42").unwrap(), vec![42]);
    }

    #[test]
    fn test_parse_id_list_rejects_non_numeric_segment() {
        assert_matches!(parse_id_list("1,2,x"), Err(CoreError::InvalidParameter(_)));
    }

    #[test]
    fn test_parse_id_list_rejects_empty_input() {
        assert_matches!(parse_id_list(""), Err(CoreError::InvalidParameter(_)));
    }

    #[test]
    fn test_parse_id_list_rejects_trailing_comma() {
        assert_matches!(parse_id_list("1,2,"), Err(CoreError::InvalidParameter(_)));
    }

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2024-06-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_impossible_calendar_date() {
        assert_matches!(parse_date("2024-02-30"), Err(CoreError::InvalidParameter(_)));
    }

    #[test]
    fn test_parse_date_rejects_unpadded_format() {
        assert_matches!(parse_date("2024-2-3"), Err(CoreError::InvalidParameter(_)));
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert_matches!(parse_date("15-06-2024"), Err(CoreError::InvalidParameter(_)));
        assert_matches!(parse_date("2024/06/15"), Err(CoreError::InvalidParameter(_)));
        assert_matches!(parse_date("not-a-date"), Err(CoreError::InvalidParameter(_)));
    }
}
