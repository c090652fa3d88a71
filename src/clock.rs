use chrono::{Duration, NaiveTime};

use crate::error::TimeParseError;

const MINUTES_PER_DAY: u64 = 24 * 60;

/// 時刻をパースする。
///
/// 次の形式を受け付ける。
///
/// * `["HH:MM"]`
/// * `["HH"]`
/// * `["HH:"]`
/// * `["HH", "MM"]`
pub fn parse_clock_time(tokens: &[&str]) -> Result<NaiveTime, TimeParseError> {
    let time = match tokens {
        [token] => parse_hh_mm(token)
            .or_else(|| parse_hh(token))
            .or_else(|| token.strip_suffix(':').and_then(parse_hh)),
        [hours, minutes] => parse_hh_mm(&format!("{}:{}", hours, minutes)),
        _ => None,
    };

    time.ok_or_else(|| TimeParseError {
        input: tokens.join(" "),
    })
}

/// 時刻を`HH:MM`形式で表示する。
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// 時刻から分を引く。日付をまたぐ場合は24時間で折り返す。
pub fn subtract_minutes(time: NaiveTime, minutes: u64) -> NaiveTime {
    let (result, _) =
        time.overflowing_sub_signed(Duration::minutes((minutes % MINUTES_PER_DAY) as i64));
    result
}

/// `HH:MM`形式の時刻をパースする。分は2桁でなければならない。
fn parse_hh_mm(s: &str) -> Option<NaiveTime> {
    let (_, minutes) = s.split_once(':')?;
    if minutes.len() != 2 || !minutes.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

fn parse_hh(s: &str) -> Option<NaiveTime> {
    if s.is_empty() || s.len() > 2 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hour = s.parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, 0, 0)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use rstest::rstest;

    use super::{format_clock_time, parse_clock_time, subtract_minutes};

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[rstest]
    #[case::hh_mm(&["12:37"], hm(12, 37))]
    #[case::hh(&["9"], hm(9, 0))]
    #[case::hh_two_digits(&["21"], hm(21, 0))]
    #[case::trailing_colon(&["7:"], hm(7, 0))]
    #[case::two_tokens(&["11", "05"], hm(11, 5))]
    #[case::midnight(&["0:00"], hm(0, 0))]
    fn test_parse_clock_time(#[case] tokens: &[&str], #[case] expected: NaiveTime) {
        assert_eq!(parse_clock_time(tokens).unwrap(), expected);
    }

    #[rstest]
    #[case::text(&["noon"])]
    #[case::hour_out_of_range(&["25"])]
    #[case::minute_out_of_range(&["12:75"])]
    #[case::two_tokens_invalid(&["12", "xx"])]
    #[case::one_digit_minute(&["12:5"])]
    #[case::two_tokens_one_digit_minute(&["12", "5"])]
    #[case::too_many_tokens(&["1", "2", "3"])]
    #[case::nothing(&[])]
    fn test_parse_clock_time_invalid(#[case] tokens: &[&str]) {
        let err = parse_clock_time(tokens).unwrap_err();

        assert_eq!(err.input, tokens.join(" "));
    }

    #[rstest]
    #[case(hm(12, 0), 30, hm(11, 30))]
    #[case(hm(12, 37), 80, hm(11, 17))]
    #[case(hm(0, 10), 20, hm(23, 50))]
    #[case(hm(8, 0), 24 * 60 * 3 + 60, hm(7, 0))]
    fn test_subtract_minutes(#[case] time: NaiveTime, #[case] minutes: u64, #[case] expected: NaiveTime) {
        assert_eq!(subtract_minutes(time, minutes), expected);
    }

    #[test]
    fn test_format_clock_time() {
        assert_eq!(format_clock_time(hm(7, 5)), "07:05");
    }
}
