use std::fmt;

use log::warn;

use crate::error::DurationParseError;

const MINUTES_PER_HOUR: u64 = 60;

/// 時間と分で表される経過時間。
///
/// 生成時には分を60未満に正規化しない。正規化は`add`で行う。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Duration {
    pub hours: u64,
    pub minutes: u64,
}

impl Duration {
    /// 新しい`Duration`を返す。
    pub fn new(hours: u64, minutes: u64) -> Self {
        Self { hours, minutes }
    }

    /// テキストから時間間隔と説明をパースする。
    ///
    /// 先頭のトークンが時間間隔で、残りのトークンを空白1つで連結したものが説明になる。
    ///
    /// * `90` - 90分
    /// * `1:30` - 1時間30分
    /// * `1:` - 1時間
    ///
    /// 分のトークンが数値でない場合はエラーにせず、分を0として扱う。
    /// 合計の分数が`u64`に収まらない場合はエラーになる。
    pub fn parse(text: &str) -> Result<(Self, String), DurationParseError> {
        let mut tokens = text.split_whitespace();
        let spec = tokens.next().ok_or(DurationParseError::Empty)?;
        let description = tokens.collect::<Vec<_>>().join(" ");

        let (hours_token, minutes_token) = match spec.split_once(':') {
            Some((hours, minutes)) => (hours, Some(minutes)),
            None => (spec, None),
        };
        let value =
            hours_token
                .parse::<u64>()
                .map_err(|source| DurationParseError::InvalidHours {
                    token: hours_token.to_string(),
                    source,
                })?;

        let duration = match minutes_token {
            None => Self::new(0, value),
            Some("") => Self::new(value, 0),
            Some(minutes) => match minutes.parse::<u64>() {
                Ok(minutes) => Self::new(value, minutes),
                Err(err) => {
                    warn!("Ignoring invalid minutes \"{}\": {}", minutes, err);
                    Self::new(value, 0)
                }
            },
        };
        if duration.checked_total_minutes().is_none() {
            return Err(DurationParseError::TooLarge {
                token: spec.to_string(),
            });
        }

        Ok((duration, description))
    }

    /// 2つの時間間隔を足し合わせ、分が60未満になるように正規化する。
    ///
    /// 合計の分数は`u64::MAX`で頭打ちになる。
    pub fn add(&self, other: &Self) -> Self {
        Self::from_minutes(self.total_minutes().saturating_add(other.total_minutes()))
    }

    /// 0でない時間間隔かどうかを返す。
    pub fn is_valid(&self) -> bool {
        self.hours != 0 || self.minutes != 0
    }

    /// 合計の分数を返す。`u64`に収まらない場合は`u64::MAX`を返す。
    pub fn total_minutes(&self) -> u64 {
        self.checked_total_minutes().unwrap_or(u64::MAX)
    }

    fn checked_total_minutes(&self) -> Option<u64> {
        self.hours
            .checked_mul(MINUTES_PER_HOUR)?
            .checked_add(self.minutes)
    }

    /// `H:MM`形式の文字列を返す。
    ///
    /// `padded`の場合は時間を2文字幅に右寄せする。
    pub fn format(&self, padded: bool) -> String {
        if padded {
            format!("{:>2}:{:02}", self.hours, self.minutes)
        } else {
            format!("{}:{:02}", self.hours, self.minutes)
        }
    }

    fn from_minutes(total: u64) -> Self {
        Self::new(total / MINUTES_PER_HOUR, total % MINUTES_PER_HOUR)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Duration;
    use crate::error::DurationParseError;

    #[rstest]
    #[case::minutes_only("90", Duration::new(0, 90), "")]
    #[case::hours_and_minutes("1:30 meeting", Duration::new(1, 30), "meeting")]
    #[case::trailing_colon("1:", Duration::new(1, 0), "")]
    #[case::long_description("0:45 to   the   airport", Duration::new(0, 45), "to the airport")]
    #[case::leading_spaces("  15 walk", Duration::new(0, 15), "walk")]
    #[case::zero("0:0", Duration::new(0, 0), "")]
    fn test_parse(#[case] input: &str, #[case] expected: Duration, #[case] description: &str) {
        let (duration, desc) = Duration::parse(input).unwrap();

        assert_eq!(duration, expected);
        assert_eq!(desc, description);
    }

    /// 分が不正な場合は分を0として扱う。
    #[test]
    fn test_parse_invalid_minutes() {
        let (duration, desc) = Duration::parse("2:xx bus").unwrap();

        assert_eq!(duration, Duration::new(2, 0));
        assert_eq!(desc, "bus");
    }

    #[rstest]
    #[case::not_a_number("abc")]
    #[case::negative("-5")]
    #[case::empty_hours(":30")]
    fn test_parse_invalid_hours(#[case] input: &str) {
        let result = Duration::parse(input);

        assert!(matches!(
            result,
            Err(DurationParseError::InvalidHours { .. })
        ));
    }

    #[rstest]
    #[case::hours("400000000000000000:")]
    #[case::hours_and_minutes("307445734561825860:59 long trip")]
    fn test_parse_too_large(#[case] input: &str) {
        assert!(matches!(
            Duration::parse(input),
            Err(DurationParseError::TooLarge { .. })
        ));
    }

    /// 分だけなら`u64`の最大値まで受け付ける。
    #[test]
    fn test_parse_max_minutes() {
        let (duration, _) = Duration::parse("18446744073709551615").unwrap();

        assert_eq!(duration, Duration::new(0, u64::MAX));
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    fn test_parse_empty(#[case] input: &str) {
        assert!(matches!(
            Duration::parse(input),
            Err(DurationParseError::Empty)
        ));
    }

    #[rstest]
    #[case(Duration::new(1, 20), Duration::new(2, 60), Duration::new(4, 20))]
    #[case(Duration::new(0, 90), Duration::new(0, 0), Duration::new(1, 30))]
    #[case(Duration::new(0, 59), Duration::new(0, 1), Duration::new(1, 0))]
    #[case(Duration::new(30, 0), Duration::new(0, 0), Duration::new(30, 0))]
    #[case::saturates(
        Duration::new(0, u64::MAX),
        Duration::new(0, u64::MAX),
        Duration::new(u64::MAX / 60, u64::MAX % 60)
    )]
    fn test_add(#[case] a: Duration, #[case] b: Duration, #[case] expected: Duration) {
        assert_eq!(a.add(&b), expected);
    }

    /// 加算結果の合計分数が保存され、分が60未満になることを確認する。
    #[test]
    fn test_add_preserves_total() {
        for h1 in 0..3 {
            for m1 in [0, 1, 59, 60, 61, 125] {
                for m2 in [0, 30, 59, 200] {
                    let a = Duration::new(h1, m1);
                    let b = Duration::new(h1 + 1, m2);
                    let sum = a.add(&b);

                    assert_eq!(sum.total_minutes(), a.total_minutes() + b.total_minutes());
                    assert!(sum.minutes < 60);
                    assert_eq!(sum.hours, sum.total_minutes() / 60);
                }
            }
        }
    }

    #[rstest]
    #[case(Duration::new(0, 0), false)]
    #[case(Duration::new(0, 1), true)]
    #[case(Duration::new(1, 0), true)]
    fn test_is_valid(#[case] duration: Duration, #[case] expected: bool) {
        assert_eq!(duration.is_valid(), expected);
    }

    #[rstest]
    #[case(Duration::new(1, 5), false, "1:05")]
    #[case(Duration::new(1, 5), true, " 1:05")]
    #[case(Duration::new(12, 30), true, "12:30")]
    #[case(Duration::new(0, 90), false, "0:90")]
    fn test_format(#[case] duration: Duration, #[case] padded: bool, #[case] expected: &str) {
        assert_eq!(duration.format(padded), expected);
    }
}
