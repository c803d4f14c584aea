/// Decode a colon-separated timespan into seconds: the rightmost field
/// weighs 60^0, the next 60^1, and so on, so `"1:02:03"` is 3723 and
/// `"4:05"` is 245. Returns `None` when any field is not a number or the
/// total does not fit into a `u64`.
pub fn timespan_secs(timespan: &str) -> Option<u64> {
    timespan
        .split(':')
        .rev()
        .enumerate()
        .try_fold(0u64, |acc, (position, field)| {
            let value: u64 = field.trim().parse().ok()?;
            let weight = 60u64.checked_pow(position as u32)?;
            acc.checked_add(value.checked_mul(weight)?)
        })
}

/// Format seconds as `H:MM:SS`, the form the AV transport expects for
/// seek targets.
pub fn secs_timespan(secs: u64) -> String {
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0:00:00", 0)]
    #[case("0:03:25", 205)]
    #[case("1:02:03", 3723)]
    #[case("4:05", 245)]
    #[case("42", 42)]
    #[case("10:00:00", 36000)]
    fn test_timespan_secs(#[case] timespan: &str, #[case] expected: u64) {
        assert_eq!(timespan_secs(timespan), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("NOT_IMPLEMENTED")]
    #[case("1:xx:03")]
    #[case("::")]
    // Enough fields for the weight to exceed u64::MAX.
    #[case("1:0:0:0:0:0:0:0:0:0:0:0")]
    // A single field large enough to overflow the weighted sum.
    #[case("18446744073709551615:00")]
    fn test_timespan_secs_rejects_garbage(#[case] timespan: &str) {
        assert_eq!(timespan_secs(timespan), None);
    }

    #[test]
    fn test_secs_timespan_formatting() {
        assert_eq!(secs_timespan(0), "0:00:00");
        assert_eq!(secs_timespan(205), "0:03:25");
        assert_eq!(secs_timespan(3723), "1:02:03");
        assert_eq!(secs_timespan(36000), "10:00:00");
    }

    #[test]
    fn test_timespan_round_trip() {
        for secs in [0, 59, 60, 61, 3599, 3600, 7325] {
            assert_eq!(timespan_secs(&secs_timespan(secs)), Some(secs));
        }
    }
}
