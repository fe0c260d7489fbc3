//! 表單輸入正規化
//!
//! 數值欄位不回報錯誤：無法解析或負值一律轉為安全預設值。

/// 讀取前導整數（允許正負號），其後字元忽略
///
/// `"12cm"` → 12，`"3.7"` → 3，`""` / `"abc"` → None。
pub fn parse_length(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // 位數過長時飽和
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// 數量欄位：夾在 [0, u32::MAX]，無法解析時為 0
pub fn normalize_quantity(raw: &str) -> u32 {
    clamp_quantity(parse_length(raw).unwrap_or(0))
}

/// 數量夾限
pub fn clamp_quantity(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// 可用布長：只有正整數才進行計算
pub fn available_fabric(raw: &str) -> Option<u64> {
    parse_length(raw)
        .filter(|&v| v > 0)
        .map(|v| v as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("500", Some(500))]
    #[case("  42", Some(42))]
    #[case("12cm", Some(12))]
    #[case("3.7", Some(3))]
    #[case("-15", Some(-15))]
    #[case("+8", Some(8))]
    #[case("", None)]
    #[case("abc", None)]
    #[case("-", None)]
    fn test_parse_length(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_length(raw), expected);
    }

    #[rstest]
    #[case("3", 3)]
    #[case("-4", 0)]
    #[case("", 0)]
    #[case("many", 0)]
    #[case("99999999999", u32::MAX)]
    fn test_normalize_quantity(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(normalize_quantity(raw), expected);
    }

    #[test]
    fn test_available_fabric_requires_positive() {
        assert_eq!(available_fabric("500"), Some(500));
        assert_eq!(available_fabric("0"), None);
        assert_eq!(available_fabric("-20"), None);
        assert_eq!(available_fabric("roll"), None);
    }

    #[test]
    fn test_overlong_digits_saturate() {
        assert_eq!(parse_length("99999999999999999999999"), Some(i64::MAX));
    }
}
