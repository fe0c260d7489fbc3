//! 尺碼模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CutPlanError;

/// 成衣尺碼
///
/// 排序與宣告順序一致（XS → 5XL），分配引擎依此順序逐一處理。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "XS")]
    Xs,
    #[serde(rename = "S")]
    S,
    #[serde(rename = "M")]
    M,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "2XL")]
    Xl2,
    #[serde(rename = "3XL")]
    Xl3,
    #[serde(rename = "4XL")]
    Xl4,
    #[serde(rename = "5XL")]
    Xl5,
}

impl Size {
    /// 全部尺碼（宣告順序）
    pub const ALL: [Size; 9] = [
        Size::Xs,
        Size::S,
        Size::M,
        Size::L,
        Size::Xl,
        Size::Xl2,
        Size::Xl3,
        Size::Xl4,
        Size::Xl5,
    ];

    /// 顯示標籤
    pub fn label(self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xl2 => "2XL",
            Size::Xl3 => "3XL",
            Size::Xl4 => "4XL",
            Size::Xl5 => "5XL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Size {
    type Err = CutPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XS" => Ok(Size::Xs),
            "S" => Ok(Size::S),
            "M" => Ok(Size::M),
            "L" => Ok(Size::L),
            "XL" => Ok(Size::Xl),
            "2XL" | "XXL" => Ok(Size::Xl2),
            "3XL" | "XXXL" => Ok(Size::Xl3),
            "4XL" => Ok(Size::Xl4),
            "5XL" => Ok(Size::Xl5),
            _ => Err(CutPlanError::UnknownSize(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("XS", Size::Xs)]
    #[case("m", Size::M)]
    #[case(" xl ", Size::Xl)]
    #[case("2XL", Size::Xl2)]
    #[case("xxl", Size::Xl2)]
    #[case("XXXL", Size::Xl3)]
    #[case("5xl", Size::Xl5)]
    fn test_parse_size(#[case] input: &str, #[case] expected: Size) {
        assert_eq!(input.parse::<Size>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_size() {
        let err = "6XL".parse::<Size>().unwrap_err();
        assert!(matches!(err, CutPlanError::UnknownSize(ref s) if s == "6XL"));
    }

    #[test]
    fn test_order_follows_declaration() {
        let mut sizes = vec![Size::Xl5, Size::M, Size::Xs, Size::Xl2];
        sizes.sort();
        assert_eq!(sizes, vec![Size::Xs, Size::M, Size::Xl2, Size::Xl5]);
        assert!(Size::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Size::Xl3).unwrap(), "\"3XL\"");
        let parsed: Size = serde_json::from_str("\"XS\"").unwrap();
        assert_eq!(parsed, Size::Xs);
        assert_eq!(Size::Xl4.to_string(), "4XL");
    }
}
