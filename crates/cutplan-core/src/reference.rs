//! 靜態參考資料：尺寸表、製作注意事項
//!
//! 只供呈現層顯示，不參與任何計算。

use serde::Serialize;

use crate::{CalculatorKind, Size};

/// 尺寸表一列（cm，可能是範圍字串）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeChartRow {
    pub size: Size,
    pub chest: &'static str,
    pub waist: &'static str,
    pub hip: Option<&'static str>,
}

const fn row(
    size: Size,
    chest: &'static str,
    waist: &'static str,
    hip: Option<&'static str>,
) -> SizeChartRow {
    SizeChartRow {
        size,
        chest,
        waist,
        hip,
    }
}

static MENS_TOP_CHART: [SizeChartRow; 9] = [
    row(Size::Xs, "105", "125", Some("105")),
    row(Size::S, "110", "130", Some("110")),
    row(Size::M, "115", "135", Some("115")),
    row(Size::L, "120", "140", Some("120")),
    row(Size::Xl, "125", "145", Some("125")),
    row(Size::Xl2, "130", "150", Some("130")),
    row(Size::Xl3, "135", "155", Some("135")),
    row(Size::Xl4, "140", "160", Some("140")),
    row(Size::Xl5, "145", "165", Some("145")),
];

static ZIPPER_TOP_CHART: [SizeChartRow; 6] = [
    row(Size::S, "82-87", "71-77", None),
    row(Size::M, "92-97", "82-87", None),
    row(Size::L, "102-107", "92-97", None),
    row(Size::Xl, "112-117", "102-107", None),
    row(Size::Xl2, "122-127", "112-117", None),
    row(Size::Xl3, "132-137", "122-127", None),
];

/// 計算器的尺寸表；T 恤無尺寸表
pub fn size_chart(kind: CalculatorKind) -> &'static [SizeChartRow] {
    match kind {
        CalculatorKind::MensTop => &MENS_TOP_CHART,
        CalculatorKind::TShirt => &[],
        CalculatorKind::ZipperTop => &ZIPPER_TOP_CHART,
    }
}

/// 注意事項分組
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoteSection {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

static MENS_TOP_NOTES: [NoteSection; 1] = [NoteSection {
    title: "Important Notes",
    items: &[
        "All measurements assume 140cm fabric width",
        "Each size requires 30cm additional ribbing",
        "Use two-way stretch fabric for optimal fit",
        "Recommended needle size: US 8 (5 mm)",
        "Consider ordering 10% extra fabric for pattern matching",
        "Ensure proper topstitching and seam alignment",
    ],
}];

static TSHIRT_NOTES: [NoteSection; 1] = [NoteSection {
    title: "Important Notes",
    items: &[
        "Calculations assume 150cm fabric width",
        "Each size includes 10cm ribbing requirement",
        "Additional fabric may be needed for pattern matching",
        "Consider ordering 10% extra for safety margin",
    ],
}];

static ZIPPER_TOP_NOTES: [NoteSection; 3] = [
    NoteSection {
        title: "Recommended Fabrics",
        items: &[
            "Brushed cotton knit tracksuiting",
            "Double knit",
            "Quantex",
            "Polar fleeces",
            "Tricartate",
        ],
    },
    NoteSection {
        title: "Recommended Needles",
        items: &[
            "Ballpoint needles for over-locking/serging machines",
            "4mm twin needles for decorative top stitching",
            "Universal needles for woven fabrics like Quantex",
        ],
    },
    NoteSection {
        title: "Important Notes",
        items: &[
            "Calculations assume 150cm fabric width",
            "Consider ordering 10% extra fabric for safety margin",
            "Double-check zipper lengths against your pattern",
            "Use the best quality fabric you can afford",
        ],
    },
];

pub fn notes(kind: CalculatorKind) -> &'static [NoteSection] {
    match kind {
        CalculatorKind::MensTop => &MENS_TOP_NOTES,
        CalculatorKind::TShirt => &TSHIRT_NOTES,
        CalculatorKind::ZipperTop => &ZIPPER_TOP_NOTES,
    }
}
