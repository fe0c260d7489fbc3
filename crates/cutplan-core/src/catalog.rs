//! 內建計算器型錄
//!
//! 三個計算器（男裝上衣、T 恤、拉鍊外套）共用同一套引擎，只差在查表資料。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{CutPlanError, GarmentProfile, SecondaryKind, SecondaryMaterial, Size, SizeTable};

/// 男裝上衣每件羅紋（cm）
pub const RIBBING_LENGTH_CM: u32 = 30;

const MENS_CREW: [(Size, u32); 9] = [
    (Size::Xs, 145),
    (Size::S, 145),
    (Size::M, 145),
    (Size::L, 145),
    (Size::Xl, 145),
    (Size::Xl2, 150),
    (Size::Xl3, 155),
    (Size::Xl4, 165),
    (Size::Xl5, 175),
];

const MENS_HOODIE: [(Size, u32); 9] = [
    (Size::Xs, 160),
    (Size::S, 160),
    (Size::M, 160),
    (Size::L, 160),
    (Size::Xl, 160),
    (Size::Xl2, 165),
    (Size::Xl3, 175),
    (Size::Xl4, 185),
    (Size::Xl5, 195),
];

const TSHIRT_SHORT: [(Size, u32); 9] = [
    (Size::Xs, 120),
    (Size::S, 125),
    (Size::M, 130),
    (Size::L, 135),
    (Size::Xl, 140),
    (Size::Xl2, 145),
    (Size::Xl3, 150),
    (Size::Xl4, 160),
    (Size::Xl5, 165),
];

const TSHIRT_LONG: [(Size, u32); 9] = [
    (Size::Xs, 150),
    (Size::S, 155),
    (Size::M, 160),
    (Size::L, 165),
    (Size::Xl, 170),
    (Size::Xl2, 175),
    (Size::Xl3, 185),
    (Size::Xl4, 195),
    (Size::Xl5, 200),
];

const ZIPPER_FABRIC: [(Size, u32); 6] = [
    (Size::S, 200),
    (Size::M, 200),
    (Size::L, 250),
    (Size::Xl, 250),
    (Size::Xl2, 250),
    (Size::Xl3, 250),
];

const ZIPPER_LENGTHS: [(Size, u32); 6] = [
    (Size::S, 55),
    (Size::M, 60),
    (Size::L, 65),
    (Size::Xl, 70),
    (Size::Xl2, 75),
    (Size::Xl3, 80),
];

/// 計算器種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorKind {
    /// 男裝圓領/連帽上衣
    MensTop,
    /// T 恤
    TShirt,
    /// 拉鍊外套
    ZipperTop,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 3] = [
        CalculatorKind::MensTop,
        CalculatorKind::TShirt,
        CalculatorKind::ZipperTop,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CalculatorKind::MensTop => "Men's Crew/Hoodie Top Calculator",
            CalculatorKind::TShirt => "T-Shirt Production Calculator",
            CalculatorKind::ZipperTop => "Zipper Top Calculator",
        }
    }

    /// 開啟計算器時的預設款式
    pub fn default_variant(self) -> Variant {
        match self {
            CalculatorKind::MensTop => Variant::MensTop(TopStyle::Crew),
            CalculatorKind::TShirt => Variant::TShirt(SleeveType::Short),
            CalculatorKind::ZipperTop => Variant::ZipperTop(FabricType::BrushedCotton),
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for CalculatorKind {
    type Err = CutPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mens-top" | "menstop" => Ok(CalculatorKind::MensTop),
            "tshirt" | "t-shirt" => Ok(CalculatorKind::TShirt),
            "zipper-top" | "zippertop" => Ok(CalculatorKind::ZipperTop),
            _ => Err(CutPlanError::UnknownCalculator(s.to_string())),
        }
    }
}

/// 男裝上衣款式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopStyle {
    /// 圓領（Top A）
    Crew,
    /// 連帽（Top B）
    Hoodie,
}

/// T 恤袖型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SleeveType {
    Short,
    Long,
}

/// 拉鍊外套布種（僅顯示用，不影響計算）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FabricType {
    BrushedCotton,
    DoubleKnit,
    Quantex,
    PolarFleece,
    Tricartate,
}

impl FabricType {
    pub const ALL: [FabricType; 5] = [
        FabricType::BrushedCotton,
        FabricType::DoubleKnit,
        FabricType::Quantex,
        FabricType::PolarFleece,
        FabricType::Tricartate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FabricType::BrushedCotton => "Brushed Cotton Knit Tracksuiting",
            FabricType::DoubleKnit => "Double Knit",
            FabricType::Quantex => "Quantex",
            FabricType::PolarFleece => "Polar Fleece",
            FabricType::Tricartate => "Tricartate",
        }
    }
}

impl FromStr for FabricType {
    type Err = CutPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "brushed_cotton" => Ok(FabricType::BrushedCotton),
            "double_knit" => Ok(FabricType::DoubleKnit),
            "quantex" => Ok(FabricType::Quantex),
            "polar_fleece" => Ok(FabricType::PolarFleece),
            "tricartate" => Ok(FabricType::Tricartate),
            _ => Err(CutPlanError::UnknownFabricType(s.to_string())),
        }
    }
}

/// 計算器 + 款式選擇
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    MensTop(TopStyle),
    TShirt(SleeveType),
    ZipperTop(FabricType),
}

impl Variant {
    /// 依計算器解析款式字串
    ///
    /// 男裝上衣接受 `crew` / `hoodie`，T 恤接受 `short` / `long`，
    /// 拉鍊外套接受布種名稱。
    pub fn parse(kind: CalculatorKind, style: &str) -> crate::Result<Self> {
        let normalized = style.trim().to_ascii_lowercase();
        match kind {
            CalculatorKind::MensTop => match normalized.as_str() {
                "crew" => Ok(Variant::MensTop(TopStyle::Crew)),
                "hoodie" => Ok(Variant::MensTop(TopStyle::Hoodie)),
                _ => Err(CutPlanError::UnknownStyle(style.to_string())),
            },
            CalculatorKind::TShirt => match normalized.as_str() {
                "short" => Ok(Variant::TShirt(SleeveType::Short)),
                "long" => Ok(Variant::TShirt(SleeveType::Long)),
                _ => Err(CutPlanError::UnknownStyle(style.to_string())),
            },
            CalculatorKind::ZipperTop => Ok(Variant::ZipperTop(style.parse()?)),
        }
    }

    pub fn kind(self) -> CalculatorKind {
        match self {
            Variant::MensTop(_) => CalculatorKind::MensTop,
            Variant::TShirt(_) => CalculatorKind::TShirt,
            Variant::ZipperTop(_) => CalculatorKind::ZipperTop,
        }
    }

    /// 款式顯示名稱
    pub fn label(self) -> &'static str {
        match self {
            Variant::MensTop(TopStyle::Crew) => "Crew Neck (Top A)",
            Variant::MensTop(TopStyle::Hoodie) => "Hoodie (Top B)",
            Variant::TShirt(SleeveType::Short) => "Short Sleeves",
            Variant::TShirt(SleeveType::Long) => "Long Sleeves",
            Variant::ZipperTop(fabric) => fabric.label(),
        }
    }

    /// 建立此款式的用量配置
    pub fn profile(self) -> GarmentProfile {
        match self {
            Variant::MensTop(style) => {
                let fabric = match style {
                    TopStyle::Crew => &MENS_CREW,
                    TopStyle::Hoodie => &MENS_HOODIE,
                };
                let ribbing = SecondaryMaterial::new(
                    SecondaryKind::Ribbing,
                    SizeTable::from_static(
                        &Size::ALL.map(|s| (s, RIBBING_LENGTH_CM)),
                    ),
                );
                GarmentProfile::new(self.label(), SizeTable::from_static(fabric))
                    .with_secondary(ribbing)
                    .with_fabric_width(140)
            }
            Variant::TShirt(sleeve) => {
                let fabric = match sleeve {
                    SleeveType::Short => &TSHIRT_SHORT,
                    SleeveType::Long => &TSHIRT_LONG,
                };
                GarmentProfile::new(self.label(), SizeTable::from_static(fabric))
                    .with_fabric_width(150)
            }
            Variant::ZipperTop(_) => GarmentProfile::new(
                CalculatorKind::ZipperTop.title(),
                SizeTable::from_static(&ZIPPER_FABRIC),
            )
            .with_secondary(SecondaryMaterial::zipper(SizeTable::from_static(
                &ZIPPER_LENGTHS,
            )))
            .with_fabric_width(150),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
