//! # Cutplan Core
//!
//! 裁剪計算的資料模型、查表型錄與輸入正規化

pub mod catalog;
pub mod config;
pub mod input;
pub mod reference;
pub mod result;
pub mod selection;
pub mod size;
pub mod table;

// Re-export 主要類型
pub use catalog::{CalculatorKind, FabricType, SleeveType, TopStyle, Variant};
pub use config::GarmentProfile;
pub use reference::{NoteSection, SizeChartRow};
pub use result::{AllocationResult, RequirementResult, SizeRequirement};
pub use selection::{QuantityMap, SelectionSet};
pub use size::Size;
pub use table::{SecondaryKind, SecondaryMaterial, SizeTable};

/// 裁剪計算錯誤類型
///
/// 數值輸入不會產生錯誤；只有文字選項與用量表建構會失敗。
#[derive(Debug, thiserror::Error)]
pub enum CutPlanError {
    #[error("未知的尺碼: {0}")]
    UnknownSize(String),

    #[error("未知的款式: {0}")]
    UnknownStyle(String),

    #[error("未知的計算器: {0}")]
    UnknownCalculator(String),

    #[error("未知的布種: {0}")]
    UnknownFabricType(String),

    #[error("用量表不合法: {0}")]
    InvalidTable(String),
}

pub type Result<T> = std::result::Result<T, CutPlanError>;
