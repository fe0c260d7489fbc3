//! 款式用量配置

use serde::{Deserialize, Serialize};

use crate::{SecondaryMaterial, Size, SizeTable};

/// 款式用量配置（不可變）
///
/// 一個計算器在選定款式後的全部查表資料：主布用量、可選副料、布幅。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarmentProfile {
    /// 款式名稱
    pub name: String,

    /// 主布用量表
    pub fabric: SizeTable,

    /// 副料（羅紋或拉鍊）
    pub secondary: Option<SecondaryMaterial>,

    /// 假設布幅（cm），僅供顯示
    pub fabric_width_cm: u32,
}

impl GarmentProfile {
    /// 創建新的款式配置
    pub fn new(name: impl Into<String>, fabric: SizeTable) -> Self {
        Self {
            name: name.into(),
            fabric,
            secondary: None,
            fabric_width_cm: 150,
        }
    }

    /// 建構器模式：設置副料
    pub fn with_secondary(mut self, secondary: SecondaryMaterial) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// 建構器模式：設置布幅
    pub fn with_fabric_width(mut self, width_cm: u32) -> Self {
        self.fabric_width_cm = width_cm;
        self
    }

    /// 可選尺碼（宣告順序）
    pub fn sizes(&self) -> Vec<Size> {
        self.fabric.sizes()
    }

    /// 主布每件用量
    pub fn base_length(&self, size: Size) -> Option<u32> {
        self.fabric.get(size)
    }

    /// 副料每件用量，無副料時為 0
    pub fn secondary_length(&self, size: Size) -> u32 {
        self.secondary.as_ref().map_or(0, |m| m.length(size))
    }

    /// 每件總耗用 = 主布 + 副料
    pub fn per_piece_cost(&self, size: Size) -> Option<u64> {
        self.base_length(size)
            .map(|base| u64::from(base) + u64::from(self.secondary_length(size)))
    }
}
