//! 計算結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{SecondaryKind, Size};

/// 可用布料分配結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// 各勾選尺碼可裁件數（未勾選尺碼不出現；勾選但裁不出為 0）
    pub production: BTreeMap<Size, u32>,

    /// 已使用布長（cm）
    pub total_used: u64,

    /// 剩餘布長（cm）
    pub waste: u64,
}

impl AllocationResult {
    /// 未計算（布長無效）時的空結果
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn total_pieces(&self) -> u64 {
        self.production.values().map(|&p| u64::from(p)).sum()
    }

    /// 原始可用布長
    pub fn available(&self) -> u64 {
        self.total_used + self.waste
    }
}

/// 單一尺碼的用料明細
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRequirement {
    /// 件數
    pub quantity: u32,
    /// 主布（cm）
    pub main: u64,
    /// 副料（cm）
    pub secondary: u64,
    /// 合計（cm）
    pub total: u64,
}

/// 所需用料結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementResult {
    /// 主布合計（cm）
    pub total_fabric: u64,

    /// 副料合計（cm）
    pub total_secondary: u64,

    /// 數量 > 0 的尺碼明細
    pub breakdown: BTreeMap<Size, SizeRequirement>,

    /// 副料種類（無副料時為 None）
    pub secondary_kind: Option<SecondaryKind>,
}

impl RequirementResult {
    /// 主布 + 副料（cm）
    pub fn total_required(&self) -> u64 {
        self.total_fabric + self.total_secondary
    }

    /// 需向布商訂購的布長（cm）：主布加上布料類副料
    pub fn fabric_to_order(&self) -> u64 {
        match self.secondary_kind {
            Some(kind) if kind.is_fabric() => self.total_required(),
            _ => self.total_fabric,
        }
    }

    /// 布長換算為米，保留兩位小數
    pub fn meters(&self) -> Decimal {
        let cm = i64::try_from(self.fabric_to_order()).unwrap_or(i64::MAX);
        Decimal::new(cm, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement(kind: Option<SecondaryKind>, fabric: u64, secondary: u64) -> RequirementResult {
        RequirementResult {
            total_fabric: fabric,
            total_secondary: secondary,
            breakdown: BTreeMap::new(),
            secondary_kind: kind,
        }
    }

    #[test]
    fn test_meters_include_ribbing() {
        let result = requirement(Some(SecondaryKind::Ribbing), 290, 60);
        assert_eq!(result.total_required(), 350);
        assert_eq!(result.meters().to_string(), "3.50");
    }

    #[test]
    fn test_meters_exclude_zipper() {
        let result = requirement(Some(SecondaryKind::Zipper), 600, 180);
        assert_eq!(result.total_required(), 780);
        assert_eq!(result.meters().to_string(), "6.00");
    }

    #[test]
    fn test_empty_requirement() {
        let result = requirement(None, 0, 0);
        assert_eq!(result.meters(), Decimal::ZERO);
        assert_eq!(result.meters().to_string(), "0.00");
    }

    #[test]
    fn test_allocation_available_is_used_plus_waste() {
        let mut result = AllocationResult::empty();
        result.production.insert(Size::M, 2);
        result.total_used = 350;
        result.waste = 150;
        assert_eq!(result.available(), 500);
        assert_eq!(result.total_pieces(), 2);
    }
}
