//! 計算器表單工作階段
//!
//! 保存單一計算器的暫存表單狀態；每次輸入變更後重新計算兩個結果。

use cutplan_core::{
    input, AllocationResult, CalculatorKind, GarmentProfile, QuantityMap, RequirementResult,
    SelectionSet, Size, Variant,
};
use serde::{Deserialize, Serialize};

use crate::allocation::AllocationCalculator;
use crate::efficiency::efficiency_percent;
use crate::requirement::RequirementCalculator;

/// 計算模式（分頁）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationMode {
    /// 可用布料 → 可裁件數
    #[default]
    AvailableFabric,
    /// 需求數量 → 所需用料
    RequiredFabric,
}

/// 計算器工作階段
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    variant: Variant,
    profile: GarmentProfile,
    mode: CalculationMode,
    fabric_input: String,
    selection: SelectionSet,
    quantities: QuantityMap,
    allocation: AllocationResult,
    requirement: RequirementResult,
}

impl CalculatorSession {
    /// 以計算器預設款式開啟
    pub fn new(kind: CalculatorKind) -> Self {
        Self::with_variant(kind.default_variant())
    }

    pub fn with_variant(variant: Variant) -> Self {
        let profile = variant.profile();
        let sizes = profile.sizes();
        let mut session = Self {
            variant,
            selection: SelectionSet::new(sizes.clone()),
            quantities: QuantityMap::new(&sizes),
            profile,
            mode: CalculationMode::default(),
            fabric_input: String::new(),
            allocation: AllocationResult::empty(),
            requirement: RequirementResult::default(),
        };
        session.recompute();
        session
    }

    /// 切換款式：重建尺碼範圍，清空勾選與數量
    ///
    /// 不同計算器的款式不接受，回傳 false。
    pub fn switch_variant(&mut self, variant: Variant) -> bool {
        if variant.kind() != self.variant.kind() {
            tracing::warn!(
                "款式 {} 不屬於 {}，忽略切換",
                variant,
                self.variant.kind()
            );
            return false;
        }

        tracing::debug!("切換款式 {} → {}，重設勾選與數量", self.variant, variant);

        self.variant = variant;
        self.profile = variant.profile();
        let sizes = self.profile.sizes();
        self.selection = SelectionSet::new(sizes.clone());
        self.quantities = QuantityMap::new(&sizes);
        self.recompute();
        true
    }

    pub fn set_mode(&mut self, mode: CalculationMode) {
        self.mode = mode;
    }

    /// 更新可用布長原始輸入
    pub fn set_fabric_length(&mut self, raw: &str) {
        self.fabric_input = raw.to_string();
        self.recompute();
    }

    /// 切換尺碼勾選，款式沒有此尺碼時回傳 `None`
    pub fn toggle_size(&mut self, size: Size) -> Option<bool> {
        let checked = self.selection.toggle(size);
        self.recompute();
        checked
    }

    pub fn set_size_selected(&mut self, size: Size, checked: bool) {
        self.selection.set(size, checked);
        self.recompute();
    }

    /// 更新需求數量（負值或非數字視為 0）
    pub fn set_quantity(&mut self, size: Size, raw: &str) {
        self.quantities.set_raw(size, raw);
        self.recompute();
    }

    fn recompute(&mut self) {
        let available = input::parse_length(&self.fabric_input).unwrap_or(0);
        self.allocation =
            AllocationCalculator::calculate(&self.profile, available, &self.selection.selected());
        self.requirement = RequirementCalculator::calculate(&self.profile, &self.quantities);
    }

    /// 可用布長；未輸入或非正數為 None
    pub fn available_fabric(&self) -> Option<u64> {
        input::available_fabric(&self.fabric_input)
    }

    /// 用布效率（%）
    pub fn efficiency(&self) -> u32 {
        efficiency_percent(self.allocation.total_used, self.available_fabric().unwrap_or(0))
    }

    pub fn allocation(&self) -> &AllocationResult {
        &self.allocation
    }

    pub fn requirement(&self) -> &RequirementResult {
        &self.requirement
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn profile(&self) -> &GarmentProfile {
        &self.profile
    }

    pub fn mode(&self) -> CalculationMode {
        self.mode
    }

    pub fn fabric_input(&self) -> &str {
        &self.fabric_input
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn quantities(&self) -> &QuantityMap {
        &self.quantities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutplan_core::{FabricType, SleeveType, TopStyle};

    #[test]
    fn test_new_session_defaults() {
        let session = CalculatorSession::new(CalculatorKind::MensTop);

        assert_eq!(session.variant(), Variant::MensTop(TopStyle::Crew));
        assert_eq!(session.mode(), CalculationMode::AvailableFabric);
        assert!(session.selection().is_empty());
        assert_eq!(session.quantities().total_pieces(), 0);
        assert_eq!(session.allocation(), &AllocationResult::empty());
        assert_eq!(session.efficiency(), 0);
    }

    #[test]
    fn test_recompute_on_every_change() {
        let mut session = CalculatorSession::new(CalculatorKind::MensTop);
        session.set_fabric_length("500");
        assert!(session.allocation().production.is_empty());
        assert_eq!(session.allocation().waste, 500);

        session.toggle_size(Size::M);
        assert_eq!(session.allocation().production.get(&Size::M), Some(&2));
        assert_eq!(session.allocation().waste, 150);
        assert_eq!(session.efficiency(), 70);

        session.set_quantity(Size::L, "2");
        assert_eq!(session.requirement().total_fabric, 290);
        assert_eq!(session.requirement().total_secondary, 60);
    }

    #[test]
    fn test_invalid_fabric_length() {
        let mut session = CalculatorSession::new(CalculatorKind::TShirt);
        session.toggle_size(Size::M);

        for raw in ["", "abc", "0", "-100"] {
            session.set_fabric_length(raw);
            assert_eq!(session.allocation(), &AllocationResult::empty());
            assert_eq!(session.available_fabric(), None);
            assert_eq!(session.efficiency(), 0);
        }
    }

    #[test]
    fn test_switch_variant_resets_state() {
        let mut session = CalculatorSession::new(CalculatorKind::TShirt);
        session.set_fabric_length("1000");
        session.toggle_size(Size::Xl);
        session.set_quantity(Size::S, "5");

        assert!(session.switch_variant(Variant::TShirt(SleeveType::Long)));

        assert!(session.selection().is_empty());
        assert_eq!(session.quantities().total_pieces(), 0);
        assert!(session.allocation().production.is_empty());
        assert!(session.requirement().breakdown.is_empty());
        assert_eq!(session.fabric_input(), "1000");
    }

    #[test]
    fn test_switch_to_foreign_variant_is_rejected() {
        let mut session = CalculatorSession::new(CalculatorKind::ZipperTop);
        session.toggle_size(Size::M);

        assert!(!session.switch_variant(Variant::MensTop(TopStyle::Hoodie)));
        assert!(session.selection().is_selected(Size::M));

        assert!(session.switch_variant(Variant::ZipperTop(FabricType::Tricartate)));
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_zipper_session_ignores_missing_sizes() {
        let mut session = CalculatorSession::new(CalculatorKind::ZipperTop);
        session.set_quantity(Size::Xs, "4");
        assert_eq!(session.quantities().get(Size::Xs), 0);
        assert_eq!(session.toggle_size(Size::Xl5), None);
        assert!(session.selection().is_empty());
        assert_eq!(session.toggle_size(Size::M), Some(true));
        assert_eq!(session.toggle_size(Size::M), Some(false));
    }
}
