//! # Cutplan Calculation Engine
//!
//! 布料分配與用料需求計算引擎。三個計算器共用同一組函式，只換查表資料。

pub mod allocation;
pub mod efficiency;
pub mod requirement;
pub mod session;

// Re-export 主要類型
pub use allocation::AllocationCalculator;
pub use efficiency::efficiency_percent;
pub use requirement::RequirementCalculator;
pub use session::{CalculationMode, CalculatorSession};

use cutplan_core::{
    AllocationResult, QuantityMap, RequirementResult, SecondaryMaterial, Size, SizeTable,
};

/// 可用布料 → 各尺碼可裁件數
///
/// `available_fabric` 非正數時回傳空結果。
pub fn compute_allocation(
    fabric: &SizeTable,
    secondary: Option<&SecondaryMaterial>,
    available_fabric: i64,
    selection: &[Size],
) -> AllocationResult {
    let result = AllocationCalculator::allocate(fabric, secondary, available_fabric, selection);
    tracing::info!(
        "布料分配：可用 {} cm，共 {} 件，剩餘 {} cm",
        available_fabric.max(0),
        result.total_pieces(),
        result.waste
    );
    result
}

/// 需求數量 → 所需主布與副料
pub fn compute_requirement(
    fabric: &SizeTable,
    secondary: Option<&SecondaryMaterial>,
    quantities: &QuantityMap,
) -> RequirementResult {
    let result = RequirementCalculator::aggregate(fabric, secondary, quantities);
    tracing::info!(
        "用料需求：共 {} 件，合計 {} cm（{} m）",
        quantities.total_pieces(),
        result.total_required(),
        result.meters()
    );
    result
}
