//! # Cutplan
//!
//! 成衣裁剪用布計算：可用布料 → 可裁件數，需求數量 → 所需用料

pub use cutplan_calc::{
    compute_allocation, compute_requirement, efficiency_percent, AllocationCalculator,
    CalculationMode, CalculatorSession, RequirementCalculator,
};
pub use cutplan_core::{
    input, reference, AllocationResult, CalculatorKind, CutPlanError, FabricType, GarmentProfile,
    QuantityMap, RequirementResult, SecondaryKind, SecondaryMaterial, SelectionSet, Size,
    SizeRequirement, SizeTable, SleeveType, TopStyle, Variant,
};
