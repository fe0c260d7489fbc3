//! 可用布料分配（依宣告順序的貪婪分配）

use cutplan_core::{AllocationResult, GarmentProfile, SecondaryMaterial, Size, SizeTable};

/// 布料分配計算器
pub struct AllocationCalculator;

impl AllocationCalculator {
    /// 依款式配置計算可裁件數
    pub fn calculate(
        profile: &GarmentProfile,
        available_fabric: i64,
        selection: &[Size],
    ) -> AllocationResult {
        Self::allocate(
            &profile.fabric,
            profile.secondary.as_ref(),
            available_fabric,
            selection,
        )
    }

    /// 計算可裁件數、用布與剩餘
    ///
    /// 依用量表宣告順序處理勾選尺碼：前面的尺碼先裁滿，後面的尺碼只能用剩下的布。
    /// 每件耗用 = 主布 + 副料。布長不是正整數時回傳空結果。
    pub fn allocate(
        fabric: &SizeTable,
        secondary: Option<&SecondaryMaterial>,
        available_fabric: i64,
        selection: &[Size],
    ) -> AllocationResult {
        if available_fabric <= 0 {
            tracing::debug!("可用布長 {} 非正數，不計算", available_fabric);
            return AllocationResult::empty();
        }

        let available = available_fabric as u64;
        let mut remaining = available;
        let mut result = AllocationResult::empty();

        for (size, base) in fabric.iter() {
            if !selection.contains(&size) {
                continue;
            }

            let per_piece = u64::from(base) + u64::from(secondary.map_or(0, |m| m.length(size)));
            let pieces = remaining / per_piece;

            if pieces > 0 {
                let used = pieces * per_piece;
                remaining -= used;
                result.total_used += used;
                result
                    .production
                    .insert(size, u32::try_from(pieces).unwrap_or(u32::MAX));
            } else {
                result.production.insert(size, 0);
            }

            tracing::debug!(
                "尺碼 {}: 每件 {} cm，裁 {} 件，剩餘 {} cm",
                size,
                per_piece,
                pieces,
                remaining
            );
        }

        result.waste = remaining;

        tracing::debug!(
            "分配完成：可用 {} cm，使用 {} cm，剩餘 {} cm",
            available,
            result.total_used,
            result.waste
        );

        result
    }
}
