//! 用布效率

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// 效率百分比 = round(已使用 / 可用 × 100)
///
/// 可用布長為 0 時回傳 0；.5 進位。
pub fn efficiency_percent(total_used: u64, available_fabric: u64) -> u32 {
    if available_fabric == 0 {
        return 0;
    }

    let ratio = Decimal::from(total_used) * Decimal::ONE_HUNDRED / Decimal::from(available_fabric);
    ratio
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(u32::MAX)
}
