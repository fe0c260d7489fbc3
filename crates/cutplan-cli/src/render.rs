//! 結果呈現（文字與 JSON）

use std::fmt::Write;

use cutplan_calc::{CalculationMode, CalculatorSession};
use cutplan_core::{
    reference, AllocationResult, GarmentProfile, NoteSection, RequirementResult, SecondaryKind,
    SizeChartRow, Variant,
};
use serde::Serialize;

/// 工作階段 JSON 報表
#[derive(Debug, Serialize)]
pub struct SessionReport<'a> {
    pub calculator: &'static str,
    pub style: &'static str,
    pub mode: CalculationMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<AllocationReport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<RequirementReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct AllocationReport<'a> {
    pub available: Option<u64>,
    pub efficiency_percent: u32,
    #[serde(flatten)]
    pub result: &'a AllocationResult,
}

#[derive(Debug, Serialize)]
pub struct RequirementReport<'a> {
    pub total_required: u64,
    pub meters: String,
    #[serde(flatten)]
    pub result: &'a RequirementResult,
}

impl<'a> SessionReport<'a> {
    pub fn new(session: &'a CalculatorSession) -> Self {
        let variant = session.variant();
        let (allocation, requirement) = match session.mode() {
            CalculationMode::AvailableFabric => (
                Some(AllocationReport {
                    available: session.available_fabric(),
                    efficiency_percent: session.efficiency(),
                    result: session.allocation(),
                }),
                None,
            ),
            CalculationMode::RequiredFabric => (
                None,
                Some(RequirementReport {
                    total_required: session.requirement().total_required(),
                    meters: session.requirement().meters().to_string(),
                    result: session.requirement(),
                }),
            ),
        };

        Self {
            calculator: variant.kind().title(),
            style: variant.label(),
            mode: session.mode(),
            allocation,
            requirement,
        }
    }
}

/// 參考資料 JSON 報表
#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub calculator: &'static str,
    pub style: &'static str,
    pub profile: GarmentProfile,
    pub size_chart: &'static [SizeChartRow],
    pub notes: &'static [NoteSection],
}

impl InfoReport {
    pub fn new(variant: Variant) -> Self {
        Self {
            calculator: variant.kind().title(),
            style: variant.label(),
            profile: variant.profile(),
            size_chart: reference::size_chart(variant.kind()),
            notes: reference::notes(variant.kind()),
        }
    }
}

/// 工作階段文字輸出
pub fn session(session: &CalculatorSession) -> String {
    let mut out = String::new();
    let variant = session.variant();
    let _ = writeln!(out, "=== {} ===", variant.kind().title());
    let _ = writeln!(out, "款式: {}\n", variant.label());

    match session.mode() {
        CalculationMode::AvailableFabric => allocation(&mut out, session),
        CalculationMode::RequiredFabric => requirement(&mut out, session),
    }

    out
}

fn secondary_label(profile: &GarmentProfile) -> Option<&'static str> {
    profile.secondary.as_ref().map(|m| m.kind.label())
}

fn allocation(out: &mut String, session: &CalculatorSession) {
    let Some(available) = session.available_fabric() else {
        let _ = writeln!(out, "請輸入正整數的可用布長（cm）");
        return;
    };

    let profile = session.profile();
    let result = session.allocation();

    if result.production.is_empty() {
        let _ = writeln!(out, "未勾選任何尺碼");
    }

    for (&size, &pieces) in &result.production {
        let base = profile.base_length(size).unwrap_or(0);
        let _ = writeln!(out, "尺碼 {:<4} {:>5} 件", size, pieces);
        let _ = writeln!(out, "    主布: {} cm", u64::from(pieces) * u64::from(base));
        match profile.secondary.as_ref().map(|m| m.kind) {
            Some(SecondaryKind::Ribbing) => {
                let _ = writeln!(
                    out,
                    "    羅紋: {} cm",
                    u64::from(pieces) * u64::from(profile.secondary_length(size))
                );
            }
            Some(SecondaryKind::Zipper) => {
                let _ = writeln!(out, "    拉鍊: 每件 {} cm", profile.secondary_length(size));
            }
            None => {}
        }
    }

    let _ = writeln!(out, "\n--- 用料分析 ---");
    let _ = writeln!(out, "可用布長: {} cm", available);
    let _ = writeln!(out, "已使用:   {} cm", result.total_used);
    let _ = writeln!(out, "剩餘:     {} cm", result.waste);
    let _ = writeln!(out, "效率:     {}%", session.efficiency());
}

fn requirement(out: &mut String, session: &CalculatorSession) {
    let result = session.requirement();
    let secondary = secondary_label(session.profile());

    if result.breakdown.is_empty() {
        let _ = writeln!(out, "所有尺碼數量皆為 0");
    }

    for (size, item) in &result.breakdown {
        let _ = writeln!(out, "尺碼 {} （{} 件）: 合計 {} cm", size, item.quantity, item.total);
        let _ = writeln!(out, "    主布: {} cm", item.main);
        if let Some(label) = secondary {
            let _ = writeln!(out, "    {}: {} cm", label, item.secondary);
        }
    }

    let _ = writeln!(out, "\n--- 用料需求 ---");
    let _ = writeln!(out, "主布合計: {} cm", result.total_fabric);
    if let Some(label) = secondary {
        let _ = writeln!(out, "{}合計: {} cm", label, result.total_secondary);
        let _ = writeln!(out, "總計:     {} cm", result.total_required());
    }
    let _ = writeln!(out, "換算:     {} m", result.meters());
}

/// 參考資料文字輸出
pub fn info(variant: Variant) -> String {
    let mut out = String::new();
    let profile = variant.profile();
    let kind = variant.kind();

    let _ = writeln!(out, "=== {} ===", kind.title());
    let _ = writeln!(out, "款式: {}（布幅 {} cm）\n", variant.label(), profile.fabric_width_cm);

    let _ = writeln!(out, "--- 每件用量 (cm) ---");
    for (size, base) in profile.fabric.iter() {
        match secondary_label(&profile) {
            Some(label) => {
                let _ = writeln!(
                    out,
                    "{:<4} 主布 {:>4}  {} {:>3}",
                    size,
                    base,
                    label,
                    profile.secondary_length(size)
                );
            }
            None => {
                let _ = writeln!(out, "{:<4} 主布 {:>4}", size, base);
            }
        }
    }

    let chart = reference::size_chart(kind);
    if !chart.is_empty() {
        let _ = writeln!(out, "\n--- 尺寸表 (cm) ---");
        for row in chart {
            let _ = write!(out, "{:<4} 胸圍 {:>8}  腰圍 {:>8}", row.size, row.chest, row.waist);
            if let Some(hip) = row.hip {
                let _ = write!(out, "  臀圍 {:>4}", hip);
            }
            out.push('\n');
        }
    }

    for section in reference::notes(kind) {
        let _ = writeln!(out, "\n--- {} ---", section.title);
        for item in section.items {
            let _ = writeln!(out, "• {}", item);
        }
    }

    out
}
