//! 所需用料計算

use cutplan_core::{
    GarmentProfile, QuantityMap, RequirementResult, SecondaryMaterial, SizeRequirement, SizeTable,
};

/// 用料需求計算器
pub struct RequirementCalculator;

impl RequirementCalculator {
    /// 依款式配置計算用料
    pub fn calculate(profile: &GarmentProfile, quantities: &QuantityMap) -> RequirementResult {
        Self::aggregate(&profile.fabric, profile.secondary.as_ref(), quantities)
    }

    /// 彙總各尺碼主布與副料
    ///
    /// 數量為 0 的尺碼不列入明細；用量表沒有的尺碼略過。
    pub fn aggregate(
        fabric: &SizeTable,
        secondary: Option<&SecondaryMaterial>,
        quantities: &QuantityMap,
    ) -> RequirementResult {
        let mut result = RequirementResult {
            secondary_kind: secondary.map(|m| m.kind),
            ..RequirementResult::default()
        };

        for (size, base) in fabric.iter() {
            let quantity = quantities.get(size);
            if quantity == 0 {
                continue;
            }

            let main = u64::from(base) * u64::from(quantity);
            let secondary_cm =
                u64::from(secondary.map_or(0, |m| m.length(size))) * u64::from(quantity);

            result.total_fabric += main;
            result.total_secondary += secondary_cm;
            result.breakdown.insert(
                size,
                SizeRequirement {
                    quantity,
                    main,
                    secondary: secondary_cm,
                    total: main + secondary_cm,
                },
            );
        }

        tracing::debug!(
            "用料彙總：{} 個尺碼，主布 {} cm，副料 {} cm",
            result.breakdown.len(),
            result.total_fabric,
            result.total_secondary
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutplan_core::{FabricType, SecondaryKind, Size, SleeveType, TopStyle, Variant};

    #[test]
    fn test_zipper_top_requirement() {
        let profile = Variant::ZipperTop(FabricType::BrushedCotton).profile();
        let quantities: QuantityMap = [(Size::M, 3)].into_iter().collect();

        let result = RequirementCalculator::calculate(&profile, &quantities);

        let medium = result.breakdown[&Size::M];
        assert_eq!(medium.main, 600);
        assert_eq!(medium.secondary, 180);
        assert_eq!(medium.total, 780);
        assert_eq!(result.total_fabric, 600);
        assert_eq!(result.total_secondary, 180);
        assert_eq!(result.secondary_kind, Some(SecondaryKind::Zipper));
        assert_eq!(result.meters().to_string(), "6.00");
    }

    #[test]
    fn test_mens_top_requirement_with_ribbing() {
        let profile = Variant::MensTop(TopStyle::Hoodie).profile();
        let mut quantities = QuantityMap::new(&profile.sizes());
        quantities.set(Size::S, 2);
        quantities.set(Size::Xl5, 1);

        let result = RequirementCalculator::calculate(&profile, &quantities);

        // S: 160×2 + 30×2；5XL: 195 + 30
        assert_eq!(result.total_fabric, 515);
        assert_eq!(result.total_secondary, 90);
        assert_eq!(result.total_required(), 605);
        assert_eq!(result.meters().to_string(), "6.05");
    }

    #[test]
    fn test_zero_quantities_excluded() {
        let profile = Variant::TShirt(SleeveType::Long).profile();
        let mut quantities = QuantityMap::new(&profile.sizes());
        quantities.set(Size::L, 4);

        let result = RequirementCalculator::calculate(&profile, &quantities);

        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[&Size::L].main, 660);
        assert_eq!(result.breakdown[&Size::L].secondary, 0);
        assert_eq!(result.secondary_kind, None);
    }

    #[test]
    fn test_all_zero_is_empty() {
        let profile = Variant::TShirt(SleeveType::Short).profile();
        let result = RequirementCalculator::calculate(&profile, &QuantityMap::new(&profile.sizes()));
        assert!(result.breakdown.is_empty());
        assert_eq!(result.total_required(), 0);
    }
}
