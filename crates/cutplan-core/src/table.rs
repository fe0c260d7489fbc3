//! 尺碼用量表

use serde::{Deserialize, Serialize};

use crate::{CutPlanError, Size};

/// 尺碼 → 每件用量（cm）
///
/// 條目保持宣告順序；同一尺碼只能出現一次，用量必須為正。
/// 反序列化同樣經過 `try_new` 驗證。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSizeTable")]
pub struct SizeTable {
    entries: Vec<(Size, u32)>,
}

/// 未驗證的序列化形式
#[derive(Deserialize)]
struct RawSizeTable {
    entries: Vec<(Size, u32)>,
}

impl TryFrom<RawSizeTable> for SizeTable {
    type Error = CutPlanError;

    fn try_from(raw: RawSizeTable) -> crate::Result<Self> {
        Self::try_new(raw.entries)
    }
}

impl SizeTable {
    /// 建立用量表並驗證條目
    pub fn try_new(entries: Vec<(Size, u32)>) -> crate::Result<Self> {
        if entries.is_empty() {
            return Err(CutPlanError::InvalidTable("用量表不可為空".to_string()));
        }

        for (idx, (size, length)) in entries.iter().enumerate() {
            if *length == 0 {
                return Err(CutPlanError::InvalidTable(format!(
                    "尺碼 {} 的用量必須大於 0",
                    size
                )));
            }
            if entries[..idx].iter().any(|(s, _)| s == size) {
                return Err(CutPlanError::InvalidTable(format!("尺碼 {} 重複", size)));
            }
        }

        Ok(Self { entries })
    }

    /// 內建型錄使用，條目由單元測試保證合法
    pub(crate) fn from_static(entries: &[(Size, u32)]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }

    /// 所有尺碼使用同一用量
    pub fn uniform(sizes: &[Size], length: u32) -> crate::Result<Self> {
        Self::try_new(sizes.iter().map(|&s| (s, length)).collect())
    }

    /// 查詢尺碼用量
    pub fn get(&self, size: Size) -> Option<u32> {
        self.entries
            .iter()
            .find(|(s, _)| *s == size)
            .map(|(_, length)| *length)
    }

    pub fn contains(&self, size: Size) -> bool {
        self.get(size).is_some()
    }

    /// 尺碼（宣告順序）
    pub fn sizes(&self) -> Vec<Size> {
        self.entries.iter().map(|(s, _)| *s).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Size, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 副料種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecondaryKind {
    /// 羅紋（與主布同卷裁出）
    Ribbing,
    /// 拉鍊（五金輔料）
    Zipper,
}

impl SecondaryKind {
    /// 是否屬於布料（計入米數換算）
    pub fn is_fabric(self) -> bool {
        matches!(self, SecondaryKind::Ribbing)
    }

    pub fn label(self) -> &'static str {
        match self {
            SecondaryKind::Ribbing => "羅紋",
            SecondaryKind::Zipper => "拉鍊",
        }
    }
}

/// 副料用量表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryMaterial {
    pub kind: SecondaryKind,
    pub lengths: SizeTable,
}

impl SecondaryMaterial {
    pub fn new(kind: SecondaryKind, lengths: SizeTable) -> Self {
        Self { kind, lengths }
    }

    /// 固定長度羅紋
    pub fn ribbing(sizes: &[Size], length_cm: u32) -> crate::Result<Self> {
        Ok(Self::new(
            SecondaryKind::Ribbing,
            SizeTable::uniform(sizes, length_cm)?,
        ))
    }

    /// 各尺碼拉鍊長度
    pub fn zipper(lengths: SizeTable) -> Self {
        Self::new(SecondaryKind::Zipper, lengths)
    }

    /// 查詢副料長度，未列出的尺碼視為 0
    pub fn length(&self, size: Size) -> u32 {
        self.lengths.get(size).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_keeps_declaration_order() {
        let table = SizeTable::try_new(vec![(Size::L, 250), (Size::S, 200)]).unwrap();
        assert_eq!(table.sizes(), vec![Size::L, Size::S]);
        assert_eq!(table.get(Size::S), Some(200));
        assert_eq!(table.get(Size::M), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_table_rejects_duplicates() {
        let err = SizeTable::try_new(vec![(Size::M, 100), (Size::M, 120)]).unwrap_err();
        assert!(matches!(err, CutPlanError::InvalidTable(_)));
    }

    #[test]
    fn test_table_rejects_zero_length() {
        assert!(SizeTable::try_new(vec![(Size::M, 0)]).is_err());
        assert!(SizeTable::try_new(Vec::new()).is_err());
    }

    #[test]
    fn test_deserialize_rejects_invalid_table() {
        let zero = serde_json::from_str::<SizeTable>(r#"{"entries":[["M",0]]}"#);
        assert!(zero.is_err());

        let duplicate =
            serde_json::from_str::<SizeTable>(r#"{"entries":[["M",145],["M",150]]}"#);
        assert!(duplicate.is_err());
    }

    #[test]
    fn test_deserialize_valid_table() {
        let table: SizeTable =
            serde_json::from_str(r#"{"entries":[["S",200],["2XL",250]]}"#).unwrap();
        assert_eq!(table.sizes(), vec![Size::S, Size::Xl2]);
        assert_eq!(
            serde_json::to_string(&table).unwrap(),
            r#"{"entries":[["S",200],["2XL",250]]}"#
        );
    }

    #[test]
    fn test_deserialize_secondary_validates_lengths() {
        let zipper = serde_json::from_str::<SecondaryMaterial>(
            r#"{"kind":"Zipper","lengths":{"entries":[["M",0]]}}"#,
        );
        assert!(zipper.is_err());
    }

    #[test]
    fn test_ribbing_is_uniform() {
        let ribbing = SecondaryMaterial::ribbing(&Size::ALL, 30).unwrap();
        assert!(Size::ALL.iter().all(|&s| ribbing.length(s) == 30));
        assert!(ribbing.kind.is_fabric());
    }

    #[test]
    fn test_zipper_missing_size_is_zero() {
        let zipper = SecondaryMaterial::zipper(
            SizeTable::try_new(vec![(Size::S, 55), (Size::M, 60)]).unwrap(),
        );
        assert_eq!(zipper.length(Size::M), 60);
        assert_eq!(zipper.length(Size::Xs), 0);
        assert!(!zipper.kind.is_fabric());
    }
}
