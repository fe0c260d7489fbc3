//! 表單狀態：尺碼勾選與需求數量

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::input;
use crate::Size;

/// 尺碼勾選集合（「可用布料」模式）
///
/// 只接受建立時給定的尺碼範圍，範圍外的尺碼一律忽略。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    universe: Vec<Size>,
    selected: BTreeSet<Size>,
}

impl SelectionSet {
    /// 創建全未勾選的集合
    pub fn new(universe: Vec<Size>) -> Self {
        Self {
            universe,
            selected: BTreeSet::new(),
        }
    }

    /// 切換勾選狀態，回傳切換後的狀態
    ///
    /// 尺碼不在範圍內時不做任何變更，回傳 `None`。
    pub fn toggle(&mut self, size: Size) -> Option<bool> {
        if !self.universe.contains(&size) {
            return None;
        }
        if self.selected.remove(&size) {
            Some(false)
        } else {
            self.selected.insert(size);
            Some(true)
        }
    }

    pub fn set(&mut self, size: Size, checked: bool) {
        if !self.universe.contains(&size) {
            return;
        }
        if checked {
            self.selected.insert(size);
        } else {
            self.selected.remove(&size);
        }
    }

    pub fn is_selected(&self, size: Size) -> bool {
        self.selected.contains(&size)
    }

    /// 已勾選尺碼（依範圍宣告順序）
    pub fn selected(&self) -> Vec<Size> {
        self.universe
            .iter()
            .copied()
            .filter(|s| self.selected.contains(s))
            .collect()
    }

    pub fn universe(&self) -> &[Size] {
        &self.universe
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// 各尺碼需求數量（「所需布料」模式）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityMap {
    quantities: BTreeMap<Size, u32>,
}

impl QuantityMap {
    /// 創建全為 0 的數量表
    pub fn new(universe: &[Size]) -> Self {
        Self {
            quantities: universe.iter().map(|&s| (s, 0)).collect(),
        }
    }

    /// 設置數量；範圍外的尺碼忽略
    pub fn set(&mut self, size: Size, quantity: u32) {
        if let Some(slot) = self.quantities.get_mut(&size) {
            *slot = quantity;
        }
    }

    /// 以原始輸入設置數量（負值或非數字視為 0）
    pub fn set_raw(&mut self, size: Size, raw: &str) {
        self.set(size, input::normalize_quantity(raw));
    }

    pub fn get(&self, size: Size) -> u32 {
        self.quantities.get(&size).copied().unwrap_or(0)
    }

    /// 所有數量歸零
    pub fn reset(&mut self) {
        self.quantities.values_mut().for_each(|q| *q = 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Size, u32)> + '_ {
        self.quantities.iter().map(|(s, q)| (*s, *q))
    }

    pub fn total_pieces(&self) -> u64 {
        self.quantities.values().map(|&q| u64::from(q)).sum()
    }
}

impl FromIterator<(Size, u32)> for QuantityMap {
    fn from_iter<T: IntoIterator<Item = (Size, u32)>>(iter: T) -> Self {
        Self {
            quantities: iter.into_iter().collect(),
        }
    }
}
