// 構造シグネチャによる行間キャッシュ

use std::sync::Arc;

use dashmap::DashMap;

use crate::domain::LineSpec;
use crate::infrastructure::cache::line_cache::LineComboCache;

/// (セル数, 手がかり列) が同じ行にひとつの行キャッシュを共有させる。
///
/// 縁の行など構造が同じ行は再計算されない。エントリは生存期間中
/// 破棄されない（サイズは無制限。パズル1回分のセッションが所有する
/// 前提で、プロセス全体の隠れたシングルトンにはしない）。
pub struct SignatureCache {
    entries: DashMap<LineSpec, Arc<LineComboCache>>,
}

impl SignatureCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// シグネチャに対応する行キャッシュを返す（無ければ登録する）。
    /// 登録するのは空の遅延キャッシュなので、シャードロック下で
    /// 列挙が走ることはない。
    pub fn cached(&self, spec: &LineSpec) -> Arc<LineComboCache> {
        self.entries
            .entry(spec.clone())
            .or_insert_with(|| Arc::new(LineComboCache::new(spec.clone())))
            .clone()
    }

    /// 登録済みシグネチャ数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SignatureCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClueItem, ColorId};

    fn spec(clues: &[(ColorId, u32)], length: usize) -> LineSpec {
        LineSpec::new(
            clues
                .iter()
                .map(|&(color_id, length)| ClueItem { color_id, length })
                .collect(),
            length,
        )
    }

    #[test]
    fn identical_specs_share_one_entry() {
        let cache = SignatureCache::new();
        let first = cache.cached(&spec(&[(1, 2)], 9));
        let second = cache.cached(&spec(&[(1, 2)], 9));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn length_is_part_of_the_signature() {
        let cache = SignatureCache::new();
        let nine = cache.cached(&spec(&[(1, 2)], 9));
        let ten = cache.cached(&spec(&[(1, 2)], 10));
        assert!(!Arc::ptr_eq(&nine, &ten));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clue_order_is_part_of_the_signature() {
        let cache = SignatureCache::new();
        let forward = cache.cached(&spec(&[(1, 2), (2, 1)], 9));
        let backward = cache.cached(&spec(&[(2, 1), (1, 2)], 9));
        assert!(!Arc::ptr_eq(&forward, &backward));
    }

    #[test]
    fn shared_entry_computes_each_color_once() {
        let cache = SignatureCache::new();
        let first = cache.cached(&spec(&[(1, 1), (2, 2)], 8));
        let second = cache.cached(&spec(&[(1, 1), (2, 2)], 8));
        let from_first = first.get(1);
        let from_second = second.get(1);
        assert!(Arc::ptr_eq(&from_first, &from_second));
    }
}
