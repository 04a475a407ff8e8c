// 行ごとの候補キャッシュ（色別・読み取り主体）

use std::sync::{Arc, OnceLock, RwLock};

use crate::constants::ColorIdMap;
use crate::domain::{CandidateProvider, ColorCandidates, ColorId, LineSpec};
use crate::search::generate;

type Slot = Arc<OnceLock<Arc<ColorCandidates>>>;

/// 1本の行に対する色別候補キャッシュ。
///
/// 色ごとにスロットを持ち、最初の呼び出しだけが計算して公開する。
/// 同色の並行呼び出しはスロット上で合流し、別色同士はスロット登録の
/// 短い書き込みロック以外で競合しない。列挙そのものはロックの外で走る。
pub struct LineComboCache {
    spec: LineSpec,
    slots: RwLock<ColorIdMap<Slot>>,
}

impl LineComboCache {
    pub fn new(spec: LineSpec) -> Self {
        Self {
            spec,
            slots: RwLock::new(ColorIdMap::default()),
        }
    }

    pub fn spec(&self) -> &LineSpec {
        &self.spec
    }

    /// 指定色の候補集合を返す。未計算なら一度だけ計算して公開する。
    pub fn get(&self, color: ColorId) -> Arc<ColorCandidates> {
        let slot = self.slot(color);
        slot.get_or_init(|| Arc::new(generate(&self.spec, color)))
            .clone()
    }

    /// 計算済みの色数（スロット登録済みかつ公開済みのもの）
    pub fn computed_colors(&self) -> usize {
        self.slots
            .read()
            .unwrap()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    fn slot(&self, color: ColorId) -> Slot {
        if let Some(slot) = self.slots.read().unwrap().get(&color) {
            return slot.clone();
        }
        // 書き込みロックへ昇格して再確認。負けた側は既存スロットを使う。
        let mut slots = self.slots.write().unwrap();
        slots
            .entry(color)
            .or_insert_with(|| Arc::new(OnceLock::new()))
            .clone()
    }
}

impl CandidateProvider for LineComboCache {
    fn get(&self, color: ColorId) -> Arc<ColorCandidates> {
        LineComboCache::get(self, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClueItem;
    use std::thread;

    fn cache(clues: &[(ColorId, u32)], length: usize) -> LineComboCache {
        LineComboCache::new(LineSpec::new(
            clues
                .iter()
                .map(|&(color_id, length)| ClueItem { color_id, length })
                .collect(),
            length,
        ))
    }

    #[test]
    fn second_get_returns_the_published_value() {
        let cache = cache(&[(1, 1), (2, 2)], 8);
        let first = cache.get(1);
        let second = cache.get(1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.computed_colors(), 1);
    }

    #[test]
    fn colors_get_independent_entries() {
        let cache = cache(&[(1, 1), (2, 2)], 8);
        let one = cache.get(1);
        let two = cache.get(2);
        assert!(!Arc::ptr_eq(&one, &two));
        assert_eq!(one.masks.len(), 6);
        assert_eq!(two.masks.len(), 6);
        assert_eq!(cache.computed_colors(), 2);
    }

    #[test]
    fn concurrent_gets_observe_one_published_value() {
        let cache = Arc::new(cache(&[(1, 4), (1, 3)], 10));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get(1))
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], result));
        }
        assert_eq!(cache.computed_colors(), 1);
    }
}
