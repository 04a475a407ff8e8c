// 候補マスク集合

use std::sync::Arc;

use num_traits::Zero;

use crate::domain::bitmask::Bitmask;
use crate::domain::clue::ColorId;

/// 対象色の1ブロックが取り得る候補マスク（数値降順・重複なし）
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockCandidates {
    pub length: u32,
    pub masks: Vec<Bitmask>,
}

/// 1色分の候補集合。
///
/// `masks` は行全体の有効配置ごとに、その色が占めるセルを合成したマスク
/// （数値降順・重複なし）。`blocks` は同じ配置空間をブロック別に見たもので、
/// 確定情報の導出が消費する。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorCandidates {
    pub masks: Vec<Bitmask>,
    pub blocks: Vec<BlockCandidates>,
}

impl ColorCandidates {
    /// 配置不能な行の結果（空集合）
    pub fn unsatisfiable() -> Self {
        Self {
            masks: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// 対象色のブロックを持たない行の結果（全ビット0の1配置のみ）
    pub fn absent() -> Self {
        Self {
            masks: vec![Bitmask::zero()],
            blocks: Vec::new(),
        }
    }

    /// 有効配置がひとつも無いか
    pub fn is_unsatisfiable(&self) -> bool {
        self.masks.is_empty()
    }
}

/// 行単位の候補取得。実装はインフラ層の行キャッシュが担う。
pub trait CandidateProvider: Send + Sync {
    /// 指定色の候補集合を返す（必要なら遅延計算する）
    fn get(&self, color: ColorId) -> Arc<ColorCandidates>;
}
