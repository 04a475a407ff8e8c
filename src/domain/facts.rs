// 確定情報の導出

use num_traits::Zero;

use crate::constants::ColorIdMap;
use crate::domain::bitmask::{full_mask, Bitmask};
use crate::domain::candidates::ColorCandidates;
use crate::domain::clue::ColorId;

/// 1本の行について確定しているセル情報
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facts {
    /// 色ID → その色で必ず埋まるセルのマスク（ゼロの色は持たない）
    pub filled_by_color: ColorIdMap<Bitmask>,
    /// 必ず空になるセルのマスク
    pub empty_mask: Bitmask,
    /// 行のセル数
    pub line_len: usize,
}

impl Facts {
    /// 指定色で確定しているマスクを返す
    pub fn filled(&self, color: ColorId) -> Option<&Bitmask> {
        self.filled_by_color.get(&color)
    }

    /// セル位置 `cell` が確定済み（埋まる・空のどちらか）か
    pub fn is_known(&self, cell: usize) -> bool {
        let bit = (self.line_len - cell - 1) as u64;
        if self.empty_mask.bit(bit) {
            return true;
        }
        self.filled_by_color.values().any(|mask| mask.bit(bit))
    }
}

/// 候補集合から確定情報を導き出す。
///
/// 色ごとの確定フィルは、各ブロックの候補マスクを AND した共通部分を
/// ブロック間で OR して得る。同じ色でもブロックが違えば別の領域を確定
/// させ得るので、色全体の候補リストをまとめて AND してはいけない。
/// 確定エンプティは、全色の全候補マスクの OR の補集合。
pub fn deduce<'a, I>(candidates_by_color: I, line_len: usize) -> Facts
where
    I: IntoIterator<Item = (ColorId, &'a ColorCandidates)>,
{
    let mut filled_by_color: ColorIdMap<Bitmask> = ColorIdMap::default();
    let mut covered = Bitmask::zero();

    for (color, candidates) in candidates_by_color {
        let mut forced = Bitmask::zero();
        for block in &candidates.blocks {
            let mut common = match block.masks.first() {
                Some(mask) => mask.clone(),
                None => continue,
            };
            for mask in &block.masks[1..] {
                common &= mask;
            }
            forced |= common;
        }
        if !forced.is_zero() {
            filled_by_color.insert(color, forced);
        }

        for mask in &candidates.masks {
            covered |= mask;
        }
    }

    // covered は全セルマスクの部分集合なので XOR が補集合になる
    Facts {
        filled_by_color,
        empty_mask: full_mask(line_len) ^ covered,
        line_len,
    }
}
