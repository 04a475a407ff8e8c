// 手がかりの値オブジェクト

use serde::{Deserialize, Serialize};

/// 色ID（上流でデコード済みの不透明な整数）
pub type ColorId = u32;

/// 手がかり列の1要素（色と連続ブロック長）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClueItem {
    pub color_id: ColorId,
    pub length: u32,
}

/// 1本の行（または列）の手がかり列とセル数。構築後は不変。
///
/// `Eq` と `Hash` は (セル数, 手がかり列) の構造等価なので、この型自体が
/// 行間キャッシュの正規化キーになる。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSpec {
    clues: Vec<ClueItem>,
    length: usize,
}

impl LineSpec {
    pub fn new(clues: Vec<ClueItem>, length: usize) -> Self {
        Self { clues, length }
    }

    pub fn clues(&self) -> &[ClueItem] {
        &self.clues
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// 全ブロックと必須ギャップを詰めて置いたときの最小セル数。
    /// 同色の隣接手がかりの間にだけ1セルの空きが必要になる。
    pub fn min_required_cells(&self) -> usize {
        let mut required = 0;
        for (i, clue) in self.clues.iter().enumerate() {
            required += clue.length as usize;
            if i > 0 && self.clues[i - 1].color_id == clue.color_id {
                required += 1;
            }
        }
        required
    }

    /// 手がかり列がこの行に収まり得るか
    pub fn is_feasible(&self) -> bool {
        self.length > 0 && self.min_required_cells() <= self.length
    }

    /// 行に現れる色（初出順・重複なし）
    pub fn distinct_colors(&self) -> Vec<ColorId> {
        let mut colors = Vec::new();
        for clue in &self.clues {
            if !colors.contains(&clue.color_id) {
                colors.push(clue.color_id);
            }
        }
        colors
    }
}
