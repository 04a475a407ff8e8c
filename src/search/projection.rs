// 対象色への射影と配置境界の計算

use crate::domain::{ColorId, LineSpec};

/// 手がかり列を対象色に射影した配置境界。
///
/// 他色の手がかりは最小幅固定のセパレータとして扱い、位置の制約にだけ
/// 寄与させる。対象色のブロックだけを動かせば全色同時列挙と同じ候補が
/// 得られ、分岐がはるかに少ない。
pub(crate) struct ColorProjection {
    pub(crate) line_len: usize,
    /// 対象色ブロックの長さ（手がかり順）
    pub(crate) lengths: Vec<usize>,
    /// 隣り合う対象ブロック間に最低限必要なセル数
    pub(crate) min_sep: Vec<usize>,
    /// 各ブロックの最も早い開始位置（前方を全て詰めた場合）
    pub(crate) earliest: Vec<usize>,
    /// 各ブロックの最も遅い開始位置（後方の必要幅から逆算）
    pub(crate) latest: Vec<usize>,
}

impl ColorProjection {
    /// 射影を構築する。対象色のブロックが置けない場合は `None`。
    /// 呼び出し側が対象色の手がかりが存在することを保証する。
    pub(crate) fn build(spec: &LineSpec, color: ColorId) -> Option<Self> {
        let clues = spec.clues();
        let line_len = spec.length();

        let target: Vec<usize> = (0..clues.len())
            .filter(|&i| clues[i].color_id == color)
            .collect();
        let block_count = target.len();
        debug_assert!(block_count > 0);
        let lengths: Vec<usize> = target.iter().map(|&i| clues[i].length as usize).collect();

        // 先頭の対象ブロックより前に必要な最小セル数
        let prefix = min_span(clues, 0, target[0]);

        // 対象ブロック同士の最小間隔。手がかり列上で隣接していれば同色なので
        // 1セル、間に他色の手がかりが挟まればその最小幅。
        let mut min_sep = Vec::with_capacity(block_count.saturating_sub(1));
        for k in 0..block_count.saturating_sub(1) {
            let (a, b) = (target[k], target[k + 1]);
            if b == a + 1 {
                min_sep.push(1);
            } else {
                min_sep.push(min_span(clues, a + 1, b));
            }
        }

        // 末尾の対象ブロックより後に必要な最小セル数
        let suffix = min_span(clues, target[block_count - 1] + 1, clues.len());

        // 前方を詰めた場合の開始位置
        let mut earliest = Vec::with_capacity(block_count);
        earliest.push(prefix);
        for k in 1..block_count {
            earliest.push(earliest[k - 1] + lengths[k - 1] + min_sep[k - 1]);
        }

        // ブロック k 以降が必要とする最小セル数から逆算した最遅開始位置
        let mut tail_min = vec![0usize; block_count + 1];
        for k in (0..block_count).rev() {
            let sep = if k + 1 < block_count { min_sep[k] } else { 0 };
            tail_min[k] = lengths[k] + sep + tail_min[k + 1];
        }

        let room = line_len.checked_sub(suffix)?;
        let mut latest = Vec::with_capacity(block_count);
        for k in 0..block_count {
            let last = room.checked_sub(tail_min[k])?;
            if last < earliest[k] {
                return None;
            }
            latest.push(last);
        }

        Some(Self {
            line_len,
            lengths,
            min_sep,
            earliest,
            latest,
        })
    }

    pub(crate) fn block_count(&self) -> usize {
        self.lengths.len()
    }
}

/// `clues[from..to]` を詰めて置いたときの最小セル数。
/// 範囲内の同色隣接ペアにだけ1セルの空きを足す。
fn min_span(clues: &[crate::domain::ClueItem], from: usize, to: usize) -> usize {
    let mut span = 0;
    for i in from..to {
        span += clues[i].length as usize;
        if i > from && clues[i - 1].color_id == clues[i].color_id {
            span += 1;
        }
    }
    span
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClueItem;

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
    fn single_block_bounds_come_from_neighbors() {
        // (3,1),(4,1),(3,2),(1,1),(2,1) size 8 の色4: 前に1セル、後ろに4セル
        let spec = spec(&[(3, 1), (4, 1), (3, 2), (1, 1), (2, 1)], 8);
        let proj = ColorProjection::build(&spec, 4).unwrap();
        assert_eq!(proj.lengths, vec![1]);
        assert_eq!(proj.earliest, vec![1]);
        assert_eq!(proj.latest, vec![3]);
    }

    #[test]
    fn separator_clues_bound_both_blocks() {
        // 同じ行の色3: 間に色4の1セル、後ろに色1+色2の2セル
        let spec = spec(&[(3, 1), (4, 1), (3, 2), (1, 1), (2, 1)], 8);
        let proj = ColorProjection::build(&spec, 3).unwrap();
        assert_eq!(proj.lengths, vec![1, 2]);
        assert_eq!(proj.min_sep, vec![1]);
        assert_eq!(proj.earliest, vec![0, 2]);
        assert_eq!(proj.latest, vec![2, 4]);
    }

    #[test]
    fn adjacent_same_color_blocks_need_a_gap() {
        let spec = spec(&[(1, 4), (1, 3)], 10);
        let proj = ColorProjection::build(&spec, 1).unwrap();
        assert_eq!(proj.min_sep, vec![1]);
        assert_eq!(proj.earliest, vec![0, 5]);
        assert_eq!(proj.latest, vec![2, 7]);
    }

    #[test]
    fn overfull_line_has_no_projection() {
        let spec = spec(&[(1, 5), (1, 5)], 8);
        assert!(ColorProjection::build(&spec, 1).is_none());
    }
}
