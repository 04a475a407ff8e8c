// 候補列挙エンジン

use rayon::prelude::*;

use crate::constants::PARALLEL_START_THRESHOLD;
use crate::domain::{run_mask, Bitmask, BlockCandidates, ColorCandidates, ColorId, LineSpec};
use crate::search::projection::ColorProjection;

/// 指定色の候補集合を列挙する。
///
/// 入力に対して全域・純粋で、置けない行や不正な入力は例外ではなく
/// 空集合になる。結果のマスクは数値降順（左詰めの配置が先頭）。
pub fn generate(spec: &LineSpec, color: ColorId) -> ColorCandidates {
    if !spec.is_feasible() {
        return ColorCandidates::unsatisfiable();
    }
    if !spec.clues().iter().any(|clue| clue.color_id == color) {
        // 対象色のブロックが無い行の有効配置はひとつ（全セル非対象）
        return ColorCandidates::absent();
    }
    let proj = match ColorProjection::build(spec, color) {
        Some(proj) => proj,
        None => return ColorCandidates::unsatisfiable(),
    };

    ColorCandidates {
        masks: enumerate_union_masks(&proj),
        blocks: block_candidates(&proj),
    }
}

/// 行全体の有効配置ごとの合成マスクを列挙する。
/// 開始位置を昇順にたどると合成マスクは数値降順に並ぶ。
fn enumerate_union_masks(proj: &ColorProjection) -> Vec<Bitmask> {
    let first_min = proj.earliest[0];
    let first_max = proj.latest[0];
    let choices = first_max - first_min + 1;

    let mut masks = if choices <= PARALLEL_START_THRESHOLD {
        let mut out = Vec::new();
        for start in first_min..=first_max {
            let acc = run_mask(proj.line_len, start, proj.lengths[0]);
            descend(proj, 1, start, &acc, &mut out);
        }
        out
    } else {
        // 先頭ブロックの開始位置ごとに1タスク。部分結果を開始位置の
        // 昇順のまま結合し、全体の降順を保つ。
        let parts: Vec<Vec<Bitmask>> = (first_min..first_max + 1)
            .into_par_iter()
            .map(|start| {
                let mut local = Vec::new();
                let acc = run_mask(proj.line_len, start, proj.lengths[0]);
                descend(proj, 1, start, &acc, &mut local);
                local
            })
            .collect();
        parts.into_iter().flatten().collect()
    };

    masks.dedup();
    masks
}

/// ブロック `k` 以降を再帰的に配置する。アキュムレータは不変のまま
/// 各分岐に引き継ぎ、巻き戻しを持たない。
fn descend(
    proj: &ColorProjection,
    k: usize,
    prev_start: usize,
    acc: &Bitmask,
    out: &mut Vec<Bitmask>,
) {
    if k == proj.block_count() {
        out.push(acc.clone());
        return;
    }
    let min_start = prev_start + proj.lengths[k - 1] + proj.min_sep[k - 1];
    for start in min_start..=proj.latest[k] {
        let with_block = acc | &run_mask(proj.line_len, start, proj.lengths[k]);
        descend(proj, k + 1, start, &with_block, out);
    }
}

/// ブロック別の候補マスク。`[earliest, latest]` のどの開始位置も、
/// 前方ブロックを左詰め・後方ブロックを右詰めにすれば必ず行全体の
/// 有効配置に拡張できるので、窓を走査するだけでよい。
fn block_candidates(proj: &ColorProjection) -> Vec<BlockCandidates> {
    (0..proj.block_count())
        .map(|k| BlockCandidates {
            length: proj.lengths[k] as u32,
            masks: (proj.earliest[k]..=proj.latest[k])
                .map(|start| run_mask(proj.line_len, start, proj.lengths[k]))
                .collect(),
        })
        .collect()
}
