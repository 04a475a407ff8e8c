// 行・列のドメインモデル

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::domain::candidates::{CandidateProvider, ColorCandidates};
use crate::domain::clue::{ColorId, LineSpec};
use crate::domain::facts::{deduce, Facts};

/// 行の向き
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Row,
    Column,
}

impl Direction {
    pub fn orthogonal(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }
}

/// グリッド内で行を一意に指す識別子
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId {
    pub direction: Direction,
    pub index: usize,
}

/// 1本の行（または列）。候補キャッシュへのハンドルと確定情報を保持する。
/// 構築後、公開済みの値はどれも変化しない。
pub struct Line {
    id: LineId,
    spec: LineSpec,
    provider: Arc<dyn CandidateProvider>,
    facts: OnceLock<Facts>,
}

impl Line {
    pub(crate) fn new(id: LineId, spec: LineSpec, provider: Arc<dyn CandidateProvider>) -> Self {
        Self {
            id,
            spec,
            provider,
            facts: OnceLock::new(),
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn spec(&self) -> &LineSpec {
        &self.spec
    }

    /// 指定色の候補集合（行キャッシュ経由で一度だけ計算される）
    pub fn candidates(&self, color: ColorId) -> Arc<ColorCandidates> {
        self.provider.get(color)
    }

    /// この行の確定情報。初回呼び出しで全色の候補から導出し、以後は同じ値を返す。
    pub fn facts(&self) -> &Facts {
        self.facts.get_or_init(|| {
            let held: Vec<_> = self
                .spec
                .distinct_colors()
                .into_iter()
                .map(|color| (color, self.provider.get(color)))
                .collect();
            deduce(
                held.iter().map(|(color, cand)| (*color, cand.as_ref())),
                self.spec.length(),
            )
        })
    }

    /// 手がかり列がこの行に収まり得るか。偽なら全色の候補集合が空になる。
    pub fn is_satisfiable(&self) -> bool {
        self.spec.is_feasible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bitmask::Bitmask;
    use crate::domain::clue::ClueItem;
    use crate::infrastructure::cache::LineComboCache;

    fn line(clues: &[(ColorId, u32)], length: usize) -> Line {
        let spec = LineSpec::new(
            clues
                .iter()
                .map(|&(color_id, length)| ClueItem { color_id, length })
                .collect(),
            length,
        );
        let cache = Arc::new(LineComboCache::new(spec.clone()));
        Line::new(
            LineId {
                direction: Direction::Row,
                index: 0,
            },
            spec,
            cache,
        )
    }

    #[test]
    fn direction_orthogonal_flips() {
        assert_eq!(Direction::Row.orthogonal(), Direction::Column);
        assert_eq!(Direction::Column.orthogonal(), Direction::Row);
    }

    #[test]
    fn facts_are_computed_once() {
        let line = line(&[(1, 4), (1, 3)], 10);
        let first = line.facts() as *const Facts;
        let second = line.facts() as *const Facts;
        assert_eq!(first, second);
        assert_eq!(line.facts().filled(1), Some(&Bitmask::from(196u32)));
    }

    #[test]
    fn candidates_delegate_to_the_shared_cache() {
        let line = line(&[(1, 1), (2, 2)], 8);
        let first = line.candidates(1);
        let second = line.candidates(1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn infeasible_line_is_unsatisfiable() {
        let line = line(&[(1, 5), (1, 5)], 8);
        assert!(!line.is_satisfiable());
        assert!(line.candidates(1).is_unsatisfiable());
    }
}
