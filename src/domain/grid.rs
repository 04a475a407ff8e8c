// グリッドのドメインモデル

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::clue::{ClueItem, ColorId};
use crate::domain::line::{Direction, Line, LineId};

/// 外部のデータ取得層から渡されるパズル定義。
/// `palette` は色IDから表示色への対応で、中身は解釈せずそのまま運ぶ。
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleData {
    pub width: usize,
    pub height: usize,
    pub row_clues: Vec<Vec<ClueItem>>,
    pub column_clues: Vec<Vec<ClueItem>>,
    pub palette: HashMap<ColorId, String>,
}

/// 行と列からなるグリッド。セル (r, c) は行 r と列 c に共有されるが、
/// 両者の突き合わせは上位の解決ループの責務で、ここでは扱わない。
pub struct Grid {
    rows: Vec<Line>,
    columns: Vec<Line>,
    palette: HashMap<ColorId, String>,
}

impl Grid {
    pub(crate) fn new(rows: Vec<Line>, columns: Vec<Line>, palette: HashMap<ColorId, String>) -> Self {
        Self {
            rows,
            columns,
            palette,
        }
    }

    /// 列数
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// 行数
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Line] {
        &self.rows
    }

    pub fn columns(&self) -> &[Line] {
        &self.columns
    }

    pub fn palette(&self) -> &HashMap<ColorId, String> {
        &self.palette
    }

    /// 識別子から行を引く
    pub fn line(&self, id: LineId) -> &Line {
        match id.direction {
            Direction::Row => &self.rows[id.index],
            Direction::Column => &self.columns[id.index],
        }
    }

    /// 行 `id` 上のセル位置 `position` で交差する直交行と、
    /// その行上での位置を返す。範囲外の `position` は呼び出し側の契約違反。
    pub fn orthogonal(&self, id: LineId, position: usize) -> (LineId, usize) {
        match id.direction {
            Direction::Row => {
                assert!(position < self.width(), "列位置が範囲外: {}", position);
                (
                    LineId {
                        direction: Direction::Column,
                        index: position,
                    },
                    id.index,
                )
            }
            Direction::Column => {
                assert!(position < self.height(), "行位置が範囲外: {}", position);
                (
                    LineId {
                        direction: Direction::Row,
                        index: position,
                    },
                    id.index,
                )
            }
        }
    }
}
