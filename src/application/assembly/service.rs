// グリッド組み立てサービス

use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::PARALLEL_LINE_THRESHOLD;
use crate::domain::{Direction, Grid, Line, LineId, LineSpec, PuzzleData};
use crate::infrastructure::cache::SignatureCache;
use crate::vlog;

/// 組み立て設定
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AssemblyConfig {
    /// ワーカースレッド数
    pub num_workers: usize,
    /// この総行数以上でワーカー並列に切り替える
    pub parallel_threshold: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            parallel_threshold: PARALLEL_LINE_THRESHOLD,
        }
    }
}

/// パズル定義からグリッドを組み立てるサービス。
/// 行間キャッシュを所有し、同一セッション内の組み立てで共有する。
pub struct GridAssemblyService {
    cache: Arc<SignatureCache>,
    config: AssemblyConfig,
}

impl GridAssemblyService {
    pub fn new() -> Self {
        Self::with_config(AssemblyConfig::default())
    }

    pub fn with_config(config: AssemblyConfig) -> Self {
        Self {
            cache: Arc::new(SignatureCache::new()),
            config,
        }
    }

    /// このサービスが所有する行間キャッシュ
    pub fn cache(&self) -> &Arc<SignatureCache> {
        &self.cache
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// 入力の検証
    fn validate_inputs(&self, data: &PuzzleData) -> Result<()> {
        if data.width == 0 || data.height == 0 {
            return Err(anyhow!(
                "グリッド寸法が不正です: {}x{}",
                data.width,
                data.height
            ));
        }
        if data.row_clues.len() != data.height {
            return Err(anyhow!(
                "行の手がかり数が高さと一致しません: {} != {}",
                data.row_clues.len(),
                data.height
            ));
        }
        if data.column_clues.len() != data.width {
            return Err(anyhow!(
                "列の手がかり数が幅と一致しません: {} != {}",
                data.column_clues.len(),
                data.width
            ));
        }
        Ok(())
    }

    /// パズル定義からグリッドを組み立てる（メインユースケース）
    pub fn assemble(&self, data: &PuzzleData) -> Result<Grid> {
        // 1. 事前検証
        self.validate_inputs(data)
            .context("パズル定義の検証に失敗しました")?;

        // 2. 行・列の生成。構造が同じ行は行キャッシュを共有する
        let rows: Vec<Line> = data
            .row_clues
            .iter()
            .enumerate()
            .map(|(index, clues)| self.build_line(Direction::Row, index, clues.clone(), data.width))
            .collect();
        let columns: Vec<Line> = data
            .column_clues
            .iter()
            .enumerate()
            .map(|(index, clues)| {
                self.build_line(Direction::Column, index, clues.clone(), data.height)
            })
            .collect();

        // 3. 候補と確定情報の事前計算。総行数がしきい値以上なら行単位で並列化
        let total_lines = rows.len() + columns.len();
        let started = Instant::now();
        if total_lines >= self.config.parallel_threshold {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.num_workers)
                .build()
                .context("ワーカープールの構築に失敗しました")?;
            pool.install(|| {
                rows.par_iter()
                    .chain(columns.par_iter())
                    .for_each(|line| {
                        line.facts();
                    });
            });
        } else {
            for line in rows.iter().chain(columns.iter()) {
                line.facts();
            }
        }
        vlog!(
            "グリッド組み立て完了: {}x{} / {}行 / シグネチャ{}件 / {:?}",
            data.width,
            data.height,
            total_lines,
            self.cache.len(),
            started.elapsed()
        );

        // 4. パレットはそのまま運ぶ
        Ok(Grid::new(rows, columns, data.palette.clone()))
    }

    fn build_line(
        &self,
        direction: Direction,
        index: usize,
        clues: Vec<crate::domain::ClueItem>,
        length: usize,
    ) -> Line {
        let spec = LineSpec::new(clues, length);
        let combos = self.cache.cached(&spec);
        Line::new(LineId { direction, index }, spec, combos)
    }
}

impl Default for GridAssemblyService {
    fn default() -> Self {
        Self::new()
    }
}
