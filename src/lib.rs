// カラーノノグラム行候補列挙エンジン - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod search;
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};
pub use num_bigint::BigUint;
pub use num_traits::{One, ToPrimitive, Zero};

// 主要な型を再エクスポート
pub use application::assembly::{AssemblyConfig, GridAssemblyService};
pub use domain::{
    deduce, full_mask, run_mask, Bitmask, BlockCandidates, CandidateProvider, ClueItem,
    ColorCandidates, ColorId, Direction, Facts, Grid, Line, LineId, LineSpec, PuzzleData,
};
pub use infrastructure::cache::{LineComboCache, SignatureCache};
pub use search::generate;
