// ドメイン層 - 手がかり・候補集合・確定情報のモデル

pub mod bitmask;
pub mod candidates;
pub mod clue;
pub mod facts;
pub mod grid;
pub mod line;

pub use bitmask::{full_mask, run_mask, Bitmask};
pub use candidates::{BlockCandidates, CandidateProvider, ColorCandidates};
pub use clue::{ClueItem, ColorId, LineSpec};
pub use facts::{deduce, Facts};
pub use grid::{Grid, PuzzleData};
pub use line::{Direction, Line, LineId};
