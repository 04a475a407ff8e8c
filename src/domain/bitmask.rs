// 任意幅ビットマスク - 行のセル占有表現

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// 行のセル占有を表す任意幅ビット列。
/// 行の左端セルが最上位ビット（セル位置 p はビット位置 length - p - 1）。
pub type Bitmask = BigUint;

/// 位置 `start` から `run_len` セル連続して埋めたマスクを返す。
/// `((1 << run_len) - 1) << (line_len - start - run_len)`
pub fn run_mask(line_len: usize, start: usize, run_len: usize) -> Bitmask {
    debug_assert!(start + run_len <= line_len);
    if run_len == 0 {
        return Bitmask::zero();
    }
    let ones = (Bitmask::one() << run_len) - Bitmask::one();
    ones << (line_len - start - run_len)
}

/// 全セルが埋まったマスクを返す
pub fn full_mask(line_len: usize) -> Bitmask {
    (Bitmask::one() << line_len) - Bitmask::one()
}
