// 実行ポリシー定数とユーティリティ型定義

use nohash_hasher::BuildNoHashHasher;

/// グリッド組み立てを逐次からワーカー並列へ切り替える総行数のしきい値。
/// これ未満ではタスク生成のオーバーヘッドが回収できない。
pub const PARALLEL_LINE_THRESHOLD: usize = 50;

/// 先頭ブロックの開始位置候補がこの数以下なら候補列挙を単一スレッドで行う
pub const PARALLEL_START_THRESHOLD: usize = 3;

// 色IDキー専用のノーハッシュ（高速化）
pub type ColorIdMap<V> = std::collections::HashMap<u32, V, BuildNoHashHasher<u32>>;
