// キャッシュ層 - 行内（色別）と行間（構造シグネチャ別）の2段

pub mod line_cache;
pub mod signature_cache;

pub use line_cache::LineComboCache;
pub use signature_cache::SignatureCache;
