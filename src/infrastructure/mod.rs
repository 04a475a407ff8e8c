// インフラ層 - キャッシュなどの技術的実装

pub mod cache;

pub use cache::{LineComboCache, SignatureCache};
