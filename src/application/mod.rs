// アプリケーション層 - ドメインとインフラの結線

pub mod assembly;

pub use assembly::{AssemblyConfig, GridAssemblyService};
