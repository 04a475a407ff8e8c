// グリッド組み立てアプリケーションサービス

pub mod service;

pub use service::{AssemblyConfig, GridAssemblyService};
