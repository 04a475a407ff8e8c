// 探索モジュール - 色射影バックトラックによる候補列挙

pub(crate) mod projection;

pub mod generator;

pub use generator::generate;
