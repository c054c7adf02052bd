// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![cfg(test)]
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod time;
pub mod util;

// 時刻関連
pub use time::{FixedClock, fixed_now};

// ID 生成
pub use util::{ConstantIds, SequentialIds};

// 記事リポジトリ
pub use article_repos::{FailingArticleStore, InMemoryArticleStore};
