//! undigraph - 带权无向图
//!
//! 对称存储的邻接表结构，支持：
//! - 顶点与边的插入（重复插入同一顶点对时覆盖权重）
//! - 按规范顶点对去重的边枚举
//! - 可选的权重校验

pub mod config;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{EdgeKey, Neighbors, UndirectedGraph, VertexKey, WeightedEdge};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
