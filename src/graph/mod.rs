//! 图核心模块
//!
//! 定义顶点约束、边和带权无向图

mod edge;
mod graph;
mod vertex;

pub use edge::{EdgeKey, WeightedEdge};
pub use graph::UndirectedGraph;
pub use vertex::{Neighbors, VertexKey};
