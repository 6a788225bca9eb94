//! 图配置
//!
//! 仅包含容量提示，可以从 JSON 加载

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 图配置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 顶点表预分配容量
    pub vertex_capacity: usize,
    /// 每个新顶点的邻接表预分配容量
    pub neighbor_capacity: usize,
}

impl GraphConfig {
    /// 从 JSON 字符串解析，缺省字段取默认值
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    pub fn with_neighbor_capacity(mut self, capacity: usize) -> Self {
        self.neighbor_capacity = capacity;
        self
    }
}
