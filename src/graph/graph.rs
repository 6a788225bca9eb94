//! 带权无向图
//!
//! 邻接表对称存储：每条边在两个端点的邻接表中各存一份，
//! 枚举边时按规范顶点对去重

use super::edge::{EdgeKey, WeightedEdge};
use super::vertex::{Neighbors, VertexKey};
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// 带权无向图
///
/// 不变量：若 `a -> b` 的权重为 `w`，则 `b -> a` 的权重也为 `w`。
/// 顶点和邻居按首次出现的顺序迭代，这一顺序只是存储结构的副产物，
/// 调用方不应依赖它。
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V: VertexKey> {
    /// 顶点 -> 邻接表
    adjacency: IndexMap<V, Neighbors<V>>,
    config: GraphConfig,
}

/// 只比较图结构，配置中的容量提示不参与比较
impl<V: VertexKey> PartialEq for UndirectedGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<V: VertexKey> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey> UndirectedGraph<V> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// 按配置创建空图
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(config.vertex_capacity),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ==================== 顶点操作 ====================

    /// 确保顶点存在（已存在时不做修改），返回它的邻接表
    fn ensure_vertex(&mut self, id: V) -> &mut Neighbors<V> {
        let capacity = self.config.neighbor_capacity;
        self.adjacency.entry(id).or_insert_with_key(|id| {
            trace!(vertex = ?id, "创建顶点");
            IndexMap::with_capacity(capacity)
        })
    }

    /// 添加孤立顶点，顶点为新建时返回 true
    pub fn add_vertex(&mut self, id: V) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.ensure_vertex(id);
        true
    }

    pub fn contains_vertex(&self, id: &V) -> bool {
        self.adjacency.contains_key(id)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// 获取顶点的邻居及对应权重，未知顶点返回空迭代器
    pub fn neighbors<'a>(&'a self, id: &V) -> impl Iterator<Item = (&'a V, f64)> + 'a {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(n, w)| (n, *w)))
    }

    /// 获取顶点的度（邻接表条目数，自环计一次）
    pub fn degree(&self, id: &V) -> usize {
        self.adjacency.get(id).map(|n| n.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    // ==================== 边操作 ====================

    /// 添加边，已存在的边（任一方向）会被覆盖权重
    ///
    /// 任何 `f64` 都被接受；需要校验权重时使用 [`try_add_edge`](Self::try_add_edge)。
    pub fn add_edge(&mut self, a: V, b: V, weight: f64) {
        trace!(?a, ?b, weight, "插入边");

        let previous = self.ensure_vertex(a.clone()).insert(b.clone(), weight);
        // 自环时两次写入落在同一条目上
        self.ensure_vertex(b.clone()).insert(a.clone(), weight);

        if let Some(previous) = previous {
            debug!(?a, ?b, previous, weight, "覆盖已有边的权重");
        }
    }

    /// 校验权重后添加边，非有限值（NaN、无穷）被拒绝且图保持不变
    pub fn try_add_edge(&mut self, a: V, b: V, weight: f64) -> Result<()> {
        if !weight.is_finite() {
            warn!(?a, ?b, weight, "拒绝非有限的边权重");
            return Err(Error::InvalidWeight { weight });
        }
        self.add_edge(a, b, weight);
        Ok(())
    }

    /// 按顺序批量添加边，同一顶点对后出现的权重生效
    pub fn add_edges_from<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        for (a, b, weight) in edges {
            self.add_edge(a, b, weight);
        }
    }

    /// 校验后批量添加边，遇到第一条无效边即停止，之前的边保留
    ///
    /// 返回成功添加的边数。
    pub fn try_add_edges_from<I>(&mut self, edges: I) -> Result<usize>
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut applied = 0;
        for (a, b, weight) in edges {
            self.try_add_edge(a, b, weight)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// 获取两点之间边的权重
    pub fn weight(&self, a: &V, b: &V) -> Option<f64> {
        self.adjacency.get(a)?.get(b).copied()
    }

    pub fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.weight(a, b).is_some()
    }

    /// 获取逻辑边数量，与 `edges().len()` 一致
    pub fn edge_count(&self) -> usize {
        let (entries, loops) =
            self.adjacency
                .iter()
                .fold((0, 0), |(entries, loops), (vertex, neighbors)| {
                    (
                        entries + neighbors.len(),
                        loops + usize::from(neighbors.contains_key(vertex)),
                    )
                });
        // 普通边存两份，自环只存一份
        (entries + loops) / 2
    }

    /// 枚举所有逻辑边，每个无序顶点对恰好出现一次
    pub fn edges(&self) -> Vec<WeightedEdge<V>> {
        let mut edges = Vec::new();
        let mut visited: HashSet<EdgeKey<&V>> = HashSet::new();

        for (vertex, neighbors) in &self.adjacency {
            for (neighbor, &weight) in neighbors {
                if visited.insert(EdgeKey::new(vertex, neighbor)) {
                    edges.push(WeightedEdge::new(vertex.clone(), neighbor.clone(), weight));
                }
            }
        }

        trace!(count = edges.len(), "枚举边");
        edges
    }
}

impl<V: VertexKey> Extend<(V, V, f64)> for UndirectedGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V, f64)>>(&mut self, iter: I) {
        self.add_edges_from(iter);
    }
}

impl<V: VertexKey> FromIterator<(V, V, f64)> for UndirectedGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V, f64)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.add_edges_from(iter);
        graph
    }
}
