//! 顶点定义
//!
//! 顶点由调用方提供的标识值表示，图对标识类型泛型

use indexmap::IndexMap;
use std::fmt::Debug;
use std::hash::Hash;

/// 顶点标识需要满足的约束
///
/// 需要 `Hash + Eq` 用于邻接表查找，需要 `Ord` 用于构造边的规范顶点对。
/// 对所有满足约束的类型自动实现，例如 `String`、`&str`、`u64`。
pub trait VertexKey: Clone + Eq + Hash + Ord + Debug {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + Ord + Debug {}

/// 单个顶点的邻接表：邻居 -> 边权重
pub type Neighbors<V> = IndexMap<V, f64>;

/// 按 `Ord` 排序两个端点，返回 (较小, 较大)
pub(crate) fn ordered<V: VertexKey>(a: V, b: V) -> (V, V) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vertex_key<V: VertexKey>() {}

    #[test]
    fn test_vertex_key_impls() {
        assert_vertex_key::<String>();
        assert_vertex_key::<&str>();
        assert_vertex_key::<u64>();
        assert_vertex_key::<(u32, char)>();
    }

    #[test]
    fn test_ordered() {
        assert_eq!(ordered("b", "a"), ("a", "b"));
        assert_eq!(ordered("a", "b"), ("a", "b"));
        assert_eq!(ordered(7u64, 7u64), (7, 7));
    }
}
