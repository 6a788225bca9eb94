//! 边定义
//!
//! 无向边没有独立身份，只由两个端点和权重确定

use crate::graph::vertex::{ordered, VertexKey};
use serde::{Deserialize, Serialize};

/// 边的规范键：按 `Ord` 排序后的端点对
///
/// 用结构化的元组作为去重键，标识中含有任何字符都不会产生冲突。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey<V>(V, V);

impl<V: VertexKey> EdgeKey<V> {
    /// 由两个端点构造键，端点顺序无关
    pub fn new(a: V, b: V) -> Self {
        let (low, high) = ordered(a, b);
        Self(low, high)
    }

    pub fn low(&self) -> &V {
        &self.0
    }

    pub fn high(&self) -> &V {
        &self.1
    }
}

/// 带权无向边，端点按规范顺序存放（`low <= high`）
///
/// 反序列化经过 [`WeightedEdge::new`]，输入中的端点顺序会被规范化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "RawEdge<V>",
    bound(deserialize = "V: VertexKey + Deserialize<'de>")
)]
pub struct WeightedEdge<V> {
    low: V,
    high: V,
    weight: f64,
}

impl<V: VertexKey> WeightedEdge<V> {
    /// 创建新边，端点顺序会被规范化
    pub fn new(a: V, b: V, weight: f64) -> Self {
        let (low, high) = ordered(a, b);
        Self { low, high, weight }
    }

    /// 较小的端点
    pub fn low(&self) -> &V {
        &self.low
    }

    /// 较大的端点
    pub fn high(&self) -> &V {
        &self.high
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn endpoints(&self) -> (&V, &V) {
        (&self.low, &self.high)
    }

    /// 是否为自环
    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }

    pub fn key(&self) -> EdgeKey<V> {
        EdgeKey::new(self.low.clone(), self.high.clone())
    }

    pub fn into_tuple(self) -> (V, V, f64) {
        (self.low, self.high, self.weight)
    }
}

/// 反序列化时的原始形式，端点顺序未校验
#[derive(Deserialize)]
struct RawEdge<V> {
    low: V,
    high: V,
    weight: f64,
}

impl<V: VertexKey> From<RawEdge<V>> for WeightedEdge<V> {
    fn from(raw: RawEdge<V>) -> Self {
        Self::new(raw.low, raw.high, raw.weight)
    }
}

impl<V: VertexKey> From<(V, V, f64)> for WeightedEdge<V> {
    fn from((a, b, weight): (V, V, f64)) -> Self {
        Self::new(a, b, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_canonical_order() {
        let e = WeightedEdge::new("b", "a", 3.0);
        assert_eq!(e.low(), &"a");
        assert_eq!(e.high(), &"b");
        assert_eq!(e.weight(), 3.0);
        assert_eq!(e, WeightedEdge::from(("a", "b", 3.0)));
        assert_eq!(e.into_tuple(), ("a", "b", 3.0));
    }

    #[test]
    fn test_edge_self_loop() {
        let e = WeightedEdge::new(5u32, 5u32, -1.5);
        assert!(e.is_self_loop());
        assert_eq!(e.endpoints(), (&5, &5));
        assert!(!WeightedEdge::new(1u32, 2u32, 0.0).is_self_loop());
    }

    #[test]
    fn test_edge_key_direction_independent() {
        assert_eq!(EdgeKey::new("x", "y"), EdgeKey::new("y", "x"));
        assert_eq!(WeightedEdge::new("y", "x", 1.0).key(), EdgeKey::new("x", "y"));

        let key = EdgeKey::new(9u8, 2u8);
        assert_eq!(key.low(), &2);
        assert_eq!(key.high(), &9);
    }

    #[test]
    fn test_edge_key_separator_no_collision() {
        // 用 "-" 拼接时两者都会变成 "a-b-c"
        let k1 = EdgeKey::new("a-b".to_string(), "c".to_string());
        let k2 = EdgeKey::new("a".to_string(), "b-c".to_string());
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_edge_serialization() {
        let e = WeightedEdge::new("b".to_string(), "a".to_string(), 2.5);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"low":"a","high":"b","weight":2.5}"#);

        let restored: WeightedEdge<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, e);
    }

    #[test]
    fn test_edge_deserialize_canonicalizes() {
        let json = r#"{"low":"b","high":"a","weight":1.0}"#;
        let e: WeightedEdge<String> = serde_json::from_str(json).unwrap();

        assert_eq!(e.low(), "a");
        assert_eq!(e.high(), "b");
        assert!(e.low() <= e.high());
        assert_eq!(e.key(), EdgeKey::new("b".to_string(), "a".to_string()));
        assert_eq!(e.key().low(), "a");
    }
}
