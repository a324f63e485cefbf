//! Concrete heap node type.
//!
//! A points-to heap graph has two node families: pointer keys (locals,
//! statics, and instance fields that hold references) and instance keys
//! (abstract objects named by their allocation site). Edges run from a
//! pointer to the objects it may point to, and from an object to its fields.
//!
//! The view itself is generic over the node type; [`HeapNode`] is the one
//! [`PointsToGraph`](crate::graph::PointsToGraph) front-ends usually fill.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A node in the heap graph. Identity is the key string plus the family.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeapNode {
    /// A pointer-valued variable or field, e.g. `Main.main:v3` or `Node.next`.
    Pointer(String),
    /// An abstract object, named by its allocation site.
    Instance(String),
}

impl HeapNode {
    /// Creates a pointer key node.
    pub fn pointer(key: impl Into<String>) -> Self {
        HeapNode::Pointer(key.into())
    }

    /// Creates an instance key node.
    pub fn instance(site: impl Into<String>) -> Self {
        HeapNode::Instance(site.into())
    }

    /// The key or allocation site this node is named by.
    pub fn key(&self) -> &str {
        match self {
            HeapNode::Pointer(key) | HeapNode::Instance(key) => key,
        }
    }
}

impl fmt::Display for HeapNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = match self {
            HeapNode::Pointer(_) => "ptr",
            HeapNode::Instance(_) => "obj",
        };
        write!(f, "{family}:{}", self.key())
    }
}
