//! Node ID for syntax nodes.
//!
//! The parser that produced a tree assigns each node an id that can be used
//! to look up its span in a separate table. Rewrites never invent ids for
//! source positions: a replacement inherits the id of the node it replaces,
//! and the pieces a rule synthesizes around it are marked [`NodeId::SYNTHETIC`].

use serde::{Deserialize, Serialize};

/// Identifier for a syntax node within one tree.
///
/// Ids are local to a tree and carry no meaning across trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Id carried by nodes that have no counterpart in the parsed source.
    pub const SYNTHETIC: NodeId = NodeId(0);

    /// Create a NodeId from a raw value handed out by a parser.
    #[inline]
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value of this NodeId.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_synthetic(self) -> bool {
        self.0 == Self::SYNTHETIC.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::SYNTHETIC
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_synthetic() {
            f.write_str("#synthetic")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_from_raw() {
        let id = NodeId::from_raw(12345);
        assert_eq!(id.raw(), 12345);
        assert!(!id.is_synthetic());
    }

    #[test]
    fn test_default_is_synthetic() {
        assert_eq!(NodeId::default(), NodeId::SYNTHETIC);
        assert!(NodeId::default().is_synthetic());
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(format!("{}", NodeId::from_raw(123)), "#123");
        assert_eq!(format!("{}", NodeId::SYNTHETIC), "#synthetic");
    }
}
