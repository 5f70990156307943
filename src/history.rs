//! Move history kept in two indexes over one chronological record list.
//!
//! The ordered index is a binary search tree keyed by the canonical move
//! string; the priority index is a max-heap on the same key. Neither reflects
//! the order moves were played in; `History::last_move` does.

use std::collections::BinaryHeap;
use std::ops::{Bound, RangeBounds};

use crate::types::MoveRecord;

type NodeId = usize;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Unbalanced binary search tree stored in an arena.
///
/// Invariant: every value in a node's left subtree is strictly less than the
/// node's value, every value in its right subtree is greater or equal.
#[derive(Debug, Clone)]
pub struct OrderedIndex<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T: Ord> OrderedIndex<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn insert(&mut self, value: T) {
        let id = self.nodes.len();
        let Some(mut current) = self.root else {
            self.nodes.push(Node {
                value,
                left: None,
                right: None,
            });
            self.root = Some(id);
            return;
        };

        loop {
            let node = &mut self.nodes[current];
            let slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(id);
                    break;
                }
            }
        }

        self.nodes.push(Node {
            value,
            left: None,
            right: None,
        });
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }
        deepest
    }

    /// Values in ascending order.
    pub fn iter_in_order(&self) -> Vec<&T> {
        self.range(..)
    }

    /// Values within `bounds`, in ascending order.
    pub fn range<R: RangeBounds<T>>(&self, bounds: R) -> Vec<&T> {
        let below_start = |v: &T| match bounds.start_bound() {
            Bound::Included(s) => v < s,
            Bound::Excluded(s) => v <= s,
            Bound::Unbounded => false,
        };
        let past_end = |v: &T| match bounds.end_bound() {
            Bound::Included(e) => v > e,
            Bound::Excluded(e) => v >= e,
            Bound::Unbounded => false,
        };

        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(id) = current {
                let node = &self.nodes[id];
                if below_start(&node.value) {
                    // The whole left subtree is smaller still.
                    current = node.right;
                } else {
                    stack.push(id);
                    current = node.left;
                }
            }
            let Some(id) = stack.pop() else {
                break;
            };
            let node = &self.nodes[id];
            if past_end(&node.value) {
                break;
            }
            out.push(&node.value);
            current = node.right;
        }
        out
    }
}

impl<T: Ord> Default for OrderedIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Every accepted move of a session.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<MoveRecord>,
    ordered: OrderedIndex<String>,
    recent: BinaryHeap<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds both indexes from a chronological record list.
    pub fn from_records<I: IntoIterator<Item = MoveRecord>>(records: I) -> Self {
        let mut history = Self::new();
        for record in records {
            history.record(record);
        }
        history
    }

    pub fn record(&mut self, record: MoveRecord) {
        let key = record.to_string();
        self.ordered.insert(key.clone());
        self.recent.push(key);
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Chronological list of accepted moves.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn ordered(&self) -> &OrderedIndex<String> {
        &self.ordered
    }

    /// Top of the max-heap: the lexicographically greatest move string.
    pub fn most_recent_by_priority(&self) -> Option<&str> {
        self.recent.peek().map(String::as_str)
    }

    /// The move that was actually played last.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// Move strings starting with `prefix`, ascending. `"R"` lists red's moves.
    pub fn moves_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.ordered
            .range(prefix.to_string()..)
            .into_iter()
            .take_while(|key| key.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }
}
