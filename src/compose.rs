//! Composition sugar: turning many node expressions into one node.
//!
//! Sibling content written as consecutive expressions composes through
//! [`sequence`] or the [`nodes!`] macro. Conditionals need no special
//! support: an `if`/`else` expression already yields one branch's node
//! unmodified, preserving its tag identity, and an `if` without an `else`
//! maps to `Option` via `Node::from`.

use crate::node::Node;

/// Fold an ordered list of nodes into a single node.
///
/// Zero nodes become the empty sequence, one node passes through unwrapped
/// (so [`Node::tag`] still answers its own tag), and two or more become a
/// [`Node::Sequence`] in source order.
pub fn sequence<I>(nodes: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    let mut children: Vec<Node> = nodes.into_iter().collect();
    if children.len() == 1 {
        children.remove(0)
    } else {
        Node::Sequence(children)
    }
}

/// Render one node per item of a collection, in iteration order.
pub fn for_each<I, F>(items: I, render: F) -> Node
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Node,
{
    sequence(items.into_iter().map(render))
}

/// Variadic sibling sugar: `nodes![head(...), body(...)]`.
///
/// Each argument converts through `Node::from`, so string and numeric
/// literals are accepted directly. Follows the [`sequence`] contract: zero
/// arguments render nothing, a single argument passes through unwrapped.
#[macro_export]
macro_rules! nodes {
    () => {
        $crate::Node::empty()
    };
    ($node:expr $(,)?) => {
        $crate::Node::from($node)
    };
    ($($node:expr),+ $(,)?) => {
        $crate::Node::Sequence(vec![$($crate::Node::from($node)),+])
    };
}

// =============================================================================
// Tests
// =============================================================================
