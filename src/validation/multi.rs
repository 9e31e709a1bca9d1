//! Multi-rule combinator: runs many visitors through one traversal.
//!
//! [`ParallelVisitor`] fans every enter/leave event out to an ordered list
//! of sub-visitors. A sub-visitor that returns [`Control::Skip`] is excluded
//! from the current subtree without affecting the others; the exclusion is
//! keyed by a traversal depth counter and cleared when the matching leave
//! event comes back around. Only if every sub-visitor is excluded does the
//! combinator itself tell the walker to skip the subtree.

use crate::ast::visit::node_kinds;
use crate::ast::{Control, NodeRef, Visitor};

/// One wrapped rule-visitor and its exclusion state.
struct SubVisitor<'a> {
    visitor: Box<dyn Visitor<'a> + 'a>,
    /// Depth at which this sub-visitor skipped, while it is excluded.
    skip_depth: Option<usize>,
}

/// Combines an ordered list of visitors into a single visitor.
///
/// Sub-visitors are invoked in list order at every node, which together
/// with the walker's source-order traversal makes diagnostic order fully
/// deterministic.
pub struct ParallelVisitor<'a> {
    visitors: Vec<SubVisitor<'a>>,
    depth: usize,
}

impl<'a> ParallelVisitor<'a> {
    /// Wraps the given visitors, preserving their order.
    pub fn new(visitors: Vec<Box<dyn Visitor<'a> + 'a>>) -> Self {
        Self {
            visitors: visitors
                .into_iter()
                .map(|visitor| SubVisitor {
                    visitor,
                    skip_depth: None,
                })
                .collect(),
            depth: 0,
        }
    }
}

macro_rules! impl_parallel_visitor {
    ( $( ($variant:ident, $ty:ty, $enter:ident, $leave:ident) ),* $(,)? ) => {
        impl<'a> Visitor<'a> for ParallelVisitor<'a> {
            $(
                fn $enter(&mut self, node: &'a $ty, ancestors: &[NodeRef<'a>]) -> Control {
                    self.depth += 1;
                    let current = self.depth;
                    let mut all_excluded = true;
                    for sub in &mut self.visitors {
                        if sub.skip_depth.is_some() {
                            continue;
                        }
                        if sub.visitor.$enter(node, ancestors) == Control::Skip {
                            sub.skip_depth = Some(current);
                        } else {
                            all_excluded = false;
                        }
                    }
                    if all_excluded {
                        Control::Skip
                    } else {
                        Control::Continue
                    }
                }

                fn $leave(&mut self, node: &'a $ty, ancestors: &[NodeRef<'a>]) {
                    let current = self.depth;
                    self.depth -= 1;
                    for sub in &mut self.visitors {
                        match sub.skip_depth {
                            None => sub.visitor.$leave(node, ancestors),
                            // The node this sub skipped: lift the exclusion
                            // without delivering the leave event.
                            Some(depth) if depth == current => sub.skip_depth = None,
                            Some(_) => {}
                        }
                    }
                }
            )*
        }
    };
}
node_kinds!(impl_parallel_visitor);
