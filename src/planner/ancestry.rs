use std::collections::HashSet;

use crate::models::AncestryNode;
use crate::planner::registry::ComboRegistry;

/// Hard ceiling on trace recursion depth. The registry is user-entered and
/// may be cyclic; together with the per-path guards this bounds the work on
/// any input. Part of the output contract, not a tuning knob.
const MAX_DEPTH: usize = 10;

/// Trace every chain of crosses that could produce `color`.
///
/// The root is a color node for `color`; its children are one combination
/// node per registry fact producing it, each holding the two parent subtrees
/// in stored order. Fact iteration order is registry storage order, so the
/// output is deterministic for a given registry.
///
/// Two guards keep the trace finite on cyclic data, both scoped to the path
/// from the root down; sibling branches explore independently:
/// - a color already expanded on the current path comes back as a leaf;
/// - a parent pair already expanded on the current path comes back as a
///   childless combination node. This is distinct from the color guard: the
///   same two parents can legitimately reappear under a *different* result
///   color, and only a genuine repeat on one path is cut.
///
/// A truncated node is not distinguishable from one with no known ancestors.
pub fn build_ancestry_tree(color: &str, registry: &ComboRegistry) -> AncestryNode {
    expand_color(color, registry, 0, &HashSet::new(), &HashSet::new())
}

fn expand_color(
    color: &str,
    registry: &ComboRegistry,
    depth: usize,
    seen_colors: &HashSet<String>,
    seen_combos: &HashSet<String>,
) -> AncestryNode {
    if seen_colors.contains(color) || depth > MAX_DEPTH {
        return AncestryNode::leaf(color);
    }

    let facts = registry.facts_producing(color);
    if facts.is_empty() {
        return AncestryNode::leaf(color);
    }

    // Guards are copied per branch, never shared with siblings: a shared set
    // would suppress colors that recur across branches without being
    // ancestors of each other.
    let mut seen_colors = seen_colors.clone();
    seen_colors.insert(color.to_string());

    let children = facts
        .iter()
        .map(|fact| {
            let key = fact.pair_key();
            if seen_combos.contains(&key) {
                return AncestryNode::Combination {
                    label: fact.label(),
                    children: Vec::new(),
                };
            }
            let mut seen_combos = seen_combos.clone();
            seen_combos.insert(key);
            AncestryNode::Combination {
                label: fact.label(),
                children: vec![
                    expand_color(&fact.parent1, registry, depth + 1, &seen_colors, &seen_combos),
                    expand_color(&fact.parent2, registry, depth + 1, &seen_colors, &seen_combos),
                ],
            }
        })
        .collect();

    AncestryNode::Color {
        name: color.to_string(),
        children,
    }
}
