use serde::{Deserialize, Serialize};

/// A recorded cross: two parent colors and the colors the cross can yield.
///
/// The parent pair is unordered: `(A, B)` and `(B, A)` are the same fact.
/// `results` always contains both parents (a cross can reproduce either
/// parent), which the registry enforces on upsert. Color names are free text;
/// the display catalog never constrains what the registry accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorFact {
    pub parent1: String,
    pub parent2: String,
    pub results: Vec<String>,
}

impl ColorFact {
    pub fn produces(&self, color: &str) -> bool {
        self.results.iter().any(|r| r == color)
    }

    /// Whether this fact covers the unordered pair `{a, b}`.
    pub fn matches_pair(&self, a: &str, b: &str) -> bool {
        (self.parent1 == a && self.parent2 == b) || (self.parent1 == b && self.parent2 == a)
    }

    /// Order-insensitive identity for the parent pair: sorted names joined
    /// with "+". Used as the per-path expansion guard in ancestry traces.
    pub fn pair_key(&self) -> String {
        let mut pair = [self.parent1.as_str(), self.parent2.as_str()];
        pair.sort();
        pair.join("+")
    }

    /// Display label for the cross, parents in stored order.
    pub fn label(&self) -> String {
        format!("{} + {}", self.parent1, self.parent2)
    }
}

/// One entry of the static color catalog: a display name and its swatch hex.
///
/// Read-only reference data. Colors referenced elsewhere but missing from the
/// catalog are not an error; they just render without a swatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogColor {
    pub name: String,
    pub hex: String,
}

/// One node of an ancestry trace.
///
/// Color nodes alternate with combination nodes: a color's children are the
/// crosses that can produce it, and a cross's children are its two parent
/// colors (in stored order). A childless color node means no known cross
/// produces the color, or that the trace was cut short by a cycle guard or
/// the depth ceiling; the two are indistinguishable in the output. Built
/// fresh per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AncestryNode {
    Color {
        name: String,
        children: Vec<AncestryNode>,
    },
    Combination {
        label: String,
        children: Vec<AncestryNode>,
    },
}

impl AncestryNode {
    /// A color node with no known ancestry.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::Color {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// The color name or combination label.
    pub fn text(&self) -> &str {
        match self {
            Self::Color { name, .. } => name,
            Self::Combination { label, .. } => label,
        }
    }

    pub fn children(&self) -> &[AncestryNode] {
        match self {
            Self::Color { children, .. } | Self::Combination { children, .. } => children,
        }
    }

    /// Node count of the longest root-to-leaf chain, counting this node.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(AncestryNode::depth)
            .max()
            .unwrap_or(0)
    }
}
