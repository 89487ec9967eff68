//! Declaration grouping and CSS block rendering
//!
//! Both output forms emit the same rule blocks: selectors sharing an
//! identical declaration are collapsed into one block. Group order is
//! first-seen declaration order, selector order within a group is the
//! order the rules arrived in.

use ubs_parser::Rule;

/// Group rules by identical declaration, preserving first-seen group
/// order. Returns `(declaration, selectors)` pairs.
pub fn group_by_declaration(rules: &[Rule]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for rule in rules {
        match groups.iter_mut().find(|(decl, _)| *decl == rule.declaration) {
            Some((_, selectors)) => selectors.push(rule.selector.clone()),
            None => groups.push((rule.declaration.clone(), vec![rule.selector.clone()])),
        }
    }
    groups
}

/// Render grouped rules as indented CSS blocks separated by blank lines.
///
/// ```text
///     .ad,
///     .banner {
///         display: none !important;
///     }
/// ```
pub fn render_blocks(rules: &[Rule]) -> String {
    let blocks: Vec<String> = group_by_declaration(rules)
        .into_iter()
        .map(|(declaration, selectors)| {
            let selector_block = selectors.join(",\n    ");
            format!("    {} {{\n        {};\n    }}", selector_block, declaration)
        })
        .collect();
    blocks.join("\n\n")
}
