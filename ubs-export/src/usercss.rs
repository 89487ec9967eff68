//! UserCSS serialization
//!
//! Emits Stylus-compatible UserCSS: a fixed UserStyle metadata header
//! followed by the grouped rule blocks. Domain-specific stylesheets are
//! wrapped in `@-moz-document domain("...")` so they only apply on their
//! target site; global stylesheets are emitted unwrapped.

use crate::css::render_blocks;
use ubs_parser::Rule;

/// Serialize rules into a complete UserCSS stylesheet.
///
/// `name` is the domain (or a display name for global stylesheets) and
/// doubles as the domain condition when `is_global` is false. Callers are
/// expected to hand in deduplicated rules.
pub fn generate_usercss(name: &str, rules: &[Rule], is_global: bool) -> String {
    let header = format!(
        "/* ==UserStyle==\n\
         @name           {} - Cleanup\n\
         @namespace      ublock-to-stylus-converter\n\
         @version        1.0.0\n\
         @description    Converted from uBlock Origin cosmetic filters\n\
         @author         uBlock Converter\n\
         @license        MIT\n\
         ==/UserStyle== */\n\n",
        name
    );

    let all_rules = render_blocks(rules);
    let body = if is_global {
        all_rules
    } else {
        format!("@-moz-document domain(\"{}\") {{\n{}\n}}", name, all_rules)
    };

    header + &body
}
