//! Parser for uBlock Origin cosmetic filter lists
//!
//! Converts raw filter text (lines of the form `domain##selector` or
//! `domain##selector:style(css)`) into a structured [`ParseResult`]:
//! per-domain rules, global rules, and per-line diagnostics for everything
//! that could not be converted.
//!
//! The pipeline has two stages:
//!     1. Classification: each line is classified in isolation by a fixed
//!        sequence of checks. See the [classify] module.
//!     2. Accumulation: classified lines are folded into a [`ParseResult`],
//!        fanning multi-domain lines out to one association per domain.
//!        See the [parse] module.
//!
//! Classification is total: every non-empty, non-comment line ends up as a
//! rule, an invalid record, or a skipped record. Nothing is dropped, and a
//! bad line never aborts the scan.
//!
//! Only the two cosmetic forms above are understood. Network filters and
//! uBlock's extended cosmetic syntax (`:has()`, `:matches-css()`,
//! scriptlets) are routed to the skipped/invalid buckets, never interpreted.

pub mod classify;
pub mod parse;
pub mod rule;

pub use classify::{classify_line, LineClass};
pub use parse::{parse, LineIssue, ParseResult};
pub use rule::{dedupe, Rule, HIDE_DECLARATION};
