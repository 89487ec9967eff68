//! Document generation for converted uBlock filters
//!
//! This crate turns a parsed filter list ([`ubs_parser::ParseResult`])
//! into its serialized output forms and writes them to disk.
//!
//! Architecture
//!
//! - One module per output form: usercss (per-domain stylesheets) and
//!   stylus (the bulk-import JSON document).
//! - css holds the declaration-grouping shared by both generators.
//! - publish is the write layer: folder save, ZIP archive, JSON file,
//!   and the preview text. It owns the aggregate [`Summary`] the shell
//!   reports to the user.
//!
//! This is a pure lib, that is, it powers the ubs-cli but is shell
//! agnostic: no printing, no env vars, no prompting. Failures flow back
//! through [`ExportError`] or through [`Summary::failures`] for the
//! best-effort folder save.
//!
//! Output forms
//!
//! - UserCSS: one stylesheet per domain with a UserStyle metadata
//!   header, domain-scoped via `@-moz-document domain(...)`. Global
//!   rules get an unscoped stylesheet.
//! - Stylus JSON: a bulk-import array whose first element is the fixed
//!   settings object, followed by one style entry per domain (plus one
//!   for globals), each carrying generated ids and timestamps.
//!
//! Rules are deduplicated and ordered (hide rules first, selectors
//! ascending) before either form is generated.

pub mod css;
pub mod error;
pub mod publish;
pub mod sanitize;
pub mod stylus;
pub mod usercss;

pub use error::ExportError;
pub use publish::{preview, save_files, save_json, save_zip, Summary};
pub use sanitize::sanitize;
pub use stylus::{stylus_import, stylus_import_with, ImportEntry, Stamps};
pub use usercss::generate_usercss;
