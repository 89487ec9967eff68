//! Stylus bulk-import JSON generation
//!
//! Produces the array consumed by Stylus's Manage → Backup → Import flow:
//! a fixed settings object first, then one style entry per domain in
//! first-seen order, then one entry for global rules when present.
//!
//! Entry ids only need to be mutually distinct within one export; they are
//! derived from a time-based base value offset by index, not meaningful as
//! timestamps. The `_id` field is a fresh UUID per entry.

use crate::css::render_blocks;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use ubs_parser::{dedupe, ParseResult, Rule};
use uuid::Uuid;

/// Name given to the style entry holding the global rules.
pub const GLOBAL_ENTRY_NAME: &str = "Global Rules - uBlock Converted";

/// One element of the import array.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ImportEntry {
    Settings(SettingsEntry),
    Style(StyleEntry),
}

/// The fixed settings/order object Stylus expects as the first element.
/// Static content, not user-configurable by this tool.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsEntry {
    settings: Settings,
    order: Order,
}

#[derive(Debug, Clone, Serialize)]
struct Settings {
    #[serde(rename = "disableAll")]
    disable_all: bool,
    #[serde(rename = "exposeIframes")]
    expose_iframes: bool,
    #[serde(rename = "newStyleAsUsercss")]
    new_style_as_usercss: bool,
    #[serde(rename = "openEditInWindow")]
    open_edit_in_window: bool,
    #[serde(rename = "show-badge")]
    show_badge: bool,
    #[serde(rename = "styleViaASS")]
    style_via_ass: bool,
    #[serde(rename = "urlInstaller")]
    url_installer: bool,
    #[serde(rename = "sync.enabled")]
    sync_enabled: String,
    #[serde(rename = "updateInterval")]
    update_interval: u32,
}

#[derive(Debug, Clone, Serialize)]
struct Order {
    main: Vec<String>,
    prio: Vec<String>,
}

impl Default for SettingsEntry {
    fn default() -> Self {
        Self {
            settings: Settings {
                disable_all: false,
                expose_iframes: false,
                new_style_as_usercss: false,
                open_edit_in_window: false,
                show_badge: true,
                style_via_ass: false,
                url_installer: true,
                sync_enabled: "none".to_string(),
                update_interval: 24,
            },
            order: Order {
                main: Vec::new(),
                prio: Vec::new(),
            },
        }
    }
}

/// A single importable style.
#[derive(Debug, Clone, Serialize)]
pub struct StyleEntry {
    pub enabled: bool,
    #[serde(rename = "installDate")]
    pub install_date: u64,
    pub name: String,
    pub sections: Vec<Section>,
    #[serde(rename = "updateDate")]
    pub update_date: u64,
    #[serde(rename = "_id")]
    pub uid: String,
    #[serde(rename = "_rev")]
    pub rev: u64,
    pub id: u64,
}

/// A CSS section of a style. Global styles carry no `domains` list and
/// apply everywhere.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
}

/// Id base and timestamp shared by every entry of one export.
#[derive(Debug, Clone, Copy)]
pub struct Stamps {
    /// Base for the integer `id` field; entry index is added on top.
    pub base_id: u64,
    /// Milliseconds since the Unix epoch, used for install/update dates
    /// and `_rev`.
    pub timestamp_ms: u64,
}

impl Stamps {
    /// Derive both values from the current wall clock.
    pub fn from_clock() -> Self {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            base_id: now_ms % 1_000_000,
            timestamp_ms: now_ms,
        }
    }
}

/// Generate the import array with clock-derived stamps and random UUIDs.
pub fn stylus_import(parsed: &ParseResult) -> Vec<ImportEntry> {
    stylus_import_with(parsed, Stamps::from_clock(), || Uuid::new_v4().to_string())
}

/// Generate the import array with caller-provided stamps and uid source.
///
/// Split out so tests can produce byte-stable output.
pub fn stylus_import_with<F>(parsed: &ParseResult, stamps: Stamps, mut next_uid: F) -> Vec<ImportEntry>
where
    F: FnMut() -> String,
{
    let mut entries = vec![ImportEntry::Settings(SettingsEntry::default())];

    for (idx, (domain, rules)) in parsed.domain_rules.iter().enumerate() {
        let unique = dedupe(rules);
        entries.push(ImportEntry::Style(style_entry(
            domain,
            &unique,
            Some(target_domains(domain)),
            stamps.base_id + idx as u64,
            stamps.timestamp_ms,
            next_uid(),
        )));
    }

    if !parsed.global_rules.is_empty() {
        let unique = dedupe(&parsed.global_rules);
        entries.push(ImportEntry::Style(style_entry(
            GLOBAL_ENTRY_NAME,
            &unique,
            None,
            stamps.base_id + parsed.domain_rules.len() as u64,
            stamps.timestamp_ms,
            next_uid(),
        )));
    }

    entries
}

fn style_entry(
    name: &str,
    rules: &[Rule],
    domains: Option<Vec<String>>,
    id: u64,
    timestamp_ms: u64,
    uid: String,
) -> StyleEntry {
    let all_rules = render_blocks(rules);
    let code = match &domains {
        Some(_) => format!("/* Rules for {} */\n\n{}", name, all_rules),
        None => format!("/* Rules converted from uBlock Origin */\n\n{}", all_rules),
    };

    StyleEntry {
        enabled: true,
        install_date: timestamp_ms,
        name: name.to_string(),
        sections: vec![Section { code, domains }],
        update_date: timestamp_ms,
        uid,
        rev: timestamp_ms,
        id,
    }
}

/// The section's domain list: the domain itself plus a `www.` variant,
/// unless the domain already carries the prefix.
fn target_domains(domain: &str) -> Vec<String> {
    if domain.starts_with("www.") {
        vec![domain.to_string()]
    } else {
        vec![domain.to_string(), format!("www.{}", domain)]
    }
}
