//! Static table source generation

use devicename_types::Device;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Write as _;
use tracing::{debug, warn};

/// Model value that never identifies a single product
pub const AMBIGUOUS_MODEL: &str = "Nexus 7";

const HEADER: &str = "//! Static device table.
//!
//! @generated by `devicename generate --table`. Rows are ordered by manufacturer
//! and then by market name; identifiers are unique across rows.

use crate::PopularDevice;

/// Every product known to the static resolver, in lookup priority order.
pub static DEVICES: &[PopularDevice] = &[
";

const INLINE_LIST_WIDTH: usize = 80;
const MAX_LINE_WIDTH: usize = 99;
const ITEM_INDENT: &str = "            ";

/// One product row of the generated table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    /// Retail brand
    pub manufacturer: String,
    /// Market name
    pub market_name: String,
    /// Codenames, sorted
    pub codenames: Vec<String>,
    /// Models, sorted
    pub models: Vec<String>,
}

/// An identifier removed from a later row because an earlier row owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedIdentifier {
    /// The shared codename or model
    pub identifier: String,
    /// Market name of the row that keeps it
    pub kept_by: String,
    /// Market name of the row it was removed from
    pub dropped_from: String,
}

/// Output of [`generate_table`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedTable {
    /// Rows in lookup priority order
    pub entries: Vec<TableEntry>,
    /// Identifiers that overlapped across rows
    pub dropped: Vec<DroppedIdentifier>,
}

impl GeneratedTable {
    /// Rust source for the table
    pub fn render(&self) -> String {
        render_table(&self.entries)
    }
}

/// Build table rows for the records whose market name is in `popular`
///
/// Records are grouped by manufacturer and market name. A row's models skip
/// values equal to its market name and [`AMBIGUOUS_MODEL`]. Rows are sorted
/// case-insensitively by manufacturer, then market name; an identifier
/// already owned by an earlier row is dropped from the later one and
/// reported. Rows left without identifiers are omitted.
pub fn generate_table<S: AsRef<str>>(devices: &[Device], popular: &[S]) -> GeneratedTable {
    let popular: BTreeSet<&str> = popular.iter().map(AsRef::as_ref).collect();

    let mut groups: BTreeMap<(String, String), (BTreeSet<String>, BTreeSet<String>)> =
        BTreeMap::new();
    for device in devices {
        if !popular.contains(device.market_name.as_str()) {
            continue;
        }
        let manufacturer = device.manufacturer.clone().unwrap_or_default();
        let (codenames, models) = groups
            .entry((manufacturer, device.market_name.clone()))
            .or_default();
        if !device.codename.is_empty() {
            codenames.insert(device.codename.clone());
        }
        if !device.model.is_empty()
            && device.model != device.market_name
            && device.model != AMBIGUOUS_MODEL
        {
            models.insert(device.model.clone());
        }
    }

    let mut rows: Vec<_> = groups.into_iter().collect();
    rows.sort_by_cached_key(|((manufacturer, name), _)| {
        (
            manufacturer.to_lowercase(),
            name.to_lowercase(),
            manufacturer.clone(),
            name.clone(),
        )
    });

    let mut owner: HashMap<String, String> = HashMap::new();
    let mut table = GeneratedTable::default();
    for ((manufacturer, market_name), (codenames, models)) in rows {
        let mut claim = |identifiers: BTreeSet<String>| -> Vec<String> {
            identifiers
                .into_iter()
                .filter(|identifier| match owner.get(identifier) {
                    Some(kept_by) => {
                        table.dropped.push(DroppedIdentifier {
                            identifier: identifier.clone(),
                            kept_by: kept_by.clone(),
                            dropped_from: market_name.clone(),
                        });
                        false
                    }
                    None => true,
                })
                .collect()
        };
        let codenames = claim(codenames);
        let models = claim(models);

        if codenames.is_empty() && models.is_empty() {
            warn!("{} has no identifiers left, omitting it", market_name);
            continue;
        }
        for identifier in codenames.iter().chain(&models) {
            owner
                .entry(identifier.clone())
                .or_insert_with(|| market_name.clone());
        }
        table.entries.push(TableEntry {
            manufacturer,
            market_name,
            codenames,
            models,
        });
    }

    for dropped in &table.dropped {
        warn!(
            "Identifier {} is claimed by {} and {}, keeping the first",
            dropped.identifier, dropped.kept_by, dropped.dropped_from
        );
    }
    debug!(
        "Generated {} table rows, dropped {} identifiers",
        table.entries.len(),
        table.dropped.len()
    );
    table
}

/// Render rows as the `DEVICES` source file
pub fn render_table(entries: &[TableEntry]) -> String {
    let mut out = String::from(HEADER);
    for entry in entries {
        out.push_str("    PopularDevice {\n");
        let _ = writeln!(out, "        manufacturer: {:?},", entry.manufacturer);
        let _ = writeln!(out, "        market_name: {:?},", entry.market_name);
        render_list(&mut out, "codenames", &entry.codenames);
        render_list(&mut out, "models", &entry.models);
        out.push_str("    },\n");
    }
    out.push_str("];\n");
    out
}

fn render_list(out: &mut String, field: &str, items: &[String]) {
    let quoted: Vec<String> = items.iter().map(|item| format!("{:?}", item)).collect();
    let inline = format!("&[{}]", quoted.join(", "));
    if inline.len() <= INLINE_LIST_WIDTH {
        let _ = writeln!(out, "        {}: {},", field, inline);
        return;
    }

    let _ = writeln!(out, "        {}: &[", field);
    let mut line = String::new();
    for item in quoted {
        let token = format!("{},", item);
        if line.is_empty() {
            line = format!("{}{}", ITEM_INDENT, token);
        } else if line.len() + 1 + token.len() <= MAX_LINE_WIDTH {
            line.push(' ');
            line.push_str(&token);
        } else {
            out.push_str(&line);
            out.push('\n');
            line = format!("{}{}", ITEM_INDENT, token);
        }
    }
    out.push_str(&line);
    out.push_str("\n        ],\n");
}
