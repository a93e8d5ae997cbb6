//! Dictionary export command
//!
//! Writes a prefix index in its serialized JSON form, ready to ship with a solve request.

use crate::core::PrefixIndex;
use anyhow::Result;
use std::io::Write;

/// Summary of an exported dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryStats {
    pub words: usize,
    pub nodes: usize,
    pub bytes: usize,
}

/// Serialize `index` as JSON into `writer`
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn export_dictionary<W: Write>(
    index: &PrefixIndex,
    mut writer: W,
    pretty: bool,
) -> Result<DictionaryStats> {
    let data = index.serialize();
    let json = if pretty {
        serde_json::to_string_pretty(&data)?
    } else {
        serde_json::to_string(&data)?
    };

    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(DictionaryStats {
        words: index.len(),
        nodes: index.node_count(),
        bytes: json.len() + 1,
    })
}
