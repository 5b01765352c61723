//! Render command handler

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};

use ansifence::{export, Document};

use super::copy_export;

/// Export a JSON document file (or stdin) without touching the session.
pub fn handle(file: &str, copy: bool) -> Result<()> {
    let contents = if file == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read document from stdin")?;
        buf
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?
    };

    let document =
        parse_document(&contents).with_context(|| format!("Invalid document {}", file))?;
    let export = export::serialize(&document);
    println!("{}", export);
    if copy {
        copy_export(&export);
    }
    Ok(())
}

/// Accepts a bare node list or a session dump with a document attached.
fn parse_document(contents: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(contents)?;
    let nodes = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("document") {
            Some(Value::Null) => bail!("Session dump has no document attached"),
            Some(nodes) => nodes,
            None => bail!("Expected a list of nodes or a session dump with a \"document\" field"),
        },
        _ => bail!("Expected a list of nodes or a session dump with a \"document\" field"),
    };
    Ok(serde_json::from_value(nodes)?)
}
