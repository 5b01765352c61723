//! Write command handler

use anyhow::Result;

use ansifence::document::Node;
use ansifence::theme::current_theme;
use ansifence::{Config, Document};

use super::open_session;

/// Replace (or extend) the document with a plain text run.
pub fn handle(text: &str, append: bool) -> Result<()> {
    let config = Config::load()?;
    let (session, mut editor) = open_session(&config)?;

    let document = match editor.document() {
        Some(current) if append => {
            let mut nodes = current.nodes().to_vec();
            nodes.push(Node::text(text));
            Document::from_nodes(nodes)
        }
        _ => Document::new(text),
    };
    let len = document.char_len();
    editor.attach(document);
    session.save(&editor)?;

    println!(
        "{}",
        current_theme().primary_text(&format!("Document has {} characters.", len))
    );
    Ok(())
}
