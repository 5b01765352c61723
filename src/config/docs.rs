//! Config field documentation, used by `ansifence config show` to annotate
//! the TOML output with inline comments.

use std::collections::HashMap;

/// Documentation for a config section.
pub struct SectionDoc {
    /// TOML section name (e.g., "editor", "export")
    pub name: &'static str,
    /// Human-readable description of the section
    pub description: &'static str,
    /// Fields in this section
    pub fields: &'static [FieldDoc],
}

/// Documentation for a config field.
pub struct FieldDoc {
    /// Field name as it appears in TOML
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Default value as a display string
    pub default_display: &'static str,
}

/// Config sections in canonical display order.
pub const CONFIG_SECTIONS: &[SectionDoc] = &[
    SectionDoc {
        name: "editor",
        description: "Editing surface settings",
        fields: &[
            FieldDoc {
                name: "placeholder",
                description: "Text shown in a new or reset document",
                default_display: "Welcome to Discord Colored Text Generator!",
            },
            FieldDoc {
                name: "session_file",
                description: "File holding the document between commands",
                default_display: "~/.local/share/ansifence/session.json",
            },
        ],
    },
    SectionDoc {
        name: "palette",
        description: "Initially selected colors for new sessions",
        fields: &[
            FieldDoc {
                name: "text_color",
                description: "Text color (gray, red, green, yellow, blue, pink, cyan, white)",
                default_display: "gray",
            },
            FieldDoc {
                name: "background_color",
                description: "Background color (see 'ansifence palette')",
                default_display: "firefly-dark-blue",
            },
        ],
    },
    SectionDoc {
        name: "export",
        description: "Export behavior",
        fields: &[
            FieldDoc {
                name: "reset_after_export",
                description: "Replace the document with the placeholder after exporting",
                default_display: "true",
            },
            FieldDoc {
                name: "copy_to_clipboard",
                description: "Copy every export to the clipboard",
                default_display: "false",
            },
        ],
    },
];

/// Prefix each known field with a `# description` comment line.
pub fn annotate_config(toml_str: &str) -> String {
    let mut lookup: HashMap<(&str, &str), &str> = HashMap::new();
    for section in CONFIG_SECTIONS {
        for field in section.fields {
            lookup.insert((section.name, field.name), field.description);
        }
    }

    let mut result = String::new();
    let mut current_section = String::new();

    for line in toml_str.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && !trimmed.starts_with("[[") {
            let name = trimmed
                .trim_start_matches('[')
                .split(']')
                .next()
                .unwrap_or("")
                .trim();
            current_section = name.to_string();
            result.push_str(line);
            result.push('\n');
            continue;
        }

        if let Some((before_eq, _)) = trimmed.split_once('=') {
            let key = before_eq.trim();
            if let Some(desc) = lookup.get(&(current_section.as_str(), key)) {
                result.push_str(&format!("# {}\n", desc));
            }
        }

        result.push_str(line);
        result.push('\n');
    }

    result
}

/// Markdown table of every config field, for generated docs.
pub fn generate_config_markdown() -> String {
    let mut md = String::from("# Configuration\n\n");
    md.push_str("Location: `~/.config/ansifence/config.toml`\n\n");
    for section in CONFIG_SECTIONS {
        md.push_str(&format!("## [{}]\n\n{}\n\n", section.name, section.description));
        md.push_str("| Field | Default | Description |\n");
        md.push_str("|-------|---------|-------------|\n");
        for field in section.fields {
            md.push_str(&format!(
                "| `{}` | `{}` | {} |\n",
                field.name, field.default_display, field.description
            ));
        }
        md.push('\n');
    }
    md
}
