//! services/redline.rs
//! Word-level difference rendering between current and recommended copy.

// ----------------- Edits -----------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Replace { from: String, to: String },
    Remove(String),
    Add(String),
}

// ----------------- Diff -----------------

/// Positional word diff between two pieces of copy.
///
/// Words are compared slot by slot after whitespace splitting; the longer
/// side contributes removals or additions. Trimmed-equal inputs produce
/// no edits.
pub fn word_diff(current: &str, recommended: &str) -> Vec<Edit> {
    if current.trim() == recommended.trim() {
        return Vec::new();
    }

    let cur: Vec<&str> = current.split_whitespace().collect();
    let rec: Vec<&str> = recommended.split_whitespace().collect();

    let mut edits = Vec::new();
    for i in 0..cur.len().max(rec.len()) {
        let c = cur.get(i).copied().unwrap_or("");
        let r = rec.get(i).copied().unwrap_or("");
        if c == r {
            continue;
        }
        if !c.is_empty() && !r.is_empty() {
            edits.push(Edit::Replace {
                from: c.to_string(),
                to: r.to_string(),
            });
        } else if !c.is_empty() {
            edits.push(Edit::Remove(c.to_string()));
        } else {
            edits.push(Edit::Add(r.to_string()));
        }
    }
    edits
}

// ----------------- Rendering -----------------

const MAX_EDITS_SHOWN: usize = 3;

/// One-line fix description for reports.
///
/// Identical inputs render as "No change needed"; differing inputs whose
/// word slots all match (whitespace-only differences) render as
/// "No changes detected".
pub fn render_fix(current: &str, recommended: &str) -> String {
    if current.trim() == recommended.trim() {
        return "No change needed".to_string();
    }

    let edits = word_diff(current, recommended);
    if edits.is_empty() {
        return "No changes detected".to_string();
    }

    let rendered: Vec<String> = edits.iter().map(render_edit).collect();
    if rendered.len() > MAX_EDITS_SHOWN {
        format!("{}...", rendered[..MAX_EDITS_SHOWN].join(", "))
    } else {
        rendered.join(", ")
    }
}

fn render_edit(edit: &Edit) -> String {
    match edit {
        Edit::Replace { from, to } => format!("{from} → {to}"),
        Edit::Remove(word) => format!("Remove: {word}"),
        Edit::Add(word) => format!("Add: {word}"),
    }
}
