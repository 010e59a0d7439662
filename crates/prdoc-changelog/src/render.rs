use std::collections::BTreeMap;

use prdoc_audience::{ALL, Audience};
use prdoc_core::source::RecordSource;

use crate::aggregate::ReleasePlan;

#[derive(Debug, Clone, Default)]
pub struct ChangelogOptions {
    /// Top-level heading; omitted when `None`.
    pub heading: Option<String>,
    /// Only render this audience section.
    pub audience: Option<String>,
}

/// Render a Markdown changelog grouped by audience.
///
/// Sections follow vocabulary order, then unknown audiences alphabetically.
/// Inside a section entries keep record order. Output is deterministic for a
/// given input order.
pub fn render_markdown(sources: &[RecordSource], opts: &ChangelogOptions) -> String {
    // (rank, label) sorts known audiences first, unknown ones by label.
    let mut sections: BTreeMap<(usize, String), Vec<String>> = BTreeMap::new();

    for source in sources {
        let origin = source.origin();
        for entry in &source.record.doc {
            for label in entry.audience.labels() {
                if opts.audience.as_deref().is_some_and(|a| a != label.as_str()) {
                    continue;
                }
                let rank = Audience::parse(label).map(Audience::rank).unwrap_or(ALL.len());
                sections
                    .entry((rank, label.clone()))
                    .or_default()
                    .push(render_item(&source.record.title, &origin, &entry.description));
            }
        }
    }

    let mut out = String::new();
    if let Some(heading) = &opts.heading {
        out.push_str(&format!("# {heading}\n\n"));
    }

    let mut first = true;
    for ((_, label), items) in sections {
        if !first {
            out.push('\n');
        }
        first = false;
        out.push_str(&format!("## {label}\n\n"));
        out.push_str(&items.join("\n"));
    }
    out
}

fn render_item(title: &str, origin: &str, description: &str) -> String {
    let mut item = format!("- {} ({origin})\n", title.trim());
    let body = description.trim_end();
    if !body.trim().is_empty() {
        item.push('\n');
        for line in body.lines() {
            if line.trim().is_empty() {
                item.push('\n');
            } else {
                item.push_str("  ");
                item.push_str(line);
                item.push('\n');
            }
        }
    }
    item
}

/// Render a release plan as a tab-separated table (header included).
///
/// Columns: crate, bump, current, next, origins. Unknown versions render as `-`.
pub fn render_plan_tsv(plan: &ReleasePlan) -> String {
    let mut out = String::from("crate\tbump\tcurrent\tnext\torigins\n");
    for c in &plan.crates {
        let current = c.current.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "-".into());
        let next = c.next.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "-".into());
        out.push_str(&format!(
            "{}\t{}\t{current}\t{next}\t{}\n",
            c.name,
            c.bump,
            c.origins.join(",")
        ));
    }
    out
}
