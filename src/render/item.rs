//! Markdown rendering of a single catalog item.
//!
//! Block layout, in order:
//!
//! ```text
//! ### <name>  ($<price>)
//! [Requires: <pre-req>]
//!     +<amount><unit> <stat>          one line per stat
//! [|Passive (⌛<cd>s)| ... details]
//! [|Active (⌛<cd>s)| ... details]
//! [> Component of: **<builds-into>**]
//! ```
//!
//! Output depends only on the item, so rendering is byte-identical on every call.

use std::fmt::Write;

use crate::core::{Ability, AbilityDetail, Item, ItemRef, StatModifier};

/// Render one item to a markdown block
pub fn render_item(item: &Item) -> String {
    let mut out = String::new();

    out.push_str(&render_heading(item));
    out.push_str(&render_pre_req(item.pre_req.as_ref()));
    out.push('\n');
    out.push_str(&render_stats(&item.stats));
    out.push_str(&render_ability("Passive", item.passive.as_ref()));
    out.push_str(&render_ability("Active", item.active.as_ref()));
    out.push_str(&render_builds_into(item.builds_into.as_ref()));

    out
}

fn render_heading(item: &Item) -> String {
    format!("### {}  (${})\n", item.name, item.price)
}

fn render_pre_req(pre_req: Option<&ItemRef>) -> String {
    let Some(pre_req) = pre_req else {
        return String::new();
    };
    format!("\nRequires: {}\n", pre_req.name())
}

fn render_builds_into(builds_into: Option<&ItemRef>) -> String {
    let Some(target) = builds_into else {
        return String::new();
    };
    format!("\n> Component of: **{}**\n", target.name())
}

fn render_stats(stats: &[StatModifier]) -> String {
    let lines: Vec<String> = stats
        .iter()
        .map(|stat| {
            format!(
                "    {}{}{} {}  ",
                sign_prefix(stat.amount),
                format_amount(stat.amount),
                stat.unit,
                stat.stat
            )
        })
        .collect();

    lines.join("\n") + "\n"
}

fn render_ability(label: &str, ability: Option<&Ability>) -> String {
    let Some(ability) = ability else {
        return String::new();
    };

    let mut out = format!("\n|{} {}|\n:-|\n", label, cooldown_annotation(ability.cooldown));
    let _ = writeln!(out, "|{}", ability.description);
    for detail in &ability.details {
        out.push_str(&render_detail(detail));
    }
    out
}

fn render_detail(detail: &AbilityDetail) -> String {
    format!(
        "\n    {}{}{} {}  ",
        detail.ordinal,
        format_amount(detail.amount),
        detail.unit,
        detail.stat
    )
}

/// `(⌛<seconds>s)`, or nothing when the cooldown is absent or zero
fn cooldown_annotation(cooldown: Option<f64>) -> String {
    match cooldown {
        Some(seconds) if seconds != 0.0 => format!("(⌛{}s)", format_amount(seconds)),
        _ => String::new(),
    }
}

/// Explicit `+` for positive amounts; negatives carry their own `-`
fn sign_prefix(amount: f64) -> &'static str {
    if amount > 0.0 {
        "+"
    } else {
        ""
    }
}

/// Shortest decimal form: `12.0` → `12`, `1.5` → `1.5`, `-0.0` → `0`
fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        return "0".to_string();
    }
    amount.to_string()
}
