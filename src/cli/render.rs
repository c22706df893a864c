use crate::domain::{LedgerSnapshot, format_amount};

/// Render the current split as an aligned text table.
///
/// Participants are numbered from 1 to match the shell's indices, and the
/// currently picked one is marked with `*`. Owed amounts and subtotals are
/// rounded for display; the itemized charge lines under each participant
/// keep the amounts exactly as entered. `compact` drops those itemized
/// lines.
pub fn render_snapshot(snapshot: &LedgerSnapshot, selected: Option<usize>, compact: bool) -> String {
    let mut lines = vec![format!(
        "Tax: {}%   Fees & tips: {}",
        snapshot.tax_rate_percent,
        format_amount(snapshot.shared_fees_and_tips)
    )];

    if snapshot.participants.is_empty() {
        lines.push("No participants yet.".to_string());
        return lines.join("\n");
    }

    lines.push(format!(
        "  {:>2} {:<20} {:>12} {:>12}",
        "#", "PARTICIPANT", "SUBTOTAL", "OWES"
    ));
    lines.push("-".repeat(51));

    for (position, share) in snapshot.participants.iter().enumerate() {
        let marker = if selected == Some(position) { '*' } else { ' ' };
        lines.push(format!(
            "{} {:>2} {:<20} {:>12} {:>12}",
            marker,
            position + 1,
            truncate(&share.name, 20),
            format_amount(share.subtotal()),
            format_amount(share.owed)
        ));
        if !compact {
            for (charge_position, charge) in share.charges.iter().enumerate() {
                lines.push(format!("      {}. {}", charge_position + 1, charge));
            }
        }
    }

    lines.push("-".repeat(51));
    lines.push(format!(
        "  {:>2} {:<20} {:>12} {:>12}",
        "",
        "TOTAL",
        "",
        format_amount(snapshot.grand_total)
    ));

    lines.join("\n")
}

pub fn help_text() -> &'static str {
    "Commands:
  add <name>        add a participant (names are unique, case-insensitive)
  pick <n>          select participant n for new charges
  charge <amount>   record a charge for the selected participant
  rm <n>            remove participant n and free their name
  rm <n> <c>        remove charge c from participant n
  tax <percent>     set the tax rate applied to each subtotal
  fees <amount>     set the shared fees/tips pool, split evenly
  show              print the current split
  json              print the current split as JSON
  help              show this message
  quit              leave the shell"
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
