//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::analysis::{format_value, CriticalValueSet, FunctionalEffect};

fn label_width(set: &CriticalValueSet) -> usize {
    set.labels().iter().map(|l| l.len()).max().unwrap_or(0).max(5)
}

/// Format a critical value set as a table.
///
/// Probabilities below 0.001 are shown as `< 0.001`.
pub fn format_critical_values(set: &CriticalValueSet) -> String {
    let width = label_width(set);
    let sep = "\u{2500}".repeat(width + 24);
    let mut output = String::new();

    output.push_str(&format!(
        "  {:<width$}  {:>9}  {:>9}\n",
        "Label".bold(),
        "d".bold(),
        "p".bold(),
        width = width
    ));
    output.push_str(&sep);
    output.push('\n');

    for (label, d, p) in set.iter() {
        output.push_str(&format!(
            "  {:<width$}  {:>9}  {:>9}\n",
            label,
            format_value(d),
            format_value(p),
            width = width
        ));
    }

    output
}

/// Format baseline and derived critical d-values side by side.
///
/// Derived thresholds above the baseline are highlighted in yellow, lower
/// ones in green.
pub fn format_comparison(baseline: &CriticalValueSet, derived: &CriticalValueSet) -> String {
    let width = label_width(baseline).max(label_width(derived));
    let sep = "\u{2500}".repeat(width + 35);
    let mut output = String::new();

    output.push_str(&format!(
        "  {:<width$}  {:>9}  {:>9}  {:>9}\n",
        "Label".bold(),
        "baseline".bold(),
        "derived".bold(),
        "p".bold(),
        width = width
    ));
    output.push_str(&sep);
    output.push('\n');

    for ((label, d0, _), (_, d1, p)) in baseline.iter().zip(derived.iter()) {
        let shown = format!("{:>9}", format_value(d1));
        let shown = if d1 > d0 {
            shown.yellow().to_string()
        } else {
            shown.green().to_string()
        };
        output.push_str(&format!(
            "  {:<width$}  {:>9}  {}  {:>9}\n",
            label,
            format_value(d0),
            shown,
            format_value(p),
            width = width
        ));
    }

    output
}

/// Format a functional effect summary.
pub fn format_effect(effect: &FunctionalEffect) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(48);

    output.push_str(&format!("rft-effect ({} design)\n", effect.design));
    output.push_str(&sep);
    output.push('\n');
    output.push_str(&format!(
        "  Sample size: {}  Nodes: {}  FWHM: {:.2}\n",
        effect.sample_size.total(),
        effect.d.len(),
        effect.fwhm
    ));
    output.push_str(&format!(
        "  Max |d|: {:.3} at node {}\n",
        effect.d_max, effect.argmax
    ));

    let p = format!("p = {}", format_value(effect.p_max));
    let p = if effect.is_significant(0.05) {
        p.red().bold().to_string()
    } else {
        p.green().to_string()
    };
    output.push_str(&format!("  Field maximum: {}\n", p));
    output.push_str(&format!(
        "  Interpretation: {}\n",
        effect.label.as_deref().unwrap_or("below all thresholds")
    ));

    output
}
