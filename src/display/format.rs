//! Formatting utilities for terminal output

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar gauge
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Left label, right value, padded to `width` characters
pub fn label_value(label: &str, value: &str, width: usize) -> String {
    let used = label.chars().count() + value.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{}{}{}", label, " ".repeat(gap), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.1%");
        assert_eq!(format_percentage(42.0), "42.0%");
        assert_eq!(format_percentage(100.0), "100.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);

        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
        assert_eq!(format_bar(250.0, 100.0, 4), "████");
    }

    #[test]
    fn test_label_value() {
        assert_eq!(label_value("Total:", "Rs5.00", 16), "Total:    Rs5.00");
        assert_eq!(label_value("Long label", "value", 4), "Long label value");
    }
}
