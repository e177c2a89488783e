//! Number and time formatting shared by every user-facing reply.

/// Take a value in lovelace and return it in ADA.
pub fn lovelace_to_ada(lovelace: u64) -> f64 {
    lovelace as f64 / 1e6
}

/// Format an ADA amount with a magnitude suffix, e.g. 2_500_000.0 -> "2.50M".
/// Amounts below one thousand render as a plain integer.
pub fn fmt_ada(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    for (scale, suffix) in UNITS {
        if value >= scale {
            return format!("{:.2}{}", value / scale, suffix);
        }
    }

    format!("{:.0}", value)
}

/// Render the ten-glyph epoch progress bar. One glyph fills per completed
/// ten percent. `percentage` must already be within [0, 100]; anything else
/// is a bug in the caller, not recoverable input.
pub fn progress_bar(percentage: f64) -> String {
    assert!(
        (0.0..=100.0).contains(&percentage),
        "progress percentage out of range: {}",
        percentage
    );

    let filled = (percentage / 10.0).floor() as usize;
    (0..10).map(|i| if i < filled { '▰' } else { '▱' }).collect()
}

/// Format a remaining-seconds value the way the epoch reply shows it.
/// The day unit label is localized by the caller.
pub fn fmt_time(seconds: u64, day_label: &str) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days == 0 && seconds < 3600 {
        format!("{}m", minutes)
    } else if days == 0 {
        format!("{}h{}m", hours, minutes)
    } else {
        format!("{} {}, {}h{}m", days, day_label, hours, minutes)
    }
}

/// Traffic-light indicator for a saturation ratio.
pub fn saturation_icon(saturation: f64) -> &'static str {
    if saturation < 0.75 {
        "🟢"
    } else if saturation < 1.0 {
        "🟡"
    } else {
        "🔴"
    }
}

pub fn block_symbol(produced_blocks: u64) -> &'static str {
    if produced_blocks > 0 { " 🎉" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lovelace_to_ada_is_exact_division() {
        assert_eq!(lovelace_to_ada(0), 0.0);
        assert_eq!(lovelace_to_ada(1_000_000), 1.0);
        assert_eq!(lovelace_to_ada(1_234_567), 1.234567);
    }

    #[test]
    fn test_fmt_ada_below_one_thousand_is_unscaled() {
        assert_eq!(fmt_ada(0.0), "0");
        assert_eq!(fmt_ada(42.0), "42");
        assert_eq!(fmt_ada(999.0), "999");
    }

    #[test]
    fn test_fmt_ada_picks_largest_fitting_suffix() {
        assert_eq!(fmt_ada(1_000.0), "1.00K");
        assert_eq!(fmt_ada(1_500.0), "1.50K");
        assert_eq!(fmt_ada(2_500_000.0), "2.50M");
        assert_eq!(fmt_ada(7_200_000_000.0), "7.20B");
        assert_eq!(fmt_ada(1.5e12), "1.50T");
    }

    #[test]
    fn test_progress_bar_fill_counts() {
        assert_eq!(progress_bar(0.0), "▱▱▱▱▱▱▱▱▱▱");
        assert_eq!(progress_bar(9.9), "▱▱▱▱▱▱▱▱▱▱");
        assert_eq!(progress_bar(55.0), "▰▰▰▰▰▱▱▱▱▱");
        assert_eq!(progress_bar(100.0), "▰▰▰▰▰▰▰▰▰▰");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_progress_bar_rejects_negative_percentage() {
        progress_bar(-1.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_progress_bar_rejects_percentage_above_hundred() {
        progress_bar(101.0);
    }

    #[test]
    fn test_fmt_time_under_one_hour() {
        assert_eq!(fmt_time(59, "days"), "0m");
        assert_eq!(fmt_time(61, "days"), "1m");
    }

    #[test]
    fn test_fmt_time_under_one_day() {
        assert_eq!(fmt_time(3600, "days"), "1h0m");
        assert_eq!(fmt_time(3661, "days"), "1h1m");
    }

    #[test]
    fn test_fmt_time_with_days() {
        assert_eq!(fmt_time(86_400, "days"), "1 days, 0h0m");
        assert_eq!(fmt_time(90_000, "days"), "1 days, 1h0m");
        assert_eq!(fmt_time(2 * 86_400 + 3 * 3600 + 15 * 60, "dias"), "2 dias, 3h15m");
    }

    #[test]
    fn test_saturation_icon_thresholds() {
        assert_eq!(saturation_icon(0.0), "🟢");
        assert_eq!(saturation_icon(0.749), "🟢");
        assert_eq!(saturation_icon(0.75), "🟡");
        assert_eq!(saturation_icon(0.999), "🟡");
        assert_eq!(saturation_icon(1.0), "🔴");
        assert_eq!(saturation_icon(1.3), "🔴");
    }

    #[test]
    fn test_block_symbol() {
        assert_eq!(block_symbol(0), "");
        assert_eq!(block_symbol(3), " 🎉");
    }
}
