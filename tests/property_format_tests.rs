use proptest::prelude::*;
use report_charts::spec::{TickFormat, TooltipFormat};

proptest! {
    #[test]
    fn percent_labels_always_carry_the_suffix(
        value in -1_000.0f64..1_000.0,
        decimals in 0u8..4,
    ) {
        let format = TooltipFormat::Percent { decimals };
        let label = format.value_label(value, "any");
        prop_assert!(label.ends_with('%'));
        if decimals > 0 {
            let digits = label.trim_end_matches('%');
            let fraction = digits.split('.').nth(1).unwrap_or("");
            prop_assert_eq!(fraction.len(), usize::from(decimals));
        }
    }

    #[test]
    fn fraction_labels_round_to_nearest_integer(
        value in 0.0f64..10_000.0,
        total in 1u32..100_000,
    ) {
        let format = TooltipFormat::Fraction { total };
        let label = format.value_label(value, "any");
        let expected = format!("{}/{}", value.round() as i64, total);
        prop_assert_eq!(label, expected);
    }

    #[test]
    fn tooltip_lines_prefix_nonempty_series_labels(
        value in 0.0f64..100.0,
        series in "[a-zA-Z][a-zA-Z0-9 +-]{0,20}",
    ) {
        let format = TooltipFormat::Percent { decimals: 1 };
        let label = format.tooltip_label(&series, "category", value);
        let prefix = format!("{series}: ");
        prop_assert!(label.starts_with(&prefix));
    }

    #[test]
    fn percent_ticks_wrap_plain_ticks(value in -10_000.0f64..10_000.0) {
        let plain = TickFormat::Plain.tick_label(value);
        let percent = TickFormat::Percent.tick_label(value);
        prop_assert_eq!(percent, format!("{plain}%"));
    }
}
