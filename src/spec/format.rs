use serde::{Deserialize, Serialize};

/// Tooltip labeling rule attached to one chart.
///
/// Formatting is pure string construction so hover plumbing in any host can
/// reuse it without touching chart state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TooltipFormat {
    /// Raw value with trailing zeros trimmed.
    Plain,
    /// Percentage with a fixed number of decimals, e.g. `43.0%`.
    Percent { decimals: u8 },
    /// Integer count over a fixed denominator, e.g. `64/167`.
    Fraction { total: u32 },
    /// Percentage plus a note chosen by whether the category label carries
    /// `tag`, e.g. `41.0% success (3 attempts)`.
    PercentAnnotated {
        decimals: u8,
        unit: String,
        tag: String,
        tagged_note: String,
        untagged_note: String,
    },
}

impl TooltipFormat {
    /// Formats the value part of a tooltip for a sample in `category_label`.
    #[must_use]
    pub fn value_label(&self, value: f64, category_label: &str) -> String {
        match self {
            Self::Plain => format_trimmed(value),
            Self::Percent { decimals } => {
                format!("{value:.prec$}%", prec = usize::from(*decimals))
            }
            Self::Fraction { total } => format!("{}/{total}", value.round() as i64),
            Self::PercentAnnotated {
                decimals,
                unit,
                tag,
                tagged_note,
                untagged_note,
            } => {
                let note = if category_label.contains(tag.as_str()) {
                    tagged_note
                } else {
                    untagged_note
                };
                format!("{value:.prec$}{unit} {note}", prec = usize::from(*decimals))
            }
        }
    }

    /// Formats the full tooltip line for one hovered sample.
    ///
    /// Annotated formats stand alone; the other formats prefix the series
    /// label when one is present.
    #[must_use]
    pub fn tooltip_label(&self, series_label: &str, category_label: &str, value: f64) -> String {
        let value_label = self.value_label(value, category_label);
        if matches!(self, Self::PercentAnnotated { .. }) || series_label.is_empty() {
            return value_label;
        }
        format!("{series_label}: {value_label}")
    }
}

/// Axis tick labeling rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickFormat {
    Plain,
    Percent,
}

impl TickFormat {
    #[must_use]
    pub fn tick_label(self, value: f64) -> String {
        let text = format_trimmed(value);
        match self {
            Self::Plain => text,
            Self::Percent => format!("{text}%"),
        }
    }
}

/// Integer-valued samples print without a fraction, everything else keeps one
/// decimal place.
fn format_trimmed(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
