//! The benchmark report charts, baked in as declarative specs.
//!
//! All numbers are frozen results fixtures from the ICPC World Finals and
//! Codeforces evaluation runs; nothing here is computed at render time.

use crate::render::Color;
use crate::spec::{
    ChartKind, ChartSpec, LegendPosition, ResultSeries, SeriesPaint, SeriesStyle, TickFormat,
    TooltipFormat, ValueAxis,
};

/// ICPC World Finals problem-set size, the denominator of every count tooltip.
pub const ICPC_PROBLEM_COUNT: u32 = 167;

// Report palette.
const INDIGO: Color = Color::rgba(99.0 / 255.0, 102.0 / 255.0, 241.0 / 255.0, 1.0);
const VIOLET: Color = Color::rgba(139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0, 1.0);
const PINK: Color = Color::rgba(236.0 / 255.0, 72.0 / 255.0, 153.0 / 255.0, 1.0);
const EMERALD: Color = Color::rgba(16.0 / 255.0, 185.0 / 255.0, 129.0 / 255.0, 1.0);
const RED: Color = Color::rgba(239.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0, 1.0);
const BLUE: Color = Color::rgba(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0, 1.0);

/// ICPC pass@k counts per workflow combination, grouped bars.
#[must_use]
pub fn icpc_pass_rate_chart() -> ChartSpec {
    let labels = vec![
        "GPT-5 + DeepSeek".to_owned(),
        "GPT-5 + Llama".to_owned(),
        "GPT-5 + Codestral".to_owned(),
        "GPT-4 + DeepSeek".to_owned(),
        "GPT-4 + Llama".to_owned(),
        "GPT-4 + Codestral".to_owned(),
    ];

    let pass_at = |label: &str, values: Vec<f64>, color: Color| {
        ResultSeries::new(label, values)
            .with_colors(color, color.with_alpha(0.6))
            .with_stroke_width(2.0)
    };

    ChartSpec {
        surface_id: "icpcPassRateChart".to_owned(),
        kind: ChartKind::BarVertical,
        title: format!("ICPC World Finals: Pass@k Performance ({ICPC_PROBLEM_COUNT} problems)"),
        labels,
        series: vec![
            pass_at(
                "Pass@0 (Zero-shot)",
                vec![39.0, 39.0, 39.0, 15.0, 15.0, 15.0],
                INDIGO,
            ),
            pass_at("Pass@1", vec![64.0, 59.0, 61.0, 22.0, 19.0, 18.0], VIOLET),
            pass_at("Pass@2", vec![79.0, 73.0, 78.0, 30.0, 26.0, 24.0], PINK),
            pass_at("Pass@3", vec![90.0, 87.0, 85.0, 38.0, 34.0, 31.0], EMERALD),
        ],
        value_axis: ValueAxis::new(0.0, 100.0).with_title("Problems Solved"),
        category_axis_title: Some("Workflow Combination".to_owned()),
        legend: LegendPosition::Top,
        tooltip: TooltipFormat::Fraction {
            total: ICPC_PROBLEM_COUNT,
        },
    }
}

/// Codeforces pass@k percentages across refinement iterations, one line per
/// workflow; GPT-4 baselines are thinner and dashed.
#[must_use]
pub fn codeforces_pass_rate_chart() -> ChartSpec {
    let gpt5 = |label: &str, values: Vec<f64>, color: Color| {
        ResultSeries::new(label, values)
            .with_colors(color, color.with_alpha(0.1))
            .with_stroke_width(3.0)
            .with_point_radius(6.0)
    };
    let gpt4 = |label: &str, values: Vec<f64>, color: Color| {
        ResultSeries::new(label, values)
            .with_colors(color.with_alpha(0.6), color.with_alpha(0.05))
            .with_stroke_width(2.0)
            .with_point_radius(5.0)
            .with_dash([5.0, 5.0])
    };

    ChartSpec {
        surface_id: "codeforcesPassRateChart".to_owned(),
        kind: ChartKind::Line,
        title: "Codeforces: Pass@k Rate Evolution (200 problems, rating 1200-1800)".to_owned(),
        labels: vec![
            "Pass@0".to_owned(),
            "Pass@1".to_owned(),
            "Pass@2".to_owned(),
            "Pass@3".to_owned(),
        ],
        series: vec![
            gpt5("GPT-5 + DeepSeek", vec![22.0, 43.0, 52.5, 41.0], EMERALD),
            gpt5("GPT-5 + Llama", vec![22.5, 45.0, 53.5, 37.0], VIOLET),
            gpt5("GPT-5 + Codestral", vec![20.5, 42.0, 49.5, 34.0], INDIGO),
            gpt4("GPT-4 + DeepSeek", vec![10.0, 19.0, 26.0, 26.0], EMERALD),
            gpt4("GPT-4 + Llama", vec![10.5, 21.0, 26.5, 23.5], VIOLET),
            gpt4("GPT-4 + Codestral", vec![9.0, 18.0, 22.5, 21.0], INDIGO),
        ],
        value_axis: ValueAxis::new(0.0, 60.0)
            .with_title("Success Rate (%)")
            .with_tick_format(TickFormat::Percent),
        category_axis_title: Some("Refinement Iteration".to_owned()),
        legend: LegendPosition::Top,
        tooltip: TooltipFormat::Percent { decimals: 1 },
    }
}

/// Pass@3 success rates against published state-of-the-art systems,
/// horizontal bars with per-entry paints.
#[must_use]
pub fn sota_comparison_chart() -> ChartSpec {
    let fills = vec![
        EMERALD.with_alpha(0.8),
        RED.with_alpha(0.6),
        VIOLET.with_alpha(0.8),
        INDIGO.with_alpha(0.8),
        RED.with_alpha(0.4),
        BLUE.with_alpha(0.8),
    ];
    let strokes = vec![EMERALD, RED, VIOLET, INDIGO, RED, BLUE];

    ChartSpec {
        surface_id: "sotaComparisonChart".to_owned(),
        kind: ChartKind::BarHorizontal,
        title: "Comparison with State-of-the-Art Systems".to_owned(),
        labels: vec![
            "GPT-5 + DeepSeek (Ours)".to_owned(),
            "AlphaCode 2".to_owned(),
            "GPT-5 + Llama (Ours)".to_owned(),
            "GPT-5 + Codestral (Ours)".to_owned(),
            "AlphaCode 1".to_owned(),
            "GPT-4 + DeepSeek (Ours)".to_owned(),
        ],
        series: vec![
            ResultSeries::new(
                "Pass@3 / Success Rate",
                vec![41.0, 43.0, 37.0, 34.0, 34.0, 26.0],
            )
            .with_style(SeriesStyle {
                stroke: SeriesPaint::PerCategory(strokes),
                fill: SeriesPaint::PerCategory(fills),
                stroke_width: 2.0,
                ..SeriesStyle::default()
            }),
        ],
        value_axis: ValueAxis::new(0.0, 50.0)
            .with_title("Success Rate (%)")
            .with_tick_format(TickFormat::Percent),
        category_axis_title: None,
        legend: LegendPosition::Hidden,
        tooltip: TooltipFormat::PercentAnnotated {
            decimals: 1,
            unit: "% success".to_owned(),
            tag: "(Ours)".to_owned(),
            tagged_note: "(3 attempts)".to_owned(),
            untagged_note: "(1M samples)".to_owned(),
        },
    }
}

/// Debugging-critic comparison across five normalized metrics, radar.
#[must_use]
pub fn critic_comparison_chart() -> ChartSpec {
    let critic = |label: &str, values: Vec<f64>, color: Color| {
        ResultSeries::new(label, values)
            .with_colors(color, color.with_alpha(0.2))
            .with_stroke_width(3.0)
            .with_point_radius(3.0)
    };

    ChartSpec {
        surface_id: "criticComparisonChart".to_owned(),
        kind: ChartKind::Radar,
        title: "Debugging Critic Performance Comparison (Averaged Across Generators)".to_owned(),
        labels: vec![
            "ICPC Pass@0".to_owned(),
            "ICPC Pass@3".to_owned(),
            "CF Pass@3".to_owned(),
            "Improvement %".to_owned(),
            "Avg Attempts".to_owned(),
        ],
        series: vec![
            critic("DeepSeek-R1", vec![27.0, 64.0, 33.5, 135.0, 90.0], EMERALD),
            critic(
                "Llama-3.3-70B",
                vec![27.0, 60.5, 30.25, 125.0, 88.0],
                VIOLET,
            ),
            critic(
                "Codestral-2508",
                vec![27.0, 58.0, 27.5, 112.5, 85.0],
                INDIGO,
            ),
        ],
        value_axis: ValueAxis::new(0.0, 150.0).with_tick_step(30.0),
        category_axis_title: None,
        legend: LegendPosition::Top,
        tooltip: TooltipFormat::Plain,
    }
}

/// Every chart on the report page, in document order.
#[must_use]
pub fn report_charts() -> Vec<ChartSpec> {
    vec![
        icpc_pass_rate_chart(),
        codeforces_pass_rate_chart(),
        sota_comparison_chart(),
        critic_comparison_chart(),
    ]
}
