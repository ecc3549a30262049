use proptest::prelude::*;
use report_charts::core::{
    BarOrientation, CategoryBandScale, LinearScale, PlotArea, project_bar_columns,
};

proptest! {
    #[test]
    fn column_count_matches_series_times_categories(
        categories in 1usize..16,
        series_count in 1usize..6,
        max in 1.0f64..1_000.0,
    ) {
        let bands = CategoryBandScale::new(categories).expect("bands");
        let scale = LinearScale::new(0.0, max).expect("scale");
        let plot = PlotArea::new(0.0, 0.0, 800.0, 400.0);

        let series: Vec<Vec<f64>> = (0..series_count)
            .map(|s| (0..categories).map(|c| ((s + c) as f64 % max).max(0.0)).collect())
            .collect();
        let slices: Vec<&[f64]> = series.iter().map(Vec::as_slice).collect();

        let columns = project_bar_columns(&slices, bands, scale, plot, BarOrientation::Vertical)
            .expect("project");
        prop_assert_eq!(columns.len(), series_count * categories);
    }

    #[test]
    fn in_domain_columns_stay_inside_the_plot(
        values in proptest::collection::vec(0.0f64..100.0, 1..16),
    ) {
        let bands = CategoryBandScale::new(values.len()).expect("bands");
        let scale = LinearScale::new(0.0, 100.0).expect("scale");
        let plot = PlotArea::new(20.0, 30.0, 600.0, 300.0);

        let columns = project_bar_columns(
            &[values.as_slice()],
            bands,
            scale,
            plot,
            BarOrientation::Vertical,
        )
        .expect("project");

        for column in &columns {
            prop_assert!(column.x >= plot.x - 1e-9);
            prop_assert!(column.x + column.width <= plot.right() + 1e-9);
            prop_assert!(column.y >= plot.y - 1e-9);
            prop_assert!(column.y + column.height <= plot.bottom() + 1e-9);
        }
    }

    #[test]
    fn horizontal_and_vertical_columns_have_matching_extents(
        values in proptest::collection::vec(0.0f64..100.0, 1..16),
    ) {
        let bands = CategoryBandScale::new(values.len()).expect("bands");
        let scale = LinearScale::new(0.0, 100.0).expect("scale");
        // Swapped spans so value and band axes see identical pixel budgets.
        let vertical_plot = PlotArea::new(0.0, 0.0, 600.0, 300.0);
        let horizontal_plot = PlotArea::new(0.0, 0.0, 300.0, 600.0);

        let vertical = project_bar_columns(
            &[values.as_slice()],
            bands,
            scale,
            vertical_plot,
            BarOrientation::Vertical,
        )
        .expect("vertical");
        let horizontal = project_bar_columns(
            &[values.as_slice()],
            bands,
            scale,
            horizontal_plot,
            BarOrientation::Horizontal,
        )
        .expect("horizontal");

        for (v, h) in vertical.iter().zip(horizontal.iter()) {
            prop_assert!((v.height - h.width).abs() < 1e-9);
            prop_assert!((v.width - h.height).abs() < 1e-9);
        }
    }
}
