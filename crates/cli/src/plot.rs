//! Diversity comparison figure.

use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// One named diversity series.
pub struct Series<'a> {
    pub label: &'a str,
    pub diversity: &'a [usize],
}

const COLORS: [RGBColor; 2] = [BLUE, RED];

/// Draw every series on shared axes as an SVG.
pub fn diversity_figure(out_path: &Path, series: &[Series<'_>]) -> Result<()> {
    let generations = series.iter().map(|s| s.diversity.len()).max().unwrap_or(0);
    let y_max = series
        .iter()
        .flat_map(|s| s.diversity.iter().copied())
        .max()
        .unwrap_or(0)
        .max(1);

    let root = SVGBackend::new(out_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..generations.max(1), 0..(y_max + y_max / 10 + 1))?;

    chart
        .configure_mesh()
        .x_desc("Generations")
        .y_desc("Diversity (alive lineages)")
        .draw()?;

    for (s, &color) in series.iter().zip(COLORS.iter().cycle()) {
        let points = s.diversity.iter().copied().enumerate();
        chart
            .draw_series(LineSeries::new(points, color))?
            .label(s.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
