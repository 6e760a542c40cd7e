use inflammation_stats::summary::Statistic;
use ndarray::Array1;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::{Marker, merge::MergeStrategy},
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};

use crate::ui::widgets::color;

/// Line plot of one daily statistic against the day index.
#[derive(Debug, Clone)]
pub struct StatisticChart {
    statistic: Statistic,
    points: Vec<(f64, f64)>,
    line: Vec<(f64, f64)>,
}

impl StatisticChart {
    #[expect(clippy::cast_precision_loss)]
    pub fn new(statistic: Statistic, values: &Array1<f64>) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(day, &value)| (day as f64, value))
            .collect::<Vec<_>>();
        // Days without a finite value are left out of the drawn line.
        let line = points
            .iter()
            .copied()
            .filter(|(_, y)| y.is_finite())
            .collect();
        Self {
            statistic,
            points,
            line,
        }
    }

    pub fn statistic(&self) -> Statistic {
        self.statistic
    }

    /// `(day, value)` pairs, one per day.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// The lines drawn by this chart. Always exactly one.
    pub fn datasets(&self) -> Vec<Dataset<'_>> {
        vec![
            Dataset::default()
                .name(self.statistic.as_str())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color::statistic(self.statistic)))
                .data(&self.line),
        ]
    }

    #[expect(clippy::cast_precision_loss)]
    fn day_bounds(&self) -> [f64; 2] {
        let last_day = self.points.len().saturating_sub(1).max(1);
        [0.0, last_day as f64]
    }

    fn value_bounds(&self) -> [f64; 2] {
        let (lo, hi) = self
            .line
            .iter()
            .map(|&(_, y)| y)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
                (lo.min(y), hi.max(y))
            });
        if lo > hi {
            return [0.0, 1.0];
        }
        let lo = lo.min(0.0);
        if hi <= lo { [lo, lo + 1.0] } else { [lo, hi] }
    }
}

fn axis_labels(bounds: [f64; 2]) -> [String; 3] {
    [
        format!("{:.2}", bounds[0]),
        format!("{:.2}", f64::midpoint(bounds[0], bounds[1])),
        format!("{:.2}", bounds[1]),
    ]
}

impl Widget for &StatisticChart {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let x_bounds = self.day_bounds();
        let y_bounds = self.value_bounds();

        let x_axis = Axis::default()
            .title("Day")
            .bounds(x_bounds)
            .labels(axis_labels(x_bounds));
        let y_axis = Axis::default()
            .bounds(y_bounds)
            .labels(axis_labels(y_bounds));
        let chart = Chart::new(self.datasets())
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title(self.statistic.as_str()),
            )
            .x_axis(x_axis)
            .y_axis(y_axis);

        Widget::render(chart, area, buf);
    }
}
