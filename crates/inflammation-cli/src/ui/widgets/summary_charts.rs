use std::iter;

use inflammation_stats::summary::DailySummary;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Spacing},
    text::Text,
    widgets::Widget,
};

use crate::ui::widgets::StatisticChart;

/// One chart per daily statistic, stacked vertically in summary order.
#[derive(Debug, Clone)]
pub struct SummaryCharts {
    charts: Vec<StatisticChart>,
}

impl SummaryCharts {
    pub fn new(summary: &DailySummary) -> Self {
        let charts = summary
            .iter()
            .map(|(statistic, values)| StatisticChart::new(statistic, values))
            .collect();
        Self { charts }
    }

    pub fn charts(&self) -> &[StatisticChart] {
        &self.charts
    }
}

impl Widget for &SummaryCharts {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if self.charts.is_empty() {
            Text::from("No statistics to plot")
                .centered()
                .render(area, buf);
            return;
        }

        let areas = Layout::vertical(iter::repeat_n(Constraint::Fill(1), self.charts.len()))
            .spacing(Spacing::Overlap(1))
            .split(area);
        for (chart, area) in iter::zip(&self.charts, areas.iter()) {
            Widget::render(chart, *area, buf);
        }
    }
}
