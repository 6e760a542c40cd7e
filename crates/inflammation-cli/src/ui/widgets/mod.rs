pub use self::{statistic_chart::*, summary_charts::*};

mod statistic_chart;
mod summary_charts;

pub(crate) mod color {
    use inflammation_stats::summary::Statistic;
    use ratatui::style::Color;

    pub const fn statistic(statistic: Statistic) -> Color {
        match statistic {
            Statistic::Average => Color::Cyan,
            Statistic::Max => Color::Red,
            Statistic::Min => Color::Green,
            Statistic::Std => Color::Yellow,
        }
    }

    pub const HELP: Color = Color::DarkGray;
}
