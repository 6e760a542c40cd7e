use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Text},
};

use crate::{
    tui::App,
    ui::widgets::{SummaryCharts, color},
};

#[derive(Debug)]
pub struct FilePlot {
    pub title: String,
    pub charts: SummaryCharts,
}

/// Shows the charts of one file at a time.
#[derive(Debug)]
pub struct ViewApp {
    plots: Vec<FilePlot>,
    selected: usize,
    should_exit: bool,
}

impl ViewApp {
    pub fn new(plots: Vec<FilePlot>) -> Self {
        Self {
            plots,
            selected: 0,
            should_exit: false,
        }
    }
}

impl App for ViewApp {
    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
                KeyCode::Left if !self.plots.is_empty() => {
                    self.selected = self
                        .selected
                        .checked_sub(1)
                        .unwrap_or(self.plots.len() - 1);
                }
                KeyCode::Right if !self.plots.is_empty() => {
                    self.selected = (self.selected + 1) % self.plots.len();
                }
                _ => {}
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [title_area, chart_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        if let Some(plot) = self.plots.get(self.selected) {
            let title = Line::from(format!(
                "{} ({}/{})",
                plot.title,
                self.selected + 1,
                self.plots.len()
            ))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .centered();
            frame.render_widget(title, title_area);
            frame.render_widget(&plot.charts, chart_area);
        }

        let help_text = Text::from("←/→: Select file | q/Esc: Quit")
            .style(Style::default().fg(color::HELP))
            .centered();
        frame.render_widget(help_text, help_area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use inflammation_stats::summary::DailySummary;
    use ndarray::array;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn plot(title: &str) -> FilePlot {
        let data = array![[0.0, 1.0, 2.0], [1.0, 2.0, 1.0]];
        FilePlot {
            title: title.to_owned(),
            charts: SummaryCharts::new(&DailySummary::from_table(&data).unwrap()),
        }
    }

    #[test]
    fn test_cycle_files() {
        let mut app = ViewApp::new(vec![plot("a.csv"), plot("b.csv"), plot("c.csv")]);
        app.handle_event(&key(KeyCode::Right));
        assert_eq!(app.selected, 1);
        app.handle_event(&key(KeyCode::Left));
        app.handle_event(&key(KeyCode::Left));
        assert_eq!(app.selected, 2);
        app.handle_event(&key(KeyCode::Right));
        assert_eq!(app.selected, 0);
        assert!(!app.should_exit());
    }

    #[test]
    fn test_quit() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = ViewApp::new(vec![plot("a.csv")]);
            app.handle_event(&key(code));
            assert!(app.should_exit());
        }
    }

    #[test]
    fn test_draw_selected_file() {
        let mut app = ViewApp::new(vec![plot("first.csv"), plot("second.csv")]);
        app.handle_event(&key(KeyCode::Right));

        let mut terminal = Terminal::new(TestBackend::new(80, 50)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buf = terminal.backend().buffer();
        let title = (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol())
            .collect::<String>();
        assert!(title.contains("second.csv (2/2)"), "title row: {title:?}");
    }
}
