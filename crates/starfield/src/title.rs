//! Static title overlay drawn above the sky.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
};

const TITLE_COLOR: Color = Color::Rgb(216, 204, 255);
const SUBTITLE_COLOR: Color = Color::Rgb(200, 200, 210);
const HELP_KEY_COLOR: Color = Color::Rgb(160, 150, 220);

/// Title and subtitle text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub title: String,
    pub subtitle: String,
}

impl Title {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Areas for the title, the subtitle and the help line.
    fn layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Top padding
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Subtitle
            Constraint::Fill(2),   // Bottom padding
            Constraint::Length(1), // Help text
        ])
        .split(area);
        [chunks[1], chunks[3], chunks[5]]
    }

    /// Draw the overlay. Only text cells are touched, so the sky shows
    /// through everywhere else.
    pub fn render(&self, frame: &mut Frame) {
        let [title_area, subtitle_area, help_area] = Self::layout(frame.area());

        let title = Line::from(Span::styled(
            self.title.as_str(),
            Style::new().fg(TITLE_COLOR).add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(title, title_area);

        let subtitle = Line::from(Span::styled(
            self.subtitle.as_str(),
            Style::new().fg(SUBTITLE_COLOR),
        ))
        .centered();
        frame.render_widget(subtitle, subtitle_area);

        let help = Line::from(vec!["q".bold().fg(HELP_KEY_COLOR), " quit".dark_gray()]).centered();
        frame.render_widget(help, help_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_order() {
        let [title, subtitle, help] = Title::layout(Rect::new(0, 0, 80, 24));
        assert!(title.y < subtitle.y);
        assert!(subtitle.y < help.y);
        assert_eq!(help.y, 23);
        assert_eq!(title.height, 1);
    }
}
