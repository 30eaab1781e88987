use crate::duel::DuelSession;
use crate::ui::theme::{DUEL_GOLD, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, LIFE_CRITICAL};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, session: &DuelSession) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (state, state_style) = if session.is_locked {
            ("Duel over", Style::default().fg(LIFE_CRITICAL))
        } else {
            ("Dueling", Style::default().fg(DUEL_GOLD))
        };
        let flag = |on: bool| if on { "on" } else { "off" };

        let line = Line::from(vec![
            Span::styled(
                "  Duel Companion",
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(state, state_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("snark {}", flag(session.snark_enabled)), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("mock {}", flag(session.mock_enabled)), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
