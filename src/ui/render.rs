use crate::duel::{Duelist, PlayerSlot, ToastKind, STARTING_LIFE_POINTS};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, duel_regions, layout_regions};
use crate::ui::settings::SettingsDialog;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, DUEL_GOLD, GLOBAL_BORDER, HEADER_TEXT, LIFE_CRITICAL, LIFE_HEALTHY,
    POPUP_BORDER,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let session = app.session();

    frame.render_widget(Header::new().widget(session), header);
    frame.render_widget(Clear, body);

    let (left, right, keypad) = duel_regions(body);
    let loser = session.loser();
    for (slot, rect) in [(PlayerSlot::PlayerOne, left), (PlayerSlot::PlayerTwo, right)] {
        draw_duelist(frame, rect, session.duelist(slot), loser == Some(slot));
    }
    draw_keypad(frame, keypad, app);

    frame.render_widget(Footer::new().widget(footer, app.status()), footer);

    if let Some(dialog) = app.settings_dialog().dialog() {
        draw_settings(frame, dialog);
    }
}

fn draw_duelist(frame: &mut Frame<'_>, area: Rect, duelist: &Duelist, lost: bool) {
    let life_style = if duelist.life_points <= STARTING_LIFE_POINTS / 4 {
        Style::default().fg(LIFE_CRITICAL)
    } else {
        Style::default().fg(LIFE_HEALTHY)
    };
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            duelist.life_points.to_string(),
            life_style.add_modifier(Modifier::BOLD),
        )),
    ];
    if lost {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Defeated",
            Style::default().fg(LIFE_CRITICAL),
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", duelist.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn draw_keypad(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let entry = Line::from(vec![
        Span::styled("Entry: ", Style::default().fg(HEADER_TEXT)),
        Span::styled(
            app.session().pending_entry.to_string(),
            Style::default().fg(DUEL_GOLD).add_modifier(Modifier::BOLD),
        ),
    ]);
    let toast = match app.active_toast() {
        Some(toast) => {
            let style = match toast.kind {
                ToastKind::DiceRoll | ToastKind::CoinFlip => Style::default().fg(HEADER_TEXT),
                ToastKind::Shame => Style::default().fg(DUEL_GOLD),
                ToastKind::Loss => Style::default().fg(LIFE_CRITICAL),
            };
            Line::from(Span::styled(toast.message.clone(), style))
        }
        None => Line::from(""),
    };

    frame.render_widget(
        Paragraph::new(vec![entry, toast])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        area,
    );
}

fn draw_settings(frame: &mut Frame<'_>, dialog: &SettingsDialog) {
    let area = centered_rect(60, 40, frame.area());
    let mut lines = Vec::new();
    for (index, field) in dialog.fields.iter().enumerate() {
        let marker = if field.value { "[x]" } else { "[ ]" };
        let style = if index == dialog.focused {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {}", marker, field.label),
            style.add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("     {}", field.description),
            style.add_modifier(Modifier::DIM),
        )));
    }
    lines.push(Line::from(""));
    if dialog.confirm_discard {
        lines.push(Line::from(Span::styled(
            " Unsaved changes. Esc again to discard, Enter to save.",
            Style::default().fg(LIFE_CRITICAL),
        )));
    } else {
        lines.push(Line::from(" Space: Toggle │ Enter: Save │ Esc: Close"));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Settings ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        area,
    );
}
