use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{palette::tailwind, Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use strum::IntoEnumIterator;

use super::app::App;
use super::screen::{CurrentScreen, FormColors, FormField, FormSlot};
use crate::types::contract::{PartyField, Side};

pub fn ui(frame: &mut Frame, app: &App) {
    // Create the layout sections.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_document(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(app.form_colors.block_bg));

    let mode = match app.current_screen {
        CurrentScreen::Editing => "KONTRAKT (editing)",
        CurrentScreen::Viewing => "KONTRAKT (print preview)",
    };
    let title = Paragraph::new(Text::styled(mode, Style::default().fg(Color::Green)))
        .block(title_block)
        .centered();

    frame.render_widget(title, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let current_keys_hint = {
        match app.current_screen {
            CurrentScreen::Editing => Span::styled(
                "(Ctrl-c) Quit / (Tab) Next Field / (Shift-Tab) Previous Field / (◀︎ ▶︎) Switch Party / (Esc) Preview / (Ctrl-p) Print",
                Style::default().fg(Color::LightBlue),
            ),
            CurrentScreen::Viewing => Span::styled(
                "(q) Quit / (e) Edit / (p) Print",
                Style::default().fg(Color::LightBlue),
            ),
        }
    };

    let key_notes_footer = Paragraph::new(Line::from(current_keys_hint)).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::new().bg(tailwind::SLATE.c900)),
    );
    frame.render_widget(key_notes_footer, area);
}

fn render_document(frame: &mut Frame, app: &App, area: Rect) {
    let document_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    render_heading(frame, app, document_chunks[0]);

    let party_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(document_chunks[1]);

    render_party(frame, app, Side::Supplier, party_chunks[0]);
    render_party(frame, app, Side::Customer, party_chunks[1]);
}

fn render_heading(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.form_colors;
    let editing = app.current_screen == CurrentScreen::Editing;
    let number_focused = editing && app.selected_field == FormField::ContractNumber;
    let date_focused = editing && app.selected_field == FormField::ContractDate;

    let mut number_line = vec![Span::styled("No. ", Style::default().fg(colors.label_fg))];
    number_line.extend(value_spans(
        &app.record.contract_number,
        app.current_screen,
        number_focused,
        colors,
    ));
    number_line.push(Span::styled(" of ", Style::default().fg(colors.label_fg)));
    number_line.extend(value_spans(
        &app.record.contract_date,
        app.current_screen,
        date_focused,
        colors,
    ));

    let heading = vec![
        Line::from(Span::styled(
            "CONTRACT",
            Style::default()
                .fg(colors.heading_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(number_line),
    ];

    let heading_paragraph = Paragraph::new(Text::from(heading))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(colors.block_bg)),
        )
        .centered();
    frame.render_widget(heading_paragraph, area);
}

fn render_party(frame: &mut Frame, app: &App, side: Side, area: Rect) {
    let colors = &app.form_colors;
    let party = app.record.party(side);
    let editing = app.current_screen == CurrentScreen::Editing;
    let side_focused = editing && app.selected_side == side;

    // color the party block according to current selection
    let border_color = if side_focused { Color::Green } else { Color::Reset };

    let mut lines: Vec<Line> = Vec::new();
    for field in PartyField::iter() {
        let focused = side_focused && app.selected_field.slot() == FormSlot::Party(field);
        lines.push(field_line(
            field.to_string(),
            party.get(field),
            app.current_screen,
            focused,
            colors,
        ));
    }

    if let CurrentScreen::Viewing = app.current_screen {
        lines.push(Line::from(""));
        lines.push(Line::from("_________________").right_aligned());
        lines.push(
            Line::from(Span::styled(
                "(signature)",
                Style::default().fg(colors.muted_fg),
            ))
            .right_aligned(),
        );
    }

    let party_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", side))
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.block_bg));

    let party_paragraph = Paragraph::new(Text::from(lines))
        .block(party_block)
        .wrap(Wrap { trim: false });
    frame.render_widget(party_paragraph, area);
}

// one renderer covers both markup branches: an editable line with a block
// cursor on the focused field, or the same content as static text
fn field_line<'a>(
    label: String,
    value: &'a str,
    screen: CurrentScreen,
    focused: bool,
    colors: &FormColors,
) -> Line<'a> {
    let mut spans = vec![Span::styled(
        format!("{}: ", label),
        Style::default().fg(colors.label_fg),
    )];
    spans.extend(value_spans(value, screen, focused, colors));
    Line::from(spans)
}

fn value_spans<'a>(
    value: &'a str,
    screen: CurrentScreen,
    focused: bool,
    colors: &FormColors,
) -> Vec<Span<'a>> {
    match screen {
        CurrentScreen::Editing if focused => vec![
            Span::styled(
                value,
                Style::default()
                    .fg(colors.focused_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(colors.focused_fg)),
        ],
        _ => vec![Span::styled(value, Style::default().fg(colors.value_fg))],
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::print::SystemSpooler;

    fn test_app() -> App {
        App::new(Box::new(SystemSpooler {
            command: "lpr".to_string(),
        }))
    }

    fn rendered_text(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| ui(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for (i, cell) in buffer.content.iter().enumerate() {
            if i != 0 && i % buffer.area.width as usize == 0 {
                text.push('\n');
            }
            text.push_str(cell.symbol());
        }
        text
    }

    #[test]
    fn both_screens_show_the_same_record_values() {
        let mut app = test_app();
        let editing = rendered_text(&app);
        app.toggle_editing();
        let viewing = rendered_text(&app);

        for expected in [
            "001/2025",
            "Postavshchik LLC",
            "Zakazchik LLC",
            "1234567890",
            "0987654321",
            "Ivanov I.I.",
            "Petrov P.P.",
        ] {
            assert!(editing.contains(expected), "editing misses {expected}");
            assert!(viewing.contains(expected), "viewing misses {expected}");
        }
    }

    #[test]
    fn block_cursor_only_appears_while_editing() {
        let mut app = test_app();
        assert!(rendered_text(&app).contains('█'));
        app.toggle_editing();
        assert!(!rendered_text(&app).contains('█'));
    }

    #[test]
    fn signature_rule_only_appears_in_preview() {
        let mut app = test_app();
        assert!(!rendered_text(&app).contains("(signature)"));
        app.toggle_editing();
        let viewing = rendered_text(&app);
        assert!(viewing.contains("(signature)"));
        assert!(viewing.contains("_________________"));
    }

    #[test]
    fn rendering_is_a_pure_function_of_the_state() {
        let app = test_app();
        assert_eq!(rendered_text(&app), rendered_text(&app));
    }

    #[test]
    fn edits_show_up_on_the_next_frame() {
        let mut app = test_app();
        app.advance_field();
        app.advance_field();
        app.push_input('Q');
        assert!(rendered_text(&app).contains("Postavshchik LLCQ"));
    }
}
