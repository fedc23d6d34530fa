use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::history::HistoryStore;

pub fn render(frame: &mut Frame, area: Rect, history: &HistoryStore, scroll: usize) {
    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(2)])
        .margin(1)
        .split(area);

    let lines: Vec<Line> = if history.is_empty() {
        vec![
            Line::from(""),
            Line::from("No history yet.".fg(Color::DarkGray)),
            Line::from("Complete a quiz to see it here.".fg(Color::DarkGray)),
        ]
    } else {
        history
            .entries()
            .iter()
            .map(|entry| {
                let subject = match &entry.specialty {
                    Some(specialty) => format!("{} / {}", entry.domain, specialty),
                    None => entry.domain.clone(),
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {}  ", entry.date),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{:<40}", subject),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("{}  ", entry.user_name),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        format!("{}/{}  ", entry.score, entry.total_questions),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(entry.level.clone(), Style::default().fg(Color::Yellow)),
                ])
            })
            .collect()
    };

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Past Assessments ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, chunks[0]);

    let controls = Paragraph::new("j/k scroll  ·  x clear all  ·  esc back  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[1]);
}
