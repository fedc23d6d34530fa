use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{ResourcePanel, ResultsView};
use crate::session::SkillLevel;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, view: &ResultsView) {
    let chunks = Layout::vertical([
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], view);
    render_question_breakdown(frame, chunks[1], view);
    render_resources(frame, chunks[2], view);
    render_controls(frame, chunks[3], view);
}

fn tier_color(level: SkillLevel) -> Color {
    match level {
        SkillLevel::Expert => Color::Green,
        SkillLevel::Advanced => Color::Cyan,
        SkillLevel::Intermediate => Color::Yellow,
        SkillLevel::Beginner => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, view: &ResultsView) {
    let color = tier_color(view.assessment.level);
    let content = vec![
        Line::from(Span::styled(
            format!("{} {}", view.assessment.congrats_message, view.user_name),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%  ({}/{})", view.percentage, view.score, view.total),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(
            view.assessment.level.label(),
            Style::default().fg(color),
        )),
        Line::from(""),
        Line::from(view.assessment.result_message.fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, view: &ResultsView) {
    let lines: Vec<Line> = view
        .answered
        .iter()
        .enumerate()
        .map(|(index, answered)| {
            let (symbol, color) = if answered.is_correct {
                ("+", Color::Green)
            } else if answered.chosen_option_index.is_none() {
                ("·", Color::DarkGray)
            } else {
                ("-", Color::Red)
            };

            let preview = truncate_question(&answered.question.text);

            Line::from(vec![
                Span::styled(format!(" {symbol} "), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(preview, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Your Answers ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll((view.scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_resources(frame: &mut Frame, area: Rect, view: &ResultsView) {
    let lines: Vec<Line> = match &view.resources {
        ResourcePanel::Loading => vec![Line::from(
            "Fetching recommendations...".fg(Color::DarkGray),
        )],
        ResourcePanel::Failed(message) => vec![
            Line::from(Span::styled(
                "Could not load recommended resources.",
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ],
        ResourcePanel::Ready(resources) => resources
            .iter()
            .map(|resource| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", resource.title),
                        Style::default().fg(Color::White).bold(),
                    ),
                    Span::styled(
                        format!("({}) ", resource.url),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        resource.description.clone(),
                        Style::default().fg(Color::Gray),
                    ),
                ])
            })
            .collect(),
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Resources to Progress ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, view: &ResultsView) {
    let controls = if view.certificate_eligible() {
        "j/k scroll  ·  c certificate  ·  r restart  ·  q quit"
    } else {
        "j/k scroll  ·  r restart  ·  q quit"
    };
    let mut lines = vec![Line::from(controls).fg(Color::DarkGray)];
    if let Some(note) = &view.certificate_note {
        lines.insert(
            0,
            Line::from(Span::styled(note.clone(), Style::default().fg(Color::Green))),
        );
    }
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}
