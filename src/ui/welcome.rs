use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{HomeForm, HomeStage};
use crate::models::DOMAINS;

pub fn render(frame: &mut Frame, area: Rect, form: &HomeForm) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(20),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "SKILLQUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Assess your skills and level up".fg(Color::DarkGray)),
        Line::from(""),
    ];

    match form.stage {
        HomeStage::Name => {
            content.push(Line::from(vec![
                Span::styled("Your name: ", Style::default().fg(Color::White)),
                Span::styled(&form.name_input, Style::default().fg(Color::Yellow)),
                Span::styled("_", Style::default().fg(Color::Yellow)),
            ]));
            content.push(Line::from(""));
        }
        HomeStage::Domain => {
            content.push(Line::from(
                format!("Hello, {}! Pick a domain:", form.name_input.trim()).fg(Color::White),
            ));
            content.push(Line::from(""));
            for (index, domain) in DOMAINS.iter().enumerate() {
                content.push(selection_line(
                    domain.name,
                    index == form.domain_cursor,
                ));
            }
        }
        HomeStage::Specialty => {
            let domain = form.selected_domain();
            content.push(Line::from(
                format!("{}: pick a specialty", domain.name).fg(Color::White),
            ));
            content.push(Line::from(""));
            for (index, specialty) in domain.specialties.iter().enumerate() {
                content.push(selection_line(
                    specialty,
                    index == form.specialty_cursor,
                ));
            }
        }
    }

    content.push(Line::from(""));
    if let Some(error) = &form.error {
        content.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else {
        content.push(Line::from(""));
    }
    content.push(Line::from(""));
    content.push(Line::from(
        controls_for(form.stage).fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

pub fn render_generating(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Generating your quiz...",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("This can take a few moments.".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn selection_line(label: &str, selected: bool) -> Line<'_> {
    let style = if selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if selected { ">" } else { " " };
    Line::from(Span::styled(format!("{marker} {label}"), style))
}

fn controls_for(stage: HomeStage) -> &'static str {
    match stage {
        HomeStage::Name => "enter continue  ·  tab history  ·  esc quit",
        HomeStage::Domain => "j/k navigate  ·  enter select  ·  tab history  ·  q quit",
        HomeStage::Specialty => "j/k navigate  ·  enter start  ·  esc back  ·  q quit",
    }
}
