use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::QuizRun;
use crate::models::AnsweredQuestion;
use crate::session::Phase;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, run: &QuizRun) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], run);
    render_timer(frame, chunks[1], run);

    match run.session.phase() {
        Phase::Active => {
            if let Some(question) = run.session.current_question() {
                render_question_text(frame, chunks[3], &question.text);
                render_options_active(frame, chunks[4], &question.options, run.selected_option);
            }
        }
        Phase::Transitioning | Phase::Complete => {
            if let Some(answered) = run.session.last_answered() {
                render_question_text(frame, chunks[3], &answered.question.text);
                render_options_revealed(frame, chunks[4], answered);
                render_transition_notice(frame, chunks[5], run);
            }
        }
    }

    render_controls(frame, chunks[6]);
}

fn render_header(frame: &mut Frame, area: Rect, run: &QuizRun) {
    // During the transition the just-answered question stays on screen,
    // so its number does too.
    let number = match run.session.phase() {
        Phase::Active => run.session.current_index() + 1,
        Phase::Transitioning | Phase::Complete => run.session.current_index(),
    };
    let progress = format!("Question {}/{}", number, run.session.total_questions());
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_timer(frame: &mut Frame, area: Rect, run: &QuizRun) {
    if run.session.phase() != Phase::Active {
        return;
    }
    let secs = run.timer.remaining_secs();
    let color = if secs <= 5 { Color::Red } else { Color::Cyan };
    let widget = Gauge::default()
        .ratio(run.timer.ratio())
        .gauge_style(Style::default().fg(color))
        .label(format!("{secs}s"));
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options_active(frame: &mut Frame, area: Rect, options: &[String; 4], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// After an answer is recorded the correct option lights up green; a
/// wrong pick shows red next to it.
fn render_options_revealed(frame: &mut Frame, area: Rect, answered: &AnsweredQuestion) {
    let correct = answered.question.correct_option_index;
    let mut lines: Vec<Line> = Vec::with_capacity(answered.question.options.len() * 2);

    for (index, option) in answered.question.options.iter().enumerate() {
        let is_chosen = answered.chosen_option_index == Some(index);
        let (marker, style) = if index == correct {
            ("+", Style::default().fg(Color::Green).bold())
        } else if is_chosen {
            ("-", Style::default().fg(Color::Red))
        } else {
            (" ", Style::default().fg(Color::DarkGray))
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_transition_notice(frame: &mut Frame, area: Rect, run: &QuizRun) {
    let notice = if answered_was_timeout(run) {
        "Time's up!"
    } else if run.session.current_index() < run.session.total_questions() {
        "Next question..."
    } else {
        "Computing your results..."
    };
    let widget = Paragraph::new(notice)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn answered_was_timeout(run: &QuizRun) -> bool {
    run.session
        .last_answered()
        .is_some_and(|a| a.chosen_option_index.is_none())
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter answer  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
