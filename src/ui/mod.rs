mod history;
mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.screen {
        Screen::Home(form) => welcome::render(frame, area, form),
        Screen::Generating => welcome::render_generating(frame, area),
        Screen::Quiz(run) => quiz::render(frame, area, run),
        Screen::Results(view) => result::render(frame, area, view),
        Screen::History { scroll } => history::render(frame, area, &app.history, *scroll),
    }
}
