//! Terminal setup, the event loop, and keyboard handling.
//!
//! The loop polls input with a short timeout so the per-question timer
//! and the transition delay keep advancing while the user is idle.
//! Collaborator calls run on spawned tasks that update the shared app
//! state when they resolve, the same way the results of a slow network
//! peer would.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::Mutex;

use crate::ai::{QuestionSource, ResourceRecommender};
use crate::app::{App, HomeStage, PendingRecommendation, ResourcePanel, Screen};
use crate::session::{Phase, QuizSession};
use crate::ui;

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;
type SharedApp = Arc<Mutex<App>>;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The two external services the app talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub questions: Arc<dyn QuestionSource + Send + Sync>,
    pub resources: Arc<dyn ResourceRecommender + Send + Sync>,
}

/// Run the app until the user quits.
pub async fn run(app: App, collaborators: Collaborators) -> io::Result<()> {
    let app = Arc::new(Mutex::new(app));
    let mut terminal = init_terminal()?;
    let result = run_event_loop(&mut terminal, &app, &collaborators).await;
    restore_terminal()?;
    result
}

async fn run_event_loop(
    terminal: &mut AppTerminal,
    app: &SharedApp,
    collaborators: &Collaborators,
) -> io::Result<()> {
    loop {
        let pending = {
            let mut app = app.lock().await;
            if app.should_quit {
                break;
            }
            let pending = app.tick();
            terminal.draw(|frame| ui::render(frame, &app))?;
            pending
        };
        if let Some(pending) = pending {
            spawn_recommendation(app, collaborators, pending);
        }

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(app, collaborators, key.code).await;
            }
        }
    }
    Ok(())
}

/// A whole-app action decided while matching on the current screen.
enum Action {
    None,
    Quit,
    StartQuiz,
    Submit,
    SaveCertificate,
    Restart,
    OpenHistory,
    CloseHistory,
    ClearHistory,
}

async fn handle_key(app: &SharedApp, collaborators: &Collaborators, key: KeyCode) {
    let mut guard = app.lock().await;

    // Screen-local edits happen inline; anything touching the app as a
    // whole is deferred until the screen borrow ends.
    let action = {
        let app = &mut *guard;
        match &mut app.screen {
            Screen::Home(form) => match form.stage {
                HomeStage::Name => match key {
                    KeyCode::Char(c) => {
                        form.push_char(c);
                        Action::None
                    }
                    KeyCode::Backspace => {
                        form.pop_char();
                        Action::None
                    }
                    KeyCode::Enter => {
                        if !form.name_input.trim().is_empty() {
                            form.stage = HomeStage::Domain;
                        }
                        Action::None
                    }
                    KeyCode::Tab => Action::OpenHistory,
                    KeyCode::Esc => Action::Quit,
                    _ => Action::None,
                },
                HomeStage::Domain => match key {
                    KeyCode::Up | KeyCode::Char('k') => {
                        form.move_domain_cursor(-1);
                        Action::None
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        form.move_domain_cursor(1);
                        Action::None
                    }
                    KeyCode::Enter => {
                        if form.selected_domain().has_specialties() {
                            form.stage = HomeStage::Specialty;
                            Action::None
                        } else {
                            Action::StartQuiz
                        }
                    }
                    KeyCode::Tab => Action::OpenHistory,
                    KeyCode::Esc => {
                        form.stage = HomeStage::Name;
                        Action::None
                    }
                    KeyCode::Char('q') => Action::Quit,
                    _ => Action::None,
                },
                HomeStage::Specialty => match key {
                    KeyCode::Up | KeyCode::Char('k') => {
                        form.move_specialty_cursor(-1);
                        Action::None
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        form.move_specialty_cursor(1);
                        Action::None
                    }
                    KeyCode::Enter => Action::StartQuiz,
                    KeyCode::Esc => {
                        form.stage = HomeStage::Domain;
                        Action::None
                    }
                    KeyCode::Char('q') => Action::Quit,
                    _ => Action::None,
                },
            },
            Screen::Generating => match key {
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                _ => Action::None,
            },
            Screen::Quiz(run) => match key {
                KeyCode::Up | KeyCode::Char('k') => {
                    if run.session.phase() == Phase::Active {
                        let total = option_count(run);
                        run.selected_option = (run.selected_option + total - 1) % total;
                    }
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if run.session.phase() == Phase::Active {
                        let total = option_count(run);
                        run.selected_option = (run.selected_option + 1) % total;
                    }
                    Action::None
                }
                KeyCode::Enter | KeyCode::Char(' ') => Action::Submit,
                KeyCode::Char('q') => Action::Quit,
                _ => Action::None,
            },
            Screen::Results(view) => match key {
                KeyCode::Up | KeyCode::Char('k') => {
                    view.scroll = view.scroll.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    view.scroll = (view.scroll + 1).min(view.answered.len().saturating_sub(1));
                    Action::None
                }
                KeyCode::Char('c') => Action::SaveCertificate,
                KeyCode::Char('r') => Action::Restart,
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                _ => Action::None,
            },
            Screen::History { scroll } => match key {
                KeyCode::Up | KeyCode::Char('k') => {
                    *scroll = scroll.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    *scroll = (*scroll + 1).min(app.history.len().saturating_sub(1));
                    Action::None
                }
                KeyCode::Char('x') => Action::ClearHistory,
                KeyCode::Tab | KeyCode::Esc => Action::CloseHistory,
                KeyCode::Char('q') => Action::Quit,
                _ => Action::None,
            },
        }
    };

    match action {
        Action::None => {}
        Action::Quit => guard.should_quit = true,
        Action::Submit => guard.submit_selected(),
        Action::SaveCertificate => guard.save_certificate(),
        Action::Restart => guard.restart(),
        Action::OpenHistory => guard.open_history(),
        Action::CloseHistory => guard.close_history(),
        Action::ClearHistory => guard.clear_history(),
        Action::StartQuiz => {
            drop(guard);
            start_quiz(app, collaborators).await;
        }
    }
}

fn option_count(run: &crate::app::QuizRun) -> usize {
    run.session
        .current_question()
        .map(|q| q.options.len())
        .unwrap_or(1)
}

/// Kick off question generation on a background task. On success the quiz
/// starts; on any failure the home screen shows the error and the session
/// is never entered.
async fn start_quiz(app: &SharedApp, collaborators: &Collaborators) {
    let request = {
        let mut guard = app.lock().await;
        guard.begin_generation()
    };
    let Some((user_name, request)) = request else {
        return;
    };

    let app = Arc::clone(app);
    let source = Arc::clone(&collaborators.questions);
    tokio::spawn(async move {
        let outcome = source
            .generate(&request)
            .await
            .and_then(|questions| Ok(QuizSession::new(questions)?));
        let mut guard = app.lock().await;
        match outcome {
            Ok(session) => {
                guard.enter_quiz(user_name, request.domain, request.specialty, session);
            }
            Err(err) => {
                log::warn!("question generation failed: {err}");
                guard.fail_generation(user_name, format!("Could not generate the quiz: {err}"));
            }
        }
    });
}

/// Fetch learning resources for a completed run on a background task.
/// Failure only degrades the resources panel; a response arriving after a
/// restart is dropped by the epoch check.
fn spawn_recommendation(
    app: &SharedApp,
    collaborators: &Collaborators,
    pending: PendingRecommendation,
) {
    let app = Arc::clone(app);
    let recommender = Arc::clone(&collaborators.resources);
    tokio::spawn(async move {
        let panel = match recommender.recommend(&pending.request).await {
            Ok(resources) => ResourcePanel::Ready(resources),
            Err(err) => {
                log::warn!("resource recommendation failed: {err}");
                ResourcePanel::Failed(err.to_string())
            }
        };
        app.lock().await.apply_recommendation(pending.epoch, panel);
    });
}

fn init_terminal() -> io::Result<AppTerminal> {
    setup_panic_hook();
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
