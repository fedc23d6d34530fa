//! Application state: the screens and the transitions between them.
//!
//! Input handling and the event loop live in `runner`; this module owns
//! the data and the guarded transitions, so the quiz flow stays testable
//! without a terminal.

use std::mem;

use crate::ai::{Language, LearningResource, QuestionRequest, RecommendationRequest};
use crate::certificate::Certificate;
use crate::history::HistoryStore;
use crate::models::{AnsweredQuestion, Domain, HistoryEntry, DOMAINS};
use crate::session::{
    classifier, Assessment, Countdown, Phase, QuizSession, ANSWER_TIME_LIMIT, TRANSITION_DELAY,
};

/// Which screen is currently shown.
pub enum Screen {
    Home(HomeForm),
    /// Waiting for the question-generation collaborator.
    Generating,
    Quiz(QuizRun),
    Results(ResultsView),
    History { scroll: usize },
}

/// Which field of the home form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeStage {
    Name,
    Domain,
    Specialty,
}

const NAME_MAX_LENGTH: usize = 40;

/// The home screen form: name, domain, and (when the domain carries
/// specialties) a specialty.
pub struct HomeForm {
    pub stage: HomeStage,
    pub name_input: String,
    pub domain_cursor: usize,
    pub specialty_cursor: usize,
    pub error: Option<String>,
}

impl HomeForm {
    pub fn new() -> Self {
        Self {
            stage: HomeStage::Name,
            name_input: String::new(),
            domain_cursor: 0,
            specialty_cursor: 0,
            error: None,
        }
    }

    /// Rebuild the form after a failed generation, keeping the name.
    pub fn with_error(name: String, error: String) -> Self {
        Self {
            name_input: name,
            error: Some(error),
            ..Self::new()
        }
    }

    pub fn selected_domain(&self) -> &'static Domain {
        &DOMAINS[self.domain_cursor.min(DOMAINS.len() - 1)]
    }

    pub fn selected_specialty(&self) -> Option<String> {
        let domain = self.selected_domain();
        domain
            .specialties
            .get(self.specialty_cursor)
            .map(|s| s.to_string())
    }

    pub fn push_char(&mut self, c: char) {
        if self.name_input.chars().count() < NAME_MAX_LENGTH {
            self.name_input.push(c);
        }
        self.error = None;
    }

    pub fn pop_char(&mut self) {
        self.name_input.pop();
        self.error = None;
    }

    pub fn move_domain_cursor(&mut self, delta: isize) {
        let len = DOMAINS.len() as isize;
        self.domain_cursor = ((self.domain_cursor as isize + delta + len) % len) as usize;
        self.specialty_cursor = 0;
    }

    pub fn move_specialty_cursor(&mut self, delta: isize) {
        let len = self.selected_domain().specialties.len() as isize;
        if len > 0 {
            self.specialty_cursor =
                ((self.specialty_cursor as isize + delta + len) % len) as usize;
        }
    }
}

impl Default for HomeForm {
    fn default() -> Self {
        Self::new()
    }
}

/// One quiz in progress: the session plus its two clocks.
pub struct QuizRun {
    pub user_name: String,
    pub domain: String,
    pub specialty: Option<String>,
    pub session: QuizSession,
    pub timer: Countdown,
    pub transition: Countdown,
    pub selected_option: usize,
}

impl QuizRun {
    pub fn new(
        user_name: String,
        domain: String,
        specialty: Option<String>,
        session: QuizSession,
    ) -> Self {
        let mut timer = Countdown::new(ANSWER_TIME_LIMIT);
        timer.start();
        Self {
            user_name,
            domain,
            specialty,
            session,
            timer,
            transition: Countdown::new(TRANSITION_DELAY),
            selected_option: 0,
        }
    }
}

/// State of the resources panel on the results screen.
pub enum ResourcePanel {
    Loading,
    Ready(Vec<LearningResource>),
    Failed(String),
}

/// Everything the results screen shows.
pub struct ResultsView {
    pub user_name: String,
    pub domain: String,
    pub specialty: Option<String>,
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
    pub assessment: Assessment,
    pub answered: Vec<AnsweredQuestion>,
    pub resources: ResourcePanel,
    pub certificate_note: Option<String>,
    pub scroll: usize,
}

impl ResultsView {
    pub fn certificate_eligible(&self) -> bool {
        classifier::eligible_for_certificate(self.percentage)
    }
}

/// A recommendation request to dispatch once the lock on [`App`] is
/// released. Tagged with the results epoch so a response that lands after
/// a restart is discarded.
pub struct PendingRecommendation {
    pub epoch: u64,
    pub request: RecommendationRequest,
}

pub struct App {
    pub screen: Screen,
    pub language: Language,
    pub history: HistoryStore,
    pub should_quit: bool,
    results_epoch: u64,
}

impl App {
    pub fn new(language: Language, history: HistoryStore) -> Self {
        Self {
            screen: Screen::Home(HomeForm::new()),
            language,
            history,
            should_quit: false,
            results_epoch: 0,
        }
    }

    pub fn results_epoch(&self) -> u64 {
        self.results_epoch
    }

    /// Build the generation request from the home form and move to the
    /// generating screen. `None` when the form is not ready to start.
    pub fn begin_generation(&mut self) -> Option<(String, QuestionRequest)> {
        let Screen::Home(form) = &self.screen else {
            return None;
        };
        let name = form.name_input.trim().to_string();
        if name.is_empty() {
            return None;
        }
        let domain = form.selected_domain();
        let specialty = if domain.has_specialties() {
            let specialty = form.selected_specialty()?;
            Some(specialty)
        } else {
            None
        };
        let request = QuestionRequest {
            domain: domain.name.to_string(),
            specialty,
            language: self.language,
        };
        self.screen = Screen::Generating;
        Some((name, request))
    }

    /// Surface a generation failure on the home screen. The session is
    /// never entered.
    pub fn fail_generation(&mut self, name: String, error: String) {
        self.screen = Screen::Home(HomeForm::with_error(name, error));
    }

    pub fn enter_quiz(
        &mut self,
        user_name: String,
        domain: String,
        specialty: Option<String>,
        session: QuizSession,
    ) {
        self.screen = Screen::Quiz(QuizRun::new(user_name, domain, specialty, session));
    }

    /// Submit the currently highlighted option. No-op outside the active
    /// phase; the session's guard makes a double submit harmless.
    pub fn submit_selected(&mut self) {
        if let Screen::Quiz(run) = &mut self.screen {
            if run.session.submit_answer(Some(run.selected_option)) {
                run.timer.cancel();
                run.transition.start();
            }
        }
    }

    /// Advance clocks: question timeouts and transition expiries. Returns
    /// the recommendation to dispatch when the session just completed.
    pub fn tick(&mut self) -> Option<PendingRecommendation> {
        let finished = match &mut self.screen {
            Screen::Quiz(run) => match run.session.phase() {
                Phase::Active => {
                    if run.timer.poll_expired() && run.session.submit_answer(None) {
                        run.transition.start();
                    }
                    false
                }
                Phase::Transitioning => {
                    if run.transition.poll_expired() {
                        run.session.finish_transition();
                        if run.session.is_complete() {
                            true
                        } else {
                            run.selected_option = 0;
                            run.timer.start();
                            false
                        }
                    } else {
                        false
                    }
                }
                Phase::Complete => false,
            },
            _ => false,
        };

        if finished {
            if let Screen::Quiz(run) = mem::replace(&mut self.screen, Screen::Generating) {
                return Some(self.enter_results(run));
            }
        }
        None
    }

    /// Classify the finished run, record it in history, and move to the
    /// results screen.
    fn enter_results(&mut self, run: QuizRun) -> PendingRecommendation {
        let total = run.session.total_questions();
        let score = run.session.score();
        let percentage = run.session.percentage();
        let assessment = classifier::classify(percentage);

        self.history.append(HistoryEntry::new(
            run.user_name.clone(),
            run.domain.clone(),
            run.specialty.clone(),
            score,
            total,
            assessment.level.label(),
        ));

        self.results_epoch += 1;
        let request = RecommendationRequest {
            domain: run.domain.clone(),
            specialty: run.specialty.clone(),
            skill_level: assessment.level.label().to_string(),
            language: self.language,
        };

        self.screen = Screen::Results(ResultsView {
            user_name: run.user_name,
            domain: run.domain,
            specialty: run.specialty,
            score,
            total,
            percentage,
            assessment,
            answered: run.session.into_answers(),
            resources: ResourcePanel::Loading,
            certificate_note: None,
            scroll: 0,
        });

        PendingRecommendation {
            epoch: self.results_epoch,
            request,
        }
    }

    /// Apply a resolved recommendation, unless the user has restarted
    /// since it was requested.
    pub fn apply_recommendation(&mut self, epoch: u64, panel: ResourcePanel) {
        if epoch != self.results_epoch {
            return;
        }
        if let Screen::Results(view) = &mut self.screen {
            view.resources = panel;
        }
    }

    /// Back to the home screen. Bumps the epoch so an in-flight
    /// recommendation response is discarded on arrival.
    pub fn restart(&mut self) {
        self.results_epoch += 1;
        self.screen = Screen::Home(HomeForm::new());
    }

    /// Export the certificate for an Expert-tier result.
    pub fn save_certificate(&mut self) {
        let Screen::Results(view) = &mut self.screen else {
            return;
        };
        if !view.certificate_eligible() {
            return;
        }
        let certificate = Certificate {
            user_name: view.user_name.clone(),
            domain: view.domain.clone(),
            level: view.assessment.level.label().to_string(),
            date: chrono::Local::now().format("%d/%m/%Y").to_string(),
        };
        let path = certificate.default_path();
        view.certificate_note = Some(match certificate.write_to(&path) {
            Ok(()) => format!("Certificate saved to {}", path.display()),
            Err(err) => {
                log::warn!("could not write certificate: {err}");
                format!("Could not save certificate: {err}")
            }
        });
    }

    pub fn open_history(&mut self) {
        if matches!(self.screen, Screen::Home(_)) {
            self.screen = Screen::History { scroll: 0 };
        }
    }

    pub fn close_history(&mut self) {
        if matches!(self.screen, Screen::History { .. }) {
            self.screen = Screen::Home(HomeForm::new());
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::models::Question;

    fn question(correct: usize) -> Question {
        Question {
            text: "q".to_string(),
            options: [
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_option_index: correct,
        }
    }

    fn history() -> HistoryStore {
        HistoryStore::load(
            std::env::temp_dir().join(format!("skillquiz-app-{}.json", uuid::Uuid::new_v4())),
        )
    }

    fn app_in_quiz(questions: Vec<Question>) -> App {
        let mut app = App::new(Language::English, history());
        let session = QuizSession::new(questions).unwrap();
        app.enter_quiz(
            "Ada".to_string(),
            "Databases".to_string(),
            None,
            session,
        );
        app
    }

    #[test]
    fn test_completion_records_history_and_requests_resources() {
        let mut app = app_in_quiz(vec![question(0)]);
        app.submit_selected();
        // collapse the transition window so the tick completes the run
        if let Screen::Quiz(run) = &mut app.screen {
            run.transition = Countdown::new(Duration::ZERO);
            run.transition.start();
        }
        let pending = app.tick().expect("completion should request resources");
        assert_eq!(pending.epoch, app.results_epoch());
        assert_eq!(pending.request.skill_level, "Expert");

        let Screen::Results(view) = &app.screen else {
            panic!("expected results screen");
        };
        assert_eq!(view.score, 1);
        assert_eq!(view.percentage, 100);
        assert!(view.certificate_eligible());
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history.entries()[0].level, "Expert");
        app.history.clear();
    }

    #[test]
    fn test_stale_recommendation_is_discarded_after_restart() {
        let mut app = app_in_quiz(vec![question(0)]);
        app.submit_selected();
        if let Screen::Quiz(run) = &mut app.screen {
            run.transition = Countdown::new(Duration::ZERO);
            run.transition.start();
        }
        let pending = app.tick().unwrap();
        app.restart();
        app.apply_recommendation(pending.epoch, ResourcePanel::Ready(Vec::new()));
        assert!(matches!(app.screen, Screen::Home(_)));
        app.history.clear();
    }

    #[test]
    fn test_timeout_is_submitted_as_no_answer() {
        let mut app = app_in_quiz(vec![question(0), question(1)]);
        if let Screen::Quiz(run) = &mut app.screen {
            run.timer = Countdown::new(Duration::ZERO);
            run.timer.start();
        }
        assert!(app.tick().is_none());
        let Screen::Quiz(run) = &app.screen else {
            panic!("expected quiz screen");
        };
        assert_eq!(run.session.phase(), Phase::Transitioning);
        let answered = run.session.last_answered().unwrap();
        assert_eq!(answered.chosen_option_index, None);
        assert!(!answered.is_correct);
    }

    #[test]
    fn test_begin_generation_requires_a_name() {
        let mut app = App::new(Language::French, history());
        assert!(app.begin_generation().is_none());
        if let Screen::Home(form) = &mut app.screen {
            for c in "Ada".chars() {
                form.push_char(c);
            }
        }
        let (name, request) = app.begin_generation().unwrap();
        assert_eq!(name, "Ada");
        assert_eq!(request.domain, "Software Development");
        assert_eq!(request.specialty.as_deref(), Some("Web Frontend"));
        assert!(matches!(app.screen, Screen::Generating));
    }
}
