use crate::models::{AppState, QuizSession};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

pub const NO_MORE_QUESTIONS: &str = "No more questions. Review or End the quiz.";
pub const NOTHING_TO_REVIEW: &str = "No skipped questions to review.";

/// Which quiz actions currently have an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub answer: bool,
    pub skip: bool,
    pub review: bool,
    pub end: bool,
}

pub fn available_controls(session: &QuizSession) -> Controls {
    if session.ended {
        return Controls::default();
    }
    let manager = &session.manager;
    Controls {
        answer: manager.current_question().is_some(),
        skip: !manager.is_reviewing() && !manager.is_exhausted(),
        review: !manager.skipped().is_empty(),
        end: true,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn is_restart(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('R') => true,
        KeyCode::Char('r') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn refresh_status(session: &mut QuizSession) {
    session.status = if session.manager.current_question().is_none() {
        Some(NO_MORE_QUESTIONS.to_string())
    } else {
        None
    };
}

pub fn restart_quiz(session: &mut QuizSession, app_state: &mut AppState) {
    session.manager.restart();
    session.ended = false;
    refresh_status(session);
    *app_state = AppState::Quiz;
}

fn end_quiz(session: &mut QuizSession, app_state: &mut AppState) {
    let summary = session.manager.summary();
    info!(
        score = summary.score,
        right = summary.right,
        wrong = summary.wrong,
        skipped = summary.skipped,
        "quiz ended"
    );
    session.ended = true;
    *app_state = AppState::Summary;
}

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    if is_quit(&key) {
        *app_state = AppState::Quit;
        return;
    }
    if is_restart(&key) {
        restart_quiz(session, app_state);
        return;
    }

    let controls = available_controls(session);
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') if controls.answer => {
            session.manager.advance(Some("yes"));
            refresh_status(session);
        }
        KeyCode::Char('n') | KeyCode::Char('N') if controls.answer => {
            session.manager.advance(Some("no"));
            refresh_status(session);
        }
        KeyCode::Char('s') | KeyCode::Char('S') if controls.skip => {
            session.manager.skip();
            refresh_status(session);
        }
        KeyCode::Char('r') if !session.ended => {
            if session.manager.begin_review().is_some() {
                session.status = None;
            } else {
                session.status = Some(NOTHING_TO_REVIEW.to_string());
            }
        }
        KeyCode::Char('e') | KeyCode::Char('E') if controls.end => {
            end_quiz(session, app_state);
        }
        _ => {}
    }
}

pub fn handle_summary_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    if is_quit(&key) {
        *app_state = AppState::Quit;
        return;
    }
    if is_restart(&key) || key.code == KeyCode::Char('r') {
        restart_quiz(session, app_state);
    }
}
