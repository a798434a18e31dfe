use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info};
use yes_no_quiz::{
    draw_quiz, draw_summary, handle_quiz_input, handle_summary_input, logger, sample_deck,
    AppState, Config, QuizError, QuizManager, QuizSession,
};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn run(terminal: &mut Term, session: &mut QuizSession) -> Result<(), QuizError> {
    let mut app_state = AppState::Quiz;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Quiz => draw_quiz(f, session),
            AppState::Summary => draw_summary(f, session),
            AppState::Quit => {}
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match app_state {
                AppState::Quiz => handle_quiz_input(session, key, &mut app_state),
                AppState::Summary => handle_summary_input(session, key, &mut app_state),
                AppState::Quit => {}
            }
        }

        if app_state == AppState::Quit {
            return Ok(());
        }
    }
}

fn main() -> Result<(), QuizError> {
    let config = Config::from_env()?;
    logger::init(&config.log_file)?;

    let questions = sample_deck()?;
    let manager = match config.seed {
        Some(seed) => QuizManager::with_seed(questions, seed),
        None => QuizManager::new(questions),
    };
    info!(questions = manager.len(), seed = ?config.seed, "starting quiz");
    let mut session = QuizSession::new(manager);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("quiz loop failed: {}", e);
    }
    let summary = session.manager.summary();
    info!(score = summary.score, "exiting");
    result
}
