use crate::models::{Question, QuizSession};
use crate::session::{available_controls, NO_MORE_QUESTIONS};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn key_hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(label),
    ]
}

fn question_items<'a, I>(questions: I, max_width: usize) -> Vec<ListItem<'static>>
where
    I: IntoIterator<Item = &'a Question>,
{
    questions
        .into_iter()
        .map(|q| ListItem::new(truncate_string(&q.text, max_width)))
        .collect()
}

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_quiz_chunks(f.area());
    let manager = &session.manager;

    let progress = if manager.is_reviewing() {
        format!(
            "Reviewing skipped ({} left) - Score: {}",
            manager.skipped().len(),
            manager.score()
        )
    } else {
        format!(
            "Question {} / {} - Score: {}",
            (manager.position() + 1).min(manager.len()),
            manager.len(),
            manager.score()
        )
    };
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let title = if manager.is_reviewing() {
        "Review"
    } else {
        "Question"
    };
    let mut question_text = Text::default();
    match manager.current_question() {
        Some(question) => {
            let prefix = if manager.is_reviewing() { "Review" } else { "Q" };
            question_text.push_line(Line::from(format!("{}: {}", prefix, question.text)));
        }
        None if session.status.is_none() => {
            question_text.push_line(Line::from(NO_MORE_QUESTIONS));
        }
        None => {}
    }
    if let Some(status) = &session.status {
        question_text.push_line(Line::from(""));
        question_text.push_line(Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(Color::Yellow),
        )));
    }
    let question = Paragraph::new(question_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(question, layout.question_area);

    let list_width = layout.attempted_area.width.saturating_sub(2) as usize;
    let attempted = List::new(question_items(manager.attempted(), list_width)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Attempted Questions ({})", manager.attempted().len())),
    );
    f.render_widget(attempted, layout.attempted_area);

    let list_width = layout.skipped_area.width.saturating_sub(2) as usize;
    let skipped = List::new(question_items(manager.skipped(), list_width))
        .style(Style::default().fg(Color::LightRed))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Skipped Questions ({})", manager.skipped().len())),
        );
    f.render_widget(skipped, layout.skipped_area);

    let controls = available_controls(session);
    let mut spans = Vec::new();
    if controls.answer {
        spans.extend(key_hint("y", " Yes  "));
        spans.extend(key_hint("n", " No  "));
    }
    if controls.skip {
        spans.extend(key_hint("s", " Skip  "));
    }
    if controls.review {
        spans.extend(key_hint("r", " Review Skipped  "));
    }
    if controls.end {
        spans.extend(key_hint("e", " End Quiz  "));
    }
    spans.extend(key_hint("R", " Restart  "));
    spans.extend(key_hint("q", " Quit"));

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
