use crate::models::QuizSession;
use crate::ui::layout::calculate_summary_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_summary_chunks(f.area());
    let summary = session.manager.summary();

    let title = Paragraph::new("Quiz Completed!")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut text = Text::default();
    text.push_line(Line::from(format!("Total Score: {}", summary.score)));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        format!("Right Answers: {}", summary.right),
        Style::default().fg(Color::Green),
    )));
    text.push_line(Line::from(Span::styled(
        format!("Wrong Answers: {}", summary.wrong),
        Style::default().fg(Color::Red),
    )));
    text.push_line(Line::from(format!("Skipped Questions: {}", summary.skipped)));
    text.push_line(Line::from(format!(
        "Attempted: {} of {}",
        summary.attempted,
        session.manager.len()
    )));

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Restart Quiz  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
