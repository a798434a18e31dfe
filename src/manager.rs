use crate::models::{Question, QuizSummary};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::VecDeque;
use tracing::{debug, info};

const POINTS_RIGHT: i32 = 5;
const POINTS_WRONG: i32 = 1;

/// Owns one quiz attempt: the shuffled sequence, the skipped and attempted
/// queues, and the score.
///
/// Every operation is total. An exhausted sequence or an empty skipped queue
/// is reported as `None` from the question-returning methods.
#[derive(Debug)]
pub struct QuizManager {
    sequence: Vec<Question>,
    position: usize,
    skipped: VecDeque<Question>,
    attempted: Vec<Question>,
    score: i32,
    right_count: usize,
    wrong_count: usize,
    // Present exactly while reviewing; a copy of the skipped front.
    review: Option<Question>,
    rng: StdRng,
}

impl QuizManager {
    pub fn new(questions: Vec<Question>) -> Self {
        Self::with_rng(questions, StdRng::from_entropy())
    }

    /// Same as [`QuizManager::new`] but every shuffle, including those done by
    /// [`QuizManager::restart`], is reproducible from `seed`.
    pub fn with_seed(questions: Vec<Question>, seed: u64) -> Self {
        Self::with_rng(questions, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut questions: Vec<Question>, mut rng: StdRng) -> Self {
        questions.shuffle(&mut rng);
        debug!(count = questions.len(), "quiz created");
        Self {
            sequence: questions,
            position: 0,
            skipped: VecDeque::new(),
            attempted: Vec::new(),
            score: 0,
            right_count: 0,
            wrong_count: 0,
            review: None,
            rng,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.review {
            Some(question) => Some(question),
            None => self.sequence.get(self.position),
        }
    }

    /// Moves the primary flow forward by one question.
    ///
    /// With `Some(answer)` the current question is scored and recorded as
    /// attempted; with `None` it is passed over without scoring. While
    /// reviewing, the call answers the review question instead, and `None`
    /// leaves the review untouched.
    pub fn advance(&mut self, answer: Option<&str>) -> Option<&Question> {
        if self.review.is_some() {
            return match answer {
                Some(answer) => self.review_answer(answer),
                None => self.current_question(),
            };
        }

        if let Some(question) = self.sequence.get(self.position).cloned() {
            if let Some(answer) = answer {
                self.score_answer(&question, answer);
                self.attempted.push(question);
            }
            self.position += 1;
            debug!(position = self.position, scored = answer.is_some(), "advanced");
        }
        self.current_question()
    }

    pub fn skip(&mut self) -> Option<&Question> {
        if self.review.is_none() {
            if let Some(question) = self.sequence.get(self.position).cloned() {
                self.skipped.push_front(question);
                self.position += 1;
                debug!(
                    position = self.position,
                    skipped = self.skipped.len(),
                    "question skipped"
                );
            }
        }
        self.current_question()
    }

    /// Presents the front of the skipped queue without removing it.
    pub fn begin_review(&mut self) -> Option<&Question> {
        self.review = self.skipped.front().cloned();
        debug!(
            reviewing = self.review.is_some(),
            remaining = self.skipped.len(),
            "review requested"
        );
        self.review.as_ref()
    }

    fn review_answer(&mut self, answer: &str) -> Option<&Question> {
        if let Some(question) = self.review.take() {
            self.score_answer(&question, answer);
            self.attempted.push(question);
            self.skipped.pop_front();
        }
        self.begin_review()
    }

    fn score_answer(&mut self, question: &Question, answer: &str) {
        if question.correct.matches(answer) {
            self.score += POINTS_RIGHT;
            self.right_count += 1;
        } else {
            self.score -= POINTS_WRONG;
            self.wrong_count += 1;
        }
        debug!(score = self.score, correct = %question.correct, given = answer, "answer scored");
    }

    /// Starts a new attempt over the same questions in a fresh order.
    pub fn restart(&mut self) {
        self.position = 0;
        self.skipped.clear();
        self.attempted.clear();
        self.score = 0;
        self.right_count = 0;
        self.wrong_count = 0;
        self.review = None;
        self.sequence.shuffle(&mut self.rng);
        info!(count = self.sequence.len(), "quiz restarted");
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn right_count(&self) -> usize {
        self.right_count
    }

    pub fn wrong_count(&self) -> usize {
        self.wrong_count
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn is_reviewing(&self) -> bool {
        self.review.is_some()
    }

    /// True once every question of the primary flow was answered or skipped.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.sequence.len()
    }

    pub fn sequence(&self) -> &[Question] {
        &self.sequence
    }

    /// Skipped questions, front (next to review) first.
    pub fn skipped(&self) -> &VecDeque<Question> {
        &self.skipped
    }

    /// Answered questions in the order they were answered.
    pub fn attempted(&self) -> &[Question] {
        &self.attempted
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            score: self.score,
            right: self.right_count,
            wrong: self.wrong_count,
            skipped: self.skipped.len(),
            attempted: self.attempted.len(),
        }
    }

    #[cfg(test)]
    pub(crate) fn in_order(questions: Vec<Question>) -> Self {
        let mut manager = Self::with_seed(Vec::new(), 0);
        manager.sequence = questions;
        manager
    }
}
