use crate::error::QuizError;
use crate::models::Question;

const SAMPLE_DECK_JSON: &str = include_str!("../assets/questions.json");

lazy_static::lazy_static! {
    static ref SAMPLE_DECK: Result<Vec<Question>, String> =
        parse_deck(SAMPLE_DECK_JSON).map_err(|e| e.to_string());
}

pub fn parse_deck(json: &str) -> Result<Vec<Question>, serde_json::Error> {
    serde_json::from_str(json)
}

/// The built-in data-structures deck, parsed once on first use.
pub fn sample_deck() -> Result<Vec<Question>, QuizError> {
    SAMPLE_DECK.clone().map_err(QuizError::Deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    #[test]
    fn test_sample_deck_loads() {
        let deck = sample_deck().unwrap();
        assert_eq!(deck.len(), 8);
        assert_eq!(
            deck[0],
            Question::new(
                "Can a queue be implemented using a linked list?",
                Answer::Yes
            )
        );
    }

    #[test]
    fn test_sample_deck_has_both_answers() {
        let deck = sample_deck().unwrap();
        let yes = deck.iter().filter(|q| q.correct == Answer::Yes).count();
        let no = deck.iter().filter(|q| q.correct == Answer::No).count();
        assert_eq!(yes, 4);
        assert_eq!(no, 4);
    }

    #[test]
    fn test_sample_deck_texts_are_unique() {
        let deck = sample_deck().unwrap();
        let mut texts: Vec<&str> = deck.iter().map(|q| q.text.as_str()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), deck.len());
    }

    #[test]
    fn test_parse_deck_rejects_bad_answer() {
        let json = r#"[{"text": "Q", "correct": "sometimes"}]"#;
        assert!(parse_deck(json).is_err());
    }

    #[test]
    fn test_parse_deck_empty() {
        assert!(parse_deck("[]").unwrap().is_empty());
    }
}
