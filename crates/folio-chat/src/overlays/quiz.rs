//! The "Challenge Medhasa" quiz.

use serde::Serialize;

use crate::error::ChatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub explanation: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
}

pub static QUESTIONS: [QuizQuestion; 2] = [
    QuizQuestion {
        question: "What is the primary advantage of using Python for machine learning?",
        options: [
            "Fastest execution speed",
            "Rich ecosystem of ML libraries",
            "Lowest memory usage",
            "Best for mobile development",
        ],
        correct: 1,
        explanation: "Python's extensive libraries like scikit-learn, TensorFlow, and pandas make it ideal for ML development.",
        category: "Python",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        question: "In music genre classification, what type of neural network is most effective?",
        options: [
            "Recurrent Neural Network (RNN)",
            "Convolutional Neural Network (CNN)",
            "Multilayer Perceptron (MLP)",
            "Linear Regression",
        ],
        correct: 1,
        explanation: "CNNs excel at processing spectrograms and extracting features from audio data for genre classification.",
        category: "Deep Learning",
        difficulty: Difficulty::Medium,
    },
];

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_option: usize,
    pub explanation: &'static str,
    pub score: u32,
    pub streak: u32,
    /// True once the last question has been answered.
    pub finished: bool,
}

/// Progress through [`QUESTIONS`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizSession {
    current: usize,
    score: u32,
    streak: u32,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current(&self) -> Option<&'static QuizQuestion> {
        QUESTIONS.get(self.current)
    }

    /// 1-based position for display.
    pub fn position(&self) -> (usize, usize) {
        ((self.current + 1).min(QUESTIONS.len()), QUESTIONS.len())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn is_complete(&self) -> bool {
        self.current >= QUESTIONS.len()
    }

    /// Score `option` against the current question and move on.
    pub fn answer(&mut self, option: usize) -> Result<AnswerOutcome, ChatError> {
        let question = self.current().ok_or(ChatError::QuizComplete)?;
        if option >= question.options.len() {
            return Err(ChatError::InvalidOption {
                index: option,
                len: question.options.len(),
            });
        }

        let correct = option == question.correct;
        if correct {
            self.score += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        self.current += 1;

        Ok(AnswerOutcome {
            correct,
            correct_option: question.correct,
            explanation: question.explanation,
            score: self.score,
            streak: self.streak,
            finished: self.is_complete(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_run() {
        let mut quiz = QuizSession::new();
        let first = quiz.answer(1).unwrap();
        assert!(first.correct);
        assert!(!first.finished);
        assert_eq!(quiz.position(), (2, 2));

        let second = quiz.answer(1).unwrap();
        assert!(second.finished);
        assert_eq!(second.score, 2);
        assert_eq!(second.streak, 2);
        assert!(quiz.is_complete());
        assert!(quiz.current().is_none());
    }

    #[test]
    fn test_wrong_answer_resets_streak() {
        let mut quiz = QuizSession::new();
        quiz.answer(1).unwrap();
        let outcome = quiz.answer(0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_option, 1);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.streak, 0);
    }

    #[test]
    fn test_answer_after_completion_is_rejected() {
        let mut quiz = QuizSession::new();
        quiz.answer(1).unwrap();
        quiz.answer(1).unwrap();
        assert!(matches!(quiz.answer(1), Err(ChatError::QuizComplete)));
    }

    #[test]
    fn test_out_of_range_option_does_not_advance() {
        let mut quiz = QuizSession::new();
        assert!(matches!(
            quiz.answer(4),
            Err(ChatError::InvalidOption { index: 4, len: 4 })
        ));
        assert_eq!(quiz.position(), (1, 2));
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn test_reset() {
        let mut quiz = QuizSession::new();
        quiz.answer(1).unwrap();
        quiz.reset();
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.streak(), 0);
        assert_eq!(quiz.position(), (1, 2));
    }
}
