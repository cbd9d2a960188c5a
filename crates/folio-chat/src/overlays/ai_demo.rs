//! "Try My AI" panel: keyword sentiment scoring and a mock genre classifier.
//!
//! Neither model is trained; both only need to look plausible. Every random
//! component is drawn from the caller's [`RandomSource`] so runs can be
//! replayed.

use serde::Serialize;

use crate::error::ChatError;
use crate::random::RandomSource;

pub const GENRES: [&str; 6] = ["Rock", "Pop", "Jazz", "Classical", "Hip-Hop", "Electronic"];

static POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "love",
    "happy",
    "wonderful",
    "fantastic",
];
static NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "hate", "sad", "angry", "horrible", "worst",
];

static ANGER_CUES: &[&str] = &["angry", "mad"];
static FEAR_CUES: &[&str] = &["scared", "afraid"];
static SURPRISE_CUES: &[&str] = &["wow", "amazing"];

fn count_present(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| text.contains(*w)).count()
}

/// Draw uniformly from `[low, low + span)`.
fn draw(rng: &mut dyn RandomSource, low: f64, span: f64) -> f64 {
    low + rng.next_unit() * span
}

// =============================================================================
// Genre classification
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenrePrediction {
    pub genre: &'static str,
    /// Between 0.75 and 0.99.
    pub confidence: f64,
}

/// Label an uploaded clip. The audio itself is never inspected.
pub fn classify_genre(rng: &mut dyn RandomSource) -> GenrePrediction {
    let genre = GENRES[rng.pick_index(GENRES.len())];
    let confidence = draw(rng, 0.75, 0.24);
    GenrePrediction { genre, confidence }
}

// =============================================================================
// Sentiment analysis
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Emotions {
    pub joy: f64,
    pub sadness: f64,
    pub anger: f64,
    pub fear: f64,
    pub surprise: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentAnalysis {
    pub sentiment: Sentiment,
    /// 0 is fully negative, 1 fully positive.
    pub score: f64,
    pub emotions: Emotions,
}

/// Score `text` by counting positive against negative keywords.
///
/// The winning side sets the band the score is drawn from: positive
/// `[0.7, 1.0)`, negative `[0.0, 0.3)`, a tie `[0.4, 0.6)`.
pub fn analyze_sentiment(
    text: &str,
    rng: &mut dyn RandomSource,
) -> Result<SentimentAnalysis, ChatError> {
    if text.trim().is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    let text = text.to_lowercase();
    let positive = count_present(&text, POSITIVE_WORDS);
    let negative = count_present(&text, NEGATIVE_WORDS);

    let (sentiment, score) = if positive > negative {
        (Sentiment::Positive, draw(rng, 0.7, 0.3))
    } else if negative > positive {
        (Sentiment::Negative, draw(rng, 0.0, 0.3))
    } else {
        (Sentiment::Neutral, draw(rng, 0.4, 0.2))
    };

    let joy = match sentiment {
        Sentiment::Positive => score,
        _ => draw(rng, 0.0, 0.3),
    };
    let sadness = match sentiment {
        Sentiment::Negative => score,
        _ => draw(rng, 0.0, 0.2),
    };
    let anger = if count_present(&text, ANGER_CUES) > 0 {
        draw(rng, 0.6, 0.4)
    } else {
        draw(rng, 0.0, 0.2)
    };
    let fear = if count_present(&text, FEAR_CUES) > 0 {
        draw(rng, 0.6, 0.4)
    } else {
        draw(rng, 0.0, 0.1)
    };
    let surprise = if count_present(&text, SURPRISE_CUES) > 0 {
        draw(rng, 0.5, 0.5)
    } else {
        draw(rng, 0.0, 0.3)
    };

    Ok(SentimentAnalysis {
        sentiment,
        score,
        emotions: Emotions {
            joy,
            sadness,
            anger,
            fear,
            surprise,
        },
    })
}
