//! Lexicon-based sentiment polarity.

use unicode_segmentation::UnicodeSegmentation;

/// Interface implemented by sentiment backends.
pub trait SentimentScorer: Send + Sync {
    /// Polarity of `text` in `[-1.0, 1.0]`; text without sentiment-bearing words scores `0.0`.
    fn polarity(&self, text: &str) -> f64;
}

const LEXICON: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("outstanding", 0.9),
    ("wonderful", 1.0),
    ("amazing", 0.6),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("happy", 0.8),
    ("glad", 0.5),
    ("pleased", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("beautiful", 0.85),
    ("perfect", 1.0),
    ("success", 0.3),
    ("successful", 0.75),
    ("win", 0.8),
    ("won", 0.6),
    ("victory", 0.5),
    ("peace", 0.4),
    ("peaceful", 0.5),
    ("agree", 0.3),
    ("agreement", 0.2),
    ("benefit", 0.3),
    ("beneficial", 0.5),
    ("positive", 0.23),
    ("hope", 0.3),
    ("hopeful", 0.4),
    ("important", 0.4),
    ("strong", 0.43),
    ("safe", 0.5),
    ("secure", 0.4),
    ("fair", 0.7),
    ("honest", 0.6),
    ("helpful", 0.5),
    ("friendly", 0.4),
    ("brilliant", 0.9),
    ("impressive", 1.0),
    ("remarkable", 0.75),
    ("fortunate", 0.4),
    ("progress", 0.3),
    ("improve", 0.4),
    ("improved", 0.5),
    ("celebrate", 0.5),
    ("support", 0.2),
    ("easy", 0.43),
    ("fine", 0.42),
    ("welcome", 0.8),
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -1.0),
    ("poor", -0.4),
    ("sad", -0.5),
    ("unhappy", -0.6),
    ("angry", -0.5),
    ("hate", -0.8),
    ("hated", -0.9),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.32),
    ("war", -0.4),
    ("death", -0.6),
    ("dead", -0.2),
    ("kill", -0.6),
    ("killed", -0.2),
    ("attack", -0.5),
    ("violent", -0.8),
    ("violence", -0.7),
    ("crisis", -0.5),
    ("danger", -0.6),
    ("dangerous", -0.6),
    ("threat", -0.5),
    ("fear", -0.6),
    ("afraid", -0.6),
    ("wrong", -0.5),
    ("problem", -0.3),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("weak", -0.38),
    ("loss", -0.4),
    ("lost", -0.3),
    ("damage", -0.5),
    ("destroyed", -0.6),
    ("disaster", -0.8),
    ("tragic", -0.75),
    ("corrupt", -0.7),
    ("illegal", -0.5),
    ("guilty", -0.5),
    ("cruel", -1.0),
    ("ugly", -0.7),
    ("stupid", -0.8),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("worried", -0.5),
    ("unfortunate", -0.5),
    ("painful", -0.7),
    ("suffer", -0.5),
    ("suffering", -0.6),
    ("conflict", -0.3),
    ("dispute", -0.2),
    ("reject", -0.4),
    ("rejected", -0.4),
    ("deny", -0.3),
    ("denied", -0.3),
    ("unfair", -0.6),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "without", "hardly",
    "cannot",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("really", 1.2),
    ("highly", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("quite", 1.1),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("deeply", 1.3),
    ("most", 1.3),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("fairly", 0.8),
];

/// Multiplier applied to a sentiment word preceded by a negator.
const NEGATION_FACTOR: f64 = -0.5;
/// A modifier only reaches this many words ahead.
const MODIFIER_REACH: usize = 3;

/// Averages word polarities from a built-in lexicon, honoring negators and intensifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconScorer;

impl LexiconScorer {
    /// Construct a scorer over the built-in lexicon.
    pub const fn new() -> Self {
        Self
    }
}

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table
        .iter()
        .find(|(entry, _)| *entry == word)
        .map(|(_, value)| *value)
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't") || word.ends_with("n’t")
}

impl SentimentScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut hits = 0usize;
        let mut multiplier = 1.0;
        let mut since_modifier = usize::MAX;

        for raw in text.unicode_words() {
            let word = raw.to_lowercase();
            since_modifier = since_modifier.saturating_add(1);
            if since_modifier > MODIFIER_REACH {
                multiplier = 1.0;
            }

            if is_negator(&word) {
                multiplier *= NEGATION_FACTOR;
                since_modifier = 0;
            } else if let Some(boost) = lookup(INTENSIFIERS, &word) {
                multiplier *= boost;
                since_modifier = 0;
            } else if let Some(score) = lookup(LEXICON, &word) {
                total += (score * multiplier).clamp(-1.0, 1.0);
                hits += 1;
                multiplier = 1.0;
                since_modifier = usize::MAX;
            }
        }

        if hits == 0 {
            return 0.0;
        }
        (total / hits as f64).clamp(-1.0, 1.0)
    }
}
