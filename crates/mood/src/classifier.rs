//! Keyword heuristic mapping a free-text utterance onto a [`MoodLabel`].
//!
//! Matching is plain substring containment on the lowercased utterance, so a
//! keyword also fires inside an unrelated word ("down" in "download",
//! "mad" in "made").  No tokenisation, stemming, or punctuation stripping is
//! applied.

use crate::MoodLabel;

/// Trigger words per mood, scanned in this order.  Ties go to the row that
/// reached the winning count first.  `neutral` is the fallback and has no row;
/// `stressed` has no row either, so classification never yields it.
pub const MOOD_KEYWORDS: &[(MoodLabel, &[&str])] = &[
    (
        MoodLabel::Positive,
        &[
            "happy", "joy", "excited", "great", "wonderful", "amazing", "fantastic", "love",
            "grateful", "blessed", "peaceful", "content", "proud", "accomplished",
        ],
    ),
    (
        MoodLabel::Anxious,
        &[
            "anxious", "worried", "nervous", "panic", "fear", "scared", "frightened",
            "overwhelmed", "stressed", "tense", "restless", "uneasy", "apprehensive",
        ],
    ),
    (
        MoodLabel::Sad,
        &[
            "sad", "depressed", "down", "blue", "upset", "hurt", "lonely", "empty", "hopeless",
            "discouraged", "disappointed", "grief", "loss", "crying",
        ],
    ),
    (
        MoodLabel::Angry,
        &[
            "angry", "mad", "furious", "frustrated", "irritated", "annoyed", "rage", "pissed",
        ],
    ),
    (
        MoodLabel::Calm,
        &[
            "calm", "relaxed", "peaceful", "serene", "tranquil", "centered", "balanced",
        ],
    ),
    (
        MoodLabel::Excited,
        &[
            "excited", "energetic", "pumped", "motivated", "enthusiastic", "thrilled",
        ],
    ),
];

/// Number of distinct trigger words from each row found in `utterance`,
/// in [`MOOD_KEYWORDS`] order.
pub fn match_counts(utterance: &str) -> Vec<(MoodLabel, usize)> {
    let lower = utterance.to_lowercase();
    MOOD_KEYWORDS
        .iter()
        .map(|(label, keywords)| {
            let hits = keywords
                .iter()
                .filter(|keyword| lower.contains(*keyword))
                .count();
            (*label, hits)
        })
        .collect()
}

/// Classify `utterance` as the mood with the most keyword hits.
///
/// Returns [`MoodLabel::Neutral`] when nothing matches.
pub fn classify(utterance: &str) -> MoodLabel {
    let mut best = MoodLabel::Neutral;
    let mut max_hits = 0;
    for (label, hits) in match_counts(utterance) {
        if hits > max_hits {
            max_hits = hits;
            best = label;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_unmatched_text_is_neutral() {
        assert_eq!(classify(""), MoodLabel::Neutral);
        assert_eq!(classify("The bus leaves at seven"), MoodLabel::Neutral);
        assert_eq!(classify("!!! ??? ..."), MoodLabel::Neutral);
    }

    #[test]
    fn single_category_wins() {
        assert_eq!(classify("I feel so lonely and hopeless"), MoodLabel::Sad);
        assert_eq!(classify("I'm furious"), MoodLabel::Angry);
        assert_eq!(classify("feeling serene"), MoodLabel::Calm);
        assert_eq!(classify("so pumped and motivated"), MoodLabel::Excited);
        assert_eq!(classify("Worried about tomorrow"), MoodLabel::Anxious);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("I AM SO HAPPY"), MoodLabel::Positive);
    }

    #[test]
    fn matching_is_substring_not_word_based() {
        // "mad" inside "made", "down" inside "download".
        assert_eq!(classify("I made a download"), MoodLabel::Sad);
        assert_eq!(classify("she made it"), MoodLabel::Angry);
    }

    #[test]
    fn higher_count_beats_earlier_row() {
        // positive: "happy" (1); sad: "sad", "lonely" (2)
        assert_eq!(classify("happy but sad and lonely"), MoodLabel::Sad);
    }

    #[test]
    fn tie_goes_to_earlier_row() {
        // One anxious keyword and one angry keyword: anxious row comes first.
        assert_eq!(classify("nervous and annoyed"), MoodLabel::Anxious);
        // One sad keyword and one calm keyword: sad row comes first.
        assert_eq!(classify("calm yet upset"), MoodLabel::Sad);
    }

    #[test]
    fn shared_keywords_count_for_every_row() {
        // "excited" is in both positive and excited rows; tie -> positive.
        assert_eq!(classify("excited"), MoodLabel::Positive);
        // "peaceful" is in positive and calm; "relaxed" tips it to calm.
        assert_eq!(classify("peaceful and relaxed"), MoodLabel::Calm);
    }

    #[test]
    fn stressed_keyword_lands_in_anxious() {
        assert_eq!(classify("so stressed"), MoodLabel::Anxious);
    }

    #[test]
    fn match_counts_follow_table_order() {
        let counts = match_counts("grief and loss");
        let labels: Vec<MoodLabel> = counts.iter().map(|(label, _)| *label).collect();
        let expected: Vec<MoodLabel> = MOOD_KEYWORDS.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, expected);
        assert_eq!(counts[2], (MoodLabel::Sad, 2));
        assert!(counts.iter().filter(|(label, _)| *label != MoodLabel::Sad).all(|(_, n)| *n == 0));
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let counts = match_counts("sad sad sad");
        assert_eq!(counts[2], (MoodLabel::Sad, 1));
    }

    #[test]
    fn neutral_has_no_keyword_row() {
        assert!(MOOD_KEYWORDS.iter().all(|(label, _)| *label != MoodLabel::Neutral));
    }
}
