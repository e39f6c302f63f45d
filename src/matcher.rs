use crate::models::Word;

/// One phrase occurrence over the word sequence.
///
/// Indices are inclusive: the match covers
/// `words[start_index..=end_index]`. The filler index-set view, the
/// filler millisecond-span view, and the SFX marker view are all
/// derived from these occurrences.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseMatch {
    /// Index of the first matched word
    pub start_index: usize,
    /// Index of the last matched word
    pub end_index: usize,
    /// The matched phrase, space-joined and lowercase
    pub phrase: String,
}

impl PhraseMatch {
    /// Number of words covered by this occurrence
    pub fn word_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }
}

/// Normalize a raw token for matching: strip leading and trailing
/// punctuation (anything outside alphanumerics and apostrophes) and
/// lowercase. Internal hyphens and apostrophes survive, so "uh-huh"
/// and "don't" match as spoken.
pub fn normalize_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_lowercase()
}

/// Find every occurrence of the given phrases over the word sequence.
///
/// Phrases are lowercase, space-separated, single- or multi-word. At
/// each position the longest matching phrase wins and matching resumes
/// after its last word, so occurrences never overlap. Results come back
/// in transcript order.
pub fn find_phrase_matches(words: &[Word], phrases: &[String]) -> Vec<PhraseMatch> {
    let mut candidates: Vec<Vec<&str>> = phrases
        .iter()
        .map(|p| p.split_whitespace().collect())
        .filter(|tokens: &Vec<&str>| !tokens.is_empty())
        .collect();
    candidates.sort_by(|a, b| b.len().cmp(&a.len()));

    let normalized: Vec<String> = words.iter().map(|w| normalize_token(&w.text)).collect();

    let mut matches = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let mut advanced = false;
        for tokens in &candidates {
            let end = i + tokens.len();
            if end <= words.len()
                && tokens
                    .iter()
                    .zip(&normalized[i..end])
                    .all(|(phrase_word, word)| *phrase_word == word.as_str())
            {
                matches.push(PhraseMatch {
                    start_index: i,
                    end_index: end - 1,
                    phrase: tokens.join(" "),
                });
                i = end;
                advanced = true;
                break;
            }
        }
        if !advanced {
            i += 1;
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Word::new(t, i as f64 * 0.5, i as f64 * 0.5 + 0.4))
            .collect()
    }

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("Uh,"), "uh");
        assert_eq!(normalize_token("mean\u{2014}"), "mean");
        assert_eq!(normalize_token("(Hello!)"), "hello");
        assert_eq!(normalize_token("uh-huh"), "uh-huh");
        assert_eq!(normalize_token("don't"), "don't");
    }

    #[test]
    fn test_single_word_match() {
        let words = words(&["so", "um", "anyway"]);
        let matches = find_phrase_matches(&words, &phrases(&["um"]));

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start_index, 1);
        assert_eq!(matches[0].end_index, 1);
        assert_eq!(matches[0].phrase, "um");
    }

    #[test]
    fn test_multi_word_match_spans_indices() {
        let words = words(&["Uh,", "I", "mean\u{2014}", "we", "should"]);
        let matches = find_phrase_matches(&words, &phrases(&["uh", "i mean"]));

        assert_eq!(matches.len(), 2);
        assert_eq!((matches[0].start_index, matches[0].end_index), (0, 0));
        assert_eq!((matches[1].start_index, matches[1].end_index), (1, 2));
        assert_eq!(matches[1].phrase, "i mean");
        assert_eq!(matches[1].word_count(), 2);
    }

    #[test]
    fn test_longest_phrase_wins() {
        let words = words(&["you", "know", "what"]);
        let matches = find_phrase_matches(&words, &phrases(&["you", "you know"]));

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].phrase, "you know");
    }

    #[test]
    fn test_matching_resumes_after_occurrence() {
        // The "mean" inside a matched "i mean" must not rematch alone
        let words = words(&["i", "mean", "it"]);
        let matches = find_phrase_matches(&words, &phrases(&["i mean", "mean"]));

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].phrase, "i mean");
    }

    #[test]
    fn test_no_phrases_no_matches() {
        let words = words(&["hello", "world"]);

        assert!(find_phrase_matches(&words, &[]).is_empty());
        assert!(find_phrase_matches(&[], &phrases(&["um"])).is_empty());
    }
}
