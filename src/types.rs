use serde::Serialize;

/// How many of the most frequent words a report shows.
pub const TOP_WORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub total_words: usize,
    /// Highest counts first; ties keep the order words first appeared in.
    pub top_words: Vec<WordFrequency>,
    pub is_empty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_carries_all_fields() {
        let stats = Statistics {
            total_words: 3,
            top_words: vec![
                WordFrequency {
                    word: "hola".to_string(),
                    count: 2,
                },
                WordFrequency {
                    word: "mundo".to_string(),
                    count: 1,
                },
            ],
            is_empty: false,
        };
        let s = serde_json::to_string_pretty(&stats).unwrap();
        assert!(s.contains("\"total_words\": 3"));
        assert!(s.contains("\"top_words\""));
        assert!(s.contains("\"hola\""));
        assert!(s.contains("\"is_empty\": false"));
    }
}
