use crate::types::Statistics;

pub fn format(stats: &Statistics) -> String {
    let mut out = String::new();
    out.push_str("palabra,frecuencia\n");
    for entry in &stats.top_words {
        push_row(&mut out, &entry.word, entry.count);
    }
    push_row(&mut out, "Total", stats.total_words);
    out
}

fn push_row(out: &mut String, word: &str, count: usize) {
    use std::fmt::Write as _;
    let _ = writeln!(out, "{},{}", escape(word), count);
}

// Tokens keep their punctuation, so a word can contain the delimiter.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
