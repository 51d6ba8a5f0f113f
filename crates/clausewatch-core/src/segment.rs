//! Sentence segmentation for contract text.
//!
//! A sentence ends at `.`, `!` or `?` when the next character is whitespace.
//! Terminal punctuation stays with the sentence it closes. There is no
//! abbreviation handling, so "R$ 10.000,00" stays whole (the period is
//! followed by a digit) but "Dr. Silva" is split in two.

/// Split `text` into trimmed, non-empty sentences in document order.
pub fn segment(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        if let Some(&(_, next)) = chars.peek()
            && next.is_whitespace()
        {
            let end = i + c.len_utf8();
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, raw: &'a str) {
    let s = raw.trim();
    if !s.is_empty() {
        out.push(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t  ").is_empty());
    }

    #[test]
    fn splits_on_terminal_punctuation_followed_by_whitespace() {
        let s = segment("Primeira cláusula. Segunda?  Terceira!\nQuarta");
        assert_eq!(
            s,
            vec!["Primeira cláusula.", "Segunda?", "Terceira!", "Quarta"]
        );
    }

    #[test]
    fn period_inside_number_does_not_split() {
        let s = segment("Multa de R$ 10.000,00 por dia. Fim.");
        assert_eq!(s, vec!["Multa de R$ 10.000,00 por dia.", "Fim."]);
    }

    #[test]
    fn abbreviations_are_not_special_cased() {
        let s = segment("Assinado pelo Dr. Silva em juízo.");
        assert_eq!(s, vec!["Assinado pelo Dr.", "Silva em juízo."]);
    }

    #[test]
    fn runs_of_punctuation_stay_together() {
        let s = segment("Atenção!! Leia... Depois assine.");
        assert_eq!(s, vec!["Atenção!!", "Leia...", "Depois assine."]);
    }

    #[test]
    fn never_returns_blank_sentences() {
        let text = " . ! ?  .\n\n. Texto.   ";
        for s in segment(text) {
            assert!(!s.trim().is_empty());
        }
    }
}
