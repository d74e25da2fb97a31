//! Identifier tokenization for ontology terms and predicate symbols.
//!
//! All offsets are byte offsets into the text and always fall on `char`
//! boundaries.

/// Whether `c` can appear inside an identifier token.
pub fn is_term_char(c: char, allow_dot: bool) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || (allow_dot && c == '.')
}

/// The identifier fragment that ends at the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl PrefixSpan {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    allow_dot: bool,
}

impl Tokenizer {
    pub fn new(allow_dot: bool) -> Self {
        Self { allow_dot }
    }

    pub fn allow_dot(&self) -> bool {
        self.allow_dot
    }

    fn is_term_char(&self, c: char) -> bool {
        is_term_char(c, self.allow_dot)
    }

    /// A trailing '.' ends a sentence, not an identifier.
    fn trim_token<'t>(&self, token: &'t str) -> &'t str {
        if self.allow_dot {
            token.trim_end_matches('.')
        } else {
            token
        }
    }

    /// Iterate identifier tokens in `text`: maximal runs of term characters
    /// that start with a letter.
    pub fn tokens<'t>(&self, text: &'t str) -> Tokens<'t> {
        Tokens {
            text,
            pos: 0,
            tokenizer: *self,
        }
    }

    /// The identifier fragment immediately before `caret`, if any.
    ///
    /// Returns `None` when the caret is out of range, not on a char boundary,
    /// preceded by a non-term character, or when the fragment does not start
    /// with a letter (numbers are never completed).
    pub fn prefix_at(&self, text: &str, caret: usize) -> Option<PrefixSpan> {
        if caret > text.len() || !text.is_char_boundary(caret) {
            return None;
        }
        let start = text[..caret]
            .char_indices()
            .rev()
            .take_while(|&(_, c)| self.is_term_char(c))
            .last()
            .map(|(i, _)| i)?;
        let fragment = &text[start..caret];
        if !fragment.starts_with(char::is_alphabetic) {
            return None;
        }
        Some(PrefixSpan {
            start,
            end: caret,
            text: fragment.to_string(),
        })
    }

    /// Whether the character at `caret` continues an identifier, i.e. the
    /// caret sits inside a token rather than at its end.
    pub fn continues_at(&self, text: &str, caret: usize) -> bool {
        text.get(caret..)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| self.is_term_char(c))
    }

    /// The token completed by the character just typed before `caret`.
    ///
    /// When the last character before the caret is a boundary (space,
    /// parenthesis, ...), the identifier that precedes it is complete.
    pub fn completed_token_before<'t>(&self, text: &'t str, caret: usize) -> Option<&'t str> {
        let boundary = text.get(..caret)?.chars().next_back()?;
        if self.is_term_char(boundary) {
            return None;
        }
        let token_end = caret - boundary.len_utf8();
        let span = self.prefix_at(text, token_end)?;
        let token = self.trim_token(&text[span.start..span.end]);
        (!token.is_empty()).then_some(token)
    }
}

/// Iterator returned by [`Tokenizer::tokens`].
pub struct Tokens<'t> {
    text: &'t str,
    pos: usize,
    tokenizer: Tokenizer,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        let text = self.text;
        let tokenizer = self.tokenizer;
        loop {
            let start = self.pos + text[self.pos..].find(|c: char| tokenizer.is_term_char(c))?;
            let run = &text[start..];
            let len = run
                .find(|c: char| !tokenizer.is_term_char(c))
                .unwrap_or(run.len());
            self.pos = start + len;
            let token = tokenizer.trim_token(&text[start..start + len]);
            if token.starts_with(char::is_alphabetic) {
                return Some(token);
            }
        }
    }
}
