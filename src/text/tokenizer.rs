//! Splitting text on a single separator character.

/// A string and the separator its tokens are delimited by.
///
/// Iteration is restartable: every call to [`StringTokenizer::iter`] starts
/// over from the beginning.
///
/// A leading separator produces an empty first token, consecutive separators
/// produce empty tokens between them, and a trailing separator does not
/// produce a trailing empty token. An empty string has no tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringTokenizer<'a> {
    text: &'a str,
    separator: char,
}

impl<'a> StringTokenizer<'a> {
    pub fn new(text: &'a str, separator: char) -> Self {
        StringTokenizer { text, separator }
    }

    pub fn iter(&self) -> Tokens<'a> {
        Tokens {
            text: self.text,
            separator: self.separator,
            next_start: Some(0),
        }
    }
}

impl<'a> IntoIterator for StringTokenizer<'a> {
    type Item = &'a str;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Tokens<'a> {
        self.iter()
    }
}

/// Iterator over the tokens of a [`StringTokenizer`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    separator: char,
    next_start: Option<usize>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.next_start?;
        if start >= self.text.len() {
            self.next_start = None;
            return None;
        }

        let rest = &self.text[start..];
        match rest.find(self.separator) {
            Some(i) => {
                self.next_start = Some(start + i + self.separator.len_utf8());
                Some(&rest[..i])
            }
            None => {
                self.next_start = None;
                Some(rest)
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
