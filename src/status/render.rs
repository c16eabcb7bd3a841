//! Body rendering for status responses.
//!
//! The templates are fixed; fields are filled in by safe substitution,
//! which leaves unknown placeholders untouched instead of failing.
use std::borrow::Cow;

pub(crate) const HTML_TEMPLATE: &str = "\
<html>
 <head>
  <title>${title}</title>
 </head>
 <body>
  <h1>${code} - ${title}</h1>
  <pre>${message}
  ${explanation}</pre>
 </body>
</html>";

pub(crate) const PLAIN_TEMPLATE: &str = "${code} - ${title}\n\n${message}\n${explanation}\n";

/// The inputs a status body is rendered from, captured at construction so
/// the body chunk can be produced lazily.
#[derive(Clone, Debug)]
pub(crate) struct RenderData {
    pub(crate) code: u16,
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) comment: String,
    pub(crate) explanation: &'static str,
    pub(crate) has_body: bool,
}

impl RenderData {
    /// Render the HTML body. Every substituted field except the numeric
    /// code is HTML-escaped.
    pub(crate) fn html(&self) -> String {
        if !self.has_body {
            return String::new();
        }
        let mut code = itoa::Buffer::new();
        let vars = [
            ("code", Cow::Borrowed(code.format(self.code))),
            ("title", html_escape(&self.title)),
            ("message", html_escape(&self.message)),
            ("comment", html_escape(&self.comment)),
            ("explanation", html_escape(self.explanation)),
        ];
        safe_substitute(HTML_TEMPLATE, &vars)
    }

    /// Render the plain text body.
    pub(crate) fn plain(&self) -> String {
        if !self.has_body {
            return String::new();
        }
        let mut code = itoa::Buffer::new();
        let vars = [
            ("code", Cow::Borrowed(code.format(self.code))),
            ("title", Cow::Borrowed(self.title.as_str())),
            ("message", Cow::Borrowed(self.message.as_str())),
            ("comment", Cow::Borrowed(self.comment.as_str())),
            ("explanation", Cow::Borrowed(self.explanation)),
        ];
        safe_substitute(PLAIN_TEMPLATE, &vars)
    }

    pub(crate) fn render(&self, plaintext: bool) -> String {
        if plaintext { self.plain() } else { self.html() }
    }
}

// ===== Substitution =====

/// Substitute `$name` and `${name}` placeholders.
///
/// `$$` is an escaped dollar sign. Placeholders with no matching variable,
/// and dollar signs that open no placeholder at all, are kept verbatim.
pub(crate) fn safe_substitute(template: &str, vars: &[(&str, Cow<'_, str>)]) -> String {
    let lookup = |name: &str| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_ref())
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(at) = rest.find('$') {
        out.push_str(&rest[..at]);
        let tail = &rest[at + 1..];

        if let Some(tail) = tail.strip_prefix('$') {
            out.push('$');
            rest = tail;
        } else if let Some(tail) = tail.strip_prefix('{') {
            match tail.split_once('}') {
                Some((name, after)) if is_identifier(name) => {
                    match lookup(name) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("${");
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = after;
                }
                _ => {
                    out.push('$');
                    rest = &rest[at + 1..];
                }
            }
        } else {
            let len = identifier_len(tail);
            if len == 0 {
                out.push('$');
                rest = tail;
            } else {
                let name = &tail[..len];
                match lookup(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('$');
                        out.push_str(name);
                    }
                }
                rest = &tail[len..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && identifier_len(name) == name.len()
}

fn identifier_len(s: &str) -> usize {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return 0,
    }
    1 + bytes
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count()
}

// ===== Escaping =====

/// Escape `&`, `<`, `>`, `"` and `'` for embedding in an HTML body.
pub(crate) fn html_escape(text: &str) -> Cow<'_, str> {
    let needs_escape = |b: &u8| matches!(b, b'&' | b'<' | b'>' | b'"' | b'\'');

    if !text.bytes().any(|b| needs_escape(&b)) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

// ===== Titles =====

/// Derive the default English title from an identifying name: strip a
/// leading `HTTP`, then put a space between each non-uppercase character
/// and the uppercase character following it.
pub(crate) fn derive_title(name: &str) -> String {
    let name = name.strip_prefix("HTTP").unwrap_or(name);
    let mut title = String::with_capacity(name.len() + 4);
    let mut prev_upper = true;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() && !prev_upper {
            title.push(' ');
        }
        prev_upper = ch.is_ascii_uppercase();
        title.push(ch);
    }
    title
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn derive_titles() {
        assert_eq!(derive_title("NotFound"), "Not Found");
        assert_eq!(derive_title("HTTPNotFound"), "Not Found");
        assert_eq!(derive_title("Ok"), "Ok");
        assert_eq!(derive_title("Created"), "Created");
        assert_eq!(
            derive_title("ProxyAuthenticationRequired"),
            "Proxy Authentication Required",
        );
        // uppercase runs do not split
        assert_eq!(derive_title("RequestURITooLong"), "Request URIToo Long");
    }

    #[test]
    fn substitute_known_and_unknown() {
        let vars = [("title", Cow::Borrowed("Not Found"))];
        assert_eq!(
            safe_substitute("<h1>${title}</h1>", &vars),
            "<h1>Not Found</h1>",
        );
        assert_eq!(safe_substitute("$title!", &vars), "Not Found!");
        // unknown keys stay verbatim
        assert_eq!(safe_substitute("${missing} $nope", &vars), "${missing} $nope");
        // escaped and bare dollars
        assert_eq!(safe_substitute("$$5 and $ 5", &vars), "$5 and $ 5");
        // malformed braces stay verbatim
        assert_eq!(safe_substitute("${not closed", &vars), "${not closed");
    }

    #[test]
    fn escape_html() {
        assert_eq!(html_escape("plain"), "plain");
        assert_eq!(
            html_escape(r#"<a b="c">&'"#),
            "&lt;a b=&quot;c&quot;&gt;&amp;&#x27;",
        );
    }

    #[test]
    fn empty_when_no_body() {
        let data = RenderData {
            code: 204,
            title: "No Content".to_owned(),
            message: String::new(),
            comment: String::new(),
            explanation: "",
            has_body: false,
        };
        assert_eq!(data.html(), "");
        assert_eq!(data.plain(), "");
    }
}
