//! Title template lexer and canonicalization.
//!
//! A template is literal text interleaved with `{{name}}` placeholders. Only
//! the names in [`Placeholder::ALL`] are recognized; anything else between
//! double braces stays literal text.
//!
//! [`sanitize`] is the single canonicalization step: the settings store runs
//! it before persisting and the renderer runs it before every render.

use std::fmt;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A recognized placeholder kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    File,
    Folder,
    Vault,
    Path,
    App,
    Version,
    AppNone,
}

impl Placeholder {
    /// All placeholder kinds in a stable order.
    pub const ALL: [Placeholder; 7] = [
        Placeholder::File,
        Placeholder::Folder,
        Placeholder::Vault,
        Placeholder::Path,
        Placeholder::App,
        Placeholder::Version,
        Placeholder::AppNone,
    ];

    /// The name written between the braces.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::File => "file",
            Placeholder::Folder => "folder",
            Placeholder::Vault => "vault",
            Placeholder::Path => "path",
            Placeholder::App => "app",
            Placeholder::Version => "version",
            Placeholder::AppNone => "app:none",
        }
    }

    /// Case-sensitive lookup; `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Only `folder` may legally appear several times in a row.
    pub fn is_repeatable(self) -> bool {
        matches!(self, Placeholder::Folder)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{OPEN}{}{CLOSE}", self.name())
    }
}

/// One lexed piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Verbatim text, including whitespace and unrecognized `{{...}}`.
    Literal(&'a str),
    Placeholder(Placeholder),
}

/// Split `template` into literal runs and placeholders.
///
/// Adjacent literal text always forms a single run. A `{{` that does not
/// start a recognized placeholder contributes one `{` to the literal run and
/// scanning resumes at the next byte, so `{{{file}}}` yields `"{"`, `file`, `"}"`.
pub fn tokenize(template: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while let Some(offset) = template[pos..].find(OPEN) {
        let open = pos + offset;
        let body = open + OPEN.len();
        match match_placeholder(&template[body..]) {
            Some((kind, consumed)) => {
                if literal_start < open {
                    tokens.push(Token::Literal(&template[literal_start..open]));
                }
                tokens.push(Token::Placeholder(kind));
                pos = body + consumed;
                literal_start = pos;
            }
            None => pos = open + 1,
        }
    }

    if literal_start < template.len() {
        tokens.push(Token::Literal(&template[literal_start..]));
    }
    tokens
}

/// Returns the placeholder at the start of `rest` (text just after `{{`)
/// and the number of bytes it spans including the closing braces.
fn match_placeholder(rest: &str) -> Option<(Placeholder, usize)> {
    let close = rest.find(CLOSE)?;
    let kind = Placeholder::from_name(&rest[..close])?;
    Some((kind, close + CLOSE.len()))
}

/// Inverse of [`tokenize`].
pub fn write_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Placeholder(kind) => {
                out.push_str(OPEN);
                out.push_str(kind.name());
                out.push_str(CLOSE);
            }
        }
    }
    out
}

/// Number of `kind` placeholders in `tokens`.
pub fn count(tokens: &[Token<'_>], kind: Placeholder) -> usize {
    tokens
        .iter()
        .filter(|t| matches!(t, Token::Placeholder(k) if *k == kind))
        .count()
}

/// Collapse directly adjacent repeats of every non-repeatable placeholder.
///
/// `{{vault}}{{vault}}` becomes `{{vault}}`; `{{vault}} {{vault}}` and any
/// run of `{{folder}}` are left alone. Idempotent.
pub fn sanitize(template: &str) -> String {
    let mut kept: Vec<Token<'_>> = Vec::new();
    for token in tokenize(template) {
        if let Token::Placeholder(kind) = token {
            if !kind.is_repeatable() && kept.last() == Some(&token) {
                continue;
            }
        }
        kept.push(token);
    }
    write_tokens(&kept)
}
