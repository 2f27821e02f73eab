use std::fmt;

/// A glob pattern matched against a file's base name.
///
/// `*` matches any run of characters (dots included), `?` matches exactly
/// one character and everything else matches itself, case-sensitively.
/// Patterns never contain path separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
  raw: String,
  tokens: Vec<Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
  Literal(char),
  AnyOne,
  AnyRun,
}

impl GlobPattern {
  pub fn new(raw: &str) -> Self {
    let tokens = raw
      .chars()
      .map(|c| match c {
        '*' => Token::AnyRun,
        '?' => Token::AnyOne,
        c => Token::Literal(c),
      })
      .collect();
    Self {
      raw: raw.to_string(),
      tokens,
    }
  }

  pub fn as_str(&self) -> &str {
    &self.raw
  }

  /// Test a file base name against the pattern.
  pub fn matches(&self, name: &str) -> bool {
    let name: Vec<char> = name.chars().collect();
    let (mut p, mut n) = (0, 0);
    // Position of the last `*` and the name index it was tried at.
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
      match self.tokens.get(p) {
        Some(Token::AnyRun) => {
          backtrack = Some((p, n));
          p += 1;
        }
        Some(Token::AnyOne) => {
          p += 1;
          n += 1;
        }
        Some(Token::Literal(c)) if *c == name[n] => {
          p += 1;
          n += 1;
        }
        _ => match backtrack {
          Some((star, tried)) => {
            p = star + 1;
            n = tried + 1;
            backtrack = Some((star, tried + 1));
          }
          None => return false,
        },
      }
    }

    self.tokens[p..].iter().all(|t| *t == Token::AnyRun)
  }
}

impl fmt::Display for GlobPattern {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.raw)
  }
}
