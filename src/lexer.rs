use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{ast::OPERATORS, error::SyntaxError, value::is_numeric};

/// Marks a string literal extracted into [`TokenStream::literals`].
pub const LITERAL_MARK: char = '\u{E000}';
/// Marks a `$` variable while operators are being spaced out.
const VARIABLE_MARK: char = '\u{E001}';

static VARIABLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[A-Za-z0-9_-]*").expect("valid variable pattern"));

/// Output of the lexer: flat tokens plus the side tables they point into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenStream {
    /// Trimmed, disambiguated tokens. String literals appear as
    /// [`LITERAL_MARK`] followed by their index in `literals`.
    pub tokens: Vec<String>,
    /// String literal contents, in order of appearance.
    pub literals: Vec<String>,
    /// `$` variable references, sigil included, in order of appearance.
    pub variables: Vec<String>,
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Runs every lexing pass and returns the final token list.
    pub fn tokenize(mut self) -> Result<TokenStream, SyntaxError> {
        let (expression, literals) = self.extract_literals()?;
        let (expression, variables) = extract_variables(&expression);
        let expression = space_operators(expression);

        let tokens = expression
            .split_whitespace()
            .map(|token| restore_variable(token, &variables))
            .collect();

        Ok(TokenStream {
            tokens: disambiguate(tokens),
            literals,
            variables,
        })
    }

    /// Replaces every quoted literal with a placeholder token and checks
    /// that the brackets outside literals pair up.
    ///
    /// A backslash makes the next character literal, inside or outside quotes.
    fn extract_literals(&mut self) -> Result<(String, Vec<String>), SyntaxError> {
        let mut expression = String::with_capacity(self.input.len());
        let mut literals = Vec::new();
        let mut open_brackets = Vec::new();

        while let Some(ch) = self.current_char() {
            match ch {
                '\\' => {
                    self.advance();
                    if let Some(escaped) = self.current_char() {
                        track_bracket(&mut open_brackets, escaped, self.position)?;
                        expression.push(escaped);
                        self.advance();
                    }
                }
                '"' | '\'' => {
                    let literal = self.read_string(ch)?;
                    expression.push(' ');
                    expression.push(LITERAL_MARK);
                    expression.push_str(&literals.len().to_string());
                    expression.push(' ');
                    literals.push(literal);
                }
                _ => {
                    track_bracket(&mut open_brackets, ch, self.position)?;
                    expression.push(ch);
                    self.advance();
                }
            }
        }

        // Innermost bracket left open
        if let Some(&position) = open_brackets.last() {
            return Err(SyntaxError::UnbalancedBrackets { position: Some(position) });
        }

        Ok((expression, literals))
    }

    fn read_string(&mut self, quote: char) -> Result<String, SyntaxError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    self.advance();
                    if let Some(escaped) = self.current_char() {
                        result.push(escaped);
                        self.advance();
                    }
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(SyntaxError::UnterminatedLiteral { position: start })
    }
}

/// Pulls `$name` references out so operator spacing cannot split them.
///
/// `%` and `?` variables are not protected this way and are recognized per
/// token later on.
fn extract_variables(expression: &str) -> (String, Vec<String>) {
    let mut variables = Vec::new();
    let rewritten = VARIABLE_PATTERN.replace_all(expression, |caps: &Captures| {
        let placeholder = format!(" {VARIABLE_MARK}{} ", variables.len());
        variables.push(caps[0].to_string());
        placeholder
    });
    (rewritten.into_owned(), variables)
}

fn restore_variable(token: &str, variables: &[String]) -> String {
    token
        .strip_prefix(VARIABLE_MARK)
        .and_then(|index| index.parse::<usize>().ok())
        .and_then(|index| variables.get(index))
        .cloned()
        .unwrap_or_else(|| token.to_string())
}

/// Records `(` at `position` and pairs `)` with the latest open one.
fn track_bracket(open: &mut Vec<usize>, ch: char, position: usize) -> Result<(), SyntaxError> {
    match ch {
        '(' => open.push(position),
        ')' => {
            if open.pop().is_none() {
                return Err(SyntaxError::UnbalancedBrackets { position: Some(position) });
            }
        }
        _ => {}
    }
    Ok(())
}

/// Surrounds every operator literal with spaces, in table order.
fn space_operators(mut expression: String) -> String {
    for op in OPERATORS.iter() {
        if expression.contains(op.literal) {
            expression = expression.replace(op.literal, &format!(" {} ", op.literal));
        }
    }
    expression
}

/// Resolves `-` into unary or binary and glues `>`, `<`, `!` back onto a
/// following `=`.
fn disambiguate(mut tokens: Vec<String>) -> Vec<String> {
    let mut i = 0;
    while i < tokens.len() {
        match tokens[i].as_str() {
            "-" if i + 1 < tokens.len() && is_unary_minus(&tokens, i) => {
                let operand = tokens.remove(i + 1);
                tokens[i].push_str(&operand);
            }
            ">" | "<" | "!" if tokens.get(i + 1).is_some_and(|next| next == "=") => {
                tokens.remove(i + 1);
                tokens[i].push('=');
            }
            _ => {}
        }
        i += 1;
    }
    tokens
}

fn is_unary_minus(tokens: &[String], index: usize) -> bool {
    if index == 0 {
        return true;
    }
    if !is_numeric(&tokens[index + 1]) {
        return false;
    }
    let previous = tokens[index - 1].as_str();
    !(previous == ")" || is_numeric(previous) || is_variable(previous))
}

fn is_variable(token: &str) -> bool {
    token.starts_with(['$', '%', '?'])
}

#[test]
fn test_operators_split_without_spaces() {
    let stream = Lexer::new("1+2*3").tokenize().unwrap();
    assert_eq!(stream.tokens, vec!["1", "+", "2", "*", "3"]);
}

#[test]
fn test_unary_minus_merges_with_number() {
    assert_eq!(Lexer::new("- 1").tokenize().unwrap().tokens, vec!["-1"]);
    assert_eq!(Lexer::new("2 * -1").tokenize().unwrap().tokens, vec!["2", "*", "-1"]);
    assert_eq!(Lexer::new("2-1").tokenize().unwrap().tokens, vec!["2", "-", "1"]);
    assert_eq!(Lexer::new("(2)-1").tokenize().unwrap().tokens, vec!["(", "2", ")", "-", "1"]);
    assert_eq!(Lexer::new("%m -1").tokenize().unwrap().tokens, vec!["%m", "-", "1"]);
}

#[test]
fn test_relational_operators_are_rejoined() {
    assert_eq!(Lexer::new("1>=2").tokenize().unwrap().tokens, vec!["1", ">=", "2"]);
    assert_eq!(Lexer::new("1<=2").tokenize().unwrap().tokens, vec!["1", "<=", "2"]);
    assert_eq!(Lexer::new("1!=2").tokenize().unwrap().tokens, vec!["1", "!=", "2"]);
    assert_eq!(Lexer::new("1 > = 2").tokenize().unwrap().tokens, vec!["1", ">=", "2"]);
}

#[test]
fn test_bracket_positions_are_source_offsets() {
    let unbalanced = |input: &str| match Lexer::new(input).tokenize() {
        Err(SyntaxError::UnbalancedBrackets { position }) => position,
        other => panic!("{input}: {other:?}"),
    };
    assert_eq!(unbalanced("'(' + (1"), Some(6));
    assert_eq!(unbalanced("'a)' + 1)"), Some(8));
    assert_eq!(unbalanced("\\( 1"), Some(1));
    assert!(Lexer::new("'(' + ')'").tokenize().is_ok());
}

#[test]
fn test_dollar_variables_survive_operator_spacing() {
    let stream = Lexer::new("$my-var+$remainder").tokenize().unwrap();
    assert_eq!(stream.tokens, vec!["$my-var", "+", "$remainder"]);
    assert_eq!(stream.variables, vec!["$my-var", "$remainder"]);
}
