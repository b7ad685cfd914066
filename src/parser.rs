use crate::{
    ast::{
        Expression, Fixity, Item, Operator, VarType, Variable,
        operators::COMMA,
    },
    error::SyntaxError,
    lexer::{LITERAL_MARK, Lexer, TokenStream},
    value::{Operand, parse_decimal},
};

const NULL_KEYWORD: &str = "NULL";
const TRUE_KEYWORD: &str = "true";
const FALSE_KEYWORD: &str = "false";

/// Operator-precedence compiler from tokens to a postfix item sequence.
///
/// This is a shunting-yard pass generalized to prefix, postfix, binary and
/// ternary operators. Function-style calls such as `pow(2, 3)` need no
/// special casing: each comma closes the current bracket group and opens a
/// fresh one, so every argument lands on the output before the operator.
pub struct Parser {
    tokens: Vec<String>,
    literals: Vec<String>,
}

impl Parser {
    pub fn new(stream: TokenStream) -> Self {
        Parser {
            tokens: stream.tokens,
            literals: stream.literals,
        }
    }

    /// Parses the whole token list and checks the operand count.
    pub fn parse(&self) -> Result<Vec<Item>, SyntaxError> {
        to_postfix(self.tokens.iter().map(|token| self.resolve(token)))
    }


    /// Turns one token into an item.
    ///
    /// Resolution order: string literal, sigil variable, keyword, operator,
    /// decimal number.
    fn resolve(&self, token: &str) -> Result<Item, SyntaxError> {
        if let Some(index) = token.strip_prefix(LITERAL_MARK) {
            return index
                .parse::<usize>()
                .ok()
                .and_then(|index| self.literals.get(index))
                .map(|literal| Item::Literal(Operand::string(literal.as_str())))
                .ok_or_else(|| SyntaxError::InvalidLiteral {
                    token: token.to_string(),
                });
        }

        if let Some(var_type) = token.chars().next().and_then(VarType::from_sigil) {
            return Ok(Item::Variable(Variable::new(&token[1..], var_type)));
        }

        if token == NULL_KEYWORD {
            return Ok(Item::Literal(Operand::NULL));
        }
        if token.eq_ignore_ascii_case(TRUE_KEYWORD) {
            return Ok(Item::Literal(Operand::TRUE));
        }
        if token.eq_ignore_ascii_case(FALSE_KEYWORD) {
            return Ok(Item::Literal(Operand::FALSE));
        }

        if let Some(op) = Operator::lookup(token) {
            return Ok(Item::Operator(op));
        }

        parse_decimal(token)
            .map(|n| Item::Literal(Operand::num(n)))
            .ok_or_else(|| SyntaxError::InvalidLiteral {
                token: token.to_string(),
            })
    }
}

/// Reorders resolved infix items into postfix and checks the operand count.
///
/// Items are pulled one at a time, so a resolution error surfaces in source
/// order alongside bracket errors.
fn to_postfix<I>(items: I) -> Result<Vec<Item>, SyntaxError>
where
    I: IntoIterator<Item = Result<Item, SyntaxError>>,
{
    let items = items.into_iter();
    let mut output = Vec::with_capacity(items.size_hint().0);
    let mut stack: Vec<&'static Operator> = Vec::new();

    for item in items {
        let op = match item? {
            Item::Operator(op) => op,
            operand => {
                output.push(operand);
                continue;
            }
        };

        match op.fixity {
            Fixity::Grouping if op.is_open_bracket() => stack.push(op),
            Fixity::Grouping => {
                close_group(&mut stack, &mut output)?;
                if op.literal == COMMA {
                    stack.push(Operator::open_bracket());
                }
            }
            // Applies to the value just produced, ahead of anything stacked
            Fixity::Postfix => output.push(Item::Operator(op)),
            Fixity::Prefix => stack.push(op),
            Fixity::Binary | Fixity::Ternary => {
                while let Some(&top) = stack.last()
                    && op.yields_to(top)
                {
                    output.push(Item::Operator(top));
                    stack.pop();
                }
                stack.push(op);
            }
        }
    }

    while let Some(op) = stack.pop() {
        if op.is_open_bracket() {
            return Err(SyntaxError::UnbalancedBrackets { position: None });
        }
        output.push(Item::Operator(op));
    }

    check_operand_count(&output)?;
    Ok(output)
}

/// Moves operators to the output up to the nearest open bracket, which is
/// discarded.
fn close_group(
    stack: &mut Vec<&'static Operator>,
    output: &mut Vec<Item>,
) -> Result<(), SyntaxError> {
    loop {
        match stack.pop() {
            Some(op) if op.is_open_bracket() => return Ok(()),
            Some(op) => output.push(Item::Operator(op)),
            None => return Err(SyntaxError::UnbalancedBrackets { position: None }),
        }
    }
}

/// Verifies the postfix sequence reduces to exactly one value.
///
/// Every literal or variable adds one free operand and every operator
/// consumes `arity` of them while producing one. No operator may run short,
/// and exactly one operand must be left at the end.
pub fn check_operand_count(items: &[Item]) -> Result<(), SyntaxError> {
    let mut free: i64 = 0;

    for item in items {
        match item {
            Item::Operator(op) => {
                let arity = op.arity() as i64;
                if free < arity {
                    return Err(SyntaxError::MissingOperands {
                        operator: op.literal,
                    });
                }
                free -= arity - 1;
            }
            Item::Literal(_) | Item::Variable(_) => free += 1,
        }
    }

    if free != 1 {
        return Err(SyntaxError::WrongOperandCount { remaining: free });
    }
    Ok(())
}

/// Compiles expression text into a reusable [`Expression`].
pub fn compile(source: &str) -> Result<Expression, SyntaxError> {
    let stream = Lexer::new(source).tokenize()?;
    let items = Parser::new(stream).parse()?;
    Ok(Expression::new(source, items))
}
