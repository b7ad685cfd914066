//! Documentation content for sprig CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Functions,
    Types,
    Variables,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "functions" | "function" | "fns" => Some(Self::Functions),
            "types" | "type" => Some(Self::Types),
            "variables" | "variable" | "vars" => Some(Self::Variables),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SPRIG DOCUMENTATION

Sprig is a small expression language for computing a single typed value from
a set of named fields. Expressions are compiled once into postfix form and
can then be evaluated any number of times against different variables.

DOCUMENTATION CATEGORIES

  syntax            Literals, brackets, function-call form, and escaping
  operators         Arithmetic, comparison, and logical operators with precedence
  functions         Named operators: pow, min, max, substr, left, right, ...
  types             The four value types and conversions between them
  variables         Sigils, environments, and how raw text is coerced

QUICK REFERENCE

  %name             Number variable
  $name             String variable
  ?name             Boolean variable
  'text' "text"     String literals
  NULL true false   Keywords
  f(a, b)           Function-call form of a named operator

Run 'sprig doc <category>' for detailed documentation.
Run 'sprig onboard' for a short tutorial.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_str(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Functions) => Ok(FUNCTIONS_DOC),
        Some(DocCategory::Types) => Ok(TYPES_DOC),
        Some(DocCategory::Variables) => Ok(VARIABLES_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Literals, Brackets, and Calls

NUMBER LITERALS
  12   -3   0.5   .5   2.   1e3
    Decimal numbers. Trailing fractional zeros are insignificant:
    1.0 and 1 are the same value.

    Constraints:
      - A negative exponent (1e-3) is split by the '-' operator; write
        0.001 instead
      - Any number of digits; the exponent is limited to 1000

STRING LITERALS
  'text'   "text"
    Either quote character may delimit a string. Inside a string the other
    quote is ordinary text.

    Escaping:
      'it\'s'     => it's
      "a\\b"      => a\b
    A backslash makes the next character literal, inside or outside quotes.

KEYWORDS
  NULL          The absent value (case-sensitive)
  true false    Booleans (any case: TRUE, False, ...)

BRACKETS
  (1 + 2) * 3
    Brackets override precedence. Every '(' needs a matching ')'.

FUNCTION-CALL FORM
  pow(2, 3)    substr($s, 0, 2)    toNum($code)
    Named operators are written in call form. Commas separate arguments
    and are only allowed inside brackets.

    Example:
      Expression:  right(left($i, 5), 3)
      Postfix:     $i 5 left 3 right

WHITESPACE
  Operators need no surrounding spaces: 1+2*3 is the same as 1 + 2 * 3.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Arithmetic, Comparison, and Logic

PRECEDENCE (tightest first)
  3     rem pow abs sig min max len substr left right trim
        startsWith endsWith contains
  5     *  /
  6     +  -  toBool toNum toString
  8     >  <  >=  <=
  9     ==  !=
  12    ~
  13    &&
  14    ||

ARITHMETIC OPERATORS
  +     Addition, or concatenation when either side is a string
  -     Subtraction (a leading '-' before a number negates it)
  *     Multiplication, or string repetition: 'ab' * 3 => ababab
  /     Division, rounded to 100 significant digits
  rem   Remainder, with the sign of the dividend: -7 rem 2 => -1

  Examples:
    %price * %quantity
    $first + ' ' + $last
    %total / %count

  Constraints:
    - Division or remainder by zero is an error
    - pow takes whole exponents up to 10000; 'x' * n may build at most 1 GiB
    - Results beyond the decimal range are an error
    - NULL is not a number: %missing + 1 is an error

COMPARISON OPERATORS
  ==    Equal (type and value must both match)
  !=    Not equal
  <  >  <=  >=
        Ordering of two numbers or two strings

  Examples:
    %age >= 18
    $status == 'active'
    %x == NULL

  Constraints:
    - '1' == 1 is false: different types are never equal
    - NULL equals only NULL
    - Ordering two values of different types is an error

LOGICAL OPERATORS
  &&    Logical AND
  ||    Logical OR
  ~     Logical NOT (prefix)

  Examples:
    ?verified && %age >= 18
    ~(?deleted)

  Constraints:
    - Operands must be booleans; use toBool to convert
"#;

const FUNCTIONS_DOC: &str = r#"FUNCTIONS - Named Operators

NUMERIC
  pow(x, n)        x raised to the integer power n; pow(2, -1) => 0.5
  abs(x)           Absolute value
  sig(x)           Sign: -1, 0 or 1
  min(x, y)        Smaller operand (AND for booleans)
  max(x, y)        Larger operand (OR for booleans)

  Constraints:
    - min/max return NULL when either side is NULL
    - min/max of two different types is an error

STRING
  len(s)           Number of characters; len(NULL) => -1
  substr(s, a, b)  Characters from index a up to, not including, b
  left(s, n)       First n characters
  right(s, n)      Last n characters
  trim(s)          Without surrounding whitespace
  startsWith(s, p) Whether s begins with p
  endsWith(s, p)   Whether s ends with p
  contains(s, p)   Whether p occurs in s

  Examples:
    substr('stringa', 2, 5)    => rin
    left('stringa', 3)         => str
    right('stringa', 3)        => nga

  Constraints:
    - Indices and counts must be whole numbers
    - Out-of-range indices and counts are clamped to the string
    - A NULL string yields NULL (len yields -1)

CONVERSION
  toBool(x)        'true'/'1' (any case) and nonzero numbers are true;
                   NULL is false
  toNum(x)         Parses a string; true => 1, false => 0, NULL => 0
  toString(x)      Natural text form; NULL => ''

  Example:
    toNum(2 + toNum(3 == 3) + 2 == 5) - 2 * 0.5    => 0
"#;

const TYPES_DOC: &str = r#"TYPES - Values and Conversion

THE FOUR TYPES
  num       Decimal number of any size, exact (no binary floating point)
  string    Text
  bool      true or false
  null      The absent value; a type of its own

NO IMPLICIT PROMOTION
  Operators never convert between types on their own, with one exception:
  '+' with a string on either side concatenates the text forms.

    'n=' + 5         => n=5
    '1' == 1         => false
    5 + true         => error

TEXT FORMS
  num       Plain notation without trailing zeros: 2.50 => 2.5
  bool      true / false
  null      empty text ('') inside expressions, 'null' in CLI output

EQUALITY
  Two values are equal when their types match and their values match.
  NULL == NULL is true; NULL == '' is false.
"#;

const VARIABLES_DOC: &str = r#"VARIABLES - Sigils and Environments

SIGILS
  %name    Read as a number; malformed text is an error
  $name    Read as a string, verbatim
  ?name    Read as a boolean: '1' or 'true' (any case) is true,
           anything else is false

  Names consist of letters, digits, '_' and '-'.

MISSING VARIABLES
  A variable that is not bound, or bound to null, evaluates to NULL
  whatever its sigil.

    %missing == NULL    => true

SUPPLYING VARIABLES FROM THE CLI
  --var NAME=VALUE     Bind NAME to the raw text VALUE
  --var NAME           Bind NAME as absent
  --input JSON         Bind every field of a JSON object

  JSON strings bind their text, numbers and booleans their JSON text, and
  null binds the name as absent. --var entries override JSON fields.

  Examples:
    sprig check '%a + %b' --var a=1 --var b=2
    echo '{"name": "Ada"}' | sprig check "'Hello ' + \$name"
"#;
