//! Onboarding tutorial content for sprig CLI

/// Get the onboarding tutorial content
pub fn get_onboarding_content() -> &'static str {
    r#"WELCOME TO SPRIG

Sprig computes one typed value from a handful of named fields.

STEP 1: LITERALS
----------------
Numbers, strings and booleans evaluate to themselves.

  sprig check '1 + 2 * 3'
  => 7

STEP 2: VARIABLES
-----------------
A sigil says how a variable's text is read: % number, $ string, ? boolean.

  sprig check '%price * 2' --var price=21
  => 42

STEP 3: JSON INPUT
------------------
Variables can come from a JSON object, given with --input or piped in.

  echo '{"first": "Ada", "last": "Lovelace"}' | sprig check '$first + " " + $last'
  => Ada Lovelace

STEP 4: FUNCTIONS
-----------------
Named operators use call syntax.

  sprig check 'right(left($code, 5), 3)' --var code=stringa
  => rin

STEP 5: MISSING VALUES
----------------------
An unbound variable is NULL, whatever its sigil.

  sprig check '%discount == NULL'
  => true

STEP 6: TYPED OUTPUT
--------------------
Use --json to see the type of the result as well as its value.

  sprig check 'toString(10 / 4)' --json
  => {"type":"string","value":"2.5"}

NEXT STEPS
----------
  sprig docs              List all documentation categories
  sprig doc operators     Operators and precedence
  sprig doc functions     Named operators
  sprig doc variables     Sigils and environments
"#
}
