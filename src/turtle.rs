//! Single-pass parser for the Turtle subset the knowledge documents use.
//!
//! The grammar is small and fixed: `@prefix` declarations, subject blocks of
//! `predicate object` pairs separated by `;` and terminated by `.`, object
//! lists separated by `,`, and the literal types boolean, integer, decimal,
//! and quoted string. The shorthand verb `a` maps to the `type` predicate.
//! Line comments (`#`) and blank lines are tolerated anywhere between tokens;
//! a predicate or reference using an undeclared prefix fails fast.
//!
//! Prefixed names are reduced to their local names — the model layer works in
//! a single flat vocabulary. Local names are restricted to alphanumerics,
//! `_`, and `-`, which covers everything the authoring scripts emit.
//!
//! Typed literals (`"35"^^xsd:integer`) and language tags are accepted; the
//! numeric and boolean datatypes coerce, anything else stays a string.

use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::{ParseError, ParseErrorKind};
use crate::schema::pred;
use crate::triple::Fact;
use crate::value::Value;

/// Parses a full document into an ordered fact sequence.
///
/// # Errors
///
/// Returns a [`ParseError`] with line/column and cause on any malformed
/// construct. Parsing is all-or-nothing; no facts from a malformed document
/// are ever returned.
pub fn parse_document(text: &str) -> Result<Vec<Fact>, ParseError> {
    Parser::new(text).parse()
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
    prefixes: HashMap<String, String>,
    facts: Vec<Fact>,
    // Set when a number literal swallowed the statement terminator
    // ("300." reads as the integer 300 followed by ".").
    pending_terminator: bool,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            line: 1,
            column: 1,
            prefixes: HashMap::new(),
            facts: Vec::new(),
            pending_terminator: false,
        }
    }

    fn parse(mut self) -> Result<Vec<Fact>, ParseError> {
        loop {
            self.skip_trivia();
            match self.peek() {
                None => break,
                Some('@') => self.parse_prefix_decl()?,
                Some(_) => self.parse_subject_block()?,
            }
        }
        Ok(self.facts)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        match c {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        c
    }

    fn err(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            line: self.line,
            column: self.column,
            kind,
        }
    }

    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == '#' {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn expect(&mut self, wanted: char, expected: &'static str) -> Result<(), ParseError> {
        match self.bump() {
            Some(c) if c == wanted => Ok(()),
            Some(c) => Err(self.err(ParseErrorKind::Expected {
                expected,
                found: c.to_string(),
            })),
            None => Err(self.err(ParseErrorKind::UnexpectedEof)),
        }
    }

    fn read_name_token(&mut self) -> String {
        let mut token = String::new();
        while let Some(c) = self.peek() {
            if is_name_char(c) {
                token.push(c);
                self.bump();
            } else {
                break;
            }
        }
        token
    }

    /// Reads `prefix:Local`, validates the prefix, and returns the local name.
    fn read_prefixed_name(&mut self, expected: &'static str) -> Result<String, ParseError> {
        let prefix = self.read_name_token();
        if self.peek() != Some(':') {
            let found = if prefix.is_empty() {
                self.peek().map_or_else(String::new, |c| c.to_string())
            } else {
                prefix
            };
            return Err(self.err(ParseErrorKind::Expected { expected, found }));
        }
        self.bump();
        if !self.prefixes.contains_key(&prefix) {
            return Err(self.err(ParseErrorKind::UnknownPrefix { prefix }));
        }
        let local = self.read_name_token();
        if local.is_empty() {
            let found = self.peek().map_or_else(String::new, |c| c.to_string());
            return Err(self.err(ParseErrorKind::Expected {
                expected: "local name",
                found,
            }));
        }
        Ok(local)
    }

    /// `@prefix name: <iri> .`
    fn parse_prefix_decl(&mut self) -> Result<(), ParseError> {
        self.expect('@', "'@'")?;
        let directive = self.read_name_token();
        if directive != "prefix" {
            return Err(self.err(ParseErrorKind::Expected {
                expected: "@prefix directive",
                found: directive,
            }));
        }
        self.skip_trivia();
        let name = self.read_name_token();
        self.expect(':', "':' after prefix name")?;
        self.skip_trivia();
        self.expect('<', "'<' opening IRI")?;
        let mut iri = String::new();
        loop {
            match self.bump() {
                Some('>') => break,
                Some(c) => iri.push(c),
                None => return Err(self.err(ParseErrorKind::UnterminatedIri)),
            }
        }
        self.skip_trivia();
        self.expect('.', "'.' ending @prefix declaration")?;
        self.prefixes.insert(name, iri);
        Ok(())
    }

    /// `subject verb objectList (";" verb objectList)* "."`
    fn parse_subject_block(&mut self) -> Result<(), ParseError> {
        let subject = self.read_prefixed_name("subject")?;
        loop {
            self.skip_trivia();
            let predicate = self.parse_verb()?;
            self.parse_object_list(&subject, &predicate)?;

            if self.pending_terminator {
                self.pending_terminator = false;
                return Ok(());
            }
            self.skip_trivia();
            match self.peek() {
                Some(';') => {
                    // Consume separator(s); a trailing ';' before '.' is fine.
                    while self.peek() == Some(';') {
                        self.bump();
                        self.skip_trivia();
                    }
                    if self.peek() == Some('.') {
                        self.bump();
                        return Ok(());
                    }
                    if self.peek().is_none() {
                        return Err(self.err(ParseErrorKind::UnexpectedEof));
                    }
                }
                Some('.') => {
                    self.bump();
                    return Ok(());
                }
                Some(c) => {
                    return Err(self.err(ParseErrorKind::Expected {
                        expected: "';' or '.'",
                        found: c.to_string(),
                    }))
                }
                None => return Err(self.err(ParseErrorKind::UnexpectedEof)),
            }
        }
    }

    /// A predicate: either the `a` shorthand or a prefixed name.
    fn parse_verb(&mut self) -> Result<String, ParseError> {
        let token = self.read_name_token();
        if token == "a" && self.peek() != Some(':') {
            return Ok(pred::TYPE.to_string());
        }
        if self.peek() != Some(':') {
            return Err(self.err(ParseErrorKind::MalformedPredicate { token }));
        }
        self.bump();
        if !self.prefixes.contains_key(&token) {
            return Err(self.err(ParseErrorKind::UnknownPrefix { prefix: token }));
        }
        let local = self.read_name_token();
        if local.is_empty() {
            return Err(self.err(ParseErrorKind::MalformedPredicate { token }));
        }
        Ok(local)
    }

    fn parse_object_list(&mut self, subject: &str, predicate: &str) -> Result<(), ParseError> {
        loop {
            self.skip_trivia();
            let object = self.parse_object()?;
            self.facts
                .push(Fact::new(subject, predicate, object));
            if self.pending_terminator {
                return Ok(());
            }
            self.skip_trivia();
            if self.peek() == Some(',') {
                self.bump();
            } else {
                return Ok(());
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some('"') => self.parse_string_literal(),
            Some(c) if c.is_ascii_digit() || c == '+' || c == '-' => self.parse_number(),
            Some(c) if c.is_alphanumeric() || c == '_' => {
                let token = self.read_name_token();
                match token.as_str() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    _ => {
                        if self.peek() != Some(':') {
                            return Err(self.err(ParseErrorKind::Expected {
                                expected: "object",
                                found: token,
                            }));
                        }
                        self.bump();
                        if !self.prefixes.contains_key(&token) {
                            return Err(self.err(ParseErrorKind::UnknownPrefix { prefix: token }));
                        }
                        let local = self.read_name_token();
                        if local.is_empty() {
                            return Err(self.err(ParseErrorKind::Expected {
                                expected: "local name",
                                found: String::new(),
                            }));
                        }
                        Ok(Value::Ref(local))
                    }
                }
            }
            Some(c) => Err(self.err(ParseErrorKind::Expected {
                expected: "object",
                found: c.to_string(),
            })),
            None => Err(self.err(ParseErrorKind::UnexpectedEof)),
        }
    }

    fn parse_string_literal(&mut self) -> Result<Value, ParseError> {
        let start_line = self.line;
        let start_column = self.column;
        self.bump(); // opening quote
        let mut text = String::new();
        loop {
            match self.bump() {
                Some('"') => break,
                Some('\\') => match self.bump() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some('r') => text.push('\r'),
                    Some(c) => text.push(c),
                    None => {
                        return Err(ParseError {
                            line: start_line,
                            column: start_column,
                            kind: ParseErrorKind::UnterminatedString,
                        })
                    }
                },
                Some(c) => text.push(c),
                None => {
                    return Err(ParseError {
                        line: start_line,
                        column: start_column,
                        kind: ParseErrorKind::UnterminatedString,
                    })
                }
            }
        }

        // Optional language tag: "text"@en
        if self.peek() == Some('@') {
            self.bump();
            while let Some(c) = self.peek() {
                if c.is_ascii_alphanumeric() || c == '-' {
                    self.bump();
                } else {
                    break;
                }
            }
            return Ok(Value::Str(text));
        }

        // Optional datatype: "35"^^xsd:integer
        if self.peek() == Some('^') {
            self.bump();
            self.expect('^', "'^^' datatype marker")?;
            let datatype = self.read_prefixed_name("datatype")?;
            return self.coerce_typed_literal(text, &datatype);
        }

        Ok(Value::Str(text))
    }

    fn coerce_typed_literal(
        &self,
        lexical: String,
        datatype: &str,
    ) -> Result<Value, ParseError> {
        match datatype {
            "integer" | "int" | "long" | "nonNegativeInteger" => lexical
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| self.err(ParseErrorKind::MalformedNumber { token: lexical })),
            "decimal" | "double" | "float" => lexical
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| self.err(ParseErrorKind::MalformedNumber { token: lexical })),
            "boolean" => match lexical.trim() {
                "true" | "1" => Ok(Value::Bool(true)),
                "false" | "0" => Ok(Value::Bool(false)),
                _ => Err(self.err(ParseErrorKind::Expected {
                    expected: "boolean lexical form",
                    found: lexical,
                })),
            },
            _ => Ok(Value::Str(lexical)),
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let mut token = String::new();
        if matches!(self.peek(), Some('+') | Some('-')) {
            token.push(self.bump().unwrap_or_default());
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E' {
                token.push(c);
                self.bump();
            } else {
                break;
            }
        }
        // A trailing '.' is the statement terminator, not part of the number.
        if token.ends_with('.') {
            token.pop();
            self.pending_terminator = true;
        }
        if token.contains('.') || token.contains('e') || token.contains('E') {
            token
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| self.err(ParseErrorKind::MalformedNumber { token }))
        } else {
            token
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| self.err(ParseErrorKind::MalformedNumber { token }))
        }
    }
}
