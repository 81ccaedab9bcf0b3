use std::fmt;

use crate::language::*;

pub fn parse_via_taking(content: &str) -> Result<Message, ParsingError> {
    let mut input = Parser::new();
    input.initialize(content);

    input.parse_from_start()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    UnexpectedEndOfInput(usize),
    UnterminatedQuote(usize),
    Expected(usize, &'static str),
    InvalidCharacter(usize, char),
    EmptyKey(usize),
    InvalidOffset(usize),
    DuplicateSelector(usize, String),
    MissingSubmessages(usize),
    UnmatchedClosingBrace(usize),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::UnexpectedEndOfInput(offset) => *offset,
            ParsingError::UnterminatedQuote(offset) => *offset,
            ParsingError::Expected(offset, _) => *offset,
            ParsingError::InvalidCharacter(offset, _) => *offset,
            ParsingError::EmptyKey(offset) => *offset,
            ParsingError::InvalidOffset(offset) => *offset,
            ParsingError::DuplicateSelector(offset, _) => *offset,
            ParsingError::MissingSubmessages(offset) => *offset,
            ParsingError::UnmatchedClosingBrace(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::UnexpectedEndOfInput(_) => "unexpected end of input".to_string(),
            ParsingError::UnterminatedQuote(_) => "quoted text is never closed".to_string(),
            ParsingError::Expected(_, value) => format!("expected {}", value),
            ParsingError::InvalidCharacter(_, c) => format!("invalid character '{}'", c),
            ParsingError::EmptyKey(_) => "placeholder has no argument name".to_string(),
            ParsingError::InvalidOffset(_) => "invalid plural offset".to_string(),
            ParsingError::DuplicateSelector(_, key) => {
                format!("selector \"{}\" appears more than once", key)
            }
            ParsingError::MissingSubmessages(_) => "expected at least one sub-message".to_string(),
            ParsingError::UnmatchedClosingBrace(_) => "closing brace without opening".to_string(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message(), self.offset())
    }
}

impl std::error::Error for ParsingError {}

#[derive(Debug)]
pub struct Parser<'i> {
    source: &'i str,
    offset: usize,
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser {
            source: "",
            offset: 0,
        }
    }

    pub fn initialize(&mut self, content: &'i str) {
        self.source = content;
        self.offset = 0;
    }

    fn advance(&mut self, width: usize) {
        // advance the parser position
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    fn peek_next_char(&self) -> Option<char> {
        self.source
            .chars()
            .next()
    }

    fn peek_second_char(&self) -> Option<char> {
        self.source
            .chars()
            .nth(1)
    }

    pub fn parse_from_start(&mut self) -> Result<Message, ParsingError> {
        let message = self.read_message(None)?;

        // read_message() stops at a closing brace it has no use for
        if !self.is_finished() {
            return Err(ParsingError::UnmatchedClosingBrace(self.offset));
        }

        Ok(message)
    }

    /// Read nodes until the end of input or an unquoted closing brace, which
    /// is left for the caller to consume. The parent type is that of the
    /// enclosing placeholder, if any.
    pub fn read_message(&mut self, parent: Option<&str>) -> Result<Message, ParsingError> {
        let plural = parent.map_or(false, is_plural_type);
        let mut nodes = Vec::new();

        while let Some(c) = self.peek_next_char() {
            match c {
                '}' => break,
                '{' => {
                    let placeholder = self.read_placeholder()?;
                    nodes.push(Node::Placeholder(placeholder));
                }
                '#' if plural => {
                    self.advance(1);
                    nodes.push(Node::Placeholder(Placeholder::ArgNumRef));
                }
                _ => {
                    let text = self.read_text(plural)?;
                    nodes.push(Node::Text(text));
                }
            }
        }

        Ok(Message(nodes))
    }

    /// Read literal text, resolving apostrophe escapes, up to the next
    /// syntax character.
    pub fn read_text(&mut self, plural: bool) -> Result<String, ParsingError> {
        let mut text = String::new();

        while let Some(c) = self.peek_next_char() {
            if is_syntax_char(c, plural) {
                break;
            }

            if c == '\'' {
                match self.peek_second_char() {
                    Some('\'') => {
                        text.push('\'');
                        self.advance(2);
                    }
                    Some(next) if is_syntax_char(next, plural) => {
                        let start = self.offset;
                        self.advance(1);
                        self.read_quoted(start, &mut text)?;
                    }
                    _ => {
                        // a lone apostrophe is just an apostrophe
                        text.push('\'');
                        self.advance(1);
                    }
                }
            } else {
                text.push(c);
                self.advance(c.len_utf8());
            }
        }

        Ok(text)
    }

    /// Consume the inside of a quoted section, whose opening apostrophe has
    /// already been taken, along with its closing apostrophe.
    fn read_quoted(&mut self, start: usize, text: &mut String) -> Result<(), ParsingError> {
        loop {
            match self.peek_next_char() {
                None => return Err(ParsingError::UnterminatedQuote(start)),
                Some('\'') => {
                    if self.peek_second_char() == Some('\'') {
                        text.push('\'');
                        self.advance(2);
                    } else {
                        self.advance(1);
                        return Ok(());
                    }
                }
                Some(c) => {
                    text.push(c);
                    self.advance(c.len_utf8());
                }
            }
        }
    }

    pub fn read_placeholder(&mut self) -> Result<Placeholder, ParsingError> {
        self.require_char('{', "an opening brace")?;
        self.trim_whitespace();

        let key = self.read_token();
        if key.is_empty() {
            return Err(ParsingError::EmptyKey(self.offset));
        }
        self.trim_whitespace();

        match self.peek_next_char() {
            Some('}') => {
                self.advance(1);
                return Ok(Placeholder::Argument {
                    key: key.to_string(),
                });
            }
            Some(',') => self.advance(1),
            Some(c) => return Err(ParsingError::InvalidCharacter(self.offset, c)),
            None => return Err(ParsingError::UnexpectedEndOfInput(self.offset)),
        }
        self.trim_whitespace();

        let kind = self.read_token();
        if kind.is_empty() {
            return Err(ParsingError::Expected(self.offset, "a placeholder type"));
        }
        self.trim_whitespace();

        let takes_cases = is_plural_type(kind) || kind == "select";

        match self.peek_next_char() {
            Some('}') => {
                if takes_cases {
                    return Err(ParsingError::MissingSubmessages(self.offset));
                }
                self.advance(1);
                return Ok(Placeholder::Styled {
                    key: key.to_string(),
                    kind: kind.to_string(),
                    style: None,
                });
            }
            Some(',') => self.advance(1),
            Some(c) => return Err(ParsingError::InvalidCharacter(self.offset, c)),
            None => return Err(ParsingError::UnexpectedEndOfInput(self.offset)),
        }

        let placeholder = if let Some(plural) = PluralKind::from_type(kind) {
            self.trim_whitespace();
            let offset = self.read_offset()?;
            let children = self.read_children(kind)?;
            Placeholder::Plural {
                key: key.to_string(),
                kind: plural,
                offset,
                children,
            }
        } else if takes_cases {
            let cases = self.read_children(kind)?;
            Placeholder::Styled {
                key: key.to_string(),
                kind: kind.to_string(),
                style: Some(Style::Cases(cases)),
            }
        } else {
            let style = self.read_style()?;
            Placeholder::Styled {
                key: key.to_string(),
                kind: kind.to_string(),
                style: if style.is_empty() {
                    None
                } else {
                    Some(Style::Text(style))
                },
            }
        };

        self.require_char('}', "a closing brace")?;

        Ok(placeholder)
    }

    /// An optional `offset:N` clause at the start of a plural body.
    fn read_offset(&mut self) -> Result<u32, ParsingError> {
        if !is_offset_clause(self.source) {
            return Ok(0);
        }
        self.advance("offset:".len());
        self.trim_whitespace();

        let start = self.offset;
        let width = self
            .source
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(
                self.source
                    .len(),
            );

        let digits = &self.source[..width];
        let offset = digits
            .parse::<u32>()
            .map_err(|_| ParsingError::InvalidOffset(start))?;
        self.advance(width);

        Ok(offset)
    }

    /// Read `selector {message}` pairs until the closing brace of the
    /// enclosing placeholder, which is not consumed.
    pub fn read_children(&mut self, parent: &str) -> Result<SubMessages, ParsingError> {
        let mut children = SubMessages::new();

        loop {
            self.trim_whitespace();

            match self.peek_next_char() {
                None => return Err(ParsingError::UnexpectedEndOfInput(self.offset)),
                Some('}') => break,
                Some(_) => {}
            }

            let start = self.offset;
            let selector = self.read_selector();
            if selector.is_empty() {
                return Err(ParsingError::Expected(self.offset, "a selector"));
            }
            self.trim_whitespace();

            self.require_char('{', "an opening brace")?;
            let message = self.read_message(Some(parent))?;
            self.require_char('}', "a closing brace")?;

            if children.contains_key(selector) {
                return Err(ParsingError::DuplicateSelector(start, selector.to_string()));
            }
            children.insert(selector.to_string(), message);
        }

        if children.is_empty() {
            return Err(ParsingError::MissingSubmessages(self.offset));
        }

        Ok(children)
    }

    /// Read a format style up to the closing brace. Any lone apostrophe
    /// opens a quoted section here, and whitespace is kept only if quoted or
    /// between other characters.
    pub fn read_style(&mut self) -> Result<String, ParsingError> {
        self.trim_whitespace();

        let mut style = String::new();
        let mut significant = 0;

        while let Some(c) = self.peek_next_char() {
            match c {
                '}' => break,
                '{' => return Err(ParsingError::InvalidCharacter(self.offset, c)),
                '\'' => {
                    if self.peek_second_char() == Some('\'') {
                        style.push('\'');
                        self.advance(2);
                    } else {
                        let start = self.offset;
                        self.advance(1);
                        self.read_quoted(start, &mut style)?;
                    }
                    significant = style.len();
                }
                _ => {
                    style.push(c);
                    self.advance(c.len_utf8());
                    if !c.is_whitespace() {
                        significant = style.len();
                    }
                }
            }
        }

        style.truncate(significant);
        Ok(style)
    }

    /// Argument names and types run up to whitespace or punctuation.
    fn read_token(&mut self) -> &'i str {
        let width = self
            .source
            .find(|c: char| c.is_whitespace() || matches!(c, ',' | '{' | '}'))
            .unwrap_or(
                self.source
                    .len(),
            );

        let token = &self.source[..width];
        self.advance(width);
        token
    }

    /// Selector keys run up to whitespace or a brace.
    fn read_selector(&mut self) -> &'i str {
        let width = self
            .source
            .find(|c: char| c.is_whitespace() || matches!(c, '{' | '}'))
            .unwrap_or(
                self.source
                    .len(),
            );

        let selector = &self.source[..width];
        self.advance(width);
        selector
    }

    fn require_char(&mut self, expected: char, what: &'static str) -> Result<(), ParsingError> {
        match self.peek_next_char() {
            Some(c) if c == expected => {
                self.advance(c.len_utf8());
                Ok(())
            }
            Some(_) => Err(ParsingError::Expected(self.offset, what)),
            None => Err(ParsingError::UnexpectedEndOfInput(self.offset)),
        }
    }

    /// Trim any leading whitespace (space, tab, newline) from the front of
    /// the current parser text.
    fn trim_whitespace(&mut self) {
        let l = self
            .source
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(
                self.source
                    .len(),
            );

        self.advance(l);
    }
}

fn is_syntax_char(c: char, plural: bool) -> bool {
    c == '{' || c == '}' || (plural && c == '#')
}

fn is_offset_clause(content: &str) -> bool {
    let re = regex!(r"^offset:\s*[0-9]");
    re.is_match(content)
}
