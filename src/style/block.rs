//! Declaration block parsing (`name: value; name: value`).

use cssparser::{ParseError, Parser, ParserInput, Token};
use log::warn;

use super::declaration::StyleDeclaration;
use super::value::Value;
use crate::error::Result;

/// One `name: value` pair, with the value split into its component values.
#[derive(Debug, Clone, PartialEq)]
struct Declaration {
    name: String,
    components: Vec<String>,
}

impl StyleDeclaration {
    /// Apply a CSS-like declaration block.
    ///
    /// Values of directional properties with several components become a
    /// shorthand tuple; every other value is handed to the validator as a
    /// string, quoted strings unquoted. Comments are ignored, empty
    /// declarations are skipped, malformed ones are logged and skipped.
    /// Stops at the first rejected property.
    pub fn apply_css(&mut self, text: &str) -> Result<()> {
        for Declaration { name, components } in parse_declaration_block(text) {
            let value = if components.len() > 1 && self.schema().directional(&name).is_some() {
                Value::Tuple(components.into_iter().map(Value::from).collect())
            } else {
                Value::from(components.join(" "))
            };
            self.set(&name, value)?;
        }
        Ok(())
    }
}

fn parse_declaration_block(text: &str) -> Vec<Declaration> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut declarations = Vec::new();

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        if parser.try_parse(|i| i.expect_semicolon()).is_ok() {
            continue;
        }

        let start = parser.position();
        match parser.try_parse(parse_declaration) {
            Ok(declaration) => declarations.push(declaration),
            Err(_) => {
                // Skip to next semicolon to recover
                while let Ok(token) = parser.next() {
                    if matches!(token, Token::Semicolon) {
                        break;
                    }
                }
                let skipped = parser.slice_from(start).trim_end_matches(';').trim();
                warn!("ignoring malformed declaration: {skipped:?}");
            }
        }
    }

    declarations
}

fn parse_declaration<'i>(input: &mut Parser<'i, '_>) -> std::result::Result<Declaration, ParseError<'i, ()>> {
    let name = input.expect_ident()?.to_ascii_lowercase();
    input.expect_colon()?;

    // Collect component values until semicolon
    let mut components = Vec::new();
    loop {
        input.skip_whitespace();
        let start = input.position();
        let token = match input.next() {
            Ok(Token::Semicolon) | Err(_) => break,
            Ok(token) => token.clone(),
        };
        let component = match token {
            Token::QuotedString(s) => s.to_string(),
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                input.parse_nested_block(|block| -> std::result::Result<(), ParseError<'i, ()>> {
                    while block.next().is_ok() {}
                    Ok(())
                })?;
                input.slice_from(start).to_string()
            }
            _ => input.slice_from(start).to_string(),
        };
        components.push(component);
    }

    if components.is_empty() {
        return Err(input.new_custom_error(()));
    }
    Ok(Declaration { name, components })
}
