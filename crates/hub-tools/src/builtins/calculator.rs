//! Calculator: arithmetic expression evaluator

use crate::error::{Error, Result};
use crate::tool::Tool;

/// Evaluates arithmetic expressions with `+ - * / %` and parentheses.
pub struct Calculator;

impl Tool for Calculator {
    fn id(&self) -> &str {
        "calculator"
    }

    fn name(&self) -> &str {
        "Calculator"
    }

    fn description(&self) -> &str {
        "Evaluate arithmetic expressions"
    }

    fn run(&self, input: &str) -> Result<String> {
        let result = evaluate(input)?;
        Ok(format_number(result))
    }
}

/// Render without a trailing `.0` for whole results.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LParen,
    RParen,
}

/// Lexer: convert expression string into tokens.
fn lex(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            ' ' | '\t' | '\n' | '\r' => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut num_str = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        num_str.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let n = num_str
                    .parse::<f64>()
                    .map_err(|_| Error::invalid_input(format!("bad number '{num_str}'")))?;
                tokens.push(Token::Number(n));
            }
            '+' => {
                tokens.push(Token::Plus);
                chars.next();
            }
            '-' => {
                tokens.push(Token::Minus);
                chars.next();
            }
            '*' => {
                tokens.push(Token::Star);
                chars.next();
            }
            '/' => {
                tokens.push(Token::Slash);
                chars.next();
            }
            '%' => {
                tokens.push(Token::Percent);
                chars.next();
            }
            '(' => {
                tokens.push(Token::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RParen);
                chars.next();
            }
            other => {
                return Err(Error::invalid_input(format!(
                    "unexpected character '{other}'"
                )));
            }
        }
    }

    Ok(tokens)
}

/// Evaluate an arithmetic expression string.
pub fn evaluate(input: &str) -> Result<f64> {
    let tokens = lex(input)?;
    if tokens.is_empty() {
        return Err(Error::invalid_input("empty expression"));
    }
    let mut pos = 0;
    let result = parse_expr(&tokens, &mut pos)?;
    if pos != tokens.len() {
        return Err(Error::invalid_input("unexpected tokens after expression"));
    }
    Ok(result)
}

/// Parse addition/subtraction level.
fn parse_expr(tokens: &[Token], pos: &mut usize) -> Result<f64> {
    let mut left = parse_term(tokens, pos)?;
    while *pos < tokens.len() {
        match &tokens[*pos] {
            Token::Plus => {
                *pos += 1;
                left += parse_term(tokens, pos)?;
            }
            Token::Minus => {
                *pos += 1;
                left -= parse_term(tokens, pos)?;
            }
            _ => break,
        }
    }
    Ok(left)
}

/// Parse multiplication/division/modulo level.
fn parse_term(tokens: &[Token], pos: &mut usize) -> Result<f64> {
    let mut left = parse_unary(tokens, pos)?;
    while *pos < tokens.len() {
        match &tokens[*pos] {
            Token::Star => {
                *pos += 1;
                left *= parse_unary(tokens, pos)?;
            }
            Token::Slash => {
                *pos += 1;
                let right = parse_unary(tokens, pos)?;
                if right == 0.0 {
                    return Err(Error::invalid_input("division by zero"));
                }
                left /= right;
            }
            Token::Percent => {
                *pos += 1;
                let right = parse_unary(tokens, pos)?;
                if right == 0.0 {
                    return Err(Error::invalid_input("modulo by zero"));
                }
                left %= right;
            }
            _ => break,
        }
    }
    Ok(left)
}

/// Parse unary minus and primary expressions.
fn parse_unary(tokens: &[Token], pos: &mut usize) -> Result<f64> {
    if *pos < tokens.len() && tokens[*pos] == Token::Minus {
        *pos += 1;
        return Ok(-parse_unary(tokens, pos)?);
    }
    parse_primary(tokens, pos)
}

fn parse_primary(tokens: &[Token], pos: &mut usize) -> Result<f64> {
    match tokens.get(*pos) {
        Some(Token::Number(n)) => {
            *pos += 1;
            Ok(*n)
        }
        Some(Token::LParen) => {
            *pos += 1;
            let inner = parse_expr(tokens, pos)?;
            match tokens.get(*pos) {
                Some(Token::RParen) => {
                    *pos += 1;
                    Ok(inner)
                }
                _ => Err(Error::invalid_input("missing closing parenthesis")),
            }
        }
        _ => Err(Error::invalid_input("expected a number")),
    }
}
