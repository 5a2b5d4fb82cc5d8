//! Recursive-descent parser for the expression grammar.
//!
//! Precedence, loosest first: `+ -` / `* / %` / unary minus / `^`
//! (right-associative). Function calls take a parenthesized,
//! comma-separated argument list.

use super::token::Token;

/// Abstract syntax for a parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Name(String),
    Neg(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Call(String, Vec<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

/// Parses a token stream into an AST.
pub fn parse(tokens: &[Token]) -> Result<Expr, String> {
    if tokens.is_empty() {
        return Err("empty expression".to_string());
    }
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.additive()?;
    match parser.peek() {
        None => Ok(expr),
        Some(tok) => Err(format!("unexpected '{tok}'")),
    }
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, expected: &Token) -> Result<(), String> {
        match self.bump() {
            Some(tok) if tok == expected => Ok(()),
            Some(tok) => Err(format!("expected '{expected}', found '{tok}'")),
            None => Err(format!("expected '{expected}', found end of input")),
        }
    }

    fn additive(&mut self) -> Result<Expr, String> {
        let mut lhs = self.multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.multiplicative()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn multiplicative(&mut self) -> Result<Expr, String> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinOp::Mul,
                Some(Token::Slash) => BinOp::Div,
                Some(Token::Percent) => BinOp::Rem,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    // Unary minus binds looser than `^`: -2^2 is -(2^2).
    fn unary(&mut self) -> Result<Expr, String> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, String> {
        let base = self.atom()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.pos += 1;
            // Right-associative; the exponent may itself be signed.
            let exponent = self.unary()?;
            return Ok(Expr::Binary(
                BinOp::Pow,
                Box::new(base),
                Box::new(exponent),
            ));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, String> {
        match self.bump().cloned() {
            Some(Token::Number(v)) => Ok(Expr::Num(v)),
            Some(Token::Ident(name)) => {
                if matches!(self.peek(), Some(Token::LParen)) {
                    self.pos += 1;
                    let args = self.call_args()?;
                    Ok(Expr::Call(name, args))
                } else {
                    Ok(Expr::Name(name))
                }
            }
            Some(Token::LParen) => {
                let inner = self.additive()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            Some(tok) => Err(format!("unexpected '{tok}'")),
            None => Err("unexpected end of expression".to_string()),
        }
    }

    fn call_args(&mut self) -> Result<Vec<Expr>, String> {
        if matches!(self.peek(), Some(Token::RParen)) {
            self.pos += 1;
            return Ok(Vec::new());
        }
        let mut args = vec![self.additive()?];
        loop {
            match self.bump() {
                Some(Token::Comma) => args.push(self.additive()?),
                Some(Token::RParen) => return Ok(args),
                Some(tok) => return Err(format!("expected ',' or ')', found '{tok}'")),
                None => return Err("unclosed argument list".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::token::tokenize;
    use super::*;

    fn parse_str(input: &str) -> Result<Expr, String> {
        parse(&tokenize(input).unwrap())
    }

    #[test]
    fn precedence_mul_over_add() {
        let ast = parse_str("1+2*3").unwrap();
        let Expr::Binary(BinOp::Add, _, rhs) = ast else {
            panic!("expected top-level add");
        };
        assert!(matches!(*rhs, Expr::Binary(BinOp::Mul, _, _)));
    }

    #[test]
    fn power_is_right_associative() {
        let ast = parse_str("2^3^2").unwrap();
        let Expr::Binary(BinOp::Pow, _, rhs) = ast else {
            panic!("expected top-level pow");
        };
        assert!(matches!(*rhs, Expr::Binary(BinOp::Pow, _, _)));
    }

    #[test]
    fn calls_with_multiple_arguments() {
        let ast = parse_str("pow(2, 10)").unwrap();
        assert!(matches!(ast, Expr::Call(name, args) if name == "pow" && args.len() == 2));
    }

    #[test]
    fn dangling_operator_is_an_error() {
        assert!(parse_str("2+").is_err());
        assert!(parse_str("(1+2").is_err());
        assert!(parse_str("1 2").is_err());
    }
}
