//! Expression parsing.
//!
//! Precedence chain, loosest first:
//!
//! ```text
//! or          atau
//! and         dan
//! equality    == !=
//! comparison  < > <= >=
//! term        + -
//! factor      * /
//! primary     literal | call | identifier | ( expr )
//! ```
//!
//! Every level is left-associative: the running left operand is wrapped
//! once per operator, so `a - b - c` is `(a - b) - c`.

use fox_ir::{BinaryOp, Expr, TokenKind};
use fox_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

type Operand<'src> = fn(&mut Parser<'src>) -> Result<Expr, ParseError>;

/// Membership test for one precedence level.
type Level = fn(BinaryOp) -> bool;

fn is_or_level(op: BinaryOp) -> bool {
    op == BinaryOp::Or
}

fn is_and_level(op: BinaryOp) -> bool {
    op == BinaryOp::And
}

fn is_equality_level(op: BinaryOp) -> bool {
    matches!(op, BinaryOp::Eq | BinaryOp::NotEq)
}

fn is_comparison_level(op: BinaryOp) -> bool {
    matches!(op, BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq)
}

fn is_additive_level(op: BinaryOp) -> bool {
    matches!(op, BinaryOp::Add | BinaryOp::Sub)
}

fn is_multiplicative_level(op: BinaryOp) -> bool {
    matches!(op, BinaryOp::Mul | BinaryOp::Div)
}

impl<'src> Parser<'src> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` since parenthesized expressions and
    /// call arguments recurse back here.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_or())
    }

    /// One left-associative precedence level.
    fn parse_left_assoc(
        &mut self,
        operand: Operand<'src>,
        level: Level,
    ) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;
        while let Some(op) = BinaryOp::from_token(self.current_kind()).filter(|&op| level(op)) {
            self.advance();
            let right = operand(self)?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_and, is_or_level)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_equality, is_and_level)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_comparison, is_equality_level)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_term, is_comparison_level)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_factor, is_additive_level)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_primary, is_multiplicative_level)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::String => Ok(Expr::string(token.into_text())),
            TokenKind::Number => {
                let line = token.line;
                let literal = token.into_text();
                match literal.parse::<i64>() {
                    Ok(n) => Ok(Expr::number(n)),
                    Err(_) => Err(ParseError::NumberTooLarge { line, literal }),
                }
            }
            TokenKind::Ident => {
                let name = token.into_text();
                if self.check(TokenKind::LParen) {
                    self.advance();
                    let args = self.parse_call_args()?;
                    Ok(Expr::call(name, args))
                } else {
                    Ok(Expr::var(name))
                }
            }
            TokenKind::LParen => {
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            _ => Err(ParseError::expected_expression(&token)),
        }
    }

    /// Arguments after the opening `(`, through the closing `)`.
    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.check(TokenKind::Comma) {
                    break;
                }
                self.advance();
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        Ok(args)
    }
}
