use crate::error::ParseFractionError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Inv, One, ToPrimitive, Zero};
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

/// Exact rational number, always stored in lowest terms with a positive denominator.
#[derive(Debug, Clone)]
pub struct Fraction {
    pub num: BigInt,
    pub den: BigInt,
}

impl Fraction {
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = &num.gcd(&den);
        let num = num / g;
        let den = den / g;

        if den < BigInt::zero() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    // Lossy, for display only
    pub fn to_f64(&self) -> f64 {
        match (self.num.to_f64(), self.den.to_f64()) {
            (Some(num), Some(den)) => num / den,
            _ => f64::NAN,
        }
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    }
}

fn parse_digits(digits: &str, literal: &str) -> Result<BigInt, ParseFractionError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseFractionError::InvalidNumber(literal.to_owned()));
    }
    BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| ParseFractionError::InvalidNumber(literal.to_owned()))
}

fn parse_decimal(literal: &str) -> Result<Fraction, ParseFractionError> {
    let (negative, unsigned) = split_sign(literal);
    let (whole, decimals) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let num = parse_digits(&format!("{whole}{decimals}"), literal)?;
    let num = if negative { -num } else { num };
    let den = num_traits::pow(BigInt::from(10u32), decimals.len());
    Ok(Fraction::new(num, den))
}

/// Accepts `7`, `-7`, `5/2`, `-5/2`, `0.25` and `.5`, surrounded by optional whitespace.
impl FromStr for Fraction {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = s.trim();
        if literal.is_empty() {
            return Err(ParseFractionError::Empty);
        }

        match literal.split_once('/') {
            Some((num, den)) => {
                let (negative, num) = split_sign(num);
                let num = parse_digits(num, literal)?;
                let den = parse_digits(den, literal)?;
                if den.is_zero() {
                    return Err(ParseFractionError::ZeroDenominator(literal.to_owned()));
                }
                Ok(Fraction::new(if negative { -num } else { num }, den))
            }
            None => parse_decimal(literal),
        }
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::new(BigInt::from(value), BigInt::one())
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Inv for Fraction {
    type Output = Fraction;

    // Panics on zero, like `new` with a zero denominator
    fn inv(self) -> Fraction {
        Fraction::new(self.den, self.num)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::new(BigInt::one(), BigInt::one())
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::new(BigInt::zero(), BigInt::one())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * *rhs
    }
}

impl Eq for Fraction {}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
