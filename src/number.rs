//! Representation of minilisp numbers.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::num::IntErrorKind;
use std::str;

use self::Number::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl From<Number> for f64 {
    fn from(num: Number) -> f64 {
        match num {
            Integer(i) => i as f64,
            Float(f) => f,
        }
    }
}

#[derive(Debug)]
pub struct ParseNumberError(pub String);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(i) => write!(f, "{}", i),
            // Keep a fractional part so floats read back as floats.
            Float(ff) if ff.is_finite() && ff.fract() == 0.0 => write!(f, "{:.1}", ff),
            Float(ff) => write!(f, "{}", ff),
        }
    }
}

impl str::FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Integer text that overflows is an error, not a Float.
        match s.parse::<i64>() {
            Ok(int) => return Ok(Integer(int)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                return Err(ParseNumberError(s.to_string()))
            }
            Err(_) => {}
        }

        let float = s.parse::<f64>();
        if let Ok(f) = float {
            return Ok(Float(f));
        }

        Err(ParseNumberError(s.to_string()))
    }
}


impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Integer(a), Integer(b)) => a.partial_cmp(b),
            _ => f64::from(*self).partial_cmp(&f64::from(*other)),
        }
    }
}


type NumRet = Result<Number, Cow<'static, str>>;

const OVERFLOW: &str = "integer overflow";

// Integer op Integer stays an Integer; anything involving a Float is promoted.
impl Number {
    pub fn add(self, other: Number) -> NumRet {
        match (self, other) {
            (Integer(a), Integer(b)) => a.checked_add(b).map(Integer).ok_or(OVERFLOW.into()),
            _ => Ok(Float(f64::from(self) + f64::from(other))),
        }
    }

    pub fn sub(self, other: Number) -> NumRet {
        match (self, other) {
            (Integer(a), Integer(b)) => a.checked_sub(b).map(Integer).ok_or(OVERFLOW.into()),
            _ => Ok(Float(f64::from(self) - f64::from(other))),
        }
    }

    pub fn mul(self, other: Number) -> NumRet {
        match (self, other) {
            (Integer(a), Integer(b)) => a.checked_mul(b).map(Integer).ok_or(OVERFLOW.into()),
            _ => Ok(Float(f64::from(self) * f64::from(other))),
        }
    }

    /// Integer division truncates toward zero.
    pub fn div(self, other: Number) -> NumRet {
        match (self, other) {
            (Integer(_), Integer(0)) => Err("division by zero".into()),
            (Integer(a), Integer(b)) => a.checked_div(b).map(Integer).ok_or(OVERFLOW.into()),
            _ => Ok(Float(f64::from(self) / f64::from(other))),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_prefers_integers() {
        assert_eq!("12".parse::<Number>().unwrap(), Integer(12));
        assert_eq!("-3".parse::<Number>().unwrap(), Integer(-3));
        assert_eq!("1.5".parse::<Number>().unwrap(), Float(1.5));
        assert!("abc".parse::<Number>().is_err());
        assert!("99999999999999999999".parse::<Number>().is_err());
        assert!("-99999999999999999999".parse::<Number>().is_err());
        assert_eq!("1e3".parse::<Number>().unwrap(), Float(1000.0));
    }

    #[test]
    fn promotion() {
        assert_eq!(Integer(2).add(Integer(3)), Ok(Integer(5)));
        assert_eq!(Integer(2).add(Float(0.5)), Ok(Float(2.5)));
        assert_eq!(Float(3.0).mul(Integer(2)), Ok(Float(6.0)));
    }

    #[test]
    fn truncating_division() {
        assert_eq!(Integer(7).div(Integer(2)), Ok(Integer(3)));
        assert_eq!(Integer(-7).div(Integer(2)), Ok(Integer(-3)));
        assert_eq!(Integer(7).div(Float(2.0)), Ok(Float(3.5)));
        assert!(Integer(1).div(Integer(0)).is_err());
        assert!(Integer(i64::MIN).div(Integer(-1)).is_err());
    }

    #[test]
    fn overflow() {
        assert!(Integer(i64::MAX).add(Integer(1)).is_err());
        assert!(Integer(i64::MIN).sub(Integer(1)).is_err());
    }

    #[test]
    fn mixed_ordering() {
        assert!(Integer(1) < Float(1.5));
        assert!(Float(2.5) > Integer(2));
        assert!(Integer(-4) < Integer(10));
    }

    #[test]
    fn display() {
        assert_eq!(Integer(8).to_string(), "8");
        assert_eq!(Float(4.0).to_string(), "4.0");
        assert_eq!(Float(2.25).to_string(), "2.25");
    }
}
