use derive_more::{Display, Debug};
use is_even::IsEven;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, Debug)]
#[repr(i8)]
pub enum Sign { 
    #[default]
    #[display("+")]
    #[debug("+")]
    Pos = 1,

    #[display("-")]
    #[debug("-")]
    Neg = -1
}

impl Sign { 
    pub fn is_positive(&self) -> bool { 
        self == &Sign::Pos
    }

    // (-1)^val
    pub fn from_parity<I: IsEven>(val: I) -> Self { 
        if val.is_even() { 
            Sign::Pos
        } else { 
            Sign::Neg
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ord() {
        assert!(Sign::Neg < Sign::Pos)
    }

    #[test]
    fn to_string() { 
        assert_eq!(&Sign::Neg.to_string(), "-");
        assert_eq!(&Sign::Pos.to_string(), "+");
    }

    #[test]
    fn from_parity() { 
        assert_eq!(Sign::from_parity(0i64), Sign::Pos);
        assert_eq!(Sign::from_parity(1i64), Sign::Neg);
        assert_eq!(Sign::from_parity(4i64), Sign::Pos);
        assert_eq!(Sign::from_parity(7i64), Sign::Neg);
    }
}
