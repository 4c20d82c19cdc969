use crate::app::err::*;
use std::str::FromStr;
use spark::{Ring, RingOps};
use spark_matrix::sparse::SpMat;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration) 
where F: FnOnce() -> Res { 
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

fn parse_num<R: FromStr>(n: &serde_json::Number) -> Result<R, Box<dyn std::error::Error>> { 
    let s = n.to_string();
    match R::from_str(&s) { 
        Ok(r) => Ok(r),
        Err(_) => err!("cannot parse '{}' as {}.", s, std::any::type_name::<R>())
    }
}

// e.g. "[[1, 2], [3, 4]]"
pub fn parse_mat<R>(input: &str) -> Result<SpMat<R>, Box<dyn std::error::Error>>
where R: Ring + FromStr, for<'x> &'x R: RingOps<R> { 
    let Ok(data) = serde_json::from_str::<Vec<Vec<serde_json::Number>>>(input) else { 
        return err!("invalid input matrix: '{}'", input);
    };

    let rows = data.iter().map(|row| 
        row.iter().map(parse_num).collect::<Result<Vec<R>, _>>()
    ).collect::<Result<Vec<_>, _>>()?;

    let a = SpMat::from_rows(rows)?;
    Ok(a)
}

// e.g. "[1, 2, 3]"
pub fn parse_vec<R>(input: &str) -> Result<Vec<R>, Box<dyn std::error::Error>>
where R: FromStr { 
    let Ok(data) = serde_json::from_str::<Vec<serde_json::Number>>(input) else { 
        return err!("invalid input vector: '{}'", input);
    };
    data.iter().map(parse_num).collect()
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn parse_mat_int() { 
        let a = parse_mat::<i64>("[[1, 0], [3, 4]]").unwrap();
        assert_eq!(a.to_dense(), vec![vec![1, 0], vec![3, 4]]);
    }

    #[test]
    fn parse_mat_float() { 
        let a = parse_mat::<f64>("[[1.5, 0], [3, 4]]").unwrap();
        assert_eq!(a.get(0, 0), Ok(1.5));
        assert_eq!(a.nnz(), 3);
    }

    #[test]
    fn parse_mat_err() { 
        assert!(parse_mat::<i64>("[[1.5]]").is_err());
        assert!(parse_mat::<i64>("[[1, 2], [3]]").is_err());
        assert!(parse_mat::<i64>("[]").is_err());
        assert!(parse_mat::<i64>("hello").is_err());
    }

    #[test]
    fn parse_vec_int() { 
        assert_eq!(parse_vec::<i64>("[1, 2, 3]").unwrap(), vec![1, 2, 3]);
        assert!(parse_vec::<i64>("[[1]]").is_err());
    }

    #[test]
    fn guard() { 
        let res: Result<(), _> = guard_panic(|| panic!("boom"));
        assert_eq!(res.unwrap_err().to_string(), "panic: boom");
    }
}
