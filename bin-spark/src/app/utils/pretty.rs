use itertools::Itertools;
use num_bigint::BigInt;
use spark::{Ring, RingOps};
use spark_matrix::sparse::{MatTrait, SpMat};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    Red, Green, Yellow, Blue, Magenta, Cyan, White
}

impl Color {
    fn code(&self) -> &'static str {
        use Color::*;
        match self {
            Red     => "\x1b[31m",
            Green   => "\x1b[32m",
            Yellow  => "\x1b[33m",
            Blue    => "\x1b[34m",
            Magenta => "\x1b[35m",
            Cyan    => "\x1b[36m",
            White   => "\x1b[37m",
        }
    }
}

const BRIGHT: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Display form used in the bordered tables: integers as is, reals
/// truncated toward zero.
pub trait IntForm {
    fn int_form(&self) -> String;
}

macro_rules! impl_int_form {
    ($type:ty) => {
        impl IntForm for $type {
            fn int_form(&self) -> String {
                self.to_string()
            }
        }
    };
}

impl_int_form!(i64);
impl_int_form!(BigInt);

impl IntForm for f64 {
    fn int_form(&self) -> String {
        // adding 0.0 turns -0.0 into 0.0.
        format!("{}", self.trunc() + 0.0)
    }
}

pub struct Painter {
    color: Option<Color>
}

impl Painter {
    pub fn new(color: Color, enabled: bool) -> Self {
        let color = enabled.then_some(color);
        Painter { color }
    }

    pub fn paint(&self, s: &str) -> String {
        match self.color {
            Some(c) => format!("{}{s}{RESET}", c.code()),
            None => s.to_string()
        }
    }

    pub fn title(&self, s: &str) -> String {
        match self.color {
            Some(c) => format!("{}{BRIGHT}{s}{RESET}", c.code()),
            None => s.to_string()
        }
    }
}

/// Renders `a` as a bordered table under `title`:
///
/// ```text
/// ┌───────┐
/// │ 1 2 3 │
/// │ 4 5 6 │
/// └───────┘
/// ```
pub fn pretty<R>(a: &SpMat<R>, title: &str, p: &Painter) -> String
where R: Ring + IntForm, for<'x> &'x R: RingOps<R> {
    let rows = a.rows_iter().map(|row|
        row.iter().map(|x| x.int_form()).collect_vec()
    ).collect_vec();

    let width = rows.iter().flatten().map(|s| s.chars().count()).max().unwrap_or(0).max(1);
    let bar = "─".repeat(a.cols() * (width + 1) + 1);

    let mut lines = vec![
        p.title(title),
        p.paint(&format!("┌{bar}┐"))
    ];

    for row in rows {
        let cells = row.iter().map(|s| format!("{s:>width$}")).join(" ");
        lines.push(p.paint(&format!("│ {cells} │")));
    }

    lines.push(p.paint(&format!("└{bar}┘")));
    lines.join("\n")
}
