use std::marker::PhantomData;
use spark::{Ring, RingOps};
use spark::util::format::list;
use spark_matrix::sparse::*;
use crate::app::utils::*;
use crate::app::utils::dispatch::dispatch_ring;
use crate::app::utils::pretty::{pretty, Color, IntForm, Painter};

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_ring!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub struct App<R>
where
    R: Ring + IntForm + From<i32>,
    for<'x> &'x R: RingOps<R>,
{
    args: Args,
    buff: String,
    _ring: PhantomData<R>
}

impl<R> App<R>
where
    R: Ring + IntForm + From<i32>,
    for<'x> &'x R: RingOps<R>,
{
    pub fn new(args: Args) -> Self { 
        let buff = String::with_capacity(1024);
        App { args, buff, _ring: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        let a = Self::grid(|k| k + 1)?;
        let b = Self::grid(|k| 9 - k)?;

        let c = add(&a, &b)?;
        self.show(&c, "A + B:", Color::Green);

        let d = elementwise_multiply(&a, &b)?;
        self.show(&d, "A * B (element-wise):", Color::Red);

        let e = matmul(&a, &b)?;
        self.show(&e, "A @ B (dot product):", Color::Blue);

        let det = a.determinant()?;
        let line = self.painter(Color::Cyan).paint(&format!("Determinant of A: {det}"));
        self.out(&line);
        self.out("");

        let t = a.transpose();
        self.show(&t, "Transpose of A:", Color::Magenta);

        let v = vec![R::from(1), R::from(2), R::from(3)];
        let w = a.apply(&v)?;
        let line = self.painter(Color::Yellow).paint(&format!(
            "Matrix-vector multiplication A * {}: {}", list(&v), list(&w)
        ));
        self.out(&line);

        let res = self.flush();
        Ok(res)
    }

    // 3x3 matrix with (i, j) -> f(3i + j), given as a full coordinate map.
    fn grid<F>(f: F) -> Result<SpMat<R>, Box<dyn std::error::Error>>
    where F: Fn(i32) -> i32 {
        let entries = (0..9).map(|k| 
            ((k as usize / 3, k as usize % 3), R::from(f(k)))
        ).collect();
        let a = SpMat::from_raw(3, 3, entries)?;
        Ok(a)
    }

    fn show(&mut self, a: &SpMat<R>, title: &str, color: Color) { 
        let table = pretty(a, title, &self.painter(color));
        self.out(&table);
        self.out("");
    }

    fn painter(&self, color: Color) -> Painter { 
        Painter::new(color, !self.args.common.no_color)
    }

    fn out(&mut self, str: &str) { 
        self.buff.push_str(str);
        self.buff.push('\n');
    }

    fn flush(&mut self) -> String { 
        let res = std::mem::take(&mut self.buff);
        res.trim_end().to_string()
    }
}
