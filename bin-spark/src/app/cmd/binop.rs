use std::marker::PhantomData;
use std::str::FromStr;
use spark::{Ring, RingOps};
use spark_matrix::sparse::*;
use crate::app::utils::*;
use crate::app::utils::dispatch::dispatch_ring;
use crate::app::utils::pretty::{pretty, Color, IntForm, Painter};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinOp { 
    Add, EMul, MatMul
}

impl BinOp { 
    fn title(&self) -> &'static str { 
        match self { 
            BinOp::Add    => "A + B:",
            BinOp::EMul   => "A * B (element-wise):",
            BinOp::MatMul => "A @ B (dot product):",
        }
    }

    fn color(&self) -> Color { 
        match self { 
            BinOp::Add    => Color::Green,
            BinOp::EMul   => Color::Red,
            BinOp::MatMul => Color::Blue,
        }
    }
}

pub fn dispatch(op: BinOp, args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_ring!(App, args, op)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    /// e.g. '[[1,2],[3,4]]'
    pub a: String,

    pub b: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub struct App<R>
where
    R: Ring + FromStr + IntForm,
    for<'x> &'x R: RingOps<R>,
{
    args: Args,
    op: BinOp,
    _ring: PhantomData<R>
}

impl<R> App<R>
where
    R: Ring + FromStr + IntForm,
    for<'x> &'x R: RingOps<R>,
{
    pub fn new(args: Args, op: BinOp) -> Self { 
        App { args, op, _ring: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        let a = parse_mat::<R>(&self.args.a)?;
        let b = parse_mat::<R>(&self.args.b)?;

        let c = match self.op { 
            BinOp::Add    => add(&a, &b)?,
            BinOp::EMul   => elementwise_multiply(&a, &b)?,
            BinOp::MatMul => matmul(&a, &b)?,
        };

        let p = Painter::new(self.op.color(), !self.args.common.no_color);
        let res = pretty(&c, self.op.title(), &p);
        Ok(res)
    }
}
