use std::marker::PhantomData;
use std::str::FromStr;
use spark::{Ring, RingOps};
use spark::util::format::list;
use crate::app::utils::*;
use crate::app::utils::dispatch::dispatch_ring;
use crate::app::utils::pretty::{Color, Painter};

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_ring!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    pub a: String,

    /// e.g. '[1,2,3]'
    pub v: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub struct App<R>
where
    R: Ring + FromStr,
    for<'x> &'x R: RingOps<R>,
{
    args: Args,
    _ring: PhantomData<R>
}

impl<R> App<R>
where
    R: Ring + FromStr,
    for<'x> &'x R: RingOps<R>,
{
    pub fn new(args: Args) -> Self { 
        App { args, _ring: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        let a = parse_mat::<R>(&self.args.a)?;
        let v = parse_vec::<R>(&self.args.v)?;
        let w = a.apply(&v)?;

        let p = Painter::new(Color::Yellow, !self.args.common.no_color);
        let res = p.paint(&format!("Matrix-vector multiplication A * {}: {}", list(&v), list(&w)));
        Ok(res)
    }
}
