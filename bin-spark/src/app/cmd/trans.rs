use std::marker::PhantomData;
use std::str::FromStr;
use spark::{Ring, RingOps};
use crate::app::utils::*;
use crate::app::utils::dispatch::dispatch_ring;
use crate::app::utils::pretty::{pretty, Color, IntForm, Painter};

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_ring!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    pub a: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub struct App<R>
where
    R: Ring + FromStr + IntForm,
    for<'x> &'x R: RingOps<R>,
{
    args: Args,
    _ring: PhantomData<R>
}

impl<R> App<R>
where
    R: Ring + FromStr + IntForm,
    for<'x> &'x R: RingOps<R>,
{
    pub fn new(args: Args) -> Self { 
        App { args, _ring: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        let a = parse_mat::<R>(&self.args.a)?;
        let t = a.transpose();

        let p = Painter::new(Color::Magenta, !self.args.common.no_color);
        let res = pretty(&t, "Transpose of A:", &p);
        Ok(res)
    }
}
