use std::marker::PhantomData;
use std::str::FromStr;
use log::info;
use spark::{Ring, RingOps};
use spark_matrix::sparse::*;
use crate::app::utils::*;
use crate::app::utils::dispatch::dispatch_ring;
use crate::app::utils::pretty::{Color, Painter};

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_ring!(App, args)
}

pub fn dispatch_cofactor(args: &CofactorArgs) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_ring!(CofactorApp, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    pub a: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct CofactorArgs {
    pub a: String,

    #[arg(short = 'i', long)]
    pub row: usize,

    #[arg(short = 'j', long)]
    pub col: usize,

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
        info!("det: {:?}, nnz = {}", a.shape(), a.nnz());

        let d = a.determinant()?;

        let p = Painter::new(Color::Cyan, !self.args.common.no_color);
        let res = p.paint(&format!("Determinant of A: {d}"));
        Ok(res)
    }
}

pub struct CofactorApp<R>
where
    R: Ring + FromStr,
    for<'x> &'x R: RingOps<R>,
{
    args: CofactorArgs,
    _ring: PhantomData<R>
}

impl<R> CofactorApp<R>
where
    R: Ring + FromStr,
    for<'x> &'x R: RingOps<R>,
{
    pub fn new(args: CofactorArgs) -> Self { 
        CofactorApp { args, _ring: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        let a = parse_mat::<R>(&self.args.a)?;
        let (i, j) = (self.args.row, self.args.col);

        let c = a.cofactor(i, j)?;

        let p = Painter::new(Color::Cyan, !self.args.common.no_color);
        let res = p.paint(&format!("Cofactor of A at ({i}, {j}): {c}"));
        Ok(res)
    }
}
