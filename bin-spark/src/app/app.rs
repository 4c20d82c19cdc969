use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{apply, binop, demo, det, trans};
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    /// Runs the demonstration on two fixed 3x3 matrices.
    Demo(demo::Args),
    /// A + B
    Add(binop::Args),
    /// Element-wise A * B
    EMul(binop::Args),
    /// Matrix product A @ B
    MatMul(binop::Args),
    /// Determinant of A
    Det(det::Args),
    /// Unsigned cofactor (minor determinant) of A at (i, j)
    Cofactor(det::CofactorArgs),
    /// Transpose of A
    Trans(trans::Args),
    /// A applied to the vector V
    Apply(apply::Args),
}

impl CliArgs { 
    fn common(&self) -> &CommonArgs { 
        match &self.command { 
            Cmd::Demo(args)     => &args.common,
            Cmd::Add(args)      => &args.common,
            Cmd::EMul(args)     => &args.common,
            Cmd::MatMul(args)   => &args.common,
            Cmd::Det(args)      => &args.common,
            Cmd::Cofactor(args) => &args.common,
            Cmd::Trans(args)    => &args.common,
            Cmd::Apply(args)    => &args.common,
        }
    }

    fn log_level(&self) -> log::LevelFilter { 
        use log::LevelFilter::*;
        match self.common().log {
            1 => Info,
            2 => Debug,
            3 => Trace,
            _ => Off,
        }
    }
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn new_with(args: CliArgs) -> Self { 
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> { 
        self.init_logger();

        info!("args: {:?}", self.args);
        info!("int-type: {}", std::any::type_name::<Int>());

        let (res, time) = measure(||
            self.compute()
        );

        info!("time: {:?}", time);

        res
    }

    pub fn compute(&self) -> Result<String, Box<dyn std::error::Error>> { 
        use binop::BinOp;

        guard_panic(||
            match &self.args.command { 
                Cmd::Demo(args)     => demo::dispatch(args),
                Cmd::Add(args)      => binop::dispatch(BinOp::Add, args),
                Cmd::EMul(args)     => binop::dispatch(BinOp::EMul, args),
                Cmd::MatMul(args)   => binop::dispatch(BinOp::MatMul, args),
                Cmd::Det(args)      => det::dispatch(args),
                Cmd::Cofactor(args) => det::dispatch_cofactor(args),
                Cmd::Trans(args)    => trans::dispatch(args),
                Cmd::Apply(args)    => apply::dispatch(args),
            }
        )
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        if l == log::LevelFilter::Off { 
            return
        }
        if let Err(e) = spark::util::log::init_simple_logger(l) { 
            eprintln!("failed to init logger: {e}");
        }
    }
}
