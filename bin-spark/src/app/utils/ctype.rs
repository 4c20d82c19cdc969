use clap::ValueEnum;
use derive_more::Display;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="verbatim")]
pub enum CType { 
    #[default] Z, 
    R
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct CommonArgs { 
    #[arg(short = 't', long, default_value = "Z")]
    pub c_type: CType,

    #[arg(long)]
    pub no_color: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
