use std::fmt::{Debug, Display};

// `Eq` is not required, so that floating point scalars qualify.
pub trait ElemBase: 
    Default + 
    PartialEq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

impl<T> ElemBase for T where T: 
    Default + 
    PartialEq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

pub trait Elem: ElemBase {}
