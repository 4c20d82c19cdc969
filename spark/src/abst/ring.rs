use num_bigint::BigInt;
use crate::{AddGrp, AddGrpOps, AddMon, AddMonOps, Elem, Mon, MonOps, Sign};

// Rings 

pub trait RingOps<T = Self>: 
    AddGrpOps<T> + 
    MonOps<T>
{}

pub trait Ring: 
    AddGrp + 
    Mon + 
    RingOps
where
    for<'a> &'a Self: RingOps<Self>
{
    fn from_sign(s: Sign) -> Self { 
        if s.is_positive() { 
            Self::one()
        } else { 
            -Self::one()
        }
    }
}

macro_rules! impl_ops {
    ($trait:ident, $type:ty) => {
        impl $trait for $type {}
        impl<'a> $trait<$type> for &'a $type {}
    };
}

macro_rules! impl_ring {
    ($type:ty) => {
        impl_ops!(AddMonOps, $type);
        impl_ops!(AddGrpOps, $type);
        impl_ops!(MonOps, $type);
        impl_ops!(RingOps, $type);

        impl Elem for $type {}

        impl AddMon for $type {}
        impl AddGrp for $type {}
        impl Mon for $type {}
        impl Ring for $type {}
    };
}

impl_ring!(i32);
impl_ring!(i64);
impl_ring!(i128);
impl_ring!(isize);
impl_ring!(BigInt);
impl_ring!(f32);
impl_ring!(f64);
