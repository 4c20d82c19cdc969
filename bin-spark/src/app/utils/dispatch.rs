cfg_if::cfg_if! {
    if #[cfg(feature = "bigint")] {
        pub type Int = num_bigint::BigInt;
    } else {
        pub type Int = i64;
    }
}

macro_rules! dispatch_ring {
    ($app:ident, $args:expr $(, $extra:expr)*) => {{
        use crate::app::utils::*;

        match $args.common.c_type {
            CType::Z => $app::<Int>::new($args.clone() $(, $extra)*).run(),
            CType::R => $app::<f64>::new($args.clone() $(, $extra)*).run(),
        }
    }};
}

pub(crate) use dispatch_ring;
