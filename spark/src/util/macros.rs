#![allow(unused_macros)]
#![allow(unused_imports)]

// Builds a coordinate map, e.g. `btreemap!{ (0, 0) => 1, (1, 1) => 2 }`.
#[macro_export]
macro_rules! btreemap {
    {$( $key: expr => $val: expr ),* $(,)?} => {{
        std::collections::BTreeMap::from_iter([$(($key, $val),)*])
    }}
}

pub use btreemap;
