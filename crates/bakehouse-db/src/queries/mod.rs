//! Database query modules.

pub mod baked_goods;
pub mod bakeries;
