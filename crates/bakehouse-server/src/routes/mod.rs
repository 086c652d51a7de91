//! Route handler modules.

pub mod baked_goods;
pub mod bakeries;
pub mod health;
pub mod welcome;
