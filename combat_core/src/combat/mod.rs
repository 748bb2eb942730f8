//! Combat resolution - Apply typed damage to unit snapshots

mod resolution;
mod result;

pub use resolution::DamageResolver;
pub use result::DamageResult;
