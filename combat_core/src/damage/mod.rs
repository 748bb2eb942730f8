//! Damage system - Attack components and resolution context

mod component;
mod context;

pub use component::DamageComponent;
pub use context::DamageContext;
