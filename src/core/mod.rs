pub mod arith;
pub mod inputs;
pub mod money;
pub mod overrides;
pub mod policy;
