//! Product catalog domain: validated product values, the product store and
//! the service that coordinates them.

pub mod context;
pub mod domain;
