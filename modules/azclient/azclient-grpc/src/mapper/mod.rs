//! Domain model <-> wire message mapping.
//!
//! Pure and stateless. Every entity has one encode (`*_to_wire`) and one
//! decode (`*_from_wire`) function; leaf mappers take and return `Option` so
//! an absent input always maps to an absent output. Defaults belong to the
//! builders, never to this layer.
//!
//! Sequences (evaluations, evaluation responses, entity items) are mapped
//! positionally: nothing is reordered, filtered or deduplicated.

pub mod request;
pub mod response;
pub mod value;

pub use request::{request_from_wire, request_to_wire};
pub use response::{response_from_wire, response_to_wire};
pub use value::{json_to_value, properties_to_struct, struct_to_properties, value_to_json};
