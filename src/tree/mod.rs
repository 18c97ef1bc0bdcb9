/// Domain layer - the immutable component tree and the services reading it
///
/// `domain` holds the entity, its attribute value objects and the builder;
/// `services` holds read-only traversal, indexing and aggregation.
pub mod domain;
pub mod services;
