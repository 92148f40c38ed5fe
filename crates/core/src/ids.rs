//! Identifier generation.
//!
//! Constructors take an [`IdSource`] instead of calling a global UUID
//! generator, so tests can hand out fixed ids.

use crate::error::{CoreError, CoreResult};
use crate::types::EntityId;

/// Produces fresh entity identifiers.
pub trait IdSource {
    fn next_id(&self) -> EntityId;
}

/// Random UUID v4 identifiers. The production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> EntityId {
        uuid::Uuid::new_v4().to_string()
    }
}

impl<F> IdSource for F
where
    F: Fn() -> EntityId,
{
    fn next_id(&self) -> EntityId {
        self()
    }
}

/// Draw the next id from `ids`. Empty ids are refused: they cannot be
/// recovered from the keys they are encoded into.
pub fn fresh_id(ids: &impl IdSource) -> CoreResult<EntityId> {
    let id = ids.next_id();
    if id.is_empty() {
        return Err(CoreError::Internal("Id source produced an empty id".into()));
    }
    Ok(id)
}
