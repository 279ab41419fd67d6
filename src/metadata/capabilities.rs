//! Insert/update/delete capability markers for an entity set

use crate::catalog::{EntityResource, Operation, OperationSet};
use crate::edm::constants::terms;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub insertable: bool,
    pub updatable: bool,
    pub deletable: bool,
}

impl Capabilities {
    /// `(term, property, value)` for each restriction annotation, in output order
    pub fn restrictions(&self) -> [(&'static str, &'static str, bool); 3] {
        [
            (terms::INSERT_RESTRICTIONS, "Insertable", self.insertable),
            (terms::UPDATE_RESTRICTIONS, "Updatable", self.updatable),
            (terms::DELETE_RESTRICTIONS, "Deletable", self.deletable),
        ]
    }
}

/// Capabilities are what the resource enables AND the caller is allowed.
/// Read isn't annotated; an unreadable resource isn't in the catalog at all.
pub fn annotate(resource: &EntityResource, allowed: Option<&OperationSet>) -> Capabilities {
    let permitted = |operation: Operation| {
        resource.operations.contains(&operation)
            && allowed.is_some_and(|allowed| allowed.contains(&operation))
    };

    Capabilities {
        insertable: permitted(Operation::Create),
        updatable: permitted(Operation::Update),
        deletable: permitted(Operation::Delete),
    }
}
