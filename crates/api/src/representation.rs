//! Representation-shape selection.
//!
//! Every handler resolves its response shape through [`shape_for`], a pure
//! function of (entity, operation), re-evaluated on each request. The
//! closed set of shapes keeps collection rendering compact while single-item
//! reads expand related entities.

/// The six persisted entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Genre,
    Actor,
    CinemaHall,
    Movie,
    MovieSession,
    Order,
}

/// The standard operation set exposed for every resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Retrieve,
    Create,
    Update,
    PartialUpdate,
    Delete,
}

/// The three representation shapes an entity can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Compact fields only, for collection rendering.
    List,
    /// Full nested representation, for single-item rendering.
    Detail,
    /// The mutable representation used for writes and as the default.
    Write,
}

/// Select the representation shape for an operation on an entity.
///
/// Genre, Actor, and CinemaHall have a single representation, so every
/// operation renders the write shape. Movie and MovieSession follow the
/// list / retrieve / write rule. Order also has a single shape: its full
/// representation (nested tickets) serves listing, retrieve, and writes
/// alike, with pagination keeping the list cheap.
pub fn shape_for(entity: EntityKind, operation: Operation) -> Shape {
    match entity {
        EntityKind::Genre | EntityKind::Actor | EntityKind::CinemaHall | EntityKind::Order => {
            Shape::Write
        }
        EntityKind::Movie | EntityKind::MovieSession => match operation {
            Operation::List => Shape::List,
            Operation::Retrieve => Shape::Detail,
            _ => Shape::Write,
        },
    }
}
