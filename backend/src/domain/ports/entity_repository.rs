//! Driven port for keyed entity storage.
//!
//! The [`EntityRepository`] trait is the storage contract the board service
//! is built on: identity allocation, CRUD, and existence checks over one
//! entity kind per instance. The in-memory adapter in
//! [`crate::outbound::memory`] is the only production implementation; tests
//! substitute mocks to exercise failure paths the real store cannot produce.

use thiserror::Error;

/// The only failure a store can report: a reference to an id that holds no
/// record. The store carries no domain semantics; the service re-labels
/// this error according to which store produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntityRepositoryError {
    /// No record currently occupies `id`.
    #[error("no entity stored under id {id}")]
    NoSuchEntity {
        /// The unoccupied identity.
        id: i64,
    },
}

impl EntityRepositoryError {
    /// Helper for [`EntityRepositoryError::NoSuchEntity`].
    pub const fn no_such_entity(id: i64) -> Self {
        Self::NoSuchEntity { id }
    }
}

/// Generic keyed collection with machine-assigned `i64` identities.
///
/// Identity allocation and insertion are two separate calls coordinated by
/// the caller: request an id with [`next_id`](Self::next_id), embed it in
/// the record, then [`add`](Self::add) the record. Every id returned by
/// `next_id` is strictly greater than any previously returned id on the
/// same store, and ids are never reused after deletion.
///
/// All operations are synchronous and never suspend; implementations must
/// serialise mutations so no caller observes a partially applied change.
pub trait EntityRepository<T: 'static>: Send + Sync {
    /// Return the next unused identity and advance the counter.
    fn next_id(&self) -> i64;

    /// Insert a record at the identity most recently produced by
    /// [`next_id`](Self::next_id).
    fn add(&self, entity: T) -> Result<(), EntityRepositoryError>;

    /// Return the record stored at `id`.
    fn get(&self, id: i64) -> Result<T, EntityRepositoryError>;

    /// Replace the record stored at `id`. Fails if `id` is unoccupied.
    fn update(&self, id: i64, entity: T) -> Result<(), EntityRepositoryError>;

    /// Remove the record at `id` permanently. The id is not recycled.
    fn delete(&self, id: i64) -> Result<(), EntityRepositoryError>;

    /// Whether a record currently occupies `id`.
    fn exists(&self, id: i64) -> bool;

    /// Point-in-time copy of every stored record, in unspecified order.
    /// Later mutations never alter an already-returned snapshot.
    fn snapshot(&self) -> Vec<T>;
}

// The mock is generated via `mock!` rather than `automock` because the mock
// struct carries a `PhantomData<T>`, so it only satisfies the trait's
// `Send + Sync` supertraits when `T: Send + Sync`. Declaring the mock here
// keeps that bound test-local and leaves the production trait untouched.
#[cfg(test)]
mockall::mock! {
    pub EntityRepository<T: 'static + Send + Sync> {}

    impl<T: 'static + Send + Sync> EntityRepository<T> for EntityRepository<T> {
        fn next_id(&self) -> i64;
        fn add(&self, entity: T) -> Result<(), EntityRepositoryError>;
        fn get(&self, id: i64) -> Result<T, EntityRepositoryError>;
        fn update(&self, id: i64, entity: T) -> Result<(), EntityRepositoryError>;
        fn delete(&self, id: i64) -> Result<(), EntityRepositoryError>;
        fn exists(&self, id: i64) -> bool;
        fn snapshot(&self) -> Vec<T>;
    }
}
