//! Resolver context.

use gather_session::{FromOutcome, Operation, Session};
use juniper::FieldResult;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::field_error;

/// Shared state handed to every resolver.
///
/// The session sits behind a single mutex. That mutex is the serialization
/// point for the whole store: each resolver holds it only for the duration
/// of one lookup or mutation, and never across nested field resolution.
#[derive(Debug)]
pub struct Context {
    session: Mutex<Session>,
}

impl juniper::Context for Context {}

impl Context {
    pub fn new(session: Session) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }

    /// Lock the session for one operation.
    ///
    /// A poisoned lock is recovered: operations either complete or leave the
    /// store untouched, so the data behind it is still consistent.
    pub fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one operation under the lock and unpack its result.
    pub fn run<T: FromOutcome>(&self, op: impl Into<Operation>) -> FieldResult<T> {
        self.session().run(op).map_err(field_error)
    }
}
