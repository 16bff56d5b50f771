// core/src/shared.rs

use parking_lot::{
  MappedRwLockReadGuard,
  MappedRwLockWriteGuard, // Useful for exposing parts of the state
  RwLock,
  RwLockReadGuard,
  RwLockWriteGuard,
};
use std::sync::Arc;

/// A wrapper for session state providing shared ownership and interior
/// mutability using parking_lot::RwLock.
///
/// The cart is single-writer within a session, but the mutating surface and
/// the checkout flow both hold a handle to it, so it lives behind this cell.
///
/// IMPORTANT: Lock guards obtained from this struct are blocking and MUST NOT
/// be held across `.await` suspension points in asynchronous code.
#[derive(Debug)]
pub struct Shared<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> Shared<T> {
  pub fn new(data: T) -> Self {
    Shared(Arc::new(RwLock::new(data)))
  }

  /// Acquires a read lock.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  /// Acquires a write lock.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }

  /// Attempts to acquire a read lock without blocking.
  pub fn try_read(&self) -> Option<RwLockReadGuard<'_, T>> {
    self.0.try_read()
  }

  /// Attempts to acquire a write lock without blocking.
  pub fn try_write(&self) -> Option<RwLockWriteGuard<'_, T>> {
    self.0.try_write()
  }

  // Helper for extracting a part of the state under a read lock.
  // Example: cart_cell.map_read(|cart| cart.lines())
  pub fn map_read<F, U: ?Sized>(&self, f: F) -> MappedRwLockReadGuard<'_, U>
  where
    F: FnOnce(&T) -> &U,
  {
    RwLockReadGuard::map(self.read(), f)
  }

  // Helper for extracting a part of the state under a write lock
  pub fn map_write<F, U: ?Sized>(&self, f: F) -> MappedRwLockWriteGuard<'_, U>
  where
    F: FnOnce(&mut T) -> &mut U,
  {
    RwLockWriteGuard::map(self.write(), f)
  }
}

impl<T: Send + Sync + 'static> Clone for Shared<T> {
  fn clone(&self) -> Self {
    Shared(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for Shared<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}
