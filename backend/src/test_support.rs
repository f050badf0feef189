//! In-memory adapters for exercising the full HTTP stack without PostgreSQL
//! or a running user service.
//!
//! Compiled for unit tests and, through the `test-support` feature, for the
//! integration suites under `tests/`.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::ports::{
    OrderPersistenceError, OrderRepository, UserDirectory, UserDirectoryError,
    UserPersistenceError, UserRepository,
};
use crate::domain::{Order, User};

/// Rows keyed by identity plus the next identity to hand out.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Table<T> {
    fn starting_at(next_id: i64) -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id,
        }
    }

    fn insert(&mut self, row: T) -> i64 {
        let id = self.next_id;
        self.rows.insert(id, row);
        self.next_id += 1;
        id
    }
}

/// Order repository backed by a map, assigning sequential identities.
#[derive(Debug)]
pub struct InMemoryOrderRepository {
    table: Mutex<Table<Order>>,
    unavailable: AtomicBool,
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl InMemoryOrderRepository {
    /// Create a repository whose first insert is assigned `next_id`.
    pub fn starting_at(next_id: i64) -> Self {
        Self {
            table: Mutex::new(Table::starting_at(next_id)),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with a connection error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.table.lock().map(|table| table.rows.len()).unwrap_or_default()
    }

    /// Whether no order has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), OrderPersistenceError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(OrderPersistenceError::connection("database unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: &Order) -> Result<i64, OrderPersistenceError> {
        self.check_available()?;
        let mut table = self
            .table
            .lock()
            .map_err(|_| OrderPersistenceError::query("order table lock poisoned"))?;
        let id = table.next_id;
        Ok(table.insert(Order {
            id,
            ..order.clone()
        }))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, OrderPersistenceError> {
        self.check_available()?;
        let table = self
            .table
            .lock()
            .map_err(|_| OrderPersistenceError::query("order table lock poisoned"))?;
        Ok(table.rows.get(&id).cloned())
    }
}

/// User repository backed by a map, assigning sequential identities.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    table: Mutex<Table<User>>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            table: Mutex::new(Table::starting_at(1)),
        }
    }
}

impl InMemoryUserRepository {
    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.table.lock().map(|table| table.rows.len()).unwrap_or_default()
    }

    /// Whether no user has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<i64, UserPersistenceError> {
        let mut table = self
            .table
            .lock()
            .map_err(|_| UserPersistenceError::query("user table lock poisoned"))?;
        let id = table.next_id;
        Ok(table.insert(User {
            id,
            ..user.clone()
        }))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, UserPersistenceError> {
        let table = self
            .table
            .lock()
            .map_err(|_| UserPersistenceError::query("user table lock poisoned"))?;
        Ok(table.rows.get(&id).cloned())
    }
}

/// User directory that always fails at the transport level and counts calls.
#[derive(Debug, Default)]
pub struct UnreachableUserDirectory {
    calls: AtomicUsize,
}

impl UnreachableUserDirectory {
    /// Number of existence checks attempted.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserDirectory for UnreachableUserDirectory {
    async fn user_exists(&self, _user_id: i64) -> Result<bool, UserDirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(UserDirectoryError::transport("connection refused"))
    }
}
