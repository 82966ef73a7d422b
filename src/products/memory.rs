use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::repo::ProductStore;
use super::repo_types::{ListOrder, NewProduct, Product};
use crate::db::StoreError;

/// Map-backed store used by handler tests.
#[derive(Default)]
pub struct MemoryProductStore {
    rows: Mutex<BTreeMap<i32, Product>>,
    next_id: Mutex<i32>,
    down: AtomicBool,
}

impl MemoryProductStore {
    /// Makes every subsequent call fail as if the database were unreachable.
    pub fn take_down(&self) {
        self.down.store(true, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self, order: ListOrder) -> Result<Vec<Product>, StoreError> {
        self.check()?;
        let mut rows: Vec<Product> = self.rows.lock().unwrap().values().cloned().collect();
        if order == ListOrder::Name {
            rows.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, StoreError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        self.check()?;
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let product = input.into_product(id);
        self.rows.lock().unwrap().insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i32, input: NewProduct) -> Result<Option<Product>, StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|row| {
            *row = input.into_product(id);
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<Product>, StoreError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&id))
    }
}
