//! SQLite-backed store for `Production_Product` and `Sales_Customer`.
//!
//! # Design
//! `Store` owns a single connection behind `Arc<Mutex<_>>` and is cloned into
//! the router state, so there is no module-level connection. All methods are
//! synchronous; handlers call them through `spawn_blocking`.
//!
//! Update and delete run their existence check and their mutation inside one
//! transaction on the locked connection. A row removed by a concurrent request
//! can therefore never turn an acknowledged update into a silent no-op.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StoreError;
use crate::models::{Customer, Product, ProductSummary};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS Production_Product (
    ProductID INTEGER PRIMARY KEY,
    Name TEXT NOT NULL,
    ProductNumber TEXT NOT NULL,
    rowguid TEXT NOT NULL,
    SafetyStockLevel INTEGER NOT NULL,
    ReorderPoint INTEGER NOT NULL,
    StandardCost REAL NOT NULL,
    ListPrice REAL NOT NULL,
    DaysToManufacture INTEGER NOT NULL,
    SellStartDate TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS Sales_Customer (
    CustomerID INTEGER PRIMARY KEY,
    PersonID INTEGER NOT NULL,
    StoreID INTEGER NOT NULL,
    TerritoryID INTEGER NOT NULL,
    AccountNumber TEXT NOT NULL,
    rowguid TEXT NOT NULL,
    ModifiedDate TEXT NOT NULL
);
";

/// Shared handle to the backing database.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Open or create a database file. `:memory:` opens a private in-memory database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Ok(Self::from_connection(conn))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Create both tables when absent. Existing tables are left untouched.
    pub fn init_schema(&self) -> Result<(), StoreError> {
        self.lock()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    // --- products ---

    /// At most `limit` `(ProductID, Name)` rows in store order.
    pub fn list_products(&self, limit: u32) -> Result<Vec<(i64, String)>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT ProductID, Name FROM Production_Product LIMIT ?1")?;
        let rows: Vec<(i64, String)> = stmt
            .query_map(params![limit], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_, _>>()?;
        Ok(rows)
    }

    pub fn product_summary(&self, id: i64) -> Result<Option<ProductSummary>, StoreError> {
        let conn = self.lock()?;
        let summary = conn
            .query_row(
                "SELECT ProductID, Name FROM Production_Product WHERE ProductID = ?1",
                params![id],
                |row| {
                    Ok(ProductSummary {
                        product_id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(summary)
    }

    /// Full stored record, every column.
    pub fn product(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let conn = self.lock()?;
        let product = conn
            .query_row(
                "SELECT ProductID, Name, ProductNumber, rowguid, SafetyStockLevel, ReorderPoint,
                        StandardCost, ListPrice, DaysToManufacture, SellStartDate
                 FROM Production_Product WHERE ProductID = ?1",
                params![id],
                |row| {
                    Ok(Product {
                        product_id: row.get(0)?,
                        name: row.get(1)?,
                        product_number: row.get(2)?,
                        rowguid: row.get(3)?,
                        safety_stock_level: row.get(4)?,
                        reorder_point: row.get(5)?,
                        standard_cost: row.get(6)?,
                        list_price: row.get(7)?,
                        days_to_manufacture: row.get(8)?,
                        sell_start_date: row.get(9)?,
                    })
                },
            )
            .optional()?;
        Ok(product)
    }

    /// Insert with the caller-supplied `ProductID`. Duplicate keys fail.
    pub fn insert_product(&self, product: &Product) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO Production_Product (ProductID, Name, ProductNumber, rowguid,
                SafetyStockLevel, ReorderPoint, StandardCost, ListPrice, DaysToManufacture,
                SellStartDate)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                product.product_id,
                product.name,
                product.product_number,
                product.rowguid,
                product.safety_stock_level,
                product.reorder_point,
                product.standard_cost,
                product.list_price,
                product.days_to_manufacture,
                product.sell_start_date,
            ],
        )?;
        Ok(())
    }

    /// Rewrite `Name`, `ProductNumber` and `SellStartDate` of row `id`. The
    /// remaining fields of `product` are ignored. Returns `false` if no such row.
    pub fn update_product(&self, id: i64, product: &Product) -> Result<bool, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        if !row_exists(&tx, "SELECT ProductID FROM Production_Product WHERE ProductID = ?1", id)? {
            return Ok(false);
        }
        tx.execute(
            "UPDATE Production_Product
             SET Name = ?1, ProductNumber = ?2, SellStartDate = ?3
             WHERE ProductID = ?4",
            params![product.name, product.product_number, product.sell_start_date, id],
        )?;
        tx.commit()?;
        Ok(true)
    }

    /// Returns `false` if no such row.
    pub fn delete_product(&self, id: i64) -> Result<bool, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        if !row_exists(&tx, "SELECT ProductID FROM Production_Product WHERE ProductID = ?1", id)? {
            return Ok(false);
        }
        tx.execute("DELETE FROM Production_Product WHERE ProductID = ?1", params![id])?;
        tx.commit()?;
        Ok(true)
    }

    // --- customers ---

    pub fn customer(&self, id: i64) -> Result<Option<Customer>, StoreError> {
        let conn = self.lock()?;
        let customer = conn
            .query_row(
                "SELECT CustomerID, PersonID, StoreID, TerritoryID, AccountNumber, rowguid,
                        ModifiedDate
                 FROM Sales_Customer WHERE CustomerID = ?1",
                params![id],
                |row| {
                    Ok(Customer {
                        customer_id: row.get(0)?,
                        person_id: row.get(1)?,
                        store_id: row.get(2)?,
                        territory_id: row.get(3)?,
                        account_number: row.get(4)?,
                        rowguid: row.get(5)?,
                        modified_date: row.get(6)?,
                    })
                },
            )
            .optional()?;
        Ok(customer)
    }

    pub fn insert_customer(&self, customer: &Customer) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO Sales_Customer (CustomerID, PersonID, StoreID, TerritoryID,
                AccountNumber, rowguid, ModifiedDate)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                customer.customer_id,
                customer.person_id,
                customer.store_id,
                customer.territory_id,
                customer.account_number,
                customer.rowguid,
                customer.modified_date,
            ],
        )?;
        Ok(())
    }

    /// Rewrite every non-key column of row `id`. Returns `false` if no such row.
    pub fn update_customer(&self, id: i64, customer: &Customer) -> Result<bool, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        if !row_exists(&tx, "SELECT CustomerID FROM Sales_Customer WHERE CustomerID = ?1", id)? {
            return Ok(false);
        }
        tx.execute(
            "UPDATE Sales_Customer
             SET PersonID = ?1, StoreID = ?2, TerritoryID = ?3, AccountNumber = ?4,
                 rowguid = ?5, ModifiedDate = ?6
             WHERE CustomerID = ?7",
            params![
                customer.person_id,
                customer.store_id,
                customer.territory_id,
                customer.account_number,
                customer.rowguid,
                customer.modified_date,
                id,
            ],
        )?;
        tx.commit()?;
        Ok(true)
    }

    /// Returns `false` if no such row.
    pub fn delete_customer(&self, id: i64) -> Result<bool, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        if !row_exists(&tx, "SELECT CustomerID FROM Sales_Customer WHERE CustomerID = ?1", id)? {
            return Ok(false);
        }
        tx.execute("DELETE FROM Sales_Customer WHERE CustomerID = ?1", params![id])?;
        tx.commit()?;
        Ok(true)
    }
}

/// Existence check by primary key. A dropped, uncommitted transaction rolls back.
fn row_exists(conn: &Connection, sql: &str, id: i64) -> Result<bool, StoreError> {
    let found = conn
        .query_row(sql, params![id], |row| row.get::<_, i64>(0))
        .optional()?;
    Ok(found.is_some())
}
