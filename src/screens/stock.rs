//! Stock inventory screen

use std::path::PathBuf;
use std::sync::Arc;
use crate::api::StockApi;
use crate::export;
use crate::models::stock::{CreateStockRequest, Stock};
use crate::models::AdminLevel;
use crate::session::{check_screen_access, Screen};
use crate::utils::errors::Result;
use crate::utils::validation::{validate_required, validate_stock_count};
use super::notify::NoticeCenter;

pub struct StockScreen {
    api: StockApi,
    notices: Arc<NoticeCenter>,
    items: Vec<Stock>,
}

impl StockScreen {
    pub fn open(api: StockApi, level: AdminLevel, notices: Arc<NoticeCenter>) -> Result<Self> {
        check_screen_access(level, Screen::Stock)?;

        Ok(Self {
            api,
            notices,
            items: Vec::new(),
        })
    }

    pub fn items(&self) -> &[Stock] {
        &self.items
    }

    pub async fn load(&mut self) -> Result<()> {
        match self.api.list().await {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(e) => {
                self.notices.failure(&e);
                Err(e)
            }
        }
    }

    pub async fn add_item(&mut self, name: String, kind: String, count: i64) -> Result<()> {
        if let Err(e) = validate_required("name", &name)
            .and_then(|_| validate_required("type", &kind))
            .and_then(|_| validate_stock_count(count))
        {
            self.notices.failure(&e);
            return Err(e);
        }

        let request = CreateStockRequest { name, kind, count };
        match self.api.create(&request).await {
            Ok(_) => {
                self.notices.success("Stock item added");
                self.load().await
            }
            Err(e) => {
                self.notices.failure(&e);
                Err(e)
            }
        }
    }

    pub async fn remove_item(&mut self, id: &str) -> Result<()> {
        match self.api.delete(id).await {
            Ok(()) => {
                self.notices.success("Stock item deleted");
                self.load().await
            }
            Err(e) => {
                self.notices.failure(&e);
                Err(e)
            }
        }
    }

    /// Set an item's count
    pub async fn adjust_count(&mut self, id: &str, count: i64) -> Result<()> {
        if let Err(e) = validate_stock_count(count) {
            self.notices.failure(&e);
            return Err(e);
        }

        match self.api.update_count(id, count).await {
            Ok(updated) => {
                if let Some(slot) = self.items.iter_mut().find(|s| s.id == id) {
                    *slot = updated;
                }
                self.notices.success("Stock count updated");
                Ok(())
            }
            Err(e) => {
                self.notices.failure(&e);
                Err(e)
            }
        }
    }

    /// Write the inventory to a CSV file
    pub async fn export_csv(&self, output_dir: &str) -> Result<PathBuf> {
        let path = export::write_stock_csv(&self.items, output_dir).await?;
        self.notices.success(format!("Exported {} stock items", self.items.len()));
        Ok(path)
    }
}
