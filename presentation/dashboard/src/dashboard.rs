use std::collections::BTreeSet;
use std::sync::Arc;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

use crate::error::ClientError;
use crate::form::ProductForm;
use crate::gateway::{Confirm, DeleteOutcome, ProductGateway};
use crate::notice::{Notice, NoticeBoard};

pub const FETCH_FAILED: &str = "Error fetching products.";
pub const SAVE_FAILED: &str = "Error saving product.";
pub const DELETE_FAILED: &str = "Error deleting product.";
pub const PRODUCT_UPDATED: &str = "Product updated successfully!";
pub const PRODUCT_ADDED: &str = "Product added successfully!";
pub const PRODUCT_DELETED: &str = "Product deleted successfully!";
pub const PRODUCTS_DELETED: &str = "Products deleted successfully!";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";
pub const CONFIRM_MASS_DELETE: &str = "Are you sure you want to delete these products?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Editing(ProductId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total_count: i64,
    pub total_pages: i64,
}

impl Pagination {
    /// Highest page the controls may reach. An empty catalog still has page 1.
    pub fn last_page(&self) -> u32 {
        u32::try_from(self.total_pages.max(1)).unwrap_or(u32::MAX)
    }
}

fn error_notice(err: &ClientError, fallback: &str) -> Notice {
    let messages = err.messages();
    if messages.is_empty() {
        Notice::Error(vec![fallback.to_string()])
    } else {
        Notice::Error(messages)
    }
}

/// Product dashboard: one page of the catalog, the add/edit form, the
/// selection used for mass delete, and a transient notice.
pub struct Dashboard {
    gateway: Arc<dyn ProductGateway>,
    confirm: Arc<dyn Confirm>,
    products: Vec<Product>,
    pagination: Pagination,
    draft: ProductForm,
    mode: Mode,
    selected: BTreeSet<ProductId>,
    notices: NoticeBoard,
}

impl Dashboard {
    pub fn new(gateway: Arc<dyn ProductGateway>, confirm: Arc<dyn Confirm>, page_size: u32) -> Self {
        Self {
            gateway,
            confirm,
            products: Vec::new(),
            pagination: Pagination {
                page: 1,
                page_size: page_size.max(1),
                total_count: 0,
                total_pages: 0,
            },
            draft: ProductForm::default(),
            mode: Mode::Idle,
            selected: BTreeSet::new(),
            notices: NoticeBoard::default(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn draft(&self) -> &ProductForm {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProductForm {
        &mut self.draft
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected(&self) -> &BTreeSet<ProductId> {
        &self.selected
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    /// Fetches the current page. Rows and totals are left untouched on failure.
    pub async fn load(&mut self) {
        match self
            .gateway
            .list(self.pagination.page, self.pagination.page_size)
            .await
        {
            Ok(page) => {
                self.products = page.products;
                self.pagination.total_count = page.total_count;
                self.pagination.total_pages = page.total_pages;
            }
            Err(err) => {
                tracing::warn!("Failed to fetch products: {}", err);
                self.notices.raise(error_notice(&err, FETCH_FAILED));
            }
        }
    }

    pub fn start_add(&mut self) {
        self.draft = ProductForm::default();
        self.mode = Mode::Idle;
    }

    /// Ids not on the current page are ignored.
    pub fn start_edit(&mut self, id: ProductId) {
        if let Some(product) = self.products.iter().find(|p| p.id == id) {
            self.draft = ProductForm::from_product(product);
            self.mode = Mode::Editing(id);
        }
    }

    pub fn cancel(&mut self) {
        self.start_add();
    }

    /// Updates in edit mode, creates otherwise. On failure the form and mode
    /// are kept so the user can correct the input.
    pub async fn save(&mut self) {
        let draft = self.draft.to_draft();
        let result = match self.mode {
            Mode::Editing(id) => self
                .gateway
                .update(id, &draft)
                .await
                .map(|_| PRODUCT_UPDATED),
            Mode::Idle => self.gateway.create(&draft).await.map(|_| PRODUCT_ADDED),
        };

        match result {
            Ok(message) => {
                self.notices.raise(Notice::Success(message.to_string()));
                self.start_add();
                self.load().await;
            }
            Err(err) => {
                tracing::warn!("Failed to save product: {}", err);
                self.notices.raise(error_notice(&err, SAVE_FAILED));
            }
        }
    }

    pub async fn delete(&mut self, id: ProductId) {
        if !self.confirm.confirm(CONFIRM_DELETE) {
            return;
        }

        match self.gateway.delete(id).await {
            Ok(_) => {
                self.notices.raise(Notice::Success(PRODUCT_DELETED.to_string()));
                self.selected.remove(&id);
                if self.mode == Mode::Editing(id) {
                    self.start_add();
                }
                self.load().await;
            }
            Err(err) => {
                tracing::warn!("Failed to delete product {}: {}", id, err);
                self.notices.raise(error_notice(&err, DELETE_FAILED));
            }
        }
    }

    pub fn toggle_selected(&mut self, id: ProductId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Selects every row on the page, or clears them if all are selected.
    pub fn toggle_select_all(&mut self) {
        let all_selected = !self.products.is_empty()
            && self.products.iter().all(|p| self.selected.contains(&p.id));

        if all_selected {
            for product in &self.products {
                self.selected.remove(&product.id);
            }
        } else {
            self.selected.extend(self.products.iter().map(|p| p.id));
        }
    }

    /// Deletes every selected id concurrently and reports each outcome.
    /// Nothing happens without a selection or when the prompt is declined.
    pub async fn mass_delete(&mut self) -> Vec<DeleteOutcome> {
        if self.selected.is_empty() || !self.confirm.confirm(CONFIRM_MASS_DELETE) {
            return Vec::new();
        }

        let ids: Vec<ProductId> = std::mem::take(&mut self.selected).into_iter().collect();
        let outcomes = self.gateway.delete_many(ids).await;

        let failed: Vec<String> = outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| o.id.to_string())
            .collect();
        if failed.is_empty() {
            self.notices.raise(Notice::Success(PRODUCTS_DELETED.to_string()));
        } else {
            tracing::warn!("Mass delete failed for ids {}", failed.join(", "));
            self.notices.raise(Notice::Error(vec![format!(
                "Error deleting products: {}",
                failed.join(", ")
            )]));
        }

        if let Mode::Editing(id) = self.mode
            && outcomes.iter().any(|o| o.id == id && o.result.is_ok())
        {
            self.start_add();
        }

        self.load().await;
        outcomes
    }

    /// Moves to `page`, clamped to the pages that exist, and reloads.
    pub async fn change_page(&mut self, page: u32) {
        self.pagination.page = page.clamp(1, self.pagination.last_page());
        self.load().await;
    }

    pub async fn next_page(&mut self) {
        self.change_page(self.pagination.page.saturating_add(1)).await;
    }

    pub async fn prev_page(&mut self) {
        self.change_page(self.pagination.page.saturating_sub(1)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::ProductPage;
    use async_trait::async_trait;
    use business::domain::product::model::ProductDraft;
    use mockall::{mock, predicate::*};
    use std::time::Duration;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl ProductGateway for Gateway {
            async fn list(&self, page: u32, page_size: u32) -> Result<ProductPage, ClientError>;
            async fn create(&self, draft: &ProductDraft) -> Result<Product, ClientError>;
            async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<ProductId, ClientError>;
            async fn delete(&self, id: ProductId) -> Result<ProductId, ClientError>;
            async fn delete_many(&self, ids: Vec<ProductId>) -> Vec<DeleteOutcome>;
        }
    }

    mock! {
        pub Prompt {}

        impl Confirm for Prompt {
            fn confirm(&self, prompt: &str) -> bool;
        }
    }

    fn product(id: i64, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            price: 10.0,
            stock: 1,
        }
    }

    fn page_of(products: Vec<Product>, total_count: i64, total_pages: i64) -> ProductPage {
        ProductPage {
            products,
            current_page: 1,
            total_count,
            total_pages,
        }
    }

    fn accepting() -> Arc<MockPrompt> {
        let mut prompt = MockPrompt::new();
        prompt.expect_confirm().returning(|_| true);
        Arc::new(prompt)
    }

    fn dashboard(gateway: MockGateway, prompt: Arc<MockPrompt>) -> Dashboard {
        Dashboard::new(Arc::new(gateway), prompt, 10)
    }

    #[tokio::test]
    async fn should_store_rows_and_totals_when_load_succeeds() {
        // Arrange
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .with(eq(1), eq(10))
            .times(1)
            .returning(|_, _| Ok(page_of(vec![product(1, "A"), product(2, "B")], 12, 2)));
        let mut dashboard = dashboard(gateway, accepting());

        // Act
        dashboard.load().await;

        // Assert
        assert_eq!(dashboard.products().len(), 2);
        assert_eq!(dashboard.pagination().total_count, 12);
        assert_eq!(dashboard.pagination().total_pages, 2);
        assert!(dashboard.notice().is_none());
    }

    #[tokio::test]
    async fn should_fall_back_to_fetch_message_when_load_fails_without_body() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .returning(|_, _| Err(ClientError::UnexpectedResponse(502)));
        let mut dashboard = dashboard(gateway, accepting());

        dashboard.load().await;

        assert_eq!(
            dashboard.notice(),
            Some(&Notice::Error(vec![FETCH_FAILED.to_string()]))
        );
    }

    #[tokio::test]
    async fn should_call_create_when_saving_in_idle_mode() {
        // Arrange
        let mut gateway = MockGateway::new();
        gateway
            .expect_create()
            .withf(|draft| draft.name.as_deref() == Some("Chair") && draft.price == Some(5.0))
            .times(1)
            .returning(|_| Ok(product(1, "Chair")));
        gateway.expect_update().never();
        gateway
            .expect_list()
            .returning(|_, _| Ok(page_of(vec![product(1, "Chair")], 1, 1)));
        let mut dashboard = dashboard(gateway, accepting());
        dashboard.draft_mut().name = "Chair".to_string();
        dashboard.draft_mut().price = "5".to_string();
        dashboard.draft_mut().stock = "2".to_string();

        // Act
        dashboard.save().await;

        // Assert
        assert_eq!(
            dashboard.notice(),
            Some(&Notice::Success(PRODUCT_ADDED.to_string()))
        );
        assert_eq!(dashboard.draft(), &ProductForm::default());
        assert_eq!(dashboard.products().len(), 1);
    }

    #[tokio::test]
    async fn should_call_update_when_saving_in_edit_mode() {
        // Arrange
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .returning(|_, _| Ok(page_of(vec![product(7, "Lamp")], 1, 1)));
        gateway
            .expect_update()
            .withf(|id, draft| *id == ProductId::new(7) && draft.name.as_deref() == Some("Desk lamp"))
            .times(1)
            .returning(|id, _| Ok(id));
        gateway.expect_create().never();
        let mut dashboard = dashboard(gateway, accepting());
        dashboard.load().await;
        dashboard.start_edit(ProductId::new(7));
        assert_eq!(dashboard.mode(), Mode::Editing(ProductId::new(7)));
        dashboard.draft_mut().name = "Desk lamp".to_string();

        // Act
        dashboard.save().await;

        // Assert
        assert_eq!(dashboard.mode(), Mode::Idle);
        assert_eq!(
            dashboard.notice(),
            Some(&Notice::Success(PRODUCT_UPDATED.to_string()))
        );
    }

    #[tokio::test]
    async fn should_keep_mode_and_draft_when_save_fails() {
        // Arrange
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .times(1)
            .returning(|_, _| Ok(page_of(vec![product(3, "Rug")], 1, 1)));
        gateway.expect_update().returning(|_, _| {
            Err(ClientError::Validation(vec![
                "Name is required".to_string(),
                "Price must be a positive number".to_string(),
            ]))
        });
        let mut dashboard = dashboard(gateway, accepting());
        dashboard.load().await;
        dashboard.start_edit(ProductId::new(3));
        dashboard.draft_mut().name = String::new();
        dashboard.draft_mut().price = "-1".to_string();
        let draft_before = dashboard.draft().clone();

        // Act
        dashboard.save().await;

        // Assert
        assert_eq!(dashboard.mode(), Mode::Editing(ProductId::new(3)));
        assert_eq!(dashboard.draft(), &draft_before);
        assert_eq!(
            dashboard.notice().map(ToString::to_string).as_deref(),
            Some("Name is required, Price must be a positive number")
        );
    }

    #[test]
    fn should_ignore_edit_of_unknown_id() {
        let gateway = MockGateway::new();
        let mut dashboard = dashboard(gateway, accepting());

        dashboard.start_edit(ProductId::new(99));

        assert_eq!(dashboard.mode(), Mode::Idle);
    }

    #[tokio::test]
    async fn should_reset_form_when_cancelled() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .returning(|_, _| Ok(page_of(vec![product(4, "Vase")], 1, 1)));
        let mut dashboard = dashboard(gateway, accepting());
        dashboard.load().await;
        dashboard.start_edit(ProductId::new(4));

        dashboard.cancel();

        assert_eq!(dashboard.mode(), Mode::Idle);
        assert_eq!(dashboard.draft(), &ProductForm::default());
    }

    #[tokio::test]
    async fn should_not_delete_when_confirmation_declined() {
        let mut gateway = MockGateway::new();
        gateway.expect_delete().never();
        let mut prompt = MockPrompt::new();
        prompt
            .expect_confirm()
            .with(eq(CONFIRM_DELETE))
            .times(1)
            .returning(|_| false);
        let mut dashboard = dashboard(gateway, Arc::new(prompt));

        dashboard.delete(ProductId::new(1)).await;

        assert!(dashboard.notice().is_none());
    }

    #[tokio::test]
    async fn should_drop_deleted_id_from_selection() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .returning(|_, _| Ok(page_of(vec![product(1, "A"), product(2, "B")], 2, 1)));
        gateway
            .expect_delete()
            .with(eq(ProductId::new(1)))
            .times(1)
            .returning(Ok);
        let mut dashboard = dashboard(gateway, accepting());
        dashboard.load().await;
        dashboard.toggle_select_all();

        dashboard.delete(ProductId::new(1)).await;

        assert!(!dashboard.selected().contains(&ProductId::new(1)));
        assert!(dashboard.selected().contains(&ProductId::new(2)));
        assert_eq!(
            dashboard.notice(),
            Some(&Notice::Success(PRODUCT_DELETED.to_string()))
        );
    }

    #[tokio::test]
    async fn should_show_server_message_when_delete_fails() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_delete()
            .returning(|_| Err(ClientError::NotFound("Product not found".to_string())));
        let mut dashboard = dashboard(gateway, accepting());

        dashboard.delete(ProductId::new(5)).await;

        assert_eq!(
            dashboard.notice(),
            Some(&Notice::Error(vec!["Product not found".to_string()]))
        );
    }

    #[tokio::test]
    async fn should_toggle_selection_of_whole_page() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .returning(|_, _| Ok(page_of(vec![product(1, "A"), product(2, "B")], 2, 1)));
        let mut dashboard = dashboard(gateway, accepting());
        dashboard.load().await;

        dashboard.toggle_selected(ProductId::new(1));
        dashboard.toggle_select_all();
        assert_eq!(dashboard.selected().len(), 2);

        dashboard.toggle_select_all();
        assert!(dashboard.selected().is_empty());
    }

    #[tokio::test]
    async fn should_report_each_outcome_when_mass_deleting() {
        // Arrange
        let mut gateway = MockGateway::new();
        gateway.expect_list().returning(|_, _| {
            Ok(page_of(
                vec![product(1, "A"), product(2, "B"), product(3, "C")],
                3,
                1,
            ))
        });
        gateway
            .expect_delete_many()
            .withf(|ids| ids == &vec![ProductId::new(1), ProductId::new(3)])
            .times(1)
            .returning(|ids| {
                ids.into_iter()
                    .map(|id| DeleteOutcome {
                        id,
                        result: if id == ProductId::new(3) {
                            Err(ClientError::NotFound("Product not found".to_string()))
                        } else {
                            Ok(id)
                        },
                    })
                    .collect()
            });
        let mut prompt = MockPrompt::new();
        prompt
            .expect_confirm()
            .with(eq(CONFIRM_MASS_DELETE))
            .times(1)
            .returning(|_| true);
        let mut dashboard = dashboard(gateway, Arc::new(prompt));
        dashboard.load().await;
        dashboard.toggle_selected(ProductId::new(3));
        dashboard.toggle_selected(ProductId::new(1));

        // Act
        let outcomes = dashboard.mass_delete().await;

        // Assert
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
        assert!(dashboard.selected().is_empty());
        assert_eq!(
            dashboard.notice(),
            Some(&Notice::Error(vec!["Error deleting products: 3".to_string()]))
        );
    }

    #[tokio::test]
    async fn should_leave_edit_mode_when_edited_row_is_mass_deleted() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .returning(|_, _| Ok(page_of(vec![product(8, "Desk"), product(9, "Chair")], 2, 1)));
        gateway.expect_delete_many().returning(|ids| {
            ids.into_iter()
                .map(|id| DeleteOutcome { id, result: Ok(id) })
                .collect()
        });
        let mut dashboard = dashboard(gateway, accepting());
        dashboard.load().await;
        dashboard.start_edit(ProductId::new(8));
        dashboard.toggle_selected(ProductId::new(8));

        dashboard.mass_delete().await;

        assert_eq!(dashboard.mode(), Mode::Idle);
        assert_eq!(dashboard.draft(), &ProductForm::default());
        assert_eq!(
            dashboard.notice(),
            Some(&Notice::Success(PRODUCTS_DELETED.to_string()))
        );
    }

    #[tokio::test]
    async fn should_skip_mass_delete_when_nothing_selected() {
        let mut gateway = MockGateway::new();
        gateway.expect_delete_many().never();
        let mut prompt = MockPrompt::new();
        prompt.expect_confirm().never();
        let mut dashboard = dashboard(gateway, Arc::new(prompt));

        let outcomes = dashboard.mass_delete().await;

        assert!(outcomes.is_empty());
    }

    #[tokio::test]
    async fn should_clamp_page_to_existing_range() {
        // Arrange
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .returning(|_, _| Ok(page_of(vec![product(1, "A")], 25, 3)));
        let mut dashboard = dashboard(gateway, accepting());
        dashboard.load().await;

        // Act / Assert
        dashboard.change_page(7).await;
        assert_eq!(dashboard.pagination().page, 3);

        dashboard.change_page(0).await;
        assert_eq!(dashboard.pagination().page, 1);

        dashboard.prev_page().await;
        assert_eq!(dashboard.pagination().page, 1);

        dashboard.next_page().await;
        assert_eq!(dashboard.pagination().page, 2);
    }

    #[tokio::test]
    async fn should_stay_on_first_page_when_catalog_is_empty() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list()
            .returning(|_, _| Ok(page_of(Vec::new(), 0, 0)));
        let mut dashboard = dashboard(gateway, accepting());

        dashboard.next_page().await;

        assert_eq!(dashboard.pagination().page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_expire_notice_ten_seconds_after_save() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_create()
            .returning(|_| Err(ClientError::UnexpectedResponse(500)));
        let mut dashboard = dashboard(gateway, accepting());

        dashboard.save().await;
        assert_eq!(
            dashboard.notice(),
            Some(&Notice::Error(vec![SAVE_FAILED.to_string()]))
        );

        tokio::time::advance(Duration::from_secs(10)).await;
        assert!(dashboard.notice().is_none());
    }
}
