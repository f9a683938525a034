use std::sync::Arc;

use thiserror::Error;

use crate::backend::{Backend, BackendError};
use crate::models::{
    CatalogItem, Client, Document, DocumentSummary, ExtraItem, PricingFormula, SelectedItem,
    Utilities,
};
use crate::services::bridge;
use crate::services::pricing::rental_price;
use crate::services::selection::{self, Update};
use crate::utils::parse_decimal;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("le devis n'a pas encore été enregistré")]
    NotSaved,

    #[error("le document est déjà une facture")]
    AlreadyInvoice,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// State of one editing session: the document aggregate plus the pricing
/// formula and client-directory caches. A single logical actor owns it, so
/// every mutation goes through `&mut self` and no locking is involved.
pub struct Session {
    pub(crate) backend: Arc<dyn Backend>,
    pub document: Document,
    pub client: Client,
    pub(crate) items: Vec<SelectedItem>,
    pub extras: Vec<ExtraItem>,
    pub utilities: Utilities,
    pub(crate) formula: Option<PricingFormula>,
    pub(crate) clients: Vec<Client>,
}

impl Session {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Session {
            backend,
            document: Document::default(),
            client: Client::default(),
            items: Vec::new(),
            extras: Vec::new(),
            utilities: Utilities::default(),
            formula: None,
            clients: Vec::new(),
        }
    }

    /// Opens a session and eagerly primes the formula and client-directory
    /// caches. The session stays usable before these resolve (prices read
    /// as 0 until the formula is in), so callers may also use `new` and
    /// refresh later.
    pub async fn start(backend: Arc<dyn Backend>) -> Result<Self, BackendError> {
        let mut session = Session::new(backend);
        session.refresh_formula().await?;
        session.refresh_clients().await?;
        tracing::debug!("session caches primed");
        Ok(session)
    }

    pub async fn refresh_formula(&mut self) -> Result<(), BackendError> {
        self.formula = Some(self.backend.get_loc_formulas().await?);
        Ok(())
    }

    pub async fn refresh_clients(&mut self) -> Result<(), BackendError> {
        let records = self.backend.get_client_infos().await?;
        self.clients = records.into_iter().map(bridge::client_from_record).collect();
        Ok(())
    }

    pub fn formula(&self) -> Option<&PricingFormula> {
        self.formula.as_ref()
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn items(&self) -> &[SelectedItem] {
        &self.items
    }

    pub fn is_saved(&self) -> bool {
        self.document.id != 0
    }

    pub fn is_invoice(&self) -> bool {
        self.document.is_invoice()
    }

    pub fn set_item(&mut self, item: &CatalogItem, quantity: Update, duration: Update) {
        selection::set_item(
            &mut self.items,
            self.formula.as_ref(),
            self.document.duration,
            item,
            quantity,
            duration,
        );
    }

    pub fn price(&self, item: &CatalogItem, quantity: u32, duration: u32) -> f64 {
        rental_price(Some(item), self.formula.as_ref(), quantity, duration)
    }

    /// Adds an ad-hoc charge; the price arrives as user input and accepts
    /// both comma and dot decimal separators.
    pub fn add_extra(&mut self, name: impl Into<String>, price: &str) -> anyhow::Result<()> {
        let price = parse_decimal(price)?;
        self.extras.push(ExtraItem {
            name: name.into(),
            price,
        });
        Ok(())
    }

    pub async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, BackendError> {
        let records = self.backend.get_materiel_data().await?;
        Ok(records.into_iter().map(bridge::catalog_from_record).collect())
    }

    pub async fn list_quotes(&self) -> Result<Vec<DocumentSummary>, BackendError> {
        let records = self.backend.get_devis_summaries().await?;
        Ok(records.into_iter().map(bridge::summary_from_record).collect())
    }

    pub async fn list_invoices(&self) -> Result<Vec<DocumentSummary>, BackendError> {
        let records = self.backend.get_factures_summaries().await?;
        Ok(records.into_iter().map(bridge::summary_from_record).collect())
    }

    pub async fn duplicate_quote(&self, devis_id: i64) -> Result<i64, BackendError> {
        self.backend.duplicate_devis(devis_id).await
    }

    /// Restores the document aggregate to its empty defaults between
    /// editing sessions. The formula and directory caches survive.
    pub fn reset(&mut self) {
        self.document = Document::default();
        self.client = Client::default();
        self.items.clear();
        self.extras.clear();
        self.utilities = Utilities::default();
    }
}
