//! Boundary to the remote storage backend. Everything behind this trait is
//! opaque to the editing session and reached through asynchronous calls.

pub mod http;
pub mod records;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::PricingFormula;
use records::{ClientRecord, FullDevis, ItemRecord, SummaryRecord};

pub use http::HttpBackend;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("la requête au serveur a échoué: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("le serveur a refusé l'opération: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait Backend: Send + Sync {
    async fn get_loc_formulas(&self) -> Result<PricingFormula, BackendError>;

    async fn get_client_infos(&self) -> Result<Vec<ClientRecord>, BackendError>;

    async fn get_materiel_data(&self) -> Result<Vec<ItemRecord>, BackendError>;

    /// Upsert keyed by `devis.id`; 0 makes the backend allocate a new id.
    /// Returns the assigned id.
    async fn save_devis(&self, devis: &FullDevis) -> Result<i64, BackendError>;

    async fn load_devis(&self, devis_id: i64) -> Result<FullDevis, BackendError>;

    async fn load_facture(&self, facture_id: i64) -> Result<FullDevis, BackendError>;

    async fn get_devis_summaries(&self) -> Result<Vec<SummaryRecord>, BackendError>;

    async fn get_factures_summaries(&self) -> Result<Vec<SummaryRecord>, BackendError>;

    /// Clones a stored quote, returns the id of the copy.
    async fn duplicate_devis(&self, devis_id: i64) -> Result<i64, BackendError>;

    /// Derives a terminal invoice from a stored quote, returns the invoice id.
    async fn facture_from_devis(&self, devis_id: i64) -> Result<i64, BackendError>;
}
