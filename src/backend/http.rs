use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::models::PricingFormula;

use super::records::{ClientRecord, FullDevis, ItemRecord, SummaryRecord};
use super::{Backend, BackendError};

pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpBackend {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Rejected(format!("{status}: {body}")));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn get_loc_formulas(&self) -> Result<PricingFormula, BackendError> {
        self.get_json("/formulas").await
    }

    async fn get_client_infos(&self) -> Result<Vec<ClientRecord>, BackendError> {
        self.get_json("/clients").await
    }

    async fn get_materiel_data(&self) -> Result<Vec<ItemRecord>, BackendError> {
        self.get_json("/materiel").await
    }

    async fn save_devis(&self, devis: &FullDevis) -> Result<i64, BackendError> {
        self.post_json("/devis", devis).await
    }

    async fn load_devis(&self, devis_id: i64) -> Result<FullDevis, BackendError> {
        self.get_json(&format!("/devis/{devis_id}")).await
    }

    async fn load_facture(&self, facture_id: i64) -> Result<FullDevis, BackendError> {
        self.get_json(&format!("/factures/{facture_id}")).await
    }

    async fn get_devis_summaries(&self) -> Result<Vec<SummaryRecord>, BackendError> {
        self.get_json("/devis").await
    }

    async fn get_factures_summaries(&self) -> Result<Vec<SummaryRecord>, BackendError> {
        self.get_json("/factures").await
    }

    async fn duplicate_devis(&self, devis_id: i64) -> Result<i64, BackendError> {
        self.post_json(&format!("/devis/{devis_id}/duplicate"), &json!({}))
            .await
    }

    async fn facture_from_devis(&self, devis_id: i64) -> Result<i64, BackendError> {
        self.post_json(&format!("/devis/{devis_id}/facture"), &json!({}))
            .await
    }
}
