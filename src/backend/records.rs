//! Persisted schema of the storage backend. Field names on the wire are the
//! backend's French column names; the Rust fields stay ASCII via renames.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: i64,
    pub nom: String,
    pub evenement: String,
    pub adresse: String,
    pub tel: String,
    pub mail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevisRecord {
    pub id: i64,
    pub client_id: i64,
    pub nom: String,
    pub date: String,
    pub date_crea: String,
    #[serde(rename = "durée")]
    pub duree: u32,
    pub nb_tech: u32,
    pub taux_tech: f64,
    pub nb_km: u32,
    pub taux_km: f64,
    pub adhesion: bool,
    pub promo: f64,
    pub etat: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: i64,
    pub nom: String,
    pub item_type: String,
    pub total: u32,
    pub dispo: u32,
    pub valeur: f64,
    pub contrib: f64,
    pub nb_sorties: u32,
    pub benef: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevisItemRecord {
    pub item: ItemRecord,
    #[serde(rename = "quantité")]
    pub quantite: u32,
    #[serde(rename = "durée")]
    pub duree: u32,
    pub etat: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraRecord {
    pub nom: String,
    pub prix: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullDevis {
    pub client: ClientRecord,
    pub devis: DevisRecord,
    pub items: Vec<DevisItemRecord>,
    pub extra: Vec<ExtraRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: i64,
    pub nom: String,
    pub date: String,
    pub client_nom: String,
    pub evenement: String,
    pub etat: String,
}
