use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use locamat::backend::records::{
    ClientRecord, FullDevis, ItemRecord, SummaryRecord,
};
use locamat::backend::{Backend, BackendError};
use locamat::models::PricingFormula;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// In-memory stand-in for the remote storage backend: id allocation, quote
/// and invoice stores, and call counters for interaction asserts.
pub struct MockBackend {
    formula: PricingFormula,
    clients: Mutex<Vec<ClientRecord>>,
    catalog: Vec<ItemRecord>,
    devis: Mutex<HashMap<i64, FullDevis>>,
    factures: Mutex<HashMap<i64, FullDevis>>,
    next_id: AtomicI64,
    save_calls: AtomicU64,
}

impl MockBackend {
    pub fn new(contrib_following: f64) -> Self {
        MockBackend {
            formula: PricingFormula { contrib_following },
            clients: Mutex::new(Vec::new()),
            catalog: vec![ItemRecord {
                id: 7,
                nom: "Projecteur LED".to_string(),
                item_type: "lumière".to_string(),
                total: 10,
                dispo: 8,
                valeur: 120.0,
                contrib: 10.0,
                nb_sorties: 3,
                benef: 40.0,
            }],
            devis: Mutex::new(HashMap::new()),
            factures: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            save_calls: AtomicU64::new(0),
        }
    }

    pub fn with_client(self, record: ClientRecord) -> Self {
        self.clients.lock().unwrap().push(record);
        self
    }

    pub fn stored_devis(&self, id: i64) -> Option<FullDevis> {
        self.devis.lock().unwrap().get(&id).cloned()
    }

    pub fn devis_count(&self) -> usize {
        self.devis.lock().unwrap().len()
    }

    pub fn save_call_count(&self) -> u64 {
        self.save_calls.load(Ordering::SeqCst)
    }
}

fn summary_of(full: &FullDevis) -> SummaryRecord {
    SummaryRecord {
        id: full.devis.id,
        nom: full.devis.nom.clone(),
        date: full.devis.date.clone(),
        client_nom: full.client.nom.clone(),
        evenement: full.client.evenement.clone(),
        etat: full.devis.etat.clone(),
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn get_loc_formulas(&self) -> Result<PricingFormula, BackendError> {
        Ok(self.formula.clone())
    }

    async fn get_client_infos(&self) -> Result<Vec<ClientRecord>, BackendError> {
        Ok(self.clients.lock().unwrap().clone())
    }

    async fn get_materiel_data(&self) -> Result<Vec<ItemRecord>, BackendError> {
        Ok(self.catalog.clone())
    }

    async fn save_devis(&self, devis: &FullDevis) -> Result<i64, BackendError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        let mut stored = devis.clone();
        let id = if stored.devis.id == 0 {
            self.next_id.fetch_add(1, Ordering::SeqCst)
        } else {
            stored.devis.id
        };
        stored.devis.id = id;

        {
            let mut clients = self.clients.lock().unwrap();
            let known = clients
                .iter()
                .any(|c| c.nom == stored.client.nom && c.evenement == stored.client.evenement);
            if !known {
                let mut record = stored.client.clone();
                record.id = clients.len() as i64 + 1;
                clients.push(record);
            }
        }

        self.devis.lock().unwrap().insert(id, stored);
        Ok(id)
    }

    async fn load_devis(&self, devis_id: i64) -> Result<FullDevis, BackendError> {
        self.devis
            .lock()
            .unwrap()
            .get(&devis_id)
            .cloned()
            .ok_or_else(|| BackendError::Rejected("devis introuvable".to_string()))
    }

    async fn load_facture(&self, facture_id: i64) -> Result<FullDevis, BackendError> {
        self.factures
            .lock()
            .unwrap()
            .get(&facture_id)
            .cloned()
            .ok_or_else(|| BackendError::Rejected("facture introuvable".to_string()))
    }

    async fn get_devis_summaries(&self) -> Result<Vec<SummaryRecord>, BackendError> {
        Ok(self.devis.lock().unwrap().values().map(summary_of).collect())
    }

    async fn get_factures_summaries(&self) -> Result<Vec<SummaryRecord>, BackendError> {
        Ok(self
            .factures
            .lock()
            .unwrap()
            .values()
            .map(summary_of)
            .collect())
    }

    async fn duplicate_devis(&self, devis_id: i64) -> Result<i64, BackendError> {
        let source = self
            .devis
            .lock()
            .unwrap()
            .get(&devis_id)
            .cloned()
            .ok_or_else(|| BackendError::Rejected("devis introuvable".to_string()))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut copy = source;
        copy.devis.id = id;
        copy.devis.nom.push_str(" (copie)");
        self.devis.lock().unwrap().insert(id, copy);
        Ok(id)
    }

    async fn facture_from_devis(&self, devis_id: i64) -> Result<i64, BackendError> {
        let source = self
            .devis
            .lock()
            .unwrap()
            .get(&devis_id)
            .cloned()
            .ok_or_else(|| BackendError::Rejected("devis introuvable".to_string()))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut facture = source;
        facture.devis.id = id;
        facture.devis.etat = "facture".to_string();
        for item in &mut facture.items {
            item.etat = "facture".to_string();
        }
        self.factures.lock().unwrap().insert(id, facture);
        Ok(id)
    }
}
