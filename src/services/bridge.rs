//! Persistence bridge: the single place mapping the in-memory aggregate to
//! the backend schema and back, plus the save/load flows on top of it.

use serde::{Deserialize, Serialize};

use crate::backend::records::{
    ClientRecord, DevisItemRecord, DevisRecord, ExtraRecord, FullDevis, ItemRecord, SummaryRecord,
};
use crate::backend::BackendError;
use crate::models::{
    CatalogItem, Client, Document, DocumentSummary, ExtraItem, SelectedItem, Utilities, DEVIS_TAG,
};
use crate::services::pricing::rental_price;
use crate::services::session::{Session, SessionError};
use crate::utils::today_dmy;

/// Displayable outcome of a save. Save failures never propagate as errors;
/// they degrade into this value for the UI to show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
}

impl SaveOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        SaveOutcome {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        SaveOutcome {
            success: false,
            message: message.into(),
        }
    }
}

impl Session {
    /// Saves the current document as a quote. Invoices are terminal and are
    /// refused before any backend call. Re-saving an already-saved quote is
    /// an upsert keyed by its id.
    pub async fn save(&mut self) -> SaveOutcome {
        if self.document.is_invoice() {
            return SaveOutcome::failure("Une facture ne peut plus être enregistrée comme devis");
        }

        self.document.write_date = today_dmy();
        self.document.state = DEVIS_TAG.to_string();
        for entry in &mut self.items {
            entry.state = DEVIS_TAG.to_string();
        }

        let payload = to_backend(
            &self.document,
            &self.client,
            &self.items,
            &self.extras,
            &self.utilities,
        );

        let saved = self.backend.save_devis(&payload).await;
        match saved {
            Ok(id) => {
                self.document.id = id;
                if let Err(err) = self.refresh_clients().await {
                    tracing::warn!(%err, "client directory refresh after save failed");
                }
                SaveOutcome::success(format!("Devis {id} enregistré"))
            }
            Err(err) => {
                tracing::warn!(%err, "devis save failed");
                SaveOutcome::failure(err.to_string())
            }
        }
    }

    /// Loads a stored quote or invoice into the session, replacing the whole
    /// aggregate. Unlike `save`, backend failures propagate to the caller.
    pub async fn load_document(&mut self, id: i64, invoice: bool) -> Result<(), BackendError> {
        let full = if invoice {
            self.backend.load_facture(id).await?
        } else {
            self.backend.load_devis(id).await?
        };
        self.apply_loaded(full);
        tracing::debug!(id, invoice, "document loaded");
        Ok(())
    }

    /// Derives a terminal invoice from the current saved quote and returns
    /// the invoice id. The session keeps showing the quote; loading the new
    /// invoice is the caller's decision.
    pub async fn convert_to_invoice(&self) -> Result<i64, SessionError> {
        if !self.is_saved() {
            return Err(SessionError::NotSaved);
        }
        if self.document.is_invoice() {
            return Err(SessionError::AlreadyInvoice);
        }

        Ok(self.backend.facture_from_devis(self.document.id).await?)
    }

    fn apply_loaded(&mut self, full: FullDevis) {
        let FullDevis {
            client,
            devis,
            items,
            extra,
        } = full;

        self.document = Document {
            id: devis.id,
            name: devis.nom,
            date: devis.date,
            write_date: devis.date_crea,
            duration: devis.duree,
            state: devis.etat,
        };
        self.client = client_from_record(client);

        // The transmitted price is never trusted; totals are recomputed
        // under the session's formula.
        self.items = items
            .into_iter()
            .map(|row| {
                let item = catalog_from_record(row.item);
                let total_price =
                    rental_price(Some(&item), self.formula.as_ref(), row.quantite, row.duree);
                SelectedItem {
                    item,
                    quantity: row.quantite,
                    duration: row.duree,
                    total_price,
                    state: row.etat,
                }
            })
            .collect();

        self.extras = extra
            .into_iter()
            .map(|record| ExtraItem {
                name: record.nom,
                price: record.prix,
            })
            .collect();

        let mut utilities = Utilities {
            tech_qty: devis.nb_tech,
            transport_km: devis.nb_km,
            transport_rate: devis.taux_km,
            membership: devis.adhesion,
            discount_euro: devis.promo,
            ..Utilities::default()
        };
        utilities.set_tech_rate(devis.taux_tech);
        self.utilities = utilities;
    }
}

fn to_backend(
    document: &Document,
    client: &Client,
    items: &[SelectedItem],
    extras: &[ExtraItem],
    utilities: &Utilities,
) -> FullDevis {
    FullDevis {
        client: client_record(client),
        devis: DevisRecord {
            id: document.id,
            client_id: client.id,
            nom: document.name.clone(),
            date: document.date.clone(),
            date_crea: document.write_date.clone(),
            duree: document.duration,
            nb_tech: utilities.tech_qty,
            taux_tech: utilities.tech_rate,
            nb_km: utilities.transport_km,
            taux_km: utilities.transport_rate,
            adhesion: utilities.membership,
            promo: utilities.discount_euro,
            etat: document.state.clone(),
        },
        items: items
            .iter()
            .map(|entry| DevisItemRecord {
                item: item_record(&entry.item),
                quantite: entry.quantity,
                duree: entry.duration,
                etat: entry.state.clone(),
            })
            .collect(),
        extra: extras
            .iter()
            .map(|extra| ExtraRecord {
                nom: extra.name.clone(),
                prix: extra.price,
            })
            .collect(),
    }
}

fn client_record(client: &Client) -> ClientRecord {
    ClientRecord {
        id: client.id,
        nom: client.name.clone(),
        evenement: client.event_name.clone(),
        adresse: client.address.clone(),
        tel: client.phone.clone(),
        mail: client.mail.clone(),
    }
}

pub(crate) fn client_from_record(record: ClientRecord) -> Client {
    Client {
        id: record.id,
        name: record.nom,
        event_name: record.evenement,
        address: record.adresse,
        phone: record.tel,
        mail: record.mail,
    }
}

fn item_record(item: &CatalogItem) -> ItemRecord {
    ItemRecord {
        id: item.id,
        nom: item.name.clone(),
        item_type: item.item_type.clone(),
        total: item.total,
        dispo: item.available,
        valeur: item.value,
        contrib: item.contrib,
        nb_sorties: item.usage_count,
        benef: item.margin,
    }
}

pub(crate) fn catalog_from_record(record: ItemRecord) -> CatalogItem {
    CatalogItem {
        id: record.id,
        name: record.nom,
        item_type: record.item_type,
        total: record.total,
        available: record.dispo,
        value: record.valeur,
        contrib: record.contrib,
        usage_count: record.nb_sorties,
        margin: record.benef,
    }
}

pub(crate) fn summary_from_record(record: SummaryRecord) -> DocumentSummary {
    DocumentSummary {
        id: record.id,
        name: record.nom,
        date: record.date,
        client_name: record.client_nom,
        event_name: record.evenement,
        state: record.etat,
    }
}
