// src/schema/catalog.rs
//
// Participant catalog entries: `{participant_id, nombre_completo,
// procedencias[], sexo, edad_categorias[]}`. Ids arrive as strings or numbers.

use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ParticipantId {
    Text(String),
    Number(i64),
}

impl ParticipantId {
    pub fn as_text(&self) -> String {
        match self {
            ParticipantId::Text(s) => s.trim().to_string(),
            ParticipantId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogEntry {
    pub participant_id: Option<ParticipantId>,
    pub nombre_completo: Option<String>,
    pub procedencias: Option<Vec<String>>,
    pub sexo: Option<String>,
    pub edad_categorias: Option<Vec<String>>,
}

impl CatalogEntry {
    pub fn id(&self) -> Option<String> {
        self.participant_id.as_ref().map(ParticipantId::as_text).filter(|s| !s.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.nombre_completo.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// First non-empty origin.
    pub fn origin(&self) -> Option<&str> {
        self.procedencias.iter().flatten().map(|s| s.trim()).find(|s| !s.is_empty())
    }

    pub fn gender(&self) -> Option<&str> {
        self.sexo.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Age groups joined with ", ".
    pub fn age_group(&self) -> Option<String> {
        let groups: Vec<&str> = self.edad_categorias
            .iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if groups.is_empty() { None } else { Some(groups.join(", ")) }
    }
}

/// Decode catalog rows one by one; malformed rows are skipped (and counted)
/// rather than failing the whole catalog.
pub fn entries_from_values(values: Vec<Value>) -> (Vec<CatalogEntry>, usize) {
    let mut out = Vec::with_capacity(values.len());
    let mut skipped = 0usize;
    for v in values {
        match serde_json::from_value::<CatalogEntry>(v) {
            Ok(entry) => out.push(entry),
            Err(e) => {
                skipped += 1;
                logd!("Catalog: skipping malformed entry ({e})");
            }
        }
    }
    (out, skipped)
}
