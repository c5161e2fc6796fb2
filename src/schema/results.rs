// src/schema/results.rs
//
// Rule table for result rows. Order inside each list is the fallback
// priority: canonical key, legacy localized key, alternate legacy key.

use super::FieldRule;
use crate::model::sentinel;

pub const PARTICIPANT_ID: FieldRule = FieldRule {
    field: "participant_id",
    keys: &["participant_id", "participantId", "id_participante"],
    sentinel: "",
};

pub const BIB: FieldRule = FieldRule {
    field: "bib",
    keys: &["bib", "número_de_competidor", "numero_de_competidor", "dorsal"],
    sentinel: sentinel::BIB,
};

pub const NAME: FieldRule = FieldRule {
    field: "name",
    keys: &["name", "nombre_completo", "nombre"],
    sentinel: sentinel::NAME,
};

pub const ORIGIN: FieldRule = FieldRule {
    field: "origin",
    keys: &["origin", "procedencia", "estado_estandarizado"],
    sentinel: sentinel::ORIGIN,
};

pub const TEAM: FieldRule = FieldRule {
    field: "team",
    keys: &["team", "equipo"],
    sentinel: sentinel::TEAM,
};

pub const GENDER: FieldRule = FieldRule {
    field: "gender",
    keys: &["gender", "sexo", "rama"],
    sentinel: sentinel::GENDER,
};

pub const AGE_GROUP: FieldRule = FieldRule {
    field: "age_group",
    keys: &["age_group", "ageGroup", "edad", "edad_categorias"],
    sentinel: sentinel::AGE_GROUP,
};

pub const CATEGORY: FieldRule = FieldRule {
    field: "category",
    keys: &["category", "categoria", "categoría"],
    sentinel: sentinel::CATEGORY,
};

pub const DISTANCE: FieldRule = FieldRule {
    field: "distance",
    keys: &["distance", "distancia", "distancia (km)"],
    sentinel: "",
};

pub const EVENT: FieldRule = FieldRule {
    field: "event",
    keys: &["event", "evento"],
    sentinel: sentinel::EVENT,
};

pub const YEAR: FieldRule = FieldRule {
    field: "year",
    keys: &["year", "anio", "año"],
    sentinel: sentinel::YEAR,
};

/// Colon-delimited finish time ("01:02:03", "12:30.5")
pub const TIME: FieldRule = FieldRule {
    field: "time",
    keys: &["time", "tiempo", "tiempo_chip"],
    sentinel: sentinel::TIME,
};

/// Pre-formatted display time; wins over anything we would format ourselves.
pub const TIME_LABEL: FieldRule = FieldRule {
    field: "time_label",
    keys: &["tiempo_label", "time_label", "time", "tiempo"],
    sentinel: sentinel::TIME,
};

pub const TIME_HOURS: FieldRule = FieldRule {
    field: "time_hours",
    keys: &["time_hours", "hours", "horas"],
    sentinel: "",
};

pub const TIME_MINUTES: FieldRule = FieldRule {
    field: "time_minutes",
    keys: &["time_minutes", "minutes", "minutos"],
    sentinel: "",
};

pub const TIME_SECONDS: FieldRule = FieldRule {
    field: "time_seconds",
    keys: &["time_seconds", "seconds", "segundos"],
    sentinel: "",
};

pub const POSITION_CATEGORY: FieldRule = FieldRule {
    field: "position_category",
    keys: &["position_category", "lugar_categoría", "lugar_categoria"],
    sentinel: sentinel::POSITION,
};

pub const POSITION_GENDER: FieldRule = FieldRule {
    field: "position_gender",
    keys: &["position_gender", "lugar_rama"],
    sentinel: sentinel::POSITION,
};

pub const POSITION_GENERAL: FieldRule = FieldRule {
    field: "position_general",
    keys: &["position_general", "lugar_general"],
    sentinel: sentinel::POSITION,
};

/// Placement used for medal tallies: category podium first, then gender
/// branch, then overall, then bare "position"/"lugar".
pub const PLACEMENT: FieldRule = FieldRule {
    field: "placement",
    keys: &[
        "position_category", "lugar_categoría", "lugar_categoria",
        "position_gender", "lugar_rama",
        "position_general", "lugar_general",
        "position", "lugar",
    ],
    sentinel: "",
};
