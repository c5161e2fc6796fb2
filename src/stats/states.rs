// src/stats/states.rs
//
// Free-text origin -> Mexican state, by keyword. Entries are matched on
// normalized text with word boundaries, in table order; first hit wins.
// City aliases sit next to their state so "Cholula" and "Puebla, Pue."
// land in the same bucket. Entries whose keywords contain another entry's
// keyword ("nuevo leon" vs "leon") must come first.

use crate::core::text::{contains_term, normalize_text};
use crate::model::sentinel;

/// (canonical state name, keywords). Keywords are already normalized.
pub const STATE_LEXICON: &[(&str, &[&str])] = &[
    ("Aguascalientes", &["aguascalientes", "ags"]),
    ("Baja California Sur", &["baja california sur", "bcs", "la paz", "los cabos", "cabo san lucas"]),
    ("Baja California", &["baja california", "tijuana", "mexicali", "ensenada"]),
    ("Campeche", &["campeche", "ciudad del carmen"]),
    ("Chiapas", &["chiapas", "tuxtla gutierrez", "tapachula", "san cristobal de las casas"]),
    ("Chihuahua", &["chihuahua", "ciudad juarez", "cd juarez"]),
    ("Ciudad de México", &["ciudad de mexico", "cdmx", "mexico df", "distrito federal", "df", "coyoacan", "tlalpan", "iztapalapa"]),
    ("Coahuila", &["coahuila", "saltillo", "torreon", "monclova"]),
    ("Colima", &["colima", "manzanillo"]),
    ("Durango", &["durango", "gomez palacio"]),
    ("Estado de México", &["estado de mexico", "edomex", "edo mex", "toluca", "naucalpan", "ecatepec", "nezahualcoyotl", "texcoco", "metepec"]),
    ("Nuevo León", &["nuevo leon", "monterrey", "san pedro garza garcia", "guadalupe nl"]),
    ("Guanajuato", &["guanajuato", "leon", "irapuato", "celaya", "salamanca"]),
    ("Guerrero", &["guerrero", "acapulco", "chilpancingo", "iguala", "taxco"]),
    ("Hidalgo", &["hidalgo", "pachuca", "tulancingo"]),
    ("Jalisco", &["jalisco", "guadalajara", "zapopan", "puerto vallarta", "tlaquepaque"]),
    ("Michoacán", &["michoacan", "morelia", "uruapan", "zamora"]),
    ("Morelos", &["morelos", "cuernavaca", "cuautla"]),
    ("Nayarit", &["nayarit", "tepic"]),
    ("Oaxaca", &["oaxaca", "huatulco", "juchitan"]),
    ("Puebla", &["puebla", "pue", "cholula", "san andres cholula", "san pedro cholula", "atlixco", "tehuacan", "teziutlan", "huejotzingo", "san martin texmelucan", "izucar de matamoros"]),
    ("Querétaro", &["queretaro", "qro", "san juan del rio"]),
    ("Quintana Roo", &["quintana roo", "cancun", "playa del carmen", "chetumal", "cozumel"]),
    ("San Luis Potosí", &["san luis potosi", "slp"]),
    ("Sinaloa", &["sinaloa", "culiacan", "mazatlan", "los mochis"]),
    ("Sonora", &["sonora", "hermosillo", "ciudad obregon", "nogales"]),
    ("Tabasco", &["tabasco", "villahermosa"]),
    ("Tamaulipas", &["tamaulipas", "tampico", "reynosa", "matamoros", "nuevo laredo", "ciudad victoria"]),
    ("Tlaxcala", &["tlaxcala", "tlax", "apizaco", "huamantla", "calpulalpan"]),
    ("Veracruz", &["veracruz", "ver", "xalapa", "jalapa", "coatzacoalcos", "orizaba", "cordoba", "poza rica"]),
    ("Yucatán", &["yucatan", "merida", "valladolid"]),
    ("Zacatecas", &["zacatecas", "fresnillo"]),
];

/// Canonical state for an origin string, or `sentinel::STATE`.
pub fn infer_state(origin: &str) -> &'static str {
    let norm = normalize_text(origin);
    if norm.is_empty() || norm == normalize_text(sentinel::ORIGIN) {
        return sentinel::STATE;
    }
    STATE_LEXICON
        .iter()
        .find(|(_, keys)| keys.iter().any(|k| contains_term(&norm, k)))
        .map(|(state, _)| *state)
        .unwrap_or(sentinel::STATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cities_map_to_their_state() {
        assert_eq!(infer_state("San Andrés Cholula"), "Puebla");
        assert_eq!(infer_state("PUEBLA, PUE."), "Puebla");
        assert_eq!(infer_state("Cancún"), "Quintana Roo");
        assert_eq!(infer_state("La Paz, BCS"), "Baja California Sur");
        assert_eq!(infer_state("Monterrey, Nuevo León"), "Nuevo León");
        assert_eq!(infer_state("León, Gto."), "Guanajuato");
    }

    #[test]
    fn unknown_and_sentinel_fall_through() {
        assert_eq!(infer_state("Procedencia no registrada"), sentinel::STATE);
        assert_eq!(infer_state("Springfield"), sentinel::STATE);
        assert_eq!(infer_state(""), sentinel::STATE);
    }

    #[test]
    fn keywords_need_word_boundaries() {
        // "ver" must not fire inside "riverside"
        assert_eq!(infer_state("Riverside"), sentinel::STATE);
    }
}
