// src/noyau/programme.rs
//
// Programme = la pile sérialisée : une chaîne par jeton, dans l’ordre d’empilement.
// C’est le seul chemin d’échange entre deux moteurs (calculatrice -> graphe).
//
// Reconstruction (voir MoteurRpn::deserialize) :
// - symbole connu  -> opérateur / constante
// - nombre lisible -> opérande
// - sinon          -> variable (jamais une erreur)

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Programme {
    symboles: Vec<String>,
}

impl Programme {
    pub fn new(symboles: Vec<String>) -> Self {
        Self { symboles }
    }

    pub fn symboles(&self) -> &[String] {
        &self.symboles
    }

    /// Transport texte : tableau JSON de chaînes.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("programme non sérialisable: {e}"))
    }

    pub fn from_json(texte: &str) -> Result<Self, String> {
        serde_json::from_str(texte).map_err(|e| format!("programme invalide: {e}"))
    }
}

impl<'a> From<&'a [&'a str]> for Programme {
    fn from(symboles: &'a [&'a str]) -> Self {
        Self::new(symboles.iter().map(|s| s.to_string()).collect())
    }
}

impl FromIterator<String> for Programme {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Lecture d’un littéral décimal : `-`? chiffres, avec au plus un séparateur
/// (point, ou virgule : "2,5"). Pas d’exposant, pas de `+`.
///
/// Seules exceptions : "inf", "-inf" et "NaN", tels que `format_operande` les écrit.
/// Tout le reste ("Inf", "nan", "1e5"...) reste un nom de variable.
pub fn lire_nombre(texte: &str) -> Option<f64> {
    let s = texte.trim();
    match s {
        "inf" => return Some(f64::INFINITY),
        "-inf" => return Some(f64::NEG_INFINITY),
        "NaN" => return Some(f64::NAN),
        _ => {}
    }

    let corps = s.strip_prefix('-').unwrap_or(s);
    let mut chiffres = 0usize;
    let mut separateurs = 0usize;
    for c in corps.chars() {
        match c {
            '0'..='9' => chiffres += 1,
            '.' | ',' => separateurs += 1,
            _ => return None,
        }
    }
    if chiffres == 0 || separateurs > 1 {
        return None;
    }

    s.replace(',', ".").parse::<f64>().ok()
}
