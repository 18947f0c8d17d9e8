//! Noyau: évaluation (pipeline réel)
//!
//! texte -> parseur (descente récursive, f64) -> format (décimal minimal)
//!
//! Seule entrée utilisée par la coquille : elle reçoit soit le texte du résultat,
//! soit une erreur typée dont le message est affichable tel quel.

use super::erreur::ErreurSyntaxe;
use super::format::formater;
use super::parseur::evaluer;

/// API publique : évalue `texte` et retourne le résultat déjà formaté.
pub fn eval_expression(texte: &str) -> Result<String, ErreurSyntaxe> {
    let valeur = evaluer(texte)?;
    Ok(formater(valeur))
}
