//! Noyau arithmétique (f64)
//!
//! Organisation interne :
//! - curseur.rs : texte + position de lecture (une instance par appel)
//! - erreur.rs  : erreurs typées, positionnées
//! - parseur.rs : descente récursive Expression / Terme / Facteur / Nombre
//! - format.rs  : affichage décimal minimal (10 chiffres, zéros retirés)
//! - eval.rs    : pipeline complet

pub mod curseur;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod parseur;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurSyntaxe;
pub use eval::eval_expression;
