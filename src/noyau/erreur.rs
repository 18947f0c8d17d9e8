//! Erreurs de syntaxe / d’évaluation du noyau.
//!
//! Chaque variante porte la position (en caractères, 0-based) où la faute est détectée.
//! Les messages (`Display`) sont montrés tels quels à l’utilisateur.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErreurSyntaxe {
    /// Aucun chiffre ni point à l’endroit où un nombre était attendu.
    #[error("Expected number")]
    NombreAttendu { position: usize },

    /// Lexème numérique inutilisable ("." seul, signe seul, dépassement).
    #[error("Invalid number format")]
    FormatNombreInvalide { position: usize },

    /// `(` sans `)` correspondante.
    #[error("Missing ')'")]
    ParentheseManquante { position: usize },

    /// Diviseur exactement nul (position du `/`).
    #[error("Division by zero")]
    DivisionParZero { position: usize },

    /// Reste non consommé après une expression complète.
    #[error("Unexpected character at position {position}: '{}'", affiche_caractere(.caractere))]
    CaractereInattendu {
        position: usize,
        caractere: Option<char>,
    },

    /// Garde-fou pile : signes unaires / parenthèses imbriqués trop profondément.
    #[error("Expression nested too deeply (limit {limite})")]
    ImbricationExcessive { position: usize, limite: usize },
}

impl ErreurSyntaxe {
    pub fn position(&self) -> usize {
        use ErreurSyntaxe::*;

        match self {
            NombreAttendu { position }
            | FormatNombreInvalide { position }
            | ParentheseManquante { position }
            | DivisionParZero { position }
            | CaractereInattendu { position, .. }
            | ImbricationExcessive { position, .. } => *position,
        }
    }
}

fn affiche_caractere(c: &Option<char>) -> String {
    match c {
        Some(c) => c.to_string(),
        None => "end".to_string(),
    }
}
