//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, ligne résultat, erreur)
//! et offrir les opérations simples (C/AC, dépôt d’un résultat ou d’une erreur).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - `resultat` commence toujours par l’étiquette d’affichage.
//! - Une erreur ne remplace jamais le dernier résultat affiché.

/// Étiquette de la ligne résultat.
pub const ETIQUETTE_RESULTAT: &str = "Result: ";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // "Result: <valeur formatée>"
    pub erreur: String,   // message verbatim du noyau, vide si aucune

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: ETIQUETTE_RESULTAT.to_string(),
            erreur: String::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultat();
    }

    /// C : effacer seulement l’entrée (sans toucher au résultat).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Ligne résultat ramenée à l’étiquette seule, erreur effacée.
    pub fn clear_resultat(&mut self) {
        self.resultat = ETIQUETTE_RESULTAT.to_string();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Dépose une erreur ; le dernier résultat reste affiché.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    /// Dépose un résultat déjà formaté par le noyau.
    pub fn set_resultat(&mut self, valeur: &str) {
        self.erreur.clear();
        self.resultat = format!("{ETIQUETTE_RESULTAT}{valeur}");
        self.focus_entree = true;
    }
}
