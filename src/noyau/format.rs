// src/noyau/format.rs

/// Nombre de chiffres après la virgule avant nettoyage.
pub const PRECISION: usize = 10;

/// Affichage décimal minimal d’un résultat :
/// virgule fixe à `PRECISION` chiffres, puis on retire les zéros finaux
/// et le point s’il reste seul en bout de chaîne.
///
/// Jamais de notation scientifique : la partie entière est toujours complète.
pub fn formater(valeur: f64) -> String {
    let mut s = format!("{:.*}", PRECISION, valeur);

    // Pas de séparateur (inf, NaN) : rien à nettoyer.
    if s.contains('.') {
        let garde = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(garde);
    }

    s
}
