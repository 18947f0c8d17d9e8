// src/noyau/parseur.rs
//
// Descente récursive : lecture ET évaluation en une seule passe (pas d’AST).
//
// Grammaire (du plus lâche au plus serré) :
//   Expression := Terme (('+' | '-') Terme)*        associatif à gauche
//   Terme      := Facteur (('*' | '/') Facteur)*     associatif à gauche
//   Facteur    := '-' Facteur | '+' Facteur | '(' Expression ')' | Nombre
//   Nombre     := ['+'|'-'] ( '.' chiffre+ | chiffre+ ('.' chiffre*)? )
//
// Règles:
// - Blancs ignorés devant chaque délimiteur et chaque nombre.
// - Première erreur = fin de l’évaluation (propagée par `?`, aucune reprise).
// - Le signe optionnel de Nombre est redondant avec le signe unaire de Facteur :
//   on le garde tel quel (ne rien refuser de ce qui était accepté).

use super::curseur::Curseur;
use super::erreur::ErreurSyntaxe;

/// Garde-fou pile : nombre max de Facteur imbriqués (signes unaires + parenthèses).
pub const PROFONDEUR_MAX: usize = 256;

/// API publique : évalue une expression arithmétique en f64.
///
/// Chaque appel a son propre curseur : réentrant, sans état partagé.
pub fn evaluer(texte: &str) -> Result<f64, ErreurSyntaxe> {
    let mut parseur = Parseur::new(texte);
    let valeur = parseur.expression()?;
    parseur.fin()?;
    Ok(valeur)
}

struct Parseur<'a> {
    curseur: Curseur<'a>,
    profondeur: usize,
}

impl<'a> Parseur<'a> {
    fn new(texte: &'a str) -> Self {
        Self {
            curseur: Curseur::new(texte),
            profondeur: 0,
        }
    }

    /// Après l’expression de tête : blancs puis fin de texte, sinon caractère inattendu.
    fn fin(&mut self) -> Result<(), ErreurSyntaxe> {
        self.curseur.sauter_blancs();
        if self.curseur.fini() {
            return Ok(());
        }
        Err(ErreurSyntaxe::CaractereInattendu {
            position: self.curseur.position(),
            caractere: self.curseur.caractere(),
        })
    }

    fn expression(&mut self) -> Result<f64, ErreurSyntaxe> {
        let mut gauche = self.terme()?;
        loop {
            if self.curseur.accepte(b'+') {
                gauche += self.terme()?;
            } else if self.curseur.accepte(b'-') {
                gauche -= self.terme()?;
            } else {
                break;
            }
        }
        Ok(gauche)
    }

    fn terme(&mut self) -> Result<f64, ErreurSyntaxe> {
        let mut gauche = self.facteur()?;
        loop {
            if self.curseur.accepte(b'*') {
                gauche *= self.facteur()?;
            } else if self.curseur.accepte(b'/') {
                // position du '/' (déjà consommé, ASCII => 1 octet)
                let position = self.curseur.position_de(self.curseur.pos() - 1);
                let droite = self.facteur()?;
                // -0.0 == 0.0 : les deux zéros sont refusés
                if droite == 0.0 {
                    return Err(ErreurSyntaxe::DivisionParZero { position });
                }
                gauche /= droite;
            } else {
                break;
            }
        }
        Ok(gauche)
    }

    fn facteur(&mut self) -> Result<f64, ErreurSyntaxe> {
        self.curseur.sauter_blancs();
        if self.profondeur >= PROFONDEUR_MAX {
            return Err(ErreurSyntaxe::ImbricationExcessive {
                position: self.curseur.position(),
                limite: PROFONDEUR_MAX,
            });
        }

        self.profondeur += 1;
        let valeur = self.facteur_sans_garde();
        self.profondeur -= 1;
        valeur
    }

    fn facteur_sans_garde(&mut self) -> Result<f64, ErreurSyntaxe> {
        if self.curseur.accepte(b'-') {
            return Ok(-self.facteur()?);
        }
        if self.curseur.accepte(b'+') {
            return self.facteur();
        }

        if self.curseur.accepte(b'(') {
            let valeur = self.expression()?;
            if !self.curseur.accepte(b')') {
                return Err(ErreurSyntaxe::ParentheseManquante {
                    position: self.curseur.position(),
                });
            }
            return Ok(valeur);
        }

        self.nombre()
    }

    /// Littéral décimal : signe optionnel, au plus un point, chiffres.
    fn nombre(&mut self) -> Result<f64, ErreurSyntaxe> {
        self.curseur.sauter_blancs();
        let debut = self.curseur.pos();
        let position = self.curseur.position();

        if !self.curseur.accepte(b'+') {
            self.curseur.accepte(b'-');
        }

        let mut point_vu = false;
        while let Some(c) = self.curseur.courant() {
            if c.is_ascii_digit() {
                self.curseur.avancer();
            } else if c == b'.' && !point_vu {
                point_vu = true;
                self.curseur.avancer();
            } else {
                break;
            }
        }

        let lexeme = self.curseur.tranche(debut);
        if lexeme.is_empty() {
            return Err(ErreurSyntaxe::NombreAttendu { position });
        }
        if lexeme == "." {
            return Err(ErreurSyntaxe::FormatNombreInvalide { position });
        }

        // Double contrôle : signe seul, "-." ou littéral qui déborde en ±inf.
        match lexeme.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(ErreurSyntaxe::FormatNombreInvalide { position }),
        }
    }
}
