//! Tests fuzz safe : expressions générées (proptest) + évaluateur de référence.
//!
//! - arbres bornés (profondeur, taille) : pas de risque de pile
//! - la référence applique les mêmes opérations f64 dans le même ordre,
//!   donc on compare bit à bit
//! - division par un zéro (±0.0) => erreur attendue, jamais inf/NaN
//! - blancs ajoutés entre les jetons => même résultat
//! - affichage -> relecture -> affichage : stable

use proptest::prelude::*;

use super::format::formater;
use super::parseur::evaluer;
use super::ErreurSyntaxe;

/* ------------------------ Arbre généré ------------------------ */

#[derive(Clone, Debug)]
enum Arbre {
    Nombre(String),
    Moins(Box<Arbre>),
    Plus(Box<Arbre>),
    Binaire(Box<Arbre>, char, Box<Arbre>),
}

fn arbre() -> impl Strategy<Value = Arbre> {
    let feuille = prop_oneof![
        (0u32..1000).prop_map(|n| Arbre::Nombre(n.to_string())),
        (0u32..1000, 0u32..1000).prop_map(|(e, f)| Arbre::Nombre(format!("{e}.{f}"))),
        (0u32..1000).prop_map(|f| Arbre::Nombre(format!(".{f}"))),
    ];

    feuille.prop_recursive(4, 32, 2, |interne| {
        prop_oneof![
            interne.clone().prop_map(|a| Arbre::Moins(Box::new(a))),
            interne.clone().prop_map(|a| Arbre::Plus(Box::new(a))),
            (
                interne.clone(),
                prop::sample::select(vec!['+', '-', '*', '/']),
                interne,
            )
                .prop_map(|(a, op, b)| Arbre::Binaire(Box::new(a), op, Box::new(b))),
        ]
    })
}

/// Rendu texte ; les binaires sont toujours parenthésés (la précédence a ses propres tests).
fn rendu(a: &Arbre, sep: &str) -> String {
    match a {
        Arbre::Nombre(s) => s.clone(),
        Arbre::Moins(x) => format!("-{sep}{}", rendu(x, sep)),
        Arbre::Plus(x) => format!("+{sep}{}", rendu(x, sep)),
        Arbre::Binaire(x, op, y) => {
            format!("({sep}{}{sep}{op}{sep}{}{sep})", rendu(x, sep), rendu(y, sep))
        }
    }
}

/// Référence : None si une division par zéro survient.
fn reference(a: &Arbre) -> Option<f64> {
    match a {
        Arbre::Nombre(s) => s.parse().ok(),
        Arbre::Moins(x) => reference(x).map(|v| -v),
        Arbre::Plus(x) => reference(x),
        Arbre::Binaire(x, op, y) => {
            let g = reference(x)?;
            let d = reference(y)?;
            match op {
                '+' => Some(g + d),
                '-' => Some(g - d),
                '*' => Some(g * d),
                _ => {
                    if d == 0.0 {
                        None
                    } else {
                        Some(g / d)
                    }
                }
            }
        }
    }
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn fuzz_conforme_a_la_reference(a in arbre()) {
        let texte = rendu(&a, "");
        match (reference(&a), evaluer(&texte)) {
            (Some(attendu), Ok(obtenu)) => {
                prop_assert_eq!(obtenu.to_bits(), attendu.to_bits(), "texte={:?}", texte);
            }
            (None, Err(ErreurSyntaxe::DivisionParZero { .. })) => {}
            (attendu, obtenu) => {
                prop_assert!(false, "texte={:?} attendu={:?} obtenu={:?}", texte, attendu, obtenu);
            }
        }
    }

    #[test]
    fn fuzz_blancs_sans_effet(a in arbre(), sep in "[ \t]{1,3}") {
        let serre = evaluer(&rendu(&a, ""));
        let aere = evaluer(&format!("{sep}{}{sep}", rendu(&a, &sep)));
        match (serre, aere) {
            (Ok(x), Ok(y)) => prop_assert_eq!(x.to_bits(), y.to_bits()),
            (Err(x), Err(y)) => prop_assert_eq!(x.to_string(), y.to_string()),
            (x, y) => prop_assert!(false, "serre={:?} aere={:?}", x, y),
        }
    }

    #[test]
    fn fuzz_aller_retour_formatage(v in -1.0e4f64..1.0e4) {
        let s = formater(v);
        let relu = evaluer(&s);
        prop_assert!(relu.is_ok(), "s={:?} => {:?}", s, relu);
        if let Ok(relu) = relu {
            prop_assert_eq!(formater(relu), s);
        }
    }

    #[test]
    fn fuzz_entiers_exacts(n in -(1i64 << 52)..(1i64 << 52)) {
        // entiers représentables exactement : affichage sans point, relecture exacte
        let v = n as f64;
        let s = formater(v);
        prop_assert_eq!(&s, &n.to_string());
        prop_assert_eq!(evaluer(&s), Ok(v));
    }

    #[test]
    fn fuzz_jamais_de_panique(texte in "[0-9 .+*/()\\-]{0,40}") {
        // n’importe quelle entrée : valeur ou erreur, jamais de panique
        let _ = evaluer(&texte);
    }
}
