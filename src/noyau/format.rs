// src/noyau/format.rs
//
// Historique “infix” du programme RPN.
// - Même descente que l’évaluation (depuis la fin), mais on produit du texte.
// - Parenthèses minimales : seulement si précédence(enfant) < précédence(parent)
//   Exception : enfant droit de même précédence sous "-" ou "÷" (3-(4-5) ≠ 3-4-5)
// - Opérande manquant => "?" (la ligne reste lisible pendant la saisie)
// - Expressions indépendantes séparées par ", " (la plus récente en dernier)
// - "=" final sauf si le dernier élément entré est une feuille

use super::op::{Op, PRECEDENCE_MAX};

/// Affiché quand le programme est vide.
pub const MARQUEUR_VIDE: &str = " ";

const MANQUANT: &str = "?";

/// Opérateurs dont l’opérande droit de même précédence garde ses parenthèses.
fn est_non_associatif(symbole: &str) -> bool {
    matches!(symbole, "-" | "÷")
}

/// Rend une sous-expression depuis la fin de `ops`.
///
/// Retour: (texte, précédence, reste non consommé).
///
/// Récursif comme `eval::evaluer_pile` : la profondeur suit l’imbrication
/// (une chaîne de 10^6 unaires chargée par `set_program` épuise la pile).
fn decrire_pile(ops: &[Op]) -> (String, i32, &[Op]) {
    let Some((op, reste)) = ops.split_last() else {
        return (MANQUANT.to_string(), PRECEDENCE_MAX, ops);
    };

    match op {
        Op::Operande(_) | Op::Variable(_) | Op::Constante(..) => {
            (op.symbole(), PRECEDENCE_MAX, reste)
        }

        Op::Unaire(s, _) => {
            let (x, _, reste) = decrire_pile(reste);
            (format!("{s}({x})"), PRECEDENCE_MAX, reste)
        }

        Op::Binaire(s, p, _) => {
            // a = droite (dépilé en premier), b = gauche
            let (a, pa, reste) = decrire_pile(reste);
            let (b, pb, reste) = decrire_pile(reste);

            let gauche = if pb < *p { format!("({b})") } else { b };
            let droite = if pa < *p || (pa == *p && est_non_associatif(s)) {
                format!("({a})")
            } else {
                a
            };

            (format!("{gauche}{s}{droite}"), *p, reste)
        }
    }
}

/// Historique complet du programme.
pub fn decrire_programme(ops: &[Op]) -> String {
    let Some(dernier) = ops.last() else {
        return MARQUEUR_VIDE.to_string();
    };

    let mut morceaux: Vec<String> = Vec::new();
    let mut reste = ops;
    while !reste.is_empty() {
        let (texte, _, r) = decrire_pile(reste);
        morceaux.push(texte);
        reste = r;
    }
    morceaux.reverse();

    let mut out = morceaux.join(", ");
    if !dernier.est_feuille() {
        out.push('=');
    }
    out
}
