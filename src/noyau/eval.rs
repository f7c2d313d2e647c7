//! Noyau — évaluation de la pile RPN
//!
//! Le programme est consommé depuis la FIN (dernier élément entré).
//! On travaille sur une tranche `&[Op]` : chaque appel rend la valeur
//! et le reste non consommé, sans copie du programme.
//!
//! Binaire : `a` = première évaluation (dépilé en premier), `b` = seconde,
//! puis `f(a, b)`.

use std::collections::HashMap;

use super::erreur::{ErreurEval, ResultatEval};
use super::jetons::{format_jetons, vers_jetons};
use super::op::Op;

/// Évalue une sous-expression à partir de la fin de `ops`.
///
/// Retour: (valeur, reste non consommé).
///
/// Profondeur de récursion = imbrication du programme (un cadre par unaire
/// empilé) : une chaîne de l’ordre de 10^6 unaires épuise la pile du thread.
pub fn evaluer_pile<'a>(
    ops: &'a [Op],
    variables: &HashMap<String, f64>,
) -> ResultatEval<(f64, &'a [Op])> {
    let (op, reste) = ops.split_last().ok_or(ErreurEval::Insuffisant)?;

    match op {
        Op::Operande(v) => Ok((*v, reste)),

        Op::Variable(nom) => variables
            .get(nom)
            .map(|v| (*v, reste))
            .ok_or_else(|| ErreurEval::VariableInconnue(nom.clone())),

        Op::Constante(_, f) => Ok((f(), reste)),

        Op::Unaire(_, f) => {
            let (x, reste) = evaluer_pile(reste, variables)?;
            Ok((f(x), reste))
        }

        Op::Binaire(_, _, f) => {
            let (a, reste) = evaluer_pile(reste, variables)?;
            let (b, reste) = evaluer_pile(reste, variables)?;
            Ok((f(a, b), reste))
        }
    }
}

/// Évalue tout le programme ; le reste éventuel est ignoré (mais tracé).
pub fn evaluer_programme(ops: &[Op], variables: &HashMap<String, f64>) -> ResultatEval<f64> {
    let resultat = evaluer_pile(ops, variables);

    if log::log_enabled!(log::Level::Debug) {
        let programme = format_jetons(&vers_jetons(ops));
        match &resultat {
            Ok((v, reste)) => log::debug!(
                "[{programme}] = {v} (reste: [{}])",
                format_jetons(&vers_jetons(reste))
            ),
            Err(e) => log::debug!("[{programme}] => pas de résultat ({e})"),
        }
    }

    resultat.map(|(v, _)| v)
}
