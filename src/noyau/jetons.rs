// src/noyau/jetons.rs
//
// Programme <-> transcription symbolique (liste de chaînes).
//
// Lecture tolérante :
// - symbole connu   => l’opération de la table
// - nombre lisible  => Op::Operande (syntaxe `f64` de Rust, sans espaces ;
//                      "inf"/"NaN" acceptés : c’est ainsi que s’écrivent les
//                      opérandes non finis, l’aller-retour reste exact)
// - autre chose     => jeton abandonné (pas d’erreur)

use std::collections::HashMap;

use super::op::Op;

/// Programme -> jetons (ordre conservé).
pub fn vers_jetons(ops: &[Op]) -> Vec<String> {
    ops.iter().map(Op::to_string).collect()
}

/// Jetons -> programme, en résolvant contre la table des opérations connues.
pub fn depuis_jetons<I, S>(jetons: I, connues: &HashMap<String, Op>) -> Vec<Op>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();

    for jeton in jetons {
        let s = jeton.as_ref();

        if let Some(op) = connues.get(s) {
            out.push(op.clone());
            continue;
        }

        match s.parse::<f64>() {
            Ok(v) => out.push(Op::Operande(v)),
            Err(_) => log::debug!("jeton ignoré : {s:?}"),
        }
    }

    out
}

/// Format utilitaire (debug) : jetons séparés par des espaces.
pub fn format_jetons(jetons: &[String]) -> String {
    jetons.join(" ")
}
