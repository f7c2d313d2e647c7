//! Noyau — le “cerveau” de la calculatrice RPN.
//!
//! Contrats :
//! - Le programme n’est modifié QUE par les méthodes publiques ci-dessous.
//! - Chaque empilement réévalue tout le programme (contre les variables actuelles).
//! - Pas de résultat = `None` (pile insuffisante, variable non définie), jamais une panique.
//! - Symbole inconnu = ignoré (programme inchangé).

use std::collections::HashMap;

use super::erreur::ResultatEval;
use super::eval::evaluer_programme;
use super::format::decrire_programme;
use super::jetons::{depuis_jetons, vers_jetons};
use super::op::{operations_connues, Op};

#[derive(Clone, Debug)]
pub struct Cerveau {
    programme: Vec<Op>,
    connues: HashMap<String, Op>,
    variables: HashMap<String, f64>,
}

impl Default for Cerveau {
    fn default() -> Self {
        Self::new()
    }
}

impl Cerveau {
    pub fn new() -> Self {
        Self {
            programme: Vec::new(),
            connues: operations_connues(),
            variables: HashMap::new(),
        }
    }

    /* ------------------------ Empilements ------------------------ */

    pub fn push_operand(&mut self, valeur: f64) -> Option<f64> {
        self.programme.push(Op::Operande(valeur));
        self.evaluate()
    }

    /// Empile la variable `nom`, puis réévalue.
    ///
    /// Un nom qui se relirait autrement dans la transcription (symbole connu
    /// comme "π", ou nombre comme "3") est refusé : programme inchangé.
    pub fn push_variable(&mut self, nom: impl Into<String>) -> Option<f64> {
        let nom = nom.into();
        if self.connues.contains_key(&nom) || nom.parse::<f64>().is_ok() {
            log::debug!("nom de variable refusé : {nom:?}");
            return self.evaluate();
        }
        self.programme.push(Op::Variable(nom));
        self.evaluate()
    }

    /// Empile l’opération `symbole` si elle est connue, puis réévalue.
    pub fn perform_operation(&mut self, symbole: &str) -> Option<f64> {
        match self.connues.get(symbole) {
            Some(op) => self.programme.push(op.clone()),
            None => log::debug!("opération inconnue ignorée : {symbole:?}"),
        }
        self.evaluate()
    }

    /// Retire le dernier élément (s’il y en a un), puis réévalue.
    pub fn undo(&mut self) -> Option<f64> {
        self.programme.pop();
        self.evaluate()
    }

    /// Vide le programme. Les variables restent (à l’appelant de décider).
    pub fn clear(&mut self) {
        self.programme.clear();
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn evaluate(&self) -> Option<f64> {
        self.try_evaluate().ok()
    }

    /// Comme `evaluate`, mais dit pourquoi il n’y a pas de résultat.
    pub fn try_evaluate(&self) -> ResultatEval<f64> {
        evaluer_programme(&self.programme, &self.variables)
    }

    /// Historique infix (ex: "(3+4)×2=").
    pub fn description(&self) -> String {
        decrire_programme(&self.programme)
    }

    /* ------------------------ Transcription ------------------------ */

    pub fn program(&self) -> Vec<String> {
        vers_jetons(&self.programme)
    }

    /// Remplace le programme ; jetons illisibles abandonnés.
    pub fn set_program<I, S>(&mut self, jetons: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.programme = depuis_jetons(jetons, &self.connues);
    }

    /* ------------------------ Variables ------------------------ */

    pub fn variable_values(&self) -> &HashMap<String, f64> {
        &self.variables
    }

    pub fn variable_values_mut(&mut self) -> &mut HashMap<String, f64> {
        &mut self.variables
    }

    pub fn set_variable(&mut self, nom: impl Into<String>, valeur: f64) {
        self.variables.insert(nom.into(), valeur);
    }
}
