//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, saisie en cours, historique)
//! et relayer les boutons vers le cerveau, sans logique d’affichage egui.
//!
//! Contrats :
//! - Les libellés de boutons sont transmis tels quels au cerveau.
//! - `historique` reflète toujours `Cerveau::description()`.
//! - Pas de résultat => affichage vide + message dans `erreur`.

use crate::noyau::Cerveau;

/// Nom de la variable “mémoire” (boutons M et →M).
pub const NOM_MEMOIRE: &str = "M";

/// Affichage au démarrage / après AC.
const AFFICHAGE_ZERO: &str = "0";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- cerveau RPN ---
    pub cerveau: Cerveau,

    // --- sorties ---
    pub affichage: String,  // texte affiché (vide = pas de valeur)
    pub historique: String, // miroir de cerveau.description()
    pub erreur: String,     // pourquoi il n’y a pas de résultat

    // --- saisie ---
    pub en_saisie: bool, // l’utilisateur tape un nombre

    // --- programme mis de côté (mémoire vive seulement) ---
    pub programme_sauve: Option<Vec<String>>,
}

impl Default for AppCalc {
    fn default() -> Self {
        let cerveau = Cerveau::new();
        let historique = cerveau.description();
        Self {
            cerveau,
            affichage: AFFICHAGE_ZERO.to_string(),
            historique,
            erreur: String::new(),
            en_saisie: false,
            programme_sauve: None,
        }
    }
}

impl AppCalc {
    /* ------------------------ Affichage ------------------------ */

    /// Valeur lue sur l’affichage (None si illisible ou vide).
    pub fn valeur_affichee(&self) -> Option<f64> {
        self.affichage.trim().parse::<f64>().ok()
    }

    /// Dépose un résultat (None => affichage vide). Termine la saisie.
    pub fn set_valeur_affichee(&mut self, valeur: Option<f64>) {
        match valeur {
            Some(v) => self.affichage = format!("{v}"),
            None => self.affichage.clear(),
        }
        self.en_saisie = false;
    }

    fn maj_historique(&mut self) {
        self.historique = self.cerveau.description();
        self.erreur = match self.cerveau.try_evaluate() {
            Ok(_) => String::new(),
            Err(e) => e.to_string(),
        };
    }

    fn afficher(&mut self, valeur: Option<f64>) {
        self.set_valeur_affichee(valeur);
        self.maj_historique();
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn ajouter_chiffre(&mut self, chiffre: &str) {
        if self.en_saisie {
            self.affichage.push_str(chiffre);
        } else {
            self.affichage = chiffre.to_string();
            self.en_saisie = true;
        }
    }

    /// Séparateur décimal : une seule fois par nombre ; "0." si on commence.
    pub fn ajouter_decimale(&mut self, separateur: &str) {
        if self.en_saisie {
            if !self.affichage.contains(separateur) {
                self.affichage.push_str(separateur);
            }
        } else {
            self.affichage = format!("{AFFICHAGE_ZERO}{separateur}");
            self.en_saisie = true;
        }
    }

    /// ↵ : empile la valeur affichée (rien si illisible).
    pub fn entrer(&mut self) {
        let Some(v) = self.valeur_affichee() else {
            return;
        };
        let r = self.cerveau.push_operand(v);
        self.afficher(r);
    }

    /// Bouton d’opération (libellé transmis tel quel).
    ///
    /// Pendant la saisie, "±" change seulement le signe du texte.
    pub fn operer(&mut self, symbole: &str) {
        if self.en_saisie {
            if symbole == "±" {
                self.inverser_signe_saisie();
                return;
            }
            self.entrer();
        }
        let r = self.cerveau.perform_operation(symbole);
        self.afficher(r);
    }

    fn inverser_signe_saisie(&mut self) {
        let Some(v) = self.valeur_affichee() else {
            return;
        };
        if let Some(reste) = self.affichage.strip_prefix('-') {
            self.affichage = reste.to_string();
        } else if v != 0.0 {
            self.affichage.insert(0, '-');
        }
    }

    /* ------------------------ Effacement ------------------------ */

    /// C : programme + variables, affichage à zéro.
    pub fn effacer_tout(&mut self) {
        self.cerveau.clear();
        self.cerveau.variable_values_mut().clear();
        self.affichage = AFFICHAGE_ZERO.to_string();
        self.en_saisie = false;
        self.maj_historique();
    }

    /// ⌫ : hors saisie => undo ; en saisie => retire un caractère.
    ///
    /// Un signe seul ("-") n’est pas un nombre : retour à zéro.
    pub fn retour_arriere(&mut self) {
        if !self.en_saisie {
            let r = self.cerveau.undo();
            self.afficher(r);
            return;
        }

        self.affichage.pop();
        if self.affichage.is_empty() || self.affichage == "-" {
            self.affichage = AFFICHAGE_ZERO.to_string();
            self.en_saisie = false;
        }
    }

    /* ------------------------ Mémoire M ------------------------ */

    /// →M : M = valeur affichée, puis réévaluation du programme.
    pub fn memoriser(&mut self) {
        let Some(v) = self.valeur_affichee() else {
            return;
        };
        self.en_saisie = false;
        self.cerveau.set_variable(NOM_MEMOIRE, v);
        let r = self.cerveau.evaluate();
        self.afficher(r);
    }

    /// M : empile la variable M.
    pub fn rappeler_memoire(&mut self) {
        if self.en_saisie {
            self.entrer();
        }
        let r = self.cerveau.push_variable(NOM_MEMOIRE);
        self.afficher(r);
    }

    /* ------------------------ Programme sauvé ------------------------ */

    pub fn sauver_programme(&mut self) {
        let jetons = self.cerveau.program();
        log::debug!("programme sauvé : {jetons:?}");
        self.programme_sauve = Some(jetons);
    }

    /// Recharge le programme sauvé (rien si aucun).
    pub fn restaurer_programme(&mut self) {
        let Some(jetons) = self.programme_sauve.clone() else {
            return;
        };
        self.cerveau.set_program(jetons);
        let r = self.cerveau.evaluate();
        self.afficher(r);
    }
}
