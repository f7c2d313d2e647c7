//! Tests scientifiques (campagne) : propriétés du cerveau RPN.
//!
//! Notes :
//! - Toutes les séquences passent par l’API publique (push/perform/undo/clear).
//! - Les comparaisons flottantes utilisent une tolérance quand une fonction
//!   transcendante est en jeu (sin, cos, √, π).

use super::format::MARQUEUR_VIDE;
use super::Cerveau;

/// Rejoue une séquence de boutons : nombre => operand, sinon => opération.
fn rejouer(jetons: &[&str]) -> Cerveau {
    let mut c = Cerveau::new();
    for s in jetons {
        if let Ok(v) = s.parse::<f64>() {
            c.push_operand(v);
        } else {
            c.perform_operation(s);
        }
    }
    c
}

fn assert_proche(obtenu: Option<f64>, attendu: f64, ctx: &[&str]) {
    let v = obtenu.unwrap_or_else(|| panic!("pas de résultat pour {ctx:?}"));
    assert!(
        (v - attendu).abs() < 1e-9,
        "{ctx:?}: obtenu {v}, attendu {attendu}"
    );
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn sci_arithmetique_de_base() {
    assert_eq!(rejouer(&["3", "4", "+"]).evaluate(), Some(7.0));
    assert_eq!(rejouer(&["8", "2", "÷"]).evaluate(), Some(4.0));
    assert_eq!(rejouer(&["10", "3", "-"]).evaluate(), Some(7.0));
    assert_eq!(rejouer(&["6", "7", "×"]).evaluate(), Some(42.0));
}

#[test]
fn sci_non_commutativite_preservee() {
    // a b - = a - b ; a b ÷ = a / b
    for (a, b) in [(1.0, 2.0), (-3.0, 5.0), (10.0, 0.5)] {
        let mut c = Cerveau::new();
        c.push_operand(a);
        c.push_operand(b);
        assert_eq!(c.perform_operation("-"), Some(a - b));
        c.clear();
        c.push_operand(a);
        c.push_operand(b);
        assert_eq!(c.perform_operation("÷"), Some(a / b));
    }
}

#[test]
fn sci_division_par_zero_ieee() {
    // pas d’erreur : IEEE-754 (inf)
    let v = rejouer(&["1", "0", "÷"]).evaluate().unwrap();
    assert!(v.is_infinite());
}

/* ------------------------ Unaires / constantes ------------------------ */

#[test]
fn sci_unaires() {
    assert_proche(rejouer(&["16", "√"]).evaluate(), 4.0, &["16", "√"]);
    assert_proche(rejouer(&["π", "sin"]).evaluate(), 0.0, &["π", "sin"]);
    assert_proche(rejouer(&["π", "cos"]).evaluate(), -1.0, &["π", "cos"]);
    assert_eq!(rejouer(&["5", "±"]).evaluate(), Some(-5.0));
    assert_eq!(rejouer(&["5", "±", "±"]).evaluate(), Some(5.0));
}

#[test]
fn sci_racine_negative_nan() {
    let v = rejouer(&["4", "±", "√"]).evaluate().unwrap();
    assert!(v.is_nan());
}

#[test]
fn sci_pi_comme_operande() {
    assert_proche(
        rejouer(&["2", "π", "×"]).evaluate(),
        std::f64::consts::TAU,
        &["2", "π", "×"],
    );
}

/* ------------------------ Historique ------------------------ */

#[test]
fn sci_historique_parentheses_minimales() {
    assert_eq!(rejouer(&["3", "4", "+", "2", "×"]).description(), "(3+4)×2=");
    assert_eq!(rejouer(&["3", "4", "×", "2", "+"]).description(), "3×4+2=");
    assert_eq!(rejouer(&["1", "2", "+", "3", "4", "+", "×"]).description(), "(1+2)×(3+4)=");
    assert_eq!(rejouer(&["1", "2", "×", "3", "4", "×", "+"]).description(), "1×2+3×4=");
    assert_eq!(rejouer(&["2", "3", "4", "×", "×"]).description(), "2×3×4=");
    assert_eq!(rejouer(&["1", "2", "3", "+", "+"]).description(), "1+2+3=");
    assert_eq!(rejouer(&["3", "4", "5", "-", "-"]).description(), "3-(4-5)=");
}

#[test]
fn sci_historique_etapes() {
    let mut c = Cerveau::new();
    assert_eq!(c.description(), MARQUEUR_VIDE);
    c.push_operand(3.0);
    assert_eq!(c.description(), "3");
    c.push_operand(5.0);
    assert_eq!(c.description(), "3, 5");
    c.perform_operation("+");
    assert_eq!(c.description(), "3+5=");
    c.perform_operation("√");
    assert_eq!(c.description(), "√(3+5)=");
    c.push_variable("M");
    assert_eq!(c.description(), "√(3+5), M");
    c.perform_operation("×");
    assert_eq!(c.description(), "√(3+5)×M=");
}

/* ------------------------ Undo / clear ------------------------ */

#[test]
fn sci_undo_remonte_le_temps() {
    let mut c = Cerveau::new();
    c.push_operand(5.0);
    c.perform_operation("√");
    assert_eq!(c.undo(), Some(5.0));
    assert_eq!(c.undo(), None);
    assert_eq!(c.undo(), None);
    assert_eq!(c.description(), MARQUEUR_VIDE);
}

#[test]
fn sci_clear_puis_reprise() {
    let mut c = rejouer(&["1", "2", "+"]);
    c.clear();
    assert_eq!(c.evaluate(), None);
    assert_eq!(c.push_operand(4.0), Some(4.0));
    assert_eq!(c.description(), "4");
}

/* ------------------------ Variables ------------------------ */

#[test]
fn sci_variable_liaison_tardive() {
    let mut c = Cerveau::new();
    c.push_variable("x");
    c.push_operand(2.0);
    assert_eq!(c.perform_operation("×"), None);

    c.set_variable("x", 9.0);
    assert_eq!(c.evaluate(), Some(18.0));

    c.set_variable("x", -1.0);
    assert_eq!(c.evaluate(), Some(-2.0));
}

#[test]
fn sci_variable_perdue_par_transcription() {
    // la transcription n’accepte que table + nombres
    let mut c = Cerveau::new();
    c.set_variable("x", 9.0);
    c.push_variable("x");
    c.push_operand(1.0);
    c.perform_operation("+");
    assert_eq!(c.evaluate(), Some(10.0));

    let t = c.program();
    assert_eq!(t, vec!["x", "1", "+"]);

    let mut d = Cerveau::new();
    d.set_program(t);
    assert_eq!(d.program(), vec!["1", "+"]);
    assert_eq!(d.evaluate(), None);
}
