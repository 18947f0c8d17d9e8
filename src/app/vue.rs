// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Une ligne d’entrée, un bouton "Evaluate", une ligne résultat
// - Clavier : Enter évalue (quand le champ vient de perdre le focus sur Enter)
// - Tactile : petit pavé, focus redonné après clic (focus_entree)
// - Erreur affichée sous l’entrée, message du noyau tel quel

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_entree(ui);

        ui.add_space(6.0);
        ui.monospace(self.resultat.as_str());

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let largeur = (ui.available_width() - 2.0 * 56.0 - 100.0 - 24.0).max(120.0);
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.entree)
                    .desired_width(largeur)
                    .hint_text("Ex: (2 + 3) * 4 / -0.5")
                    .code_editor(),
            );

            if self.focus_entree {
                resp.request_focus();
                self.focus_entree = false;
            }

            // Un TextEdit singleline rend le focus sur Enter.
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if resp.lost_focus() && enter {
                self.evaluer_entree();
            }

            let eval = ui.add_sized([100.0, 30.0], egui::Button::new("Evaluate"));
            if eval.clicked() {
                self.evaluer_entree();
            }

            self.bouton_action(ui, "C", "Clear the input", Action::ClearEntree);
            self.bouton_action(ui, "AC", "Clear everything", Action::ResetTotal);
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_decimal")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [
                    ["7", "8", "9", "/", "("],
                    ["4", "5", "6", "*", ")"],
                    ["1", "2", "3", "-", "."],
                    ["0", "", "", "+", ""],
                ] {
                    for touche in ligne {
                        if touche.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton_insert(ui, touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, touche: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(touche));
        if !resp.clicked() {
            return;
        }

        // opérateurs binaires aérés, chiffres et parenthèses collés
        if matches!(touche, "+" | "-" | "*" | "/") {
            while self.entree.ends_with(' ') {
                self.entree.pop();
            }
            if !self.entree.is_empty() {
                self.entree.push(' ');
            }
            self.entree.push_str(touche);
            self.entree.push(' ');
        } else {
            self.entree.push_str(touche);
        }

        self.focus_entree = true;
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat ou erreur dans l’état UI.
    ///
    /// Entrée vide (longueur 0) : ligne résultat remise à l’étiquette, sans évaluation.
    /// Une entrée faite seulement de blancs, elle, est évaluée (=> "Expected number").
    pub(crate) fn evaluer_entree(&mut self) {
        if self.entree.is_empty() {
            tracing::debug!(target: "eval", "entrée vide, résultat effacé");
            self.clear_resultat();
            return;
        }

        match crate::noyau::eval_expression(&self.entree) {
            Ok(valeur) => {
                tracing::debug!(target: "eval", entree = %self.entree, %valeur, "évaluation réussie");
                self.set_resultat(&valeur);
            }
            Err(erreur) => {
                tracing::debug!(
                    target: "eval",
                    entree = %self.entree,
                    position = erreur.position(),
                    %erreur,
                    "évaluation refusée"
                );
                self.set_erreur(erreur.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
}
