//! BMI calculator desktop application UI.
//!
//! # Design Notes
//! - Every edit goes through the action queue; the readout is recomputed from
//!   the current field text after each action.
//! - Animations are advanced once per frame from `stable_dt`, and a repaint is
//!   only scheduled while one is running.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};

use crate::{
    action::{self, ActionRequestQueue},
    animation_driver,
    state::{AppState, Settings, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct BmiCalculatorApp {
    app_state: AppState,
    ui_state: UiState,
}

impl BmiCalculatorApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        ui::theme::apply(&cc.egui_ctx);
        let settings = Settings::default();
        let ui_state = UiState::new(&settings);
        log::info!("BMI calculator {}", ui_state.version);
        Self {
            app_state: AppState::new(settings),
            ui_state,
        }
    }
}

impl App for BmiCalculatorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        let elapsed = animation_driver::frame_elapsed(ctx.input(|i| i.stable_dt));
        self.ui_state.driver.update(elapsed);

        let screen_vm =
            view_model_builder::build_calculator_screen_vm(&self.app_state, &self.ui_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::calculator_screen::show(ui, &screen_vm, &mut action_queue);
        });

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        if let Some(delay) = self.ui_state.driver.next_wakeup() {
            ctx.request_repaint_after(delay);
        }
    }
}
