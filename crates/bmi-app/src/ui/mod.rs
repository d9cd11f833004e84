pub(crate) mod calculator_screen;
pub(crate) mod info_panel;
pub(crate) mod input;
pub(crate) mod input_form;
pub(crate) mod meter;
pub(crate) mod result_panel;
pub(crate) mod settings_panel;
pub(crate) mod theme;
