use egui::Context;

/// An application the platform layer can host: draws itself once per frame.
pub trait UiApp {
    fn ui(&mut self, ctx: &Context);

    fn title(&self) -> &str {
        "numfield"
    }
}
