use app_api::UiApp;
use egui::{CentralPanel, Context, Grid};
use gfx::NumberTextField;
use input_core::{Binding, FieldOptions, NumberField};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Order {
    pub quantity: i64,
    pub unit_price: f64,
    /// Percent off.
    pub discount: f32,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.unit_price * (1.0 - f64::from(self.discount) / 100.0)
    }
}

/// An order form: three number fields bound to one shared [`Order`].
pub struct NumberFormApp {
    order: Rc<RefCell<Order>>,
    quantity: NumberField,
    unit_price: NumberField,
    discount: NumberField,
}

impl NumberFormApp {
    pub fn new() -> Self {
        Self::with_order(Order {
            quantity: 1,
            ..Order::default()
        })
    }

    pub fn with_order(order: Order) -> Self {
        let order = Rc::new(RefCell::new(order));

        let quantity = NumberField::new(
            bind(&order, |o| o.quantity, |o, v| o.quantity = v),
            "Quantity",
            true,
        );
        let unit_price = NumberField::new(
            bind(&order, |o| o.unit_price, |o, v| o.unit_price = v),
            "Unit price",
            true,
        );
        let discount = NumberField::with_options(
            bind(&order, |o| o.discount, |o, v| o.discount = v),
            FieldOptions {
                start_blank_if_zero: false,
                ..FieldOptions::default()
            },
        );

        Self {
            order,
            quantity,
            unit_price,
            discount,
        }
    }

    pub fn order(&self) -> Order {
        *self.order.borrow()
    }
}

impl Default for NumberFormApp {
    fn default() -> Self {
        Self::new()
    }
}

fn bind<T: Copy + 'static>(
    order: &Rc<RefCell<Order>>,
    get: fn(&Order) -> T,
    set: fn(&mut Order, T),
) -> Binding<T> {
    let reader = Rc::clone(order);
    let writer = Rc::clone(order);
    Binding::new(
        move || get(&reader.borrow()),
        move |value| set(&mut writer.borrow_mut(), value),
    )
}

impl UiApp for NumberFormApp {
    fn ui(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Order");

            Grid::new("order_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Quantity");
                    ui.add(NumberTextField::new(&mut self.quantity, "quantity"));
                    ui.end_row();

                    ui.label("Unit price");
                    ui.add(NumberTextField::new(&mut self.unit_price, "unit_price"));
                    ui.end_row();

                    ui.label("Discount %");
                    ui.add(NumberTextField::new(&mut self.discount, "discount"));
                    ui.end_row();
                });

            ui.separator();
            let order = self.order();
            ui.label(format!("Total: {:.2}", order.total()));

            ui.horizontal(|ui| {
                if ui.button("Double price").clicked() {
                    self.order.borrow_mut().unit_price *= 2.0;
                    log::info!(target: "numfield.demo", "unit price doubled to {}", self.order().unit_price);
                }
                if ui.button("Reset").clicked() {
                    *self.order.borrow_mut() = Order::default();
                    log::info!(target: "numfield.demo", "order reset");
                }
            });
        });
    }

    fn title(&self) -> &str {
        "Number Entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Pos2, RawInput, Rect, Vec2};

    fn raw_input() -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(
                Pos2::new(0.0, 0.0),
                Vec2::new(800.0, 600.0),
            )),
            ..Default::default()
        }
    }

    fn run_frame(ctx: &Context, app: &mut NumberFormApp) {
        ctx.run(raw_input(), |ctx| app.ui(ctx));
    }

    #[test]
    fn total_applies_discount() {
        let order = Order {
            quantity: 3,
            unit_price: 2.5,
            discount: 10.0,
        };
        assert!((order.total() - 6.75).abs() < 1e-9);
    }

    #[test]
    fn fields_start_from_the_order() {
        let app = NumberFormApp::new();
        assert_eq!(app.quantity.display_text(), "1");
        assert_eq!(app.unit_price.display_text(), "");
        assert_eq!(app.unit_price.placeholder(), "Unit price");
        assert_eq!(app.discount.display_text(), "0");
        assert_eq!(app.discount.placeholder(), "Number Entry");
    }

    #[test]
    fn outside_changes_show_up_next_frame() {
        let ctx = Context::default();
        let mut app = NumberFormApp::with_order(Order {
            quantity: 2,
            unit_price: 2.5,
            discount: 0.0,
        });
        run_frame(&ctx, &mut app);
        assert_eq!(app.unit_price.display_text(), "2.5");

        app.order.borrow_mut().unit_price *= 2.0;
        run_frame(&ctx, &mut app);
        assert_eq!(app.unit_price.display_text(), "5");

        *app.order.borrow_mut() = Order::default();
        run_frame(&ctx, &mut app);
        assert_eq!(app.quantity.display_text(), "0");
        assert_eq!(app.unit_price.display_text(), "0");
        assert_eq!(app.discount.display_text(), "0");
    }

    #[test]
    fn field_commits_write_through_to_the_order() {
        let mut app = NumberFormApp::new();
        assert!(app.quantity.should_change_characters(
            input_core::EditRange::insertion(1),
            "2",
            Some(input_core::SelectionRange::caret(1)),
        ));
        assert_eq!(app.order().quantity, 1);

        let ctx = Context::default();
        run_frame(&ctx, &mut app);
        assert_eq!(app.order().quantity, 12);
        assert_eq!(app.quantity.display_text(), "12");
    }
}
