//! Canonical order message and transport URI.

use super::encoding::encode_component;
use crate::checkout::Order;

/// WhatsApp number orders are sent to. Fixed business configuration,
/// never derived from user input.
pub const DESTINATION_PHONE: &str = "573007664729";

/// Build a `wa.me` chat URI carrying a pre-filled message.
pub fn chat_url(phone: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, encode_component(text))
}

/// The rendered outbound order: message text plus the URI that opens it
/// in the messaging client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage {
    /// Human-readable message text.
    pub text: String,
    /// `wa.me` URI with the text percent-encoded into the query.
    pub url: String,
}

impl OrderMessage {
    /// Render the canonical message for a placed order.
    ///
    /// Pure: everything comes from the order snapshot, so the output is
    /// stable no matter when it is called. Field order and presence rules
    /// are a format contract with the people reading these messages —
    /// change them only together with the fixtures.
    pub fn render(order: &Order) -> Self {
        let details = &order.details;
        let mut text = String::new();

        text.push_str("*🍗 NUEVO PEDIDO - GRANJA LOS POMOS 🍗*\n");
        text.push_str(&format!(
            "📅 Fecha: {}\n",
            order.placed_at.format("%d/%m/%y, %H:%M")
        ));
        text.push_str(&format!("🆔 Orden: #{}\n\n", order.id));

        text.push_str("*👤 DATOS DEL CLIENTE:*\n");
        text.push_str(&format!("Nombre: {}\n", details.name));
        text.push_str(&format!("Teléfono: {}\n", details.phone));
        text.push_str(&format!("Barrio: {}\n", details.neighborhood));
        text.push_str(&format!("Dirección: {}\n", details.address));
        text.push_str(&format!(
            "Pago: {}\n",
            details.payment_method.as_str().to_uppercase()
        ));
        if details.has_notes() {
            text.push_str(&format!("Notas: {}\n", details.notes));
        }
        if details.payment_method.requires_receipt() {
            text.push_str(
                "\n⚠️ *NOTA:* Adjuntaré el comprobante de pago de Nequi a este chat.",
            );
        }

        text.push_str("\n*🛒 DETALLE DEL PEDIDO:*\n");
        let item_lines: Vec<String> = order
            .lines
            .iter()
            .map(|l| format!("▪️ {}x {} (${})", l.quantity, l.name, l.subtotal.grouped()))
            .collect();
        text.push_str(&item_lines.join("\n"));
        text.push_str("\n\n");

        text.push_str(&format!("*💰 TOTAL A PAGAR: ${}*", order.total.grouped()));

        let url = chat_url(DESTINATION_PHONE, &text);
        Self { text, url }
    }
}
