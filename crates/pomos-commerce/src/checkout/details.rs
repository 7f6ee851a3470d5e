//! Customer details collected during checkout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the customer pays for the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[default]
    Efectivo,
    /// Bank transfer.
    Transferencia,
    /// Nequi / Daviplata mobile wallet.
    Nequi,
}

impl PaymentMethod {
    /// Get the method as its lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Efectivo => "efectivo",
            PaymentMethod::Transferencia => "transferencia",
            PaymentMethod::Nequi => "nequi",
        }
    }

    /// Parse from the wire form.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "efectivo" => Some(PaymentMethod::Efectivo),
            "transferencia" => Some(PaymentMethod::Transferencia),
            "nequi" => Some(PaymentMethod::Nequi),
            _ => None,
        }
    }

    /// Whether this method requires the customer to send a payment
    /// receipt to the chat.
    pub fn requires_receipt(&self) -> bool {
        matches!(self, PaymentMethod::Nequi)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A required checkout field.
///
/// Used for field-level validation feedback: submission reports exactly
/// which of these are still empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetailField {
    Name,
    Phone,
    Neighborhood,
    Address,
}

impl DetailField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailField::Name => "name",
            DetailField::Phone => "phone",
            DetailField::Neighborhood => "neighborhood",
            DetailField::Address => "address",
        }
    }
}

impl fmt::Display for DetailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Delivery and payment details, filled in field by field while the
/// checkout form is open and read once at submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomerDetails {
    /// Customer full name.
    pub name: String,
    /// Contact phone / WhatsApp number.
    pub phone: String,
    /// Exact delivery address.
    pub address: String,
    /// Neighborhood (barrio) for delivery routing.
    pub neighborhood: String,
    /// Free-text delivery notes, optional.
    pub notes: String,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
}

impl CustomerDetails {
    /// Empty form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Which required fields are still empty.
    pub fn missing_fields(&self) -> Vec<DetailField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(DetailField::Name);
        }
        if self.phone.trim().is_empty() {
            missing.push(DetailField::Phone);
        }
        if self.neighborhood.trim().is_empty() {
            missing.push(DetailField::Neighborhood);
        }
        if self.address.trim().is_empty() {
            missing.push(DetailField::Address);
        }
        missing
    }

    /// Check that every required field is non-empty. Notes stay optional.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Whether the optional notes field carries any text.
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}
