use serde::{Deserialize, Serialize};

/// Order lifecycle stage
///
/// Wire values are the upper snake case codes used by the storefront
/// (`EM_ESPERA`, `EM_ANDAMENTO`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed, waiting for the shop to pick it up
    EmEspera,
    /// Being worked on
    EmAndamento,
    /// Approved by the shop
    Aprovado,
    /// Payment confirmed
    Pago,
    /// Picked and shipped
    Separado,
    /// Delivered / closed
    Finalizado,
    /// Cancelled, excluded from revenue and item totals
    Cancelado,
}

impl OrderStatus {
    /// Every status, in lifecycle order
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::EmEspera,
        OrderStatus::EmAndamento,
        OrderStatus::Aprovado,
        OrderStatus::Pago,
        OrderStatus::Separado,
        OrderStatus::Finalizado,
        OrderStatus::Cancelado,
    ];

    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Cancelado)
    }

    /// Wire code
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::EmEspera => "EM_ESPERA",
            OrderStatus::EmAndamento => "EM_ANDAMENTO",
            OrderStatus::Aprovado => "APROVADO",
            OrderStatus::Pago => "PAGO",
            OrderStatus::Separado => "SEPARADO",
            OrderStatus::Finalizado => "FINALIZADO",
            OrderStatus::Cancelado => "CANCELADO",
        }
    }

    /// Label shown on the status breakdown cards
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::EmEspera => "Em Espera",
            OrderStatus::EmAndamento => "Em Andamento",
            OrderStatus::Aprovado => "Aprovado",
            OrderStatus::Pago => "Pago",
            OrderStatus::Separado => "Separado/Enviado",
            OrderStatus::Finalizado => "Finalizado",
            OrderStatus::Cancelado => "Cancelado",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        OrderStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid order status: {}", s))
    }
}
