//! Ticket record types

use serde::{Deserialize, Serialize};

/// One support ticket row as it appears in the source table.
///
/// Column names mirror the export headers. Cells that may be blank are
/// optional or kept as raw strings; timestamp strings are parsed leniently
/// downstream so a bad cell never fails the load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRecord {
    #[serde(rename = "Ticket ID", default)]
    pub ticket_id: Option<u64>,
    #[serde(rename = "Ticket Type")]
    pub ticket_type: String,
    #[serde(rename = "Ticket Description", default)]
    pub description: String,
    #[serde(rename = "First Response Time", default)]
    pub first_response_time: String,
    #[serde(rename = "Time to Resolution", default)]
    pub time_to_resolution: String,
    #[serde(rename = "Customer Satisfaction Rating", default)]
    pub satisfaction_rating: Option<f64>,
}
