use serde::{Deserialize, Serialize};

/// A single job posting. The collection is static and read-only; fields
/// serialize in declaration order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub category: String,
    pub pay: u32,  // hourly rate in USD
    pub location: String,
    pub country: String,
    pub description: String,
    pub requirements: String,
    pub contact: String,
    pub posted: String,
}
