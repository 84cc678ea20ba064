//! Retailer dashboard route handler.
//!
//! Fetches the retailer list from the upstream backend, computes the
//! per-retailer sales aggregates, and renders them. One fetch per page
//! view; the records are never mutated and nothing is cached.

use askama::Template;
use axum::{extract::State, response::Html};
use rust_decimal::Decimal;
use tracing::instrument;

use fulltoss_core::{Retailer, RetailerStats};

use crate::filters;
use crate::middleware::OptionalOperatorAuth;
use crate::state::AppState;

/// One row of the count-keyed ticket grouping.
#[derive(Debug, Clone)]
pub struct TicketCategoryView {
    /// The ticket count acting as the grouping key.
    pub tickets_sold: u32,
    /// How many ticket entries share that count.
    pub occurrences: u64,
}

/// Retailer card view for the dashboard template.
#[derive(Debug, Clone)]
pub struct RetailerView {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub rating: String,
    pub about: Option<String>,
    pub total_tickets_sold: String,
    pub total_amount: String,
    pub commission: String,
    pub ticket_categories: Vec<TicketCategoryView>,
}

/// Format a monetary amount for display (₹, two decimal places).
fn format_amount(amount: Decimal) -> String {
    format!("₹{amount:.2}")
}

impl From<&Retailer> for RetailerView {
    fn from(retailer: &Retailer) -> Self {
        let stats = RetailerStats::compute(retailer);

        Self {
            name: retailer.name.clone(),
            phone: retailer.phone.to_string(),
            email: retailer.email.clone(),
            address: retailer.address.clone(),
            rating: retailer.rating.clone(),
            about: retailer.about.clone(),
            total_tickets_sold: stats.total_tickets_sold.to_string(),
            total_amount: format_amount(stats.total_amount),
            commission: format_amount(stats.commission),
            ticket_categories: stats
                .ticket_category_count
                .iter()
                .map(|(&tickets_sold, &occurrences)| TicketCategoryView {
                    tickets_sold,
                    occurrences,
                })
                .collect(),
        }
    }
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    /// Phone of the logged-in operator, if any.
    pub operator_phone: Option<String>,
    /// Fetch error display text; mutually exclusive with `retailers`.
    pub error: Option<String>,
    /// Retailer cards with computed stats.
    pub retailers: Vec<RetailerView>,
}

/// Dashboard page handler.
///
/// GET /
#[instrument(skip_all)]
pub async fn dashboard(
    OptionalOperatorAuth(operator): OptionalOperatorAuth,
    State(state): State<AppState>,
) -> Html<String> {
    let (retailers, error) = match state.backend().retailers().await {
        Ok(retailers) => {
            let views: Vec<RetailerView> = retailers.iter().map(RetailerView::from).collect();
            (views, None)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch retailers");
            (vec![], Some(e.to_string()))
        }
    };

    let template = DashboardTemplate {
        operator_phone: operator.map(|op| op.phone.to_string()),
        error,
        retailers,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}
