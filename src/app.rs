//! Shared application state and route table

use std::sync::Arc;

use actix_web::web;

use crate::config::PaymentConfig;
use crate::core::{Clock, SystemClock};
use crate::middleware::{json_config, query_config};
use crate::modules::agent_dashboard::{sample_guided_trips, GuidedTripSummary};
use crate::modules::payment_history::{sample_payment_history, PaymentRecord};
use crate::modules::payments::PaymentScheduler;
use crate::modules::settlements::SettlementLedger;
use crate::modules::tips::TipService;
use crate::modules::trips::{sample_trips, Trip};
use crate::modules::{
    agent_dashboard, health, payment_history, payments, settlements, tips, trips,
};

/// State handed to every handler.
///
/// Catalogs are read-only; nothing is persisted between requests.
pub struct AppState {
    pub payments: PaymentConfig,
    pub clock: Arc<dyn Clock>,
    pub trips: Vec<Trip>,
    pub payment_history: Vec<PaymentRecord>,
    pub guided_trips: Vec<GuidedTripSummary>,
}

impl AppState {
    pub fn new(payments: PaymentConfig) -> Self {
        Self {
            payments,
            clock: Arc::new(SystemClock),
            trips: sample_trips(),
            payment_history: sample_payment_history(),
            guided_trips: sample_guided_trips(),
        }
    }

    /// Replace the wall clock, e.g. with a `FixedClock` in tests
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn scheduler(&self) -> PaymentScheduler {
        PaymentScheduler::new(self.payments.currency).with_max_term(self.payments.max_term_months)
    }

    pub fn ledger(&self) -> SettlementLedger {
        SettlementLedger::new(self.payments.currency)
    }

    pub fn tips(&self) -> TipService {
        TipService::new(self.payments.currency)
    }
}

/// Register every route. `AppState` must be added as app data by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .configure(health::configure)
        .service(
            web::scope("/v1")
                .configure(payments::controllers::configure)
                .configure(settlements::controllers::configure)
                .configure(tips::controllers::configure)
                .configure(trips::controllers::configure)
                .configure(payment_history::controllers::configure)
                .configure(agent_dashboard::controllers::configure),
        );
}
