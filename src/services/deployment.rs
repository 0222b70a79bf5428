//! Process-wide deployment mode flag
//!
//! Set once at startup from the config, read synchronously wherever an
//! editor is created.

use crate::model::DeploymentMode;
use std::sync::atomic::{AtomicBool, Ordering};

static SERVERLESS: AtomicBool = AtomicBool::new(false);

/// Record whether the cluster is a Serverless deployment
pub fn set_serverless(serverless: bool) {
    SERVERLESS.store(serverless, Ordering::Relaxed);
    tracing::info!("Deployment mode: {:?}", current_mode());
}

pub fn is_serverless() -> bool {
    SERVERLESS.load(Ordering::Relaxed)
}

/// The current flag as a [`DeploymentMode`]
pub fn current_mode() -> DeploymentMode {
    if is_serverless() {
        DeploymentMode::Serverless
    } else {
        DeploymentMode::Standard
    }
}
