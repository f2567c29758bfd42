// src/application/services.rs
use std::sync::Arc;

use crate::{application::steps::StepMatchService, domain::finder::DocumentParser};

pub struct ApplicationServices {
    pub step_matches: Arc<StepMatchService>,
}

impl ApplicationServices {
    pub fn new(parser: Arc<dyn DocumentParser>) -> Self {
        Self {
            step_matches: Arc::new(StepMatchService::new(parser)),
        }
    }
}
